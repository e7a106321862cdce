//! 检测器核心：抓取目标、构建证据、运行检测引擎
use tracing::{debug, error};

use super::engine::DetectionEngine;
use super::evidence::Evidence;
use super::report::DetectionReport;
use crate::compiler::RuleCatalog;
use crate::config::GlobalConfig;
use crate::error::BopResult;
use crate::http::{HttpClient, PageFetcher, ResourceProbe};

/// 技术检测器
///
/// Owns the network collaborators for one run. The HTTP client is released
/// when the detector is dropped, on every exit path.
pub struct TechDetector<C = HttpClient> {
    catalog: &'static RuleCatalog,
    client: C,
}

impl TechDetector<HttpClient> {
    /// 使用内置规则目录与默认 HTTP 客户端创建检测器
    pub fn new(config: &GlobalConfig) -> BopResult<Self> {
        let catalog = super::global::builtin_catalog()?;
        let client = HttpClient::new(config)?;
        Ok(Self::with_client(catalog, client))
    }
}

impl<C> TechDetector<C>
where
    C: PageFetcher + ResourceProbe,
{
    pub fn with_client(catalog: &'static RuleCatalog, client: C) -> Self {
        Self { catalog, client }
    }

    /// Fetches `url` once and runs the whole catalog against it.
    ///
    /// A failed fetch is logged and yields `Ok(None)`: no detection is
    /// attempted and the caller should exit normally.
    pub async fn scan(&self, url: &str) -> BopResult<Option<DetectionReport>> {
        let page = match self.client.fetch(url, true).await {
            Ok(page) => page,
            Err(e) => {
                error!("request failed for {}: {}", url, e);
                return Ok(None);
            }
        };
        debug!("fetched {} bytes of body from {}", page.body.len(), url);

        let evidence = Evidence::from_page(page, url);
        let report = DetectionEngine::new(self.catalog)
            .run(&evidence, &self.client)
            .await;

        Ok(Some(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use crate::error::BopalyzerError;
    use crate::http::FetchedPage;

    /// 模拟网络：固定页面 + 可达路径表
    struct FakeNetwork {
        page: Option<FetchedPage>,
        reachable: Vec<&'static str>,
        probes: Mutex<Vec<String>>,
    }

    impl FakeNetwork {
        fn serving(body: &str, raw_headers: &str, reachable: Vec<&'static str>) -> Self {
            Self {
                page: Some(FetchedPage {
                    body: body.to_string(),
                    raw_headers: Some(raw_headers.to_string()),
                }),
                reachable,
                probes: Mutex::new(Vec::new()),
            }
        }

        fn down() -> Self {
            Self { page: None, reachable: vec![], probes: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl PageFetcher for FakeNetwork {
        async fn fetch(&self, _url: &str, capture_headers: bool) -> BopResult<FetchedPage> {
            assert!(capture_headers);
            self.page
                .clone()
                .ok_or_else(|| BopalyzerError::InvalidInput("connection refused".to_string()))
        }
    }

    #[async_trait]
    impl ResourceProbe for FakeNetwork {
        async fn is_reachable(&self, url: &str) -> bool {
            self.probes.lock().unwrap().push(url.to_string());
            self.reachable.iter().any(|p| url.ends_with(p))
        }
    }

    fn detector(network: FakeNetwork) -> TechDetector<FakeNetwork> {
        TechDetector::with_client(super::super::global::builtin_catalog().unwrap(), network)
    }

    #[tokio::test]
    async fn test_failed_fetch_yields_no_report_and_no_probes() {
        let detector = detector(FakeNetwork::down());

        let report = detector.scan("http://down.test").await.unwrap();
        assert!(report.is_none());
        assert!(detector.client.probes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scan_uses_parsed_headers_and_target_as_base() {
        let detector = detector(FakeNetwork::serving(
            "<html></html>",
            "HTTP/1.1 200 OK\r\nServer: Apache/2.4.57\r\n",
            vec!["/wp-admin/"],
        ));

        let report = detector.scan("http://site.test/").await.unwrap().unwrap();
        assert_eq!(
            report.lines(),
            vec![
                "WordPress (found in file:/wp-admin/)".to_string(),
                "Apache (found in header:server)".to_string(),
            ]
        );
        let probes = detector.client.probes.lock().unwrap();
        assert_eq!(probes[0], "http://site.test/wp-login.php");
    }

    #[tokio::test]
    async fn test_empty_body_still_runs_detection() {
        let detector = detector(FakeNetwork::serving("", "Server: nginx\r\n", vec![]));

        let report = detector.scan("http://site.test").await.unwrap().unwrap();
        assert_eq!(report.lines(), vec!["Nginx (found in header:server)".to_string()]);
    }
}
