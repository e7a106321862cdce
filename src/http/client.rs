//! reqwest 客户端封装
//! One client pair per run; dropping it releases the connection pools.
//! Page fetches follow redirects by hand so every hop's headers are captured.

use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::{redirect, Client};
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::{FetchedPage, PageFetcher, ResourceProbe};
use crate::config::GlobalConfig;
use crate::error::{BopResult, BopalyzerError};
use crate::utils::HeaderConverter;

/// HTTP 协作者：页面抓取 + HEAD 探测
#[derive(Debug, Clone)]
pub struct HttpClient {
    // 页面抓取：不自动跳转
    page_client: Client,
    // HEAD 探测：自动跳转
    head_client: Client,
    probe_timeout: Duration,
    max_redirects: usize,
}

impl HttpClient {
    pub fn new(config: &GlobalConfig) -> BopResult<Self> {
        let page_client = Client::builder()
            .timeout(config.fetch_timeout)
            .redirect(redirect::Policy::none())
            .user_agent(config.user_agent.clone())
            .build()?;
        let head_client = Client::builder()
            .timeout(config.fetch_timeout)
            .redirect(redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            page_client,
            head_client,
            probe_timeout: config.probe_timeout,
            max_redirects: config.max_redirects,
        })
    }

    fn parse_target(url: &str) -> BopResult<Url> {
        Self::check_scheme(Url::parse(url)?)
    }

    fn check_scheme(url: Url) -> BopResult<Url> {
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(BopalyzerError::InvalidInput(format!(
                "unsupported scheme '{}' in {}",
                other, url
            ))),
        }
    }

    /// Next hop for a redirect response, resolved against the current URL.
    /// `None` when the response is final.
    fn redirect_target(current: &Url, response: &reqwest::Response) -> BopResult<Option<Url>> {
        if !response.status().is_redirection() {
            return Ok(None);
        }
        let Some(location) = response.headers().get(LOCATION) else {
            return Ok(None);
        };

        let location = String::from_utf8_lossy(location.as_bytes());
        let next = current.join(location.trim())?;
        Self::check_scheme(next).map(Some)
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch(&self, url: &str, capture_headers: bool) -> BopResult<FetchedPage> {
        let mut current = Self::parse_target(url)?;
        let mut raw_headers = String::new();

        for _ in 0..=self.max_redirects {
            let response = self.page_client.get(current.clone()).send().await?;
            debug!("fetched {} ({})", current, response.status());

            if capture_headers {
                // 每一跳：状态行 + header 行 + 空行，后出现的同名 header 覆盖前者
                raw_headers.push_str(&format!("{:?} {}\r\n", response.version(), response.status()));
                raw_headers.push_str(&HeaderConverter::to_raw_block(response.headers()));
                raw_headers.push_str("\r\n");
            }

            match Self::redirect_target(&current, &response)? {
                Some(next) => current = next,
                None => {
                    let body = response.text().await?;
                    return Ok(FetchedPage {
                        body,
                        raw_headers: capture_headers.then_some(raw_headers),
                    });
                }
            }
        }

        Err(BopalyzerError::TooManyRedirects(format!(
            "{} exceeded {} redirects",
            url, self.max_redirects
        )))
    }
}

#[async_trait]
impl ResourceProbe for HttpClient {
    async fn is_reachable(&self, url: &str) -> bool {
        let Ok(target) = Self::parse_target(url) else {
            debug!("probe skipped, invalid url: {}", url);
            return false;
        };

        match self.head_client.head(target).timeout(self.probe_timeout).send().await {
            Ok(response) => {
                debug!("probe {} -> {}", url, response.status());
                response.status().is_success()
            }
            Err(e) => {
                debug!("probe {} failed: {}", url, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_rejects_non_http_schemes() {
        assert!(HttpClient::parse_target("https://example.com/").is_ok());
        assert!(matches!(
            HttpClient::parse_target("ftp://example.com/"),
            Err(BopalyzerError::InvalidInput(_))
        ));
        assert!(matches!(
            HttpClient::parse_target("not a url"),
            Err(BopalyzerError::UrlError(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_not_an_error_for_probes() {
        let config = crate::config::ConfigManager::custom()
            .probe_timeout(Duration::from_millis(500))
            .build();
        let client = HttpClient::new(&config).unwrap();

        // 端口 1 通常无监听，连接立即被拒绝
        assert!(!client.is_reachable("http://127.0.0.1:1/wp-login.php").await);
        assert!(!client.is_reachable("::bad::").await);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_reported() {
        let config = crate::config::ConfigManager::custom()
            .fetch_timeout(Duration::from_millis(500))
            .build();
        let client = HttpClient::new(&config).unwrap();

        let err = client.fetch("http://127.0.0.1:1/", true).await.unwrap_err();
        assert!(matches!(err, BopalyzerError::HttpError(_)));
    }
}
