//! 证据存储：一次抓取得到的可观测信号（只读）

use std::collections::HashMap;

use crate::http::FetchedPage;
use crate::utils::HeaderConverter;

/// Read access to the signals of one fetch. The matcher only ever reads
/// through this trait.
pub trait EvidenceSource {
    fn body(&self) -> &str;

    /// Case-insensitive header lookup.
    fn header(&self, name: &str) -> Option<&str>;

    /// Base URL that file-presence paths are appended to.
    fn base_url(&self) -> &str;
}

/// Normalized evidence for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evidence {
    body: String,
    headers: HashMap<String, String>,
    base_url: String,
}

impl Evidence {
    /// Header names are lower-cased on the way in; for duplicates (ignoring
    /// case) the last one in iteration order wins.
    pub fn new<I, K, V>(body: impl Into<String>, headers: I, base_url: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_ascii_lowercase(), v.into()))
            .collect();

        Self {
            body: body.into(),
            headers,
            base_url: base_url.into(),
        }
    }

    /// 从抓取结果构建（解析原始 header 块）
    pub fn from_page(page: FetchedPage, base_url: impl Into<String>) -> Self {
        let headers = page
            .raw_headers
            .as_deref()
            .map(HeaderConverter::parse_block)
            .unwrap_or_default();

        Self {
            body: page.body,
            headers,
            base_url: base_url.into(),
        }
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

impl EvidenceSource for Evidence {
    fn body(&self) -> &str {
        &self.body
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
