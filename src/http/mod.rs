//! 网络协作层
//! Network collaborators used by the detector: page fetching and
//! metadata-only file probing.

pub mod client;

use async_trait::async_trait;

use crate::error::BopResult;

pub use self::client::HttpClient;

/// 抓取结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedPage {
    pub body: String,
    /// Raw `Name: Value` header block, present only when header capture was requested.
    pub raw_headers: Option<String>,
}

/// Fetches a page body (and optionally its header block).
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str, capture_headers: bool) -> BopResult<FetchedPage>;
}

/// Answers "is this fully-qualified URL reachable". Never fails; transport
/// errors are reported as unreachable.
#[async_trait]
pub trait ResourceProbe: Send + Sync {
    async fn is_reachable(&self, url: &str) -> bool;
}
