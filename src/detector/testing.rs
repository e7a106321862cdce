//! 测试辅助：可计数的证据与可记录的探测器

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::evidence::EvidenceSource;
use crate::http::ResourceProbe;

/// Evidence that counts how often each channel is read.
pub struct CountingEvidence {
    body: String,
    headers: HashMap<String, String>,
    base_url: String,
    body_reads: AtomicUsize,
    header_reads: AtomicUsize,
}

impl CountingEvidence {
    pub fn new(body: &str, headers: &[(&str, &str)], base_url: &str) -> Self {
        Self {
            body: body.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
                .collect(),
            base_url: base_url.to_string(),
            body_reads: AtomicUsize::new(0),
            header_reads: AtomicUsize::new(0),
        }
    }

    pub fn body_reads(&self) -> usize {
        self.body_reads.load(Ordering::SeqCst)
    }

    pub fn header_reads(&self) -> usize {
        self.header_reads.load(Ordering::SeqCst)
    }
}

impl EvidenceSource for CountingEvidence {
    fn body(&self) -> &str {
        self.body_reads.fetch_add(1, Ordering::SeqCst);
        &self.body
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.header_reads.fetch_add(1, Ordering::SeqCst);
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Probe that answers from a fixed set of reachable paths and records every URL asked.
pub struct RecordingProbe {
    reachable: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl RecordingProbe {
    pub fn reachable(paths: &[&str]) -> Self {
        Self {
            reachable: paths.iter().map(|p| p.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn none() -> Self {
        Self::reachable(&[])
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResourceProbe for RecordingProbe {
    async fn is_reachable(&self, url: &str) -> bool {
        self.calls.lock().unwrap().push(url.to_string());
        self.reachable.iter().any(|path| url.ends_with(path.as_str()))
    }
}
