//! 检测引擎：按目录顺序驱动匹配器并汇总结果
//! Holds no technology-specific knowledge; everything lives in the catalog.

use std::time::Instant;
use tracing::debug;

use super::evidence::EvidenceSource;
use super::matcher::Matcher;
use super::report::{DetectionReport, DetectionResult};
use crate::compiler::RuleCatalog;
use crate::http::ResourceProbe;

/// 检测引擎
#[derive(Debug, Clone, Copy)]
pub struct DetectionEngine<'a> {
    catalog: &'a RuleCatalog,
}

impl<'a> DetectionEngine<'a> {
    pub fn new(catalog: &'a RuleCatalog) -> Self {
        Self { catalog }
    }

    /// One sequential pass over the catalog. Every technology gets exactly one
    /// result, in catalog order.
    pub async fn run<E, P>(&self, evidence: &E, probe: &P) -> DetectionReport
    where
        E: EvidenceSource + ?Sized,
        P: ResourceProbe + ?Sized,
    {
        let start = Instant::now();
        let mut results = Vec::with_capacity(self.catalog.len());

        for rule in self.catalog {
            let result = match Matcher::evaluate(rule, evidence, probe).await {
                Some(location) => DetectionResult::found(&rule.name, location),
                None => DetectionResult::missing(&rule.name),
            };
            results.push(result);
        }

        let report = DetectionReport::new(results);
        debug!(
            "detection pass finished in {:?}: {}/{} technologies detected",
            start.elapsed(),
            report.detected().count(),
            self.catalog.len()
        );
        report
    }
}
