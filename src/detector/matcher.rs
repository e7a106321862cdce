//! 单技术匹配器
//! Walks one technology's checks in declaration order and stops at the first
//! success. Only file-presence checks touch the network.

use tracing::debug;

use super::evidence::EvidenceSource;
use super::report::MatchLocation;
use crate::compiler::{Check, Pattern, TechnologyRule};
use crate::http::ResourceProbe;

/// 单技术匹配器
pub struct Matcher;

impl Matcher {
    /// Returns the location of the first successful check, or `None`.
    pub async fn evaluate<E, P>(rule: &TechnologyRule, evidence: &E, probe: &P) -> Option<MatchLocation>
    where
        E: EvidenceSource + ?Sized,
        P: ResourceProbe + ?Sized,
    {
        for check in &rule.checks {
            let location = match check {
                Check::Body(pattern) => Self::match_body(pattern, evidence),
                Check::Header { name, pattern } => Self::match_header(name, pattern, evidence),
                Check::FilePresence => {
                    Self::probe_paths(&rule.paths, evidence.base_url(), probe).await
                }
            };

            if let Some(location) = location {
                debug!("{} matched in {} ({})", rule.name, location, check.describe());
                return Some(location);
            }
        }

        None
    }

    fn match_body<E: EvidenceSource + ?Sized>(pattern: &Pattern, evidence: &E) -> Option<MatchLocation> {
        pattern
            .is_match(evidence.body())
            .then_some(MatchLocation::Body)
    }

    fn match_header<E: EvidenceSource + ?Sized>(
        name: &str,
        pattern: &Pattern,
        evidence: &E,
    ) -> Option<MatchLocation> {
        // header 不存在：该检查不适用，继续下一项
        let value = evidence.header(name)?;
        pattern
            .is_match(value)
            .then(|| MatchLocation::Header(name.to_string()))
    }

    async fn probe_paths<P: ResourceProbe + ?Sized>(
        paths: &[String],
        base_url: &str,
        probe: &P,
    ) -> Option<MatchLocation> {
        for path in paths {
            let url = Self::probe_url(base_url, path);
            if probe.is_reachable(&url).await {
                return Some(MatchLocation::File(path.clone()));
            }
        }
        None
    }

    /// `base + path`; one trailing slash on the base is dropped so the
    /// separator is not doubled.
    pub fn probe_url(base_url: &str, path: &str) -> String {
        format!("{}{}", base_url.strip_suffix('/').unwrap_or(base_url), path)
    }
}
