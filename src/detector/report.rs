//! 检测结果与报告渲染

use std::fmt;
use serde::{Serialize, Serializer};

use crate::error::BopResult;

/// 报告中无任何命中时输出的唯一一行
pub const NO_TECHNOLOGIES_LINE: &str = "no technologies detected";

/// Where the first successful check of a technology fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchLocation {
    Body,
    Header(String),
    File(String),
}

impl fmt::Display for MatchLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchLocation::Body => write!(f, "body"),
            MatchLocation::Header(name) => write!(f, "header:{}", name),
            MatchLocation::File(path) => write!(f, "file:{}", path),
        }
    }
}

impl Serialize for MatchLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 单个技术的检测结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionResult {
    pub name: String,
    pub detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<MatchLocation>,
}

impl DetectionResult {
    pub fn found(name: &str, location: MatchLocation) -> Self {
        Self { name: name.to_string(), detected: true, location: Some(location) }
    }

    pub fn missing(name: &str) -> Self {
        Self { name: name.to_string(), detected: false, location: None }
    }
}

/// 一次运行的完整结果，按目录声明顺序排列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetectionReport {
    results: Vec<DetectionResult>,
}

impl DetectionReport {
    pub fn new(results: Vec<DetectionResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[DetectionResult] {
        &self.results
    }

    pub fn detected(&self) -> impl Iterator<Item = &DetectionResult> {
        self.results.iter().filter(|r| r.detected)
    }

    pub fn is_detected(&self, name: &str) -> bool {
        self.results.iter().any(|r| r.detected && r.name == name)
    }

    /// Text lines: `<name> (found in <location>)` per hit, or the single
    /// "no technologies detected" line.
    pub fn lines(&self) -> Vec<String> {
        let lines: Vec<String> = self
            .detected()
            .filter_map(|r| {
                r.location
                    .as_ref()
                    .map(|location| format!("{} (found in {})", r.name, location))
            })
            .collect();

        if lines.is_empty() {
            vec![NO_TECHNOLOGIES_LINE.to_string()]
        } else {
            lines
        }
    }

    pub fn to_json(&self) -> BopResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for DetectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_rendering() {
        assert_eq!(MatchLocation::Body.to_string(), "body");
        assert_eq!(MatchLocation::Header("server".into()).to_string(), "header:server");
        assert_eq!(MatchLocation::File("/wp-login.php".into()).to_string(), "file:/wp-login.php");
    }

    #[test]
    fn test_empty_report_renders_single_line() {
        let report = DetectionReport::new(vec![
            DetectionResult::missing("WordPress"),
            DetectionResult::missing("Nginx"),
        ]);
        assert_eq!(report.lines(), vec![NO_TECHNOLOGIES_LINE.to_string()]);
        assert_eq!(report.to_string(), "no technologies detected\n");
    }

    #[test]
    fn test_lines_skip_undetected() {
        let report = DetectionReport::new(vec![
            DetectionResult::found("WordPress", MatchLocation::Body),
            DetectionResult::missing("Apache"),
            DetectionResult::found("Nginx", MatchLocation::Header("server".into())),
        ]);
        assert_eq!(
            report.lines(),
            vec![
                "WordPress (found in body)".to_string(),
                "Nginx (found in header:server)".to_string(),
            ]
        );
        assert!(report.is_detected("Nginx"));
        assert!(!report.is_detected("Apache"));
    }

    #[test]
    fn test_json_uses_rendered_location() {
        let report = DetectionReport::new(vec![
            DetectionResult::found("PHP", MatchLocation::File("/info.php".into())),
            DetectionResult::missing("Django"),
        ]);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["results"][0]["location"], "file:/info.php");
        assert_eq!(json["results"][1]["detected"], false);
        assert!(json["results"][1].get("location").is_none());
    }
}
