//! 检测模块：证据、匹配器、检测引擎与运行入口
pub mod evidence;
pub mod matcher;
pub mod report;
pub mod engine;
pub mod global;
pub mod detector;

#[cfg(test)]
pub(crate) mod testing;

// 导出核心接口
pub use self::evidence::{Evidence, EvidenceSource};
pub use self::matcher::Matcher;
pub use self::report::{DetectionReport, DetectionResult, MatchLocation, NO_TECHNOLOGIES_LINE};
pub use self::engine::DetectionEngine;
pub use self::global::builtin_catalog;
pub use self::detector::TechDetector;
