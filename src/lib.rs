//! bopalyzer - 网站技术栈指纹识别
//!
//! Fingerprints the software stack behind one URL from three evidence
//! channels: the response body, response headers and the reachability of
//! well-known paths.

// 导出全局错误类型
pub use self::error::{BopalyzerError, BopResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{CheckDef, TechRuleDef, RuleTable, RuleLoader};

// 导出编译模块核心接口
pub use self::compiler::{Check, EvidenceChannel, Pattern, RuleCatalog, TechnologyRule, RuleCompiler};

// 导出网络协作接口
pub use self::http::{FetchedPage, HttpClient, PageFetcher, ResourceProbe};

// 导出工具模块核心接口
pub use self::utils::HeaderConverter;

// 导出检测模块核心接口
pub use self::detector::{
    Evidence, EvidenceSource, Matcher, DetectionEngine, DetectionReport, DetectionResult,
    MatchLocation, NO_TECHNOLOGIES_LINE, TechDetector, builtin_catalog,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod compiler;
pub mod http;
pub mod utils;
pub mod detector;
