//! 编译模块：将规则表编译为可执行的规则目录
pub mod pattern;
pub mod compiler;

pub use self::pattern::{Check, EvidenceChannel, Pattern, RuleCatalog, TechnologyRule};
pub use self::compiler::RuleCompiler;
