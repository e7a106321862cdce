//! 规则加载管理器
//! Loads the declarative rule table, either the one embedded at build time or
//! one supplied by the caller.

use tracing::debug;

use super::model::RuleTable;
use crate::error::{BopResult, BopalyzerError};

/// 内置规则表
const EMBEDDED_RULES: &str = include_str!("../../data/rules.json");

/// 规则加载管理器
pub struct RuleLoader;

impl RuleLoader {
    /// 加载内置规则表
    pub fn load_embedded() -> BopResult<RuleTable> {
        Self::load_from_str(EMBEDDED_RULES)
    }

    /// 从 JSON 文本加载规则表
    pub fn load_from_str(json: &str) -> BopResult<RuleTable> {
        let table: RuleTable = serde_json::from_str(json)
            .map_err(|e| BopalyzerError::RuleParseError(e.to_string()))?;

        debug!("rule table loaded: {} technologies", table.technologies.len());
        Ok(table)
    }
}
