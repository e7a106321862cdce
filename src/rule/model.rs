//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use serde::{Deserialize, Serialize};

/// 单条检测项定义（按 channel 字段区分证据来源）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "channel", rename_all = "snake_case")]
pub enum CheckDef {
    Body {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pattern: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        contains: Option<String>,
    },
    Header {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pattern: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        contains: Option<String>,
    },
    FilePresence,
}

/// 技术规则定义（从 JSON 规则表解析）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TechRuleDef {
    pub name: String,
    #[serde(default)]
    pub checks: Vec<CheckDef>,
    // 仅在 checks 含 file_presence 时使用
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
}

/// 完整规则表（顺序即目录声明顺序）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleTable {
    #[serde(default)]
    pub technologies: Vec<TechRuleDef>,
}
