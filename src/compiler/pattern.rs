//! 编译后模式模型
//! Compiled, immutable form of the rule table.

use std::fmt;
use regex::{Regex, RegexBuilder};

use crate::error::BopResult;

/// 文本匹配器（均忽略大小写）
#[derive(Debug, Clone)]
pub enum Pattern {
    // 包含匹配，存储小写形式
    Contains(String),
    // 正则匹配，编译时已开启 case-insensitive
    Regex(Regex),
}

impl Pattern {
    pub fn contains(needle: &str) -> Self {
        Pattern::Contains(needle.to_lowercase())
    }

    pub fn regex(source: &str) -> BopResult<Self> {
        let regex = RegexBuilder::new(source).case_insensitive(true).build()?;
        Ok(Pattern::Regex(regex))
    }

    /// 简单匹配判断
    pub fn is_match(&self, input: &str) -> bool {
        match self {
            Pattern::Contains(needle) => input.to_lowercase().contains(needle.as_str()),
            Pattern::Regex(regex) => regex.is_match(input),
        }
    }

    /// 规则描述
    pub fn describe(&self) -> &str {
        match self {
            Pattern::Contains(needle) => needle.as_str(),
            Pattern::Regex(regex) => regex.as_str(),
        }
    }
}

/// Where a check looks for evidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvidenceChannel {
    Body,
    /// Lower-cased header name.
    Header(String),
    FilePresence,
}

impl fmt::Display for EvidenceChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvidenceChannel::Body => write!(f, "body"),
            EvidenceChannel::Header(name) => write!(f, "header:{}", name),
            EvidenceChannel::FilePresence => write!(f, "file"),
        }
    }
}

/// One evidence check. Text channels carry their pattern; `FilePresence`
/// probes the rule's declared paths instead.
#[derive(Debug, Clone)]
pub enum Check {
    Body(Pattern),
    /// `name` is stored lower-cased.
    Header { name: String, pattern: Pattern },
    FilePresence,
}

impl Check {
    pub fn header(name: &str, pattern: Pattern) -> Self {
        Check::Header {
            name: name.to_ascii_lowercase(),
            pattern,
        }
    }

    pub fn channel(&self) -> EvidenceChannel {
        match self {
            Check::Body(_) => EvidenceChannel::Body,
            Check::Header { name, .. } => EvidenceChannel::Header(name.clone()),
            Check::FilePresence => EvidenceChannel::FilePresence,
        }
    }

    /// 规则描述（用于日志）
    pub fn describe(&self) -> &str {
        match self {
            Check::Body(pattern) | Check::Header { pattern, .. } => pattern.describe(),
            Check::FilePresence => "reachable",
        }
    }
}

/// 技术编译后的规则
#[derive(Debug, Clone)]
pub struct TechnologyRule {
    pub name: String,
    pub checks: Vec<Check>,
    pub paths: Vec<String>,
}

/// 编译后的规则目录，按声明顺序只读遍历
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    rules: Vec<TechnologyRule>,
}

impl RuleCatalog {
    pub fn new(rules: Vec<TechnologyRule>) -> Self {
        Self { rules }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TechnologyRule> {
        self.rules.iter()
    }

    pub fn get(&self, name: &str) -> Option<&TechnologyRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleCatalog {
    type Item = &'a TechnologyRule;
    type IntoIter = std::slice::Iter<'a, TechnologyRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
