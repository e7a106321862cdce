//! 规则编译器核心
//! 仅负责将规则表编译为只读的规则目录，编译失败即视为致命错误

use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, warn};

use super::pattern::{Check, Pattern, RuleCatalog, TechnologyRule};
use crate::rule::{CheckDef, RuleTable, TechRuleDef};
use crate::error::{BopResult, BopalyzerError};

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译规则表（保持声明顺序）
    pub fn compile(table: &RuleTable) -> BopResult<RuleCatalog> {
        let start = Instant::now();
        let mut seen_names = HashSet::new();
        let mut stats = CompileStats::default();
        let mut rules = Vec::with_capacity(table.technologies.len());

        for def in &table.technologies {
            let name = def.name.trim();
            if name.is_empty() {
                return Err(BopalyzerError::RuleCompileError(
                    "technology name must not be empty".to_string(),
                ));
            }
            if !seen_names.insert(name.to_string()) {
                return Err(BopalyzerError::RuleCompileError(format!(
                    "duplicate technology: {}",
                    name
                )));
            }

            rules.push(Self::compile_tech_rule(name, def, &mut stats)?);
        }

        debug!("rule compile finished in {:?}", start.elapsed());
        debug!(
            "compile stats: {} technologies, {} body checks, {} header checks, {} file checks, {} probe paths",
            rules.len(),
            stats.body_count,
            stats.header_count,
            stats.file_count,
            stats.path_count
        );

        Ok(RuleCatalog::new(rules))
    }

    /// 编译单个技术规则
    fn compile_tech_rule(
        name: &str,
        def: &TechRuleDef,
        stats: &mut CompileStats,
    ) -> BopResult<TechnologyRule> {
        let mut checks = Vec::with_capacity(def.checks.len());

        for check_def in &def.checks {
            let check = match check_def {
                CheckDef::Body { pattern, contains } => {
                    stats.body_count += 1;
                    Check::Body(Self::compile_pattern(name, pattern, contains)?)
                }
                CheckDef::Header { name: header, pattern, contains } => {
                    let header = header.trim();
                    if header.is_empty() {
                        return Err(BopalyzerError::RuleCompileError(format!(
                            "{}: header check without header name",
                            name
                        )));
                    }
                    stats.header_count += 1;
                    Check::header(header, Self::compile_pattern(name, pattern, contains)?)
                }
                CheckDef::FilePresence => {
                    stats.file_count += 1;
                    Check::FilePresence
                }
            };
            checks.push(check);
        }

        for path in &def.paths {
            if !path.starts_with('/') {
                return Err(BopalyzerError::RuleCompileError(format!(
                    "{}: probe path must start with '/': {}",
                    name, path
                )));
            }
        }
        stats.path_count += def.paths.len();

        let has_file_check = def.checks.iter().any(|c| matches!(c, CheckDef::FilePresence));
        if !def.paths.is_empty() && !has_file_check {
            warn!("{} declares probe paths but no file_presence check; paths are unused", name);
        }
        if def.checks.is_empty() {
            warn!("{} has no checks and will never be detected", name);
        }

        Ok(TechnologyRule {
            name: name.to_string(),
            checks,
            paths: def.paths.clone(),
        })
    }

    /// 编译单个匹配模式（正则与包含匹配二选一）
    fn compile_pattern(
        tech_name: &str,
        pattern: &Option<String>,
        contains: &Option<String>,
    ) -> BopResult<Pattern> {
        match (pattern, contains) {
            (Some(source), None) => Pattern::regex(source),
            (None, Some(needle)) => Ok(Pattern::contains(needle)),
            _ => Err(BopalyzerError::RuleCompileError(format!(
                "{}: a check needs exactly one of 'pattern' or 'contains'",
                tech_name
            ))),
        }
    }
}

/// 编译统计信息
#[derive(Debug, Clone, Default)]
struct CompileStats {
    body_count: usize,
    header_count: usize,
    file_count: usize,
    path_count: usize,
}
