//! 全局内置规则目录（进程内只编译一次）
use once_cell::sync::OnceCell;

use crate::compiler::{RuleCatalog, RuleCompiler};
use crate::error::BopResult;
use crate::rule::RuleLoader;

/// 全局规则目录实例
static BUILTIN_CATALOG: OnceCell<RuleCatalog> = OnceCell::new();

/// 获取内置规则目录，首次调用时加载并编译
pub fn builtin_catalog() -> BopResult<&'static RuleCatalog> {
    BUILTIN_CATALOG.get_or_try_init(|| {
        let table = RuleLoader::load_embedded()?;
        RuleCompiler::compile(&table)
    })
}
