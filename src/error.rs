//! 全局错误类型定义
//! Crate-wide error type

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum BopalyzerError {
    // 规则相关错误
    #[error("rule table parse failed: {0}")]
    RuleParseError(String),
    #[error("rule compile failed: {0}")]
    RuleCompileError(String),
    #[error("regex compile failed: {0}")]
    RegexCompileError(#[from] RegexError),

    // 网络相关错误
    #[error("http request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("too many redirects: {0}")]
    TooManyRedirects(String),
    #[error("url parse failed: {0}")]
    UrlError(#[from] UrlParseError),

    // 序列化/反序列化错误
    #[error("json error: {0}")]
    JsonError(#[from] SerdeJsonError),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type BopResult<T> = Result<T, BopalyzerError>;
