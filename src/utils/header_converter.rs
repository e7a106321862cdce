//! Header格式转换工具
//! Converts between reqwest's `HeaderMap`, the raw `Name: Value` header block
//! and the single-valued lookup table used as evidence.

use std::collections::HashMap;
use reqwest::header::HeaderMap;
use tracing::debug;

/// Header转换工具
pub struct HeaderConverter;

impl HeaderConverter {
    /// 将HeaderMap渲染为原始 header 文本块（每行一个 `Name: Value`）
    pub fn to_raw_block(header_map: &HeaderMap) -> String {
        let mut block = String::new();

        for (key, value) in header_map.iter() {
            // 非 ASCII 值按 UTF-8 宽松解码，不丢弃
            let value_str = String::from_utf8_lossy(value.as_bytes());
            block.push_str(key.as_str());
            block.push_str(": ");
            block.push_str(&value_str);
            block.push_str("\r\n");
        }

        block
    }

    /// 解析原始 header 文本块为单值 HashMap
    ///
    /// Names are lower-cased, names and values are trimmed, blank lines and
    /// lines without a colon (status lines) are skipped. A later line with the
    /// same name overwrites the earlier one.
    pub fn parse_block(raw: &str) -> HashMap<String, String> {
        let mut headers = HashMap::new();

        for line in raw.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let Some((name, value)) = line.split_once(':') else {
                continue;
            };

            let name = name.trim_matches(Self::is_header_space);
            if name.is_empty() {
                continue;
            }
            let value = value.trim_matches(Self::is_header_space);
            headers.insert(name.to_ascii_lowercase(), value.to_string());
        }

        debug!("header block parsed into {} entries", headers.len());
        headers
    }

    fn is_header_space(c: char) -> bool {
        matches!(c, ' ' | '\t' | '\r')
    }
}
