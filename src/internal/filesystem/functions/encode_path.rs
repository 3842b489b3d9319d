//! 逻辑路径 ↔ 定位符。
//!
//! 逻辑路径是不透明的层级标识，不做 `.`/`..` 归一化。编码按段进行，
//! 段内的保留字符（空格、`+`、`%` 等）会被转义，段之间的 `/` 原样保留。

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// 路径段允许原样出现的字符只剩 RFC 3986 的 unreserved 集合
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// 去掉首尾的 `/`，得到规范路径（根目录为空串）
pub fn trim_path(path: &str) -> &str {
    path.trim_matches('/')
}

/// 逐段编码，段之间用 `/` 连接
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// 把定位符解码回规范路径
pub fn decode_locator(locator: &str) -> String {
    percent_decode_str(locator)
        .decode_utf8_lossy()
        .trim_matches('/')
        .to_string()
}

/// 目录的定位符带尾部 `/`；根目录保持空串，避免变成站点根路径
pub fn directory_locator(path: &str) -> String {
    let path = trim_path(path);
    if path.is_empty() {
        String::new()
    } else {
        format!("{}/", encode_path(path))
    }
}

/// 父目录的规范路径，顶层条目的父目录是根（空串）
pub fn parent_directory(path: &str) -> &str {
    trim_path(path)
        .rsplit_once('/')
        .map(|(parent, _)| parent)
        .unwrap_or("")
}
