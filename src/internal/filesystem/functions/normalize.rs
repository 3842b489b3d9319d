//! 元数据归一化：把各家服务器返回的属性集合转成 [`StorageAttributes`]。
//!
//! 同一个字段在不同服务器/响应形态下可能出现在不同的 key 下，这里按候选 key 列表依次查找，
//! 第一个存在的生效。新增服务器的怪癖只需在对应列表里加一项。

use chrono::{DateTime, NaiveDateTime};
use tracing::warn;

use crate::internal::filesystem::functions::encode_path::trim_path;
use crate::internal::filesystem::structs::{
    DirectoryAttributes, FileAttributes, StorageAttributes,
};
use crate::internal::webdav::structs::{PropertySet, dav_property};

/// 每次 PROPFIND 请求的属性
pub const METADATA_FIELDS: &[&str] = &[
    dav_property::DISPLAY_NAME,
    dav_property::CONTENT_LENGTH,
    dav_property::CONTENT_TYPE,
    dav_property::LAST_MODIFIED,
    dav_property::IS_COLLECTION,
    dav_property::RESOURCE_TYPE,
];

pub const CONTENT_LENGTH_KEYS: &[&str] = &["content-length", dav_property::CONTENT_LENGTH];
pub const CONTENT_TYPE_KEYS: &[&str] = &["content-type", dav_property::CONTENT_TYPE];
pub const LAST_MODIFIED_KEYS: &[&str] = &["last-modified", dav_property::LAST_MODIFIED];

/// 非 RFC 2822 的时间格式（按 UTC 处理）
const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%A, %d-%b-%y %H:%M:%S GMT", // RFC 850
    "%a %b %e %H:%M:%S %Y",      // asctime
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// 归一化属性集合，空集合表示资源不存在
pub fn normalize(properties: &PropertySet, path: &str) -> Option<StorageAttributes> {
    if properties.is_empty() {
        return None;
    }

    let path = trim_path(path).to_string();

    if is_directory(properties) {
        return Some(DirectoryAttributes::new(path).into());
    }

    let file_size = properties
        .first_text(CONTENT_LENGTH_KEYS)
        .and_then(|raw| parse_size(raw, &path));
    let mime_type = properties.first_text(CONTENT_TYPE_KEYS).map(str::to_string);
    let last_modified = properties
        .first_text(LAST_MODIFIED_KEYS)
        .and_then(|raw| parse_timestamp(raw, &path));

    Some(
        FileAttributes {
            path,
            file_size,
            mime_type,
            last_modified,
        }
        .into(),
    )
}

/// resourcetype 里有 collection 标记，或者 iscollection 恰好是 "1"，两者满足其一即为目录
pub fn is_directory(properties: &PropertySet) -> bool {
    let by_resource_type = properties
        .get(dav_property::RESOURCE_TYPE)
        .is_some_and(|rt| rt.has_marker(dav_property::COLLECTION));

    by_resource_type || properties.text(dav_property::IS_COLLECTION) == Some("1")
}

fn parse_size(raw: &str, path: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(size) => Some(size),
        Err(e) => {
            warn!(path, raw, error = %e, "content length is not a non-negative integer");
            None
        }
    }
}

fn parse_timestamp(raw: &str, path: &str) -> Option<i64> {
    let parsed = parse_http_date(raw);
    if parsed.is_none() {
        warn!(path, raw, "unrecognised last-modified value");
    }
    parsed
}

/// 解析 HTTP-date 及几种常见变体，返回 Unix 时间戳（秒）
pub fn parse_http_date(raw: &str) -> Option<i64> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.timestamp());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp());
    }

    FALLBACK_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc().timestamp())
}
