use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::internal::webdav::raw_xml::raw_file::{MultiStatus, Prop, PropStat, Response};
use crate::internal::webdav::structs::{PropFindEntry, PropertySet, PropertyValue, dav_property};

pub trait ToPropFindEntries {
    fn to_prop_find_entries(self, base_url: &Url) -> Vec<PropFindEntry>;
}

fn take_ok_propstat(propstats: Vec<PropStat>) -> Option<PropStat> {
    // 从 propstats 中拿到第一个 HTTP 状态是 2xx 的 PropStat（直接 move 出来）
    propstats.into_iter().find(|ps| {
        ps.status
            .split_whitespace()
            .find_map(|t| t.parse::<u16>().ok())
            .map(|code| (200..=299).contains(&code))
            .unwrap_or(false)
    })
}

/// 服务器可能返回绝对 URL 或带前缀的绝对路径，统一转成相对 base_url 的定位符（保持编码形式）
///
/// 前缀按段解码后比较：服务器对 base 路径的编码可能和配置的不同（`%40` 与 `@`、大小写十六进制等）。
fn relative_href(href: &str, base_url: &Url) -> String {
    let path = base_url
        .join(href)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| href.to_string());

    let mut rest = path.trim_start_matches('/');
    for base_segment in base_url.path().split('/').filter(|s| !s.is_empty()) {
        let (segment, tail) = rest.split_once('/').unwrap_or((rest, ""));
        if decode_segment(segment) != decode_segment(base_segment) {
            return path;
        }
        rest = tail;
    }

    rest.to_string()
}

fn decode_segment(segment: &str) -> Cow<'_, str> {
    percent_decode_str(segment).decode_utf8_lossy()
}

fn prop_to_property_set(prop: Prop) -> PropertySet {
    let Prop {
        resource_type,
        content_length,
        last_modified,
        content_type,
        display_name,
        is_collection,
    } = prop;

    let mut properties = PropertySet::new();

    if let Some(rt) = resource_type {
        let markers = match rt.is_collection {
            Some(_) => vec![dav_property::COLLECTION.to_string()],
            None => Vec::new(),
        };
        properties.insert(dav_property::RESOURCE_TYPE, PropertyValue::ResourceType(markers));
    }

    let texts = [
        (dav_property::CONTENT_LENGTH, content_length),
        (dav_property::LAST_MODIFIED, last_modified),
        (dav_property::CONTENT_TYPE, content_type),
        (dav_property::DISPLAY_NAME, display_name),
        (dav_property::IS_COLLECTION, is_collection),
    ];
    for (key, value) in texts {
        if let Some(value) = value {
            properties.insert_text(key, value);
        }
    }

    properties
}

impl ToPropFindEntries for MultiStatus {
    fn to_prop_find_entries(self, base_url: &Url) -> Vec<PropFindEntry> {
        // 顺序保持与服务器一致，第一项通常是被查询资源本身，由调用方决定是否丢弃
        self.responses
            .into_iter()
            .map(|Response { href, propstats }| {
                // 没有 2xx 的 propstat 视为空属性集（资源不存在或全部属性 404）
                let properties = take_ok_propstat(propstats)
                    .map(|PropStat { prop, .. }| prop_to_property_set(prop))
                    .unwrap_or_default();

                PropFindEntry::new(relative_href(&href, base_url), properties)
            })
            .collect()
    }
}
