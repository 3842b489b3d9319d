//! 单个资源的 PROPFIND 属性集合。
//!
//! key 使用 Clark 记法（`{DAV:}getcontentlength`），也可能是头部风格的通用名字（`content-length`），
//! 取决于服务器和响应形态。属性可能缺失，没有顺序保证。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// `DAV:` 命名空间下的属性名（Clark 记法）
pub mod dav_property {
    pub const DISPLAY_NAME: &str = "{DAV:}displayname";
    pub const CONTENT_LENGTH: &str = "{DAV:}getcontentlength";
    pub const CONTENT_TYPE: &str = "{DAV:}getcontenttype";
    pub const LAST_MODIFIED: &str = "{DAV:}getlastmodified";
    pub const IS_COLLECTION: &str = "{DAV:}iscollection";
    pub const RESOURCE_TYPE: &str = "{DAV:}resourcetype";
    /// resourcetype 中表示目录的标记
    pub const COLLECTION: &str = "{DAV:}collection";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// 普通文本属性，如 `getcontentlength`、`getlastmodified`
    Text(String),
    /// `<resourcetype>` 下子元素的 Clark 名字，如 `{DAV:}collection`
    ResourceType(Vec<String>),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            PropertyValue::ResourceType(_) => None,
        }
    }

    /// resourcetype 中是否带有指定标记
    pub fn has_marker(&self, marker: &str) -> bool {
        match self {
            PropertyValue::ResourceType(markers) => markers.iter().any(|m| m == marker),
            PropertyValue::Text(_) => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySet(HashMap<String, PropertyValue>);

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: PropertyValue) -> &mut Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn insert_text(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.insert(key, PropertyValue::Text(value.into()))
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.0.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropertyValue::as_text)
    }

    /// 按顺序查找候选 key，返回第一个存在且非空的文本值
    pub fn first_text(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.text(key))
            .map(str::trim)
            .find(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>> FromIterator<(K, PropertyValue)> for PropertySet {
    fn from_iter<I: IntoIterator<Item = (K, PropertyValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for PropertySet {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k, PropertyValue::Text(v.to_string())))
            .collect()
    }
}

/// 深度查询结果中的一项：资源定位符 + 属性集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropFindEntry {
    /// 服务器返回的 href，已去掉 base_url 前缀，但仍是编码形式
    pub href: String,
    pub properties: PropertySet,
}

impl PropFindEntry {
    pub fn new(href: impl Into<String>, properties: PropertySet) -> Self {
        Self { href: href.into(), properties }
    }
}
