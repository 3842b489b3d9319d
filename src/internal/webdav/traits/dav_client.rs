//! 传输协作方接口。
//!
//! 适配层只通过这个 trait 和服务器打交道：发普通请求、发 PROPFIND、把定位符解析成绝对地址。
//! 默认实现见 [`ReqwestDavClient`](crate::webdav::structs::ReqwestDavClient)，测试里可以换成内存实现。

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;

use crate::internal::webdav::enums::{DavMethod, Depth};
use crate::internal::webdav::structs::{DavResponse, PropFindEntry, TransportError};

#[async_trait]
pub trait DavClient: Send + Sync {
    /// 发送一次请求。
    ///
    /// `locator` 是相对 base_url 的编码路径。4xx/5xx 以及连接故障返回 `Err`，其余状态原样返回。
    async fn request(
        &self,
        method: DavMethod,
        locator: &str,
        body: Option<Bytes>,
        headers: HeaderMap,
    ) -> Result<DavResponse, TransportError>;

    /// 查询属性，按服务器返回的顺序给出每个资源的属性集合。
    ///
    /// `Depth::One` 时第一项是被查询的资源本身。
    async fn prop_find(
        &self,
        locator: &str,
        properties: &[&str],
        depth: Depth,
    ) -> Result<Vec<PropFindEntry>, TransportError>;

    /// 把定位符解析为绝对 URL，用于 `Destination` 请求头
    fn absolute_url(&self, locator: &str) -> Result<String, TransportError>;
}
