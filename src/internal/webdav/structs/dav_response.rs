use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

/// 一次普通请求（非 PROPFIND）的响应
#[derive(Debug, Clone)]
pub struct DavResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl DavResponse {
    /// 只带状态码的空响应
    pub fn with_status(status: StatusCode) -> Self {
        Self { status, headers: HeaderMap::new(), body: Bytes::new() }
    }
}
