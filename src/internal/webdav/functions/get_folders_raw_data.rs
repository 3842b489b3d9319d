use quick_xml::de::from_str;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::debug;

use crate::auth::WebdavAuth;
use crate::internal::webdav::enums::{DavMethod, Depth};
use crate::internal::webdav::functions::propfind_body::build_propfind_body;
use crate::internal::webdav::raw_xml::raw_file::MultiStatus;
use crate::internal::webdav::structs::TransportError;

/// 获取原始 webdav 属性数据
///
/// 207 与 2xx 视为成功；4xx/5xx 返回 [`TransportError::Http`]。
pub async fn get_folders_raw_data(
    webdav_auth: &WebdavAuth,
    absolute_url: &str,
    depth: Depth,
    properties: &[&str],
) -> Result<MultiStatus, TransportError> {
    // 组装请求头
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/xml"));
    headers.insert("Depth", HeaderValue::from_static(depth.as_str()));
    headers.insert(ACCEPT, HeaderValue::from_static("application/xml"));

    let method = DavMethod::Propfind.to_head_method()?;

    debug!(url = absolute_url, depth = depth.as_str(), "PROPFIND");

    let res = webdav_auth
        .client
        .request(method, absolute_url)
        .headers(headers)
        .body(build_propfind_body(properties))
        .send()
        .await?;

    let status = res.status();

    let xml_text = res.text().await?;

    if !status.is_success() && status != StatusCode::MULTI_STATUS {
        return Err(TransportError::Http { status, body: xml_text });
    }

    // 个别服务器对空目录返回 200 + 空响应体
    if xml_text.trim().is_empty() {
        return Ok(MultiStatus::default());
    }

    let multi_status: MultiStatus = from_str(&xml_text)?;

    Ok(multi_status)
}
