use bytes::Bytes;
use reqwest::header::HeaderMap;
use tracing::debug;

use crate::auth::WebdavAuth;
use crate::internal::webdav::enums::DavMethod;
use crate::internal::webdav::structs::{DavResponse, TransportError};

/// 发送一次普通请求并把整个响应体读进内存
///
/// 4xx/5xx 返回 [`TransportError::Http`]，其余状态（含 3xx）交给调用方判断。
pub(crate) async fn send_request(
    webdav_auth: &WebdavAuth,
    method: DavMethod,
    absolute_url: &str,
    body: Option<Bytes>,
    headers: HeaderMap,
) -> Result<DavResponse, TransportError> {
    debug!(%method, url = absolute_url, "sending request");

    let mut request = webdav_auth
        .client
        .request(method.to_head_method()?, absolute_url)
        .headers(headers);

    if let Some(body) = body {
        request = request.body(body);
    }

    let res = request.send().await?;

    let status = res.status();
    let headers = res.headers().clone();
    let body = res.bytes().await?;

    if status.is_client_error() || status.is_server_error() {
        return Err(TransportError::Http {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    Ok(DavResponse { status, headers, body })
}
