use crate::auth::WebdavAuth;

/// 基于 reqwest 的 [`DavClient`](crate::webdav::traits::DavClient) 默认实现
///
/// 所有定位符都相对 `WebdavAuth::base_url` 解析；PROPFIND 返回的 href 会去掉 base_url 的路径前缀，
/// 这样调用方拿到的永远是相对根目录的定位符。
#[derive(Debug, Clone)]
pub struct ReqwestDavClient {
    pub(crate) webdav_auth: WebdavAuth,
}

impl ReqwestDavClient {
    pub fn new(webdav_auth: WebdavAuth) -> Self {
        Self { webdav_auth }
    }

    pub fn webdav_auth(&self) -> &WebdavAuth {
        &self.webdav_auth
    }
}
