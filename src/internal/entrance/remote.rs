use futures_util::future::join_all;

use crate::{
    auth::WebdavAuth,
    filesystem::structs::{FilesystemError, StorageAttributes, WebDavAdapter},
    filesystem::traits::FilesystemAdapter,
    webdav::{structs::ReqwestDavClient, traits::DavClient},
};

/// 用认证信息打开一个基于 reqwest 的远程文件系统适配器
///
/// example:
/// ```
/// use webdav_fs::auth::WebdavAuth;
/// use webdav_fs::open_remote_filesystem;
///
/// let webdav_auth = WebdavAuth::new("account", "password", "http://localhost:8080/dav/")?;
/// let fs = open_remote_filesystem(webdav_auth);
/// ```
pub fn open_remote_filesystem(webdav_auth: WebdavAuth) -> WebDavAdapter<ReqwestDavClient> {
    WebDavAdapter::new(ReqwestDavClient::new(webdav_auth))
}

type RemoteFileResult = Result<Option<StorageAttributes>, FilesystemError>;

/// 并发读取多个路径的元数据
///
/// 支持文件夹和文件混合读取，不会做递归处理，递归请使用 `list_contents`。
/// 返回结果与 `paths` 一一对应，`Ok(None)` 表示该路径不存在。
///
/// - 注意：paths 是相对 base_url 的逻辑路径，首尾的 "/" 会被忽略
pub async fn get_remote_files<C: DavClient>(
    adapter: &WebDavAdapter<C>,
    paths: &[&str],
) -> Vec<RemoteFileResult> {
    let tasks = paths.iter().map(|path| adapter.metadata(path));

    // 并发获取全部的属性
    join_all(tasks).await
}
