//! 目录物化：保证目标路径及其所有祖先目录存在。

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use tracing::debug;

use crate::internal::filesystem::functions::encode_path::{
    directory_locator, parent_directory, trim_path,
};
use crate::internal::filesystem::structs::FilesystemError;
use crate::internal::filesystem::structs::filesystem_error::{status_reason, transport_reason};
use crate::internal::webdav::enums::DavMethod;
use crate::internal::webdav::traits::dav_client::DavClient;

use super::WebDavAdapter;

impl<C: DavClient> WebDavAdapter<C> {
    /// 从叶子往根探测，找到第一个已存在的祖先后，再从根往叶子逐级 MKCOL。
    ///
    /// 根目录和已存在的目录直接返回，不发创建请求。中途失败不回滚，已创建的祖先目录保留。
    pub(crate) async fn ensure_directory(&self, path: &str) -> Result<(), FilesystemError> {
        let mut missing = Vec::new();
        let mut current = trim_path(path);

        while !current.is_empty() && !self.exists(current).await {
            missing.push(current);
            current = parent_directory(current);
        }

        for directory in missing.into_iter().rev() {
            self.make_collection(directory).await?;
        }

        Ok(())
    }

    /// 只有 201 Created 算成功
    async fn make_collection(&self, path: &str) -> Result<(), FilesystemError> {
        let locator = directory_locator(path);

        debug!(%locator, "MKCOL");

        let failure = |reason: String, cause| FilesystemError::UnableToCreateDirectory {
            path: path.to_string(),
            reason,
            cause,
        };

        match self
            .client
            .request(DavMethod::Mkcol, &locator, None, HeaderMap::new())
            .await
        {
            Ok(response) if response.status == StatusCode::CREATED => Ok(()),
            Ok(response) => Err(failure(status_reason(response.status), None)),
            Err(e) => Err(failure(transport_reason(&e), Some(e))),
        }
    }
}
