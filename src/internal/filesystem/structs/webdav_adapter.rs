//! WebDAV 文件系统适配器。
//!
//! 适配器只持有一个传输客户端的共享引用，没有任何可变状态，可以 Clone 后在多个任务里并发使用。
//! 目录创建与深度列举都是串行的：父目录必须先存在，子目录必须先拿到才能继续往下走。

mod directory_materializer;
mod tree_enumerator;

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::internal::filesystem::enums::MetadataKind;
use crate::internal::filesystem::functions::encode_path::{encode_path, trim_path};
use crate::internal::filesystem::functions::normalize::{METADATA_FIELDS, normalize};
use crate::internal::filesystem::structs::filesystem_error::transport_reason;
use crate::internal::filesystem::structs::{FileAttributes, FilesystemError, StorageAttributes};
use crate::internal::webdav::enums::Depth;
use crate::internal::webdav::traits::dav_client::DavClient;

pub struct WebDavAdapter<C: DavClient> {
    pub(crate) client: Arc<C>,
}

impl<C: DavClient> WebDavAdapter<C> {
    pub fn new(client: C) -> Self {
        Self { client: Arc::new(client) }
    }

    /// 与其它组件共用同一个客户端
    pub fn from_shared(client: Arc<C>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// 查询单个资源并归一化；`Ok(None)` 表示不存在，传输失败才是 `Err`
    pub(crate) async fn get_metadata(
        &self,
        path: &str,
        kind: MetadataKind,
    ) -> Result<Option<StorageAttributes>, FilesystemError> {
        let path = trim_path(path);
        let location = encode_path(path);

        debug!(%location, %kind, "PROPFIND depth 0");

        let entries = self
            .client
            .prop_find(&location, METADATA_FIELDS, Depth::Zero)
            .await
            .map_err(|e| {
                FilesystemError::retrieve_metadata(path, kind, transport_reason(&e), Some(e))
            })?;

        let properties = entries
            .into_iter()
            .next()
            .map(|entry| entry.properties)
            .unwrap_or_default();

        Ok(normalize(&properties, path))
    }

    /// 存在性探测，任何失败都当作不存在
    pub(crate) async fn exists(&self, path: &str) -> bool {
        match self.get_metadata(path, MetadataKind::FileExists).await {
            Ok(metadata) => metadata.is_some(),
            Err(e) => {
                debug!(path, error = %e, "existence probe failed, treating as absent");
                false
            }
        }
    }

    /// 要求结果是文件，否则给出 "file not found" / "not a file"
    pub(crate) async fn file_attributes(
        &self,
        path: &str,
        kind: MetadataKind,
    ) -> Result<FileAttributes, FilesystemError> {
        match self.get_metadata(path, kind).await? {
            Some(StorageAttributes::File(file)) => Ok(file),
            Some(StorageAttributes::Directory(_)) => {
                Err(FilesystemError::retrieve_metadata(path, kind, "not a file", None))
            }
            None => Err(FilesystemError::retrieve_metadata(path, kind, "file not found", None)),
        }
    }
}

impl<C: DavClient> Clone for WebDavAdapter<C> {
    fn clone(&self) -> Self {
        Self { client: Arc::clone(&self.client) }
    }
}

impl<C: DavClient> fmt::Debug for WebDavAdapter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebDavAdapter").finish_non_exhaustive()
    }
}
