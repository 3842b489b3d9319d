//! 各操作的分发：编码路径 →（写入/复制时）保证父目录存在 → 发一次请求 → 只认 2xx。
//!
//! 传输错误在这里被包装成各操作对应的错误类型，调用方拿不到原始的传输错误类型。

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

use crate::internal::filesystem::enums::{MetadataKind, Visibility};
use crate::internal::filesystem::functions::encode_path::{
    encode_path, parent_directory, trim_path,
};
use crate::internal::filesystem::structs::filesystem_error::{status_reason, transport_reason};
use crate::internal::filesystem::structs::{
    FileAttributes, FilesystemError, StorageAttributes, WebDavAdapter, WriteConfig,
};
use crate::internal::filesystem::traits::filesystem_adapter::{FilesystemAdapter, ReadStream};
use crate::internal::webdav::enums::DavMethod;
use crate::internal::webdav::structs::{DavResponse, TransportError};
use crate::internal::webdav::traits::dav_client::DavClient;

const DESTINATION: &str = "Destination";

type ErrorFactory = fn(String, String, Option<TransportError>) -> FilesystemError;

fn delete_file_error(path: String, reason: String, cause: Option<TransportError>) -> FilesystemError {
    FilesystemError::UnableToDeleteFile { path, reason, cause }
}

fn delete_directory_error(
    path: String,
    reason: String,
    cause: Option<TransportError>,
) -> FilesystemError {
    FilesystemError::UnableToDeleteDirectory { path, reason, cause }
}

/// 2xx 之外的状态码与传输错误统一转成 (原因, 来源)
fn expect_success(
    result: Result<DavResponse, TransportError>,
) -> Result<DavResponse, (String, Option<TransportError>)> {
    match result {
        Ok(response) if response.status.is_success() => Ok(response),
        Ok(response) => Err((status_reason(response.status), None)),
        Err(e) => Err((transport_reason(&e), Some(e))),
    }
}

fn destination_header(url: &str) -> Result<HeaderMap, TransportError> {
    let mut headers = HeaderMap::new();
    headers.insert(DESTINATION, HeaderValue::from_str(url)?);
    Ok(headers)
}

/// 内部实现
impl<C: DavClient> WebDavAdapter<C> {
    async fn put(
        &self,
        path: &str,
        contents: Bytes,
        config: &WriteConfig,
    ) -> Result<(), FilesystemError> {
        let path = trim_path(path);

        if config.visibility.is_some() {
            return Err(FilesystemError::UnsupportedVisibility {
                path: path.to_string(),
                visibility: config.visibility,
            });
        }

        self.ensure_directory(parent_directory(path)).await?;

        let location = encode_path(path);
        debug!(%location, size = contents.len(), "PUT");

        let result = self
            .client
            .request(DavMethod::Put, &location, Some(contents), HeaderMap::new())
            .await;

        expect_success(result).map(|_| ()).map_err(|(reason, cause)| {
            FilesystemError::UnableToWriteFile { path: path.to_string(), reason, cause }
        })
    }

    /// MOVE / COPY 共用：Destination 头使用绝对 URL
    async fn transfer(
        &self,
        method: DavMethod,
        from: &str,
        to: &str,
    ) -> Result<(), (String, Option<TransportError>)> {
        let location = encode_path(from);
        let destination = self
            .client
            .absolute_url(&encode_path(to))
            .and_then(|url| destination_header(&url))
            .map_err(|e| (format!("无法生成目标地址: {e}"), Some(e)))?;

        debug!(%method, %location, "transfer");

        let result = self.client.request(method, &location, None, destination).await;
        expect_success(result).map(|_| ())
    }

    async fn delete_resource(&self, path: &str, on_error: ErrorFactory) -> Result<(), FilesystemError> {
        let path = trim_path(path);
        let location = encode_path(path);

        debug!(%location, "DELETE");

        let result = self
            .client
            .request(DavMethod::Delete, &location, None, HeaderMap::new())
            .await;

        expect_success(result)
            .map(|_| ())
            .map_err(|(reason, cause)| on_error(path.to_string(), reason, cause))
    }
}

#[async_trait]
impl<C: DavClient> FilesystemAdapter for WebDavAdapter<C> {
    async fn file_exists(&self, path: &str) -> bool {
        self.exists(path).await
    }

    async fn directory_exists(&self, path: &str) -> bool {
        matches!(
            self.get_metadata(path, MetadataKind::FileExists).await,
            Ok(Some(StorageAttributes::Directory(_)))
        )
    }

    async fn read(&self, path: &str) -> Result<Bytes, FilesystemError> {
        let path = trim_path(path);
        let location = encode_path(path);

        debug!(%location, "GET");

        let failure = |reason: String, cause| FilesystemError::UnableToReadFile {
            path: path.to_string(),
            reason,
            cause,
        };

        let response = self
            .client
            .request(DavMethod::Get, &location, None, HeaderMap::new())
            .await
            .map_err(|e| failure(transport_reason(&e), Some(e)))?;

        if response.status != StatusCode::OK {
            return Err(failure(
                format!("{}，不是 200", status_reason(response.status)),
                None,
            ));
        }

        Ok(response.body)
    }

    async fn read_stream(&self, path: &str) -> Result<ReadStream, FilesystemError> {
        let body = self.read(path).await?;
        Ok(Box::new(std::io::Cursor::new(body)))
    }

    async fn write(
        &self,
        path: &str,
        contents: Bytes,
        config: &WriteConfig,
    ) -> Result<(), FilesystemError> {
        self.put(path, contents, config).await
    }

    async fn write_stream(
        &self,
        path: &str,
        contents: &mut (dyn AsyncRead + Send + Unpin),
        config: &WriteConfig,
    ) -> Result<(), FilesystemError> {
        // 可见性检查放在读流之前，不消费调用方的流
        if config.visibility.is_some() {
            return self.put(path, Bytes::new(), config).await;
        }

        let mut buffer = Vec::new();
        contents.read_to_end(&mut buffer).await.map_err(|e| {
            FilesystemError::UnableToWriteFile {
                path: trim_path(path).to_string(),
                reason: e.to_string(),
                cause: None,
            }
        })?;

        self.put(path, Bytes::from(buffer), config).await
    }

    async fn move_file(
        &self,
        source: &str,
        destination: &str,
        _config: &WriteConfig,
    ) -> Result<(), FilesystemError> {
        let (from, to) = (trim_path(source), trim_path(destination));

        self.transfer(DavMethod::Move, from, to)
            .await
            .map_err(|(reason, cause)| FilesystemError::UnableToMoveFile {
                from: from.to_string(),
                to: to.to_string(),
                reason,
                cause,
            })
    }

    async fn copy(
        &self,
        source: &str,
        destination: &str,
        _config: &WriteConfig,
    ) -> Result<(), FilesystemError> {
        let (from, to) = (trim_path(source), trim_path(destination));

        self.ensure_directory(parent_directory(to)).await?;

        self.transfer(DavMethod::Copy, from, to)
            .await
            .map_err(|(reason, cause)| FilesystemError::UnableToCopyFile {
                from: from.to_string(),
                to: to.to_string(),
                reason,
                cause,
            })
    }

    async fn delete(&self, path: &str) -> Result<(), FilesystemError> {
        self.delete_resource(path, delete_file_error).await
    }

    async fn delete_directory(&self, path: &str) -> Result<(), FilesystemError> {
        self.delete_resource(path, delete_directory_error).await
    }

    async fn create_directory(
        &self,
        path: &str,
        config: &WriteConfig,
    ) -> Result<(), FilesystemError> {
        if config.visibility.is_some() {
            return Err(FilesystemError::UnsupportedVisibility {
                path: trim_path(path).to_string(),
                visibility: config.visibility,
            });
        }

        self.ensure_directory(path).await
    }

    fn list_contents<'a>(
        &'a self,
        path: &str,
        deep: bool,
    ) -> BoxStream<'a, Result<StorageAttributes, FilesystemError>> {
        self.list_stream(path, deep)
    }

    async fn metadata(&self, path: &str) -> Result<Option<StorageAttributes>, FilesystemError> {
        self.get_metadata(path, MetadataKind::Metadata).await
    }

    async fn file_size(&self, path: &str) -> Result<FileAttributes, FilesystemError> {
        self.file_attributes(path, MetadataKind::FileSize).await
    }

    async fn mime_type(&self, path: &str) -> Result<FileAttributes, FilesystemError> {
        self.file_attributes(path, MetadataKind::MimeType).await
    }

    async fn last_modified(&self, path: &str) -> Result<FileAttributes, FilesystemError> {
        self.file_attributes(path, MetadataKind::LastModified).await
    }

    fn visibility(&self, path: &str) -> Result<FileAttributes, FilesystemError> {
        Err(FilesystemError::UnsupportedVisibility {
            path: trim_path(path).to_string(),
            visibility: None,
        })
    }

    fn set_visibility(&self, path: &str, visibility: Visibility) -> Result<(), FilesystemError> {
        Err(FilesystemError::UnsupportedVisibility {
            path: trim_path(path).to_string(),
            visibility: Some(visibility),
        })
    }
}
