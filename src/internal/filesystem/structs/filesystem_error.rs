//! 适配层对外的错误类型。
//!
//! 每个公开操作都会把传输层错误包装成对应的变体，并带上出错的路径；
//! 原始 [`TransportError`] 只会作为 `source()` 出现。

use reqwest::StatusCode;
use thiserror::Error;

use crate::internal::filesystem::enums::{MetadataKind, Visibility};
use crate::internal::webdav::structs::TransportError;

#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("无法读取文件 {path}{}", with_reason(.reason))]
    UnableToReadFile {
        path: String,
        reason: String,
        #[source]
        cause: Option<TransportError>,
    },

    #[error("无法写入文件 {path}{}", with_reason(.reason))]
    UnableToWriteFile {
        path: String,
        reason: String,
        #[source]
        cause: Option<TransportError>,
    },

    #[error("无法将 {from} 移动到 {to}{}", with_reason(.reason))]
    UnableToMoveFile {
        from: String,
        to: String,
        reason: String,
        #[source]
        cause: Option<TransportError>,
    },

    #[error("无法将 {from} 复制到 {to}{}", with_reason(.reason))]
    UnableToCopyFile {
        from: String,
        to: String,
        reason: String,
        #[source]
        cause: Option<TransportError>,
    },

    #[error("无法删除文件 {path}{}", with_reason(.reason))]
    UnableToDeleteFile {
        path: String,
        reason: String,
        #[source]
        cause: Option<TransportError>,
    },

    #[error("无法删除目录 {path}{}", with_reason(.reason))]
    UnableToDeleteDirectory {
        path: String,
        reason: String,
        #[source]
        cause: Option<TransportError>,
    },

    #[error("无法创建目录 {path}{}", with_reason(.reason))]
    UnableToCreateDirectory {
        path: String,
        reason: String,
        #[source]
        cause: Option<TransportError>,
    },

    #[error("无法获取 {path} 的元数据 ({kind}){}", with_reason(.reason))]
    UnableToRetrieveMetadata {
        path: String,
        kind: MetadataKind,
        reason: String,
        #[source]
        cause: Option<TransportError>,
    },

    /// WebDAV 不支持可见性，任何相关请求都直接拒绝
    #[error("WebDAV 不支持可见性设置: {path}{}", with_visibility(.visibility))]
    UnsupportedVisibility {
        path: String,
        visibility: Option<Visibility>,
    },
}

fn with_reason(reason: &str) -> String {
    if reason.is_empty() {
        String::new()
    } else {
        format!(": {reason}")
    }
}

fn with_visibility(visibility: &Option<Visibility>) -> String {
    visibility.map(|v| format!(" ({v})")).unwrap_or_default()
}

/// 非预期状态码的统一描述
pub(crate) fn status_reason(status: StatusCode) -> String {
    format!("HTTP 状态码 {}", status.as_u16())
}

/// 传输错误带状态码时给出状态描述，否则留空（原因在 source 里）
pub(crate) fn transport_reason(error: &TransportError) -> String {
    error.status().map(status_reason).unwrap_or_default()
}

impl FilesystemError {
    /// 出错的（源）路径
    pub fn path(&self) -> &str {
        match self {
            FilesystemError::UnableToReadFile { path, .. }
            | FilesystemError::UnableToWriteFile { path, .. }
            | FilesystemError::UnableToDeleteFile { path, .. }
            | FilesystemError::UnableToDeleteDirectory { path, .. }
            | FilesystemError::UnableToCreateDirectory { path, .. }
            | FilesystemError::UnableToRetrieveMetadata { path, .. }
            | FilesystemError::UnsupportedVisibility { path, .. } => path,
            FilesystemError::UnableToMoveFile { from, .. }
            | FilesystemError::UnableToCopyFile { from, .. } => from,
        }
    }

    /// 底层传输错误（如果有）
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            FilesystemError::UnableToReadFile { cause, .. }
            | FilesystemError::UnableToWriteFile { cause, .. }
            | FilesystemError::UnableToMoveFile { cause, .. }
            | FilesystemError::UnableToCopyFile { cause, .. }
            | FilesystemError::UnableToDeleteFile { cause, .. }
            | FilesystemError::UnableToDeleteDirectory { cause, .. }
            | FilesystemError::UnableToCreateDirectory { cause, .. }
            | FilesystemError::UnableToRetrieveMetadata { cause, .. } => cause.as_ref(),
            FilesystemError::UnsupportedVisibility { .. } => None,
        }
    }

    pub(crate) fn retrieve_metadata(
        path: &str,
        kind: MetadataKind,
        reason: impl Into<String>,
        cause: Option<TransportError>,
    ) -> Self {
        FilesystemError::UnableToRetrieveMetadata {
            path: path.to_string(),
            kind,
            reason: reason.into(),
            cause,
        }
    }
}
