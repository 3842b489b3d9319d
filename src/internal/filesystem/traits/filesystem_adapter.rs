//! 面向上层文件系统门面的统一操作接口。
//!
//! 所有路径都是逻辑路径（`/` 分隔，首尾的 `/` 会被忽略，空串表示根目录）。

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;
use tokio::io::AsyncRead;

use crate::internal::filesystem::enums::Visibility;
use crate::internal::filesystem::structs::{
    FileAttributes, FilesystemError, StorageAttributes, WriteConfig,
};

/// 读取流的类型
pub type ReadStream = Box<dyn AsyncRead + Send + Unpin>;

#[async_trait]
pub trait FilesystemAdapter: Send + Sync {
    /// 资源是否存在（文件或目录）。查询失败一律视为不存在
    async fn file_exists(&self, path: &str) -> bool;

    /// 目录是否存在。查询失败一律视为不存在
    async fn directory_exists(&self, path: &str) -> bool;

    async fn read(&self, path: &str) -> Result<Bytes, FilesystemError>;

    async fn read_stream(&self, path: &str) -> Result<ReadStream, FilesystemError>;

    /// 写入文件，会先创建缺失的父目录
    async fn write(
        &self,
        path: &str,
        contents: Bytes,
        config: &WriteConfig,
    ) -> Result<(), FilesystemError>;

    /// 读完 `contents` 后再写入，其余同 [`write`](Self::write)
    async fn write_stream(
        &self,
        path: &str,
        contents: &mut (dyn AsyncRead + Send + Unpin),
        config: &WriteConfig,
    ) -> Result<(), FilesystemError>;

    async fn move_file(
        &self,
        source: &str,
        destination: &str,
        config: &WriteConfig,
    ) -> Result<(), FilesystemError>;

    /// 服务端复制，会先创建目标的父目录
    async fn copy(
        &self,
        source: &str,
        destination: &str,
        config: &WriteConfig,
    ) -> Result<(), FilesystemError>;

    async fn delete(&self, path: &str) -> Result<(), FilesystemError>;

    async fn delete_directory(&self, path: &str) -> Result<(), FilesystemError>;

    /// 递归创建目录，已存在时什么都不做
    async fn create_directory(
        &self,
        path: &str,
        config: &WriteConfig,
    ) -> Result<(), FilesystemError>;

    /// 惰性列举目录内容，`deep` 为 true 时先序深度优先展开子目录
    fn list_contents<'a>(
        &'a self,
        path: &str,
        deep: bool,
    ) -> BoxStream<'a, Result<StorageAttributes, FilesystemError>>;

    /// 归一化后的属性，`None` 表示不存在
    async fn metadata(&self, path: &str) -> Result<Option<StorageAttributes>, FilesystemError>;

    async fn file_size(&self, path: &str) -> Result<FileAttributes, FilesystemError>;

    async fn mime_type(&self, path: &str) -> Result<FileAttributes, FilesystemError>;

    async fn last_modified(&self, path: &str) -> Result<FileAttributes, FilesystemError>;

    /// 永远失败
    fn visibility(&self, path: &str) -> Result<FileAttributes, FilesystemError>;

    /// 永远失败
    fn set_visibility(&self, path: &str, visibility: Visibility) -> Result<(), FilesystemError>;
}
