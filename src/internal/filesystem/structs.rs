pub mod filesystem_error;
pub mod storage_attributes;
pub mod webdav_adapter;
pub mod write_config;

pub use filesystem_error::FilesystemError;
pub use storage_attributes::{DirectoryAttributes, FileAttributes, StorageAttributes};
pub use webdav_adapter::WebDavAdapter;
pub use write_config::WriteConfig;
