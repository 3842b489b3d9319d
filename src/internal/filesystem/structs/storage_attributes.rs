use serde::{Deserialize, Serialize};

/// 文件属性，大小/类型/修改时间都是尽力而为，服务器不给就是 `None`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttributes {
    pub path: String,
    pub file_size: Option<u64>,
    pub mime_type: Option<String>,
    /// Unix 时间戳（秒）
    pub last_modified: Option<i64>,
}

impl FileAttributes {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file_size: None,
            mime_type: None,
            last_modified: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryAttributes {
    pub path: String,
}

impl DirectoryAttributes {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// 归一化后的资源属性，一个路径只会是文件或目录之一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StorageAttributes {
    File(FileAttributes),
    #[serde(rename = "dir")]
    Directory(DirectoryAttributes),
}

impl StorageAttributes {
    pub fn path(&self) -> &str {
        match self {
            StorageAttributes::File(file) => &file.path,
            StorageAttributes::Directory(dir) => &dir.path,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, StorageAttributes::File(_))
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, StorageAttributes::Directory(_))
    }

    pub fn as_file(&self) -> Option<&FileAttributes> {
        match self {
            StorageAttributes::File(file) => Some(file),
            StorageAttributes::Directory(_) => None,
        }
    }
}

impl From<FileAttributes> for StorageAttributes {
    fn from(value: FileAttributes) -> Self {
        StorageAttributes::File(value)
    }
}

impl From<DirectoryAttributes> for StorageAttributes {
    fn from(value: DirectoryAttributes) -> Self {
        StorageAttributes::Directory(value)
    }
}
