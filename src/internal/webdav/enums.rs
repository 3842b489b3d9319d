use std::fmt;

use reqwest::Method;

use crate::internal::webdav::structs::TransportError;

/// 本库会发出的请求方法（标准 HTTP 方法 + WebDAV 扩展方法）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DavMethod {
    Get,
    Put,
    Delete,
    Propfind,
    Mkcol,
    Move,
    Copy,
}

impl DavMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DavMethod::Get => "GET",
            DavMethod::Put => "PUT",
            DavMethod::Delete => "DELETE",
            DavMethod::Propfind => "PROPFIND",
            DavMethod::Mkcol => "MKCOL",
            DavMethod::Move => "MOVE",
            DavMethod::Copy => "COPY",
        }
    }

    pub fn to_head_method(&self) -> Result<Method, TransportError> {
        Method::from_bytes(self.as_str().as_bytes())
            .map_err(|_| TransportError::InvalidMethod(self.as_str()))
    }
}

impl fmt::Display for DavMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// 仅返回当前资源
    Zero,
    /// 返回当前资源及直接子资源
    One,
    /// 返回当前资源及所有子资源（谨慎使用）
    Infinity,
}

impl Depth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Depth::Zero => "0",
            Depth::One => "1",
            Depth::Infinity => "infinity",
        }
    }
}
