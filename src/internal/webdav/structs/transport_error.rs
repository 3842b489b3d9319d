//! 传输层错误：HTTP 状态异常、连接故障、XML 解析失败等。
//!
//! 适配层会在每个公开操作的边界把它包装成具体的 [`FilesystemError`](crate::filesystem::structs::FilesystemError)，
//! 调用方不会直接拿到这个类型。

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    /// 服务器返回 4xx/5xx
    #[error("HTTP 状态异常 {status}")]
    Http { status: StatusCode, body: String },

    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("XML 解析失败: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("路径格式错误: {0}")]
    Url(#[from] url::ParseError),

    /// 拼接后的地址跑出了 base_url
    #[error("父目录不允许: {0}")]
    OutsideBaseUrl(String),

    #[error("无效的请求方法: {0}")]
    InvalidMethod(&'static str),

    #[error("无效的请求头: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("缺少环境变量 {0}")]
    MissingEnv(&'static str),
}

impl TransportError {
    /// 服务器返回的 HTTP 状态码，连接类故障时为 `None`
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransportError::Http { status, .. } => Some(*status),
            TransportError::Request(e) => e.status(),
            _ => None,
        }
    }
}
