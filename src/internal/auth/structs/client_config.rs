use std::time::Duration;

/// 默认 User-Agent
pub const DEFAULT_USER_AGENT: &str = concat!("webdav_fs/", env!("CARGO_PKG_VERSION"));

/// HTTP 客户端配置
///
/// 超时由传输层负责，适配层本身不设超时；超时触发时会以传输错误的形式出现在具体操作里。
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// 单次请求超时，`None` 表示不限制
    pub timeout: Option<Duration>,
    pub user_agent: String,
    /// 只用 HTTP/1.1，部分 WebDAV 服务器对 h2 的扩展方法支持不好
    pub http1_only: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http1_only: true,
        }
    }
}

impl ClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
