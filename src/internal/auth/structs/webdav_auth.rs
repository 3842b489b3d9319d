use core::fmt;
use std::env;
use std::sync::Arc;

use base64::Engine;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use sha2::{Digest, Sha256};
use url::Url;

use crate::internal::auth::structs::client_config::ClientConfig;
use crate::internal::webdav::structs::TransportError;

/// 环境变量名：WebDAV 根 URL（建议以 / 结尾）
pub const WEBDAV_URL: &str = "WEBDAV_URL";
/// 环境变量名：用户名
pub const WEBDAV_USERNAME: &str = "WEBDAV_USERNAME";
/// 环境变量名：密码
pub const WEBDAV_PASSWORD: &str = "WEBDAV_PASSWORD";

/// 认证结构体
///
/// 该结构体定位
/// - 用于存储基础WebDav认证信息
/// - 为 ReqwestDavClient 提供带认证头的 http 客户端
///
/// 默认Eq时会匹配base_url和token，如果需要单独比较token，需使用eq_only_token方法
#[derive(Clone)]
pub struct WebdavAuth {
    pub client: Client,    // 内部是Arc，不需要特殊处理
    pub base_url: Arc<Url>, // 适配器可能跨线程共享，所以用Arc
    pub(crate) encrypted_token: Arc<String>, // 对外导出时，不允许直接访问，哪怕它是被加密的
}

impl WebdavAuth {
    /// 创建新的认证结构体
    pub fn new(
        username: &str,
        password: &str,
        base_url: &str,
    ) -> Result<Self, TransportError> {
        Self::with_config(username, password, base_url, &ClientConfig::default())
    }

    /// 使用自定义 http 客户端配置创建
    pub fn with_config(
        username: &str,
        password: &str,
        base_url: &str,
        config: &ClientConfig,
    ) -> Result<Self, TransportError> {
        let http_client = InternalHttpClient::create(username, password, config)?;

        let base_url = format_base_url(base_url)?;

        Ok(Self {
            client: http_client.client,
            base_url: Arc::new(base_url),
            encrypted_token: Arc::new(http_client.encrypted_token),
        })
    }

    /// 从环境变量 `WEBDAV_URL` / `WEBDAV_USERNAME` / `WEBDAV_PASSWORD` 读取
    pub fn from_env(config: &ClientConfig) -> Result<Self, TransportError> {
        let url = env::var(WEBDAV_URL).map_err(|_| TransportError::MissingEnv(WEBDAV_URL))?;
        let username =
            env::var(WEBDAV_USERNAME).map_err(|_| TransportError::MissingEnv(WEBDAV_USERNAME))?;
        let password =
            env::var(WEBDAV_PASSWORD).map_err(|_| TransportError::MissingEnv(WEBDAV_PASSWORD))?;

        Self::with_config(&username, &password, &url, config)
    }

    /// 仅比较token是否相等
    pub fn eq_only_token(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token
    }

    /// 把相对 base_url 的定位符拼成绝对地址，拼出来的地址不允许跑出 base_url
    pub fn resolve(&self, locator: &str) -> Result<Url, TransportError> {
        let base_url = self.base_url.as_ref();
        let joined_url = base_url.join(locator)?;

        if joined_url.scheme() != base_url.scheme()
            || joined_url.host_str() != base_url.host_str()
            || joined_url.port_or_known_default() != base_url.port_or_known_default()
            || !joined_url.path().starts_with(base_url.path())
        {
            return Err(TransportError::OutsideBaseUrl(locator.to_string()));
        }

        Ok(joined_url)
    }
}

/// 用于比较认证结构体是否相等
impl PartialEq for WebdavAuth {
    fn eq(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token
            && self.base_url == other.base_url
    }
}

/// 防止debug泄漏账号
impl fmt::Debug for WebdavAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebdavAuth")
            .field("base_url", &self.base_url.as_str())
            .field("client", &"<Client with hidden authorization>")
            .finish()
    }
}

fn format_base_url(url: &str) -> Result<Url, TransportError> {
    let mut base_url = Url::parse(url)?;

    if !base_url.path().ends_with('/') {
        let new_path = format!("{}/", base_url.path());
        base_url.set_path(&new_path);
    }

    Ok(base_url)
}

/// 内部临时使用的http客户端结构体，在初始化WebdavAuth时使用
struct InternalHttpClient {
    client: Client,
    encrypted_token: String,
}

impl InternalHttpClient {
    fn encrypt_str(data: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// 创建http客户端，内部使用
    fn create(
        username: &str,
        password: &str,
        config: &ClientConfig,
    ) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();

        let token = base64::engine::general_purpose::STANDARD
            .encode(format!("{username}:{password}"));

        let auth_value = HeaderValue::from_str(&format!("Basic {}", token))?;

        headers.insert(AUTHORIZATION, auth_value);

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str());

        if config.http1_only {
            builder = builder.http1_only();
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder.build()?;

        let encrypted_token = Self::encrypt_str(&token);

        Ok(Self { client: http_client, encrypted_token })
    }
}
