pub mod client_config;
pub mod webdav_auth;
