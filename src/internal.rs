//! 内部实现，对外导出以 lib.rs 中的模块为准

pub mod auth;
pub mod entrance;
pub mod filesystem;
pub mod webdav;
