//! 文件系统适配层：把逻辑路径上的文件操作翻译成 WebDAV 请求，并把各家服务器参差不齐的属性归一化。

pub mod enums;
pub mod functions;
pub mod impl_traits;
pub mod structs;
pub mod traits;
