//! WebDAV 协议层：请求方法、PROPFIND 原始 XML、传输 trait 以及基于 reqwest 的默认实现。

pub mod enums;
pub mod functions;
pub mod impl_traits;
pub mod raw_xml;
pub mod structs;
pub mod traits;
