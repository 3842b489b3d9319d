/// 内部导出的模块
mod internal;


/// 导出核心入口函数
pub use internal::entrance::remote::*;

pub mod auth {
    use crate::internal;
    pub use internal::auth::*;
    pub use internal::auth::structs::client_config::{ClientConfig, DEFAULT_USER_AGENT};
    pub use internal::auth::structs::webdav_auth::{
        WEBDAV_PASSWORD, WEBDAV_URL, WEBDAV_USERNAME, WebdavAuth,
    };
}

/// 对外提供webdav基础访问能力，不能限制死在适配器中，以防有人自己要用
pub mod webdav {
    pub mod functions {
        use crate::internal;
        pub use internal::webdav::functions::get_folders_raw_data::*;
        pub use internal::webdav::functions::propfind_body::*;
    }

    pub mod enums {
        use crate::internal;
        pub use internal::webdav::enums::*;
    }

    pub mod traits {
        use crate::internal;
        pub use internal::webdav::raw_xml::impl_multi_status::*;
        pub use internal::webdav::traits::dav_client::*;
    }

    pub mod structs {
        use crate::internal;
        pub use internal::webdav::raw_xml::raw_file::*;
        pub use internal::webdav::structs::*;
    }
}

/// 文件系统适配层：对上层门面暴露的操作与类型
pub mod filesystem {
    pub mod functions {
        use crate::internal;
        pub use internal::filesystem::functions::encode_path::*;
        pub use internal::filesystem::functions::normalize::*;
    }

    pub mod enums {
        use crate::internal;
        pub use internal::filesystem::enums::*;
    }

    pub mod traits {
        use crate::internal;
        pub use internal::filesystem::traits::filesystem_adapter::*;
    }

    pub mod structs {
        use crate::internal;
        pub use internal::filesystem::structs::*;
    }
}
