use crate::internal::filesystem::enums::Visibility;

/// 写入类操作的配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteConfig {
    /// 要求设置的可见性；只要设置了，写入就会在发请求前失败
    pub visibility: Option<Visibility>,
}

impl WriteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }
}
