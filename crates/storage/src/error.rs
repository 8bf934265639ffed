use thiserror::Error;

/// 存储操作错误类型
///
/// 桩实现不会产生这些错误，但错误分类和传播路径是完整的，
/// 真实存储实现可以直接复用。
#[derive(Error, Debug)]
pub enum StorageError {
    /// 指定的资源不存在
    #[error("资源不存在: {0}")]
    NotFound(String),

    /// 输入数据无效
    #[error("输入数据无效: {0}")]
    InvalidInput(String),

    /// 资源冲突，例如唯一约束被破坏
    #[error("资源冲突: {0}")]
    Conflict(String),
}

impl StorageError {
    /// 创建资源不存在错误
    pub fn not_found<T: ToString>(msg: T) -> Self {
        Self::NotFound(msg.to_string())
    }

    /// 创建输入无效错误
    pub fn invalid_input<T: ToString>(msg: T) -> Self {
        Self::InvalidInput(msg.to_string())
    }

    /// 创建资源冲突错误
    pub fn conflict<T: ToString>(msg: T) -> Self {
        Self::Conflict(msg.to_string())
    }
}
