//! 存储模块
//!
//! 这个模块定义了用户数据的存储接口和模型。
//!
//! 当前服务没有接入真实数据库，仓库接口由 [`StubUserRepository`] 提供
//! 桩实现：所有操作都返回默认值，不产生任何持久化副作用。
//! 接入真实存储时只需要实现 [`UserRepositoryTrait`]。

pub mod error;
pub mod models;
pub mod repositories;

pub use error::StorageError;
pub use models::user::{UserCreate, UserRecord, UserUpdate};
pub use repositories::{traits::UserRepositoryTrait, user::StubUserRepository};

/// 存储操作结果类型
pub type StorageResult<T> = Result<T, StorageError>;
