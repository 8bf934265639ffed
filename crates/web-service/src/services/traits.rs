//! 服务层 trait 定义
//!
//! 定义服务层的抽象接口，遵循六边形架构的端口适配器模式

use storage::{StorageResult, UserCreate, UserRecord, UserUpdate};

/// 用户服务 trait 定义
///
/// 定义了用户相关的业务逻辑接口，作为应用层的端口(Port)
///
/// 该 trait 作为业务逻辑的抽象接口，具体实现由 [`super::UserService`] 提供
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync + Clone + 'static {
    /// 根据查询参数搜索用户
    ///
    /// # 参数
    /// - `search`: 搜索关键字（模糊搜索）
    /// - `limit`: 返回数量上限
    ///
    /// # 返回值
    /// 返回符合条件的用户列表
    async fn find_users(&self, search: Option<String>, limit: i64) -> StorageResult<Vec<UserRecord>>;

    /// 根据 ID 获取用户信息
    ///
    /// # 参数
    /// - `id`: 用户 ID
    ///
    /// # 返回值
    /// 返回用户信息
    async fn get_user_by_id(&self, id: i64) -> StorageResult<UserRecord>;

    /// 创建新用户
    ///
    /// # 参数
    /// - `user`: 用户创建信息
    ///
    /// # 返回值
    /// 返回创建的用户信息
    async fn create_user(&self, user: UserCreate) -> StorageResult<UserRecord>;

    /// 更新用户信息
    ///
    /// # 参数
    /// - `id`: 用户 ID
    /// - `update`: 更新信息
    ///
    /// # 返回值
    /// 返回更新后的用户信息
    async fn update_user(&self, id: i64, update: UserUpdate) -> StorageResult<UserRecord>;

    /// 删除用户
    ///
    /// # 参数
    /// - `id`: 用户 ID
    async fn delete_user(&self, id: i64) -> StorageResult<()>;
}
