//! 用户仓库 trait 定义
//!
//! 定义用户存储操作的抽象接口

use crate::models::user::{UserCreate, UserRecord, UserUpdate};
use crate::StorageResult;

/// 用户仓库trait定义
///
/// 定义了用户相关的存储操作接口，支持：
/// - 用户搜索（关键字 + 数量限制）
/// - 用户创建
/// - 用户查询
/// - 用户更新
/// - 用户删除
#[async_trait::async_trait]
pub trait UserRepositoryTrait: Send + Sync + Clone + 'static {
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
