//! 用户仓库桩实现
//!
//! 当前服务还没有接入真实存储，这里提供一个桩实现：
//! 所有操作都构造默认值返回，不保存任何数据。
//! 查询固定返回空列表，单个用户固定返回默认用户。

use crate::models::user::{UserCreate, UserRecord, UserUpdate};
use crate::repositories::traits::UserRepositoryTrait;
use crate::StorageResult;
use tracing::debug;

/// 用户仓库桩结构体
#[derive(Debug, Clone, Default)]
pub struct StubUserRepository;

impl StubUserRepository {
    /// 创建新的用户仓库桩实例
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl UserRepositoryTrait for StubUserRepository {
    /// 根据查询参数搜索用户
    ///
    /// 桩实现忽略搜索关键字和数量限制，固定返回空列表。
    async fn find_users(&self, search: Option<String>, limit: i64) -> StorageResult<Vec<UserRecord>> {
        debug!("🔍 搜索用户 - 关键字: {:?}, 数量限制: {}", search, limit);

        Ok(Vec::new())
    }

    /// 根据 ID 获取用户信息
    ///
    /// 桩实现不查询任何数据，固定返回默认用户。
    async fn get_user_by_id(&self, id: i64) -> StorageResult<UserRecord> {
        debug!("🔍 根据 ID 获取用户: {}", id);

        Ok(UserRecord::default())
    }

    /// 创建新用户
    ///
    /// 桩实现忽略输入参数，固定返回默认用户。
    async fn create_user(&self, user: UserCreate) -> StorageResult<UserRecord> {
        debug!("📝 创建用户: {:#?}", user);

        Ok(UserRecord::default())
    }

    /// 更新用户信息
    ///
    /// 桩实现忽略输入参数，固定返回默认用户。
    async fn update_user(&self, id: i64, update: UserUpdate) -> StorageResult<UserRecord> {
        debug!("🔄 更新用户 {} 信息: {:#?}", id, update);

        Ok(UserRecord::default())
    }

    /// 删除用户
    ///
    /// 桩实现不删除任何数据。
    async fn delete_user(&self, id: i64) -> StorageResult<()> {
        debug!("🗑️ 删除用户: {}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_users_returns_empty_list() {
        let repo = StubUserRepository::new();

        let users = repo.find_users(Some("alice".to_string()), 10).await.unwrap();
        assert!(users.is_empty());

        // 没有关键字时同样返回空列表
        let users = repo.find_users(None, 10).await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_get_user_returns_default_user() {
        let repo = StubUserRepository::new();

        let user = repo.get_user_by_id(42).await.unwrap();
        assert_eq!(user.id, 0);
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
    }

    #[tokio::test]
    async fn test_create_user_ignores_input() {
        let repo = StubUserRepository::new();

        let user = repo
            .create_user(UserCreate {
                name: "alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.id, 0);
        assert_eq!(user.name, "");
    }

    #[tokio::test]
    async fn test_update_user_ignores_input() {
        let repo = StubUserRepository::new();

        let user = repo
            .update_user(
                7,
                UserUpdate {
                    name: Some("bob".to_string()),
                    email: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(user.id, 0);
        assert_eq!(user.email, "");
    }

    #[tokio::test]
    async fn test_delete_user_succeeds() {
        let repo = StubUserRepository::new();

        assert!(repo.delete_user(7).await.is_ok());
    }
}
