//! 用户服务
//!
//! 提供用户相关的业务逻辑操作

use crate::services::traits::UserServiceTrait;
use storage::{StorageResult, UserCreate, UserRecord, UserRepositoryTrait, UserUpdate};

#[derive(Debug, Clone)]
pub struct UserService<UR: UserRepositoryTrait> {
    user_repository: UR,
}

impl<UR: UserRepositoryTrait> UserService<UR> {
    pub fn new(user_repository: UR) -> Self {
        Self { user_repository }
    }
}

#[async_trait::async_trait]
impl<UR: UserRepositoryTrait> UserServiceTrait for UserService<UR> {
    async fn find_users(&self, search: Option<String>, limit: i64) -> StorageResult<Vec<UserRecord>> {
        self.user_repository.find_users(search, limit).await
    }

    async fn get_user_by_id(&self, id: i64) -> StorageResult<UserRecord> {
        self.user_repository.get_user_by_id(id).await
    }

    async fn create_user(&self, user: UserCreate) -> StorageResult<UserRecord> {
        self.user_repository.create_user(user).await
    }

    async fn update_user(&self, id: i64, update: UserUpdate) -> StorageResult<UserRecord> {
        self.user_repository.update_user(id, update).await
    }

    async fn delete_user(&self, id: i64) -> StorageResult<()> {
        self.user_repository.delete_user(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::StubUserRepository;

    #[tokio::test]
    async fn test_service_delegates_to_repository() {
        let service = UserService::new(StubUserRepository::new());

        let users = service.find_users(Some("alice".to_string()), 10).await.unwrap();
        assert!(users.is_empty());

        let user = service.get_user_by_id(7).await.unwrap();
        assert_eq!(user.id, 0);

        let user = service
            .create_user(UserCreate {
                name: "alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.name, "");

        let user = service.update_user(7, UserUpdate::default()).await.unwrap();
        assert_eq!(user.id, 0);

        assert!(service.delete_user(7).await.is_ok());
    }
}
