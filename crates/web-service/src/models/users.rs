//! 用户相关的Web层模型

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 列表查询未指定 `limit` 参数时的默认返回数量
pub const DEFAULT_LIST_LIMIT: u32 = 10;

/// 用户信息返回对象
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UserInfo {
    #[schema(example = 1)]
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// 用户创建请求体
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

/// 用户更新请求体
///
/// 所有字段都是可选的，未提供的字段保持原值
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// 用户列表查询参数
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    /// 搜索关键字（模糊搜索）
    pub search: Option<String>,

    /// 返回数量上限，默认为 [`DEFAULT_LIST_LIMIT`]
    pub limit: Option<u32>,
}

impl ListUsersQuery {
    /// 在进入服务层之前显式应用默认值
    pub fn limit_or_default(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}

impl From<storage::UserRecord> for UserInfo {
    fn from(record: storage::UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_defaults_to_ten() {
        let query = ListUsersQuery {
            search: None,
            limit: None,
        };
        assert_eq!(query.limit_or_default(), 10);

        let query = ListUsersQuery {
            search: Some("alice".to_string()),
            limit: Some(5),
        };
        assert_eq!(query.limit_or_default(), 5);
    }

    #[test]
    fn test_user_info_from_record() {
        let record = storage::UserRecord {
            id: 3,
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
        };

        let info = UserInfo::from(record);
        assert_eq!(info.id, 3);
        assert_eq!(info.name, "alice");
        assert_eq!(info.email, "alice@example.com");
    }
}
