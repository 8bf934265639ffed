//! 用户存储模型
//!
//! 定义用户相关的存储模型结构体

/// 用户信息结构体
#[derive(Debug, Clone, Default)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// 用户创建参数
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

/// 用户更新参数
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}
