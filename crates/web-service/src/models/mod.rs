//! Web层数据模型

pub mod err;
pub mod users;
