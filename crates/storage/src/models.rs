//! 存储数据模型

pub mod user;

pub use user::{UserCreate, UserRecord, UserUpdate};
