use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use color_eyre::eyre::Error;
use storage::StorageError;
use thiserror::Error;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 存储层错误，根据具体分类转换为 404/400/409
    #[error(transparent)]
    StorageError(#[from] StorageError),

    /// 其他类型错误
    #[error(transparent)]
    InternalError(#[from] Error),
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::StorageError(err) => match err {
                StorageError::NotFound(msg) => (StatusCode::NOT_FOUND, format!("Resource not found: {msg}")).into_response(),
                StorageError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, format!("Invalid input: {msg}")).into_response(),
                StorageError::Conflict(msg) => (StatusCode::CONFLICT, format!("Conflict: {msg}")).into_response(),
            },
            AppError::InternalError(err) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Something went wrong: {err}")).into_response(),
        }
    }
}
