//! 用户相关接口
//!
//! 五个接口都保持桩语义：不访问真实存储，固定返回默认对象或空列表。
//! 真实实现只需要替换 [`AppState`] 中注入的服务，接口层不需要改动。

use crate::models::err::AppError;
use crate::models::users::{ListUsersQuery, UserCreate, UserInfo, UserUpdate};
use crate::services::UserServiceTrait;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

/// 根据查询参数搜索用户
///
/// 根据查询参数搜索符合要求的用户列表。
///
/// 查询参数由 [`ListUsersQuery`] 决定，两个参数都是可选参数。
/// `limit` 未提供时的默认值在进入服务层之前显式应用，
/// 参考 [`ListUsersQuery::limit_or_default`]。
///
/// ## 返回值
///
/// 返回值的类型是 [`Result<Json<Vec<UserInfo>>, AppError>`]：
///
/// 1. [`Json`] 会对内部类型进行json序列化，保证返回的数据是一个合法的json字符串
/// 2. [`UserInfo`] 是实际的业务返回对象
/// 3. [`AppError`] 是错误时返回的Error类型，会根据错误分类转换为相应的http错误码
#[utoipa::path(get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "User list", body = Vec<UserInfo>)
    ),
)]
pub async fn find_users<US: UserServiceTrait>(
    State(state): State<AppState<US>>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<UserInfo>>, AppError> {
    debug!("🔍 搜索用户 {:#?}", query);

    // 在边界处显式应用默认limit，服务层拿到的始终是确定值
    let limit = query.limit_or_default();

    let users = state.user_service.find_users(query.search, limit as i64).await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// 创建用户
///
/// 根据用户输入参数创建用户信息
#[utoipa::path(post,
    path = "/users",
    tag = "users",
    request_body = UserCreate,
    responses(
        (status = 200, description = "Create user result", body = UserInfo)
    )
)]
pub async fn create_user<US: UserServiceTrait>(
    State(state): State<AppState<US>>,
    Json(user): Json<UserCreate>,
) -> Result<Json<UserInfo>, AppError> {
    debug!("Creating user {:#?}", user);

    let record = storage::UserCreate {
        name: user.name,
        email: user.email,
    };
    let user = state.user_service.create_user(record).await?;

    Ok(Json(user.into()))
}

/// 查询指定用户信息
#[utoipa::path(get, path = "/users/{id}", tag = "users")]
pub async fn get_user<US: UserServiceTrait>(
    State(state): State<AppState<US>>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserInfo>, AppError> {
    debug!("Getting user id {:#?}", user_id);

    let user = state.user_service.get_user_by_id(user_id).await?;

    Ok(Json(user.into()))
}

/// 更新用户信息
///
/// 根据用户指定的 `id` 和 修改信息 [`UserUpdate`] 来更新用户信息。
#[utoipa::path(put, path = "/users/{id}", tag = "users")]
pub async fn update_user<US: UserServiceTrait>(
    State(state): State<AppState<US>>,
    Path(user_id): Path<i64>,
    Json(info): Json<UserUpdate>,
) -> Result<Json<UserInfo>, AppError> {
    debug!("Updating user {} with {:#?}", user_id, info);

    let update = storage::UserUpdate {
        name: info.name,
        email: info.email,
    };
    let user = state.user_service.update_user(user_id, update).await?;

    Ok(Json(user.into()))
}

/// 删除指定的用户
///
/// 删除成功返回 204，不携带响应体。
#[utoipa::path(delete,
    path = "/users/{id}",
    tag = "users",
    responses(
        (status = 204, description = "User deleted")
    )
)]
pub async fn delete_user<US: UserServiceTrait>(
    State(state): State<AppState<US>>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("delete user {:#?}", user_id);

    state.user_service.delete_user(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
