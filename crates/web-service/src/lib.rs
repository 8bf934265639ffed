//! Web服务模块
//!
//! 提供用户资源的 HTTP API 接口和文档服务

use color_eyre::Result;
use shared_lib::AppConfig;
use std::sync::Arc;
use storage::StubUserRepository;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;
pub mod services;

use services::{UserService, UserServiceTrait};

/// 应用共享状态
#[derive(Clone)]
pub struct AppState<US: UserServiceTrait> {
    pub user_service: Arc<US>,
}

/// 具体的 AppState 类型别名
pub type ConcreteAppState = AppState<UserService<StubUserRepository>>;

/// 启动 Web 服务
pub async fn start_web_service(config: Arc<AppConfig>, mut shutdown_rx: Receiver<bool>) -> Result<()> {
    let shared_state = AppState {
        user_service: Arc::new(UserService::new(StubUserRepository::new())),
    };

    let router = routes::create_app_router(shared_state);

    info!("🚀 启动 Web Service 在 {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            shutdown_rx.changed().await.expect("Failed to receive shutdown signal");
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
