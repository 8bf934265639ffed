use color_eyre::Result;
use shared_lib::AppConfig;
use tokio::sync::watch;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚀 启动 User Service...");

    let config = AppConfig::load()?;

    // 通过watch通道广播退出信号，web服务据此优雅关闭
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("🛑 收到退出信号，准备关闭服务...");
            let _ = shutdown_tx.send(true);
        }
    });

    web_service::start_web_service(config, shutdown_rx).await
}
