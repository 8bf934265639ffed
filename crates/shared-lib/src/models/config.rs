use color_eyre::Result;
use std::sync::Arc;

/// 默认监听地址
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// 程序配置
pub struct AppConfig {
    /// HTTP服务监听地址
    ///
    /// 可通过环境变量 `BIND_ADDR` 来调整
    pub bind_addr: String,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        dotenvy::dotenv().ok();

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let config = AppConfig { bind_addr };
        Ok(Arc::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_provides_bind_addr() {
        let config = AppConfig::load().unwrap();

        // 未配置环境变量时使用默认监听地址
        assert!(!config.bind_addr.is_empty());
        assert!(config.bind_addr.contains(':'));
    }
}
