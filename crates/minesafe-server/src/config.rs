use anyhow::Result;
use config::{Config, File, FileFormat};
use minesafe_notify::NotifyLevel;
use serde::Deserialize;
use std::path::Path;

/// 服务配置
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: HttpConfig,
    pub camera: CameraConfig,
    pub notify: NotifyConfig,
}

/// HTTP 监听配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// 本地摄像头配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// 画面宽度
    pub width: u32,
    /// 画面高度
    pub height: u32,
    /// 模拟权限被拒绝（演示/联调用）
    pub simulate_denial: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            simulate_denial: false,
        }
    }
}

/// 通知配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// 外部回调地址，缺省只保留站内通知
    pub webhook_url: Option<String>,
    /// 最小通知级别
    pub min_level: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            min_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// 加载配置文件
    ///
    /// 文件不存在时返回默认配置。
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(ServerConfig::default());
        }

        let config = Config::builder()
            .add_source(File::new(
                path.to_str()
                    .ok_or_else(|| anyhow::anyhow!("Invalid config path"))?,
                FileFormat::Toml,
            ))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// 最小通知级别，未知取值按 Info 处理
    pub fn notify_level(&self) -> NotifyLevel {
        match self.notify.min_level.as_str() {
            "warning" => NotifyLevel::Warning,
            "error" => NotifyLevel::Error,
            "critical" => NotifyLevel::Critical,
            _ => NotifyLevel::Info,
        }
    }
}
