use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 设备状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    /// 在线
    Online,
    /// 离线
    Offline,
    /// 异常
    Warning,
}

impl DeviceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DeviceStatus::Online => "online",
            DeviceStatus::Offline => "offline",
            DeviceStatus::Warning => "warning",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "online" => DeviceStatus::Online,
            "warning" => DeviceStatus::Warning,
            _ => DeviceStatus::Offline,
        }
    }
}

/// 监控设备
///
/// 固定点位的摄像头/传感器端点。设备集合由遥测源在启动时提供，
/// 会话内不新增不删除；状态与在线时间由遥测源更新。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// 设备 ID（全局唯一）
    pub id: String,

    /// 设备名称
    pub name: String,

    /// 安装位置
    pub location: String,

    /// 设备状态
    pub status: DeviceStatus,

    /// 最后在线时间
    pub last_seen: DateTime<Utc>,

    /// 摄像头是否开启
    pub camera_active: bool,
}

impl Device {
    /// 设置状态
    pub fn set_status(&mut self, status: DeviceStatus) {
        self.status = status;
    }

    /// 更新最后在线时间
    pub fn touch_last_seen(&mut self) {
        self.last_seen = Utc::now();
    }

    pub fn is_online(&self) -> bool {
        self.status == DeviceStatus::Online
    }
}
