use minesafe_capture::{CaptureConstraints, Snapshot};
use minesafe_types::{
    Alert, AlertStats, Device, DeviceStatus, SensorLevel, SensorReading,
};
use serde::{Deserialize, Serialize};

/// 页面切换请求
#[derive(Debug, Deserialize)]
pub struct SetPageRequest {
    pub page: String,
}

/// 设备响应
#[derive(Debug, Serialize)]
pub struct DeviceResponse {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: DeviceStatus,
    pub last_seen: chrono::DateTime<chrono::Utc>,
    pub camera_active: bool,
}

impl From<Device> for DeviceResponse {
    fn from(device: Device) -> Self {
        Self {
            id: device.id,
            name: device.name,
            location: device.location,
            status: device.status,
            last_seen: device.last_seen,
            camera_active: device.camera_active,
        }
    }
}

/// 传感器响应（等级为读取时重算的结果）
#[derive(Debug, Serialize)]
pub struct SensorResponse {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub threshold: f64,
    pub status: SensorLevel,
}

impl From<SensorReading> for SensorResponse {
    fn from(reading: SensorReading) -> Self {
        let status = reading.current_level();
        Self {
            id: reading.id,
            name: reading.name,
            value: reading.value,
            unit: reading.unit,
            threshold: reading.threshold,
            status,
        }
    }
}

/// 摄像头状态响应
#[derive(Debug, Serialize)]
pub struct CameraStateResponse {
    pub active: bool,
    pub width: u32,
    pub height: u32,
}

impl CameraStateResponse {
    pub fn new(active: bool, constraints: CaptureConstraints) -> Self {
        Self {
            active,
            width: constraints.width,
            height: constraints.height,
        }
    }
}

/// 监控页聚合响应
#[derive(Debug, Serialize)]
pub struct MonitorResponse {
    pub devices: Vec<DeviceResponse>,
    pub sensors: Vec<SensorResponse>,
    pub selected_device: Option<DeviceResponse>,
    pub camera: CameraStateResponse,
}

/// 告警列表查询
///
/// 取值为原始字符串，缺省与 "all" 均为通配；无法识别的取值
/// 不报错，按不可满足处理（返回空集）。
#[derive(Debug, Default, Deserialize)]
pub struct AlertListQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub range: Option<String>,
}

/// 告警统计响应（基于过滤后的集合）
#[derive(Debug, Serialize)]
pub struct AlertStatsResponse {
    pub pending: usize,
    pub processing: usize,
    pub resolved: usize,
    pub high_unresolved: usize,
}

impl From<AlertStats> for AlertStatsResponse {
    fn from(stats: AlertStats) -> Self {
        Self {
            pending: stats.pending,
            processing: stats.processing,
            resolved: stats.resolved,
            high_unresolved: stats.high_unresolved,
        }
    }
}

/// 告警列表响应
#[derive(Debug, Serialize)]
pub struct AlertListResponse {
    pub data: Vec<Alert>,
    pub stats: AlertStatsResponse,
    pub total: usize,
}

/// 告警状态推进请求
#[derive(Debug, Deserialize)]
pub struct StatusChangeRequest {
    pub status: String,
}

/// 告警状态推进响应
#[derive(Debug, Serialize)]
pub struct StatusChangeResponse {
    pub alert_id: String,
    pub changed: bool,
    pub status: Option<minesafe_types::AlertStatus>,
}

/// 详情弹窗状态响应
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub open: bool,
    pub alert: Option<Alert>,
}

/// 抓拍响应（图像数据不随响应返回，只给元信息）
#[derive(Debug, Serialize)]
pub struct SnapshotResponse {
    pub captured_at: chrono::DateTime<chrono::Utc>,
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
}

impl From<Snapshot> for SnapshotResponse {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            captured_at: snapshot.captured_at,
            width: snapshot.width,
            height: snapshot.height,
            bytes: snapshot.data.len(),
        }
    }
}
