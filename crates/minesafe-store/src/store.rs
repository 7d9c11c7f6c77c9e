use crate::seed::SeedData;
use chrono::Utc;
use minesafe_capture::{CaptureController, CaptureToggle, Snapshot};
use minesafe_types::{
    filter_alerts, Alert, AlertFilter, AlertStats, AlertStatus, AnalyticsData, Device,
    DeviceStatus, Page, SensorReading,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// 会话状态
///
/// 设备/告警/传感器集合的权威副本。选中项只保存 ID，读取时
/// 重新解析，视图不得缓存记录副本。
struct SessionState {
    current_page: Page,
    devices: Vec<Device>,
    alerts: Vec<Alert>,
    sensors: Vec<SensorReading>,
    selected_device: Option<String>,
    selected_alert: Option<String>,
    detail_open: bool,
    analytics: Option<AnalyticsData>,
}

/// 仪表盘状态存储
///
/// 会话状态的唯一可变入口。所有变更都经由写锁串行执行，
/// 每个操作要么完整生效要么毫无影响。采集句柄同样由存储
/// 独占持有。
pub struct DashboardStore {
    state: Arc<RwLock<SessionState>>,
    camera: Arc<CaptureController>,
}

impl DashboardStore {
    /// 用种子数据创建存储
    pub fn new(seed: SeedData, camera: Arc<CaptureController>) -> Self {
        let selected_device = seed.devices.first().map(|d| d.id.clone());

        info!(
            devices = seed.devices.len(),
            alerts = seed.alerts.len(),
            sensors = seed.sensors.len(),
            "Dashboard store seeded"
        );

        Self {
            state: Arc::new(RwLock::new(SessionState {
                current_page: Page::default(),
                devices: seed.devices,
                alerts: seed.alerts,
                sensors: seed.sensors,
                selected_device,
                selected_alert: None,
                detail_open: false,
                analytics: seed.analytics,
            })),
            camera,
        }
    }

    // ========== 页面导航 ==========

    /// 当前页面
    pub async fn page(&self) -> Page {
        self.state.read().await.current_page
    }

    /// 切换页面
    ///
    /// 入参是封闭枚举，非法页面在 API 解析边界就已被显式拒绝。
    pub async fn set_page(&self, page: Page) {
        let mut state = self.state.write().await;
        state.current_page = page;
        debug!(page = %page.as_str(), "Page changed");
    }

    // ========== 设备与传感器 ==========

    pub async fn devices(&self) -> Vec<Device> {
        self.state.read().await.devices.clone()
    }

    pub async fn device(&self, device_id: &str) -> Option<Device> {
        let state = self.state.read().await;
        state.devices.iter().find(|d| d.id == device_id).cloned()
    }

    /// 传感器读数，等级按当前值/阈值重算
    pub async fn sensors(&self) -> Vec<SensorReading> {
        let state = self.state.read().await;
        state.sensors.iter().map(|s| s.refreshed()).collect()
    }

    /// 选中设备
    ///
    /// 未知 ID 是无操作（控件可能已经过期，不允许因此崩溃）。
    pub async fn select_device(&self, device_id: &str) -> bool {
        let mut state = self.state.write().await;
        if state.devices.iter().any(|d| d.id == device_id) {
            state.selected_device = Some(device_id.to_string());
            debug!(device_id = %device_id, "Device selected");
            true
        } else {
            debug!(device_id = %device_id, "Device not found, selection ignored");
            false
        }
    }

    /// 当前选中的设备（按 ID 重新解析）
    pub async fn selected_device(&self) -> Option<Device> {
        let state = self.state.read().await;
        let id = state.selected_device.as_ref()?;
        state.devices.iter().find(|d| &d.id == id).cloned()
    }

    // ========== 告警 ==========

    pub async fn alerts(&self) -> Vec<Alert> {
        self.state.read().await.alerts.clone()
    }

    pub async fn alert(&self, alert_id: &str) -> Option<Alert> {
        let state = self.state.read().await;
        state.alerts.iter().find(|a| a.id == alert_id).cloned()
    }

    /// 过滤后的告警列表与统计
    ///
    /// 统计永远在过滤后的集合上计算，与列表保持一致。
    pub async fn alerts_filtered(&self, filter: &AlertFilter) -> (Vec<Alert>, AlertStats) {
        let state = self.state.read().await;
        let filtered = filter_alerts(&state.alerts, filter, Utc::now());
        let stats = AlertStats::over(&filtered);
        (filtered, stats)
    }

    /// 推进告警处理状态
    ///
    /// 只改动命中记录的 `status` 字段。未知 ID、非法推进和终态上
    /// 的重复请求都是无操作，返回 false，从不报错也从不新建记录。
    pub async fn set_alert_status(&self, alert_id: &str, target: AlertStatus) -> bool {
        let mut state = self.state.write().await;
        match state.alerts.iter_mut().find(|a| a.id == alert_id) {
            Some(alert) => {
                let changed = alert.advance_to(target);
                if changed {
                    info!(
                        alert_id = %alert_id,
                        status = %target.as_str(),
                        "Alert status advanced"
                    );
                } else {
                    debug!(
                        alert_id = %alert_id,
                        current = %alert.status.as_str(),
                        requested = %target.as_str(),
                        "Alert transition ignored"
                    );
                }
                changed
            }
            None => {
                debug!(alert_id = %alert_id, "Alert not found, status change ignored");
                false
            }
        }
    }

    // ========== 详情弹窗 ==========

    /// 选中告警并打开详情
    ///
    /// 选中项与弹窗开关在同一次写锁内一起变更，不存在只改其一的
    /// 中间状态。未知 ID 时两者都不动。
    pub async fn select_alert(&self, alert_id: &str) -> bool {
        let mut state = self.state.write().await;
        if state.alerts.iter().any(|a| a.id == alert_id) {
            state.selected_alert = Some(alert_id.to_string());
            state.detail_open = true;
            debug!(alert_id = %alert_id, "Alert detail opened");
            true
        } else {
            debug!(alert_id = %alert_id, "Alert not found, detail not opened");
            false
        }
    }

    /// 关闭详情并清除选中
    pub async fn close_detail(&self) {
        let mut state = self.state.write().await;
        state.selected_alert = None;
        state.detail_open = false;
        debug!("Alert detail closed");
    }

    /// 当前选中的告警（按 ID 重新解析）
    pub async fn selected_alert(&self) -> Option<Alert> {
        let state = self.state.read().await;
        let id = state.selected_alert.as_ref()?;
        state.alerts.iter().find(|a| &a.id == id).cloned()
    }

    pub async fn detail_open(&self) -> bool {
        self.state.read().await.detail_open
    }

    // ========== 统计分析 ==========

    /// 统计分析快照
    ///
    /// 告警历史总量来自遥测源上报；设备在线/离线数可以从权威
    /// 集合推导，每次读取时重算。种子缺失时退化为全零快照。
    pub async fn analytics(&self) -> AnalyticsData {
        let state = self.state.read().await;
        let mut data = state.analytics.clone().unwrap_or_default();
        data.devices_online = state.devices.iter().filter(|d| d.is_online()).count() as u64;
        data.devices_offline = state
            .devices
            .iter()
            .filter(|d| d.status == DeviceStatus::Offline)
            .count() as u64;
        data
    }

    // ========== 本地采集 ==========

    /// 切换本地摄像头预览
    pub async fn toggle_camera(&self) -> minesafe_capture::Result<CaptureToggle> {
        self.camera.toggle().await
    }

    /// 抓拍当前预览画面
    pub async fn camera_screenshot(&self) -> minesafe_capture::Result<Snapshot> {
        self.camera.screenshot().await
    }

    pub async fn camera_active(&self) -> bool {
        self.camera.is_active().await
    }

    /// 采集控制器引用（用于取消等高级操作）
    pub fn camera(&self) -> &Arc<CaptureController> {
        &self.camera
    }
}
