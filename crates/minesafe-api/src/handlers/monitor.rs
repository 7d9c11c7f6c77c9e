use crate::{error::Result, models::*, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

/// 监控页聚合视图
///
/// 设备、传感器、选中项和摄像头状态一次读出，传感器等级按
/// 当前值重算。
pub async fn get_monitor(State(state): State<AppState>) -> Json<MonitorResponse> {
    debug!("Rendering monitor view");

    let devices = state
        .store
        .devices()
        .await
        .into_iter()
        .map(DeviceResponse::from)
        .collect();
    let sensors = state
        .store
        .sensors()
        .await
        .into_iter()
        .map(SensorResponse::from)
        .collect();
    let selected_device = state.store.selected_device().await.map(DeviceResponse::from);
    let camera = CameraStateResponse::new(
        state.store.camera_active().await,
        state.store.camera().constraints(),
    );

    Json(MonitorResponse {
        devices,
        sensors,
        selected_device,
        camera,
    })
}

/// 列出设备
pub async fn list_devices(State(state): State<AppState>) -> Json<Vec<DeviceResponse>> {
    let devices = state.store.devices().await;
    Json(devices.into_iter().map(DeviceResponse::from).collect())
}

/// 获取设备
pub async fn get_device(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Result<Json<DeviceResponse>> {
    debug!(device_id = %device_id, "Getting device");

    let device = state
        .store
        .device(&device_id)
        .await
        .ok_or(crate::error::ApiError::DeviceNotFound(device_id))?;

    Ok(Json(DeviceResponse::from(device)))
}

/// 选中设备
///
/// 过期的设备 ID 是无操作：响应报告是否选中，从不失败。
pub async fn select_device(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Json<serde_json::Value> {
    let selected = state.store.select_device(&device_id).await;
    Json(serde_json::json!({
        "device_id": device_id,
        "selected": selected,
    }))
}

/// 列出传感器读数
pub async fn list_sensors(State(state): State<AppState>) -> Json<Vec<SensorResponse>> {
    let sensors = state.store.sensors().await;
    Json(sensors.into_iter().map(SensorResponse::from).collect())
}
