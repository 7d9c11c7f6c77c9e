use crate::{error::Result, models::*, state::AppState};
use axum::{extract::State, Json};
use minesafe_capture::{CaptureError, CaptureToggle};
use minesafe_notify::NotifyMessage;
use tracing::{info, warn};

/// 摄像头状态
pub async fn camera_state(State(state): State<AppState>) -> Json<CameraStateResponse> {
    Json(CameraStateResponse::new(
        state.store.camera_active().await,
        state.store.camera().constraints(),
    ))
}

/// 切换本地摄像头预览
///
/// 权限被拒或设备不可用时句柄保持为空，并向操作员发出一条
/// 通知；重叠的切换请求被拒绝，不触发通知。
pub async fn toggle_camera(
    State(state): State<AppState>,
) -> Result<Json<CameraStateResponse>> {
    match state.store.toggle_camera().await {
        Ok(toggle) => {
            info!(
                active = matches!(toggle, CaptureToggle::Started),
                "Camera preview toggled"
            );
            Ok(Json(CameraStateResponse::new(
                matches!(toggle, CaptureToggle::Started),
                state.store.camera().constraints(),
            )))
        }
        Err(err @ (CaptureError::PermissionDenied(_) | CaptureError::DeviceUnavailable(_))) => {
            warn!(error = %err, "Camera access failed");
            state
                .notify
                .publish(NotifyMessage::error(
                    "摄像头不可用",
                    "无法访问本地摄像头，请检查权限设置",
                ))
                .await;
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// 取消未完成的摄像头请求
///
/// 监控视图被关闭而权限请求仍未返回时调用。
pub async fn cancel_camera(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.store.camera().cancel_pending();
    Json(serde_json::json!({ "cancelled": true }))
}

/// 抓拍当前预览画面
pub async fn take_snapshot(State(state): State<AppState>) -> Result<Json<SnapshotResponse>> {
    let snapshot = state.store.camera_screenshot().await?;
    info!(bytes = snapshot.data.len(), "Snapshot captured");
    Ok(Json(SnapshotResponse::from(snapshot)))
}
