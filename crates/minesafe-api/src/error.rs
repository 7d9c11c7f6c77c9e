use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use minesafe_capture::CaptureError;
use serde_json::json;
use std::fmt;

/// API 错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 未知页面
    UnknownPage(String),
    /// 告警未找到
    AlertNotFound(String),
    /// 设备未找到
    DeviceNotFound(String),
    /// 摄像头权限被拒绝
    CameraDenied(String),
    /// 采集设备不可用
    CameraUnavailable(String),
    /// 已有未完成的采集请求
    CameraBusy,
    /// 没有活动的采集会话
    CameraInactive,
    /// 请求错误
    BadRequest(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::UnknownPage(page) => write!(f, "Unknown page: {}", page),
            ApiError::AlertNotFound(id) => write!(f, "Alert not found: {}", id),
            ApiError::DeviceNotFound(id) => write!(f, "Device not found: {}", id),
            ApiError::CameraDenied(msg) => write!(f, "Camera permission denied: {}", msg),
            ApiError::CameraUnavailable(msg) => write!(f, "Capture device unavailable: {}", msg),
            ApiError::CameraBusy => write!(f, "Capture request already in flight"),
            ApiError::CameraInactive => write!(f, "No active capture session"),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::UnknownPage(ref page) => {
                (StatusCode::BAD_REQUEST, format!("Unknown page: {}", page))
            }
            ApiError::AlertNotFound(ref id) => {
                (StatusCode::NOT_FOUND, format!("Alert not found: {}", id))
            }
            ApiError::DeviceNotFound(ref id) => {
                (StatusCode::NOT_FOUND, format!("Device not found: {}", id))
            }
            ApiError::CameraDenied(ref msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            ApiError::CameraUnavailable(ref msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            ApiError::CameraBusy => (
                StatusCode::CONFLICT,
                "Capture request already in flight".to_string(),
            ),
            ApiError::CameraInactive => (
                StatusCode::CONFLICT,
                "No active capture session".to_string(),
            ),
            ApiError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

// 从 minesafe_capture::CaptureError 转换
impl From<CaptureError> for ApiError {
    fn from(err: CaptureError) -> Self {
        match err {
            CaptureError::PermissionDenied(msg) => ApiError::CameraDenied(msg),
            CaptureError::DeviceUnavailable(msg) => ApiError::CameraUnavailable(msg),
            CaptureError::Busy => ApiError::CameraBusy,
            CaptureError::Cancelled => ApiError::CameraBusy,
            CaptureError::NotActive => ApiError::CameraInactive,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
