use thiserror::Error;

/// 本地采集错误类型
#[derive(Error, Debug)]
pub enum CaptureError {
    /// 权限被拒绝
    #[error("Camera permission denied: {0}")]
    PermissionDenied(String),

    /// 采集设备不可用
    #[error("Capture device unavailable: {0}")]
    DeviceUnavailable(String),

    /// 已有未完成的采集请求
    #[error("Capture request already in flight")]
    Busy,

    /// 未完成的请求已被取消
    #[error("Capture request cancelled")]
    Cancelled,

    /// 当前没有活动的采集会话
    #[error("No active capture session")]
    NotActive,
}

/// 采集结果类型
pub type Result<T> = std::result::Result<T, CaptureError>;
