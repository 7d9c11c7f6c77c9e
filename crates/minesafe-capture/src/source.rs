use crate::error::{CaptureError, Result};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// 采集参数
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CaptureConstraints {
    /// 画面宽度
    pub width: u32,
    /// 画面高度
    pub height: u32,
}

impl Default for CaptureConstraints {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// 已获取的硬件视频轨道
///
/// `stop` 幂等，停止后不可复活。
#[derive(Debug, Clone)]
pub struct VideoTrack {
    id: String,
    live: Arc<AtomicBool>,
}

impl VideoTrack {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }

    pub fn stop(&self) {
        if self.live.swap(false, Ordering::SeqCst) {
            debug!(track_id = %self.id, "Video track stopped");
        }
    }
}

/// 活动的采集会话
///
/// 会话持有全部已获取的轨道，同一时刻只能有一个所有者。
/// `release` 在清空句柄前停止所有底层轨道；会话被直接丢弃时
/// 也会停止剩余轨道，硬件锁不允许泄漏。
#[derive(Debug)]
pub struct CaptureSession {
    constraints: CaptureConstraints,
    tracks: Vec<VideoTrack>,
    frame: Bytes,
    opened_at: DateTime<Utc>,
}

impl CaptureSession {
    pub fn new(constraints: CaptureConstraints, tracks: Vec<VideoTrack>, frame: Bytes) -> Self {
        Self {
            constraints,
            tracks,
            frame,
            opened_at: Utc::now(),
        }
    }

    pub fn constraints(&self) -> CaptureConstraints {
        self.constraints
    }

    pub fn tracks(&self) -> &[VideoTrack] {
        &self.tracks
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// 当前实时帧；所有轨道都已停止时没有画面
    pub fn current_frame(&self) -> Option<Bytes> {
        if self.tracks.iter().any(|t| t.is_live()) {
            Some(self.frame.clone())
        } else {
            None
        }
    }

    /// 停止全部轨道并释放会话
    pub fn release(&mut self) {
        for track in &self.tracks {
            track.stop();
        }
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.release();
    }
}

/// 本地采集源
///
/// 约定是二值的：要么给出一个活动会话，要么拒绝。
#[async_trait::async_trait]
pub trait CaptureSource: Send + Sync {
    fn name(&self) -> &str;

    async fn open(&self, constraints: CaptureConstraints) -> Result<CaptureSession>;
}

/// Stub 采集源（用于测试和占位）
///
/// 生产环境应替换为对接真实采集设备的实现。
pub struct StubCameraSource {
    deny: AtomicBool,
    unavailable: AtomicBool,
    issued: Mutex<Vec<VideoTrack>>,
}

impl StubCameraSource {
    pub fn new() -> Self {
        Self {
            deny: AtomicBool::new(false),
            unavailable: AtomicBool::new(false),
            issued: Mutex::new(Vec::new()),
        }
    }

    /// 模拟权限被拒绝
    pub fn set_deny(&self, deny: bool) {
        self.deny.store(deny, Ordering::SeqCst);
    }

    /// 模拟设备不可用
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// 历史上发放过的所有轨道
    pub fn issued_tracks(&self) -> Vec<VideoTrack> {
        self.issued.lock().unwrap().clone()
    }

    /// 是否仍有未停止的轨道
    pub fn has_live_tracks(&self) -> bool {
        self.issued.lock().unwrap().iter().any(|t| t.is_live())
    }

    fn test_pattern(constraints: CaptureConstraints) -> Bytes {
        // 灰阶测试画面，每像素一字节
        let len = (constraints.width * constraints.height) as usize;
        Bytes::from(vec![0x80u8; len])
    }
}

impl Default for StubCameraSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CaptureSource for StubCameraSource {
    fn name(&self) -> &str {
        "stub-camera"
    }

    async fn open(&self, constraints: CaptureConstraints) -> Result<CaptureSession> {
        if self.deny.load(Ordering::SeqCst) {
            return Err(CaptureError::PermissionDenied(
                "user denied camera access".to_string(),
            ));
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CaptureError::DeviceUnavailable(
                "no capture device present".to_string(),
            ));
        }

        let track = VideoTrack::new(format!("video-{}", self.issued.lock().unwrap().len()));
        self.issued.lock().unwrap().push(track.clone());

        Ok(CaptureSession::new(
            constraints,
            vec![track],
            Self::test_pattern(constraints),
        ))
    }
}
