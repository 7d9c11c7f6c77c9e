use crate::error::{CaptureError, Result};
use crate::source::{CaptureConstraints, CaptureSession, CaptureSource};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// 切换结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureToggle {
    /// 已开始采集
    Started,
    /// 已停止采集
    Stopped,
}

/// 实时帧的一次性抓拍
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// 图像数据
    pub data: Bytes,
    /// 抓拍时间
    pub captured_at: DateTime<Utc>,
    /// 画面宽度
    pub width: u32,
    /// 画面高度
    pub height: u32,
}

/// 本地采集控制器
///
/// 采集句柄的唯一所有者。句柄要么为空，要么指向一个完整绑定的
/// 会话；权限请求失败或被取消都不会留下半绑定状态。
pub struct CaptureController {
    source: Arc<dyn CaptureSource>,
    constraints: CaptureConstraints,
    session: Arc<RwLock<Option<CaptureSession>>>,
    in_flight: AtomicBool,
    generation: AtomicU64,
    last_snapshot: Arc<RwLock<Option<Snapshot>>>,
}

impl CaptureController {
    pub fn new(source: Arc<dyn CaptureSource>, constraints: CaptureConstraints) -> Self {
        Self {
            source,
            constraints,
            session: Arc::new(RwLock::new(None)),
            in_flight: AtomicBool::new(false),
            generation: AtomicU64::new(0),
            last_snapshot: Arc::new(RwLock::new(None)),
        }
    }

    /// 切换采集
    ///
    /// 关 → 开需要等待权限授予，等待期间不持有状态锁；同一时刻
    /// 只允许一个未完成的请求，重叠调用返回 `Busy`。开 → 关先停止
    /// 全部底层轨道再清空句柄。
    pub async fn toggle(&self) -> Result<CaptureToggle> {
        {
            let mut session = self.session.write().await;
            if let Some(mut active) = session.take() {
                active.release();
                info!(source = %self.source.name(), "Capture session stopped");
                return Ok(CaptureToggle::Stopped);
            }
        }

        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(CaptureError::Busy);
        }
        let generation = self.generation.load(Ordering::SeqCst);

        let outcome = self.source.open(self.constraints).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match outcome {
            Ok(mut acquired) => {
                if self.generation.load(Ordering::SeqCst) != generation {
                    // 等待期间被取消：立即释放，绝不绑定
                    acquired.release();
                    warn!(source = %self.source.name(), "Capture grant arrived after cancel, released");
                    return Err(CaptureError::Cancelled);
                }

                let mut session = self.session.write().await;
                *session = Some(acquired);
                info!(
                    source = %self.source.name(),
                    width = self.constraints.width,
                    height = self.constraints.height,
                    "Capture session started"
                );
                Ok(CaptureToggle::Started)
            }
            Err(e) => {
                warn!(source = %self.source.name(), error = %e, "Capture acquisition failed");
                Err(e)
            }
        }
    }

    /// 取消未完成的权限请求
    ///
    /// 视图被销毁而请求仍未返回时调用；之后到达的授予结果会被
    /// 立即释放而不是绑定到已不存在的视图。
    pub fn cancel_pending(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// 抓拍当前实时帧
    ///
    /// 一次性快照，只保留最近一张。没有活动会话时返回 `NotActive`。
    pub async fn screenshot(&self) -> Result<Snapshot> {
        let session = self.session.read().await;
        let active = session.as_ref().ok_or(CaptureError::NotActive)?;
        let frame = active.current_frame().ok_or_else(|| {
            CaptureError::DeviceUnavailable("no live frame available".to_string())
        })?;

        let constraints = active.constraints();
        let snapshot = Snapshot {
            data: frame,
            captured_at: Utc::now(),
            width: constraints.width,
            height: constraints.height,
        };

        let mut last = self.last_snapshot.write().await;
        *last = Some(snapshot.clone());

        Ok(snapshot)
    }

    pub async fn is_active(&self) -> bool {
        self.session.read().await.is_some()
    }

    pub async fn last_snapshot(&self) -> Option<Snapshot> {
        self.last_snapshot.read().await.clone()
    }

    pub fn constraints(&self) -> CaptureConstraints {
        self.constraints
    }
}
