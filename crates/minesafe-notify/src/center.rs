use crate::message::{NotifyLevel, NotifyMessage};
use crate::notifier::Notifier;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

/// 操作员通知中心
///
/// 站内通知保存在环形缓冲里供界面轮询；注册的外部通知器按级别
/// 过滤后逐个投递。投递失败只记录日志，从不向调用方传播，
/// 通知本身不允许让触发它的操作失败。
pub struct NotifyCenter {
    /// 外部通知器列表
    notifiers: Arc<RwLock<Vec<Box<dyn Notifier>>>>,

    /// 站内通知（最新的在队尾）
    feed: Arc<RwLock<Vec<NotifyMessage>>>,

    /// 最小通知级别
    min_level: NotifyLevel,

    /// 站内保留上限
    max_feed: usize,
}

impl NotifyCenter {
    pub fn new(min_level: NotifyLevel) -> Self {
        Self {
            notifiers: Arc::new(RwLock::new(Vec::new())),
            feed: Arc::new(RwLock::new(Vec::new())),
            min_level,
            max_feed: 200,
        }
    }

    /// 注册外部通知器
    pub async fn register(&self, notifier: Box<dyn Notifier>) {
        info!("Registered notifier: {}", notifier.name());
        let mut notifiers = self.notifiers.write().await;
        notifiers.push(notifier);
    }

    /// 发布通知
    pub async fn publish(&self, message: NotifyMessage) {
        if !message.level.at_least(self.min_level) {
            return;
        }

        {
            let mut feed = self.feed.write().await;
            feed.push(message.clone());
            if feed.len() > self.max_feed {
                feed.remove(0);
            }
        }

        let notifiers = self.notifiers.read().await;
        for notifier in notifiers.iter() {
            if !notifier.is_enabled() {
                continue;
            }
            match notifier.send(&message).await {
                Ok(result) => {
                    if result.success {
                        info!("Notification sent via {}: {}", notifier.name(), message.title);
                    } else {
                        error!(
                            "Notification failed via {}: {}",
                            notifier.name(),
                            result.message
                        );
                    }
                }
                Err(e) => {
                    error!("Notification error via {}: {}", notifier.name(), e);
                }
            }
        }
    }

    /// 最近的站内通知（最新的在前）
    pub async fn recent(&self, limit: usize) -> Vec<NotifyMessage> {
        let feed = self.feed.read().await;
        feed.iter().rev().take(limit).cloned().collect()
    }
}

impl Default for NotifyCenter {
    fn default() -> Self {
        Self::new(NotifyLevel::Info)
    }
}
