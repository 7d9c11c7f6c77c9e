use minesafe_notify::NotifyCenter;
use minesafe_store::DashboardStore;
use std::sync::Arc;

/// API 应用状态
#[derive(Clone)]
pub struct AppState {
    /// 仪表盘状态存储
    pub store: Arc<DashboardStore>,

    /// 操作员通知中心
    pub notify: Arc<NotifyCenter>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(store: Arc<DashboardStore>, notify: Arc<NotifyCenter>) -> Self {
        Self { store, notify }
    }
}
