use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use minesafe_notify::NotifyMessage;

/// 通知查询参数
#[derive(Debug, serde::Deserialize)]
pub struct NotificationQuery {
    pub limit: Option<usize>,
}

/// 最近的操作员通知（最新的在前）
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<NotificationQuery>,
) -> Json<Vec<NotifyMessage>> {
    let limit = query.limit.unwrap_or(20);
    Json(state.notify.recent(limit).await)
}
