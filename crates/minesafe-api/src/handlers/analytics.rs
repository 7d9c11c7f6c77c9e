use crate::state::AppState;
use axum::{extract::State, Json};
use minesafe_types::AnalyticsData;
use tracing::debug;

/// 统计分析视图
///
/// 种子缺失时返回全零快照，视图按空展示。
pub async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsData> {
    debug!("Rendering analytics view");
    Json(state.store.analytics().await)
}
