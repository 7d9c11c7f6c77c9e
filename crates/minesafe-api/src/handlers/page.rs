use crate::{error::Result, models::SetPageRequest, state::AppState};
use axum::{extract::State, Json};
use minesafe_types::Page;
use tracing::info;

/// 当前页面
pub async fn get_page(State(state): State<AppState>) -> Json<serde_json::Value> {
    let page = state.store.page().await;
    Json(serde_json::json!({ "page": page }))
}

/// 切换页面
///
/// 未知页面显式返回 400，不做静默无操作，避免界面与状态脱节。
pub async fn set_page(
    State(state): State<AppState>,
    Json(req): Json<SetPageRequest>,
) -> Result<Json<serde_json::Value>> {
    let page = Page::from_str(&req.page)
        .ok_or_else(|| crate::error::ApiError::UnknownPage(req.page.clone()))?;

    info!(page = %page.as_str(), "Switching page");
    state.store.set_page(page).await;

    Ok(Json(serde_json::json!({ "page": page })))
}
