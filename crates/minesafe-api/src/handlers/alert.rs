use crate::{error::Result, models::*, state::AppState};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use minesafe_types::{Alert, AlertFilter, AlertStats, AlertStatus};
use tracing::{debug, info};

/// 告警列表
///
/// 过滤维度相互独立、同时生效；统计基于过滤后的集合。出现无法
/// 识别的过滤取值时返回空列表而不是报错。
pub async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertListQuery>,
) -> Json<AlertListResponse> {
    debug!("Listing alerts with filter");

    let filter = AlertFilter::from_raw(
        query.kind.as_deref(),
        query.status.as_deref(),
        query.priority.as_deref(),
        query.range.as_deref(),
    );

    let (data, stats): (Vec<Alert>, AlertStats) = match filter {
        Some(filter) => state.store.alerts_filtered(&filter).await,
        None => {
            debug!("Unresolvable filter value, returning empty result");
            (Vec::new(), AlertStats::default())
        }
    };

    let total = data.len();
    Json(AlertListResponse {
        data,
        stats: stats.into(),
        total,
    })
}

/// 获取告警详情
pub async fn get_alert(
    State(state): State<AppState>,
    Path(alert_id): Path<String>,
) -> Result<Json<Alert>> {
    let alert = state
        .store
        .alert(&alert_id)
        .await
        .ok_or(crate::error::ApiError::AlertNotFound(alert_id))?;

    Ok(Json(alert))
}

/// 选中告警并打开详情弹窗
pub async fn select_alert(
    State(state): State<AppState>,
    Path(alert_id): Path<String>,
) -> Json<serde_json::Value> {
    let selected = state.store.select_alert(&alert_id).await;
    Json(serde_json::json!({
        "alert_id": alert_id,
        "selected": selected,
    }))
}

/// 详情弹窗状态
pub async fn get_detail(State(state): State<AppState>) -> Json<DetailResponse> {
    Json(DetailResponse {
        open: state.store.detail_open().await,
        alert: state.store.selected_alert().await,
    })
}

/// 关闭详情弹窗
pub async fn close_detail(State(state): State<AppState>) -> Json<DetailResponse> {
    state.store.close_detail().await;
    Json(DetailResponse {
        open: false,
        alert: None,
    })
}

/// 推进告警处理状态
///
/// 未知 ID、重复点击和终态上的请求都是无操作：返回 200，
/// `changed` 为 false。目标状态拼写非法才是 400。
pub async fn set_alert_status(
    State(state): State<AppState>,
    Path(alert_id): Path<String>,
    Json(req): Json<StatusChangeRequest>,
) -> Result<Json<StatusChangeResponse>> {
    let target = AlertStatus::from_str(&req.status).ok_or_else(|| {
        crate::error::ApiError::BadRequest(format!("Unknown alert status: {}", req.status))
    })?;

    let changed = state.store.set_alert_status(&alert_id, target).await;
    if changed {
        info!(alert_id = %alert_id, status = %target.as_str(), "Alert status changed");
    }

    let status = state.store.alert(&alert_id).await.map(|a| a.status);
    Ok(Json(StatusChangeResponse {
        alert_id,
        changed,
        status,
    }))
}
