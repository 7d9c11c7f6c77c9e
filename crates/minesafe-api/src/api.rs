use crate::{handlers, state::AppState};
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// 创建 API 路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // 健康检查
        .route("/health", get(health_check))
        // 页面导航
        .route("/api/v1/page", get(handlers::get_page))
        .route("/api/v1/page", put(handlers::set_page))
        // 监控页
        .route("/api/v1/monitor", get(handlers::get_monitor))
        .route("/api/v1/devices", get(handlers::list_devices))
        .route("/api/v1/devices/:device_id", get(handlers::get_device))
        .route(
            "/api/v1/devices/:device_id/select",
            post(handlers::select_device),
        )
        .route("/api/v1/sensors", get(handlers::list_sensors))
        // 告警页
        .route("/api/v1/alerts", get(handlers::list_alerts))
        .route("/api/v1/alerts/:alert_id", get(handlers::get_alert))
        .route(
            "/api/v1/alerts/:alert_id/select",
            post(handlers::select_alert),
        )
        .route(
            "/api/v1/alerts/:alert_id/status",
            post(handlers::set_alert_status),
        )
        // 详情弹窗
        .route("/api/v1/detail", get(handlers::get_detail))
        .route("/api/v1/detail/close", post(handlers::close_detail))
        // 统计分析页
        .route("/api/v1/analytics", get(handlers::get_analytics))
        // 本地摄像头
        .route("/api/v1/camera", get(handlers::camera_state))
        .route("/api/v1/camera/toggle", post(handlers::toggle_camera))
        .route("/api/v1/camera/cancel", post(handlers::cancel_camera))
        .route("/api/v1/camera/snapshot", post(handlers::take_snapshot))
        // 操作员通知
        .route("/api/v1/notifications", get(handlers::list_notifications))
        // 添加中间件
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 健康检查
async fn health_check() -> &'static str {
    "OK"
}
