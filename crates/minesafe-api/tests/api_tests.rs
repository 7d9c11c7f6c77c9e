use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use minesafe_api::{create_router, AppState};
use minesafe_capture::{CaptureConstraints, CaptureController, StubCameraSource};
use minesafe_notify::NotifyCenter;
use minesafe_store::{DashboardStore, SeedData};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_app() -> (Arc<StubCameraSource>, AppState, Router) {
    let source = Arc::new(StubCameraSource::new());
    let camera = Arc::new(CaptureController::new(
        source.clone(),
        CaptureConstraints::default(),
    ));
    let store = Arc::new(DashboardStore::new(SeedData::builtin(), camera));
    let state = AppState::new(store, Arc::new(NotifyCenter::default()));
    let app = create_router(state.clone());
    (source, state, app)
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_source, _state, app) = create_test_app();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_set_page_rejects_unknown() {
    let (_source, _state, app) = create_test_app();

    let request = Request::builder()
        .uri("/api/v1/page")
        .method("PUT")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "page": "settings" }).to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    // 未知页面必须显式报错，不允许静默无操作
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .uri("/api/v1/page")
        .method("PUT")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "page": "analytics" }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["page"], "analytics");
}

#[tokio::test]
async fn test_list_alerts_filtered_with_stats() {
    let (_source, _state, app) = create_test_app();

    let request = Request::builder()
        .uri("/api/v1/alerts?priority=high&status=pending")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "ALT-001");

    // 统计基于过滤后的集合
    assert_eq!(body["stats"]["pending"], 1);
    assert_eq!(body["stats"]["resolved"], 0);
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_list_alerts_unresolvable_filter_is_empty() {
    let (_source, _state, app) = create_test_app();

    let request = Request::builder()
        .uri("/api/v1/alerts?type=smoke")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    // 无法识别的取值不报错，返回空集
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    assert_eq!(body["stats"]["pending"], 0);
}

#[tokio::test]
async fn test_list_alerts_all_is_wildcard() {
    let (_source, _state, app) = create_test_app();

    let request = Request::builder()
        .uri("/api/v1/alerts?type=all&status=all&priority=all&range=all")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = body_json(response).await;
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["ALT-001", "ALT-002", "ALT-003", "ALT-004", "ALT-005", "ALT-006"]
    );
}

#[tokio::test]
async fn test_alert_status_transition_endpoint() {
    let (_source, _state, app) = create_test_app();

    let transition = |app: Router, id: &str, status: &str| {
        let uri = format!("/api/v1/alerts/{}/status", id);
        let body = json!({ "status": status }).to_string();
        async move {
            let request = Request::builder()
                .uri(uri)
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap();
            app.oneshot(request).await.unwrap()
        }
    };

    let response = transition(app.clone(), "ALT-001", "processing").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["changed"], true);
    assert_eq!(body["status"], "processing");

    // 重复点击是无操作，仍然 200
    let response = transition(app.clone(), "ALT-001", "processing").await;
    let body = body_json(response).await;
    assert_eq!(body["changed"], false);

    // 未知 ID 同样是无操作
    let response = transition(app.clone(), "ALT-999", "processing").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["changed"], false);
    assert!(body["status"].is_null());

    // 非法状态拼写才是请求错误
    let response = transition(app, "ALT-001", "reopened").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_detail_select_and_close() {
    let (_source, _state, app) = create_test_app();

    let request = Request::builder()
        .uri("/api/v1/alerts/ALT-002/select")
        .method("POST")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["selected"], true);

    let request = Request::builder()
        .uri("/api/v1/detail")
        .body(Body::empty())
        .unwrap();
    let body = body_json(app.clone().oneshot(request).await.unwrap()).await;
    assert_eq!(body["open"], true);
    assert_eq!(body["alert"]["id"], "ALT-002");

    let request = Request::builder()
        .uri("/api/v1/detail/close")
        .method("POST")
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap();

    // 关闭后选中项与开关一起清空
    let request = Request::builder()
        .uri("/api/v1/detail")
        .body(Body::empty())
        .unwrap();
    let body = body_json(app.oneshot(request).await.unwrap()).await;
    assert_eq!(body["open"], false);
    assert!(body["alert"].is_null());
}

#[tokio::test]
async fn test_monitor_view_recomputes_sensor_levels() {
    let (_source, _state, app) = create_test_app();

    let request = Request::builder()
        .uri("/api/v1/monitor")
        .body(Body::empty())
        .unwrap();
    let body = body_json(app.oneshot(request).await.unwrap()).await;

    assert_eq!(body["devices"].as_array().unwrap().len(), 6);
    assert_eq!(body["selected_device"]["id"], "CAM-001");
    assert_eq!(body["camera"]["active"], false);

    // 氧气浓度 19.5 ≥ 阈值 19.0：展示等级必须是重算后的 danger
    let sensors = body["sensors"].as_array().unwrap();
    let oxygen = sensors.iter().find(|s| s["id"] == "OXY-001").unwrap();
    assert_eq!(oxygen["status"], "danger");
}

#[tokio::test]
async fn test_camera_toggle_and_snapshot() {
    let (_source, _state, app) = create_test_app();

    let toggle = Request::builder()
        .uri("/api/v1/camera/toggle")
        .method("POST")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(toggle).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["active"], true);

    let snapshot = Request::builder()
        .uri("/api/v1/camera/snapshot")
        .method("POST")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(snapshot).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["width"], 1280);
    assert_eq!(body["height"], 720);

    let toggle = Request::builder()
        .uri("/api/v1/camera/toggle")
        .method("POST")
        .body(Body::empty())
        .unwrap();
    let body = body_json(app.clone().oneshot(toggle).await.unwrap()).await;
    assert_eq!(body["active"], false);

    // 预览关闭后抓拍返回冲突
    let snapshot = Request::builder()
        .uri("/api/v1/camera/snapshot")
        .method("POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(snapshot).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_camera_denial_publishes_notification() {
    let (source, _state, app) = create_test_app();
    source.set_deny(true);

    let toggle = Request::builder()
        .uri("/api/v1/camera/toggle")
        .method("POST")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(toggle).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    // 失败以一条操作员通知的形式呈现
    let request = Request::builder()
        .uri("/api/v1/notifications?limit=5")
        .body(Body::empty())
        .unwrap();
    let body = body_json(app.oneshot(request).await.unwrap()).await;
    let feed = body.as_array().unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0]["title"], "摄像头不可用");
}

#[tokio::test]
async fn test_analytics_endpoint() {
    let (_source, _state, app) = create_test_app();

    let request = Request::builder()
        .uri("/api/v1/analytics")
        .body(Body::empty())
        .unwrap();
    let body = body_json(app.oneshot(request).await.unwrap()).await;

    assert_eq!(body["total_alerts"], 156);
    assert_eq!(body["devices_online"], 4);
    assert_eq!(body["weekly_trend"].as_array().unwrap().len(), 7);
}
