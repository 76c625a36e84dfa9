mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Datelike, Duration, Utc, Weekday};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_chalet(app: &TestApp, slug: &str, weekend_days: Option<Value>) -> String {
    let mut payload = json!({"name": format!("Chalet {}", slug), "slug": slug});
    if let Some(days) = weekend_days {
        payload["weekend_days"] = days;
    }
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/chalets")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let data = parse_body(res).await;
    data["id"].as_str().unwrap().to_string()
}

async fn create_slot(app: &TestApp, chalet_id: &str, payload: Value) -> String {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/chalets/{}/slots", chalet_id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let data = parse_body(res).await;
    data["id"].as_str().unwrap().to_string()
}

fn default_slot() -> Value {
    json!({
        "name": "Day Shift", "start_time": "08:00", "end_time": "16:00",
        "duration_hours": 8, "weekday_price": 100, "weekend_price": 150,
        "allows_extra_hours": true, "extra_hour_price": 20, "max_extra_hours": 3,
        "available_days": ["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"]
    })
}

fn next_weekday(target: Weekday) -> String {
    let mut date = Utc::now().date_naive() + Duration::days(1);
    while date.weekday() != target {
        date += Duration::days(1);
    }
    date.format("%Y-%m-%d").to_string()
}

async fn price(app: &TestApp, chalet_id: &str, slot_id: &str, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST")
            .uri(format!("/api/v1/chalets/{}/slots/{}/price", chalet_id, slot_id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_weekend_price_with_extra_hours() {
    let app = TestApp::new().await;
    let chalet_id = create_chalet(&app, "price-weekend", None).await;
    let slot_id = create_slot(&app, &chalet_id, default_slot()).await;

    // Saturday is in the default weekend set.
    let date = next_weekday(Weekday::Sat);
    let res = price(&app, &chalet_id, &slot_id, json!({"date": date, "extra_hours": 2})).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["amount"], json!(190));
    assert_eq!(body["currency"], json!("SAR"));
}

#[tokio::test]
async fn test_weekday_price_without_extras() {
    let app = TestApp::new().await;
    let chalet_id = create_chalet(&app, "price-weekday", None).await;
    let slot_id = create_slot(&app, &chalet_id, default_slot()).await;

    let date = next_weekday(Weekday::Mon);
    let res = price(&app, &chalet_id, &slot_id, json!({"date": date})).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["amount"], json!(100));
}

#[tokio::test]
async fn test_custom_weekend_days() {
    let app = TestApp::new().await;
    let chalet_id = create_chalet(&app, "price-custom", Some(json!(["sunday"]))).await;
    let slot_id = create_slot(&app, &chalet_id, default_slot()).await;

    // Saturday is a plain weekday for this chalet.
    let date = next_weekday(Weekday::Sat);
    let res = price(&app, &chalet_id, &slot_id, json!({"date": date})).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["amount"], json!(100));
}

#[tokio::test]
async fn test_extra_hours_over_limit_rejected() {
    let app = TestApp::new().await;
    let chalet_id = create_chalet(&app, "price-limit", None).await;
    let slot_id = create_slot(&app, &chalet_id, default_slot()).await;

    let date = next_weekday(Weekday::Mon);
    let res = price(&app, &chalet_id, &slot_id, json!({"date": date, "extra_hours": 4})).await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_extra_hours_on_disallowing_slot_rejected() {
    let app = TestApp::new().await;
    let chalet_id = create_chalet(&app, "price-noextras", None).await;
    let slot_id = create_slot(&app, &chalet_id, json!({
        "name": "Fixed", "start_time": "08:00", "end_time": "16:00",
        "duration_hours": 8, "weekday_price": 100, "weekend_price": 150,
        "available_days": ["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"]
    })).await;

    let date = next_weekday(Weekday::Mon);
    let res = price(&app, &chalet_id, &slot_id, json!({"date": date, "extra_hours": 1})).await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_negative_extra_hours_rejected() {
    let app = TestApp::new().await;
    let chalet_id = create_chalet(&app, "price-neg", None).await;
    let slot_id = create_slot(&app, &chalet_id, default_slot()).await;

    let date = next_weekday(Weekday::Mon);
    let res = price(&app, &chalet_id, &slot_id, json!({"date": date, "extra_hours": -1})).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_past_date_rejected() {
    let app = TestApp::new().await;
    let chalet_id = create_chalet(&app, "price-past", None).await;
    let slot_id = create_slot(&app, &chalet_id, default_slot()).await;

    let yesterday = (Utc::now().date_naive() - Duration::days(1)).format("%Y-%m-%d").to_string();
    let res = price(&app, &chalet_id, &slot_id, json!({"date": yesterday})).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
