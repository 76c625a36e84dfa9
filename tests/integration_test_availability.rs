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

async fn create_chalet(app: &TestApp, slug: &str) -> String {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/chalets")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"name": format!("Chalet {}", slug), "slug": slug}).to_string())).unwrap()
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

fn all_days() -> Value {
    json!(["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"])
}

fn next_weekday(target: Weekday) -> String {
    let mut date = Utc::now().date_naive() + Duration::days(1);
    while date.weekday() != target {
        date += Duration::days(1);
    }
    date.format("%Y-%m-%d").to_string()
}

#[tokio::test]
async fn test_slot_available_when_unblocked() {
    let app = TestApp::new().await;
    let chalet_id = create_chalet(&app, "avail-std").await;
    let slot_id = create_slot(&app, &chalet_id, json!({
        "name": "Day Shift", "start_time": "08:00", "end_time": "16:00",
        "duration_hours": 8, "weekday_price": 100, "weekend_price": 150,
        "available_days": all_days()
    })).await;

    let date = next_weekday(Weekday::Mon);
    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/chalets/{}/availability?date={}&slot_id={}", chalet_id, date, slot_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["available"], json!(true));
    assert!(body.get("reason").is_none());
}

#[tokio::test]
async fn test_unknown_slot_returns_404() {
    let app = TestApp::new().await;
    let chalet_id = create_chalet(&app, "avail-404").await;

    let date = next_weekday(Weekday::Mon);
    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/chalets/{}/availability?date={}&slot_id=nope", chalet_id, date))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_chalet_returns_404() {
    let app = TestApp::new().await;

    let date = next_weekday(Weekday::Mon);
    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/chalets/ghost/availability?date={}&slot_id=nope", date))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_weekday_not_offered_returns_404() {
    let app = TestApp::new().await;
    let chalet_id = create_chalet(&app, "avail-days").await;
    let slot_id = create_slot(&app, &chalet_id, json!({
        "name": "Mondays Only", "start_time": "08:00", "end_time": "16:00",
        "duration_hours": 8, "weekday_price": 100, "weekend_price": 150,
        "available_days": ["monday"]
    })).await;

    let date = next_weekday(Weekday::Tue);
    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/chalets/{}/availability?date={}&slot_id={}", chalet_id, date, slot_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_past_date_rejected() {
    let app = TestApp::new().await;
    let chalet_id = create_chalet(&app, "avail-past").await;
    let slot_id = create_slot(&app, &chalet_id, json!({
        "name": "Day Shift", "start_time": "08:00", "end_time": "16:00",
        "duration_hours": 8, "weekday_price": 100, "weekend_price": 150,
        "available_days": all_days()
    })).await;

    let yesterday = (Utc::now().date_naive() - Duration::days(1)).format("%Y-%m-%d").to_string();
    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/chalets/{}/availability?date={}&slot_id={}", chalet_id, yesterday, slot_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_whole_day_block_hits_every_slot() {
    let app = TestApp::new().await;
    let chalet_id = create_chalet(&app, "avail-block").await;
    let morning = create_slot(&app, &chalet_id, json!({
        "name": "Morning", "start_time": "08:00", "end_time": "12:00",
        "duration_hours": 4, "weekday_price": 80, "weekend_price": 120,
        "available_days": all_days()
    })).await;
    let evening = create_slot(&app, &chalet_id, json!({
        "name": "Evening", "start_time": "16:00", "end_time": "22:00",
        "duration_hours": 6, "weekday_price": 90, "weekend_price": 140,
        "available_days": all_days()
    })).await;

    let date = next_weekday(Weekday::Wed);
    let block_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/chalets/{}/blocked-dates", chalet_id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"date": date, "reason": "maintenance"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(block_res.status(), StatusCode::OK);

    for slot_id in [&morning, &evening] {
        let res = app.router.clone().oneshot(
            Request::builder().method("GET")
                .uri(format!("/api/v1/chalets/{}/availability?date={}&slot_id={}", chalet_id, date, slot_id))
                .body(Body::empty()).unwrap()
        ).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = parse_body(res).await;
        assert_eq!(body["available"], json!(false));
        assert_eq!(body["reason"], json!("The whole day is blocked"));
    }
}

#[tokio::test]
async fn test_available_dates_range() {
    let app = TestApp::new().await;
    let chalet_id = create_chalet(&app, "avail-range").await;
    create_slot(&app, &chalet_id, json!({
        "name": "Day Shift", "start_time": "08:00", "end_time": "16:00",
        "duration_hours": 8, "weekday_price": 100, "weekend_price": 150,
        "available_days": all_days()
    })).await;

    let start = Utc::now().date_naive() + Duration::days(1);
    let blocked = start + Duration::days(3);
    let end = start + Duration::days(9);

    app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/chalets/{}/blocked-dates", chalet_id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"date": blocked.to_string()}).to_string())).unwrap()
    ).await.unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!(
                "/api/v1/chalets/{}/availability/dates?booking_type=day_use&start={}&end={}",
                chalet_id, start, end
            ))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let dates = body.as_array().unwrap();

    assert_eq!(dates.len(), 8);
    assert!(!dates.contains(&json!(blocked.to_string())), "Blocked date should not be returned in available dates");
    assert!(dates.contains(&json!(start.to_string())), "Standard date should be returned");
}

#[tokio::test]
async fn test_available_dates_requires_booking_type() {
    let app = TestApp::new().await;
    let chalet_id = create_chalet(&app, "avail-bt").await;

    let start = Utc::now().date_naive();
    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!(
                "/api/v1/chalets/{}/availability/dates?booking_type=weekly&start={}&end={}",
                chalet_id, start, start
            ))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_no_overnight_slots_means_no_overnight_dates() {
    let app = TestApp::new().await;
    let chalet_id = create_chalet(&app, "avail-types").await;
    create_slot(&app, &chalet_id, json!({
        "name": "Day Shift", "start_time": "08:00", "end_time": "16:00",
        "duration_hours": 8, "weekday_price": 100, "weekend_price": 150,
        "available_days": all_days()
    })).await;

    let start = Utc::now().date_naive() + Duration::days(1);
    let end = start + Duration::days(4);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!(
                "/api/v1/chalets/{}/availability/dates?booking_type=overnight&start={}&end={}",
                chalet_id, start, end
            ))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert!(body.as_array().unwrap().is_empty());
}
