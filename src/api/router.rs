use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{availability, blocked_date, chalet, health, job, pricing, slot};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Chalets
        .route("/api/v1/chalets", post(chalet::create_chalet).get(chalet::list_chalets))
        .route("/api/v1/chalets/{chalet_id}", get(chalet::get_chalet))

        // Slots
        .route("/api/v1/chalets/{chalet_id}/slots", post(slot::create_slot).get(slot::list_slots))
        .route("/api/v1/chalets/{chalet_id}/slots/{slot_id}", put(slot::update_slot).delete(slot::delete_slot))

        // Blocked dates
        .route("/api/v1/chalets/{chalet_id}/blocked-dates", post(blocked_date::create_blocked_date).get(blocked_date::list_blocked_dates))
        .route("/api/v1/chalets/{chalet_id}/blocked-dates/{blocked_id}", delete(blocked_date::delete_blocked_date))

        // Availability & Pricing
        .route("/api/v1/chalets/{chalet_id}/availability", get(availability::check_availability))
        .route("/api/v1/chalets/{chalet_id}/availability/dates", get(availability::get_available_dates))
        .route("/api/v1/chalets/{chalet_id}/slots/{slot_id}/price", post(pricing::calculate_price))

        // Jobs
        .route("/api/v1/chalets/{chalet_id}/jobs", get(job::list_jobs))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        chalet_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
