use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod prescriptions;
pub mod schedules;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn prescription_routes() -> Router<AppState> {
    Router::new()
        .route("/prescription/add", post(prescriptions::add))
        .route("/prescription/doctor/:doctor_id", get(prescriptions::by_doctor))
        .route("/prescription/patient/:patient_id", get(prescriptions::by_patient))
        .route("/prescription/appointment/:appointment_id", get(prescriptions::by_appointment))
        .route("/prescription/update", put(prescriptions::update))
        .route("/prescription/delete/:id", delete(prescriptions::delete))
        .route("/prescription/:id", get(prescriptions::get))
}

fn schedule_routes() -> Router<AppState> {
    Router::new()
        .route("/schedule/add", post(schedules::add))
        .route("/schedule/doctor/:doctor_id", get(schedules::by_doctor))
        .route("/schedule/doctor/:doctor_id/day/:day", get(schedules::by_doctor_and_day))
        .route("/schedule/doctor/:doctor_id/available", get(schedules::by_doctor_and_availability))
        .route("/schedule/update", put(schedules::update))
        .route("/schedule/delete/:id", delete(schedules::delete))
        .route("/schedule/:id", get(schedules::get))
}

/// Build the full application router: health, API description and both resources.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(prescription_routes())
        .merge(schedule_routes())
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
