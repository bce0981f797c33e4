use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::{info, warn, error};

use common::types::MessageResponse;
use models::schedule::{Model, SchedulePayload};
use service::errors::ServiceError;

use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailabilityQuery {
    /// Defaults to `true`.
    pub available: Option<bool>,
}

fn list_failed(e: ServiceError) -> JsonApiError {
    JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Lookup Failed", Some(format!("Failed to fetch schedules: {}", e)))
}

/// Create a schedule after field checks; a failed check is a 400 naming the field.
#[utoipa::path(
    post, path = "/schedule/add", tag = "schedule",
    request_body = crate::openapi::ScheduleDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ScheduleDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Add Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn add(State(state): State<AppState>, ApiJson(input): ApiJson<SchedulePayload>) -> Result<(StatusCode, Json<Model>), JsonApiError> {
    let input = input.validate_for_create().map_err(|e| {
        warn!(reason = %e, "schedule_rejected");
        JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))
    })?;

    match state.schedules.add(input).await {
        Ok(m) => { info!(id = m.id, doctor_id = ?m.doctor_id, day = ?m.day_of_week, "created schedule"); Ok((StatusCode::CREATED, Json(m))) }
        Err(e) => {
            error!(err = %e, "add schedule failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Add Failed", Some(format!("Failed to add schedule: {}", e))))
        }
    }
}

#[utoipa::path(
    get, path = "/schedule/doctor/{doctor_id}", tag = "schedule",
    params(("doctor_id" = i32, Path, description = "Doctor ID")),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::ScheduleDoc]),
        (status = 500, description = "Lookup Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn by_doctor(State(state): State<AppState>, ApiPath(doctor_id): ApiPath<i32>) -> Result<Json<Vec<Model>>, JsonApiError> {
    match state.schedules.list_by_doctor(doctor_id).await {
        Ok(list) => { info!(doctor_id, count = list.len(), "list schedules"); Ok(Json(list)) }
        Err(e) => { error!(err = %e, doctor_id, "list schedules failed"); Err(list_failed(e)) }
    }
}

#[utoipa::path(
    get, path = "/schedule/doctor/{doctor_id}/day/{day}", tag = "schedule",
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID"),
        ("day" = String, Path, description = "Day-of-week label, matched exactly")
    ),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::ScheduleDoc]),
        (status = 500, description = "Lookup Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn by_doctor_and_day(State(state): State<AppState>, ApiPath((doctor_id, day)): ApiPath<(i32, String)>) -> Result<Json<Vec<Model>>, JsonApiError> {
    match state.schedules.list_by_doctor_and_day(doctor_id, &day).await {
        Ok(list) => Ok(Json(list)),
        Err(e) => { error!(err = %e, doctor_id, %day, "list schedules by day failed"); Err(list_failed(e)) }
    }
}

#[utoipa::path(
    get, path = "/schedule/doctor/{doctor_id}/available", tag = "schedule",
    params(("doctor_id" = i32, Path, description = "Doctor ID"), AvailabilityQuery),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::ScheduleDoc]),
        (status = 500, description = "Lookup Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn by_doctor_and_availability(
    State(state): State<AppState>,
    ApiPath(doctor_id): ApiPath<i32>,
    ApiQuery(q): ApiQuery<AvailabilityQuery>,
) -> Result<Json<Vec<Model>>, JsonApiError> {
    let available = q.available.unwrap_or(true);
    match state.schedules.list_by_doctor_and_availability(doctor_id, available).await {
        Ok(list) => Ok(Json(list)),
        Err(e) => { error!(err = %e, doctor_id, available, "list schedules by availability failed"); Err(list_failed(e)) }
    }
}

#[utoipa::path(
    put, path = "/schedule/update", tag = "schedule",
    request_body = crate::openapi::ScheduleDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ScheduleDoc),
        (status = 400, description = "Missing ID", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<AppState>, ApiJson(input): ApiJson<SchedulePayload>) -> Result<Json<Model>, JsonApiError> {
    match state.schedules.update(input).await {
        Ok(m) => { info!(id = m.id, "updated schedule"); Ok(Json(m)) }
        Err(e) if e.is_validation() => Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))),
        Err(ServiceError::NotFound(msg)) => Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg))),
        Err(e) => { error!(err = %e, "update schedule failed"); Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Update Failed", None)) }
    }
}

#[utoipa::path(
    delete, path = "/schedule/delete/{id}", tag = "schedule",
    params(("id" = i32, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Delete Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<MessageResponse>, JsonApiError> {
    match state.schedules.delete(id).await {
        Ok(msg) => { info!(id, "deleted schedule"); Ok(Json(MessageResponse::new(msg))) }
        Err(ServiceError::NotFound(msg)) => Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg))),
        Err(e) => {
            error!(err = %e, id, "delete schedule failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Delete Failed", Some("Failed to delete schedule".into())))
        }
    }
}

#[utoipa::path(
    get, path = "/schedule/{id}", tag = "schedule",
    params(("id" = i32, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ScheduleDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Lookup Failed")
    )
)]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<Model>, StatusCode> {
    match state.schedules.get(id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => { error!(err = %e, id, "get schedule failed"); Err(StatusCode::INTERNAL_SERVER_ERROR) }
    }
}
