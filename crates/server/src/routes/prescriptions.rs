use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, error};

use common::types::MessageResponse;
use models::prescription::{Model, PrescriptionPayload};
use service::errors::ServiceError;

use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

#[utoipa::path(
    post, path = "/prescription/add", tag = "prescription",
    request_body = crate::openapi::PrescriptionDoc,
    responses(
        (status = 200, description = "Saved", body = crate::openapi::PrescriptionDoc),
        (status = 400, description = "Unreadable body", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Add Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn add(State(state): State<AppState>, ApiJson(input): ApiJson<PrescriptionPayload>) -> Result<Json<Model>, JsonApiError> {
    match state.prescriptions.add(input).await {
        Ok(m) => { info!(id = m.id, doctor_id = ?m.doctor_id, "created prescription"); Ok(Json(m)) }
        Err(e) => {
            error!(err = %e, "add prescription failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Add Failed", Some(format!("Failed to add prescription: {}", e))))
        }
    }
}

#[utoipa::path(
    get, path = "/prescription/doctor/{doctor_id}", tag = "prescription",
    params(("doctor_id" = i32, Path, description = "Doctor ID")),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::PrescriptionDoc]),
        (status = 500, description = "Lookup Failed")
    )
)]
pub async fn by_doctor(State(state): State<AppState>, ApiPath(doctor_id): ApiPath<i32>) -> Result<Json<Vec<Model>>, StatusCode> {
    match state.prescriptions.list_by_doctor(doctor_id).await {
        Ok(list) => Ok(Json(list)),
        Err(e) => { error!(err = %e, doctor_id, "list prescriptions by doctor failed"); Err(StatusCode::INTERNAL_SERVER_ERROR) }
    }
}

#[utoipa::path(
    get, path = "/prescription/patient/{patient_id}", tag = "prescription",
    params(("patient_id" = i32, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::PrescriptionDoc]),
        (status = 500, description = "Lookup Failed")
    )
)]
pub async fn by_patient(State(state): State<AppState>, ApiPath(patient_id): ApiPath<i32>) -> Result<Json<Vec<Model>>, StatusCode> {
    match state.prescriptions.list_by_patient(patient_id).await {
        Ok(list) => Ok(Json(list)),
        Err(e) => { error!(err = %e, patient_id, "list prescriptions by patient failed"); Err(StatusCode::INTERNAL_SERVER_ERROR) }
    }
}

#[utoipa::path(
    get, path = "/prescription/appointment/{appointment_id}", tag = "prescription",
    params(("appointment_id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::PrescriptionDoc]),
        (status = 500, description = "Lookup Failed")
    )
)]
pub async fn by_appointment(State(state): State<AppState>, ApiPath(appointment_id): ApiPath<i32>) -> Result<Json<Vec<Model>>, StatusCode> {
    match state.prescriptions.list_by_appointment(appointment_id).await {
        Ok(list) => Ok(Json(list)),
        Err(e) => { error!(err = %e, appointment_id, "list prescriptions by appointment failed"); Err(StatusCode::INTERNAL_SERVER_ERROR) }
    }
}

#[utoipa::path(
    put, path = "/prescription/update", tag = "prescription",
    request_body = crate::openapi::PrescriptionDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::PrescriptionDoc),
        (status = 400, description = "Missing ID", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<AppState>, ApiJson(input): ApiJson<PrescriptionPayload>) -> Result<Json<Model>, JsonApiError> {
    match state.prescriptions.update(input).await {
        Ok(m) => { info!(id = m.id, "updated prescription"); Ok(Json(m)) }
        Err(e) if e.is_validation() => Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))),
        Err(ServiceError::NotFound(msg)) => Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg))),
        Err(e) => { error!(err = %e, "update prescription failed"); Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Update Failed", None)) }
    }
}

#[utoipa::path(
    delete, path = "/prescription/delete/{id}", tag = "prescription",
    params(("id" = i32, Path, description = "Prescription ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Delete Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<MessageResponse>, JsonApiError> {
    match state.prescriptions.delete(id).await {
        Ok(msg) => { info!(id, "deleted prescription"); Ok(Json(MessageResponse::new(msg))) }
        Err(ServiceError::NotFound(msg)) => Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg))),
        Err(e) => {
            error!(err = %e, id, "delete prescription failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Delete Failed", Some("Failed to delete prescription".into())))
        }
    }
}

#[utoipa::path(
    get, path = "/prescription/{id}", tag = "prescription",
    params(("id" = i32, Path, description = "Prescription ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PrescriptionDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Lookup Failed")
    )
)]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<Model>, StatusCode> {
    match state.prescriptions.get(id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => { error!(err = %e, id, "get prescription failed"); Err(StatusCode::INTERNAL_SERVER_ERROR) }
    }
}
