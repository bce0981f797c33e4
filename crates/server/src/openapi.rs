use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionDoc {
    /// Assigned by the store on add; required on update.
    pub id: Option<i32>,
    pub doctor_id: i32,
    pub doctor_name: String,
    pub patient_id: Option<i32>,
    pub patient_name: String,
    pub appointment_id: Option<i32>,
    pub date: String,
    pub medications: String,
    pub dosage: Option<String>,
    pub instructions: Option<String>,
    pub diagnosis: Option<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDoc {
    pub id: Option<i32>,
    pub doctor_id: i32,
    /// e.g. `Monday`
    pub day_of_week: String,
    /// e.g. `09:00 AM`
    pub start_time: String,
    pub end_time: String,
    /// Defaults to `true` when omitted.
    pub is_available: Option<bool>,
    /// Defaults to 10 when omitted; must be at least 1.
    pub max_appointments: Option<i32>,
}

#[derive(Serialize, ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::prescriptions::add,
        crate::routes::prescriptions::by_doctor,
        crate::routes::prescriptions::by_patient,
        crate::routes::prescriptions::by_appointment,
        crate::routes::prescriptions::update,
        crate::routes::prescriptions::delete,
        crate::routes::prescriptions::get,
        crate::routes::schedules::add,
        crate::routes::schedules::by_doctor,
        crate::routes::schedules::by_doctor_and_day,
        crate::routes::schedules::by_doctor_and_availability,
        crate::routes::schedules::update,
        crate::routes::schedules::delete,
        crate::routes::schedules::get,
    ),
    components(
        schemas(
            HealthResponse,
            PrescriptionDoc,
            ScheduleDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "prescription"),
        (name = "schedule")
    )
)]
pub struct ApiDoc;
