use anyhow::Result;

use super::support::memory_db;
use crate::errors::ModelError;
use crate::prescription::{self, PrescriptionPayload};

fn payload(doctor_id: i32, patient_id: i32, patient_name: &str) -> PrescriptionPayload {
    PrescriptionPayload {
        doctor_id: Some(doctor_id),
        doctor_name: Some(format!("Dr. {}", doctor_id)),
        patient_id: Some(patient_id),
        patient_name: Some(patient_name.to_string()),
        date: Some("2024-03-01".into()),
        medications: Some("Amoxicillin, Ibuprofen".into()),
        dosage: Some("500mg twice daily".into()),
        ..PrescriptionPayload::default()
    }
}

#[tokio::test]
async fn create_assigns_id_and_round_trips() -> Result<()> {
    let db = memory_db().await?;

    let created = prescription::create(&db, payload(1, 10, "Alice")).await?;
    assert!(created.id > 0);
    assert_eq!(created.patient_name.as_deref(), Some("Alice"));
    assert_eq!(created.appointment_id, None);

    let found = prescription::find_by_id(&db, created.id).await?;
    assert_eq!(found, Some(created));
    Ok(())
}

#[tokio::test]
async fn create_ignores_client_supplied_id() -> Result<()> {
    let db = memory_db().await?;

    let first = prescription::create(&db, payload(1, 10, "Alice")).await?;
    let second = prescription::create(&db, PrescriptionPayload { id: Some(first.id), ..payload(1, 11, "Bob") }).await?;
    assert_ne!(first.id, second.id);
    assert_eq!(prescription::find_by_id(&db, first.id).await?.and_then(|m| m.patient_name), Some("Alice".into()));
    Ok(())
}

#[tokio::test]
async fn missing_mandatory_column_is_a_database_error() -> Result<()> {
    let db = memory_db().await?;

    let err = prescription::create(&db, PrescriptionPayload { medications: None, ..payload(1, 10, "Alice") })
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::Db(_)));
    assert!(prescription::find_by_doctor(&db, 1).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn lookups_filter_on_their_column() -> Result<()> {
    let db = memory_db().await?;

    let a = prescription::create(&db, PrescriptionPayload { appointment_id: Some(77), ..payload(1, 10, "Alice") }).await?;
    let b = prescription::create(&db, payload(1, 11, "Bob")).await?;
    let c = prescription::create(&db, payload(2, 10, "Alice")).await?;

    let by_doctor: Vec<i32> = prescription::find_by_doctor(&db, 1).await?.into_iter().map(|m| m.id).collect();
    assert_eq!(by_doctor, vec![a.id, b.id]);

    let by_patient: Vec<i32> = prescription::find_by_patient(&db, 10).await?.into_iter().map(|m| m.id).collect();
    assert_eq!(by_patient, vec![a.id, c.id]);

    let by_appt: Vec<i32> = prescription::find_by_appointment(&db, 77).await?.into_iter().map(|m| m.id).collect();
    assert_eq!(by_appt, vec![a.id]);

    assert!(prescription::find_by_doctor(&db, 99).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn overwrite_replaces_every_field() -> Result<()> {
    let db = memory_db().await?;

    let created = prescription::create(
        &db,
        PrescriptionPayload { notes: Some("take with food".into()), appointment_id: Some(3), ..payload(1, 10, "Alice") },
    )
    .await?;

    let replacement = PrescriptionPayload {
        medications: Some("Paracetamol".into()),
        notes: None,
        appointment_id: None,
        ..payload(1, 10, "Alice")
    };
    let updated = prescription::overwrite(&db, created.id, replacement).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.medications.as_deref(), Some("Paracetamol"));
    assert_eq!(updated.notes, None);
    assert_eq!(updated.appointment_id, None);

    let found = prescription::find_by_id(&db, created.id).await?;
    assert_eq!(found, Some(updated));
    Ok(())
}

#[tokio::test]
async fn overwrite_of_missing_row_fails() -> Result<()> {
    let db = memory_db().await?;
    let res = prescription::overwrite(&db, 4242, payload(1, 10, "Alice")).await;
    assert!(matches!(res, Err(ModelError::NotUpdated)));
    Ok(())
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() -> Result<()> {
    let db = memory_db().await?;

    let keep = prescription::create(&db, payload(1, 10, "Alice")).await?;
    let gone = prescription::create(&db, payload(1, 11, "Bob")).await?;

    assert!(prescription::delete(&db, gone.id).await?);
    assert!(!prescription::delete(&db, gone.id).await?);
    assert!(prescription::find_by_id(&db, gone.id).await?.is_none());
    assert!(prescription::find_by_id(&db, keep.id).await?.is_some());
    Ok(())
}
