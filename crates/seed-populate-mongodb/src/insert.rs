//! Patient document encoding and collection I/O.

use crate::error::MongoDBSeederError;
use bson::{doc, Bson, Document};
use chrono::{NaiveDate, NaiveTime};
use mongodb::error::{ErrorKind, InsertManyError};
use mongodb::Collection;
use seed_core::{Dni, Patient};
use tracing::warn;

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Rows written and rows rejected as duplicates by one insert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertOutcome {
    pub inserted: u64,
    pub conflicts: u64,
}

/// Convert a patient to its BSON document.
///
/// The identifier becomes `_id`; dates are stored as BSON datetimes at
/// midnight UTC.
pub fn patient_to_document(patient: &Patient) -> Document {
    let seguro = match &patient.insurance {
        Some(insurance) => Bson::Document(doc! {
            "tipo_seguro": insurance.kind.as_str(),
            "vencimiento": midnight(insurance.expires_on),
        }),
        None => Bson::Null,
    };

    doc! {
        "_id": patient.dni.as_str(),
        "nombres": &patient.given_name,
        "apellidos": &patient.family_name,
        "fecha_nacimiento": midnight(patient.birth_date),
        "seguro": seguro,
    }
}

fn midnight(date: NaiveDate) -> bson::DateTime {
    bson::DateTime::from_chrono(date.and_time(NaiveTime::MIN).and_utc())
}

/// Insert all patients in one unordered batch.
///
/// Documents rejected by the `_id` uniqueness constraint are counted as
/// conflicts; every other failure is returned.
pub async fn insert_patients(
    collection: &Collection<Document>,
    patients: &[Patient],
) -> Result<InsertOutcome, MongoDBSeederError> {
    if patients.is_empty() {
        return Ok(InsertOutcome::default());
    }

    let documents: Vec<Document> = patients.iter().map(patient_to_document).collect();
    let total = documents.len() as u64;

    match collection.insert_many(documents).ordered(false).await {
        Ok(result) => Ok(InsertOutcome {
            inserted: result.inserted_ids.len() as u64,
            conflicts: 0,
        }),
        Err(e) => match duplicate_key_count(&e) {
            Some(conflicts) => Ok(InsertOutcome {
                inserted: total - conflicts,
                conflicts,
            }),
            None => Err(e.into()),
        },
    }
}

/// Number of duplicate-key rejections when those are the only failures.
fn duplicate_key_count(error: &mongodb::error::Error) -> Option<u64> {
    match error.kind.as_ref() {
        ErrorKind::InsertMany(InsertManyError {
            write_errors: Some(errors),
            write_concern_error: None,
            ..
        }) if errors.iter().all(|e| e.code == DUPLICATE_KEY_CODE) => Some(errors.len() as u64),
        _ => None,
    }
}

/// Delete every document in the collection.
pub async fn clear_collection(
    collection: &Collection<Document>,
) -> Result<u64, MongoDBSeederError> {
    let result = collection.delete_many(doc! {}).await?;
    Ok(result.deleted_count)
}

/// Get the document count for a collection.
pub async fn count_documents(
    collection: &Collection<Document>,
) -> Result<u64, MongoDBSeederError> {
    let count = collection.count_documents(doc! {}).await?;
    Ok(count)
}

/// Load every patient identifier in the collection.
///
/// Documents whose `_id` is not an 8-digit string are skipped with a warning.
pub async fn load_patient_ids(
    collection: &Collection<Document>,
) -> Result<Vec<Dni>, MongoDBSeederError> {
    let mut cursor = collection
        .find(doc! {})
        .projection(doc! { "_id": 1 })
        .await?;

    let mut ids = Vec::new();
    while cursor.advance().await? {
        let document: Document = cursor.deserialize_current()?;
        match document.get("_id").and_then(parse_dni) {
            Some(dni) => ids.push(dni),
            None => warn!("Skipping patient with unusable _id: {:?}", document.get("_id")),
        }
    }

    Ok(ids)
}

fn parse_dni(value: &Bson) -> Option<Dni> {
    match value {
        Bson::String(s) => s.parse().ok(),
        _ => None,
    }
}
