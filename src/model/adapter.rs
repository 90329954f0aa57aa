// File: src/model/adapter.rs
//! Maps the `/syllabus` JSON payload onto `SyllabusRecord`s.
use crate::error::FetchError;
use crate::model::item::{SyllabusRecord, parse_timestamp};
use serde_json::{Map, Value};

/// Reads a string field, treating `null` and non-string values as absent.
fn string_field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str)
}

impl SyllabusRecord {
    pub fn from_json(index: usize, value: &Value) -> Result<Self, FetchError> {
        let obj = value.as_object().ok_or_else(|| FetchError::MalformedRecord {
            index,
            value: value.to_string(),
        })?;

        let raw = string_field(obj, "createdAt").ok_or_else(|| FetchError::MalformedRecord {
            index,
            value: obj
                .get("createdAt")
                .map(Value::to_string)
                .unwrap_or_else(|| "missing createdAt".to_string()),
        })?;
        let created_at = parse_timestamp(raw).ok_or_else(|| FetchError::MalformedRecord {
            index,
            value: raw.to_string(),
        })?;

        let id = string_field(obj, "_id")
            .or_else(|| string_field(obj, "id"))
            .map(str::to_string);

        Ok(Self {
            id,
            class_name: string_field(obj, "class").map(str::to_string),
            created_at_raw: raw.to_string(),
            created_at,
            pdf_url: string_field(obj, "pdfUrl").unwrap_or_default().to_string(),
        })
    }
}

/// Validates the envelope, maps every element and sorts newest first.
pub fn parse_payload(body: &[u8]) -> Result<Vec<SyllabusRecord>, FetchError> {
    let json: Value =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if json.get("success").and_then(Value::as_bool) != Some(true) {
        return Err(FetchError::ApiRejected);
    }

    let data = json
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| FetchError::Decode("'data' is missing or not an array".to_string()))?;

    let mut records = data
        .iter()
        .enumerate()
        .map(|(i, v)| SyllabusRecord::from_json(i, v))
        .collect::<Result<Vec<_>, _>>()?;

    sort_newest_first(&mut records);
    Ok(records)
}

/// Stable: records with equal timestamps keep their payload order.
pub fn sort_newest_first(records: &mut [SyllabusRecord]) {
    records.sort_by(|a, b| a.compare_newest_first(b));
}
