use std::fs;
use std::path::Path;

use log::{
    debug,
    warn,
};
use serde_json::{
    Map,
    Value,
};

use super::error::LoadError;
use crate::data_structs::{
    BehavioralScores,
    GenomicRecord,
    PatientDocument,
    PatientInfo,
};

pub const PATIENT_INFO: &str = "patient_info";
pub const BEHAVIORAL_SCORES: &str = "behavioral_scores";
pub const GENOMIC_RESULTS: &str = "genomic_results";

/// Top-level sections every report must contain, in validation order.
pub const REQUIRED_FIELDS: [&str; 3] =
    [PATIENT_INFO, BEHAVIORAL_SCORES, GENOMIC_RESULTS];

/// Parses an uploaded byte buffer into a [`PatientDocument`].
///
/// The buffer must be UTF-8 encoded JSON. Decoding or syntax errors yield
/// [`LoadError::Malformed`], a missing or mistyped section yields
/// [`LoadError::MissingField`]. No partial document is ever returned.
pub fn load(raw: &[u8]) -> Result<PatientDocument, LoadError> {
    let text = std::str::from_utf8(raw).map_err(LoadError::malformed)?;
    load_str(text)
}

/// Same as [`load`] for text that is already decoded.
pub fn load_str(text: &str) -> Result<PatientDocument, LoadError> {
    let value: Value = serde_json::from_str(text).map_err(LoadError::malformed)?;
    from_value(value)
}

/// Reads the whole file at `path` and passes it to [`load`].
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<PatientDocument, LoadError> {
    let path = path.as_ref();
    let raw = fs::read(path)?;
    debug!("Read {} bytes from {}", raw.len(), path.display());
    load(&raw)
}

/// Validates the structure of an already parsed JSON value.
pub fn from_value(value: Value) -> Result<PatientDocument, LoadError> {
    let mut root = match value {
        Value::Object(map) => map,
        other => {
            return Err(LoadError::malformed(format!(
                "expected a JSON object at top level, found {}",
                kind(&other)
            )))
        },
    };

    let patient_info = decode_patient_info(take_object(&mut root, PATIENT_INFO)?)?;
    let behavioral_scores =
        decode_scores(take_object(&mut root, BEHAVIORAL_SCORES)?)?;
    let genomic_results = decode_records(root.remove(GENOMIC_RESULTS))?;

    for key in root.keys() {
        warn!("Ignoring unexpected top-level field '{}'", key);
    }

    debug!(
        "Loaded document: {} profile fields, {} scores, {} genomic records",
        patient_info.len(),
        behavioral_scores.len(),
        genomic_results.len()
    );

    Ok(PatientDocument::new(
        patient_info,
        behavioral_scores,
        genomic_results,
    ))
}

fn take_object(
    root: &mut Map<String, Value>,
    field: &str,
) -> Result<Map<String, Value>, LoadError> {
    match root.remove(field) {
        Some(Value::Object(map)) => Ok(map),
        Some(other) => {
            debug!("Field '{}' is {}, expected object", field, kind(&other));
            Err(LoadError::missing(field))
        },
        None => Err(LoadError::missing(field)),
    }
}

fn decode_patient_info(map: Map<String, Value>) -> Result<PatientInfo, LoadError> {
    if let Some((key, value)) = map
        .iter()
        .find(|(_, v)| v.is_object() || v.is_array())
    {
        debug!("Profile field '{}' is {}, expected scalar", key, kind(value));
        return Err(LoadError::missing(PATIENT_INFO));
    }
    Ok(PatientInfo::new(map.into_iter().collect()))
}

fn decode_scores(map: Map<String, Value>) -> Result<BehavioralScores, LoadError> {
    map.into_iter()
        .map(|(name, value)| match value.as_f64() {
            Some(score) => Ok((name, score)),
            None => {
                debug!("Score '{}' is {}, expected number", name, kind(&value));
                Err(LoadError::missing(BEHAVIORAL_SCORES))
            },
        })
        .collect()
}

fn decode_records(value: Option<Value>) -> Result<Vec<GenomicRecord>, LoadError> {
    let rows = match value {
        Some(Value::Array(rows)) => rows,
        _ => return Err(LoadError::missing(GENOMIC_RESULTS)),
    };

    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| {
            if !row.is_object() {
                debug!("Genomic record {} is {}, expected object", idx, kind(&row));
                return Err(LoadError::missing(GENOMIC_RESULTS));
            }
            serde_json::from_value::<GenomicRecord>(row).map_err(|e| {
                debug!("Genomic record {} could not be decoded: {}", idx, e);
                LoadError::missing(GENOMIC_RESULTS)
            })
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
