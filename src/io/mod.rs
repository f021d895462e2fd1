//! Loading of patient reports.
//!
//! A report is a UTF-8 encoded JSON object with three sections:
//! `patient_info` (object of scalars), `behavioral_scores` (object of
//! numbers) and `genomic_results` (array of objects). [`load`] turns the raw
//! bytes into a [`crate::data_structs::PatientDocument`] or a [`LoadError`].

mod error;
mod loader;

pub use error::LoadError;
pub use loader::{
    from_value,
    load,
    load_path,
    load_str,
    BEHAVIORAL_SCORES,
    GENOMIC_RESULTS,
    PATIENT_INFO,
    REQUIRED_FIELDS,
};
