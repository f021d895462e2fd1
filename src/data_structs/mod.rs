//! Core data types of a patient report.
//!
//! - [`PatientDocument`]: the parsed unit of input, holding the three report
//!   sections.
//! - [`PatientInfo`]: demographic fields (`Name`, `Age`, `Sex`,
//!   `Family_History_ED`, `Prior_ED_Diagnosis`, ...).
//! - [`BehavioralScores`]: numeric score per behavioral trait.
//! - [`GenomicRecord`]: one row of genomic results. Columns other than
//!   `Gene`, `Genotype` and `Methylation_Status` are carried through
//!   untouched.
//! - [`typedef`]: type aliases and column names.
//!
//! Documents also expose `polars` DataFrame views of their tabular sections
//! (see [`PatientDocument::genomic_frame`]).

mod document;
mod frames;
pub mod typedef;

pub use document::{
    BehavioralScores,
    GenomicRecord,
    PatientDocument,
    PatientInfo,
    AGE_KEY,
    FAMILY_HISTORY_KEY,
    NAME_KEY,
    PRIOR_DIAGNOSIS_KEY,
    SEX_KEY,
};
pub use frames::{
    SCORE_COL,
    TRAIT_COL,
};
