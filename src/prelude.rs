pub use crate::data_structs::typedef::{
    GeneId,
    ScoreType,
};
pub use crate::data_structs::{
    BehavioralScores,
    GenomicRecord,
    PatientDocument,
    PatientInfo,
};
pub use crate::io::{
    load,
    load_path,
    load_str,
    LoadError,
};
pub use crate::tools::{
    pick,
    select_significant,
    SignificanceReason,
    SignificanceRule,
};
