/// Reasons a report cannot be turned into a [`crate::data_structs::PatientDocument`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Bytes are not UTF-8 or not valid JSON.
    #[error("malformed document: {reason}")]
    Malformed { reason: String },

    /// A required top-level section is absent or has the wrong shape.
    #[error("missing or mistyped field: {0}")]
    MissingField(String),

    #[error("could not read document: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    pub(crate) fn malformed(reason: impl ToString) -> Self {
        LoadError::Malformed {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn missing(field: &str) -> Self {
        LoadError::MissingField(field.to_string())
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, LoadError::Malformed { .. })
    }

    /// Name of the offending section for [`LoadError::MissingField`].
    pub fn missing_field(&self) -> Option<&str> {
        match self {
            LoadError::MissingField(field) => Some(field),
            _ => None,
        }
    }
}
