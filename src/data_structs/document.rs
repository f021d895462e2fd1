use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

use super::typedef::{
    ScoreType,
    GENE_COL,
    GENOTYPE_COL,
    METHYLATION_COL,
};

/// Profile keys shown in the patient panel.
pub const NAME_KEY: &str = "Name";
pub const AGE_KEY: &str = "Age";
pub const SEX_KEY: &str = "Sex";
pub const FAMILY_HISTORY_KEY: &str = "Family_History_ED";
pub const PRIOR_DIAGNOSIS_KEY: &str = "Prior_ED_Diagnosis";

/// Renders a scalar JSON value as display text. `null` has no text.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Demographic information of a patient.
///
/// Keys keep the order of the source document. Values are JSON scalars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientInfo(IndexMap<String, Value>);

impl PatientInfo {
    pub fn new(fields: IndexMap<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(
        &self,
        key: &str,
    ) -> Option<&Value> {
        self.0.get(key)
    }

    /// Value of `key` as display text, `None` when absent or null.
    pub fn text(
        &self,
        key: &str,
    ) -> Option<String> {
        self.0.get(key).and_then(scalar_text)
    }

    pub fn name(&self) -> Option<String> {
        self.text(NAME_KEY)
    }

    pub fn age(&self) -> Option<String> {
        self.text(AGE_KEY)
    }

    pub fn sex(&self) -> Option<String> {
        self.text(SEX_KEY)
    }

    pub fn family_history_ed(&self) -> Option<String> {
        self.text(FAMILY_HISTORY_KEY)
    }

    pub fn prior_ed_diagnosis(&self) -> Option<String> {
        self.text(PRIOR_DIAGNOSIS_KEY)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Behavioral trait scores, keyed by trait name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BehavioralScores(IndexMap<String, ScoreType>);

impl BehavioralScores {
    pub fn new(scores: IndexMap<String, ScoreType>) -> Self {
        Self(scores)
    }

    pub fn get(
        &self,
        trait_name: &str,
    ) -> Option<ScoreType> {
        self.0.get(trait_name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ScoreType)> {
        self.0
            .iter()
            .map(|(name, score)| (name.as_str(), *score))
    }

    /// Largest score, `None` for an empty set.
    pub fn max_score(&self) -> Option<ScoreType> {
        self.0.values().copied().reduce(ScoreType::max)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ScoreType)> for BehavioralScores {
    fn from_iter<T: IntoIterator<Item = (String, ScoreType)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One row of genomic results.
///
/// The three known columns are kept as raw JSON so that values of an
/// unexpected type survive for display. Every other column is carried in
/// `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenomicRecord {
    #[serde(
        rename = "Gene",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    gene:               Option<Value>,
    #[serde(
        rename = "Genotype",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    genotype:           Option<Value>,
    #[serde(
        rename = "Methylation_Status",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    methylation_status: Option<Value>,
    #[serde(flatten)]
    extra:              IndexMap<String, Value>,
}

impl GenomicRecord {
    pub fn new(gene: impl Into<String>) -> Self {
        Self {
            gene: Some(Value::String(gene.into())),
            ..Default::default()
        }
    }

    pub fn with_genotype(
        mut self,
        genotype: impl Into<String>,
    ) -> Self {
        self.genotype = Some(Value::String(genotype.into()));
        self
    }

    pub fn with_methylation_status(
        mut self,
        status: impl Into<String>,
    ) -> Self {
        self.methylation_status = Some(Value::String(status.into()));
        self
    }

    /// Sets an arbitrary column. Known column names update the typed fields.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        value: Value,
    ) -> Self {
        let name = name.into();
        match name.as_str() {
            GENE_COL => self.gene = Some(value),
            GENOTYPE_COL => self.genotype = Some(value),
            METHYLATION_COL => self.methylation_status = Some(value),
            _ => {
                self.extra.insert(name, value);
            },
        }
        self
    }

    /// Gene identifier, if present as a string.
    pub fn gene(&self) -> Option<&str> {
        self.gene.as_ref().and_then(Value::as_str)
    }

    /// Genotype, if present as a string.
    pub fn genotype(&self) -> Option<&str> {
        self.genotype.as_ref().and_then(Value::as_str)
    }

    /// Methylation status, if present as a string.
    pub fn methylation_status(&self) -> Option<&str> {
        self.methylation_status
            .as_ref()
            .and_then(Value::as_str)
    }

    /// Raw value of any column, known or extra.
    pub fn field(
        &self,
        name: &str,
    ) -> Option<&Value> {
        match name {
            GENE_COL => self.gene.as_ref(),
            GENOTYPE_COL => self.genotype.as_ref(),
            METHYLATION_COL => self.methylation_status.as_ref(),
            _ => self.extra.get(name),
        }
    }

    /// Columns beyond `Gene`, `Genotype` and `Methylation_Status`.
    pub fn extra(&self) -> &IndexMap<String, Value> {
        &self.extra
    }
}

/// A parsed patient report.
///
/// Only produced by the loader in [`crate::io`], so all three sections are
/// always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientDocument {
    patient_info:      PatientInfo,
    behavioral_scores: BehavioralScores,
    genomic_results:   Vec<GenomicRecord>,
}

impl PatientDocument {
    pub fn new(
        patient_info: PatientInfo,
        behavioral_scores: BehavioralScores,
        genomic_results: Vec<GenomicRecord>,
    ) -> Self {
        Self {
            patient_info,
            behavioral_scores,
            genomic_results,
        }
    }

    pub fn patient_info(&self) -> &PatientInfo {
        &self.patient_info
    }

    pub fn behavioral_scores(&self) -> &BehavioralScores {
        &self.behavioral_scores
    }

    pub fn genomic_results(&self) -> &[GenomicRecord] {
        &self.genomic_results
    }
}
