use itertools::Itertools;
use polars::df;
use polars::prelude::*;

use super::document::{
    scalar_text,
    PatientDocument,
};
use super::typedef::GENOMIC_COLUMNS;

pub const TRAIT_COL: &str = "Trait";
pub const SCORE_COL: &str = "Score";

impl PatientDocument {
    /// Tabular view of all genomic records.
    ///
    /// Columns are `Gene`, `Genotype`, `Methylation_Status`, followed by any
    /// other column in the order it is first seen. Cells are rendered as
    /// text, absent or null values become nulls.
    pub fn genomic_frame(&self) -> PolarsResult<DataFrame> {
        let records = self.genomic_results();
        let names = GENOMIC_COLUMNS
            .iter()
            .copied()
            .chain(
                records
                    .iter()
                    .flat_map(|r| r.extra().keys().map(String::as_str)),
            )
            .unique()
            .collect_vec();

        let columns = names
            .into_iter()
            .map(|name| {
                let values = records
                    .iter()
                    .map(|r| r.field(name).and_then(scalar_text))
                    .collect::<Vec<Option<String>>>();
                Column::new(name.into(), values)
            })
            .collect_vec();

        DataFrame::new(columns)
    }

    /// Two column (`Trait`, `Score`) view of the behavioral scores.
    pub fn behavioral_frame(&self) -> PolarsResult<DataFrame> {
        let (traits, scores): (Vec<&str>, Vec<f64>) =
            self.behavioral_scores().iter().unzip();
        df!(
            TRAIT_COL => traits,
            SCORE_COL => scores,
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::data_structs::{
        BehavioralScores,
        GenomicRecord,
        PatientInfo,
    };

    fn document(records: Vec<GenomicRecord>) -> PatientDocument {
        let scores: BehavioralScores = [
            ("Anxiety".to_string(), 6.0),
            ("Impulsivity".to_string(), 2.5),
        ]
        .into_iter()
        .collect();
        PatientDocument::new(PatientInfo::default(), scores, records)
    }

    #[test]
    fn test_genomic_frame_columns() {
        let doc = document(vec![
            GenomicRecord::new("FTO")
                .with_genotype("AT")
                .with_methylation_status("-")
                .with_column("Chromosome", json!("16")),
            GenomicRecord::new("COMT")
                .with_genotype("GG")
                .with_column("Position", json!(19963748))
                .with_column("Chromosome", json!("22")),
        ]);

        let df = doc.genomic_frame().unwrap();
        assert_eq!(df.shape(), (2, 5));
        let names = df
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec![
            "Gene",
            "Genotype",
            "Methylation_Status",
            "Chromosome",
            "Position"
        ]);

        let position = df
            .column("Position")
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap();
        assert_eq!(position.get(0), None);
        assert_eq!(position.get(1), Some("19963748"));

        let methylation = df
            .column("Methylation_Status")
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap();
        assert_eq!(methylation.get(0), Some("-"));
        assert_eq!(methylation.get(1), None);
    }

    #[test]
    fn test_genomic_frame_empty() {
        let df = document(vec![]).genomic_frame().unwrap();
        assert_eq!(df.shape(), (0, 3));
    }

    #[test]
    fn test_behavioral_frame() {
        let df = document(vec![]).behavioral_frame().unwrap();
        assert_eq!(df.shape(), (2, 2));

        let scores = df
            .column(SCORE_COL)
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap();
        assert_eq!(scores.get(0), Some(6.0));
        let traits = df
            .column(TRAIT_COL)
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap();
        assert_eq!(traits.get(1), Some("Impulsivity"));
    }
}
