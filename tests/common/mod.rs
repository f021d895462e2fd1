#![allow(dead_code)]

use serde_json::{
    json,
    Value,
};

/// Builder for report JSON used across the integration tests.
pub struct DemoReportBuilder {
    patient_info:      Option<Value>,
    behavioral_scores: Option<Value>,
    genomic_results:   Option<Value>,
}

impl Default for DemoReportBuilder {
    fn default() -> Self {
        Self {
            patient_info:      Some(json!({
                "Name": "Jane Doe",
                "Age": "24",
                "Sex": "Female",
                "Family_History_ED": "Yes",
                "Prior_ED_Diagnosis": "No"
            })),
            behavioral_scores: Some(json!({
                "Impulsivity": 4,
                "Anxiety": 7.5,
                "Perfectionism": 6,
                "Body_Dissatisfaction": 8
            })),
            genomic_results:   Some(json!([
                {"Gene": "FTO", "Genotype": "AT", "Methylation_Status": "-", "rsID": "rs9939609"},
                {"Gene": "COMT", "Genotype": "GG", "Methylation_Status": "-", "rsID": "rs4680"},
                {"Gene": "BDNF", "Genotype": "CC", "Methylation_Status": "Hypermethylated", "rsID": "rs6265"},
                {"Gene": "FTO", "Genotype": "TT", "Methylation_Status": "-", "rsID": "rs1421085"},
                {"Gene": "OPRD1", "Genotype": "CT", "Methylation_Status": "Methylated", "rsID": "rs569356"}
            ])),
        }
    }
}

impl DemoReportBuilder {
    pub fn without(
        mut self,
        field: &str,
    ) -> Self {
        match field {
            "patient_info" => self.patient_info = None,
            "behavioral_scores" => self.behavioral_scores = None,
            "genomic_results" => self.genomic_results = None,
            _ => panic!("unknown field {field}"),
        }
        self
    }

    pub fn with(
        mut self,
        field: &str,
        value: Value,
    ) -> Self {
        match field {
            "patient_info" => self.patient_info = Some(value),
            "behavioral_scores" => self.behavioral_scores = Some(value),
            "genomic_results" => self.genomic_results = Some(value),
            _ => panic!("unknown field {field}"),
        }
        self
    }

    pub fn build_value(self) -> Value {
        let mut root = serde_json::Map::new();
        if let Some(v) = self.patient_info {
            root.insert("patient_info".into(), v);
        }
        if let Some(v) = self.behavioral_scores {
            root.insert("behavioral_scores".into(), v);
        }
        if let Some(v) = self.genomic_results {
            root.insert("genomic_results".into(), v);
        }
        Value::Object(root)
    }

    pub fn build_bytes(self) -> Vec<u8> {
        serde_json::to_vec(&self.build_value()).unwrap()
    }
}
