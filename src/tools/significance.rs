use std::fmt::Display;

use itertools::Itertools;
use log::{
    debug,
    warn,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::GeneId;
use crate::data_structs::GenomicRecord;

pub const DEFAULT_RISK_ALLELE: char = 'T';
pub const DEFAULT_UNMETHYLATED_TOKEN: &str = "-";

/// Which part of a record made it significant.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
pub enum SignificanceReason {
    /// Genotype contains the risk allele.
    Genotype,
    /// Methylation status differs from the "not detected" token.
    Methylation,
    Both,
}

impl Display for SignificanceReason {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            SignificanceReason::Genotype => write!(f, "genotype"),
            SignificanceReason::Methylation => write!(f, "methylation"),
            SignificanceReason::Both => write!(f, "genotype+methylation"),
        }
    }
}

/// Heuristic deciding whether a genomic record is flagged.
///
/// A record is significant when its `Genotype` contains the risk allele
/// (plain substring match, case-sensitive) or its `Methylation_Status` is
/// anything other than the unmethylated token. Absent, null or non-string
/// fields never match. This is a reporting heuristic, not a clinical rule.
///
/// The default rule uses `'T'` and `"-"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignificanceRule {
    risk_allele:        char,
    unmethylated_token: String,
}

impl Default for SignificanceRule {
    fn default() -> Self {
        Self {
            risk_allele:        DEFAULT_RISK_ALLELE,
            unmethylated_token: DEFAULT_UNMETHYLATED_TOKEN.to_string(),
        }
    }
}

impl SignificanceRule {
    pub fn with_risk_allele(
        mut self,
        allele: char,
    ) -> Self {
        self.risk_allele = allele;
        self
    }

    pub fn with_unmethylated_token(
        mut self,
        token: impl Into<String>,
    ) -> Self {
        self.unmethylated_token = token.into();
        self
    }

    pub fn risk_allele(&self) -> char {
        self.risk_allele
    }

    pub fn unmethylated_token(&self) -> &str {
        &self.unmethylated_token
    }

    pub fn genotype_matches(
        &self,
        record: &GenomicRecord,
    ) -> bool {
        record
            .genotype()
            .is_some_and(|g| g.contains(self.risk_allele))
    }

    pub fn methylation_matches(
        &self,
        record: &GenomicRecord,
    ) -> bool {
        record
            .methylation_status()
            .is_some_and(|m| m != self.unmethylated_token)
    }

    /// Reason the record is significant, `None` if it is not.
    pub fn classify(
        &self,
        record: &GenomicRecord,
    ) -> Option<SignificanceReason> {
        match (self.genotype_matches(record), self.methylation_matches(record)) {
            (true, true) => Some(SignificanceReason::Both),
            (true, false) => Some(SignificanceReason::Genotype),
            (false, true) => Some(SignificanceReason::Methylation),
            (false, false) => None,
        }
    }

    pub fn is_significant(
        &self,
        record: &GenomicRecord,
    ) -> bool {
        self.classify(record).is_some()
    }

    /// Genes of all significant records, deduplicated, in order of first
    /// occurrence.
    ///
    /// Significant records without a string `Gene` cannot be reported and
    /// are skipped.
    pub fn select<'a, I>(
        &self,
        records: I,
    ) -> Vec<GeneId>
    where
        I: IntoIterator<Item = &'a GenomicRecord>, {
        let genes = records
            .into_iter()
            .filter(|record| self.is_significant(record))
            .filter_map(|record| {
                let gene = record.gene();
                if gene.is_none() {
                    warn!("Skipping significant record without a gene identifier");
                }
                gene
            })
            .unique()
            .map(GeneId::from)
            .collect_vec();
        debug!("Selected {} significant genes", genes.len());
        genes
    }
}

/// Selects significant genes with the default [`SignificanceRule`].
pub fn select_significant(records: &[GenomicRecord]) -> Vec<GeneId> {
    SignificanceRule::default().select(records)
}
