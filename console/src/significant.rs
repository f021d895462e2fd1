use std::io::Write;
use std::path::PathBuf;

use clap::{
    Args,
    ValueEnum,
};
use genoreport::prelude::*;
use itertools::Itertools;
use serde::Serialize;

use crate::strings::messages::NO_SIGNIFICANT;
use crate::strings::significant::*;
use crate::utils::{
    read_document,
    UtilsArgs,
};
use crate::PipelineCommand;

#[derive(Debug, Clone, Copy, ValueEnum, Eq, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct SignificantArgs {
    #[arg(help = INPUT)]
    input:        PathBuf,
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Text, help = FORMAT)]
    format:       OutputFormat,
    #[arg(long, default_value_t = 'T', help = RISK_ALLELE)]
    risk_allele:  char,
    #[arg(long, default_value = "-", allow_hyphen_values = true, help = UNMETHYLATED)]
    unmethylated: String,
}

/// Exported selection of significant genes.
#[derive(Debug, Serialize)]
pub(crate) struct SignificantExport {
    pub genes:         Vec<GeneId>,
    pub reasons:       Vec<(GeneId, SignificanceReason)>,
    pub total_records: usize,
}

impl SignificantExport {
    pub fn new(
        rule: &SignificanceRule,
        records: &[GenomicRecord],
    ) -> Self {
        let reasons = records
            .iter()
            .filter_map(|r| Some((r.gene()?.to_string(), rule.classify(r)?)))
            .unique_by(|(gene, _)| gene.clone())
            .collect_vec();
        Self {
            genes: rule.select(records),
            reasons,
            total_records: records.len(),
        }
    }
}

impl SignificantArgs {
    fn rule(&self) -> SignificanceRule {
        SignificanceRule::default()
            .with_risk_allele(self.risk_allele)
            .with_unmethylated_token(self.unmethylated.as_str())
    }
}

impl PipelineCommand for SignificantArgs {
    fn run(
        &self,
        _utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let document = read_document(&self.input)?;
        let export = SignificantExport::new(&self.rule(), document.genomic_results());

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, &export)?;
                writeln!(out)?;
            },
            OutputFormat::Text if export.genes.is_empty() => {
                writeln!(out, "{}", NO_SIGNIFICANT)?;
            },
            OutputFormat::Text => {
                for (gene, reason) in export.reasons.iter() {
                    writeln!(out, "{}\t{}", gene, reason)?;
                }
            },
        }
        Ok(())
    }
}
