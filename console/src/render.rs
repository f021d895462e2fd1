use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use console::style;
use genoreport::data_structs::{
    AGE_KEY,
    FAMILY_HISTORY_KEY,
    NAME_KEY,
    PRIOR_DIAGNOSIS_KEY,
    SEX_KEY,
};
use genoreport::prelude::*;
use log::{
    debug,
    info,
};
use serde::Serialize;

use crate::strings::messages::*;
use crate::strings::render::*;
use crate::utils::{
    read_document,
    UtilsArgs,
};
use crate::PipelineCommand;

/// Profile rows of the patient panel: (label, key).
const PROFILE_ROWS: [(&str, &str); 5] = [
    ("Name", NAME_KEY),
    ("Age", AGE_KEY),
    ("Sex", SEX_KEY),
    ("Family History of ED", FAMILY_HISTORY_KEY),
    ("Prior ED Diagnosis", PRIOR_DIAGNOSIS_KEY),
];

#[derive(Args, Debug, Clone)]
pub(crate) struct RenderArgs {
    #[arg(help = INPUT)]
    input:     PathBuf,
    #[arg(long = "caption", help = CAPTION)]
    captions:  Vec<String>,
    #[arg(long, help = SEED)]
    seed:      Option<u64>,
    #[arg(long, default_value_t = false, help = JSON)]
    json:      bool,
    #[arg(long, default_value_t = 40, help = BAR_WIDTH)]
    bar_width: usize,
}

#[derive(Serialize)]
struct RenderedReport<'a> {
    document:          &'a PatientDocument,
    significant_genes: &'a [GeneId],
}

impl PipelineCommand for RenderArgs {
    fn run(
        &self,
        _utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let document = read_document(&self.input)?;
        let genes = select_significant(document.genomic_results());
        info!(
            "{} of {} genomic records map to significant genes",
            genes.len(),
            document.genomic_results().len()
        );

        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        if self.json {
            let report = RenderedReport {
                document:          &document,
                significant_genes: &genes,
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
            return Ok(());
        }

        let seed = self.seed.unwrap_or_else(rand::random);
        debug!("Caption seed {}", seed);
        let caption = pick(seed, self.captions.as_slice());

        write_report(&mut out, &document, &genes, caption, self.bar_width)
    }
}

pub(crate) fn write_report<W: Write>(
    out: &mut W,
    document: &PatientDocument,
    genes: &[GeneId],
    caption: Option<&str>,
    bar_width: usize,
) -> anyhow::Result<()> {
    writeln!(out, "{}", style(TITLE).bold())?;
    if let Some(caption) = caption {
        writeln!(out, "{}", style(caption).italic().dim())?;
    }

    writeln!(out)?;
    writeln!(out, "{}", style("Patient Profile").bold().cyan())?;
    let info = document.patient_info();
    for (label, key) in PROFILE_ROWS {
        let value = info.text(key);
        writeln!(
            out,
            "  {}: {}",
            style(label).bold(),
            value.as_deref().unwrap_or(NOT_AVAILABLE)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", style("Behavioral Trait Summary").bold().cyan())?;
    for line in bar_chart(document.behavioral_scores(), bar_width) {
        writeln!(out, "  {}", line)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", style("Genomic Results").bold().cyan())?;
    writeln!(out, "{}", document.genomic_frame()?)?;

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style("Genes with Clinical Significance").bold().cyan()
    )?;
    if genes.is_empty() {
        writeln!(out, "  {}", NO_SIGNIFICANT)?;
    }
    for gene in genes {
        writeln!(out, "  {} {}", style("✓").green(), style(gene).bold())?;
    }
    Ok(())
}

/// Length of a bar for `score` when `max` takes `width` characters.
pub(crate) fn bar_length(
    score: ScoreType,
    max: ScoreType,
    width: usize,
) -> usize {
    if !(score > 0.0 && max > 0.0) {
        return 0;
    }
    ((score / max).min(1.0) * width as f64).round() as usize
}

/// One line per trait: padded name, bar and score.
pub(crate) fn bar_chart(
    scores: &BehavioralScores,
    width: usize,
) -> Vec<String> {
    let max = scores.max_score().unwrap_or(0.0);
    let label_width = scores
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);

    scores
        .iter()
        .map(|(name, score)| {
            format!(
                "{:<label_width$} | {:<width$} {}",
                name,
                "#".repeat(bar_length(score, max, width)),
                score,
            )
        })
        .collect()
}
