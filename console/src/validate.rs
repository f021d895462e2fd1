use std::path::PathBuf;

use anyhow::{
    bail,
    ensure,
};
use clap::Args;
use console::style;
use genoreport::prelude::*;
use indicatif::ProgressBar;
use itertools::Itertools;
use log::info;

use crate::strings::validate::FILES;
use crate::utils::{
    expand_wildcards,
    init_progress,
    UtilsArgs,
};
use crate::PipelineCommand;

#[derive(Args, Debug, Clone)]
pub(crate) struct ValidateArgs {
    #[arg(
        value_parser,
        num_args=1..,
        required = true,
        help = FILES
    )]
    files: Vec<String>,
}

/// Outcome of loading one file.
pub(crate) struct Validation {
    pub path:   PathBuf,
    pub result: Result<usize, LoadError>,
}

pub(crate) fn validate_paths(
    paths: &[PathBuf],
    progress_bar: &ProgressBar,
) -> Vec<Validation> {
    paths
        .iter()
        .map(|path| {
            let result = load_path(path).map(|doc| doc.genomic_results().len());
            progress_bar.inc(1);
            Validation {
                path: path.clone(),
                result,
            }
        })
        .collect_vec()
}

impl PipelineCommand for ValidateArgs {
    fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let paths = expand_wildcards(&self.files);
        ensure!(!paths.is_empty(), "No files matched the given paths");
        info!("Validating {} files", paths.len());

        let progress_bar = if utils.progress {
            init_progress(Some(paths.len()))?
        }
        else {
            ProgressBar::hidden()
        };
        let validations = validate_paths(&paths, &progress_bar);
        progress_bar.finish_and_clear();

        let (valid, invalid): (Vec<_>, Vec<_>) =
            validations.iter().partition(|v| v.result.is_ok());

        for validation in validations.iter() {
            match &validation.result {
                Ok(records) => {
                    println!(
                        "[{}] {} ({} genomic records)",
                        style("V").green(),
                        validation.path.display(),
                        records
                    )
                },
                Err(e) => {
                    eprintln!(
                        "[{}] {}: {}",
                        style("X").red(),
                        validation.path.display(),
                        style(e).red()
                    )
                },
            }
        }

        if !invalid.is_empty() {
            bail!("{} of {} files are invalid", invalid.len(), validations.len());
        }
        println!(
            "{}",
            style(format!("All {} files are valid", valid.len())).green()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_file(
        dir: &std::path::Path,
        name: &str,
        content: &[u8],
    ) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path
    }

    #[test]
    fn test_validate_paths() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();

        let good = write_file(
            dir,
            "good.json",
            br#"{"patient_info": {}, "behavioral_scores": {}, "genomic_results": [{"Gene": "FTO"}]}"#,
        );
        let missing = write_file(
            dir,
            "missing.json",
            br#"{"patient_info": {}, "genomic_results": []}"#,
        );
        let broken = write_file(dir, "broken.json", b"{not json");

        let results =
            validate_paths(&[good, missing, broken], &ProgressBar::hidden());

        assert_eq!(results[0].result.as_ref().ok(), Some(&1));
        assert_eq!(
            results[1]
                .result
                .as_ref()
                .err()
                .and_then(LoadError::missing_field),
            Some("behavioral_scores")
        );
        assert!(results[2]
            .result
            .as_ref()
            .is_err_and(LoadError::is_malformed));
    }
}
