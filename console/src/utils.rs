use std::path::{
    Path,
    PathBuf,
};

use anyhow::{
    ensure,
    Context,
};
use clap::{
    ArgAction,
    Args,
};
use genoreport::prelude::*;
use glob::glob;
use indicatif::{
    ProgressBar,
    ProgressStyle,
};
use log::{
    debug,
    warn,
    LevelFilter,
};

use crate::strings::messages::LOAD_FAILURE;
use crate::strings::utils::*;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(short, long, action = ArgAction::Count, help = VERBOSE)]
    pub verbose:  u8,
    #[arg(long, default_value_t = false, help = PROGRESS)]
    pub progress: bool,
}

impl UtilsArgs {
    pub fn setup(&self) -> anyhow::Result<()> {
        init_logger(self.verbose)
    }
}

pub(crate) fn init_logger(verbosity: u8) -> anyhow::Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.try_init()?;
    debug!("Logger initialized at level {}", level);
    Ok(())
}

pub(crate) fn init_progress(total: Option<usize>) -> anyhow::Result<ProgressBar> {
    let progress_bar = match total {
        Some(total) => ProgressBar::new(total as u64),
        None => ProgressBar::new_spinner(),
    };
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}, ETA: {eta}] [{bar:40.cyan/blue}] {pos:>5.green}/{len:5} {msg}")?
            .progress_chars("#>-"),
    );
    progress_bar.set_message("Processing...");
    Ok(progress_bar)
}

pub(crate) fn expand_wildcards(paths: &[String]) -> Vec<PathBuf> {
    let mut expanded_paths = Vec::new();

    for path in paths {
        if path.contains('*') || path.contains('?') {
            match glob(path) {
                Ok(matches) => {
                    expanded_paths.extend(matches.filter_map(Result::ok));
                },
                Err(e) => warn!("Error processing wildcard '{}': {}", path, e),
            }
        }
        else {
            expanded_paths.push(PathBuf::from(path));
        }
    }

    expanded_paths
}

pub(crate) fn validate_input(path: &Path) -> anyhow::Result<&Path> {
    ensure!(path.exists(), "Path {} does not exist", path.display());
    ensure!(path.is_file(), "Path {} is not a file", path.display());
    Ok(path)
}

/// Loads a report, attaching the user-facing failure message on error.
pub(crate) fn read_document(path: &Path) -> anyhow::Result<PatientDocument> {
    let document = load_path(validate_input(path)?)
        .with_context(|| format!("{} ({})", LOAD_FAILURE, path.display()))?;
    debug!("Loaded {}", path.display());
    Ok(document)
}
