pub mod report;

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use scout_catalogue::Candidate;
use scout_scorer::{CategorizedResults, RelevanceScorer};

/// Reads the page source from a file, or from stdin when no path is
/// given (the paste-the-source flow).
pub fn load_page_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read page source {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read page source from stdin")?;
            Ok(raw)
        }
    }
}

/// One full analysis pass: score every candidate, then bucket by tier.
pub fn analyze(candidates: Vec<Candidate>, page_text: &str) -> CategorizedResults {
    let scorer = RelevanceScorer::new(candidates);
    let scored = scorer.score_content(page_text);
    RelevanceScorer::categorize(&scored)
}

pub fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}
