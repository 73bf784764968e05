use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use scout_catalogue::{load_directory, Candidate};
use scout_cli::{analyze, init_logging, load_page_text, report};

#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Match a page against the known scraper catalogue", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for results)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a page against the scraper directory and print tiered results
    Analyze(AnalyzeArgs),

    /// Parse the scraper directory and list its candidates
    Candidates(CandidatesArgs),
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Saved directory listing (JSON array of repository records)
    #[arg(long)]
    directory: PathBuf,

    /// Page source to analyze (reads stdin when omitted)
    #[arg(long)]
    page: Option<PathBuf>,

    /// Emit JSON (all four tiers, always) instead of the text report
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pretty: bool,
}

#[derive(Args)]
struct CandidatesArgs {
    /// Saved directory listing (JSON array of repository records)
    #[arg(long)]
    directory: PathBuf,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Keep stdout clean for JSON consumers.
    let json_output = matches!(&cli.command, Commands::Analyze(args) if args.json);
    if json_output {
        cli.quiet = true;
    }
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Analyze(args) => run_analyze(args),
        Commands::Candidates(args) => run_candidates(args),
    }
}

fn load_candidates(directory: &Path) -> Result<Vec<Candidate>> {
    let candidates = load_directory(directory)
        .with_context(|| format!("failed to load scraper directory {}", directory.display()))?;
    log::info!(
        "loaded {} candidates from {}",
        candidates.len(),
        directory.display()
    );
    Ok(candidates)
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let candidates = load_candidates(&args.directory)?;
    let page_text = load_page_text(args.page.as_deref())?;
    let results = analyze(candidates, &page_text);

    if args.json {
        let raw = if args.pretty {
            serde_json::to_string_pretty(&results)?
        } else {
            serde_json::to_string(&results)?
        };
        println!("{raw}");
    } else {
        print!("{}", report::render_text_report(&results));
    }
    Ok(())
}

fn run_candidates(args: CandidatesArgs) -> Result<()> {
    let candidates = load_candidates(&args.directory)?;
    print!("{}", report::render_candidates(&candidates));
    Ok(())
}
