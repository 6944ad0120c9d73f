use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use je_audit::analyser::logic::{load_workbook, run_benford_analysis, run_profile};
use je_audit::config::{AnalysisConfig, load_config};
use je_audit::report;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "je-audit",
    about = "Benford's-Law and descriptive-statistics reports for journal-entry sample workbooks"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Benford leading-digit analysis and write its artifacts
    Benford {
        /// Path to the workbook (XLSX, CSV or Parquet)
        #[arg(short, long, default_value = "je_samples.xlsx")]
        input: PathBuf,

        /// Directory the report artifacts are written into
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minimum number of valid values a column needs to be analyzed
        #[arg(long)]
        min_samples: Option<usize>,

        /// Path to a JSON analysis configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Profile every column and write the descriptive-statistics report
    Stats {
        /// Path to the workbook (XLSX, CSV or Parquet)
        #[arg(short, long, default_value = "je_samples.xlsx")]
        input: PathBuf,

        /// Directory the report artifacts are written into
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Benford {
            input,
            output,
            min_samples,
            config,
        } => handle_benford(input, output, min_samples, config),
        Commands::Stats { input, output } => handle_stats(input, output),
    }
}

/// Resolution order: CLI flag, then config file, then default.
fn resolve_config(
    config_path: Option<PathBuf>,
    output: Option<PathBuf>,
    min_samples: Option<usize>,
) -> Result<AnalysisConfig> {
    let mut config = match config_path {
        Some(path) => load_config(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if let Some(dir) = output {
        config.output_dir = dir;
    }
    if let Some(n) = min_samples {
        config.min_sample_size = n;
    }
    Ok(config)
}

fn handle_benford(
    input: PathBuf,
    output: Option<PathBuf>,
    min_samples: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = resolve_config(config_path, output, min_samples)?;

    println!("Analyzing {}...", input.display());
    let workbook = load_workbook(&input)
        .with_context(|| format!("Failed to load workbook {}", input.display()))?;

    let response = run_benford_analysis(&workbook, config.min_sample_size)?;
    report::write_benford_artifacts(&response, &config.output_dir, config.top_deviations)?;

    let summary = &response.summary;
    println!(
        "Done: {} columns analyzed, {} skipped ({} close, {} acceptable, {} marginal, {} nonconforming).",
        summary.analyzed,
        summary.skipped,
        summary.close,
        summary.acceptable,
        summary.marginal,
        summary.nonconforming
    );
    println!("Artifacts written to {}", config.output_dir.display());
    Ok(())
}

fn handle_stats(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let config = resolve_config(None, output, None)?;

    println!("Profiling {}...", input.display());
    let workbook = load_workbook(&input)
        .with_context(|| format!("Failed to load workbook {}", input.display()))?;

    let profile = run_profile(&workbook)?;
    report::write_profile_artifacts(&profile, &config.output_dir)?;

    let column_count: usize = profile.sheets.iter().map(|s| s.columns.len()).sum();
    println!(
        "Done: {} sheets, {} columns profiled.",
        profile.sheets.len(),
        column_count
    );
    println!("Artifacts written to {}", config.output_dir.display());
    Ok(())
}
