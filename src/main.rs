//! slimzip - archive deduplication and cleanup.
//!
//! Usage:
//!   slimzip analyze <archive.zip>               Analyze and write a reduced copy
//!   slimzip analyze <archive.zip> -o out.zip    Choose the output path
//!   slimzip analyze <archive.zip> -f json       Print the report as JSON
//!   slimzip --help                              Show help

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result, eyre};

use slimzip_analyze::{ArchivePipeline, CleanupConfig};
use slimzip_core::AnalysisReport;

#[derive(Parser)]
#[command(
    name = "slimzip",
    version,
    about = "Archive deduplication and cleanup",
    long_about = "slimzip deduplicates and classifies the contents of a zip archive,\n\
                  writes a reduced copy, and reports what was removed and why."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze an archive and write a reduced copy
    Analyze {
        /// Archive to analyze
        archive: PathBuf,

        /// Where to write the reduced archive (default: `<input>.cleaned.zip`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stale-file threshold (e.g., "2y", "6m", "30d")
        #[arg(long, default_value = "2y")]
        stale: String,

        /// Large-file threshold (e.g., "50MB", "1GB")
        #[arg(long, default_value = "50MB")]
        large: String,

        /// Deflate level for the rewritten archive (0-9)
        #[arg(long, default_value = "6")]
        level: u32,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            archive,
            output,
            stale,
            large,
            level,
            format,
        } => run_analyze(&archive, output, &stale, &large, level, format),
    }
}

/// Run the pipeline over one archive file.
fn run_analyze(
    archive: &PathBuf,
    output: Option<PathBuf>,
    stale: &str,
    large: &str,
    level: u32,
    format: OutputFormat,
) -> Result<()> {
    let bytes = std::fs::read(archive)
        .with_context(|| format!("Failed to read {}", archive.display()))?;

    let config = CleanupConfig::builder()
        .stale_threshold(parse_duration(stale)?)
        .large_file_threshold(parse_size(large)?)
        .compression_level(level)
        .build()
        .map_err(|e| eyre!("Invalid configuration: {e}"))?;

    eprintln!("Analyzing {}...", archive.display());

    let pipeline = ArchivePipeline::with_config(config);
    let result = pipeline.run(&bytes).context("Analysis failed")?;

    let out_path = output.unwrap_or_else(|| default_output_path(archive));
    std::fs::write(&out_path, &result.archive)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    match format {
        OutputFormat::Text => print_report(&result.report, &out_path),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result.report)?),
    }

    Ok(())
}

/// Derive `<input>.cleaned.zip` next to the input.
fn default_output_path(archive: &PathBuf) -> PathBuf {
    let stem = archive
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "archive".to_string());
    archive.with_file_name(format!("{stem}.cleaned.zip"))
}

/// Print the report in the text format.
fn print_report(report: &AnalysisReport, out_path: &PathBuf) {
    println!();
    println!("{}", "─".repeat(70));
    println!(" Archive Cleanup Report");
    println!("{}", "─".repeat(70));
    println!();
    println!(
        " {} files analyzed, {} removed",
        report.total_files_analyzed, report.total_files_removed
    );
    println!(
        " {} -> {} ({:.1}% reduction)",
        format_size(report.original_size_bytes),
        format_size(report.cleaned_size_bytes),
        report.reduction_percentage
    );
    println!();

    println!(" Removed:");
    println!(
        "   {:<16} {:>6} files  {:>10}",
        "duplicates",
        report.duplicates.count,
        format_size(report.duplicates.bytes)
    );
    println!(
        "   {:<16} {:>6} files  {:>10}",
        "stale",
        report.stale.count,
        format_size(report.stale.bytes)
    );
    println!(
        "   {:<16} {:>6} files  {:>10}",
        "screenshots",
        report.screenshots.count,
        format_size(report.screenshots.bytes)
    );
    println!();
    println!(
        " Flagged large (kept): {} files, {}",
        report.oversized.count,
        format_size(report.oversized.bytes)
    );
    println!();

    if !report.categories.is_empty() {
        println!(" Kept by category:");
        for stats in &report.categories {
            println!(
                "   {:<16} {:>6} files  {:>10}",
                stats.category.to_string(),
                stats.count,
                format_size(stats.bytes)
            );
        }
        println!();
    }

    println!(" Cleaned archive written to {}", out_path.display());
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Parse a size string (e.g., "1KB", "50MB", "1GB").
fn parse_size(s: &str) -> Result<u64> {
    let s = s.trim().to_uppercase();

    let (num, multiplier) = if s.ends_with("GB") || s.ends_with('G') {
        let num: f64 = s
            .trim_end_matches(|c: char| !c.is_ascii_digit() && c != '.')
            .parse()?;
        (num, 1024 * 1024 * 1024)
    } else if s.ends_with("MB") || s.ends_with('M') {
        let num: f64 = s
            .trim_end_matches(|c: char| !c.is_ascii_digit() && c != '.')
            .parse()?;
        (num, 1024 * 1024)
    } else if s.ends_with("KB") || s.ends_with('K') {
        let num: f64 = s
            .trim_end_matches(|c: char| !c.is_ascii_digit() && c != '.')
            .parse()?;
        (num, 1024)
    } else if s.ends_with('B') {
        let num: f64 = s
            .trim_end_matches(|c: char| !c.is_ascii_digit() && c != '.')
            .parse()?;
        (num, 1)
    } else {
        let num: f64 = s.parse()?;
        (num, 1)
    };

    Ok((num * multiplier as f64) as u64)
}

/// Parse a duration string (e.g., "2y", "6m", "30d", "12h").
fn parse_duration(s: &str) -> Result<std::time::Duration> {
    let s = s.trim().to_lowercase();

    let (num, multiplier) = if s.ends_with('y') {
        let num: f64 = s.trim_end_matches('y').parse()?;
        (num, 365.0 * 24.0 * 60.0 * 60.0)
    } else if s.ends_with('m') {
        let num: f64 = s.trim_end_matches('m').parse()?;
        (num, 30.0 * 24.0 * 60.0 * 60.0)
    } else if s.ends_with('w') {
        let num: f64 = s.trim_end_matches('w').parse()?;
        (num, 7.0 * 24.0 * 60.0 * 60.0)
    } else if s.ends_with('d') {
        let num: f64 = s.trim_end_matches('d').parse()?;
        (num, 24.0 * 60.0 * 60.0)
    } else if s.ends_with('h') {
        let num: f64 = s.trim_end_matches('h').parse()?;
        (num, 60.0 * 60.0)
    } else {
        let num: f64 = s.parse()?;
        (num, 24.0 * 60.0 * 60.0) // Default to days
    };

    Ok(std::time::Duration::from_secs_f64(num * multiplier))
}
