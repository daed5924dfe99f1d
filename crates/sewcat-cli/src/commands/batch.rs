//! Batch command - extract fields from many recognized-text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use sewcat_core::{EnvelopeParser, ExtractionResult, PatternParser};

use super::extract::{format_csv, format_result, OutputFormat};
use super::load_config;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (e.g. "scans/*.txt")
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    extraction: Option<ExtractionResult>,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let format = OutputFormat::resolve(args.format, &config)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("txt")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = EnvelopeParser::new();
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match fs::read_to_string(&path) {
            Ok(text) => {
                results.push(ProcessResult {
                    path,
                    extraction: Some(parser.parse(&text)),
                    error: None,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to read {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        extraction: None,
                        error: Some(error_msg),
                    });
                } else {
                    error!("Failed to read {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if let Some(output_dir) = &args.output_dir {
        for result in &results {
            if let Some(extraction) = &result.extraction {
                let output_path = output_path(output_dir, &result.path, format);
                let content = format_result(
                    extraction,
                    format,
                    config.output.pretty,
                    config.output.show_text,
                )?;
                fs::write(&output_path, content)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    let average = average_confidence(&results);

    eprintln!();
    eprintln!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    if let Some(average) = average {
        eprintln!(
            "{} Average confidence: {:.0}%",
            style("ℹ").blue(),
            average * 100.0
        );
    }

    if !failed.is_empty() {
        eprintln!("{} {} files failed:", style("✗").red(), failed.len());
        for result in failed {
            eprintln!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn output_path(output_dir: &Path, input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("pattern");

    output_dir.join(format!("{}.{}", stem, format.extension()))
}

fn average_confidence(results: &[ProcessResult]) -> Option<f32> {
    let scores: Vec<f32> = results
        .iter()
        .filter_map(|r| r.extraction.as_ref().map(|e| e.confidence))
        .collect();

    if scores.is_empty() {
        None
    } else {
        Some(scores.iter().sum::<f32>() / scores.len() as f32)
    }
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let sources: Vec<String> = results.iter().map(|r| r.path.display().to_string()).collect();

    let rows: Vec<(&str, &ExtractionResult)> = results
        .iter()
        .zip(&sources)
        .filter_map(|(r, source)| r.extraction.as_ref().map(|e| (source.as_str(), e)))
        .collect();

    fs::write(path, format_csv(&rows)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sewcat_core::extract;

    #[test]
    fn test_output_path() {
        let path = output_path(Path::new("out"), Path::new("scans/b6453.txt"), OutputFormat::Json);
        assert_eq!(path, Path::new("out").join("b6453.json"));
    }

    #[test]
    fn test_average_confidence_skips_failures() {
        let results = vec![
            ProcessResult {
                path: PathBuf::from("a.txt"),
                extraction: Some(extract("Butterick")),
                error: None,
            },
            ProcessResult {
                path: PathBuf::from("b.txt"),
                extraction: None,
                error: Some("permission denied".to_string()),
            },
            ProcessResult {
                path: PathBuf::from("c.txt"),
                extraction: Some(extract("")),
                error: None,
            },
        ];

        let average = average_confidence(&results).unwrap();
        assert!((average - 0.4).abs() < 1e-5);
        assert_eq!(average_confidence(&[]), None);
    }
}
