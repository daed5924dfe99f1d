//! Extract command - pre-fill pattern fields from one recognized-text file.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, ValueEnum};
use console::style;
use tracing::{debug, info};

use sewcat_core::models::config::SewcatConfig;
use sewcat_core::{EnvelopeParser, ExtractionResult, PatternForm, PatternParser};

use super::load_config;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Recognized text file, or "-" to read stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Existing pattern form (JSON) to pre-fill; prints the merged form
    #[arg(long)]
    form: Option<PathBuf>,

    /// Show the extraction confidence score
    #[arg(long)]
    show_confidence: bool,

    /// Include the normalized text in text output
    #[arg(long)]
    show_text: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// Resolve the format from the command line, falling back to config.
    pub fn resolve(arg: Option<Self>, config: &SewcatConfig) -> anyhow::Result<Self> {
        match arg {
            Some(format) => Ok(format),
            None => <Self as ValueEnum>::from_str(&config.output.format, true)
                .map_err(|e| anyhow::anyhow!("Invalid output format in config: {}", e)),
        }
    }

    /// File extension for outputs in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let format = OutputFormat::resolve(args.format, &config)?;

    let text = read_input(&args.input)?;
    info!("Extracting fields from {} characters of text", text.len());

    let result = EnvelopeParser::new().parse(&text);

    let output = match &args.form {
        Some(form_path) => prefill_form(form_path, &result)?,
        None => {
            let show_text = args.show_text || config.output.show_text;
            format_result(&result, format, config.output.pretty, show_text)?
        }
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_confidence || config.output.show_confidence {
        eprintln!(
            "{} Extraction confidence: {:.0}% ({} of 6 fields)",
            style("ℹ").blue(),
            result.confidence * 100.0,
            result.fields.found_count()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read recognized text from a file, or stdin for "-".
fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(fs::read_to_string(input)?)
}

/// Merge the extraction into a saved form without touching filled fields.
fn prefill_form(form_path: &Path, result: &ExtractionResult) -> anyhow::Result<String> {
    let content = fs::read_to_string(form_path)?;
    let mut form: PatternForm = serde_json::from_str(&content)?;

    let filled = form.prefill(&result.fields);
    if filled.is_empty() {
        eprintln!("{} No empty fields were pre-filled", style("ℹ").blue());
    } else {
        let names: Vec<&str> = filled.iter().map(|f| f.as_str()).collect();
        eprintln!(
            "{} Pre-filled: {}",
            style("✓").green(),
            names.join(", ")
        );
    }

    Ok(serde_json::to_string_pretty(&form)?)
}

pub(crate) fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    pretty: bool,
    show_text: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
        OutputFormat::Csv => format_csv(&[("", result)]),
        OutputFormat::Text => Ok(format_text(result, show_text)),
    }
}

pub(crate) const CSV_HEADER: [&str; 9] = [
    "source",
    "company",
    "pattern_number",
    "pattern_name",
    "size_range",
    "fabric_type",
    "difficulty",
    "confidence",
    "missing_fields",
];

/// One CSV row per (source, result).
pub(crate) fn format_csv(rows: &[(&str, &ExtractionResult)]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;

    for (source, result) in rows {
        let fields = &result.fields;
        wtr.write_record([
            source.to_string(),
            fields.company.clone().unwrap_or_default(),
            fields.pattern_number.clone().unwrap_or_default(),
            fields.pattern_name.clone().unwrap_or_default(),
            fields.size_range.clone().unwrap_or_default(),
            fields.fabric_type.clone().unwrap_or_default(),
            fields.difficulty.map(|d| d.to_string()).unwrap_or_default(),
            format!("{:.2}", result.confidence),
            fields.missing_fields().join(" "),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

pub(crate) fn format_text(result: &ExtractionResult, show_text: bool) -> String {
    let fields = &result.fields;
    let mut output = String::new();

    let rows = [
        ("Company", fields.company.clone()),
        ("Pattern number", fields.pattern_number.clone()),
        ("Pattern name", fields.pattern_name.clone()),
        ("Sizes", fields.size_range.clone()),
        ("Fabric", fields.fabric_type.clone()),
        ("Difficulty", fields.difficulty.map(|d| d.to_string())),
    ];

    for (label, value) in rows {
        output.push_str(&format!(
            "{:<16}{}\n",
            format!("{}:", label),
            value.as_deref().unwrap_or("-")
        ));
    }

    output.push_str(&format!("{:<16}{:.2}\n", "Confidence:", result.confidence));

    if show_text {
        output.push('\n');
        output.push_str("Recognized text:\n");
        output.push_str(&format!("  {}\n", result.text));
    }

    output
}
