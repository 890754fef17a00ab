use std::io::BufRead;
use std::path::PathBuf;

use clap::Args;

use crate::cli::{find_system, load_catalog, OutputFormat};
use crate::core::system::System;
use crate::matching::engine::{MatchingConfig, TagReport, ValidationEngine, DEFAULT_MAX_STEPS};
use crate::matching::matcher::MatchSource;

#[derive(Args)]
pub struct ValidateArgs {
    /// Tags to validate. Use '-' to read one tag per line from stdin
    #[arg(required = true)]
    pub tags: Vec<String>,

    /// System ID from the catalog
    #[arg(short, long, required = true)]
    pub system: String,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Show which convention matched each part of a valid tag
    #[arg(long)]
    pub explain: bool,

    /// Print only the valid tags
    #[arg(long)]
    pub only_valid: bool,

    /// Abort a tag's search after this many steps
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,
}

/// Execute validate subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the system is unknown,
/// stdin cannot be read, or a search exceeds its step budget.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ValidateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let system = find_system(&catalog, &args.system)?;
    let tags = collect_tags(&args.tags)?;

    if verbose {
        eprintln!(
            "Validating {} tag(s) against '{}' ({})",
            tags.len(),
            system.id,
            system.layout_pattern()
        );
    }

    let config = MatchingConfig {
        max_steps: args.max_steps,
        ..MatchingConfig::default()
    };
    let engine = ValidationEngine::with_config(system, config)?;
    let mut reports = engine.report(&tags)?;
    if args.only_valid {
        reports.retain(|r| r.valid);
    }

    match format {
        OutputFormat::Text => print_text_reports(system, &reports, &args),
        OutputFormat::Json => print_json_reports(system, &reports, args.explain)?,
        OutputFormat::Tsv => print_tsv_reports(&reports),
    }

    Ok(())
}

/// Expand '-' into the lines of stdin, skipping blank lines
fn collect_tags(args: &[String]) -> anyhow::Result<Vec<String>> {
    let mut tags = Vec::new();
    for arg in args {
        if arg == "-" {
            for line in std::io::stdin().lock().lines() {
                let line = line?;
                let tag = line.trim_end_matches('\r');
                if !tag.trim().is_empty() {
                    tags.push(tag.to_string());
                }
            }
        } else {
            tags.push(arg.clone());
        }
    }
    Ok(tags)
}

fn print_text_reports(system: &System, reports: &[TagReport], args: &ValidateArgs) {
    let width = reports.iter().map(|r| r.tag.len()).max().unwrap_or(0);

    for report in reports {
        if args.only_valid {
            println!("{}", report.tag);
        } else {
            let status = if report.valid { "valid" } else { "invalid" };
            println!("{:<width$}  {status}", report.tag);
        }

        if args.explain && report.valid {
            for record in &report.matches {
                match &record.source {
                    MatchSource::Definition {
                        convention,
                        definition,
                    } => {
                        let name = system
                            .convention(convention)
                            .map_or(convention.0.as_str(), |c| c.name.as_str());
                        println!(
                            "    {:>3}  {:<12} {:<10} {definition}",
                            record.offset,
                            name,
                            format!("\"{}\"", record.text)
                        );
                    }
                    MatchSource::Separator { .. } => {
                        println!(
                            "    {:>3}  {:<12} {}",
                            record.offset,
                            "(separator)",
                            format!("\"{}\"", record.text)
                        );
                    }
                }
            }
        }
    }
}

fn print_json_reports(system: &System, reports: &[TagReport], explain: bool) -> anyhow::Result<()> {
    let results: Vec<serde_json::Value> = reports
        .iter()
        .map(|report| {
            if explain {
                serde_json::to_value(report)
            } else {
                Ok(serde_json::json!({
                    "tag": report.tag,
                    "valid": report.valid,
                }))
            }
        })
        .collect::<Result<_, _>>()?;

    let output = serde_json::json!({
        "system": system.id,
        "layout": system.layout_pattern(),
        "results": results,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_reports(reports: &[TagReport]) {
    println!("tag\tvalid");
    for report in reports {
        println!("{}\t{}", report.tag, report.valid);
    }
}
