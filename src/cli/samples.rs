use std::path::PathBuf;

use clap::Args;

use crate::cli::{find_system, load_catalog, OutputFormat};
use crate::matching::engine::ValidationEngine;
use crate::matching::samples::{generate, DEFAULT_SAMPLE_LIMIT};

#[derive(Args)]
pub struct ExamplesArgs {
    /// System ID from the catalog
    #[arg(short, long, required = true)]
    pub system: String,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Maximum number of examples to print
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_LIMIT)]
    pub max_examples: usize,
}

/// Execute examples subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the system is unknown.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ExamplesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let system = find_system(&catalog, &args.system)?;
    let engine = ValidationEngine::new(system)?;

    let candidates = generate(engine.layout(), args.max_examples);
    let examples = engine.validate(&candidates)?;

    if verbose {
        eprintln!(
            "Generated {} candidate(s), {} accepted by '{}'",
            candidates.len(),
            examples.len(),
            system.id
        );
    }

    match format {
        OutputFormat::Text | OutputFormat::Tsv => {
            for example in &examples {
                println!("{example}");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "system": system.id,
                "layout": system.layout_pattern(),
                "examples": examples,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
