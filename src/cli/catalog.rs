use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::{find_system, load_catalog, OutputFormat};
use crate::core::definition::DefinitionKind;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all systems in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show the conventions of a specific system
    Show {
        /// System ID
        #[arg(required = true)]
        id: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the system is unknown,
/// or the export file cannot be written.
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog } => run_list(catalog, format, verbose),
        CatalogCommands::Show { id, catalog } => run_show(&id, catalog, format),
        CatalogCommands::Export { output, catalog } => run_export(output, catalog),
    }
}

fn run_list(catalog_path: Option<PathBuf>, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    if verbose {
        eprintln!("Loaded catalog with {} systems", catalog.len());
    }

    match format {
        OutputFormat::Text => {
            let id_width = catalog
                .systems
                .iter()
                .map(|s| s.id.0.len())
                .max()
                .unwrap_or(2)
                .max(2);
            let name_width = catalog
                .systems
                .iter()
                .map(|s| s.name.len().min(35))
                .max()
                .unwrap_or(4)
                .max(4);

            println!("Convention Catalog ({} systems)\n", catalog.len());
            println!(
                "{:<id_w$} {:<name_w$} {:>6}  Layout",
                "ID",
                "Name",
                "Fields",
                id_w = id_width,
                name_w = name_width,
            );
            println!("{}", "-".repeat(id_width + name_width + 30));

            for s in &catalog.systems {
                println!(
                    "{:<id_w$} {:<name_w$} {:>6}  {}",
                    s.id.0,
                    truncate(&s.name, name_width),
                    s.conventions.len(),
                    s.layout_pattern(),
                    id_w = id_width,
                    name_w = name_width,
                );
                if verbose {
                    if let Some(desc) = &s.description {
                        println!("  └─ {desc}");
                    }
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = catalog
                .systems
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "id": s.id,
                        "name": s.name,
                        "description": s.description,
                        "layout": s.layout_pattern(),
                        "convention_count": s.conventions.len(),
                        "optional_count": s.conventions.iter().filter(|c| c.optional).count(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("id\tname\tconvention_count\tlayout");
            for s in &catalog.systems {
                println!(
                    "{}\t{}\t{}\t{}",
                    s.id,
                    s.name,
                    s.conventions.len(),
                    s.layout_pattern()
                );
            }
        }
    }

    Ok(())
}

fn run_show(id: &str, catalog_path: Option<PathBuf>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;
    let system = find_system(&catalog, id)?;

    match format {
        OutputFormat::Text => {
            println!("System: {}\n", system.name);
            println!("ID:          {}", system.id);
            println!("Layout:      {}", system.layout_pattern());
            println!("Conventions: {}", system.conventions.len());
            let separators: String = system.separators.iter().map(|c| format!("'{c}' ")).collect();
            println!("Separators:  {}", separators.trim_end());

            if let Some(desc) = &system.description {
                println!("\nDescription: {desc}");
            }

            println!("\nConventions:");
            println!(
                "{:<12} {:<8} {:>5} {:>5} {:<8} Definitions",
                "ID", "Keyword", "Start", "End", "Optional"
            );
            println!("{}", "-".repeat(80));
            for convention in &system.conventions {
                let definitions: Vec<String> = convention
                    .definitions
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                println!(
                    "{:<12} {:<8} {:>5} {:>5} {:<8} {}",
                    convention.id.0,
                    convention.keyword,
                    convention.start,
                    convention.end,
                    if convention.optional { "yes" } else { "no" },
                    definitions.join(" | ")
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(system)?);
        }
        OutputFormat::Tsv => {
            println!("convention\tkeyword\tstart\tend\toptional\tdefinition\ttype\tvalue");
            for convention in &system.conventions {
                for definition in &convention.definitions {
                    let (kind, value) = match &definition.kind {
                        DefinitionKind::Range { min, max, .. } => ("range", format!("{min}-{max}")),
                        DefinitionKind::Abbreviation { key } => ("abbreviation", key.clone()),
                    };
                    println!(
                        "{}\t{}\t{}\t{}\t{}\t{}\t{kind}\t{value}",
                        convention.id,
                        convention.keyword,
                        convention.start,
                        convention.end,
                        convention.optional,
                        definition.id,
                    );
                }
            }
        }
    }

    Ok(())
}

fn run_export(output: PathBuf, catalog_path: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    let json = catalog.to_json()?;
    std::fs::write(&output, json)?;

    println!("Exported {} systems to {}", catalog.len(), output.display());

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
