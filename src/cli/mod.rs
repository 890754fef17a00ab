//! Command-line interface for tag-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **validate**: Check tags against a naming system
//! - **examples**: Generate example tags that a system accepts
//! - **catalog**: List, show, or export systems from the catalog
//!
//! ## Usage
//!
//! ```text
//! # Validate a tag against the embedded reference system
//! tag-solver validate --system reference "ZZZZZZ 10-10-10 NNN"
//!
//! # Show which convention matched which part of the tag
//! tag-solver validate --system reference --explain "ZZZZZZ 10-AB-05 NNN"
//!
//! # Filter a list of candidates, one per line
//! cat tags.txt | tag-solver validate --system reference --only-valid -
//!
//! # JSON output for scripting
//! tag-solver validate --system compact 10ABC2 ABC2 --format json
//! ```

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::catalog::store::ConventionCatalog;
use crate::core::system::System;
use crate::core::types::SystemId;

pub mod catalog;
pub mod samples;
pub mod validate;

#[derive(Parser)]
#[command(name = "tag-solver")]
#[command(version)]
#[command(about = "Validate equipment tags against naming-convention catalogs")]
#[command(
    long_about = "tag-solver checks tag strings against positional naming conventions.\n\nEach system in the catalog is an ordered list of fields (numeric ranges or fixed abbreviations, some optional) separated by layout gaps. A tag is valid if some assignment of its characters to those fields satisfies every rule and uses the whole tag."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate tags against a naming system
    Validate(validate::ValidateArgs),

    /// Generate example tags accepted by a naming system
    Examples(samples::ExamplesArgs),

    /// Inspect the convention catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a custom catalog, or the embedded one when no path is given
pub(crate) fn load_catalog(path: Option<&Path>) -> anyhow::Result<ConventionCatalog> {
    match path {
        Some(path) => ConventionCatalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => Ok(ConventionCatalog::load_embedded()?),
    }
}

/// Look up a system, listing the known ids when it is missing
pub(crate) fn find_system<'c>(catalog: &'c ConventionCatalog, id: &str) -> anyhow::Result<&'c System> {
    catalog.get(&SystemId::new(id)).ok_or_else(|| {
        let known: Vec<String> = catalog.systems.iter().map(|s| s.id.to_string()).collect();
        anyhow::anyhow!(
            "System '{id}' not found in catalog (available: {})",
            known.join(", ")
        )
    })
}
