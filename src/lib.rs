//! # tag-solver
//!
//! A library for validating equipment tags against positional naming conventions.
//!
//! Plant and asset registers name equipment with structured tags such as
//! `ZZZZZZ 10-10-10 NNN`: a site code, a few numbered fields, a suffix, with
//! fixed separators in between. A naming system describes each field as one or
//! more accepted value domains (numeric ranges or fixed abbreviations), some
//! fields optional.
//!
//! Because ranges accept variable-width values and optional fields may be
//! absent, a greedy left-to-right scan is not enough: `tag-solver` performs a
//! backtracking search over field widths, definitions and optional skips.
//!
//! ## Features
//!
//! - **Variable-width ranges**: `[0,10]` with minimum width 1 accepts both `1` and `10`
//! - **Optional fields**: may be absent; the separators around them stay
//! - **Layout separators**: derived from gaps between field offsets
//! - **Match trails**: which convention and definition matched which substring
//! - **Fail-fast catalogs**: misconfigured systems are rejected at load time
//!
//! ## Example
//!
//! ```rust,no_run
//! use tag_solver::{ConventionCatalog, SystemId, ValidationEngine};
//!
//! // Load the embedded catalog of naming systems
//! let catalog = ConventionCatalog::load_embedded().unwrap();
//! let system = catalog.get(&SystemId::new("compact")).unwrap();
//!
//! let engine = ValidationEngine::new(system).unwrap();
//! let valid = engine.validate(&["10ABC2", "ABC2", "10"]).unwrap();
//! assert_eq!(valid, vec!["10ABC2", "10"]);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Convention catalog storage
//! - [`core`]: Core data types for definitions, conventions, and systems
//! - [`matching`]: Separator expansion, backtracking matcher and validation engine
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Catalog configuration validation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::catalog::store::ConventionCatalog;
pub use crate::core::convention::Convention;
pub use crate::core::definition::{Definition, DefinitionKind};
pub use crate::core::system::System;
pub use crate::core::types::*;
pub use crate::matching::engine::{validate, validate_one, MatchingConfig, TagReport, ValidationEngine};
pub use crate::matching::matcher::{MatchError, MatchRecord, MatchSource};
