//! Tag validation: separator expansion, backtracking search and orchestration.
//!
//! This module provides the core matching functionality:
//!
//! - [`expand`](expansion::expand): Turn a system's conventions into a flat segment
//!   sequence with explicit separator entries
//! - [`Matcher`](matcher::Matcher): Depth-first search of one tag over that sequence
//! - [`ValidationEngine`]: Main entry point for validating one or many tags
//! - [`generate`](samples::generate): Build example candidate tags from a layout
//!
//! ## Matching Algorithm
//!
//! For each field in order, every definition is tried, and for each definition
//! every width it admits at the current position (shortest first). A match
//! recurses on the rest of the text and the rest of the layout; a failed branch
//! falls through to the next width, then the next definition, then (for optional
//! fields) to skipping the field. A tag is valid only if the layout and the text
//! are exhausted together.
//!
//! Separator entries are never optional. When an optional field is absent the
//! separators on both sides of it remain, so `NN-[AB]-CD` accepts `10--CD` and
//! `NN-[AB]CD` accepts `10-CD` but never `10CD`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tag_solver::{ConventionCatalog, SystemId, ValidationEngine};
//!
//! let catalog = ConventionCatalog::load_embedded().unwrap();
//! let system = catalog.get(&SystemId::new("reference")).unwrap();
//!
//! let engine = ValidationEngine::new(system).unwrap();
//! assert!(engine.is_valid("ZZZZZZ 10-10-10 NNN").unwrap());
//! assert!(!engine.is_valid("ZZZZZZ 101010 NNN").unwrap());
//!
//! if let Some(matches) = engine.explain("ZZZZZZ 10-AB-05 NNN").unwrap() {
//!     for m in &matches {
//!         println!("{} <- {:?}", m.text, m.source);
//!     }
//! }
//! ```

pub mod engine;
pub mod expansion;
pub mod matcher;
pub mod samples;

pub use engine::{validate, validate_one, MatchingConfig, TagReport, ValidationEngine};
pub use matcher::{MatchError, MatchRecord, MatchSource};
