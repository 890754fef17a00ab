//! Core data types for tag naming conventions.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Definition`](definition::Definition): A value domain a field accepts (numeric range or abbreviation)
//! - [`Convention`](convention::Convention): A named, positioned field of a tag layout
//! - [`System`](system::System): An ordered list of conventions forming one naming system
//! - [`SystemId`](types::SystemId), [`ConventionId`](types::ConventionId), [`DefinitionId`](types::DefinitionId): Identifiers
//!
//! ## Layout Offsets
//!
//! A convention's `start`/`end` describe its columns in the canonical layout.
//! They are only used to find the gaps between consecutive fields, which must
//! be filled by separator characters:
//!
//! | Field | start | end | Example |
//! |-------|-------|-----|---------|
//! | Site  | 0     | 6   | ZZZZZZ  |
//! | Area  | 7     | 9   | 10      |
//! | Unit  | 10    | 12  | 10      |
//!
//! Matching itself is positional over the live text, since ranges may consume
//! fewer characters than their nominal width and optional fields may be absent.

pub mod convention;
pub mod definition;
pub mod system;
pub mod types;
