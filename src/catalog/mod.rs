//! Convention catalog storage.
//!
//! The catalog contains tag naming systems, each an ordered list of conventions
//! with their accepted definitions. An embedded catalog is compiled into the
//! binary, but custom catalogs can also be loaded from JSON files. Every system
//! is validated when it enters a catalog, so a misconfigured system fails at
//! load time rather than rejecting every tag later.
//!
//! ## Embedded Catalog
//!
//! The default catalog includes:
//!
//! - **reference**: `ZZZZZZ 10-10-10 NNN` style equipment tags
//! - **compact**: `10ABC2` style tags with back-to-back optional fields
//!
//! ## Example
//!
//! ```rust,no_run
//! use tag_solver::ConventionCatalog;
//! use tag_solver::core::types::SystemId;
//!
//! // Load embedded catalog
//! let catalog = ConventionCatalog::load_embedded().unwrap();
//!
//! // List all systems
//! for system in &catalog.systems {
//!     println!("{}: {}", system.id, system.layout_pattern());
//! }
//!
//! // Get a specific system
//! let reference = catalog.get(&SystemId::new("reference"));
//! ```
//!
//! ## Custom Catalogs
//!
//! ```rust,no_run
//! use tag_solver::ConventionCatalog;
//! use std::path::Path;
//!
//! // Export to JSON
//! let catalog = ConventionCatalog::load_embedded().unwrap();
//! let json = catalog.to_json().unwrap();
//!
//! // Load from custom file
//! let custom = ConventionCatalog::load_from_file(Path::new("my_catalog.json")).unwrap();
//! ```

pub mod store;
