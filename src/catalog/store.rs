use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::core::system::System;
use crate::core::types::SystemId;
use crate::utils::validation::{validate_system, ValidationError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid system in catalog: {0}")]
    InvalidSystem(#[from] ValidationError),

    #[error("System '{0}' is defined more than once")]
    DuplicateSystem(SystemId),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub systems: Vec<System>,
}

/// The convention catalog: validated systems indexed by id
#[derive(Debug)]
pub struct ConventionCatalog {
    /// All known systems, in catalog order
    pub systems: Vec<System>,

    /// Index: system ID -> index in systems vec
    id_to_index: HashMap<SystemId, usize>,
}

impl ConventionCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            systems: Vec::new(),
            id_to_index: HashMap::new(),
        }
    }

    /// Load the embedded default catalog
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the embedded catalog is invalid.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/tag_systems.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the file cannot be read, parsed or validated.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the JSON is malformed or a system is invalid.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "Catalog version mismatch"
            );
        }

        let mut catalog = Self::new();
        for system in data.systems {
            catalog.add_system(system)?;
        }

        Ok(catalog)
    }

    /// Validate and add a system to the catalog
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidSystem`] if the system is misconfigured, or
    /// [`CatalogError::DuplicateSystem`] if its id is already present.
    pub fn add_system(&mut self, system: System) -> Result<(), CatalogError> {
        validate_system(&system)?;
        if self.id_to_index.contains_key(&system.id) {
            return Err(CatalogError::DuplicateSystem(system.id));
        }

        self.id_to_index.insert(system.id.clone(), self.systems.len());
        self.systems.push(system);
        Ok(())
    }

    /// Get a system by ID
    pub fn get(&self, id: &SystemId) -> Option<&System> {
        self.id_to_index.get(id).map(|&idx| &self.systems[idx])
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ParseError`] if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            systems: self.systems.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of systems in catalog
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

impl Default for ConventionCatalog {
    fn default() -> Self {
        Self::new()
    }
}
