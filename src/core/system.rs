use serde::{Deserialize, Serialize};

use crate::core::convention::Convention;
use crate::core::types::{ConventionId, SystemId};

/// Separator characters accepted when a convention does not pin its own
pub const DEFAULT_SEPARATORS: [char; 2] = ['-', ' '];

fn default_separators() -> Vec<char> {
    DEFAULT_SEPARATORS.to_vec()
}

/// A tag naming system: an ordered list of conventions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    pub id: SystemId,

    /// Human-readable display name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Characters accepted in a layout gap
    #[serde(default = "default_separators")]
    pub separators: Vec<char>,

    /// Conventions in tag order
    pub conventions: Vec<Convention>,
}

impl System {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: SystemId::new(id),
            name: name.into(),
            description: None,
            separators: default_separators(),
            conventions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_separators(mut self, separators: impl IntoIterator<Item = char>) -> Self {
        self.separators = separators.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_convention(mut self, convention: Convention) -> Self {
        self.conventions.push(convention);
        self
    }

    pub fn convention(&self, id: &ConventionId) -> Option<&Convention> {
        self.conventions.iter().find(|c| &c.id == id)
    }

    /// Nominal tag length of the canonical layout
    pub fn canonical_length(&self) -> usize {
        self.conventions.iter().map(|c| c.end).max().unwrap_or(0)
    }

    /// Render the canonical layout, e.g. `SITE AREA-UNIT-SEQ SFX`
    pub fn layout_pattern(&self) -> String {
        let mut pattern = String::new();
        let mut previous_end: Option<usize> = None;
        for convention in &self.conventions {
            if let Some(end) = previous_end {
                let gap = convention.start.saturating_sub(end);
                if gap > 0 {
                    match &convention.separator {
                        Some(literal) => pattern.push_str(literal),
                        None => {
                            let c = self.separators.first().copied().unwrap_or('-');
                            pattern.extend(std::iter::repeat(c).take(gap));
                        }
                    }
                }
            }
            if convention.optional {
                pattern.push('[');
                pattern.push_str(&convention.keyword);
                pattern.push(']');
            } else {
                pattern.push_str(&convention.keyword);
            }
            previous_end = Some(convention.end);
        }
        pattern
    }
}
