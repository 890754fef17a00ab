use serde::{Deserialize, Serialize};

use crate::core::types::DefinitionId;
use crate::utils::validation::digit_count;

fn default_minimum_character_length() -> usize {
    1
}

/// The value domain a definition accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DefinitionKind {
    /// A run of ASCII digits whose value lies in `[min, max]`
    Range {
        min: u64,
        max: u64,
        /// Shortest digit width the field may consume
        #[serde(default = "default_minimum_character_length")]
        minimum_character_length: usize,
    },
    /// The exact literal `key`
    Abbreviation { key: String },
}

/// One accepted value domain of a convention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub id: DefinitionId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub kind: DefinitionKind,
}

impl Definition {
    pub fn range(id: impl Into<String>, min: u64, max: u64, minimum_character_length: usize) -> Self {
        Self {
            id: DefinitionId::new(id),
            description: None,
            kind: DefinitionKind::Range {
                min,
                max,
                minimum_character_length,
            },
        }
    }

    pub fn abbreviation(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            id: DefinitionId::new(id),
            description: None,
            kind: DefinitionKind::Abbreviation { key: key.into() },
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Byte widths this definition may consume at the head of `rest`,
    /// shortest first. Every returned width is accepted by [`Self::accepts`].
    pub fn match_widths(&self, rest: &str) -> Vec<usize> {
        match &self.kind {
            DefinitionKind::Range {
                max,
                minimum_character_length,
                ..
            } => {
                let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
                let longest = digit_count(*max).min(digits);
                (*minimum_character_length..=longest)
                    .filter(|&width| width > 0 && self.accepts(&rest[..width]))
                    .collect()
            }
            DefinitionKind::Abbreviation { key } => {
                if !key.is_empty() && rest.starts_with(key.as_str()) {
                    vec![key.len()]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Check whether `text` as a whole satisfies this definition
    pub fn accepts(&self, text: &str) -> bool {
        match &self.kind {
            DefinitionKind::Range {
                min,
                max,
                minimum_character_length,
            } => {
                if text.len() < *minimum_character_length
                    || text.len() > digit_count(*max)
                    || !text.bytes().all(|b| b.is_ascii_digit())
                {
                    return false;
                }
                text.parse::<u64>()
                    .is_ok_and(|value| (*min..=*max).contains(&value))
            }
            DefinitionKind::Abbreviation { key } => !key.is_empty() && text == key,
        }
    }

    /// Representative values used when generating example tags
    pub fn samples(&self) -> Vec<String> {
        match &self.kind {
            DefinitionKind::Range {
                min,
                max,
                minimum_character_length,
            } => {
                let width = *minimum_character_length;
                let mut samples = vec![format!("{min:0width$}")];
                if max != min {
                    samples.push(format!("{max:0width$}"));
                }
                samples
            }
            DefinitionKind::Abbreviation { key } => vec![key.clone()],
        }
    }
}

impl std::fmt::Display for Definition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DefinitionKind::Range {
                min,
                max,
                minimum_character_length,
            } => write!(f, "{min}..={max} (min width {minimum_character_length})"),
            DefinitionKind::Abbreviation { key } => write!(f, "\"{key}\""),
        }
    }
}
