use serde::{Deserialize, Serialize};

use crate::core::definition::Definition;
use crate::core::types::ConventionId;

/// A named, positioned field of a tag layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Convention {
    pub id: ConventionId,

    /// Human-readable field name
    pub name: String,

    /// Short keyword shown in layout diagrams
    pub keyword: String,

    /// Nominal start column in the canonical layout
    pub start: usize,

    /// Nominal end column (exclusive) in the canonical layout
    pub end: usize,

    /// Whether the field may be omitted entirely
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,

    /// Literal text of the gap preceding this field, when the layout
    /// has one and it is not one of the system's default separators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    /// Accepted value domains; any one may match
    pub definitions: Vec<Definition>,
}

impl Convention {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        keyword: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            id: ConventionId::new(id),
            name: name.into(),
            keyword: keyword.into(),
            start,
            end,
            optional: false,
            separator: None,
            definitions: Vec::new(),
        }
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    #[must_use]
    pub fn with_definition(mut self, definition: Definition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Nominal width of the field in the canonical layout
    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}
