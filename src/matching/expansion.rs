use tracing::{debug, warn};

use crate::core::convention::Convention;
use crate::core::system::System;
use crate::core::types::{ConventionId, SystemId};
use crate::utils::validation::{layout_gap, validate_system, ValidationError};

/// What a separator entry accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeparatorRule {
    /// Exactly this text
    Literal(String),
    /// `width` characters, each one of `chars`
    AnyOf { chars: Vec<char>, width: usize },
}

impl SeparatorRule {
    /// Byte length consumed at the head of `rest`, if the rule matches
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        match self {
            Self::Literal(literal) => rest.starts_with(literal.as_str()).then_some(literal.len()),
            Self::AnyOf { chars, width } => {
                let mut len = 0;
                let mut taken = rest.chars();
                for _ in 0..*width {
                    let c = taken.next().filter(|c| chars.contains(c))?;
                    len += c.len_utf8();
                }
                Some(len)
            }
        }
    }

    /// The text used when rendering the canonical layout
    pub fn canonical(&self) -> String {
        match self {
            Self::Literal(literal) => literal.clone(),
            Self::AnyOf { chars, width } => chars
                .first()
                .map(|c| std::iter::repeat(*c).take(*width).collect())
                .unwrap_or_default(),
        }
    }
}

/// A synthetic entry matching the gap before a convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorEntry {
    /// The convention this gap precedes
    pub before: ConventionId,
    pub rule: SeparatorRule,
}

/// One unit of an expanded layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Field(&'a Convention),
    Separator(SeparatorEntry),
}

/// A system's conventions with separator entries made explicit
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    pub system: &'a SystemId,
    pub segments: Vec<Segment<'a>>,
}

impl<'a> Layout<'a> {
    /// Number of field segments
    pub fn field_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Field(_)))
            .count()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Expand a system's conventions into a flat segment sequence, inserting a
/// separator entry wherever the canonical layout leaves a gap.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the system is misconfigured.
pub fn expand(system: &System) -> Result<Layout<'_>, ValidationError> {
    validate_system(system)?;

    if let Some(first) = system.conventions.first() {
        if first.start > 0 {
            warn!(
                system = %system.id,
                convention = %first.id,
                start = first.start,
                "Leading layout offset is ignored"
            );
        }
    }

    let mut segments = Vec::with_capacity(system.conventions.len() * 2);
    let mut previous: Option<&Convention> = None;

    for convention in &system.conventions {
        if let Some(prev) = previous {
            let gap = layout_gap(prev, convention)?;
            if gap > 0 {
                let rule = match &convention.separator {
                    Some(literal) => SeparatorRule::Literal(literal.clone()),
                    None => SeparatorRule::AnyOf {
                        chars: system.separators.clone(),
                        width: gap,
                    },
                };
                segments.push(Segment::Separator(SeparatorEntry {
                    before: convention.id.clone(),
                    rule,
                }));
            }
        }
        segments.push(Segment::Field(convention));
        previous = Some(convention);
    }

    debug!(
        system = %system.id,
        conventions = system.conventions.len(),
        segments = segments.len(),
        "Expanded layout"
    );

    Ok(Layout {
        system: &system.id,
        segments,
    })
}
