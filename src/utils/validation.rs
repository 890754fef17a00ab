//! Centralized validation and helper functions.

use std::collections::HashSet;

use crate::core::convention::Convention;
use crate::core::definition::{Definition, DefinitionKind};
use crate::core::system::System;

/// Maximum number of conventions allowed in a single system
pub const MAX_CONVENTIONS: usize = 256;

/// Number of decimal digits needed to print `value`.
///
/// # Examples
///
/// ```
/// use tag_solver::utils::validation::digit_count;
///
/// assert_eq!(digit_count(0), 1);
/// assert_eq!(digit_count(9), 1);
/// assert_eq!(digit_count(10), 2);
/// assert_eq!(digit_count(999), 3);
/// ```
#[must_use]
pub fn digit_count(value: u64) -> usize {
    let mut digits = 1;
    let mut rest = value / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    digits
}

/// Catalog configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("System '{0}' has no conventions")]
    EmptySystem(String),
    #[error("System '{system}' has too many conventions: {count} exceeds maximum of {MAX_CONVENTIONS}")]
    TooManyConventions { system: String, count: usize },
    #[error("Convention '{0}' is defined more than once")]
    DuplicateConvention(String),
    #[error("Convention '{0}' has no definitions")]
    EmptyDefinitions(String),
    #[error("Convention '{convention}' has start {start} >= end {end}")]
    InvalidSpan {
        convention: String,
        start: usize,
        end: usize,
    },
    #[error("Convention '{next}' starts at {start}, before '{previous}' ends at {end}")]
    OverlappingConventions {
        previous: String,
        next: String,
        end: usize,
        start: usize,
    },
    #[error("Definition '{definition}' of convention '{convention}' has min {min} > max {max}")]
    InvertedRange {
        convention: String,
        definition: String,
        min: u64,
        max: u64,
    },
    #[error("Definition '{definition}' of convention '{convention}' has minimum width {width}, expected 1..={max_width}")]
    InvalidMinimumWidth {
        convention: String,
        definition: String,
        width: usize,
        max_width: usize,
    },
    #[error("Definition '{definition}' of convention '{convention}' has an empty abbreviation")]
    EmptyAbbreviation {
        convention: String,
        definition: String,
    },
    #[error("Separator before '{convention}' is {found} characters wide but the layout gap is {gap}")]
    SeparatorWidthMismatch {
        convention: String,
        gap: usize,
        found: usize,
    },
    #[error("Layout gap before '{0}' needs a separator but the system defines none")]
    MissingSeparator(String),
    #[error("Convention '{0}' is the first field and cannot pin a separator")]
    LeadingSeparator(String),
}

/// Validate a whole system before it is used for matching.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found: an empty system, duplicate
/// convention ids, a bad field span or definition, overlapping fields, a
/// separator that does not fit its layout gap, or a separator pinned on the
/// first field.
pub fn validate_system(system: &System) -> Result<(), ValidationError> {
    if system.conventions.is_empty() {
        return Err(ValidationError::EmptySystem(system.id.to_string()));
    }
    if system.conventions.len() > MAX_CONVENTIONS {
        return Err(ValidationError::TooManyConventions {
            system: system.id.to_string(),
            count: system.conventions.len(),
        });
    }

    let mut seen = HashSet::new();
    for convention in &system.conventions {
        if !seen.insert(&convention.id) {
            return Err(ValidationError::DuplicateConvention(
                convention.id.to_string(),
            ));
        }
        validate_convention(convention)?;
    }

    if let Some(first) = system.conventions.first() {
        if first.separator.is_some() {
            return Err(ValidationError::LeadingSeparator(first.id.to_string()));
        }
    }

    for pair in system.conventions.windows(2) {
        validate_gap(system, &pair[0], &pair[1])?;
    }

    Ok(())
}

/// Validate a single convention and its definitions.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyDefinitions`], [`ValidationError::InvalidSpan`]
/// or a definition error.
pub fn validate_convention(convention: &Convention) -> Result<(), ValidationError> {
    if convention.definitions.is_empty() {
        return Err(ValidationError::EmptyDefinitions(
            convention.id.to_string(),
        ));
    }
    if convention.start >= convention.end {
        return Err(ValidationError::InvalidSpan {
            convention: convention.id.to_string(),
            start: convention.start,
            end: convention.end,
        });
    }
    for definition in &convention.definitions {
        validate_definition(convention, definition)?;
    }
    Ok(())
}

fn validate_definition(
    convention: &Convention,
    definition: &Definition,
) -> Result<(), ValidationError> {
    match &definition.kind {
        DefinitionKind::Range {
            min,
            max,
            minimum_character_length,
        } => {
            if min > max {
                return Err(ValidationError::InvertedRange {
                    convention: convention.id.to_string(),
                    definition: definition.id.to_string(),
                    min: *min,
                    max: *max,
                });
            }
            let max_width = digit_count(*max);
            if *minimum_character_length == 0 || *minimum_character_length > max_width {
                return Err(ValidationError::InvalidMinimumWidth {
                    convention: convention.id.to_string(),
                    definition: definition.id.to_string(),
                    width: *minimum_character_length,
                    max_width,
                });
            }
        }
        DefinitionKind::Abbreviation { key } => {
            if key.is_empty() {
                return Err(ValidationError::EmptyAbbreviation {
                    convention: convention.id.to_string(),
                    definition: definition.id.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Width of the layout gap between two consecutive conventions.
///
/// # Errors
///
/// Returns [`ValidationError::OverlappingConventions`] if `next` starts
/// before `previous` ends.
pub fn layout_gap(previous: &Convention, next: &Convention) -> Result<usize, ValidationError> {
    next.start
        .checked_sub(previous.end)
        .ok_or_else(|| ValidationError::OverlappingConventions {
            previous: previous.id.to_string(),
            next: next.id.to_string(),
            end: previous.end,
            start: next.start,
        })
}

fn validate_gap(
    system: &System,
    previous: &Convention,
    next: &Convention,
) -> Result<(), ValidationError> {
    let gap = layout_gap(previous, next)?;

    match &next.separator {
        Some(literal) => {
            let found = literal.chars().count();
            if found != gap {
                return Err(ValidationError::SeparatorWidthMismatch {
                    convention: next.id.to_string(),
                    gap,
                    found,
                });
            }
        }
        None => {
            if gap > 0 && system.separators.is_empty() {
                return Err(ValidationError::MissingSeparator(next.id.to_string()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::definition::Definition;

    fn field(id: &str, start: usize, end: usize) -> Convention {
        Convention::new(id, id, id.to_uppercase(), start, end)
            .with_definition(Definition::range(format!("{id}1"), 0, 99, 2))
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(99), 2);
        assert_eq!(digit_count(100), 3);
        assert_eq!(digit_count(u64::MAX), 20);
    }

    #[test]
    fn test_valid_system() {
        let system = System::new("s", "S")
            .with_convention(field("a", 0, 2))
            .with_convention(field("b", 3, 5));
        assert!(validate_system(&system).is_ok());
    }

    #[test]
    fn test_empty_system() {
        let system = System::new("s", "S");
        assert_eq!(
            validate_system(&system),
            Err(ValidationError::EmptySystem("s".to_string()))
        );
    }

    #[test]
    fn test_empty_definitions() {
        let system = System::new("s", "S").with_convention(Convention::new("a", "A", "A", 0, 2));
        assert!(matches!(
            validate_system(&system),
            Err(ValidationError::EmptyDefinitions(id)) if id == "a"
        ));
    }

    #[test]
    fn test_invalid_span() {
        let system = System::new("s", "S").with_convention(field("a", 2, 2));
        assert!(matches!(
            validate_system(&system),
            Err(ValidationError::InvalidSpan { start: 2, end: 2, .. })
        ));
    }

    #[test]
    fn test_inverted_range() {
        let convention =
            Convention::new("a", "A", "A", 0, 2).with_definition(Definition::range("r", 10, 1, 1));
        assert!(matches!(
            validate_convention(&convention),
            Err(ValidationError::InvertedRange { min: 10, max: 1, .. })
        ));
    }

    #[test]
    fn test_invalid_minimum_width() {
        let zero =
            Convention::new("a", "A", "A", 0, 2).with_definition(Definition::range("r", 0, 10, 0));
        assert!(matches!(
            validate_convention(&zero),
            Err(ValidationError::InvalidMinimumWidth { width: 0, .. })
        ));

        let too_wide =
            Convention::new("a", "A", "A", 0, 2).with_definition(Definition::range("r", 0, 10, 3));
        assert!(matches!(
            validate_convention(&too_wide),
            Err(ValidationError::InvalidMinimumWidth {
                width: 3,
                max_width: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_abbreviation() {
        let convention =
            Convention::new("a", "A", "A", 0, 2).with_definition(Definition::abbreviation("k", ""));
        assert!(matches!(
            validate_convention(&convention),
            Err(ValidationError::EmptyAbbreviation { .. })
        ));
    }

    #[test]
    fn test_duplicate_convention() {
        let system = System::new("s", "S")
            .with_convention(field("a", 0, 2))
            .with_convention(field("a", 2, 4));
        assert_eq!(
            validate_system(&system),
            Err(ValidationError::DuplicateConvention("a".to_string()))
        );
    }

    #[test]
    fn test_overlapping_conventions() {
        let system = System::new("s", "S")
            .with_convention(field("a", 0, 3))
            .with_convention(field("b", 2, 4));
        assert!(matches!(
            validate_system(&system),
            Err(ValidationError::OverlappingConventions { end: 3, start: 2, .. })
        ));
    }

    #[test]
    fn test_separator_width_mismatch() {
        let system = System::new("s", "S")
            .with_convention(field("a", 0, 2))
            .with_convention(field("b", 3, 5).with_separator("--"));
        assert!(matches!(
            validate_system(&system),
            Err(ValidationError::SeparatorWidthMismatch { gap: 1, found: 2, .. })
        ));

        // A pinned separator on a back-to-back field is also a mismatch
        let system = System::new("s", "S")
            .with_convention(field("a", 0, 2))
            .with_convention(field("b", 2, 4).with_separator("-"));
        assert!(validate_system(&system).is_err());
    }

    #[test]
    fn test_missing_separator() {
        let system = System::new("s", "S")
            .with_separators(Vec::<char>::new())
            .with_convention(field("a", 0, 2))
            .with_convention(field("b", 3, 5));
        assert_eq!(
            validate_system(&system),
            Err(ValidationError::MissingSeparator("b".to_string()))
        );
    }

    #[test]
    fn test_leading_separator_rejected() {
        let system = System::new("s", "S")
            .with_convention(field("a", 0, 2).with_separator("-"))
            .with_convention(field("b", 3, 5));
        assert_eq!(
            validate_system(&system),
            Err(ValidationError::LeadingSeparator("a".to_string()))
        );
    }
}
