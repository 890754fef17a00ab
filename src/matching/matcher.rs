//! Backtracking search of a tag against an expanded layout.

use std::collections::HashSet;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::{ConventionId, DefinitionId, SystemId};
use crate::matching::expansion::{Layout, Segment};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Search for '{tag}' in system '{system}' exceeded {limit} steps; check the catalog for ambiguous conventions")]
    StepLimitExceeded {
        system: SystemId,
        tag: String,
        limit: usize,
    },

    #[error("Invalid system configuration: {0}")]
    Configuration(#[from] crate::utils::validation::ValidationError),
}

/// What produced a matched piece of a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchSource {
    Definition {
        convention: ConventionId,
        definition: DefinitionId,
    },
    Separator {
        before: ConventionId,
    },
}

/// A piece of a tag and the rule that accepted it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub source: MatchSource,

    /// The matched text
    pub text: String,

    /// Byte offset of the match in the tag
    pub offset: usize,
}

impl MatchRecord {
    pub fn convention(&self) -> &ConventionId {
        match &self.source {
            MatchSource::Definition { convention, .. } => convention,
            MatchSource::Separator { before } => before,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self.source, MatchSource::Separator { .. })
    }
}

struct TrailNode {
    record: MatchRecord,
    parent: Trail,
}

/// Persistent list of matches along one search branch. Pushing shares the
/// existing tail, so sibling branches never see each other's records.
#[derive(Clone, Default)]
pub struct Trail(Option<Rc<TrailNode>>);

impl Trail {
    pub fn new() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn push(&self, record: MatchRecord) -> Self {
        Self(Some(Rc::new(TrailNode {
            record,
            parent: self.clone(),
        })))
    }

    pub fn len(&self) -> usize {
        let mut len = 0;
        let mut node = self.0.as_deref();
        while let Some(n) = node {
            len += 1;
            node = n.parent.0.as_deref();
        }
        len
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Records in tag order
    pub fn to_vec(&self) -> Vec<MatchRecord> {
        let mut records = Vec::new();
        let mut node = self.0.as_deref();
        while let Some(n) = node {
            records.push(n.record.clone());
            node = n.parent.0.as_deref();
        }
        records.reverse();
        records
    }
}

/// Search limits
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    pub max_steps: usize,
    pub memoize: bool,
}

/// Search state: position in the text and segment index
type State = (usize, usize);

/// Depth-first matcher for a single tag
pub struct Matcher<'l, 't> {
    layout: &'l Layout<'l>,
    text: &'t str,
    limits: SearchLimits,
    steps: usize,
    dead: HashSet<State>,
}

impl<'l, 't> Matcher<'l, 't> {
    pub fn new(layout: &'l Layout<'l>, text: &'t str, limits: SearchLimits) -> Self {
        Self {
            layout,
            text,
            limits,
            steps: 0,
            dead: HashSet::new(),
        }
    }

    /// Steps taken so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Run the search. Returns the match trail of the first successful
    /// branch, or `None` if the tag does not satisfy the layout.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::StepLimitExceeded`] if the search runs away.
    pub fn run(&mut self) -> Result<Option<Vec<MatchRecord>>, MatchError> {
        Ok(self
            .search((0, 0), &Trail::new())?
            .map(|trail| trail.to_vec()))
    }

    fn tick(&mut self) -> Result<(), MatchError> {
        self.steps += 1;
        if self.steps > self.limits.max_steps {
            return Err(MatchError::StepLimitExceeded {
                system: self.layout.system.clone(),
                tag: self.text.to_string(),
                limit: self.limits.max_steps,
            });
        }
        Ok(())
    }

    fn search(&mut self, state: State, trail: &Trail) -> Result<Option<Trail>, MatchError> {
        self.tick()?;

        let layout = self.layout;
        let text = self.text;
        let (pos, idx) = state;
        let Some(segment) = layout.segments.get(idx) else {
            return Ok((pos == text.len()).then(|| trail.clone()));
        };

        if self.limits.memoize && self.dead.contains(&state) {
            return Ok(None);
        }

        let rest = &text[pos..];
        let found = match segment {
            Segment::Field(convention) => {
                let mut found = None;

                'definitions: for definition in &convention.definitions {
                    for width in definition.match_widths(rest) {
                        let record = MatchRecord {
                            source: MatchSource::Definition {
                                convention: convention.id.clone(),
                                definition: definition.id.clone(),
                            },
                            text: rest[..width].to_string(),
                            offset: pos,
                        };
                        if let Some(done) = self.search((pos + width, idx + 1), &trail.push(record))? {
                            found = Some(done);
                            break 'definitions;
                        }
                    }
                }

                if found.is_none() && convention.optional {
                    found = self.search((pos, idx + 1), trail)?;
                }
                found
            }
            // Separators are never skipped, even next to an absent optional field
            Segment::Separator(entry) => match entry.rule.match_len(rest) {
                Some(len) => {
                    let record = MatchRecord {
                        source: MatchSource::Separator {
                            before: entry.before.clone(),
                        },
                        text: rest[..len].to_string(),
                        offset: pos,
                    };
                    self.search((pos + len, idx + 1), &trail.push(record))?
                }
                None => None,
            },
        };

        if found.is_none() && self.limits.memoize {
            self.dead.insert(state);
        }
        Ok(found)
    }
}
