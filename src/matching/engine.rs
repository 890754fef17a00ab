use serde::Serialize;
use tracing::debug;

use crate::core::system::System;
use crate::matching::expansion::{expand, Layout};
use crate::matching::matcher::{MatchError, MatchRecord, Matcher, SearchLimits};

/// Default step budget for a single tag
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Configuration for the validation engine
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Abort a tag's search after this many steps
    pub max_steps: usize,
    /// Remember failed search states within one tag
    pub memoize: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            memoize: true,
        }
    }
}

/// Outcome of validating one tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagReport {
    pub tag: String,
    pub valid: bool,

    /// Which rule matched which piece of the tag, for valid tags
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<MatchRecord>,
}

/// Validates tags against one system
pub struct ValidationEngine<'a> {
    system: &'a System,
    layout: Layout<'a>,
    config: MatchingConfig,
}

impl<'a> ValidationEngine<'a> {
    /// Create an engine with default configuration
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Configuration`] if the system is misconfigured.
    pub fn new(system: &'a System) -> Result<Self, MatchError> {
        Self::with_config(system, MatchingConfig::default())
    }

    /// Create an engine with custom configuration
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Configuration`] if the system is misconfigured.
    pub fn with_config(system: &'a System, config: MatchingConfig) -> Result<Self, MatchError> {
        let layout = expand(system)?;
        Ok(Self {
            system,
            layout,
            config,
        })
    }

    pub fn system(&self) -> &System {
        self.system
    }

    pub fn layout(&self) -> &Layout<'a> {
        &self.layout
    }

    /// Match trail for `tag`, or `None` if it is not valid
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::StepLimitExceeded`] if the search runs away.
    pub fn explain(&self, tag: &str) -> Result<Option<Vec<MatchRecord>>, MatchError> {
        let limits = SearchLimits {
            max_steps: self.config.max_steps,
            memoize: self.config.memoize,
        };
        let mut matcher = Matcher::new(&self.layout, tag, limits);
        let result = matcher.run()?;
        debug!(
            system = %self.system.id,
            tag,
            valid = result.is_some(),
            steps = matcher.steps(),
            "Validated tag"
        );
        Ok(result)
    }

    /// Check a single tag
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::StepLimitExceeded`] if the search runs away.
    pub fn is_valid(&self, tag: &str) -> Result<bool, MatchError> {
        Ok(self.explain(tag)?.is_some())
    }

    /// The valid subset of `candidates`, in input order
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::StepLimitExceeded`] if any search runs away.
    pub fn validate<S: AsRef<str>>(&self, candidates: &[S]) -> Result<Vec<String>, MatchError> {
        let mut valid = Vec::new();
        for candidate in candidates {
            let tag = candidate.as_ref();
            if self.is_valid(tag)? {
                valid.push(tag.to_string());
            }
        }
        Ok(valid)
    }

    /// One report per candidate, in input order
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::StepLimitExceeded`] if any search runs away.
    pub fn report<S: AsRef<str>>(&self, candidates: &[S]) -> Result<Vec<TagReport>, MatchError> {
        candidates
            .iter()
            .map(|candidate| -> Result<TagReport, MatchError> {
                let tag = candidate.as_ref();
                let matches = self.explain(tag)?;
                Ok(TagReport {
                    tag: tag.to_string(),
                    valid: matches.is_some(),
                    matches: matches.unwrap_or_default(),
                })
            })
            .collect()
    }
}

/// Valid subset of `candidates` for `system`, using default configuration
///
/// # Errors
///
/// Returns a [`MatchError`] if the system is misconfigured or a search runs away.
pub fn validate<S: AsRef<str>>(system: &System, candidates: &[S]) -> Result<Vec<String>, MatchError> {
    ValidationEngine::new(system)?.validate(candidates)
}

/// Check one tag against `system`, using default configuration
///
/// # Errors
///
/// Returns a [`MatchError`] if the system is misconfigured or the search runs away.
pub fn validate_one(system: &System, tag: &str) -> Result<bool, MatchError> {
    ValidationEngine::new(system)?.is_valid(tag)
}
