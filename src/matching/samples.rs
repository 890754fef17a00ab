//! Example tag generation from an expanded layout.
//!
//! Candidates are built from each field's sample values (abbreviation keys,
//! range bounds padded to the minimum width) with optional fields both
//! present and absent. Separators are always written. They are candidates only: run them through
//! [`ValidationEngine::validate`](crate::matching::engine::ValidationEngine::validate)
//! to keep the ones the layout actually accepts.

use std::collections::HashSet;

use crate::matching::expansion::{Layout, Segment};

/// Default number of example tags to generate
pub const DEFAULT_SAMPLE_LIMIT: usize = 20;

/// Generate up to `limit` distinct candidate tags, in generation order.
///
/// Earlier fields vary slowest. Separators are always written, including
/// next to an absent optional field. A candidate in which every field is
/// absent is not emitted.
pub fn generate(layout: &Layout<'_>, limit: usize) -> Vec<String> {
    let mut walk = Walk {
        layout,
        limit,
        tags: Vec::new(),
        seen: HashSet::new(),
    };
    if limit > 0 {
        walk.extend(0, &mut String::new(), false);
    }
    walk.tags
}

struct Walk<'a, 'l> {
    layout: &'a Layout<'l>,
    limit: usize,
    tags: Vec<String>,
    seen: HashSet<String>,
}

impl Walk<'_, '_> {
    fn done(&self) -> bool {
        self.tags.len() >= self.limit
    }

    fn extend(&mut self, idx: usize, text: &mut String, has_field: bool) {
        if self.done() {
            return;
        }
        let layout = self.layout;
        let Some(segment) = layout.segments.get(idx) else {
            if has_field && self.seen.insert(text.clone()) {
                self.tags.push(text.clone());
            }
            return;
        };

        let mark = text.len();
        match segment {
            Segment::Separator(entry) => {
                text.push_str(&entry.rule.canonical());
                self.extend(idx + 1, text, has_field);
            }
            Segment::Field(convention) => {
                for value in convention.definitions.iter().flat_map(|d| d.samples()) {
                    text.push_str(&value);
                    self.extend(idx + 1, text, true);
                    text.truncate(mark);
                    if self.done() {
                        return;
                    }
                }
                if convention.optional {
                    self.extend(idx + 1, text, has_field);
                }
            }
        }
        text.truncate(mark);
    }
}
