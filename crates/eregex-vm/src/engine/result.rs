//! Match spans and the result of a match call.

use std::ops::Range;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Byte span `start..end` in the subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

impl Match {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "match ends before it starts");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched bytes of `subject`.
    pub fn slice<'s>(&self, subject: &'s [u8]) -> &'s [u8] {
        &subject[self.range()]
    }
}

/// Outcome of one `matches`, `search` or `has_match` call.
///
/// `capture_group_matches` and `named_capture_group_matches` have one entry
/// per overall match, in the same order as `matches`, unless group results
/// were skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegexResult {
    pub success: bool,
    pub count: usize,
    pub matches: Vec<Match>,
    /// Span of each numbered group, `None` where the group did not take part.
    pub capture_group_matches: Vec<Vec<Option<Match>>>,
    /// Spans of the named groups that took part, keyed by name in pattern order.
    pub named_capture_group_matches: Vec<IndexMap<String, Match>>,
    /// Instructions executed across all attempts.
    pub operations: u64,
}

impl RegexResult {
    pub(crate) fn push(
        &mut self,
        m: Match,
        groups: Option<(Vec<Option<Match>>, IndexMap<String, Match>)>,
    ) {
        self.matches.push(m);
        if let Some((numbered, named)) = groups {
            self.capture_group_matches.push(numbered);
            self.named_capture_group_matches.push(named);
        }
        self.count = self.matches.len();
        self.success = true;
    }

    /// First overall match, if any.
    pub fn first(&self) -> Option<Match> {
        self.matches.first().copied()
    }
}
