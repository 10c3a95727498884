//! Per-path match state.
//!
//! Every fork clones the whole state, so group writes on one path never
//! show up on another.

use indexmap::IndexMap;

use eregex_bytecode::Program;

use super::result::Match;

/// Open and closed boundaries of one group on the current path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct GroupSlot {
    /// Set by the left save; the next right save closes the span.
    pub open: Option<usize>,
    pub span: Option<Match>,
}

impl GroupSlot {
    pub fn save_left(&mut self, sp: usize) {
        self.open = Some(sp);
    }

    pub fn save_right(&mut self, sp: usize) {
        if let Some(start) = self.open {
            self.span = Some(Match::new(start, sp));
        }
    }
}

/// Position of one path through the program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchState {
    /// Instruction pointer, in words.
    pub ip: usize,
    /// Subject position, in bytes.
    pub sp: usize,
    /// Subject position this attempt started at.
    pub start: usize,
    pub(crate) groups: Vec<GroupSlot>,
    pub(crate) named: Vec<GroupSlot>,
}

impl MatchState {
    pub(crate) fn new(program: &Program, start: usize) -> Self {
        Self {
            ip: 0,
            sp: start,
            start,
            groups: vec![GroupSlot::default(); program.capture_groups_count()],
            named: vec![GroupSlot::default(); program.group_names().len()],
        }
    }

    /// A copy of this state resuming at `ip`.
    pub(crate) fn fork_at(&self, ip: usize) -> Self {
        Self { ip, ..self.clone() }
    }

    pub fn span(&self) -> Match {
        Match::new(self.start, self.sp)
    }

    /// Spans of numbered groups.
    pub fn capture_groups(&self) -> Vec<Option<Match>> {
        self.groups.iter().map(|slot| slot.span).collect()
    }

    /// Spans of the named groups that took part in the match.
    pub fn named_groups(&self, program: &Program) -> IndexMap<String, Match> {
        program
            .group_names()
            .iter()
            .zip(&self.named)
            .filter_map(|(name, slot)| Some((name.clone(), slot.span?)))
            .collect()
    }
}
