//! Deferred alternatives.
//!
//! A fork pushes the lower-priority successor here; a dead path pops the
//! most recent one. The stack is bounded so pathological patterns fail
//! with an error instead of exhausting memory.

use super::error::RuntimeError;
use super::state::MatchState;

#[derive(Debug)]
pub(crate) struct ForkStack {
    stack: Vec<MatchState>,
    limit: u32,
}

impl ForkStack {
    pub fn new(limit: u32) -> Self {
        Self {
            stack: Vec::new(),
            limit,
        }
    }

    pub fn push(&mut self, state: MatchState) -> Result<(), RuntimeError> {
        if self.stack.len() >= self.limit as usize {
            return Err(RuntimeError::ForkLimitExceeded(self.limit));
        }
        self.stack.push(state);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<MatchState> {
        self.stack.pop()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[inline]
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.stack.len()
    }
}
