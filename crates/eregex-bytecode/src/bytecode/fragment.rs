//! Growable bytecode fragments and their composition helpers.
//!
//! Every helper computes its jump offsets from the word lengths of the
//! fragments it wraps, at the moment it wraps them. There is no label
//! resolution pass, so each shape is pinned down by tests.
//!
//! Fork semantics the shapes rely on:
//! - `ForkJump` continues with the next instruction and defers the jump target.
//! - `ForkStay` takes the jump and defers the next instruction.

use super::instructions::CompareEntry;
use super::literals::LiteralRef;
use super::opcode::{OpCodeId, Word};

/// Size of a `Jump`/`ForkJump`/`ForkStay` instruction in words.
const JUMP_SIZE: usize = 2;

/// Largest fragment, in words, the compiler lets a pattern grow to.
///
/// Keeps every jump offset well inside `i32`.
pub const MAX_PROGRAM_WORDS: usize = 1 << 20;

/// A piece of code produced while compiling one sub-expression.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteCode {
    words: Vec<Word>,
}

impl ByteCode {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    /// Append another fragment.
    pub fn append(&mut self, other: ByteCode) {
        self.words.extend(other.words);
    }

    pub fn insert_compare(&mut self, entries: &[CompareEntry]) {
        let argsize: usize = entries.iter().map(CompareEntry::word_len).sum();
        self.words.push(OpCodeId::Compare.to_word());
        self.words.push(entries.len() as Word);
        self.words.push(argsize as Word);
        for entry in entries {
            entry.encode(&mut self.words);
        }
    }

    pub fn insert_compare_string(&mut self, literal: LiteralRef) {
        self.insert_compare(&[CompareEntry::String(literal)]);
    }

    pub fn insert_jump(&mut self, offset: i32) {
        self.insert_with_offset(OpCodeId::Jump, offset);
    }

    pub fn insert_fork_jump(&mut self, offset: i32) {
        self.insert_with_offset(OpCodeId::ForkJump, offset);
    }

    pub fn insert_fork_stay(&mut self, offset: i32) {
        self.insert_with_offset(OpCodeId::ForkStay, offset);
    }

    pub fn insert_save_left(&mut self, group: u32) {
        self.words.push(OpCodeId::SaveLeftCaptureGroup.to_word());
        self.words.push(group);
    }

    pub fn insert_save_right(&mut self, group: u32) {
        self.words.push(OpCodeId::SaveRightCaptureGroup.to_word());
        self.words.push(group);
    }

    pub fn insert_save_left_named(&mut self, name: LiteralRef) {
        self.words.push(OpCodeId::SaveLeftNamedCaptureGroup.to_word());
        self.words.push(name.offset);
        self.words.push(name.len);
    }

    pub fn insert_save_right_named(&mut self, name: LiteralRef) {
        self.words.push(OpCodeId::SaveRightNamedCaptureGroup.to_word());
        self.words.push(name.offset);
        self.words.push(name.len);
    }

    pub fn insert_check_begin(&mut self) {
        self.words.push(OpCodeId::CheckBegin.to_word());
    }

    pub fn insert_check_end(&mut self) {
        self.words.push(OpCodeId::CheckEnd.to_word());
    }

    pub fn insert_exit(&mut self) {
        self.words.push(OpCodeId::Exit.to_word());
    }

    fn insert_with_offset(&mut self, op: OpCodeId, offset: i32) {
        self.words.push(op.to_word());
        self.words.push(offset as Word);
    }

    /// `left|right`: `ForkJump` over the left branch, left, `Jump` over the
    /// right branch, right. The left branch is tried first.
    pub fn alternation(left: ByteCode, right: ByteCode) -> ByteCode {
        let mut out = ByteCode::new();
        out.insert_fork_jump(offset(left.len() + JUMP_SIZE));
        out.append(left);
        out.insert_jump(offset(right.len()));
        out.append(right);
        out
    }

    /// Length of the brace repetition `x{min,max}` of this fragment, with
    /// `None` as an unbounded maximum, or `None` on overflow.
    pub fn repeated_len(&self, min: usize, max: Option<usize>) -> Option<usize> {
        let len = self.len();
        match max {
            Some(max) => {
                let optional = max.checked_sub(min)?;
                len.checked_mul(max)?
                    .checked_add(optional.checked_mul(JUMP_SIZE)?)
            }
            None if min == 0 => len.checked_add(2 * JUMP_SIZE),
            None => len.checked_mul(min)?.checked_add(JUMP_SIZE),
        }
    }

    /// `x{n}`: the body repeated `n` times. `n == 0` yields an empty fragment.
    #[must_use]
    pub fn repeat_exact(self, n: usize) -> ByteCode {
        let mut out = ByteCode::new();
        for _ in 0..n {
            out.words.extend_from_slice(&self.words);
        }
        out
    }

    /// `x{min,max}`: `min` mandatory copies, then `max - min` optional copies.
    ///
    /// Each optional copy sits behind a `ForkJump` whose deferred branch
    /// skips every remaining optional copy at once.
    #[must_use]
    pub fn repeat_min_max(self, min: usize, max: usize) -> ByteCode {
        debug_assert!(min <= max, "repetition bounds out of order");
        let body_len = self.len();
        let optional = max - min;

        let mut out = self.clone().repeat_exact(min);
        for i in 0..optional {
            let remaining = optional - i;
            out.insert_fork_jump(offset(remaining * (body_len + JUMP_SIZE) - JUMP_SIZE));
            out.words.extend_from_slice(&self.words);
        }
        out
    }

    /// `x{min,}`: `min` copies and a greedy loop over the last one.
    ///
    /// `x{0,}` is `x*`.
    #[must_use]
    pub fn repeat_min(self, min: usize) -> ByteCode {
        if min == 0 {
            return self.zero_or_more(true);
        }
        let body_len = self.len();
        let mut out = self.repeat_exact(min);
        out.insert_fork_stay(-offset(body_len + JUMP_SIZE));
        out
    }

    /// `x+`: body, then a fork back to the body start.
    #[must_use]
    pub fn one_or_more(mut self, greedy: bool) -> ByteCode {
        let back = -offset(self.len() + JUMP_SIZE);
        if greedy {
            self.insert_fork_stay(back);
        } else {
            self.insert_fork_jump(back);
        }
        self
    }

    /// `x*`: fork past the loop, body, jump back to the fork.
    #[must_use]
    pub fn zero_or_more(self, greedy: bool) -> ByteCode {
        let body_len = self.len();
        let mut out = ByteCode::new();
        let skip = offset(body_len + JUMP_SIZE);
        if greedy {
            out.insert_fork_jump(skip);
        } else {
            out.insert_fork_stay(skip);
        }
        out.append(self);
        out.insert_jump(-offset(JUMP_SIZE + body_len + JUMP_SIZE));
        out
    }

    /// `x?`: fork past the body.
    #[must_use]
    pub fn zero_or_one(self, greedy: bool) -> ByteCode {
        let mut out = ByteCode::new();
        let skip = offset(self.len());
        if greedy {
            out.insert_fork_jump(skip);
        } else {
            out.insert_fork_stay(skip);
        }
        out.append(self);
        out
    }
}

/// Word count as a jump offset.
///
/// The compiler rejects patterns past [`MAX_PROGRAM_WORDS`], so a distance
/// outside `i32` is a caller bug.
fn offset(words: usize) -> i32 {
    match i32::try_from(words) {
        Ok(offset) => offset,
        Err(_) => panic!("jump over {words} words does not fit an offset"),
    }
}
