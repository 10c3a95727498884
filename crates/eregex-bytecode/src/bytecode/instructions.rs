//! Typed view over the word stream.
//!
//! Code never reinterprets raw words itself: [`decode`] validates an
//! instruction once and hands out an [`Instruction`] whose accessors are
//! infallible.
//!
//! Layouts (one cell per word):
//!
//! ```text
//! Compare       [op] [count] [argsize] [type value...]*
//! Jump/Fork*    [op] [offset as i32]
//! SaveLeft/Right[op] [group id]
//! Save*Named    [op] [literal offset] [literal len]
//! CheckBegin    [op]
//! CheckEnd      [op]
//! Exit          [op]
//! ```
//!
//! Jump offsets are relative to the word right after the instruction.

use super::literals::LiteralRef;
use super::opcode::{CharClass, CharRange, CharacterCompareType, OpCodeId, Word};

/// One decoded `Compare` argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareEntry {
    /// Negates the whole compare; must come first.
    Inverse,
    AnyChar,
    Char(u8),
    String(LiteralRef),
    CharClass(CharClass),
    CharRange(CharRange),
}

impl CompareEntry {
    pub fn compare_type(&self) -> CharacterCompareType {
        match self {
            Self::Inverse => CharacterCompareType::Inverse,
            Self::AnyChar => CharacterCompareType::AnyChar,
            Self::Char(_) => CharacterCompareType::Char,
            Self::String(_) => CharacterCompareType::String,
            Self::CharClass(_) => CharacterCompareType::CharClass,
            Self::CharRange(_) => CharacterCompareType::CharRange,
        }
    }

    /// Encoded size in words, including the type tag.
    pub fn word_len(&self) -> usize {
        match self {
            Self::Inverse | Self::AnyChar => 1,
            Self::Char(_) | Self::CharClass(_) | Self::CharRange(_) => 2,
            Self::String(_) => 3,
        }
    }

    pub(crate) fn encode(&self, out: &mut Vec<Word>) {
        out.push(self.compare_type().to_word());
        match *self {
            Self::Inverse | Self::AnyChar => {}
            Self::Char(c) => out.push(Word::from(c)),
            Self::String(r) => {
                out.push(r.offset);
                out.push(r.len);
            }
            Self::CharClass(class) => out.push(class.to_word()),
            Self::CharRange(range) => out.push(range.to_word()),
        }
    }
}

/// Errors from decoding a word stream.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("instruction pointer {ip} is out of bounds")]
    OutOfBounds { ip: usize },

    #[error("unknown opcode {word:#x} at {ip}")]
    UnknownOpcode { ip: usize, word: Word },

    #[error("instruction at {ip} is truncated")]
    Truncated { ip: usize },

    #[error("unknown compare type {word:#x} in instruction at {ip}")]
    UnknownCompareType { ip: usize, word: Word },

    #[error("compare type {kind} cannot appear in instruction at {ip}")]
    UnexpectedCompareType { ip: usize, kind: &'static str },

    #[error("invalid compare value {word:#x} in instruction at {ip}")]
    InvalidCompareValue { ip: usize, word: Word },

    #[error("compare at {ip} declares {declared} argument words but uses {used}")]
    ArgumentSizeMismatch {
        ip: usize,
        declared: usize,
        used: usize,
    },
}

/// A decoded instruction borrowing its arguments from the program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction<'a> {
    Compare(Compare<'a>),
    Jump(i32),
    ForkJump(i32),
    ForkStay(i32),
    SaveLeftCaptureGroup(u32),
    SaveRightCaptureGroup(u32),
    SaveLeftNamedCaptureGroup(LiteralRef),
    SaveRightNamedCaptureGroup(LiteralRef),
    CheckBegin,
    CheckEnd,
    Exit,
}

impl Instruction<'_> {
    pub fn opcode(&self) -> OpCodeId {
        match self {
            Self::Compare(_) => OpCodeId::Compare,
            Self::Jump(_) => OpCodeId::Jump,
            Self::ForkJump(_) => OpCodeId::ForkJump,
            Self::ForkStay(_) => OpCodeId::ForkStay,
            Self::SaveLeftCaptureGroup(_) => OpCodeId::SaveLeftCaptureGroup,
            Self::SaveRightCaptureGroup(_) => OpCodeId::SaveRightCaptureGroup,
            Self::SaveLeftNamedCaptureGroup(_) => OpCodeId::SaveLeftNamedCaptureGroup,
            Self::SaveRightNamedCaptureGroup(_) => OpCodeId::SaveRightNamedCaptureGroup,
            Self::CheckBegin => OpCodeId::CheckBegin,
            Self::CheckEnd => OpCodeId::CheckEnd,
            Self::Exit => OpCodeId::Exit,
        }
    }

    /// Size in words. Always equals the words [`decode`] consumed.
    pub fn size(&self) -> usize {
        match self {
            Self::Compare(c) => OpCodeId::Compare.fixed_size() + c.arguments_size(),
            other => other.opcode().fixed_size(),
        }
    }

    /// Relative offset of a jump or fork.
    pub fn offset(&self) -> Option<i32> {
        match *self {
            Self::Jump(offset) | Self::ForkJump(offset) | Self::ForkStay(offset) => Some(offset),
            _ => None,
        }
    }

    /// Absolute target of a jump or fork located at `ip`.
    ///
    /// `None` for other instructions or when the target would be negative.
    pub fn jump_target(&self, ip: usize) -> Option<usize> {
        let offset = self.offset()?;
        let base = (ip + self.size()) as i64;
        usize::try_from(base + i64::from(offset)).ok()
    }
}

/// Arguments of a `Compare` instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Compare<'a> {
    count: usize,
    args: &'a [Word],
}

impl<'a> Compare<'a> {
    /// Number of compare entries.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of argument words.
    #[inline]
    pub fn arguments_size(&self) -> usize {
        self.args.len()
    }

    /// Whether the first entry negates the compare.
    pub fn is_inverse(&self) -> bool {
        self.args.first() == Some(&CharacterCompareType::Inverse.to_word())
    }

    pub fn entries(&self) -> CompareEntries<'a> {
        CompareEntries {
            remaining: self.count,
            args: self.args,
        }
    }
}

/// Iterator over the entries of a validated `Compare`.
#[derive(Clone, Debug)]
pub struct CompareEntries<'a> {
    remaining: usize,
    args: &'a [Word],
}

impl Iterator for CompareEntries<'_> {
    type Item = CompareEntry;

    fn next(&mut self) -> Option<CompareEntry> {
        if self.remaining == 0 {
            return None;
        }
        // Validated by `decode`, so this never fails for a decoded `Compare`.
        let (entry, used) = decode_entry(0, self.args).ok()?;
        self.args = &self.args[used..];
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CompareEntries<'_> {}

/// Decode the instruction starting at `ip`.
pub fn decode(code: &[Word], ip: usize) -> Result<Instruction<'_>, DecodeError> {
    let &op = code.get(ip).ok_or(DecodeError::OutOfBounds { ip })?;
    let opcode = OpCodeId::from_word(op).ok_or(DecodeError::UnknownOpcode { ip, word: op })?;

    let fixed = code
        .get(ip..ip + opcode.fixed_size())
        .ok_or(DecodeError::Truncated { ip })?;

    let instr = match opcode {
        OpCodeId::Compare => {
            let count = fixed[1] as usize;
            let declared = fixed[2] as usize;
            let start = ip + 3;
            let args = code
                .get(start..start + declared)
                .ok_or(DecodeError::Truncated { ip })?;

            let mut used = 0;
            for _ in 0..count {
                let rest = args.get(used..).ok_or(DecodeError::Truncated { ip })?;
                let (_, n) = decode_entry(ip, rest)?;
                used += n;
            }
            if used != declared {
                return Err(DecodeError::ArgumentSizeMismatch { ip, declared, used });
            }

            Instruction::Compare(Compare { count, args })
        }
        OpCodeId::Jump => Instruction::Jump(fixed[1] as i32),
        OpCodeId::ForkJump => Instruction::ForkJump(fixed[1] as i32),
        OpCodeId::ForkStay => Instruction::ForkStay(fixed[1] as i32),
        OpCodeId::SaveLeftCaptureGroup => Instruction::SaveLeftCaptureGroup(fixed[1]),
        OpCodeId::SaveRightCaptureGroup => Instruction::SaveRightCaptureGroup(fixed[1]),
        OpCodeId::SaveLeftNamedCaptureGroup => {
            Instruction::SaveLeftNamedCaptureGroup(LiteralRef::new(fixed[1], fixed[2]))
        }
        OpCodeId::SaveRightNamedCaptureGroup => {
            Instruction::SaveRightNamedCaptureGroup(LiteralRef::new(fixed[1], fixed[2]))
        }
        OpCodeId::CheckBegin => Instruction::CheckBegin,
        OpCodeId::CheckEnd => Instruction::CheckEnd,
        OpCodeId::Exit => Instruction::Exit,
    };

    Ok(instr)
}

/// Decode one compare entry from the front of `args`, returning it and the
/// number of words it occupies.
fn decode_entry(ip: usize, args: &[Word]) -> Result<(CompareEntry, usize), DecodeError> {
    let &tag = args.first().ok_or(DecodeError::Truncated { ip })?;
    let kind =
        CharacterCompareType::from_word(tag).ok_or(DecodeError::UnknownCompareType { ip, word: tag })?;

    let value = |i: usize| args.get(i).copied().ok_or(DecodeError::Truncated { ip });

    let entry = match kind {
        CharacterCompareType::Inverse => (CompareEntry::Inverse, 1),
        CharacterCompareType::AnyChar => (CompareEntry::AnyChar, 1),
        CharacterCompareType::Char => {
            let word = value(1)?;
            let c = u8::try_from(word).map_err(|_| DecodeError::InvalidCompareValue { ip, word })?;
            (CompareEntry::Char(c), 2)
        }
        CharacterCompareType::String => {
            let r = LiteralRef::new(value(1)?, value(2)?);
            (CompareEntry::String(r), 3)
        }
        CharacterCompareType::CharClass => {
            let word = value(1)?;
            let class =
                CharClass::from_word(word).ok_or(DecodeError::InvalidCompareValue { ip, word })?;
            (CompareEntry::CharClass(class), 2)
        }
        CharacterCompareType::CharRange => {
            let word = value(1)?;
            let range =
                CharRange::from_word(word).ok_or(DecodeError::InvalidCompareValue { ip, word })?;
            (CompareEntry::CharRange(range), 2)
        }
        CharacterCompareType::Undefined | CharacterCompareType::RangeExpressionDummy => {
            return Err(DecodeError::UnexpectedCompareType {
                ip,
                kind: kind.name(),
            });
        }
    };

    Ok(entry)
}
