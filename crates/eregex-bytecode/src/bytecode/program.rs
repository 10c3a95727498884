//! The finished, immutable output of compilation.

use indexmap::IndexSet;

use super::fragment::ByteCode;
use super::instructions::{self, DecodeError, Instruction};
use super::literals::{LiteralPool, LiteralRef};
use super::opcode::Word;
use super::options::RegexOptions;
use super::verify::{self, VerifyError};

/// Everything the compiler hands over to build a [`Program`].
#[derive(Clone, Debug, Default)]
pub struct ProgramParts {
    /// Code, expected to end with `Exit`.
    pub code: ByteCode,
    pub literals: LiteralPool,
    /// Distinct capture group names in order of first appearance.
    pub group_names: IndexSet<String>,
    pub capture_groups_count: usize,
    /// Named groups in the pattern, counting repeated names every time.
    pub named_capture_groups_count: usize,
    pub match_length_minimum: usize,
    pub options: RegexOptions,
}

/// A compiled pattern: code words plus the tables the code refers to.
///
/// Read-only once built; share it freely between matches and threads.
#[derive(Clone, Debug)]
pub struct Program {
    code: Vec<Word>,
    literals: LiteralPool,
    group_names: IndexSet<String>,
    capture_groups_count: usize,
    named_capture_groups_count: usize,
    match_length_minimum: usize,
    options: RegexOptions,
}

impl Program {
    pub fn new(parts: ProgramParts) -> Self {
        Self {
            code: parts.code.into_words(),
            literals: parts.literals,
            group_names: parts.group_names,
            capture_groups_count: parts.capture_groups_count,
            named_capture_groups_count: parts.named_capture_groups_count,
            match_length_minimum: parts.match_length_minimum,
            options: parts.options,
        }
    }

    pub fn code(&self) -> &[Word] {
        &self.code
    }

    /// Length of the code in words.
    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn literals(&self) -> &LiteralPool {
        &self.literals
    }

    pub fn literal(&self, r: LiteralRef) -> Option<&[u8]> {
        self.literals.get(r)
    }

    pub fn group_names(&self) -> &IndexSet<String> {
        &self.group_names
    }

    /// Slot of the named group whose name is stored at `name`.
    pub fn named_group_slot(&self, name: LiteralRef) -> Option<usize> {
        let bytes = self.literal(name)?;
        let name = std::str::from_utf8(bytes).ok()?;
        self.group_names.get_index_of(name)
    }

    pub fn capture_groups_count(&self) -> usize {
        self.capture_groups_count
    }

    pub fn named_capture_groups_count(&self) -> usize {
        self.named_capture_groups_count
    }

    pub fn match_length_minimum(&self) -> usize {
        self.match_length_minimum
    }

    /// Options the program was compiled with.
    pub fn options(&self) -> RegexOptions {
        self.options
    }

    pub fn decode(&self, ip: usize) -> Result<Instruction<'_>, DecodeError> {
        instructions::decode(&self.code, ip)
    }

    /// Instructions in code order, stopping at the first decode error.
    pub fn instructions(&self) -> impl Iterator<Item = (usize, Result<Instruction<'_>, DecodeError>)> {
        let mut ip = 0;
        let mut failed = false;
        std::iter::from_fn(move || {
            if failed || ip >= self.code.len() {
                return None;
            }
            let at = ip;
            let decoded = self.decode(at);
            match &decoded {
                Ok(instr) => ip += instr.size(),
                Err(_) => failed = true,
            }
            Some((at, decoded))
        })
    }

    /// Check the structural invariants the matcher relies on.
    pub fn verify(&self) -> Result<(), VerifyError> {
        verify::verify(self)
    }
}
