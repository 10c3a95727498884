//! Instruction set, program container and tooling around it.

mod dump;
mod fragment;
mod instructions;
mod literals;
mod opcode;
mod options;
mod program;
mod verify;

#[cfg(test)]
mod opcode_tests;

pub use dump::{dump, format_instruction, width_for_count};
pub use fragment::{ByteCode, MAX_PROGRAM_WORDS};
pub use instructions::{Compare, CompareEntries, CompareEntry, DecodeError, Instruction};
pub use literals::{LiteralPool, LiteralRef};
pub use opcode::{CharClass, CharRange, CharacterCompareType, OpCodeId, Word};
pub use options::RegexOptions;
pub use program::{Program, ProgramParts};
pub use verify::VerifyError;
