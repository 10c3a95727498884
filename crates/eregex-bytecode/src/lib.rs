//! Bytecode format and runtime types for eregex.
//!
//! This crate contains:
//! - The instruction set (opcodes, compare entries, POSIX character classes)
//! - `ByteCode` fragments with the composition helpers the compiler emits through
//! - The finished `Program`, its typed decoder and structural verifier
//! - Human-readable disassembly and terminal colors

#![allow(clippy::comparison_chain)]

pub mod bytecode;
mod colors;

pub use bytecode::{
    ByteCode, CharClass, CharRange, CharacterCompareType, Compare, CompareEntries, CompareEntry,
    DecodeError, Instruction, LiteralPool, LiteralRef, MAX_PROGRAM_WORDS, OpCodeId, Program,
    ProgramParts, RegexOptions, VerifyError, Word, dump, format_instruction, width_for_count,
};
pub use colors::Colors;
