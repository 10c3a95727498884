//! Test helpers shared by the parser and diagnostics tests.

use eregex_bytecode::{Colors, RegexOptions, dump};

use crate::error::{ErrorKind, ParseError};
use crate::{CompileError, compile};

/// Compiles `pattern` with default options and returns its disassembly.
///
/// Panics if the pattern does not compile or the program fails
/// verification.
pub fn dump_pattern(pattern: &str) -> String {
    dump_pattern_with(pattern, RegexOptions::NONE)
}

pub fn dump_pattern_with(pattern: &str, options: RegexOptions) -> String {
    let program = match compile(pattern, options) {
        Ok(program) => program,
        Err(e) => panic!("expected {pattern:?} to compile, got: {e}"),
    };
    if let Err(e) = program.verify() {
        panic!("program for {pattern:?} does not verify: {e}");
    }
    dump(&program, Colors::OFF)
}

pub fn compile_error(pattern: &str) -> CompileError {
    match compile(pattern, RegexOptions::NONE) {
        Ok(_) => panic!("expected {pattern:?} to fail"),
        Err(e) => e,
    }
}

/// Kind and span of the error for `pattern`.
pub fn error_of(pattern: &str) -> (ErrorKind, std::ops::Range<usize>) {
    let ParseError { kind, span } = compile_error(pattern).parse_error().clone();
    (kind, span)
}

/// Minimum match length recorded for `pattern`.
pub fn min_len(pattern: &str) -> usize {
    match compile(pattern, RegexOptions::NONE) {
        Ok(program) => program.match_length_minimum(),
        Err(e) => panic!("expected {pattern:?} to compile, got: {e}"),
    }
}
