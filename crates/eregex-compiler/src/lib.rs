//! eregex compiler: POSIX extended regular expressions to bytecode.
//!
//! - `parser` - lexer and recursive-descent parser emitting bytecode fragments
//! - `error` - compile error kinds and the error carried out of [`compile`]
//! - `diagnostics` - rendering compile errors against the pattern

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod error;
pub mod parser;

#[cfg(test)]
mod diagnostics_tests;
#[cfg(test)]
pub mod test_utils;

use eregex_bytecode::{Program, RegexOptions};

pub use error::{CompileError, ErrorKind, ParseError};
pub use parser::{ParseResult, Parser};

/// Compile `pattern` into a program.
///
/// `options` are recorded in the program; `NO_SUB_EXPRESSIONS` turns every
/// group into a non-capturing one.
pub fn compile(pattern: &str, options: RegexOptions) -> Result<Program, CompileError> {
    let program = Parser::new(pattern, options)
        .parse()
        .into_program()
        .map_err(|error| CompileError::new(pattern, error))?;

    #[cfg(debug_assertions)]
    if let Err(e) = program.verify() {
        panic!("compiler emitted malformed bytecode for {pattern:?}: {e}");
    }

    Ok(program)
}
