//! eregex: POSIX extended regular expressions on a backtracking bytecode VM.
//!
//! # Example
//!
//! ```
//! use eregex_lib::{Regex, RegexOptions};
//!
//! let re = Regex::new("(?<key>[a-z]+)=([0-9]+)").expect("valid pattern");
//! let result = re.search("a=1 bb=22", RegexOptions::NONE).expect("within limits");
//!
//! assert_eq!(result.count, 2);
//! assert_eq!(result.matches[1].slice(b"a=1 bb=22"), b"bb=22");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod regex;

#[cfg(test)]
mod regex_tests;

pub use eregex_bytecode::{Colors, Program, RegexOptions};
pub use eregex_compiler::{CompileError, ErrorKind};
pub use eregex_vm::{
    FuelLimits, Match, MatchPolicy, PrintTracer, RegexResult, RuntimeError, Tracer,
    search_options,
};
pub use regex::{Regex, RegexBuilder};

/// Errors from compiling or running a pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// The VM gave up before deciding whether the subject matches.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Result type for regex operations.
pub type Result<T> = std::result::Result<T, Error>;
