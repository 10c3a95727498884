//! Shared logic for the commands that compile and run a pattern.

use std::path::Path;

use eregex_lib::{Error, MatchPolicy, Regex, RegexOptions};

use super::input::{load_pattern, load_subject};

/// Match-time flags shared by exec and trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchFlags {
    pub global: bool,
    pub not_bol: bool,
    pub not_eol: bool,
    pub longest: bool,
    pub fuel: u32,
    pub fork_limit: u32,
}

impl MatchFlags {
    /// Options passed to the match call. `GLOBAL` is left to `search`.
    pub fn options(&self) -> RegexOptions {
        let mut options = RegexOptions::NONE;
        if self.not_bol {
            options |= RegexOptions::MATCH_NOT_BEGIN_OF_LINE;
        }
        if self.not_eol {
            options |= RegexOptions::MATCH_NOT_END_OF_LINE;
        }
        options
    }

    pub fn policy(&self) -> MatchPolicy {
        if self.longest {
            MatchPolicy::LeftmostLongest
        } else {
            MatchPolicy::LeftmostFirst
        }
    }
}

pub fn compile_options(no_subexpr: bool) -> RegexOptions {
    if no_subexpr {
        RegexOptions::NO_SUB_EXPRESSIONS
    } else {
        RegexOptions::NONE
    }
}

/// Load and compile the pattern, exiting with a rendered diagnostic on failure.
pub fn compile_pattern(
    text: Option<&str>,
    path: Option<&Path>,
    no_subexpr: bool,
    flags: Option<&MatchFlags>,
    color: bool,
) -> Regex {
    let pattern = load_pattern(text, path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let mut builder = Regex::builder(&pattern).options(compile_options(no_subexpr));
    if let Some(flags) = flags {
        builder = builder
            .exec_fuel(flags.fuel)
            .fork_limit(flags.fork_limit)
            .policy(flags.policy());
    }

    match builder.build() {
        Ok(regex) => regex,
        Err(Error::Compile(e)) => {
            let origin = path.map(|p| p.display().to_string());
            let mut printer = e.printer().colored(color);
            if let Some(origin) = origin.as_deref() {
                printer = printer.path(origin);
            }
            eprint!("{}", printer.render());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn subject_or_exit(text: Option<&str>, path: Option<&Path>) -> Vec<u8> {
    load_subject(text, path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}
