//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers
//! - Positional shifting for exec/trace (`-f` shifts the first positional to the subject)

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::run_common::MatchFlags;
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub no_subexpr: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            pattern_file: m.get_one::<PathBuf>("pattern_file").cloned(),
            no_subexpr: m.get_flag("no_subexpr"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern: p.pattern,
            pattern_file: p.pattern_file,
            no_subexpr: p.no_subexpr,
            color: p.color.enabled(),
        }
    }
}

pub struct DumpParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub no_subexpr: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            pattern_file: m.get_one::<PathBuf>("pattern_file").cloned(),
            no_subexpr: m.get_flag("no_subexpr"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            pattern: p.pattern,
            pattern_file: p.pattern_file,
            no_subexpr: p.no_subexpr,
            color: p.color.enabled(),
        }
    }
}

pub struct ExecParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub subject: Option<String>,
    pub subject_file: Option<PathBuf>,
    pub no_subexpr: bool,
    pub flags: MatchFlags,
    pub compact: bool,
    pub color: ColorChoice,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let pattern_file = m.get_one::<PathBuf>("pattern_file").cloned();
        let (pattern, subject) = shift_positional_to_subject(
            pattern_file.is_some(),
            m.get_one::<String>("pattern").cloned(),
            m.get_one::<String>("subject").cloned(),
        );

        Self {
            pattern,
            pattern_file,
            subject,
            subject_file: m.get_one::<PathBuf>("subject_file").cloned(),
            no_subexpr: m.get_flag("no_subexpr"),
            flags: parse_match_flags(m),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        Self {
            pattern: p.pattern,
            pattern_file: p.pattern_file,
            subject: p.subject,
            subject_file: p.subject_file,
            no_subexpr: p.no_subexpr,
            flags: p.flags,
            pretty: !p.compact,
            color: p.color.enabled(),
        }
    }
}

pub struct TraceParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub subject: Option<String>,
    pub subject_file: Option<PathBuf>,
    pub no_subexpr: bool,
    pub flags: MatchFlags,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let pattern_file = m.get_one::<PathBuf>("pattern_file").cloned();
        let (pattern, subject) = shift_positional_to_subject(
            pattern_file.is_some(),
            m.get_one::<String>("pattern").cloned(),
            m.get_one::<String>("subject").cloned(),
        );

        Self {
            pattern,
            pattern_file,
            subject,
            subject_file: m.get_one::<PathBuf>("subject_file").cloned(),
            no_subexpr: m.get_flag("no_subexpr"),
            flags: parse_match_flags(m),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            pattern: p.pattern,
            pattern_file: p.pattern_file,
            subject: p.subject,
            subject_file: p.subject_file,
            no_subexpr: p.no_subexpr,
            flags: p.flags,
            color: p.color.enabled(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    ColorChoice::from_flag(m.get_one::<String>("color").map(String::as_str))
}

fn parse_match_flags(m: &ArgMatches) -> MatchFlags {
    MatchFlags {
        global: m.get_flag("global"),
        not_bol: m.get_flag("not_bol"),
        not_eol: m.get_flag("not_eol"),
        longest: m.get_flag("longest"),
        fuel: m.get_one::<u32>("fuel").copied().unwrap_or(1_000_000),
        fork_limit: m.get_one::<u32>("fork_limit").copied().unwrap_or(5000),
    }
}

/// When -f is used with a single positional arg, shift it from pattern to subject.
/// This enables: `eregex exec -f pattern.txt subject`
fn shift_positional_to_subject(
    has_pattern_file: bool,
    pattern: Option<String>,
    subject: Option<String>,
) -> (Option<String>, Option<String>) {
    if has_pattern_file && pattern.is_some() && subject.is_none() {
        (None, pattern)
    } else {
        (pattern, subject)
    }
}
