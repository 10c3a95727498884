//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! This allows the same arg definition to be reused across commands with
//! different visibility settings (via `.hide(true)`).

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Pattern text (positional).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .help("POSIX extended regular expression")
}

/// Pattern file (-f/--pattern-file).
pub fn pattern_file_arg() -> Arg {
    Arg::new("pattern_file")
        .short('f')
        .long("pattern-file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read the pattern from a file (trailing newline removed)")
}

/// Subject text (positional).
pub fn subject_arg() -> Arg {
    Arg::new("subject")
        .value_name("SUBJECT")
        .help("Text to match against")
}

/// Subject file (-i/--input).
pub fn subject_file_arg() -> Arg {
    Arg::new("subject_file")
        .short('i')
        .long("input")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read the subject from a file ('-' for stdin)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Turn every group into a non-capturing one (--no-subexpr).
pub fn no_subexpr_arg() -> Arg {
    Arg::new("no_subexpr")
        .long("no-subexpr")
        .action(ArgAction::SetTrue)
        .help("Compile groups as non-capturing")
}

/// Report every match instead of one at the start (--global).
pub fn global_arg() -> Arg {
    Arg::new("global")
        .short('g')
        .long("global")
        .action(ArgAction::SetTrue)
        .help("Search the whole subject for all matches")
}

/// `^` never matches (--not-bol).
pub fn not_bol_arg() -> Arg {
    Arg::new("not_bol")
        .long("not-bol")
        .action(ArgAction::SetTrue)
        .help("Subject start is not a beginning of line")
}

/// `$` never matches (--not-eol).
pub fn not_eol_arg() -> Arg {
    Arg::new("not_eol")
        .long("not-eol")
        .action(ArgAction::SetTrue)
        .help("Subject end is not an end of line")
}

/// Leftmost-longest instead of leftmost-first (--longest).
pub fn longest_arg() -> Arg {
    Arg::new("longest")
        .long("longest")
        .action(ArgAction::SetTrue)
        .help("Prefer the longest match at each start")
}

/// Execution fuel limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .default_value("1000000")
        .value_parser(value_parser!(u32))
        .help("Instructions allowed per match attempt")
}

/// Fork stack limit (--fork-limit).
pub fn fork_limit_arg() -> Arg {
    Arg::new("fork_limit")
        .long("fork-limit")
        .value_name("N")
        .default_value("5000")
        .value_parser(value_parser!(u32))
        .help("Pending alternatives allowed per match attempt (one per greedy loop iteration)")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty)")
}
