//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! All subcommands accept the same flags so a command line can be switched
//! between `exec`, `trace` and `dump` by changing one word; flags a command
//! ignores are hidden from its `--help`.

use clap::Command;

use super::args::*;

/// Add hidden subject args (for commands that don't run the pattern).
fn with_hidden_subject_args(cmd: Command) -> Command {
    cmd.arg(subject_arg().hide(true))
        .arg(subject_file_arg().hide(true))
}

/// Add hidden match args (for commands that don't run the pattern).
fn with_hidden_match_args(cmd: Command) -> Command {
    cmd.arg(global_arg().hide(true))
        .arg(not_bol_arg().hide(true))
        .arg(not_eol_arg().hide(true))
        .arg(longest_arg().hide(true))
        .arg(fuel_arg().hide(true))
        .arg(fork_limit_arg().hide(true))
}

/// Add visible match args.
fn with_match_args(cmd: Command) -> Command {
    cmd.arg(global_arg())
        .arg(not_bol_arg())
        .arg(not_eol_arg())
        .arg(longest_arg())
        .arg(fuel_arg())
        .arg(fork_limit_arg())
}

/// Add hidden exec output args (for commands that don't produce JSON).
fn with_hidden_exec_args(cmd: Command) -> Command {
    cmd.arg(compact_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("eregex")
        .about("POSIX extended regular expressions on a backtracking bytecode VM")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
}

/// Validate a pattern.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a pattern")
        .override_usage(
            "\
  eregex check <PATTERN>
  eregex check -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  eregex check 'a{2,3}'          # silent on success
  eregex check 'a{3,2}'          # reports the offending span
  eregex check -f pattern.txt    # pattern from a file"#,
        )
        .arg(pattern_arg())
        .arg(pattern_file_arg())
        .arg(no_subexpr_arg())
        .arg(color_arg());

    with_hidden_exec_args(with_hidden_match_args(with_hidden_subject_args(cmd)))
}

/// Show compiled bytecode.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show compiled bytecode")
        .override_usage(
            "\
  eregex dump <PATTERN>
  eregex dump -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  eregex dump 'a|bc'                # alternation layout
  eregex dump '(a)(?<x>b)'          # numbered and named groups
  eregex dump '(a)' --no-subexpr    # groups compiled away"#,
        )
        .arg(pattern_arg())
        .arg(pattern_file_arg())
        .arg(no_subexpr_arg())
        .arg(color_arg());

    with_hidden_exec_args(with_hidden_match_args(with_hidden_subject_args(cmd)))
}

/// Run a pattern and print the result as JSON.
pub fn exec_command() -> Command {
    let cmd = Command::new("exec")
        .about("Match a subject and print the result as JSON")
        .override_usage(
            "\
  eregex exec <PATTERN> <SUBJECT>
  eregex exec <PATTERN> -i <FILE>
  eregex exec -f <FILE> <SUBJECT>",
        )
        .after_help(
            r#"EXAMPLES:
  eregex exec 'a+' aab              # match at the start
  eregex exec -g '[0-9]+' 'a1b22'   # every match
  eregex exec 'x' -i log.txt -g     # subject from a file
  eregex exec 'a|ab' ab --longest   # leftmost-longest

EXIT STATUS:
  0 on a match, 1 on no match or a bad pattern, 2 when a limit is hit"#,
        )
        .arg(pattern_arg())
        .arg(subject_arg())
        .arg(pattern_file_arg())
        .arg(subject_file_arg())
        .arg(no_subexpr_arg())
        .arg(compact_arg())
        .arg(color_arg());

    with_match_args(cmd)
}

/// Trace execution for debugging.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace VM execution for debugging")
        .override_usage(
            "\
  eregex trace <PATTERN> <SUBJECT>
  eregex trace <PATTERN> -i <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  eregex trace 'a|b' b                  # forks and backtracking
  eregex trace 'a*' aaa --fuel 5        # stop after five instructions
  eregex trace -g 'a' banana            # one attempt per start offset"#,
        )
        .arg(pattern_arg())
        .arg(subject_arg())
        .arg(pattern_file_arg())
        .arg(subject_file_arg())
        .arg(no_subexpr_arg())
        .arg(color_arg());

    with_hidden_exec_args(with_match_args(cmd))
}
