//! Run a pattern and print the result as JSON.

use std::path::PathBuf;

use eregex_lib::{Error, RegexResult};

use super::run_common::{MatchFlags, compile_pattern, subject_or_exit};

pub struct ExecArgs {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub subject: Option<String>,
    pub subject_file: Option<PathBuf>,
    pub no_subexpr: bool,
    pub flags: MatchFlags,
    pub pretty: bool,
    pub color: bool,
}

pub fn run(args: ExecArgs) {
    let regex = compile_pattern(
        args.pattern.as_deref(),
        args.pattern_file.as_deref(),
        args.no_subexpr,
        Some(&args.flags),
        args.color,
    );
    let subject = subject_or_exit(args.subject.as_deref(), args.subject_file.as_deref());

    let options = args.flags.options();
    let outcome = if args.flags.global {
        regex.search(&subject, options)
    } else {
        regex.matches(&subject, options)
    };

    let result = match outcome {
        Ok(result) => result,
        Err(e @ Error::Runtime(_)) => {
            eprintln!("runtime error: {}", e);
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match render_result(&result, args.pretty) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: JSON serialization failed: {}", e);
            std::process::exit(1);
        }
    }

    if !result.success {
        std::process::exit(1);
    }
}

pub fn render_result(result: &RegexResult, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    }
}
