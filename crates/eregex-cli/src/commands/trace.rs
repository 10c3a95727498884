//! Trace VM execution for debugging.

use std::path::PathBuf;

use eregex_lib::{Colors, Error, search_options};

use super::exec::render_result;
use super::run_common::{MatchFlags, compile_pattern, subject_or_exit};

pub struct TraceArgs {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub subject: Option<String>,
    pub subject_file: Option<PathBuf>,
    pub no_subexpr: bool,
    pub flags: MatchFlags,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let regex = compile_pattern(
        args.pattern.as_deref(),
        args.pattern_file.as_deref(),
        args.no_subexpr,
        Some(&args.flags),
        args.color,
    );
    let subject = subject_or_exit(args.subject.as_deref(), args.subject_file.as_deref());

    let mut options = args.flags.options();
    if args.flags.global {
        options = search_options(options);
    }

    let colors = Colors::new(args.color);
    let (lines, outcome) = regex.trace(&subject, options, colors);
    for line in &lines {
        println!("{}", line);
    }

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

    println!("{}---{}", colors.dim, colors.reset);
    match render_result(&result, false) {
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
