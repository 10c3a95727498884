use std::path::PathBuf;

use super::run_common::compile_pattern;

pub struct CheckArgs {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub no_subexpr: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    compile_pattern(
        args.pattern.as_deref(),
        args.pattern_file.as_deref(),
        args.no_subexpr,
        None,
        args.color,
    );

    // Silent on success (like cargo check)
}
