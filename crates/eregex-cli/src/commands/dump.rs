use std::path::PathBuf;

use eregex_lib::Colors;

use super::run_common::compile_pattern;

pub struct DumpArgs {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub no_subexpr: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let regex = compile_pattern(
        args.pattern.as_deref(),
        args.pattern_file.as_deref(),
        args.no_subexpr,
        None,
        args.color,
    );

    print!("{}", regex.dump(Colors::new(args.color)));
}
