mod cli;
mod commands;

use cli::{CheckParams, DumpParams, ExecParams, TraceParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => commands::check::run(CheckParams::from_matches(m).into()),
        Some(("dump", m)) => commands::dump::run(DumpParams::from_matches(m).into()),
        Some(("exec", m)) => commands::exec::run(ExecParams::from_matches(m).into()),
        Some(("trace", m)) => commands::trace::run(TraceParams::from_matches(m).into()),
        _ => unreachable!("subcommand_required is set"),
    }
}
