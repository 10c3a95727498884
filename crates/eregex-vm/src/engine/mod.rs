//! Runtime engine: match state, fork stack, execution loop and tracing.

mod error;
mod fork;
mod result;
mod state;
mod trace;
mod vm;

#[cfg(test)]
mod engine_tests;
#[cfg(test)]
mod trace_tests;

pub use error::RuntimeError;
pub use result::{Match, RegexResult};
pub use state::MatchState;
pub use trace::{NoopTracer, PrintTracer, Tracer};
pub use vm::{FuelLimits, MatchPolicy, VM, VMBuilder, search_options};
