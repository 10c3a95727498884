//! Backtracking VM for compiled eregex programs.
//!
//! The VM walks a [`Program`](eregex_bytecode::Program) against a byte
//! subject, keeping deferred alternatives on an explicit fork stack, and
//! reports overall and per-group match spans.

#![allow(clippy::comparison_chain)]

pub mod engine;

pub use engine::{
    FuelLimits, Match, MatchPolicy, MatchState, NoopTracer, PrintTracer, RegexResult,
    RuntimeError, Tracer, VM, VMBuilder, search_options,
};
