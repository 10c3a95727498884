pub mod check;
pub mod dump;
pub mod exec;
pub mod input;
pub mod run_common;
pub mod trace;

#[cfg(test)]
mod exec_tests;
