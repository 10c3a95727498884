//! Terminal palette shared by the disassembler and the VM trace.
//!
//! Opcode names and attempt headers are blue, literals and accepted matches
//! green, failures red, and instruction pointers dim.

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Escape sequences to splice into formatted output; all empty when
/// coloring is off, so callers never branch on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ON: Self = Self::new(true);
    pub const OFF: Self = Self::new(false);

    pub const fn new(enabled: bool) -> Self {
        Self {
            blue: pick(enabled, BLUE),
            green: pick(enabled, GREEN),
            red: pick(enabled, RED),
            dim: pick(enabled, DIM),
            reset: pick(enabled, RESET),
        }
    }
}

const fn pick(enabled: bool, code: &'static str) -> &'static str {
    if enabled { code } else { "" }
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}
