//! Lexer and recursive-descent parser.
//!
//! The parser emits bytecode directly; there is no intermediate tree.
//! Every production returns a fragment (code plus the minimum number of
//! bytes it can match) and fragments are composed bottom-up.

mod bracket;
mod core;
mod grammar;
pub mod lexer;

#[cfg(test)]
mod grammar_tests;

pub use core::{MAX_NESTING, ParseResult, Parser};
pub use grammar::RE_DUP_MAX;
pub use lexer::{Token, TokenType, lex, token_text};
