//! Parser state, token cursor and the parse result.
//!
//! Productions live in `grammar.rs` and `bracket.rs`. Each returns a
//! [`Fragment`]; errors travel up as `Err(ParseError)`, so the first error
//! recorded is the one reported and nothing is parsed after it.

use indexmap::IndexSet;

use eregex_bytecode::{
    ByteCode, CompareEntry, LiteralPool, LiteralRef, Program, ProgramParts, RegexOptions,
};

use super::lexer::{Token, TokenType, lex, token_text};
use crate::error::{ErrorKind, ParseError};

/// Maximum group nesting before the parser gives up.
pub const MAX_NESTING: u32 = 250;

pub(crate) type PResult<T> = Result<T, ParseError>;

/// Code for one sub-expression and the fewest bytes it can match.
#[derive(Debug, Default)]
pub(crate) struct Fragment {
    pub code: ByteCode,
    pub min_len: usize,
}

impl Fragment {
    pub fn new(code: ByteCode, min_len: usize) -> Self {
        Self { code, min_len }
    }

    pub fn append(&mut self, other: Fragment) {
        self.code.append(other.code);
        self.min_len += other.min_len;
    }
}

/// Output of [`Parser::parse`].
///
/// On error the code is empty and `error` holds the first problem found.
#[derive(Debug)]
pub struct ParseResult {
    pub bytecode: ByteCode,
    pub literals: LiteralPool,
    pub group_names: IndexSet<String>,
    pub capture_groups_count: usize,
    pub named_capture_groups_count: usize,
    pub match_length_minimum: usize,
    pub options: RegexOptions,
    pub error: Option<ParseError>,
}

impl ParseResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_program(self) -> Result<Program, ParseError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(Program::new(ProgramParts {
            code: self.bytecode,
            literals: self.literals,
            group_names: self.group_names,
            capture_groups_count: self.capture_groups_count,
            named_capture_groups_count: self.named_capture_groups_count,
            match_length_minimum: self.match_length_minimum,
            options: self.options,
        }))
    }
}

/// Recursive-descent parser over a lexed pattern.
pub struct Parser<'src> {
    pub(crate) source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    pub(crate) options: RegexOptions,
    pub(crate) literals: LiteralPool,
    pub(crate) group_names: IndexSet<String>,
    pub(crate) capture_groups_count: usize,
    pub(crate) named_capture_groups_count: usize,
    pub(crate) depth: u32,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, options: RegexOptions) -> Self {
        Self {
            source,
            tokens: lex(source),
            pos: 0,
            options,
            literals: LiteralPool::new(),
            group_names: IndexSet::new(),
            capture_groups_count: 0,
            named_capture_groups_count: 0,
            depth: 0,
        }
    }

    pub fn parse(mut self) -> ParseResult {
        let outcome = self.parse_pattern();
        let (bytecode, match_length_minimum, error) = match outcome {
            Ok(fragment) => (fragment.code, fragment.min_len, None),
            Err(e) => (ByteCode::new(), 0, Some(e)),
        };

        ParseResult {
            bytecode,
            literals: self.literals,
            group_names: self.group_names,
            capture_groups_count: self.capture_groups_count,
            named_capture_groups_count: self.named_capture_groups_count,
            match_length_minimum,
            options: self.options,
            error,
        }
    }

    /// Current token. The stream ends with `Eof`, which is never consumed.
    #[inline]
    pub(crate) fn peek(&self) -> Token {
        self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    #[inline]
    pub(crate) fn peek_nth(&self, n: usize) -> Token {
        self.tokens[(self.pos + n).min(self.tokens.len() - 1)]
    }

    #[inline]
    pub(crate) fn at(&self, kind: TokenType) -> bool {
        self.peek().kind == kind
    }

    pub(crate) fn bump(&mut self) -> Token {
        let token = self.peek();
        if token.kind != TokenType::Eof {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn eat(&mut self, kind: TokenType) -> Option<Token> {
        self.at(kind).then(|| self.bump())
    }

    pub(crate) fn text(&self, token: &Token) -> &'src str {
        token_text(self.source, token)
    }

    /// Whether the current token is an ordinary character spelled `c`.
    pub(crate) fn at_char(&self, c: &str) -> bool {
        let token = self.peek();
        token.kind == TokenType::OrdinaryCharacter && self.text(&token) == c
    }

    pub(crate) fn error_at<T>(&self, kind: ErrorKind, token: Token) -> PResult<T> {
        Err(ParseError::new(kind, token.span()))
    }

    pub(crate) fn error_span<T>(&self, kind: ErrorKind, start: usize, end: usize) -> PResult<T> {
        Err(ParseError::new(kind, start..end))
    }

    /// Compare entry for a literal: a `Char` for one byte, a pooled
    /// `String` otherwise.
    pub(crate) fn literal_entry(&mut self, bytes: &[u8]) -> CompareEntry {
        match bytes {
            [b] => CompareEntry::Char(*b),
            _ => CompareEntry::String(self.literals.intern(bytes)),
        }
    }

    pub(crate) fn literal_compare(&mut self, bytes: &[u8]) -> Fragment {
        let entry = self.literal_entry(bytes);
        let mut code = ByteCode::new();
        code.insert_compare(&[entry]);
        Fragment::new(code, bytes.len())
    }

    pub(crate) fn intern_group_name(&mut self, name: &str) -> LiteralRef {
        self.group_names.insert(name.to_string());
        self.literals.intern(name.as_bytes())
    }
}
