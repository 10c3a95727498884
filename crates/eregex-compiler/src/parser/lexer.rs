//! Lexer for POSIX extended patterns.
//!
//! Produces span-based tokens; text is sliced from the pattern only when the
//! parser needs it. Consecutive unlexable characters (only a trailing lone
//! `\` can be one) are coalesced into a single `Garbage` token. The stream
//! always ends with a zero-width `Eof` token.

use std::ops::Range;

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// `\` followed by any character.
    #[regex(r"\\(.|\n)")]
    EscapeSequence,

    #[token(".")]
    Period,

    #[token("*")]
    Asterisk,

    #[token("+")]
    Plus,

    #[token("?")]
    Questionmark,

    #[token("^")]
    Circumflex,

    #[token("$")]
    Dollar,

    #[token("[")]
    LeftBracket,

    #[token("]")]
    RightBracket,

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    #[token("{")]
    LeftCurly,

    #[token("}")]
    RightCurly,

    #[token("|")]
    Pipe,

    #[token(",")]
    Comma,

    #[token("-")]
    HyphenMinus,

    #[token(":")]
    Colon,

    #[token("=")]
    EqualSign,

    #[token("/")]
    Slash,

    /// Any other single character, including multi-byte UTF-8.
    #[regex(r"[^\\.*+?^$\[\](){}|,\-:=/]")]
    OrdinaryCharacter,

    /// Coalesced lexer errors.
    Garbage,

    Eof,
}

impl TokenType {
    /// Tokens that stand for themselves outside bracket expressions.
    pub fn is_ordinary(self) -> bool {
        matches!(
            self,
            Self::OrdinaryCharacter
                | Self::Comma
                | Self::Slash
                | Self::EqualSign
                | Self::HyphenMinus
                | Self::Colon
        )
    }

    pub fn is_repetition(self) -> bool {
        matches!(
            self,
            Self::Asterisk | Self::Plus | Self::Questionmark | Self::LeftCurly
        )
    }
}

/// Zero-copy token: kind + byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,
    pub start: usize,
    pub end: usize,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenType, span: Range<usize>) -> Self {
        Self {
            kind,
            start: span.start,
            end: span.end,
        }
    }

    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Tokenizes a pattern. The result always ends with `Eof`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenType::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(TokenType::Garbage, start..end));
                }
                tokens.push(Token::new(kind, lexer.span()));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(TokenType::Garbage, start..source.len()));
                }
                break;
            }
        }
    }

    tokens.push(Token::new(TokenType::Eof, source.len()..source.len()));
    tokens
}

/// Retrieves the text slice for a token.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span()]
}
