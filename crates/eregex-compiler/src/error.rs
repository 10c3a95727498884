//! Compile errors.

use std::fmt;
use std::ops::Range;

/// What went wrong while parsing a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidPattern,
    InvalidBraceContent,
    MismatchingBrace,
    MismatchingBracket,
    MismatchingParen,
    InvalidRepetitionMarker,
    InvalidRange,
    InvalidCollationElement,
    InvalidCharacterClass,
    InvalidNameForCaptureGroup,
    InvalidBracketContent,
    EmptySubExpression,
    /// Lookaround groups and collating elements.
    UnsupportedConstruct,
    NestingTooDeep,
    /// Repetitions expand past the program size limit.
    PatternTooLarge,
}

impl ErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidPattern => "invalid pattern",
            Self::InvalidBraceContent => "invalid content inside braces",
            Self::MismatchingBrace => "mismatching brace",
            Self::MismatchingBracket => "mismatching bracket",
            Self::MismatchingParen => "mismatching parenthesis",
            Self::InvalidRepetitionMarker => "invalid repetition marker",
            Self::InvalidRange => "invalid character range",
            Self::InvalidCollationElement => "invalid collation element",
            Self::InvalidCharacterClass => "invalid character class",
            Self::InvalidNameForCaptureGroup => "invalid name for capture group",
            Self::InvalidBracketContent => "invalid bracket content",
            Self::EmptySubExpression => "empty sub-expression",
            Self::UnsupportedConstruct => "unsupported construct",
            Self::NestingTooDeep => "groups nested too deeply",
            Self::PatternTooLarge => "pattern too large",
        }
    }

    /// Short hint shown under the offending span.
    pub fn hint(self) -> &'static str {
        match self {
            Self::InvalidPattern => "unexpected input",
            Self::InvalidBraceContent => "expected `{n}`, `{n,}` or `{n,m}` with n <= m <= 255",
            Self::MismatchingBrace => "brace is not balanced",
            Self::MismatchingBracket => "bracket is not balanced",
            Self::MismatchingParen => "parenthesis is not balanced",
            Self::InvalidRepetitionMarker => "nothing to repeat",
            Self::InvalidRange => "range end must be a character not below the start",
            Self::InvalidCollationElement => "expected `.]` or `=]`",
            Self::InvalidCharacterClass => "unknown class name",
            Self::InvalidNameForCaptureGroup => "expected `(?<name>...)`",
            Self::InvalidBracketContent => "bracket expression matches nothing",
            Self::EmptySubExpression => "expected an expression here",
            Self::UnsupportedConstruct => "lookaround and collating elements are not supported",
            Self::NestingTooDeep => "too many enclosing groups",
            Self::PatternTooLarge => "repetition expands to too much code",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// First error recorded by the parser, with the span of the token it
/// stopped at.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at position {}", span.start)]
pub struct ParseError {
    pub kind: ErrorKind,
    pub span: Range<usize>,
}

impl ParseError {
    pub fn new(kind: ErrorKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// Byte offset of the offending token in the pattern.
    pub fn position(&self) -> usize {
        self.span.start
    }
}

/// A pattern that failed to compile.
///
/// Keeps a copy of the pattern so it can render itself.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct CompileError {
    pattern: String,
    error: ParseError,
}

impl CompileError {
    pub fn new(pattern: &str, error: ParseError) -> Self {
        Self {
            pattern: pattern.to_string(),
            error,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.error.kind
    }

    pub fn position(&self) -> usize {
        self.error.position()
    }

    pub fn span(&self) -> Range<usize> {
        self.error.span.clone()
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn parse_error(&self) -> &ParseError {
        &self.error
    }
}
