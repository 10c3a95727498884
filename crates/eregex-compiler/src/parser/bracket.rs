//! Bracket expressions: `[abc]`, `[^a-z]`, `[[:digit:]_]`.
//!
//! Inside brackets only `]`, a leading `^`, `-` and `[` openers are special;
//! every other token stands for its own text and `\x` stands for `x`.

use eregex_bytecode::{ByteCode, CharClass, CharRange, CompareEntry};

use super::core::{Fragment, PResult, Parser};
use super::lexer::{Token, TokenType};
use crate::error::ErrorKind;

/// Bracket content collected before it is turned into compare entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Item {
    Entry(CompareEntry),
    /// A `-` after a single character, waiting for the range end.
    RangeStart,
}

impl Parser<'_> {
    pub(crate) fn parse_bracket_expression(&mut self) -> PResult<Fragment> {
        let open = self.bump();
        let negated = self.eat(TokenType::Circumflex).is_some();
        let mut items: Vec<Item> = Vec::new();

        loop {
            let token = self.peek();
            match token.kind {
                TokenType::Eof => {
                    return self.error_span(ErrorKind::MismatchingBracket, open.start, token.end);
                }
                TokenType::RightBracket if items.is_empty() => {
                    self.bump();
                    items.push(Item::Entry(CompareEntry::Char(b']')));
                }
                TokenType::RightBracket => {
                    self.bump();
                    break;
                }
                TokenType::HyphenMinus => {
                    self.bump();
                    let literal = items.is_empty()
                        || self.at(TokenType::RightBracket)
                        || items.last() == Some(&Item::RangeStart);
                    if literal {
                        items.push(Item::Entry(CompareEntry::Char(b'-')));
                    } else if matches!(items.last(), Some(Item::Entry(CompareEntry::Char(_)))) {
                        items.push(Item::RangeStart);
                        continue;
                    } else {
                        return self.error_at(ErrorKind::InvalidRange, token);
                    }
                }
                TokenType::LeftBracket => {
                    self.bump();
                    let entry = self.parse_bracket_opener(token)?;
                    items.push(Item::Entry(entry));
                }
                TokenType::EscapeSequence => {
                    self.bump();
                    let escaped = &self.text(&token)[1..];
                    let entry = self.literal_entry(escaped.as_bytes());
                    items.push(Item::Entry(entry));
                }
                _ => {
                    self.bump();
                    let entry = self.literal_entry(self.text(&token).as_bytes());
                    items.push(Item::Entry(entry));
                }
            }

            self.complete_range(&mut items, token)?;
        }

        let mut entries = Vec::with_capacity(items.len() + 1);
        if negated {
            entries.push(CompareEntry::Inverse);
        }
        for item in items {
            match item {
                Item::Entry(entry) => entries.push(entry),
                Item::RangeStart => {
                    let end = self.peek().start;
                    return self.error_span(ErrorKind::InvalidBracketContent, open.start, end);
                }
            }
        }

        let mut code = ByteCode::new();
        code.insert_compare(&entries);
        Ok(Fragment::new(code, 1))
    }

    /// Folds `start`, `RangeStart`, `end` into one `CharRange`.
    fn complete_range(&self, items: &mut Vec<Item>, token: Token) -> PResult<()> {
        let n = items.len();
        if n < 3 || items[n - 2] != Item::RangeStart {
            return Ok(());
        }

        let (Item::Entry(CompareEntry::Char(from)), Item::Entry(end)) = (items[n - 3], items[n - 1])
        else {
            return self.error_at(ErrorKind::InvalidRange, token);
        };
        let CompareEntry::Char(to) = end else {
            return self.error_at(ErrorKind::InvalidRange, token);
        };
        if from > to {
            return self.error_at(ErrorKind::InvalidRange, token);
        }

        items.truncate(n - 3);
        items.push(Item::Entry(CompareEntry::CharRange(CharRange::new(from, to))));
        Ok(())
    }

    /// After a `[` inside brackets: a class, a collating element, or a
    /// literal `[`.
    fn parse_bracket_opener(&mut self, open: Token) -> PResult<CompareEntry> {
        let delimiter = self.peek().kind;
        match delimiter {
            TokenType::Colon => {
                self.bump();
                let (name, close) = self.read_until_closer(open, TokenType::Colon)?;
                match CharClass::from_name(&name) {
                    Some(class) => Ok(CompareEntry::CharClass(class)),
                    None => self.error_span(ErrorKind::InvalidCharacterClass, open.start, close),
                }
            }
            TokenType::Period | TokenType::EqualSign => {
                self.bump();
                let (_, close) = self.read_until_closer(open, delimiter)?;
                self.error_span(ErrorKind::UnsupportedConstruct, open.start, close)
            }
            _ => Ok(CompareEntry::Char(b'[')),
        }
    }

    /// Collects text up to `delimiter ]`, consuming both. Returns the text
    /// and the end offset of the `]`.
    fn read_until_closer(&mut self, open: Token, delimiter: TokenType) -> PResult<(String, usize)> {
        let mut text = String::new();
        loop {
            let token = self.peek();
            if token.kind == delimiter && self.peek_nth(1).kind == TokenType::RightBracket {
                self.bump();
                let close = self.bump();
                return Ok((text, close.end));
            }
            if matches!(token.kind, TokenType::Eof | TokenType::RightBracket) {
                let kind = match delimiter {
                    TokenType::Colon => ErrorKind::InvalidCharacterClass,
                    _ => ErrorKind::InvalidCollationElement,
                };
                return self.error_span(kind, open.start, token.end);
            }
            self.bump();
            text.push_str(self.text(&token));
        }
    }
}
