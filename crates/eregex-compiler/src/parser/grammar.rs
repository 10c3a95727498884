//! Productions of the POSIX extended grammar.
//!
//! ```text
//! pattern        := root EOF
//! root           := branch ('|' branch)*
//! branch         := sub_expression+
//! sub_expression := (ordinary-run | '.' | escape | bracket | anchor | group) repetition?
//! group          := '(' ('?:' | '?<' name '>')? root ')'
//! repetition     := ('*' | '+' | '?') '?'? | '{' n (',' m?)? '}'
//! ```

use eregex_bytecode::{ByteCode, CompareEntry, MAX_PROGRAM_WORDS, RegexOptions};

use super::core::{Fragment, MAX_NESTING, PResult, Parser};
use super::lexer::TokenType;
use crate::error::ErrorKind;

/// Largest count accepted inside `{}` (POSIX `RE_DUP_MAX`).
pub const RE_DUP_MAX: usize = 255;

enum GroupKind {
    Capturing,
    NonCapturing,
    Named(String),
}

impl Parser<'_> {
    pub(crate) fn parse_pattern(&mut self) -> PResult<Fragment> {
        let mut fragment = self.parse_root()?;

        let token = self.peek();
        match token.kind {
            TokenType::Eof => {}
            TokenType::RightParen => return self.error_at(ErrorKind::MismatchingParen, token),
            _ => return self.error_at(ErrorKind::InvalidPattern, token),
        }

        fragment.code.insert_exit();
        Ok(fragment)
    }

    /// Alternatives are folded from the right, so `a|b|c` tries `a`, then
    /// `b`, then `c`.
    pub(crate) fn parse_root(&mut self) -> PResult<Fragment> {
        let start = self.peek().start;
        let mut branches = vec![self.parse_branch()?];
        while self.eat(TokenType::Pipe).is_some() {
            branches.push(self.parse_branch()?);
        }

        let mut rest = branches.pop().unwrap_or_default();
        while let Some(left) = branches.pop() {
            let min_len = left.min_len.min(rest.min_len);
            rest = Fragment::new(ByteCode::alternation(left.code, rest.code), min_len);
            self.check_size(rest.code.len(), start)?;
        }
        Ok(rest)
    }

    fn parse_branch(&mut self) -> PResult<Fragment> {
        let start = self.peek();
        let mut branch = Fragment::default();
        let mut parsed_any = false;

        while let Some(fragment) = self.parse_sub_expression()? {
            branch.append(fragment);
            self.check_size(branch.code.len(), start.start)?;
            parsed_any = true;
        }

        if !parsed_any {
            return self.error_at(ErrorKind::EmptySubExpression, start);
        }
        Ok(branch)
    }

    /// One atom with its optional repetition, or `None` at `|`, `)` and end
    /// of input.
    fn parse_sub_expression(&mut self) -> PResult<Option<Fragment>> {
        let token = self.peek();

        let atom = match token.kind {
            TokenType::OrdinaryCharacter
            | TokenType::Comma
            | TokenType::HyphenMinus
            | TokenType::Colon
            | TokenType::EqualSign
            | TokenType::Slash => return self.parse_ordinary_run().map(Some),
            TokenType::Period => {
                self.bump();
                let mut code = ByteCode::new();
                code.insert_compare(&[CompareEntry::AnyChar]);
                Fragment::new(code, 1)
            }
            TokenType::EscapeSequence => {
                self.bump();
                let escaped = &self.text(&token)[1..];
                self.literal_compare(escaped.as_bytes())
            }
            TokenType::LeftBracket => self.parse_bracket_expression()?,
            TokenType::LeftParen => self.parse_group()?,
            TokenType::Circumflex => {
                self.bump();
                let mut code = ByteCode::new();
                code.insert_check_begin();
                return Ok(Some(Fragment::new(code, 0)));
            }
            TokenType::Dollar => {
                self.bump();
                let mut code = ByteCode::new();
                code.insert_check_end();
                return Ok(Some(Fragment::new(code, 0)));
            }
            TokenType::Asterisk | TokenType::Plus | TokenType::Questionmark | TokenType::LeftCurly => {
                return self.error_at(ErrorKind::InvalidRepetitionMarker, token);
            }
            TokenType::RightBracket => return self.error_at(ErrorKind::MismatchingBracket, token),
            TokenType::RightCurly => return self.error_at(ErrorKind::MismatchingBrace, token),
            TokenType::Garbage => return self.error_at(ErrorKind::InvalidPattern, token),
            TokenType::Pipe | TokenType::RightParen | TokenType::Eof => return Ok(None),
        };

        self.parse_repetition(atom).map(Some)
    }

    /// A run of ordinary characters becomes a single `String` compare.
    ///
    /// When a repetition follows, the last character is split off so the
    /// operator applies to it alone.
    fn parse_ordinary_run(&mut self) -> PResult<Fragment> {
        let mut chars = Vec::new();
        while self.peek().kind.is_ordinary() {
            let token = self.bump();
            chars.push(self.text(&token));
        }

        if !self.peek().kind.is_repetition() {
            return Ok(self.literal_compare(chars.concat().as_bytes()));
        }

        let last = chars.pop().unwrap_or_default();
        let mut run = Fragment::default();
        if !chars.is_empty() {
            run = self.literal_compare(chars.concat().as_bytes());
        }
        let atom = self.literal_compare(last.as_bytes());
        run.append(self.parse_repetition(atom)?);
        Ok(run)
    }

    fn parse_group(&mut self) -> PResult<Fragment> {
        let open = self.bump();
        if self.depth >= MAX_NESTING {
            return self.error_at(ErrorKind::NestingTooDeep, open);
        }

        let mut kind = self.parse_group_prefix(open.start)?;
        if self.options.contains(RegexOptions::NO_SUB_EXPRESSIONS) {
            kind = GroupKind::NonCapturing;
        }

        let mut code = ByteCode::new();
        let mut close = ByteCode::new();
        match kind {
            GroupKind::Capturing => {
                let id = self.capture_groups_count as u32;
                self.capture_groups_count += 1;
                code.insert_save_left(id);
                close.insert_save_right(id);
            }
            GroupKind::Named(name) => {
                let name = self.intern_group_name(&name);
                self.named_capture_groups_count += 1;
                code.insert_save_left_named(name);
                close.insert_save_right_named(name);
            }
            GroupKind::NonCapturing => {}
        }

        self.depth += 1;
        let inner = self.parse_root()?;
        self.depth -= 1;

        if self.eat(TokenType::RightParen).is_none() {
            let token = self.peek();
            return self.error_at(ErrorKind::MismatchingParen, token);
        }

        code.append(inner.code);
        code.append(close);
        Ok(Fragment::new(code, inner.min_len))
    }

    /// Everything between `(` and the group body.
    fn parse_group_prefix(&mut self, open: usize) -> PResult<GroupKind> {
        let Some(question) = self.eat(TokenType::Questionmark) else {
            return Ok(GroupKind::Capturing);
        };

        if self.eat(TokenType::Colon).is_some() {
            return Ok(GroupKind::NonCapturing);
        }

        // (?= and (?!
        if self.at(TokenType::EqualSign) || self.at_char("!") {
            let token = self.bump();
            return self.error_span(ErrorKind::UnsupportedConstruct, open, token.end);
        }

        if !self.at_char("<") {
            return self.error_at(ErrorKind::InvalidRepetitionMarker, question);
        }
        let angle = self.bump();

        // (?<= and (?<!
        if self.at(TokenType::EqualSign) || self.at_char("!") {
            let token = self.bump();
            return self.error_span(ErrorKind::UnsupportedConstruct, open, token.end);
        }

        let mut name = String::new();
        loop {
            let token = self.peek();
            if self.at_char(">") {
                self.bump();
                break;
            }
            if token.kind != TokenType::OrdinaryCharacter {
                return self.error_span(ErrorKind::InvalidNameForCaptureGroup, angle.start, token.end);
            }
            self.bump();
            name.push_str(self.text(&token));
        }

        if name.is_empty() {
            return self.error_span(ErrorKind::InvalidNameForCaptureGroup, angle.start, angle.end + 1);
        }
        Ok(GroupKind::Named(name))
    }

    fn parse_repetition(&mut self, atom: Fragment) -> PResult<Fragment> {
        let token = self.peek();
        let Fragment { code, min_len } = atom;

        let repeated = match token.kind {
            TokenType::Asterisk => {
                self.bump();
                let greedy = self.eat(TokenType::Questionmark).is_none();
                Fragment::new(code.zero_or_more(greedy), 0)
            }
            TokenType::Plus => {
                self.bump();
                let greedy = self.eat(TokenType::Questionmark).is_none();
                Fragment::new(code.one_or_more(greedy), min_len)
            }
            TokenType::Questionmark => {
                self.bump();
                let greedy = self.eat(TokenType::Questionmark).is_none();
                Fragment::new(code.zero_or_one(greedy), 0)
            }
            TokenType::LeftCurly => {
                let (min, max) = self.parse_brace_bounds()?;
                let words = code.repeated_len(min, max).unwrap_or(usize::MAX);
                self.check_size(words, token.start)?;
                let code = match max {
                    Some(max) if max == min => code.repeat_exact(min),
                    Some(max) => code.repeat_min_max(min, max),
                    None => code.repeat_min(min),
                };
                Fragment::new(code, min_len * min)
            }
            _ => Fragment::new(code, min_len),
        };

        Ok(repeated)
    }

    /// `{n}`, `{n,}` or `{n,m}`; `None` as the maximum means unbounded.
    fn parse_brace_bounds(&mut self) -> PResult<(usize, Option<usize>)> {
        let open = self.bump();

        let Some(min) = self.parse_number() else {
            return self.brace_error(open.start);
        };
        let max = if self.eat(TokenType::Comma).is_some() {
            if self.at(TokenType::RightCurly) {
                None
            } else {
                match self.parse_number() {
                    Some(max) => Some(max),
                    None => return self.brace_error(open.start),
                }
            }
        } else {
            Some(min)
        };

        let Some(close) = self.eat(TokenType::RightCurly) else {
            return self.brace_error(open.start);
        };

        let upper = max.unwrap_or(min);
        if min > upper || upper > RE_DUP_MAX {
            return self.error_span(ErrorKind::InvalidBraceContent, open.start, close.end);
        }
        Ok((min, max))
    }

    /// Rejects code longer than [`MAX_PROGRAM_WORDS`]; the span runs from
    /// `start` to the current token.
    fn check_size(&self, words: usize, start: usize) -> PResult<()> {
        if words <= MAX_PROGRAM_WORDS {
            return Ok(());
        }
        self.error_span(ErrorKind::PatternTooLarge, start, self.peek().start)
    }

    fn brace_error<T>(&self, open: usize) -> PResult<T> {
        let token = self.peek();
        let kind = if token.kind == TokenType::Eof {
            ErrorKind::MismatchingBrace
        } else {
            ErrorKind::InvalidBraceContent
        };
        self.error_span(kind, open, token.end)
    }

    /// Consecutive digit characters as a number, saturating on overflow.
    fn parse_number(&mut self) -> Option<usize> {
        let mut value: Option<usize> = None;
        loop {
            let token = self.peek();
            let text = self.text(&token);
            let digit = match text.as_bytes() {
                [d @ b'0'..=b'9'] if token.kind == TokenType::OrdinaryCharacter => {
                    usize::from(d - b'0')
                }
                _ => return value,
            };
            self.bump();
            value = Some(
                value
                    .unwrap_or(0)
                    .saturating_mul(10)
                    .saturating_add(digit),
            );
        }
    }
}
