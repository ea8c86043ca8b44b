//! The scanner: one call to [`Scanner::scan`] produces one token.
//!
//! Each call records the token's full start, scans leading trivia into a
//! packed [`TriviaInfo`], classifies and consumes the token body, scans
//! trailing trivia (same-line trivia plus at most one line break), and
//! builds the most compact [`SyntaxToken`] shape. A call that reported a
//! diagnostic returns a realized token.
//!
//! # Divide vs. regular expression
//!
//! `/` cannot be classified from the characters alone. The caller passes
//! `allow_regular_expression` for each call; when set, a regex literal is
//! attempted speculatively and silently abandoned (falling back to `/` or
//! `/=`) if it runs into a line break or the end of the source.

use std::sync::Arc;

use tide_diagnostic::{
    hexadecimal_digit_expected, missing_closing_quote, unexpected_character, unterminated_comment,
    Diagnostic,
};
use tide_ir::{ParseOptions, Span, SyntaxKind};
use tide_lexer_core::{char_class, SlidingWindow, SourceText, TriviaFlags, TriviaInfo};
use tracing::trace;

use crate::keywords;
use crate::token::SyntaxToken;
use crate::trivia::{scan_raw_trivia, TriviaKind};

/// Tokenizer over one source text.
pub struct Scanner<'a> {
    window: SlidingWindow<'a>,
    file_name: Arc<str>,
    options: ParseOptions,
}

impl<'a> Scanner<'a> {
    pub fn new(file_name: Arc<str>, text: &'a dyn SourceText, options: ParseOptions) -> Self {
        char_class::initialize();
        Scanner {
            window: SlidingWindow::new(text, options.window_capacity),
            file_name,
            options,
        }
    }

    #[inline]
    pub fn source(&self) -> &'a dyn SourceText {
        self.window.source()
    }

    #[inline]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    #[inline]
    pub fn file_name(&self) -> &Arc<str> {
        &self.file_name
    }

    #[inline]
    pub fn absolute_index(&self) -> u32 {
        to_u32(self.window.absolute_index())
    }

    /// Reposition the scanner; the next token starts at `index`.
    pub fn set_absolute_index(&mut self, index: u32) {
        self.window.set_absolute_index(index as usize);
    }

    pub fn is_at_end_of_source(&self) -> bool {
        self.window.is_at_end_of_source()
    }

    /// Scan one token, appending any diagnostics to `diagnostics`.
    pub fn scan(
        &mut self,
        diagnostics: &mut Vec<Diagnostic>,
        allow_regular_expression: bool,
    ) -> SyntaxToken {
        let diagnostics_before = diagnostics.len();

        let full_start = self.absolute_index();
        let leading = self.scan_trivia_info(diagnostics, false);
        let start = self.absolute_index();
        let kind = self.scan_syntax_token(diagnostics, allow_regular_expression);
        let end = self.absolute_index();
        let trailing = self.scan_trivia_info(diagnostics, true);

        let leading_width = start - full_start;
        let trailing_width = self.absolute_index() - end;
        if !TriviaInfo::fits(leading_width) || !TriviaInfo::fits(trailing_width) {
            trace!(?kind, full_start, leading_width, trailing_width, "trivia too wide to pack");
            return SyntaxToken::realize_range(
                self.source(),
                full_start,
                kind,
                leading_width,
                end - start,
                trailing_width,
            );
        }

        let token = SyntaxToken::create(full_start, kind, leading, end - start, trailing);
        if diagnostics.len() > diagnostics_before {
            trace!(
                ?kind,
                full_start,
                diagnostics = diagnostics.len() - diagnostics_before,
                "realizing token"
            );
            token.realize(self.source())
        } else {
            token
        }
    }

    // === Trivia ===

    fn scan_trivia_info(&mut self, diagnostics: &mut Vec<Diagnostic>, is_trailing: bool) -> TriviaInfo {
        let start = self.window.absolute_index();
        let mut flags = TriviaFlags::empty();
        while let Some(trivia) = scan_raw_trivia(&mut self.window) {
            match trivia.kind {
                TriviaKind::SingleLineComment | TriviaKind::MultiLineComment => {
                    flags |= TriviaFlags::HAS_COMMENT;
                }
                TriviaKind::NewLine => flags |= TriviaFlags::HAS_NEWLINE,
                TriviaKind::Whitespace => {}
            }
            if trivia.unterminated {
                diagnostics.push(unterminated_comment(&self.file_name, to_u32(trivia.end)));
            }
            if is_trailing && trivia.kind == TriviaKind::NewLine {
                break;
            }
        }
        TriviaInfo::new(to_u32(self.window.absolute_index() - start), flags)
    }

    // === Token body ===

    fn scan_syntax_token(
        &mut self,
        diagnostics: &mut Vec<Diagnostic>,
        allow_regular_expression: bool,
    ) -> SyntaxKind {
        if self.window.is_at_end_of_source() {
            return SyntaxKind::EndOfFileToken;
        }

        let b = self.window.current_item();
        match b {
            b'"' | b'\'' => self.scan_string_literal(diagnostics, b),
            b'/' => {
                if allow_regular_expression && self.try_scan_regular_expression() {
                    SyntaxKind::RegularExpressionLiteral
                } else {
                    self.scan_slash()
                }
            }
            b'.' => {
                if char_class::is_decimal_digit(self.window.peek_item_n(1)) {
                    self.scan_decimal_literal()
                } else if self.window.peek_item_n(1) == b'.' && self.window.peek_item_n(2) == b'.' {
                    self.window.advance_n(3);
                    SyntaxKind::DotDotDotToken
                } else {
                    self.window.move_to_next_item();
                    SyntaxKind::DotToken
                }
            }
            b'0'..=b'9' => self.scan_numeric_literal(),
            b if char_class::is_ascii_identifier_start(b) => self.scan_identifier_or_keyword(),
            b if char_class::is_punctuation_start(b) => self.scan_punctuation(b),
            b'\\' => self
                .scan_identifier_slow()
                .unwrap_or_else(|| self.scan_unexpected_character(diagnostics)),
            b if !b.is_ascii() => {
                if self.window.current_char().is_some_and(char_class::is_identifier_start) {
                    self.scan_identifier_slow()
                        .unwrap_or_else(|| self.scan_unexpected_character(diagnostics))
                } else {
                    self.scan_unexpected_character(diagnostics)
                }
            }
            _ => self.scan_unexpected_character(diagnostics),
        }
    }

    fn scan_unexpected_character(&mut self, diagnostics: &mut Vec<Diagnostic>) -> SyntaxKind {
        let position = self.absolute_index();
        let ch = self.window.current_char().unwrap_or(char::REPLACEMENT_CHARACTER);
        self.window.advance_char();
        diagnostics.push(unexpected_character(&self.file_name, position, ch));
        SyntaxKind::ErrorToken
    }

    // === Identifiers ===

    /// ASCII fast path. Bails out to the slow path on `\` or any non-ASCII
    /// byte, rewinding to the identifier start.
    fn scan_identifier_or_keyword(&mut self) -> SyntaxKind {
        let first = self.window.current_item();
        let start = self.window.get_and_pin_absolute_index();
        self.window.move_to_next_item();
        while char_class::is_ascii_identifier_part(self.window.current_item()) {
            self.window.move_to_next_item();
        }

        let next = self.window.current_item();
        if next == b'\\' || !next.is_ascii() {
            self.window.rewind_to_pinned_index(start);
            self.window.release_and_unpin_absolute_index(start);
            return self
                .scan_identifier_slow()
                .unwrap_or(SyntaxKind::IdentifierName);
        }

        let kind = if char_class::is_keyword_start(first) {
            let end = self.window.absolute_index();
            keywords::lookup(self.window.pinned_bytes(start, end))
                .unwrap_or(SyntaxKind::IdentifierName)
        } else {
            SyntaxKind::IdentifierName
        };
        self.window.release_and_unpin_absolute_index(start);
        kind
    }

    /// Unicode and escape-aware identifier scan. Returns `None` if no
    /// identifier character could be consumed.
    fn scan_identifier_slow(&mut self) -> Option<SyntaxKind> {
        let start = self.window.absolute_index();
        let mut has_escape = false;
        loop {
            let is_first = self.window.absolute_index() == start;
            let accepts = |ch: char| {
                if is_first {
                    char_class::is_identifier_start(ch)
                } else {
                    char_class::is_identifier_part(ch)
                }
            };
            if self.window.current_item() == b'\\' {
                match self.peek_unicode_escape() {
                    Some(ch) if accepts(ch) => {
                        self.window.advance_n(6);
                        has_escape = true;
                    }
                    _ => break,
                }
            } else {
                match self.window.current_char() {
                    Some(ch) if accepts(ch) => self.window.advance_char(),
                    _ => break,
                }
            }
        }

        let end = self.window.absolute_index();
        if end == start {
            return None;
        }
        if has_escape {
            return Some(SyntaxKind::IdentifierName);
        }
        let text = self.source().substr(start, end - start);
        Some(keywords::lookup(text.as_bytes()).unwrap_or(SyntaxKind::IdentifierName))
    }

    /// Decode a `\uXXXX` escape at the cursor without consuming it.
    fn peek_unicode_escape(&mut self) -> Option<char> {
        if self.window.peek_item_n(1) != b'u' {
            return None;
        }
        let mut value = 0u32;
        for i in 2..6 {
            value = value * 16 + char_class::hex_value(self.window.peek_item_n(i))?;
        }
        char::from_u32(value)
    }

    // === Literals ===

    fn scan_string_literal(&mut self, diagnostics: &mut Vec<Diagnostic>, quote: u8) -> SyntaxKind {
        self.window.move_to_next_item();
        loop {
            if self.window.is_at_end_of_source() {
                diagnostics.push(missing_closing_quote(&self.file_name, self.absolute_index()));
                break;
            }
            let b = self.window.current_item();
            if b == quote {
                self.window.move_to_next_item();
                break;
            }
            match b {
                b'\\' => self.scan_escape_sequence(diagnostics),
                b'\r' | b'\n' => {
                    diagnostics.push(missing_closing_quote(&self.file_name, self.absolute_index()));
                    break;
                }
                0xE2 if self.at_unicode_line_separator() => {
                    diagnostics.push(missing_closing_quote(&self.file_name, self.absolute_index()));
                    break;
                }
                _ => self.window.move_to_next_item(),
            }
        }
        SyntaxKind::StringLiteral
    }

    fn at_unicode_line_separator(&mut self) -> bool {
        self.window.peek_item_n(1) == 0x80 && matches!(self.window.peek_item_n(2), 0xA8 | 0xA9)
    }

    /// Consume one escape sequence starting at `\`, validating `\x` and `\u`.
    fn scan_escape_sequence(&mut self, diagnostics: &mut Vec<Diagnostic>) {
        let start = self.absolute_index();
        self.window.move_to_next_item();
        if self.window.is_at_end_of_source() {
            return;
        }
        match self.window.current_item() {
            b'x' => {
                self.window.move_to_next_item();
                self.scan_hex_digits(diagnostics, start, 2);
            }
            b'u' => {
                self.window.move_to_next_item();
                self.scan_hex_digits(diagnostics, start, 4);
            }
            b'\r' => {
                self.window.move_to_next_item();
                if self.window.current_item() == b'\n' {
                    self.window.move_to_next_item();
                }
            }
            _ => self.window.advance_char(),
        }
    }

    fn scan_hex_digits(&mut self, diagnostics: &mut Vec<Diagnostic>, escape_start: u32, count: usize) {
        for _ in 0..count {
            if !char_class::is_hex_digit(self.window.current_item()) {
                let span = Span::new(escape_start, self.absolute_index());
                diagnostics.push(hexadecimal_digit_expected(&self.file_name, span));
                return;
            }
            self.window.move_to_next_item();
        }
    }

    fn scan_numeric_literal(&mut self) -> SyntaxKind {
        if self.window.current_item() == b'0'
            && matches!(self.window.peek_item_n(1), b'x' | b'X')
            && char_class::is_hex_digit(self.window.peek_item_n(2))
        {
            self.window.advance_n(2);
            while char_class::is_hex_digit(self.window.current_item()) {
                self.window.move_to_next_item();
            }
            return SyntaxKind::NumericLiteral;
        }
        self.scan_decimal_literal()
    }

    /// Digits, optional fraction, optional exponent. Also handles `.5`.
    fn scan_decimal_literal(&mut self) -> SyntaxKind {
        self.skip_decimal_digits();
        if self.window.current_item() == b'.' {
            self.window.move_to_next_item();
            self.skip_decimal_digits();
        }
        if matches!(self.window.current_item(), b'e' | b'E') {
            let sign = matches!(self.window.peek_item_n(1), b'+' | b'-');
            let first_digit = if sign { 2 } else { 1 };
            if char_class::is_decimal_digit(self.window.peek_item_n(first_digit)) {
                self.window.advance_n(first_digit);
                self.skip_decimal_digits();
            }
        }
        SyntaxKind::NumericLiteral
    }

    fn skip_decimal_digits(&mut self) {
        while char_class::is_decimal_digit(self.window.current_item()) {
            self.window.move_to_next_item();
        }
    }

    /// Speculatively scan a regex literal from `/`. On failure the cursor is
    /// restored and nothing is reported.
    fn try_scan_regular_expression(&mut self) -> bool {
        let start = self.window.get_and_pin_absolute_index();
        self.window.move_to_next_item();

        let mut in_escape = false;
        let mut in_class = false;
        let terminated = loop {
            if self.window.is_at_end_of_source() {
                break false;
            }
            let b = self.window.current_item();
            if matches!(b, b'\r' | b'\n') || (b == 0xE2 && self.at_unicode_line_separator()) {
                break false;
            }
            if in_escape {
                in_escape = false;
            } else {
                match b {
                    b'\\' => in_escape = true,
                    b'[' => in_class = true,
                    b']' => in_class = false,
                    b'/' if !in_class => {
                        self.window.move_to_next_item();
                        break true;
                    }
                    _ => {}
                }
            }
            self.window.advance_char();
        };

        if !terminated {
            trace!(start, "abandoned regular expression scan");
            self.window.rewind_to_pinned_index(start);
            self.window.release_and_unpin_absolute_index(start);
            return false;
        }

        // Flags
        while let Some(ch) = self.window.current_char() {
            if !char_class::is_identifier_part(ch) {
                break;
            }
            self.window.advance_char();
        }
        self.window.release_and_unpin_absolute_index(start);
        true
    }

    // === Punctuation ===

    fn scan_slash(&mut self) -> SyntaxKind {
        self.window.move_to_next_item();
        self.then_equals(SyntaxKind::SlashToken, SyntaxKind::SlashEqualsToken)
    }

    /// If the next byte is `=`, consume it and return `with_equals`.
    #[inline]
    fn then_equals(&mut self, plain: SyntaxKind, with_equals: SyntaxKind) -> SyntaxKind {
        if self.window.current_item() == b'=' {
            self.window.move_to_next_item();
            with_equals
        } else {
            plain
        }
    }

    /// Greedy operator scan: extend while a longer operator matches.
    fn scan_punctuation(&mut self, b: u8) -> SyntaxKind {
        use SyntaxKind as K;

        self.window.move_to_next_item();
        match b {
            b'{' => K::OpenBraceToken,
            b'}' => K::CloseBraceToken,
            b'(' => K::OpenParenToken,
            b')' => K::CloseParenToken,
            b'[' => K::OpenBracketToken,
            b']' => K::CloseBracketToken,
            b';' => K::SemicolonToken,
            b',' => K::CommaToken,
            b'~' => K::TildeToken,
            b'?' => K::QuestionToken,
            b':' => K::ColonToken,
            b'<' => {
                if self.eat(b'<') {
                    self.then_equals(K::LessThanLessThanToken, K::LessThanLessThanEqualsToken)
                } else {
                    self.then_equals(K::LessThanToken, K::LessThanEqualsToken)
                }
            }
            b'>' => {
                if self.eat(b'>') {
                    if self.eat(b'>') {
                        self.then_equals(
                            K::GreaterThanGreaterThanGreaterThanToken,
                            K::GreaterThanGreaterThanGreaterThanEqualsToken,
                        )
                    } else {
                        self.then_equals(
                            K::GreaterThanGreaterThanToken,
                            K::GreaterThanGreaterThanEqualsToken,
                        )
                    }
                } else {
                    self.then_equals(K::GreaterThanToken, K::GreaterThanEqualsToken)
                }
            }
            b'=' => {
                if self.eat(b'>') {
                    K::EqualsGreaterThanToken
                } else if self.eat(b'=') {
                    self.then_equals(K::EqualsEqualsToken, K::EqualsEqualsEqualsToken)
                } else {
                    K::EqualsToken
                }
            }
            b'!' => {
                if self.eat(b'=') {
                    self.then_equals(K::ExclamationEqualsToken, K::ExclamationEqualsEqualsToken)
                } else {
                    K::ExclamationToken
                }
            }
            b'+' => {
                if self.eat(b'+') {
                    K::PlusPlusToken
                } else {
                    self.then_equals(K::PlusToken, K::PlusEqualsToken)
                }
            }
            b'-' => {
                if self.eat(b'-') {
                    K::MinusMinusToken
                } else {
                    self.then_equals(K::MinusToken, K::MinusEqualsToken)
                }
            }
            b'&' => {
                if self.eat(b'&') {
                    K::AmpersandAmpersandToken
                } else {
                    self.then_equals(K::AmpersandToken, K::AmpersandEqualsToken)
                }
            }
            b'|' => {
                if self.eat(b'|') {
                    K::BarBarToken
                } else {
                    self.then_equals(K::BarToken, K::BarEqualsToken)
                }
            }
            b'*' => self.then_equals(K::AsteriskToken, K::AsteriskEqualsToken),
            b'%' => self.then_equals(K::PercentToken, K::PercentEqualsToken),
            b'^' => self.then_equals(K::CaretToken, K::CaretEqualsToken),
            // `/` and `.` are dispatched before punctuation.
            _ => K::ErrorToken,
        }
    }

    #[inline]
    fn eat(&mut self, b: u8) -> bool {
        if self.window.current_item() == b {
            self.window.move_to_next_item();
            true
        } else {
            false
        }
    }
}

#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
