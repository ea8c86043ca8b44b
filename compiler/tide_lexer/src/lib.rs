//! Scanner and syntax tokens for Tide.
//!
//! The [`Scanner`] turns source text into [`SyntaxToken`]s one call at a
//! time, attaching leading and trailing trivia to each token. Tokens are
//! compact: text, decoded values and structured trivia are re-derived from
//! the source on demand.

mod escape;
pub mod keywords;
mod scanner;
mod token;
mod trivia;

use std::sync::Arc;

use tide_diagnostic::Diagnostic;
use tide_ir::{LanguageVersion, ParseOptions, SyntaxKind};
use tide_lexer_core::{SourceText, StringText};

pub use escape::{decode_identifier, decode_string_literal, format_number, parse_numeric_literal};
pub use scanner::Scanner;
pub use token::{
    BothTrivia, FixedWidthToken, LeadingTrivia, NoTrivia, RealizedToken, SyntaxToken, TokenShape,
    TokenValue, TrailingTrivia, TriviaCell, TriviaShape, VariableWidthToken,
};
pub use trivia::{scan_trivia, SyntaxTrivia, SyntaxTriviaList, TriviaKind};

/// Every token of a source, end of file included, plus the diagnostics
/// reported while scanning.
#[derive(Debug, Default)]
pub struct LexOutput {
    pub tokens: Vec<SyntaxToken>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Scan `source` to the end, deciding divide vs. regex from each previous
/// token with [`regex_allowed_after`].
pub fn tokenize(file_name: &str, source: &dyn SourceText, options: ParseOptions) -> LexOutput {
    let mut scanner = Scanner::new(Arc::from(file_name), source, options);
    let mut output = LexOutput::default();
    let mut previous = None;
    loop {
        let token = scanner.scan(&mut output.diagnostics, regex_allowed_after(previous));
        let kind = token.kind();
        output.tokens.push(token);
        if kind == SyntaxKind::EndOfFileToken {
            return output;
        }
        previous = Some(kind);
    }
}

/// Whether a `/` following a token of kind `previous` starts a regular
/// expression rather than a division.
///
/// A regex is allowed unless the previous token ends an operand.
pub fn regex_allowed_after(previous: Option<SyntaxKind>) -> bool {
    let Some(kind) = previous else {
        return true;
    };
    !matches!(
        kind,
        SyntaxKind::IdentifierName
            | SyntaxKind::NumericLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::RegularExpressionLiteral
            | SyntaxKind::CloseParenToken
            | SyntaxKind::CloseBracketToken
            | SyntaxKind::CloseBraceToken
            | SyntaxKind::ThisKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
    ) && !kind.is_contextual_keyword()
}

/// Whether `text` is usable as an identifier under `version`.
///
/// The text must scan as exactly one identifier token with no trivia.
/// Contextual keywords and strict-mode reserved words are accepted; ES3
/// additionally rejects its own list of future reserved words.
pub fn is_valid_identifier(text: &str, version: LanguageVersion) -> bool {
    if text.is_empty() {
        return false;
    }
    let source = StringText::new(text);
    let options = ParseOptions::default().with_language_version(version);
    let mut scanner = Scanner::new(Arc::from(""), &source, options);
    let mut diagnostics = Vec::new();
    let token = scanner.scan(&mut diagnostics, false);

    let kind = token.kind();
    let is_identifier_kind = kind == SyntaxKind::IdentifierName
        || kind.is_contextual_keyword()
        || kind.is_strict_reserved_word();
    if !diagnostics.is_empty()
        || !is_identifier_kind
        || token.width() as usize != text.len()
    {
        return false;
    }
    !(version == LanguageVersion::EcmaScript3 && keywords::is_es3_future_reserved_word(text))
}
