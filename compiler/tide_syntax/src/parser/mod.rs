//! The parser seam and the token-stream parser.
//!
//! [`SyntaxParser`] is what a [`SyntaxTree`](crate::SyntaxTree) calls to
//! build its root, both for a fresh parse and for an incremental update.
//! [`TokenStreamParser`] builds a flat [`SourceUnit`] of tokens, which is
//! enough to exercise the scanner's parser-facing contract: it supplies the
//! divide/regex context for every call and reuses tokens across edits.

use std::sync::Arc;

use tide_diagnostic::Diagnostic;
use tide_ir::{ChangeMarker, ParseOptions, Span, SyntaxKind, TextChange};
use tide_lexer::{regex_allowed_after, Scanner, SyntaxToken};
use tide_lexer_core::StringText;
use tracing::{debug, trace};

use crate::reuse::is_reuse_eligible;
use crate::tree::{SourceUnit, SyntaxTree};

/// Output of one parse.
#[derive(Debug, Default)]
pub struct ParseResult {
    pub root: SourceUnit,
    pub diagnostics: Vec<Diagnostic>,
    pub stats: ReuseStats,
}

/// Statistics for an incremental update.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ReuseStats {
    /// Tokens carried over from the previous tree.
    pub reused: usize,
    /// Tokens scanned afresh.
    pub rescanned: usize,
}

impl ReuseStats {
    /// Reuse rate as a percentage.
    #[allow(
        clippy::cast_precision_loss,
        reason = "token counts stay far below 2^52"
    )]
    pub fn reuse_rate(&self) -> f64 {
        let total = self.reused + self.rescanned;
        if total == 0 {
            0.0
        } else {
            (self.reused as f64 / total as f64) * 100.0
        }
    }
}

/// Builds a tree root from source text.
pub trait SyntaxParser {
    /// Parse `source` from scratch.
    fn parse(
        &self,
        file_name: &Arc<str>,
        source: &StringText,
        options: &ParseOptions,
    ) -> ParseResult;

    /// Parse `source`, the text of `previous` with `change` applied.
    ///
    /// The result must be indistinguishable from [`parse`](Self::parse) of
    /// the same text; reuse only affects sharing and speed.
    fn parse_incremental(
        &self,
        previous: &SyntaxTree,
        change: &TextChange,
        source: &StringText,
    ) -> ParseResult;
}

/// Pulls tokens from the scanner until end of file.
#[derive(Copy, Clone, Debug, Default)]
pub struct TokenStreamParser;

impl SyntaxParser for TokenStreamParser {
    fn parse(
        &self,
        file_name: &Arc<str>,
        source: &StringText,
        options: &ParseOptions,
    ) -> ParseResult {
        let mut scanner = Scanner::new(Arc::clone(file_name), source, *options);
        let mut result = ParseResult::default();
        let mut previous_kind = None;
        loop {
            let token = scanner.scan(&mut result.diagnostics, regex_allowed_after(previous_kind));
            let kind = token.kind();
            result.root.push(Arc::new(token));
            result.stats.rescanned += 1;
            if kind == SyntaxKind::EndOfFileToken {
                return result;
            }
            previous_kind = Some(kind);
        }
    }

    fn parse_incremental(
        &self,
        previous: &SyntaxTree,
        change: &TextChange,
        source: &StringText,
    ) -> ParseResult {
        let marker = ChangeMarker::from_change(change, ChangeMarker::DEFAULT_LOOKAHEAD);
        let mut cursor = TokenCursor::new(previous.root().tokens(), marker);
        let mut scanner = Scanner::new(Arc::clone(previous.file_name()), source, *previous.options());
        let mut result = ParseResult::default();
        let mut previous_kind = None;
        let mut position = 0u32;

        loop {
            let reusable = change
                .new_to_old(position)
                .and_then(|old_position| cursor.find_at(old_position, previous_kind));

            let token = if let Some(old) = reusable {
                trace!(
                    old = old.full_start(),
                    new = position,
                    kind = %old.kind(),
                    "reuse token"
                );
                result.stats.reused += 1;
                if old.full_start() == position {
                    Arc::clone(old)
                } else {
                    Arc::new(old.relocated(position))
                }
            } else {
                if scanner.absolute_index() != position {
                    scanner.set_absolute_index(position);
                }
                result.stats.rescanned += 1;
                Arc::new(scanner.scan(&mut result.diagnostics, regex_allowed_after(previous_kind)))
            };

            let kind = token.kind();
            position = token.full_end();
            result.root.push(token);
            if kind == SyntaxKind::EndOfFileToken {
                break;
            }
            previous_kind = Some(kind);
        }

        debug!(
            file = %previous.file_name(),
            reused = result.stats.reused,
            rescanned = result.stats.rescanned,
            rate = result.stats.reuse_rate(),
            "incremental update"
        );
        result
    }
}

/// Walks the previous tree's tokens in order, offering those that survive
/// an edit.
struct TokenCursor<'old> {
    tokens: &'old [Arc<SyntaxToken>],
    marker: ChangeMarker,
    index: usize,
}

impl<'old> TokenCursor<'old> {
    fn new(tokens: &'old [Arc<SyntaxToken>], marker: ChangeMarker) -> Self {
        TokenCursor {
            tokens,
            marker,
            index: 0,
        }
    }

    /// The old token starting exactly at `old_position`, if it can be reused
    /// after a token of kind `previous_kind`.
    ///
    /// Positions must be requested in increasing order.
    fn find_at(
        &mut self,
        old_position: u32,
        previous_kind: Option<SyntaxKind>,
    ) -> Option<&'old Arc<SyntaxToken>> {
        while self
            .tokens
            .get(self.index)
            .is_some_and(|token| token.full_start() < old_position)
        {
            self.index += 1;
        }

        let token = self.tokens.get(self.index)?;
        if token.full_start() != old_position {
            return None;
        }
        let old_previous_kind = self
            .index
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|token| token.kind());
        if old_previous_kind != previous_kind || !is_reuse_eligible(token) {
            return None;
        }
        if !self
            .marker
            .is_unaffected(Span::new(token.full_start(), token.full_end()))
        {
            return None;
        }
        Some(token)
    }
}

#[cfg(test)]
mod tests;
