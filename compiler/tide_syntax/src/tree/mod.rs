//! Immutable syntax trees and the incremental update entry point.

use std::sync::{Arc, OnceLock};

use tide_diagnostic::Diagnostic;
use tide_ir::{LanguageVersion, LineMap, ParseOptions, TextChange};
use tide_lexer::SyntaxToken;
use tide_lexer_core::{SourceText, StringText};
use tracing::debug;

use crate::grammar::check_delimiters;
use crate::parser::{ParseResult, ReuseStats, SyntaxParser, TokenStreamParser};

/// Root of a parsed file: its tokens in source order, ending with the end
/// of file token.
#[derive(Clone, Debug, Default)]
pub struct SourceUnit {
    tokens: Vec<Arc<SyntaxToken>>,
}

impl SourceUnit {
    pub fn new(tokens: Vec<Arc<SyntaxToken>>) -> Self {
        SourceUnit { tokens }
    }

    pub(crate) fn push(&mut self, token: Arc<SyntaxToken>) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn tokens(&self) -> &[Arc<SyntaxToken>] {
        &self.tokens
    }

    pub fn end_of_file_token(&self) -> Option<&Arc<SyntaxToken>> {
        self.tokens.last()
    }

    pub fn full_width(&self) -> u32 {
        self.tokens.last().map_or(0, |token| token.full_end())
    }

    /// The token whose full span contains `position`. Positions at the end
    /// of the text belong to the end of file token.
    pub fn token_at(&self, position: u32) -> Option<&Arc<SyntaxToken>> {
        let index = self
            .tokens
            .partition_point(|token| token.full_start() <= position);
        let token = self.tokens.get(index.checked_sub(1)?)?;
        let at_end = index == self.tokens.len() && position == token.full_end();
        if position < token.full_end() || at_end {
            Some(token)
        } else {
            None
        }
    }

    /// The source text the tokens cover, reassembled from their full text.
    pub fn full_text(&self, source: &dyn SourceText) -> String {
        self.tokens
            .iter()
            .map(|token| token.full_text(source))
            .collect()
    }
}

/// A parsed file.
///
/// Trees are shared behind [`Arc`]; an update never mutates the previous
/// tree.
#[derive(Debug)]
pub struct SyntaxTree {
    file_name: Arc<str>,
    text: StringText,
    root: SourceUnit,
    parse_diagnostics: Vec<Diagnostic>,
    grammar_diagnostics: OnceLock<Vec<Diagnostic>>,
    line_map: OnceLock<LineMap>,
    is_declaration: bool,
    options: ParseOptions,
    reuse_stats: ReuseStats,
}

impl SyntaxTree {
    /// Parse `text` with the token-stream parser.
    pub fn parse(file_name: &str, text: &str, options: ParseOptions) -> Arc<SyntaxTree> {
        SyntaxTree::parse_with(&TokenStreamParser, file_name, text, options)
    }

    pub fn parse_with(
        parser: &dyn SyntaxParser,
        file_name: &str,
        text: &str,
        options: ParseOptions,
    ) -> Arc<SyntaxTree> {
        let file_name: Arc<str> = Arc::from(file_name);
        let text = StringText::new(text);
        let result = parser.parse(&file_name, &text, &options);
        Arc::new(SyntaxTree::from_parts(file_name, text, options, result))
    }

    /// Produce the tree for `new_text`, the text of `previous` after
    /// `change`.
    ///
    /// With no change, `previous` itself is returned. The new tree is
    /// equivalent to a full parse of `new_text`.
    pub fn update(
        previous: &Arc<SyntaxTree>,
        change: Option<TextChange>,
        new_text: &str,
    ) -> Arc<SyntaxTree> {
        SyntaxTree::update_with(&TokenStreamParser, previous, change, new_text)
    }

    pub fn update_with(
        parser: &dyn SyntaxParser,
        previous: &Arc<SyntaxTree>,
        change: Option<TextChange>,
        new_text: &str,
    ) -> Arc<SyntaxTree> {
        let Some(change) = change else {
            return Arc::clone(previous);
        };

        let consistent = change.start <= change.old_end
            && change.old_end <= previous.text_len()
            && i64::try_from(new_text.len()).ok()
                == Some(i64::from(previous.text_len()) + change.delta());
        if !consistent {
            debug!(
                file = %previous.file_name,
                ?change,
                "change does not match the texts, parsing from scratch"
            );
            return SyntaxTree::parse_with(parser, &previous.file_name, new_text, previous.options);
        }

        let text = StringText::new(new_text);
        let result = parser.parse_incremental(previous, &change, &text);
        Arc::new(SyntaxTree::from_parts(
            Arc::clone(&previous.file_name),
            text,
            previous.options,
            result,
        ))
    }

    fn from_parts(
        file_name: Arc<str>,
        text: StringText,
        options: ParseOptions,
        result: ParseResult,
    ) -> Self {
        let is_declaration = file_name.ends_with(".d.ts");
        SyntaxTree {
            file_name,
            text,
            root: result.root,
            parse_diagnostics: result.diagnostics,
            grammar_diagnostics: OnceLock::new(),
            line_map: OnceLock::new(),
            is_declaration,
            options,
            reuse_stats: result.stats,
        }
    }

    // === Accessors ===

    #[inline]
    pub fn file_name(&self) -> &Arc<str> {
        &self.file_name
    }

    /// The source the tree's tokens read their text from.
    #[inline]
    pub fn source(&self) -> &StringText {
        &self.text
    }

    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    fn text_len(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    #[inline]
    pub fn root(&self) -> &SourceUnit {
        &self.root
    }

    /// Whether this is a declaration file (`.d.ts`).
    #[inline]
    pub fn is_declaration(&self) -> bool {
        self.is_declaration
    }

    #[inline]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    #[inline]
    pub fn language_version(&self) -> LanguageVersion {
        self.options.language_version
    }

    pub fn line_map(&self) -> &LineMap {
        self.line_map.get_or_init(|| LineMap::build(self.text.as_str()))
    }

    /// How many tokens the parse that built this tree reused.
    #[inline]
    pub fn reuse_stats(&self) -> ReuseStats {
        self.reuse_stats
    }

    /// Diagnostics reported while parsing.
    #[inline]
    pub fn parse_diagnostics(&self) -> &[Diagnostic] {
        &self.parse_diagnostics
    }

    /// The parse diagnostics if there are any; otherwise the grammar check
    /// diagnostics, computed on first call.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        if !self.parse_diagnostics.is_empty() {
            return &self.parse_diagnostics;
        }
        self.grammar_diagnostics
            .get_or_init(|| check_delimiters(&self.file_name, self.root.tokens(), &self.text))
    }
}
