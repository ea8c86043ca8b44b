//! Syntax tokens.
//!
//! [`SyntaxToken`] is one of eight compact shapes, chosen at construction by
//! two properties:
//!
//! | | no trivia | leading | trailing | both |
//! |---|---|---|---|---|
//! | **fixed width** (text implied by kind) | `Fixed` | `FixedWithLeading` | `FixedWithTrailing` | `FixedWithBoth` |
//! | **variable width** (text read from source) | `Variable` | `VariableWithLeading` | `VariableWithTrailing` | `VariableWithBoth` |
//!
//! plus a ninth, [`Realized`](SyntaxToken::Realized), that owns its text and
//! trivia outright. Compact tokens hold no reference to the source; every
//! accessor that needs text takes the [`SourceText`] the token was scanned
//! from.

mod compact;
mod realized;

use std::sync::Arc;

use tide_ir::{Name, StringInterner, SyntaxKind};
use tide_lexer_core::{SourceText, TriviaInfo};

use crate::escape::{decode_identifier, decode_string_literal, format_number, parse_numeric_literal};
use crate::trivia::{scan_trivia, SyntaxTriviaList};

pub use compact::{
    BothTrivia, FixedWidthToken, LeadingTrivia, NoTrivia, TrailingTrivia, TriviaCell, TriviaShape,
    VariableWidthToken,
};
pub use realized::RealizedToken;

/// Decoded value of a token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    /// Punctuation, end of file and error tokens.
    None,
    Bool(bool),
    Null,
    Number(f64),
    /// Unescaped string contents, identifier or keyword text, regex source.
    Text(Arc<str>),
}

pub(crate) fn compute_value(kind: SyntaxKind, text: &str) -> TokenValue {
    match kind {
        SyntaxKind::TrueKeyword => TokenValue::Bool(true),
        SyntaxKind::FalseKeyword => TokenValue::Bool(false),
        SyntaxKind::NullKeyword => TokenValue::Null,
        SyntaxKind::NumericLiteral => TokenValue::Number(parse_numeric_literal(text)),
        SyntaxKind::StringLiteral => TokenValue::Text(decode_string_literal(text).into()),
        SyntaxKind::IdentifierName => TokenValue::Text(decode_identifier(text).into()),
        SyntaxKind::RegularExpressionLiteral => TokenValue::Text(text.into()),
        kind if kind.is_keyword() => TokenValue::Text(text.into()),
        _ => TokenValue::None,
    }
}

/// Which of the nine representations a token uses.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenShape {
    Fixed,
    FixedWithLeading,
    FixedWithTrailing,
    FixedWithBoth,
    Variable,
    VariableWithLeading,
    VariableWithTrailing,
    VariableWithBoth,
    Realized,
}

/// A syntax token in one of its compact shapes, or realized.
///
/// A trivia-free fixed-width token sits inline; every other shape is boxed,
/// so the enum itself stays two words and a bare `;` pays for nothing it
/// does not use.
#[derive(Clone, Debug)]
pub enum SyntaxToken {
    Fixed(FixedWidthToken<NoTrivia>),
    FixedWithLeading(Box<FixedWidthToken<LeadingTrivia>>),
    FixedWithTrailing(Box<FixedWidthToken<TrailingTrivia>>),
    FixedWithBoth(Box<FixedWidthToken<BothTrivia>>),
    Variable(Box<VariableWidthToken<NoTrivia>>),
    VariableWithLeading(Box<VariableWidthToken<LeadingTrivia>>),
    VariableWithTrailing(Box<VariableWidthToken<TrailingTrivia>>),
    VariableWithBoth(Box<VariableWidthToken<BothTrivia>>),
    Realized(Box<RealizedToken>),
}

// Size assertions to prevent accidental regressions: one of these sits
// behind every slot of every token stream.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{FixedWidthToken, NoTrivia, SyntaxToken};
    tide_ir::static_assert_size!(SyntaxToken, 16);
    // full_start (4) + kind (1) + padding
    tide_ir::static_assert_size!(FixedWidthToken<NoTrivia>, 8);
}

/// Apply the same expression to whichever compact shape `$token` holds.
macro_rules! dispatch {
    ($token:expr, $t:ident => $compact:expr, $r:ident => $realized:expr) => {
        match $token {
            SyntaxToken::Fixed($t) => $compact,
            SyntaxToken::FixedWithLeading($t) => $compact,
            SyntaxToken::FixedWithTrailing($t) => $compact,
            SyntaxToken::FixedWithBoth($t) => $compact,
            SyntaxToken::Variable($t) => $compact,
            SyntaxToken::VariableWithLeading($t) => $compact,
            SyntaxToken::VariableWithTrailing($t) => $compact,
            SyntaxToken::VariableWithBoth($t) => $compact,
            SyntaxToken::Realized($r) => $realized,
        }
    };
}

impl SyntaxToken {
    /// Build the most compact shape for a scanned token.
    ///
    /// Kinds with canonical text become fixed-width tokens; `width` must
    /// then equal the canonical text's length.
    pub fn create(
        full_start: u32,
        kind: SyntaxKind,
        leading: TriviaInfo,
        width: u32,
        trailing: TriviaInfo,
    ) -> SyntaxToken {
        if kind.is_fixed_width() {
            debug_assert_eq!(width, kind.fixed_width(), "width of {kind:?}");
            match (leading.is_empty(), trailing.is_empty()) {
                (true, true) => SyntaxToken::Fixed(FixedWidthToken::new(full_start, kind, NoTrivia)),
                (false, true) => SyntaxToken::FixedWithLeading(Box::new(FixedWidthToken::new(
                    full_start,
                    kind,
                    LeadingTrivia(TriviaCell::new(leading)),
                ))),
                (true, false) => SyntaxToken::FixedWithTrailing(Box::new(FixedWidthToken::new(
                    full_start,
                    kind,
                    TrailingTrivia(TriviaCell::new(trailing)),
                ))),
                (false, false) => SyntaxToken::FixedWithBoth(Box::new(FixedWidthToken::new(
                    full_start,
                    kind,
                    BothTrivia {
                        leading: TriviaCell::new(leading),
                        trailing: TriviaCell::new(trailing),
                    },
                ))),
            }
        } else {
            match (leading.is_empty(), trailing.is_empty()) {
                (true, true) => SyntaxToken::Variable(Box::new(VariableWidthToken::new(
                    full_start, kind, width, NoTrivia,
                ))),
                (false, true) => SyntaxToken::VariableWithLeading(Box::new(VariableWidthToken::new(
                    full_start,
                    kind,
                    width,
                    LeadingTrivia(TriviaCell::new(leading)),
                ))),
                (true, false) => SyntaxToken::VariableWithTrailing(Box::new(VariableWidthToken::new(
                    full_start,
                    kind,
                    width,
                    TrailingTrivia(TriviaCell::new(trailing)),
                ))),
                (false, false) => SyntaxToken::VariableWithBoth(Box::new(VariableWidthToken::new(
                    full_start,
                    kind,
                    width,
                    BothTrivia {
                        leading: TriviaCell::new(leading),
                        trailing: TriviaCell::new(trailing),
                    },
                ))),
            }
        }
    }

    /// Realized token for a scanned range whose trivia is too wide to pack
    /// into a [`TriviaInfo`]. Widths come from the trivia lists themselves.
    pub(crate) fn realize_range(
        source: &dyn SourceText,
        full_start: u32,
        kind: SyntaxKind,
        leading_width: u32,
        width: u32,
        trailing_width: u32,
    ) -> SyntaxToken {
        let start = full_start + leading_width;
        let end = start + width;
        SyntaxToken::Realized(Box::new(RealizedToken::new(
            full_start,
            kind,
            source.substr(start as usize, width as usize),
            scan_trivia(source, full_start, leading_width, false),
            scan_trivia(source, end, trailing_width, true),
        )))
    }

    // === Shape ===

    pub fn shape(&self) -> TokenShape {
        match self {
            SyntaxToken::Fixed(_) => TokenShape::Fixed,
            SyntaxToken::FixedWithLeading(_) => TokenShape::FixedWithLeading,
            SyntaxToken::FixedWithTrailing(_) => TokenShape::FixedWithTrailing,
            SyntaxToken::FixedWithBoth(_) => TokenShape::FixedWithBoth,
            SyntaxToken::Variable(_) => TokenShape::Variable,
            SyntaxToken::VariableWithLeading(_) => TokenShape::VariableWithLeading,
            SyntaxToken::VariableWithTrailing(_) => TokenShape::VariableWithTrailing,
            SyntaxToken::VariableWithBoth(_) => TokenShape::VariableWithBoth,
            SyntaxToken::Realized(_) => TokenShape::Realized,
        }
    }

    #[inline]
    pub fn is_realized(&self) -> bool {
        matches!(self, SyntaxToken::Realized(_))
    }

    // === Position ===

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        dispatch!(self, t => t.kind(), r => r.kind)
    }

    #[inline]
    pub fn full_start(&self) -> u32 {
        dispatch!(self, t => t.full_start(), r => r.full_start)
    }

    pub fn leading_trivia_info(&self) -> TriviaInfo {
        dispatch!(self, t => t.leading_info(), r => r.leading_info())
    }

    pub fn trailing_trivia_info(&self) -> TriviaInfo {
        dispatch!(self, t => t.trailing_info(), r => r.trailing_info())
    }

    #[inline]
    pub fn leading_trivia_width(&self) -> u32 {
        match self {
            SyntaxToken::Realized(r) => r.leading.full_width(),
            _ => self.leading_trivia_info().width(),
        }
    }

    #[inline]
    pub fn trailing_trivia_width(&self) -> u32 {
        match self {
            SyntaxToken::Realized(r) => r.trailing.full_width(),
            _ => self.trailing_trivia_info().width(),
        }
    }

    /// Width of the token text, excluding trivia.
    #[inline]
    pub fn width(&self) -> u32 {
        dispatch!(self, t => t.width(), r => r.width())
    }

    /// Leading trivia + text + trailing trivia.
    pub fn full_width(&self) -> u32 {
        self.leading_trivia_width() + self.width() + self.trailing_trivia_width()
    }

    /// Start of the token text.
    pub fn start(&self) -> u32 {
        self.full_start() + self.leading_trivia_width()
    }

    /// End of the token text.
    pub fn end(&self) -> u32 {
        self.start() + self.width()
    }

    pub fn full_end(&self) -> u32 {
        self.full_start() + self.full_width()
    }

    pub fn has_leading_comment(&self) -> bool {
        self.leading_trivia_info().has_comment()
    }

    pub fn has_leading_newline(&self) -> bool {
        self.leading_trivia_info().has_newline()
    }

    pub fn has_trailing_comment(&self) -> bool {
        self.trailing_trivia_info().has_comment()
    }

    pub fn has_trailing_newline(&self) -> bool {
        self.trailing_trivia_info().has_newline()
    }

    // === Source-derived ===

    /// Token text. Fixed-width tokens return their canonical spelling;
    /// variable-width tokens read (and cache) it from `source`.
    pub fn text<'t>(&'t self, source: &dyn SourceText) -> &'t str {
        match self {
            SyntaxToken::Fixed(t) => t.text(),
            SyntaxToken::FixedWithLeading(t) => t.text(),
            SyntaxToken::FixedWithTrailing(t) => t.text(),
            SyntaxToken::FixedWithBoth(t) => t.text(),
            SyntaxToken::Variable(t) => t.text(source),
            SyntaxToken::VariableWithLeading(t) => t.text(source),
            SyntaxToken::VariableWithTrailing(t) => t.text(source),
            SyntaxToken::VariableWithBoth(t) => t.text(source),
            SyntaxToken::Realized(r) => r.text(),
        }
    }

    /// Text including trivia on both sides.
    pub fn full_text(&self, source: &dyn SourceText) -> String {
        match self {
            SyntaxToken::Realized(r) => r.full_text(),
            _ => source
                .substr(self.full_start() as usize, self.full_width() as usize)
                .to_string(),
        }
    }

    /// Decoded value (string contents, number, identifier text, ...).
    pub fn value(&self, source: &dyn SourceText) -> TokenValue {
        match self {
            SyntaxToken::Fixed(t) => t.value(),
            SyntaxToken::FixedWithLeading(t) => t.value(),
            SyntaxToken::FixedWithTrailing(t) => t.value(),
            SyntaxToken::FixedWithBoth(t) => t.value(),
            SyntaxToken::Variable(t) => t.value(source),
            SyntaxToken::VariableWithLeading(t) => t.value(source),
            SyntaxToken::VariableWithTrailing(t) => t.value(source),
            SyntaxToken::VariableWithBoth(t) => t.value(source),
            SyntaxToken::Realized(r) => r.value(),
        }
    }

    /// The value rendered as text; tokens without a value yield their text.
    pub fn value_text(&self, source: &dyn SourceText) -> String {
        match self.value(source) {
            TokenValue::Text(text) => text.to_string(),
            TokenValue::Number(n) => format_number(n),
            TokenValue::Bool(b) => b.to_string(),
            TokenValue::Null => "null".to_string(),
            TokenValue::None => self.text(source).to_string(),
        }
    }

    /// Interned name of an identifier or keyword token (escapes resolved).
    pub fn name(&self, source: &dyn SourceText, interner: &StringInterner) -> Option<Name> {
        if !self.kind().is_identifier_name() {
            return None;
        }
        Some(interner.intern(&self.value_text(source)))
    }

    pub fn leading_trivia<'t>(&'t self, source: &dyn SourceText) -> &'t SyntaxTriviaList {
        dispatch!(self, t => t.leading_trivia(source), r => &r.leading)
    }

    pub fn trailing_trivia<'t>(&'t self, source: &dyn SourceText) -> &'t SyntaxTriviaList {
        dispatch!(self, t => t.trailing_trivia(source), r => &r.trailing)
    }

    // === Transforms ===

    /// Fully materialized copy of this token.
    pub fn realize(&self, source: &dyn SourceText) -> SyntaxToken {
        match self {
            SyntaxToken::Realized(_) => self.clone(),
            _ => SyntaxToken::Realized(Box::new(RealizedToken::new(
                self.full_start(),
                self.kind(),
                self.text(source),
                self.leading_trivia(source).clone(),
                self.trailing_trivia(source).clone(),
            ))),
        }
    }

    /// Realized copy with `trivia` as its leading trivia.
    pub fn with_leading_trivia(
        &self,
        source: &dyn SourceText,
        trivia: SyntaxTriviaList,
    ) -> SyntaxToken {
        let mut realized = self.realize(source);
        if let SyntaxToken::Realized(r) = &mut realized {
            r.leading = trivia;
        }
        realized
    }

    /// Realized copy with `trivia` as its trailing trivia.
    pub fn with_trailing_trivia(
        &self,
        source: &dyn SourceText,
        trivia: SyntaxTriviaList,
    ) -> SyntaxToken {
        let mut realized = self.realize(source);
        if let SyntaxToken::Realized(r) = &mut realized {
            r.trailing = trivia;
        }
        realized
    }

    /// Copy of this token moved to `new_full_start`. Cached text and trivia
    /// carry over, since they do not depend on position.
    pub fn relocated(&self, new_full_start: u32) -> SyntaxToken {
        let mut token = self.clone();
        dispatch!(&mut token, t => t.set_full_start(new_full_start), r => r.full_start = new_full_start);
        token
    }
}
