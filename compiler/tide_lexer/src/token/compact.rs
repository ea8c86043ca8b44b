//! The eight compact token shapes.
//!
//! A compact token stores its position, kind and packed trivia summaries;
//! everything else (text, decoded value, structured trivia) is derived from
//! the source on first use and cached.

use std::sync::OnceLock;

use tide_ir::SyntaxKind;
use tide_lexer_core::{SourceText, TriviaInfo};

use super::{compute_value, TokenValue};
use crate::trivia::{scan_trivia, SyntaxTriviaList};

/// Packed trivia summary plus the lazily materialized list.
#[derive(Clone, Debug)]
pub struct TriviaCell {
    info: TriviaInfo,
    list: OnceLock<Box<SyntaxTriviaList>>,
}

impl TriviaCell {
    #[inline]
    pub(crate) fn new(info: TriviaInfo) -> Self {
        TriviaCell {
            info,
            list: OnceLock::new(),
        }
    }

    #[inline]
    pub fn info(&self) -> TriviaInfo {
        self.info
    }

    fn list(&self, source: &dyn SourceText, start: u32, is_trailing: bool) -> &SyntaxTriviaList {
        self.list
            .get_or_init(|| Box::new(scan_trivia(source, start, self.info.width(), is_trailing)))
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Which sides of a compact token carry trivia.
pub trait TriviaShape: Clone + std::fmt::Debug + Send + Sync + sealed::Sealed {
    fn leading(&self) -> Option<&TriviaCell>;
    fn trailing(&self) -> Option<&TriviaCell>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrivia;

#[derive(Clone, Debug)]
pub struct LeadingTrivia(pub(crate) TriviaCell);

#[derive(Clone, Debug)]
pub struct TrailingTrivia(pub(crate) TriviaCell);

#[derive(Clone, Debug)]
pub struct BothTrivia {
    pub(crate) leading: TriviaCell,
    pub(crate) trailing: TriviaCell,
}

impl sealed::Sealed for NoTrivia {}
impl sealed::Sealed for LeadingTrivia {}
impl sealed::Sealed for TrailingTrivia {}
impl sealed::Sealed for BothTrivia {}

impl TriviaShape for NoTrivia {
    fn leading(&self) -> Option<&TriviaCell> {
        None
    }
    fn trailing(&self) -> Option<&TriviaCell> {
        None
    }
}

impl TriviaShape for LeadingTrivia {
    fn leading(&self) -> Option<&TriviaCell> {
        Some(&self.0)
    }
    fn trailing(&self) -> Option<&TriviaCell> {
        None
    }
}

impl TriviaShape for TrailingTrivia {
    fn leading(&self) -> Option<&TriviaCell> {
        None
    }
    fn trailing(&self) -> Option<&TriviaCell> {
        Some(&self.0)
    }
}

impl TriviaShape for BothTrivia {
    fn leading(&self) -> Option<&TriviaCell> {
        Some(&self.leading)
    }
    fn trailing(&self) -> Option<&TriviaCell> {
        Some(&self.trailing)
    }
}

/// Shared trivia accessors for both width kinds.
macro_rules! trivia_accessors {
    () => {
        #[inline]
        pub fn full_start(&self) -> u32 {
            self.full_start
        }

        #[inline]
        pub fn kind(&self) -> SyntaxKind {
            self.kind
        }

        #[inline]
        pub fn leading_info(&self) -> TriviaInfo {
            self.trivia.leading().map_or(TriviaInfo::NONE, TriviaCell::info)
        }

        #[inline]
        pub fn trailing_info(&self) -> TriviaInfo {
            self.trivia.trailing().map_or(TriviaInfo::NONE, TriviaCell::info)
        }

        pub fn leading_trivia(&self, source: &dyn SourceText) -> &SyntaxTriviaList {
            match self.trivia.leading() {
                Some(cell) => cell.list(source, self.full_start, false),
                None => SyntaxTriviaList::empty(),
            }
        }

        pub fn trailing_trivia(&self, source: &dyn SourceText) -> &SyntaxTriviaList {
            match self.trivia.trailing() {
                Some(cell) => {
                    let start = self.full_start + self.leading_info().width() + self.width();
                    cell.list(source, start, true)
                }
                None => SyntaxTriviaList::empty(),
            }
        }

        pub(crate) fn set_full_start(&mut self, full_start: u32) {
            self.full_start = full_start;
        }
    };
}

/// Token whose text is implied by its kind (keywords, punctuation, end of
/// file).
#[derive(Clone, Debug)]
pub struct FixedWidthToken<T> {
    full_start: u32,
    kind: SyntaxKind,
    trivia: T,
}

impl<T: TriviaShape> FixedWidthToken<T> {
    pub(crate) fn new(full_start: u32, kind: SyntaxKind, trivia: T) -> Self {
        debug_assert!(kind.is_fixed_width(), "{kind:?} is not fixed-width");
        FixedWidthToken {
            full_start,
            kind,
            trivia,
        }
    }

    trivia_accessors!();

    #[inline]
    pub fn width(&self) -> u32 {
        self.kind.fixed_width()
    }

    #[inline]
    pub fn text(&self) -> &'static str {
        self.kind.text().unwrap_or("")
    }

    pub fn value(&self) -> TokenValue {
        compute_value(self.kind, self.text())
    }
}

/// Token whose text must be read from the source (identifiers, literals,
/// error tokens).
#[derive(Clone, Debug)]
pub struct VariableWidthToken<T> {
    full_start: u32,
    width: u32,
    kind: SyntaxKind,
    trivia: T,
    materialized: OnceLock<Box<Materialized>>,
}

/// Text read from the source, and the value decoded from it.
#[derive(Clone, Debug)]
struct Materialized {
    text: Box<str>,
    value: OnceLock<TokenValue>,
}

impl<T: TriviaShape> VariableWidthToken<T> {
    pub(crate) fn new(full_start: u32, kind: SyntaxKind, width: u32, trivia: T) -> Self {
        VariableWidthToken {
            full_start,
            width,
            kind,
            trivia,
            materialized: OnceLock::new(),
        }
    }

    trivia_accessors!();

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    fn materialized(&self, source: &dyn SourceText) -> &Materialized {
        self.materialized.get_or_init(|| {
            let start = self.full_start + self.leading_info().width();
            Box::new(Materialized {
                text: source.substr(start as usize, self.width as usize).into(),
                value: OnceLock::new(),
            })
        })
    }

    pub fn text(&self, source: &dyn SourceText) -> &str {
        &self.materialized(source).text
    }

    pub fn value(&self, source: &dyn SourceText) -> TokenValue {
        let materialized = self.materialized(source);
        materialized
            .value
            .get_or_init(|| compute_value(self.kind, &materialized.text))
            .clone()
    }
}
