//! Tide IR - shared data types for the Tide front end.
//!
//! This crate holds the types every other front-end crate agrees on:
//! - Spans for source locations (UTF-8 byte offsets)
//! - Names for interned identifiers
//! - `SyntaxKind`, the catalogue of token kinds and their canonical spellings
//! - `TextChange` / `ChangeMarker` for incremental updates
//! - `LanguageVersion` and `ParseOptions`
//! - `LineMap` for offset to line/column conversion
//!
//! Nothing here depends on the scanner; the lexer and syntax crates build on
//! top of it.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod incremental;
mod interner;
mod kind;
mod line_map;
mod name;
mod options;
mod span;

pub use incremental::{ChangeMarker, TextChange};
pub use interner::{InternError, StringInterner};
pub use kind::SyntaxKind;
pub use line_map::LineMap;
pub use name::Name;
pub use options::{LanguageVersion, ParseOptions};
pub use span::{Span, SpanError};
