//! Read-only source text abstraction.

use std::fmt;
use std::sync::Arc;

use tide_ir::Span;

/// Read-only text a scanner and tokens read from.
///
/// Offsets are UTF-8 byte offsets. Implementations are shared across
/// threads together with the trees built over them.
pub trait SourceText: Send + Sync {
    /// Length in bytes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy `count` bytes starting at `source_index` into
    /// `dest[dest_index..dest_index + count]`.
    ///
    /// # Panics
    /// Panics if either range is out of bounds.
    fn copy_to(&self, source_index: usize, dest: &mut [u8], dest_index: usize, count: usize);

    /// Text of `[start, start + len)`, or `""` if the range is out of bounds
    /// or does not fall on char boundaries.
    fn substr(&self, start: usize, len: usize) -> &str;

    /// Owned copy of the text covered by `span`.
    fn sub_text(&self, span: Span) -> StringText {
        StringText::new(self.substr(span.start as usize, span.len() as usize))
    }
}

/// `SourceText` over an owned, reference-counted string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StringText {
    text: Arc<str>,
}

impl StringText {
    pub fn new(text: &str) -> Self {
        StringText {
            text: Arc::from(text),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl SourceText for StringText {
    #[inline]
    fn len(&self) -> usize {
        self.text.len()
    }

    fn copy_to(&self, source_index: usize, dest: &mut [u8], dest_index: usize, count: usize) {
        let src = &self.text.as_bytes()[source_index..source_index + count];
        dest[dest_index..dest_index + count].copy_from_slice(src);
    }

    fn substr(&self, start: usize, len: usize) -> &str {
        start
            .checked_add(len)
            .and_then(|end| self.text.get(start..end))
            .unwrap_or("")
    }
}

impl From<&str> for StringText {
    fn from(text: &str) -> Self {
        StringText::new(text)
    }
}

impl From<String> for StringText {
    fn from(text: String) -> Self {
        StringText {
            text: Arc::from(text),
        }
    }
}

impl fmt::Debug for StringText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringText({} bytes)", self.text.len())
    }
}
