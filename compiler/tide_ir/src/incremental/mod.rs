//! Incremental re-lexing support.
//!
//! Types for describing a text edit and deciding which regions of the old
//! token stream it invalidates.
//!
//! 1. **Text change** - the edit itself: `[start, old_end)` of the old text
//!    replaced by `new_len` bytes.
//! 2. **Change marker** - the affected region of the old text, widened
//!    backward by a lookahead margin.

use crate::Span;

/// A single text edit.
///
/// Represents a change where a region `[start, old_end)` in the old text is
/// replaced with `new_len` bytes of new text.
///
/// # Examples
///
/// ```
/// use tide_ir::incremental::TextChange;
///
/// // Insert 5 bytes at position 10
/// let insert = TextChange::insert(10, 5);
/// assert_eq!(insert.delta(), 5);
///
/// // Delete 3 bytes starting at position 5
/// let delete = TextChange::delete(5, 3);
/// assert_eq!(delete.delta(), -3);
///
/// // Replace 3 bytes with 5 bytes at position 0
/// let replace = TextChange::replace(0, 3, 5);
/// assert_eq!(replace.delta(), 2);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TextChange {
    /// Start byte offset in old text.
    pub start: u32,
    /// End byte offset in old text (exclusive).
    pub old_end: u32,
    /// Length of replacement text in bytes.
    pub new_len: u32,
}

impl TextChange {
    #[inline]
    pub const fn new(start: u32, old_end: u32, new_len: u32) -> Self {
        TextChange {
            start,
            old_end,
            new_len,
        }
    }

    /// Create an insertion (no bytes removed).
    #[inline]
    pub const fn insert(at: u32, len: u32) -> Self {
        TextChange::new(at, at, len)
    }

    /// Create a deletion (no bytes inserted).
    #[inline]
    pub const fn delete(start: u32, len: u32) -> Self {
        TextChange::new(start, start + len, 0)
    }

    /// Create a replacement.
    #[inline]
    pub const fn replace(start: u32, old_len: u32, new_len: u32) -> Self {
        TextChange::new(start, start + old_len, new_len)
    }

    /// Derive the minimal change between two texts by trimming their common
    /// prefix and suffix.
    ///
    /// Returns `None` when the texts are identical. Offsets snap to char
    /// boundaries of both texts.
    pub fn between(old: &str, new: &str) -> Option<TextChange> {
        if old == new {
            return None;
        }
        let old_bytes = old.as_bytes();
        let new_bytes = new.as_bytes();

        let mut prefix = old_bytes
            .iter()
            .zip(new_bytes)
            .take_while(|(a, b)| a == b)
            .count();
        while !(old.is_char_boundary(prefix) && new.is_char_boundary(prefix)) {
            prefix -= 1;
        }

        let max_suffix = old_bytes.len().min(new_bytes.len()) - prefix;
        let mut suffix = old_bytes
            .iter()
            .rev()
            .zip(new_bytes.iter().rev())
            .take(max_suffix)
            .take_while(|(a, b)| a == b)
            .count();
        while !(old.is_char_boundary(old.len() - suffix)
            && new.is_char_boundary(new.len() - suffix))
        {
            suffix -= 1;
        }

        let start = u32::try_from(prefix).ok()?;
        let old_end = u32::try_from(old.len() - suffix).ok()?;
        let new_len = u32::try_from(new.len() - suffix - prefix).ok()?;
        Some(TextChange::new(start, old_end, new_len))
    }

    /// Net change in document length (positive = grew, negative = shrank).
    #[inline]
    pub fn delta(&self) -> i64 {
        i64::from(self.new_len) - i64::from(self.old_end - self.start)
    }

    /// New end position after the change is applied.
    #[inline]
    pub const fn new_end(&self) -> u32 {
        self.start + self.new_len
    }

    /// Map a position in the new text back to the old text.
    ///
    /// Positions before the edit map to themselves, positions at or past the
    /// end of the inserted text shift back by the delta, and positions inside
    /// the inserted text have no counterpart.
    #[inline]
    pub fn new_to_old(&self, pos: u32) -> Option<u32> {
        if pos < self.start {
            Some(pos)
        } else if pos >= self.new_end() {
            u32::try_from(i64::from(pos) - self.delta()).ok()
        } else {
            None
        }
    }
}

/// The region of the old text an edit invalidates.
///
/// Any token whose span intersects the affected region must be rescanned.
/// Tokens entirely before or after it can be reused.
///
/// # Lookahead margin
///
/// Scanning a token inspects a few bytes past its end (an identifier stops
/// at the first non-identifier byte, a number peeks at an exponent sign).
/// The affected region is therefore extended backward from the change start
/// by a margin, so a token that ends just before the edit is rescanned too.
///
/// # Examples
///
/// ```
/// use tide_ir::incremental::{ChangeMarker, TextChange};
/// use tide_ir::Span;
///
/// let change = TextChange::replace(100, 10, 15);
/// let marker = ChangeMarker::from_change(&change, 16);
///
/// assert_eq!(marker.affected_start, 84);
/// assert!(marker.is_unaffected(Span::new(50, 84)));
/// assert!(!marker.is_unaffected(Span::new(80, 90)));
/// assert!(marker.is_unaffected(Span::new(110, 120)));
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ChangeMarker {
    /// Start of the affected region (earlier than the change start by the
    /// lookahead margin).
    pub affected_start: u32,
    /// End of the affected region in the old text.
    pub affected_end: u32,
}

impl ChangeMarker {
    /// Default lookahead margin in bytes.
    pub const DEFAULT_LOOKAHEAD: u32 = 16;

    /// Create a marker from a text change, widened backward by `lookahead`.
    #[inline]
    pub fn from_change(change: &TextChange, lookahead: u32) -> Self {
        ChangeMarker {
            affected_start: change.start.saturating_sub(lookahead),
            affected_end: change.old_end,
        }
    }

    /// Whether a token spanning `span` in the old text survives the edit:
    /// it lies entirely before or entirely after the affected region.
    #[inline]
    pub fn is_unaffected(&self, span: Span) -> bool {
        span.end <= self.affected_start || span.start >= self.affected_end
    }
}

#[cfg(test)]
mod tests;
