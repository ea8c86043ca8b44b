//! Packed trivia summary.
//!
//! Tokens never store their trivia; they store how wide it is and whether it
//! contains a comment or a line break, packed into one `u32`. The trivia
//! itself is re-scanned from the source on demand.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// What a run of trivia contains.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TriviaFlags: u32 {
        const HAS_COMMENT = 1 << 0;
        const HAS_NEWLINE = 1 << 1;
    }
}

/// Trivia width and flags packed as `(width << 2) | flags`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(transparent)]
pub struct TriviaInfo(u32);

tide_ir::static_assert_size!(TriviaInfo, 4);

impl TriviaInfo {
    /// No trivia.
    pub const NONE: TriviaInfo = TriviaInfo(0);

    /// Largest representable width in bytes.
    pub const MAX_WIDTH: u32 = (1 << 30) - 1;

    const FLAG_BITS: u32 = 2;
    const FLAG_MASK: u32 = (1 << Self::FLAG_BITS) - 1;

    /// Pack `width` and `flags`. Widths past [`Self::MAX_WIDTH`] saturate;
    /// callers holding wider trivia must keep the exact width elsewhere.
    #[inline]
    pub fn new(width: u32, flags: TriviaFlags) -> Self {
        TriviaInfo((width.min(Self::MAX_WIDTH) << Self::FLAG_BITS) | flags.bits())
    }

    /// Whether `width` can be packed without saturating.
    #[inline]
    pub const fn fits(width: u32) -> bool {
        width <= Self::MAX_WIDTH
    }

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TriviaInfo(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn width(self) -> u32 {
        self.0 >> Self::FLAG_BITS
    }

    #[inline]
    pub fn flags(self) -> TriviaFlags {
        TriviaFlags::from_bits_truncate(self.0 & Self::FLAG_MASK)
    }

    #[inline]
    pub const fn has_comment(self) -> bool {
        self.0 & TriviaFlags::HAS_COMMENT.bits() != 0
    }

    #[inline]
    pub const fn has_newline(self) -> bool {
        self.0 & TriviaFlags::HAS_NEWLINE.bits() != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width() == 0
    }
}

impl fmt::Debug for TriviaInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TriviaInfo(width={}, {:?})", self.width(), self.flags())
    }
}
