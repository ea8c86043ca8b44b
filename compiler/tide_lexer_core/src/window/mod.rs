//! Sliding window over a [`SourceText`].
//!
//! The window holds a bounded, contiguous chunk of the source's bytes and an
//! absolute cursor into it. Bytes are pulled from the source on demand; bytes
//! behind the cursor are discarded when more room is needed, except for the
//! region starting at the earliest pinned position, which stays resident so
//! the scanner can rewind to it or extract it verbatim.
//!
//! # Pinning
//!
//! Pins nest: every [`get_and_pin_absolute_index`] must be balanced by a
//! [`release_and_unpin_absolute_index`]. While any pin is held, the window
//! grows (doubling) instead of discarding pinned bytes.
//!
//! # End of source
//!
//! [`current_item`] returns `0x00` once the cursor reaches the end of the
//! source. Interior NUL bytes also read as `0x00`; use
//! [`is_at_end_of_source`] to tell them apart.
//!
//! [`get_and_pin_absolute_index`]: SlidingWindow::get_and_pin_absolute_index
//! [`release_and_unpin_absolute_index`]: SlidingWindow::release_and_unpin_absolute_index
//! [`current_item`]: SlidingWindow::current_item
//! [`is_at_end_of_source`]: SlidingWindow::is_at_end_of_source

use crate::SourceText;

/// Byte returned for positions at or past the end of the source.
pub const END_OF_SOURCE: u8 = 0;

/// Returns the number of bytes in the UTF-8 character starting with `byte`.
///
/// Continuation and invalid lead bytes count as 1.
#[inline]
pub fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Bounded byte window with an absolute cursor and pin/rewind support.
pub struct SlidingWindow<'a> {
    source: &'a dyn SourceText,
    source_len: usize,
    /// Window storage; `window.len()` is the current capacity.
    window: Vec<u8>,
    /// Absolute source index of `window[0]`.
    window_absolute_start: usize,
    /// Number of valid bytes in `window`.
    window_count: usize,
    /// Cursor, relative to `window[0]`. May run past `window_count`; the
    /// next read refills.
    current_relative_index: usize,
    pinned_count: usize,
    /// Relative index of the earliest pin, if any pin is held.
    first_pinned_relative_index: Option<usize>,
}

impl<'a> SlidingWindow<'a> {
    /// Smallest capacity the window accepts.
    pub const MIN_CAPACITY: usize = 16;

    /// Create a window at position 0 with the given initial capacity.
    pub fn new(source: &'a dyn SourceText, capacity: usize) -> Self {
        Self::with_buffer(source, Vec::with_capacity(capacity))
    }

    /// Create a window that reuses `buffer`'s allocation.
    ///
    /// The buffer's capacity (at least [`Self::MIN_CAPACITY`]) becomes the
    /// window capacity; its contents are ignored.
    pub fn with_buffer(source: &'a dyn SourceText, mut buffer: Vec<u8>) -> Self {
        let capacity = buffer.capacity().max(Self::MIN_CAPACITY);
        buffer.clear();
        buffer.resize(capacity, 0);
        SlidingWindow {
            source,
            source_len: source.len(),
            window: buffer,
            window_absolute_start: 0,
            window_count: 0,
            current_relative_index: 0,
            pinned_count: 0,
            first_pinned_relative_index: None,
        }
    }

    /// Give back the window's buffer for reuse.
    pub fn into_buffer(self) -> Vec<u8> {
        self.window
    }

    #[inline]
    pub fn source(&self) -> &'a dyn SourceText {
        self.source
    }

    /// Current window capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.window.len()
    }

    #[inline]
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    #[inline]
    pub fn absolute_index(&self) -> usize {
        self.window_absolute_start + self.current_relative_index
    }

    #[inline]
    pub fn is_at_end_of_source(&self) -> bool {
        self.absolute_index() >= self.source_len
    }

    /// Byte at the cursor, or [`END_OF_SOURCE`] past the end.
    #[inline]
    pub fn current_item(&mut self) -> u8 {
        let index = self.current_relative_index;
        if index < self.window_count || self.fill_to(index) {
            self.window[self.current_relative_index]
        } else {
            END_OF_SOURCE
        }
    }

    /// Byte `n` positions past the cursor, or [`END_OF_SOURCE`] past the end.
    #[inline]
    pub fn peek_item_n(&mut self, n: usize) -> u8 {
        let target = self.current_relative_index + n;
        if target < self.window_count {
            return self.window[target];
        }
        if self.fill_to(target) {
            // Refilling may have shifted the window.
            self.window[self.current_relative_index + n]
        } else {
            END_OF_SOURCE
        }
    }

    /// Advance one byte. Does not read; refilling is lazy.
    #[inline]
    pub fn move_to_next_item(&mut self) {
        if !self.is_at_end_of_source() {
            self.current_relative_index += 1;
        }
    }

    /// Advance `n` bytes, stopping at the end of the source.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        let remaining = self.source_len - self.absolute_index().min(self.source_len);
        self.current_relative_index += n.min(remaining);
    }

    /// Move the cursor to an arbitrary absolute index.
    ///
    /// Positions inside the resident window just move the cursor. Anything
    /// else resets the window, which requires that no pin is held.
    ///
    /// # Panics
    /// Panics if `index` is past the end of the source, or if the window
    /// would have to be reset while pinned.
    pub fn set_absolute_index(&mut self, index: usize) {
        assert!(
            index <= self.source_len,
            "sliding window: index {index} past end of source ({})",
            self.source_len
        );
        let window_end = self.window_absolute_start + self.window_count;
        if index >= self.window_absolute_start && index <= window_end {
            self.current_relative_index = index - self.window_absolute_start;
            return;
        }
        assert!(
            self.pinned_count == 0,
            "sliding window: cannot move to {index} outside the window while {} pin(s) are held",
            self.pinned_count
        );
        self.window_absolute_start = index;
        self.window_count = 0;
        self.current_relative_index = 0;
    }

    /// Pin the current position and return it as an absolute index.
    pub fn get_and_pin_absolute_index(&mut self) -> usize {
        if self.pinned_count == 0 {
            self.first_pinned_relative_index = Some(self.current_relative_index);
        }
        self.pinned_count += 1;
        self.absolute_index()
    }

    /// Release one pin. `absolute_index` is the value the matching
    /// [`get_and_pin_absolute_index`](Self::get_and_pin_absolute_index)
    /// returned.
    ///
    /// # Panics
    /// Panics if no pin is held, or if `absolute_index` lies before the
    /// earliest pinned position.
    pub fn release_and_unpin_absolute_index(&mut self, absolute_index: usize) {
        assert!(
            self.pinned_count > 0,
            "sliding window: unpin of {absolute_index} without a matching pin"
        );
        self.assert_pinned(absolute_index, "unpin");
        self.pinned_count -= 1;
        if self.pinned_count == 0 {
            self.first_pinned_relative_index = None;
        }
    }

    /// Move the cursor back to a pinned absolute index. The pin stays held.
    ///
    /// # Panics
    /// Panics if `absolute_index` is not inside the pinned, resident region.
    pub fn rewind_to_pinned_index(&mut self, absolute_index: usize) {
        self.assert_pinned(absolute_index, "rewind");
        self.current_relative_index = absolute_index - self.window_absolute_start;
    }

    /// Bytes of `[start, end)` (absolute), which must be pinned and resident.
    ///
    /// # Panics
    /// Panics if any part of the range is not resident.
    pub fn pinned_bytes(&self, start: usize, end: usize) -> &[u8] {
        let window_end = self.window_absolute_start + self.window_count;
        assert!(
            start >= self.window_absolute_start && start <= end && end <= window_end,
            "sliding window: bytes {start}..{end} are not resident (window holds {}..{window_end})",
            self.window_absolute_start
        );
        let base = self.window_absolute_start;
        &self.window[start - base..end - base]
    }

    /// Decode the UTF-8 character at the cursor without advancing.
    ///
    /// Returns `None` at the end of the source or on a malformed sequence.
    pub fn current_char(&mut self) -> Option<char> {
        if self.is_at_end_of_source() {
            return None;
        }
        let lead = self.current_item();
        if lead.is_ascii() {
            return Some(char::from(lead));
        }
        let width = utf8_char_width(lead);
        let mut buf = [0u8; 4];
        for (i, slot) in buf.iter_mut().enumerate().take(width) {
            *slot = self.peek_item_n(i);
        }
        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
    }

    /// Advance past the character at the cursor (at least one byte).
    pub fn advance_char(&mut self) {
        let width = utf8_char_width(self.current_item());
        self.advance_n(width);
    }

    /// Advance to the next line terminator (LF, CR, U+2028, U+2029) or the
    /// end of the source, without consuming the terminator.
    pub fn skip_to_line_end(&mut self) {
        loop {
            if self.current_relative_index >= self.window_count
                && !self.fill_to(self.current_relative_index)
            {
                return;
            }
            let chunk = &self.window[self.current_relative_index..self.window_count];
            let found = memchr::memchr3(b'\n', b'\r', 0xE2, chunk)
                .map(|offset| (offset, chunk[offset]));
            match found {
                Some((offset, byte)) => {
                    self.current_relative_index += offset;
                    if byte != 0xE2 {
                        return;
                    }
                    // U+2028 / U+2029 are E2 80 A8 / E2 80 A9
                    if self.peek_item_n(1) == 0x80 && matches!(self.peek_item_n(2), 0xA8 | 0xA9) {
                        return;
                    }
                    self.current_relative_index += 1;
                }
                None => self.current_relative_index = self.window_count,
            }
        }
    }

    fn assert_pinned(&self, absolute_index: usize, action: &str) {
        let window_end = self.window_absolute_start + self.window_count;
        let pinned_start = self
            .first_pinned_relative_index
            .map(|relative| self.window_absolute_start + relative);
        let in_range = pinned_start
            .is_some_and(|start| absolute_index >= start && absolute_index <= window_end.max(start));
        assert!(
            in_range,
            "sliding window: cannot {action} to {absolute_index}; pinned region is {pinned_start:?}..{window_end}"
        );
    }

    /// Ensure relative index `target` is resident, refilling as needed.
    /// Returns `false` if the source ends before `target`.
    fn fill_to(&mut self, target: usize) -> bool {
        let mut target = target;
        while target >= self.window_count {
            let shift_before = self.window_absolute_start;
            if !self.add_more_items_to_window() {
                return false;
            }
            target -= self.window_absolute_start - shift_before;
        }
        true
    }

    /// Pull more bytes from the source. Returns `false` if nothing was added.
    fn add_more_items_to_window(&mut self) -> bool {
        let resident_end = self.window_absolute_start + self.window_count;
        if resident_end >= self.source_len {
            return false;
        }

        // Discard everything before the earliest pin, or before the cursor.
        let keep_from = self
            .first_pinned_relative_index
            .unwrap_or(self.current_relative_index)
            .min(self.window_count);
        if keep_from > 0 {
            self.window.copy_within(keep_from..self.window_count, 0);
            self.window_count -= keep_from;
            self.current_relative_index -= keep_from;
            self.window_absolute_start += keep_from;
            if let Some(first) = self.first_pinned_relative_index.as_mut() {
                *first -= keep_from;
            }
        }

        if self.window_count == self.window.len() {
            let doubled = self.window.len() * 2;
            self.window.resize(doubled, 0);
        }

        let free = self.window.len() - self.window_count;
        let count = (self.source_len - resident_end).min(free);
        self.source.copy_to(resident_end, &mut self.window, self.window_count, count);
        self.window_count += count;
        true
    }
}
