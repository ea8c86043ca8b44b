//! Line map: byte offset to zero-based line/character conversion.
//!
//! Line starts are computed once from the text; lookups are a binary search.
//! All four terminators the scanner recognizes start a new line: LF, CR
//! (CR LF counts once), U+2028 and U+2029.

/// Pre-computed line start table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineMap {
    /// Byte offset of each line start; `line_starts[0] == 0`.
    line_starts: Vec<u32>,
    text_len: u32,
}

impl LineMap {
    /// Build a line map from source text.
    pub fn build(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = vec![0u32];
        let mut i = 0;
        while i < bytes.len() {
            let terminator_len = match bytes[i] {
                b'\n' => 1,
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => 2,
                b'\r' => 1,
                // U+2028 / U+2029: E2 80 A8 / E2 80 A9
                0xE2 if bytes.get(i + 1) == Some(&0x80)
                    && matches!(bytes.get(i + 2), Some(0xA8 | 0xA9)) =>
                {
                    3
                }
                _ => 0,
            };
            if terminator_len == 0 {
                i += 1;
            } else {
                i += terminator_len;
                line_starts.push(to_u32(i));
            }
        }
        LineMap {
            line_starts,
            text_len: to_u32(text.len()),
        }
    }

    /// Number of lines (a text without terminators has one line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offsets of all line starts.
    pub fn line_starts(&self) -> &[u32] {
        &self.line_starts
    }

    /// Zero-based line containing `offset`. Offsets past the end clamp to the
    /// last line.
    pub fn line_of(&self, offset: u32) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        }
    }

    /// Byte offset where `line` starts, or `None` past the last line.
    pub fn line_start(&self, line: usize) -> Option<u32> {
        self.line_starts.get(line).copied()
    }

    /// Zero-based `(line, character)` of a byte offset, where `character` is
    /// the byte distance from the line start.
    pub fn line_and_character(&self, offset: u32) -> (usize, u32) {
        let offset = offset.min(self.text_len);
        let line = self.line_of(offset);
        let start = self.line_starts.get(line).copied().unwrap_or(0);
        (line, offset - start)
    }

    /// Inverse of [`line_and_character`](Self::line_and_character); clamps to
    /// the end of the text.
    pub fn position_of(&self, line: usize, character: u32) -> u32 {
        match self.line_start(line) {
            Some(start) => start.saturating_add(character).min(self.text_len),
            None => self.text_len,
        }
    }
}

#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
