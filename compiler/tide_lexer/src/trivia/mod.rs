//! Trivia: whitespace, comments and line breaks between tokens.
//!
//! The scanner only records a [`TriviaInfo`](tide_lexer_core::TriviaInfo)
//! per side of each token. [`scan_trivia`] re-scans such a range into a
//! structured [`SyntaxTriviaList`] when a consumer actually asks for it.

use std::cell::RefCell;
use std::fmt;
use std::sync::OnceLock;

use smallvec::SmallVec;
use tide_lexer_core::{char_class, SlidingWindow, SourceText, TriviaFlags, TriviaInfo};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TriviaKind {
    Whitespace,
    SingleLineComment,
    MultiLineComment,
    /// One line terminator; CR LF counts as one.
    NewLine,
}

impl TriviaKind {
    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(self, TriviaKind::SingleLineComment | TriviaKind::MultiLineComment)
    }
}

/// One piece of trivia with its text.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct SyntaxTrivia {
    pub kind: TriviaKind,
    pub text: Box<str>,
}

impl SyntaxTrivia {
    pub fn new(kind: TriviaKind, text: &str) -> Self {
        SyntaxTrivia {
            kind,
            text: text.into(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        to_u32(self.text.len())
    }
}

impl fmt::Debug for SyntaxTrivia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}

/// Ordered trivia on one side of a token. Most lists hold one or two items.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct SyntaxTriviaList {
    items: SmallVec<[SyntaxTrivia; 2]>,
}

impl SyntaxTriviaList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A shared empty list.
    pub fn empty() -> &'static SyntaxTriviaList {
        static EMPTY: OnceLock<SyntaxTriviaList> = OnceLock::new();
        EMPTY.get_or_init(SyntaxTriviaList::new)
    }

    pub fn push(&mut self, trivia: SyntaxTrivia) {
        self.items.push(trivia);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SyntaxTrivia> {
        self.items.iter()
    }

    /// Total width in bytes.
    pub fn full_width(&self) -> u32 {
        self.items.iter().map(SyntaxTrivia::width).sum()
    }

    pub fn has_comment(&self) -> bool {
        self.items.iter().any(|t| t.kind.is_comment())
    }

    pub fn has_newline(&self) -> bool {
        self.items.iter().any(|t| t.kind == TriviaKind::NewLine)
    }

    /// Packed summary of this list.
    pub fn info(&self) -> TriviaInfo {
        let mut flags = TriviaFlags::empty();
        flags.set(TriviaFlags::HAS_COMMENT, self.has_comment());
        flags.set(TriviaFlags::HAS_NEWLINE, self.has_newline());
        TriviaInfo::new(self.full_width(), flags)
    }

    /// Concatenated text.
    pub fn full_text(&self) -> String {
        self.items.iter().map(|t| &*t.text).collect()
    }
}

impl FromIterator<SyntaxTrivia> for SyntaxTriviaList {
    fn from_iter<I: IntoIterator<Item = SyntaxTrivia>>(iter: I) -> Self {
        SyntaxTriviaList {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'l> IntoIterator for &'l SyntaxTriviaList {
    type Item = &'l SyntaxTrivia;
    type IntoIter = std::slice::Iter<'l, SyntaxTrivia>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// One trivia element located by the raw trivia scanner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct RawTrivia {
    pub kind: TriviaKind,
    pub start: usize,
    pub end: usize,
    /// Multi-line comment that ran into the end of the source.
    pub unterminated: bool,
}

/// Scan one trivia element at the window's cursor.
///
/// Returns `None`, leaving the cursor untouched, if the cursor is not on
/// trivia. Whitespace runs are one element; each line terminator is its own
/// element.
pub(crate) fn scan_raw_trivia(window: &mut SlidingWindow<'_>) -> Option<RawTrivia> {
    let start = window.absolute_index();
    let b = window.current_item();
    if window.is_at_end_of_source() {
        return None;
    }

    let (kind, unterminated) = match b {
        b'\r' => {
            window.move_to_next_item();
            if window.current_item() == b'\n' {
                window.move_to_next_item();
            }
            (TriviaKind::NewLine, false)
        }
        b'\n' => {
            window.move_to_next_item();
            (TriviaKind::NewLine, false)
        }
        b'/' => match window.peek_item_n(1) {
            b'/' => {
                window.skip_to_line_end();
                (TriviaKind::SingleLineComment, false)
            }
            b'*' => {
                let terminated = skip_multi_line_comment(window);
                (TriviaKind::MultiLineComment, !terminated)
            }
            _ => return None,
        },
        b if b.is_ascii() => {
            if !char_class::is_ascii_whitespace(b) {
                return None;
            }
            skip_whitespace(window);
            (TriviaKind::Whitespace, false)
        }
        _ => {
            let ch = window.current_char()?;
            if char_class::is_line_terminator(ch) {
                window.advance_char();
                (TriviaKind::NewLine, false)
            } else if char_class::is_whitespace(ch) {
                skip_whitespace(window);
                (TriviaKind::Whitespace, false)
            } else {
                return None;
            }
        }
    };

    Some(RawTrivia {
        kind,
        start,
        end: window.absolute_index(),
        unterminated,
    })
}

fn skip_whitespace(window: &mut SlidingWindow<'_>) {
    loop {
        let b = window.current_item();
        if b.is_ascii() {
            if window.is_at_end_of_source() || !char_class::is_ascii_whitespace(b) {
                return;
            }
            window.move_to_next_item();
        } else {
            match window.current_char() {
                Some(ch) if char_class::is_whitespace(ch) => window.advance_char(),
                _ => return,
            }
        }
    }
}

/// Skip `/* ... */`. Returns `false` if the source ended first.
fn skip_multi_line_comment(window: &mut SlidingWindow<'_>) -> bool {
    window.advance_n(2);
    loop {
        if window.is_at_end_of_source() {
            return false;
        }
        if window.current_item() == b'*' && window.peek_item_n(1) == b'/' {
            window.advance_n(2);
            return true;
        }
        window.move_to_next_item();
    }
}

/// Window capacity used when materializing trivia.
const TRIVIA_WINDOW_CAPACITY: usize = 256;

thread_local! {
    /// Window buffer reused across `scan_trivia` calls on this thread.
    static TRIVIA_WINDOW_BUFFER: RefCell<Vec<u8>> = const { RefCell::new(Vec::new()) };
}

/// Re-scan `length` bytes of trivia starting at `start` into a list.
///
/// Trailing trivia stops after its first line terminator, matching how the
/// scanner delimited it.
pub fn scan_trivia(
    text: &dyn SourceText,
    start: u32,
    length: u32,
    is_trailing: bool,
) -> SyntaxTriviaList {
    let mut list = SyntaxTriviaList::new();
    if length == 0 {
        return list;
    }

    let mut buffer = TRIVIA_WINDOW_BUFFER.with(|cell| std::mem::take(&mut *cell.borrow_mut()));
    if buffer.capacity() < TRIVIA_WINDOW_CAPACITY {
        buffer.reserve(TRIVIA_WINDOW_CAPACITY);
    }

    let mut window = SlidingWindow::with_buffer(text, buffer);
    window.set_absolute_index(start as usize);
    let end = start as usize + length as usize;
    while window.absolute_index() < end {
        let Some(raw) = scan_raw_trivia(&mut window) else {
            break;
        };
        list.push(SyntaxTrivia::new(
            raw.kind,
            text.substr(raw.start, raw.end - raw.start),
        ));
        if is_trailing && raw.kind == TriviaKind::NewLine {
            break;
        }
    }

    let buffer = window.into_buffer();
    TRIVIA_WINDOW_BUFFER.with(|cell| *cell.borrow_mut() = buffer);
    list
}

#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
