//! Character classification.
//!
//! ASCII and lead-byte classes come from a 256-entry byte table built once
//! per process ([`initialize`] builds it eagerly; every accessor builds it on
//! first use otherwise). Non-ASCII identifier characters are classified with
//! `unicode-ident` (`XID_Start` / `XID_Continue`).

use std::sync::OnceLock;

use tide_ir::SyntaxKind;

const WHITESPACE: u8 = 1 << 0;
const LINE_TERMINATOR: u8 = 1 << 1;
const IDENT_START: u8 = 1 << 2;
const IDENT_PART: u8 = 1 << 3;
const DECIMAL_DIGIT: u8 = 1 << 4;
const HEX_DIGIT: u8 = 1 << 5;
const KEYWORD_START: u8 = 1 << 6;
const PUNCTUATION_START: u8 = 1 << 7;

/// Per-byte class bits.
pub struct CharTables {
    bytes: [u8; 256],
}

static TABLES: OnceLock<CharTables> = OnceLock::new();

/// Build the process-wide tables now. Idempotent and thread-safe.
pub fn initialize() {
    tables();
}

#[inline]
fn tables() -> &'static CharTables {
    TABLES.get_or_init(CharTables::build)
}

impl CharTables {
    fn build() -> Self {
        let mut bytes = [0u8; 256];
        for b in [b'\t', 0x0B, 0x0C, b' '] {
            bytes[usize::from(b)] |= WHITESPACE;
        }
        bytes[usize::from(b'\n')] |= LINE_TERMINATOR;
        bytes[usize::from(b'\r')] |= LINE_TERMINATOR;
        for b in (b'a'..=b'z').chain(b'A'..=b'Z').chain([b'$', b'_']) {
            bytes[usize::from(b)] |= IDENT_START | IDENT_PART;
        }
        for b in b'0'..=b'9' {
            bytes[usize::from(b)] |= IDENT_PART | DECIMAL_DIGIT | HEX_DIGIT;
        }
        for b in (b'a'..=b'f').chain(b'A'..=b'F') {
            bytes[usize::from(b)] |= HEX_DIGIT;
        }
        for kind in SyntaxKind::KEYWORDS {
            if let Some(&first) = kind.text().and_then(|t| t.as_bytes().first()) {
                bytes[usize::from(first)] |= KEYWORD_START;
            }
        }
        for kind in SyntaxKind::PUNCTUATION {
            if let Some(&first) = kind.text().and_then(|t| t.as_bytes().first()) {
                bytes[usize::from(first)] |= PUNCTUATION_START;
            }
        }
        CharTables { bytes }
    }

    #[inline]
    fn has(&self, b: u8, class: u8) -> bool {
        self.bytes[usize::from(b)] & class != 0
    }
}

// === Byte classes ===

/// ASCII whitespace: tab, vertical tab, form feed, space.
#[inline]
pub fn is_ascii_whitespace(b: u8) -> bool {
    tables().has(b, WHITESPACE)
}

/// LF or CR.
#[inline]
pub fn is_ascii_line_terminator(b: u8) -> bool {
    tables().has(b, LINE_TERMINATOR)
}

#[inline]
pub fn is_ascii_identifier_start(b: u8) -> bool {
    tables().has(b, IDENT_START)
}

#[inline]
pub fn is_ascii_identifier_part(b: u8) -> bool {
    tables().has(b, IDENT_PART)
}

#[inline]
pub fn is_decimal_digit(b: u8) -> bool {
    tables().has(b, DECIMAL_DIGIT)
}

#[inline]
pub fn is_hex_digit(b: u8) -> bool {
    tables().has(b, HEX_DIGIT)
}

/// First byte of some keyword.
#[inline]
pub fn is_keyword_start(b: u8) -> bool {
    tables().has(b, KEYWORD_START)
}

/// First byte of some punctuation token.
#[inline]
pub fn is_punctuation_start(b: u8) -> bool {
    tables().has(b, PUNCTUATION_START)
}

/// Numeric value of a hex digit byte.
#[inline]
pub fn hex_value(b: u8) -> Option<u32> {
    char::from(b).to_digit(16)
}

// === Character classes ===

/// Whitespace: the ASCII set plus NBSP, BOM, and the Unicode space
/// separators U+1680, U+2000..=U+200A, U+202F, U+205F, U+3000.
pub fn is_whitespace(ch: char) -> bool {
    if ch.is_ascii() {
        return is_ascii_whitespace(ch as u8);
    }
    matches!(
        ch,
        '\u{00A0}'
            | '\u{FEFF}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// LF, CR, LINE SEPARATOR or PARAGRAPH SEPARATOR.
pub fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

pub fn is_identifier_start(ch: char) -> bool {
    if ch.is_ascii() {
        return is_ascii_identifier_start(ch as u8);
    }
    unicode_ident::is_xid_start(ch)
}

/// Identifier start characters, digits, `XID_Continue`, ZWNJ and ZWJ.
pub fn is_identifier_part(ch: char) -> bool {
    if ch.is_ascii() {
        return is_ascii_identifier_part(ch as u8);
    }
    unicode_ident::is_xid_continue(ch) || matches!(ch, '\u{200C}' | '\u{200D}')
}
