//! Literal decoding: string escapes, identifier escapes and numeric values.
//!
//! These run on token text that the scanner has already delimited, so they
//! never report diagnostics; malformed escapes were reported during the
//! scan and decode to their literal characters here.

use tide_lexer_core::char_class::hex_value;

/// Decode `count` hex digits from the front of `chars`, consuming them only
/// on success.
fn decode_hex(chars: &mut std::str::Chars<'_>, count: usize) -> Option<char> {
    let mut lookahead = chars.clone();
    let mut value = 0u32;
    for _ in 0..count {
        let digit = lookahead.next().and_then(|c| u8::try_from(c).ok()).and_then(hex_value)?;
        value = value * 16 + digit;
    }
    *chars = lookahead;
    Some(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER))
}

/// Contents of a string literal with quotes removed and escapes resolved.
///
/// `text` is the literal as written, including the opening quote; a missing
/// closing quote (unterminated literal) is tolerated.
pub fn decode_string_literal(text: &str) -> String {
    let mut chars = text.chars();
    let Some(quote) = chars.next() else {
        return String::new();
    };

    let mut result = String::with_capacity(text.len());
    while let Some(c) = chars.next() {
        match c {
            c if c == quote => break,
            '\\' => decode_escape(&mut chars, &mut result),
            c => result.push(c),
        }
    }
    result
}

fn decode_escape(chars: &mut std::str::Chars<'_>, result: &mut String) {
    let Some(c) = chars.next() else {
        return;
    };
    match c {
        'b' => result.push('\u{08}'),
        'f' => result.push('\u{0C}'),
        'n' => result.push('\n'),
        'r' => result.push('\r'),
        't' => result.push('\t'),
        'v' => result.push('\u{0B}'),
        '0' => result.push('\0'),
        'x' => result.push(decode_hex(chars, 2).unwrap_or('x')),
        'u' => result.push(decode_hex(chars, 4).unwrap_or('u')),
        // Line continuations contribute nothing.
        '\r' => {
            if chars.clone().next() == Some('\n') {
                chars.next();
            }
        }
        '\n' | '\u{2028}' | '\u{2029}' => {}
        other => result.push(other),
    }
}

/// Identifier text with `\uXXXX` escapes resolved.
pub fn decode_identifier(text: &str) -> String {
    if !text.contains('\\') {
        return text.to_string();
    }
    let mut chars = text.chars();
    let mut result = String::with_capacity(text.len());
    while let Some(c) = chars.next() {
        if c == '\\' {
            let mut lookahead = chars.clone();
            if lookahead.next() == Some('u') {
                if let Some(decoded) = decode_hex(&mut lookahead, 4) {
                    result.push(decoded);
                    chars = lookahead;
                    continue;
                }
            }
        }
        result.push(c);
    }
    result
}

/// Numeric value of a numeric literal (`0x1F`, `42`, `1.5e-3`, `.5`).
///
/// Returns `NaN` for text that is not a numeric literal.
pub fn parse_numeric_literal(text: &str) -> f64 {
    let bytes = text.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' && matches!(bytes[1], b'x' | b'X') {
        return bytes[2..].iter().try_fold(0f64, |acc, &b| {
            hex_value(b).map(|digit| acc * 16.0 + f64::from(digit))
        })
        .unwrap_or(f64::NAN);
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Render a number the way the value text of a numeric literal reads:
/// integral values without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
