use super::*;
use pretty_assertions::assert_eq;
use tide_diagnostic::DiagnosticCode;
use tide_lexer_core::StringText;

use crate::token::TokenShape;

fn scanner(source: &StringText) -> Scanner<'_> {
    Scanner::new(Arc::from("test.ts"), source, ParseOptions::default())
}

/// Scan a single token from the start of `text`.
fn scan_one(text: &str, allow_regex: bool) -> (SyntaxToken, Vec<Diagnostic>) {
    let source = StringText::new(text);
    let mut diagnostics = Vec::new();
    let token = scanner(&source).scan(&mut diagnostics, allow_regex);
    (token, diagnostics)
}

/// Scan all tokens with a fixed regex flag, returning (kind, text) pairs.
fn scan_all(text: &str, allow_regex: bool) -> Vec<(SyntaxKind, String)> {
    let source = StringText::new(text);
    let mut scanner = scanner(&source);
    let mut diagnostics = Vec::new();
    let mut result = Vec::new();
    loop {
        let token = scanner.scan(&mut diagnostics, allow_regex);
        let kind = token.kind();
        if kind == SyntaxKind::EndOfFileToken {
            return result;
        }
        result.push((kind, token.text(&source).to_string()));
    }
}

fn kinds(text: &str) -> Vec<SyntaxKind> {
    scan_all(text, false).into_iter().map(|(kind, _)| kind).collect()
}

// === Trivia ===

#[test]
fn trailing_trivia_ends_after_first_newline() {
    let source = StringText::new("x /*c*/\n\n  y");
    let mut scanner = scanner(&source);
    let mut diagnostics = Vec::new();

    let x = scanner.scan(&mut diagnostics, false);
    assert_eq!(x.kind(), SyntaxKind::IdentifierName);
    assert_eq!((x.full_start(), x.start(), x.width()), (0, 0, 1));
    assert_eq!(x.trailing_trivia_width(), 7);
    assert!(x.has_trailing_comment());
    assert!(x.has_trailing_newline());
    assert_eq!(x.shape(), TokenShape::VariableWithTrailing);

    let y = scanner.scan(&mut diagnostics, false);
    assert_eq!((y.full_start(), y.start(), y.width()), (8, 11, 1));
    assert_eq!(y.leading_trivia_width(), 3);
    assert!(y.has_leading_newline());
    assert!(!y.has_leading_comment());
    assert_eq!(y.shape(), TokenShape::VariableWithLeading);

    let eof = scanner.scan(&mut diagnostics, false);
    assert_eq!(eof.kind(), SyntaxKind::EndOfFileToken);
    assert_eq!((eof.full_start(), eof.full_width()), (12, 0));
    assert_eq!(eof.shape(), TokenShape::Fixed);
    assert!(diagnostics.is_empty());
}

#[test]
fn leading_trivia_takes_every_newline() {
    let (token, _) = scan_one("\n\r\n  // c\n x", false);
    assert_eq!(token.leading_trivia_width(), 11);
    assert!(token.has_leading_newline());
    assert!(token.has_leading_comment());
}

#[test]
fn unicode_separators_are_newlines() {
    let source = StringText::new("a\u{2028}b");
    let mut scanner = scanner(&source);
    let mut diagnostics = Vec::new();
    let a = scanner.scan(&mut diagnostics, false);
    assert_eq!(a.trailing_trivia_width(), 3);
    assert!(a.has_trailing_newline());
    let b = scanner.scan(&mut diagnostics, false);
    assert_eq!(b.full_start(), 4);
}

#[test]
fn byte_order_mark_is_whitespace() {
    let (token, diagnostics) = scan_one("\u{feff}\u{a0}x", false);
    assert_eq!(token.leading_trivia_width(), 5);
    assert_eq!(token.kind(), SyntaxKind::IdentifierName);
    assert!(diagnostics.is_empty());
}

#[test]
fn unterminated_comment_is_reported_at_end() {
    let source = StringText::new("a /* b");
    let mut scanner = scanner(&source);
    let mut diagnostics = Vec::new();
    let a = scanner.scan(&mut diagnostics, false);
    assert_eq!(a.full_width(), 6);
    assert!(a.is_realized());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, DiagnosticCode::UnterminatedComment);
    assert_eq!((diagnostics[0].start, diagnostics[0].length), (6, 0));
    assert_eq!(
        scanner.scan(&mut diagnostics, false).kind(),
        SyntaxKind::EndOfFileToken
    );
}

// === Identifiers and keywords ===

#[test]
fn keyword_requires_whole_identifier() {
    assert_eq!(kinds("forEach"), vec![SyntaxKind::IdentifierName]);
    assert_eq!(kinds("for"), vec![SyntaxKind::ForKeyword]);
    assert_eq!(
        kinds("for(x"),
        vec![
            SyntaxKind::ForKeyword,
            SyntaxKind::OpenParenToken,
            SyntaxKind::IdentifierName
        ]
    );
    assert_eq!(kinds("$for _if"), vec![SyntaxKind::IdentifierName; 2]);
}

#[test]
fn keywords_are_fixed_width() {
    let (token, _) = scan_one("instanceof ", false);
    assert_eq!(token.kind(), SyntaxKind::InstanceofKeyword);
    assert_eq!(token.shape(), TokenShape::FixedWithTrailing);
    assert_eq!(token.width(), 10);
}

#[test]
fn contextual_keywords_scan_as_keywords() {
    assert_eq!(
        kinds("get set module"),
        vec![
            SyntaxKind::GetKeyword,
            SyntaxKind::SetKeyword,
            SyntaxKind::ModuleKeyword
        ]
    );
}

#[test]
fn non_ascii_identifier_uses_slow_path() {
    let tokens = scan_all("caf\u{e9} x\u{2163}", false);
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::IdentifierName, "caf\u{e9}".to_string()),
            (SyntaxKind::IdentifierName, "x\u{2163}".to_string()),
        ]
    );
}

#[test]
fn escaped_identifier_is_never_a_keyword() {
    let (token, diagnostics) = scan_one("\\u0069f", false);
    assert!(diagnostics.is_empty());
    assert_eq!(token.kind(), SyntaxKind::IdentifierName);
    assert_eq!(token.width(), 7);

    let source = StringText::new("a\\u0062c");
    let token = scanner(&source).scan(&mut Vec::new(), false);
    assert_eq!(token.width(), 8);
    assert_eq!(token.value_text(&source), "abc");
}

#[test]
fn stray_backslash_is_unexpected() {
    let tokens = scan_all("\\x41", false);
    assert_eq!(tokens[0], (SyntaxKind::ErrorToken, "\\".to_string()));
    assert_eq!(tokens[1], (SyntaxKind::IdentifierName, "x41".to_string()));
}

// === Literals ===

#[test]
fn numeric_literal_forms() {
    let cases = [
        ("0x1F", 4),
        ("0XaB", 4),
        ("42", 2),
        ("1.5", 3),
        ("1.5e+10", 7),
        ("2E-3", 4),
        ("3e8", 3),
        (".5", 2),
        ("1.", 2),
    ];
    for (text, width) in cases {
        let (token, _) = scan_one(text, false);
        assert_eq!(token.kind(), SyntaxKind::NumericLiteral, "{text}");
        assert_eq!(token.width(), width, "{text}");
    }
}

#[test]
fn exponent_needs_digits() {
    assert_eq!(
        scan_all("1e", false),
        vec![
            (SyntaxKind::NumericLiteral, "1".to_string()),
            (SyntaxKind::IdentifierName, "e".to_string()),
        ]
    );
    assert_eq!(
        kinds("1e+"),
        vec![
            SyntaxKind::NumericLiteral,
            SyntaxKind::IdentifierName,
            SyntaxKind::PlusToken
        ]
    );
}

#[test]
fn hex_prefix_needs_a_digit() {
    assert_eq!(
        scan_all("0x", false),
        vec![
            (SyntaxKind::NumericLiteral, "0".to_string()),
            (SyntaxKind::IdentifierName, "x".to_string()),
        ]
    );
}

#[test]
fn string_literal_with_escapes() {
    let source = StringText::new(r#"'a\'b\n' "c""#);
    let mut scanner = scanner(&source);
    let mut diagnostics = Vec::new();
    let first = scanner.scan(&mut diagnostics, false);
    assert_eq!(first.kind(), SyntaxKind::StringLiteral);
    assert_eq!(first.text(&source), r"'a\'b\n'");
    assert_eq!(first.value_text(&source), "a'b\n");
    let second = scanner.scan(&mut diagnostics, false);
    assert_eq!(second.text(&source), "\"c\"");
    assert!(diagnostics.is_empty());
}

#[test]
fn line_continuation_stays_in_string() {
    for (text, width) in [("'a\\\nb'", 6), ("'a\\\r\nb'", 7), ("'a\\\u{2029}b'", 8)] {
        let (token, diagnostics) = scan_one(text, false);
        assert!(diagnostics.is_empty(), "{text:?}");
        assert_eq!(token.kind(), SyntaxKind::StringLiteral);
        assert_eq!(token.width(), width, "{text:?}");
    }
}

#[test]
fn unterminated_string_at_end_of_source() {
    let (token, diagnostics) = scan_one("\"abc", false);
    assert_eq!(token.kind(), SyntaxKind::StringLiteral);
    assert_eq!(token.width(), 4);
    assert!(token.is_realized());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, DiagnosticCode::MissingClosingQuote);
    assert_eq!((diagnostics[0].start, diagnostics[0].length), (4, 1));
}

#[test]
fn unterminated_string_stops_at_newline() {
    let source = StringText::new("'ab\ncd");
    let mut scanner = scanner(&source);
    let mut diagnostics = Vec::new();
    let string = scanner.scan(&mut diagnostics, false);
    assert_eq!(string.text(&source), "'ab");
    assert!(string.has_trailing_newline());
    assert_eq!(diagnostics[0].start, 3);
    let next = scanner.scan(&mut diagnostics, false);
    assert_eq!(next.text(&source), "cd");
    assert!(!next.is_realized());
}

#[test]
fn bad_hex_escape_spans_the_escape() {
    let (token, diagnostics) = scan_one(r#""\x4""#, false);
    assert_eq!(token.width(), 5);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, DiagnosticCode::HexadecimalDigitExpected);
    assert_eq!((diagnostics[0].start, diagnostics[0].length), (1, 3));

    let (_, diagnostics) = scan_one("\"\\u12G4\"", false);
    assert_eq!((diagnostics[0].start, diagnostics[0].length), (1, 4));
}

// === Divide and regular expressions ===

#[test]
fn slash_follows_the_caller() {
    let (divide, _) = scan_one("/ab/g", false);
    assert_eq!(divide.kind(), SyntaxKind::SlashToken);
    assert_eq!(divide.width(), 1);

    let (regex, _) = scan_one("/ab/g", true);
    assert_eq!(regex.kind(), SyntaxKind::RegularExpressionLiteral);
    assert_eq!(regex.width(), 5);
}

#[test]
fn slash_equals_or_regex() {
    assert_eq!(scan_one("/=x/", false).0.kind(), SyntaxKind::SlashEqualsToken);
    let (regex, _) = scan_one("/=x/", true);
    assert_eq!(regex.kind(), SyntaxKind::RegularExpressionLiteral);
    assert_eq!(regex.width(), 4);
}

#[test]
fn regex_class_and_escape_hide_slashes() {
    assert_eq!(scan_one("/[/]/", true).0.width(), 5);
    assert_eq!(scan_one(r"/a\/b/ ", true).0.width(), 6);
}

#[test]
fn failed_regex_falls_back_silently() {
    let source = StringText::new("/ab\n/");
    let mut scanner = scanner(&source);
    let mut diagnostics = Vec::new();
    let slash = scanner.scan(&mut diagnostics, true);
    assert_eq!(slash.kind(), SyntaxKind::SlashToken);
    assert_eq!(slash.full_width(), 1);
    assert!(diagnostics.is_empty());
    let ab = scanner.scan(&mut diagnostics, false);
    assert_eq!(ab.text(&source), "ab");
}

#[test]
fn unterminated_regex_at_end_is_divide() {
    let (token, diagnostics) = scan_one("/abc", true);
    assert_eq!(token.kind(), SyntaxKind::SlashToken);
    assert!(diagnostics.is_empty());
}

// === Punctuation ===

#[test]
fn punctuation_is_greedy() {
    assert_eq!(
        kinds(">>>= >>> >>= >> >= > => === !== == != ++ -- && || <<= << <="),
        vec![
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken,
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken,
            SyntaxKind::GreaterThanGreaterThanEqualsToken,
            SyntaxKind::GreaterThanGreaterThanToken,
            SyntaxKind::GreaterThanEqualsToken,
            SyntaxKind::GreaterThanToken,
            SyntaxKind::EqualsGreaterThanToken,
            SyntaxKind::EqualsEqualsEqualsToken,
            SyntaxKind::ExclamationEqualsEqualsToken,
            SyntaxKind::EqualsEqualsToken,
            SyntaxKind::ExclamationEqualsToken,
            SyntaxKind::PlusPlusToken,
            SyntaxKind::MinusMinusToken,
            SyntaxKind::AmpersandAmpersandToken,
            SyntaxKind::BarBarToken,
            SyntaxKind::LessThanLessThanEqualsToken,
            SyntaxKind::LessThanLessThanToken,
            SyntaxKind::LessThanEqualsToken,
        ]
    );
}

#[test]
fn dots() {
    assert_eq!(kinds("..."), vec![SyntaxKind::DotDotDotToken]);
    assert_eq!(kinds(".."), vec![SyntaxKind::DotToken, SyntaxKind::DotToken]);
    assert_eq!(
        kinds("a.b"),
        vec![
            SyntaxKind::IdentifierName,
            SyntaxKind::DotToken,
            SyntaxKind::IdentifierName
        ]
    );
}

#[test]
fn every_punctuation_scans_to_itself() {
    for kind in SyntaxKind::PUNCTUATION {
        let Some(text) = kind.text() else {
            continue;
        };
        let (token, diagnostics) = scan_one(text, false);
        assert_eq!(token.kind(), kind, "{text}");
        assert!(diagnostics.is_empty());
    }
}

// === Errors ===

#[test]
fn unexpected_character_is_one_error_token() {
    let source = StringText::new("a # b");
    let mut scanner = scanner(&source);
    let mut diagnostics = Vec::new();
    scanner.scan(&mut diagnostics, false);
    let error = scanner.scan(&mut diagnostics, false);
    assert_eq!(error.kind(), SyntaxKind::ErrorToken);
    assert_eq!((error.start(), error.width()), (2, 1));
    assert!(error.is_realized());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, DiagnosticCode::UnexpectedCharacter);
    assert_eq!((diagnostics[0].start, diagnostics[0].length), (2, 1));
}

#[test]
fn unexpected_multibyte_character() {
    let (token, diagnostics) = scan_one("\u{20ac}", false);
    assert_eq!(token.kind(), SyntaxKind::ErrorToken);
    assert_eq!(token.width(), 3);
    assert_eq!(diagnostics[0].length, 3);
}

// === Positioning ===

#[test]
fn set_absolute_index_restarts_scan() {
    let source = StringText::new("abc def");
    let mut scanner = scanner(&source);
    let mut diagnostics = Vec::new();
    scanner.scan(&mut diagnostics, false);
    scanner.scan(&mut diagnostics, false);
    scanner.set_absolute_index(4);
    let def = scanner.scan(&mut diagnostics, false);
    assert_eq!((def.full_start(), def.width()), (4, 3));
    scanner.set_absolute_index(0);
    assert_eq!(scanner.scan(&mut diagnostics, false).full_width(), 4);
}

#[test]
fn small_window_scans_long_tokens() {
    let text = format!("{} \"{}\"", "a".repeat(100), "b".repeat(100));
    let source = StringText::new(&text);
    let options = ParseOptions::default().with_window_capacity(16);
    let mut scanner = Scanner::new(Arc::from("test.ts"), &source, options);
    let mut diagnostics = Vec::new();
    assert_eq!(scanner.scan(&mut diagnostics, false).width(), 100);
    assert_eq!(scanner.scan(&mut diagnostics, false).width(), 102);
    assert!(diagnostics.is_empty());
}

#[test]
#[ignore = "allocates over 2 GiB of source and trivia text"]
fn trivia_too_wide_to_pack_realizes_the_token() {
    let width = TriviaInfo::MAX_WIDTH as usize + 1;
    let mut text = " ".repeat(width);
    text.push('x');
    let source = StringText::new(text.as_str());
    let mut diagnostics = Vec::new();
    let token = scanner(&source).scan(&mut diagnostics, false);

    assert!(diagnostics.is_empty());
    assert!(token.is_realized());
    assert_eq!(token.kind(), SyntaxKind::IdentifierName);
    assert_eq!(token.leading_trivia_width() as usize, width);
    assert_eq!(token.start() as usize, width);
    assert_eq!(token.full_width() as usize, width + 1);
}
