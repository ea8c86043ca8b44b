use super::*;
use tide_ir::{ParseOptions, SyntaxKind};
use tide_lexer::tokenize;
use tide_lexer_core::StringText;

fn eligibility(text: &str) -> Vec<(SyntaxKind, bool)> {
    let source = StringText::new(text);
    tokenize("test.ts", &source, ParseOptions::default())
        .tokens
        .iter()
        .map(|token| (token.kind(), is_reuse_eligible(token)))
        .collect()
}

#[test]
fn ordinary_tokens_are_eligible() {
    assert!(eligibility("var x = 1;")
        .iter()
        .filter(|(kind, _)| *kind != SyntaxKind::EndOfFileToken)
        .all(|(_, eligible)| *eligible));
}

#[test]
fn end_of_file_is_never_reused() {
    assert_eq!(
        eligibility("x").last(),
        Some(&(SyntaxKind::EndOfFileToken, false))
    );
}

#[test]
fn slash_kinds_are_never_reused() {
    let tokens = eligibility("a / b; c /= d; e = /re/g");
    for (kind, eligible) in tokens {
        if kind.is_regex_ambiguous() {
            assert!(!eligible, "{kind:?}");
        }
    }
}

#[test]
fn realized_tokens_are_never_reused() {
    let tokens = eligibility("x = 'open");
    assert_eq!(tokens[2], (SyntaxKind::StringLiteral, false));
}
