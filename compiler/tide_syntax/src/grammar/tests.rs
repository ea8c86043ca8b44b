use super::*;
use pretty_assertions::assert_eq;
use tide_diagnostic::DiagnosticCode;
use tide_ir::ParseOptions;
use tide_lexer::tokenize;
use tide_lexer_core::StringText;

fn check(text: &str) -> Vec<(DiagnosticCode, u32, u32, String)> {
    let source = StringText::new(text);
    let tokens: Vec<_> = tokenize("test.ts", &source, ParseOptions::default())
        .tokens
        .into_iter()
        .map(Arc::new)
        .collect();
    check_delimiters(&Arc::from("test.ts"), &tokens, &source)
        .into_iter()
        .map(|d| {
            let message = d.message();
            (d.code, d.start, d.length, message)
        })
        .collect()
}

#[test]
fn balanced_is_clean() {
    assert_eq!(check("f(a[0], { b: (c) });"), vec![]);
    assert_eq!(check(""), vec![]);
}

#[test]
fn stray_closer_is_unexpected() {
    assert_eq!(
        check("a)"),
        vec![(
            DiagnosticCode::UnexpectedToken,
            1,
            1,
            "Unexpected token ')'.".to_string()
        )]
    );
}

#[test]
fn mismatched_closer_keeps_opener() {
    assert_eq!(
        check("(]"),
        vec![
            (
                DiagnosticCode::UnexpectedToken,
                1,
                1,
                "Unexpected token ']'.".to_string()
            ),
            (
                DiagnosticCode::ExpectedToken,
                2,
                0,
                "')' expected.".to_string()
            ),
        ]
    );
}

#[test]
fn unclosed_openers_expected_at_end_innermost_first() {
    assert_eq!(
        check("{ [ \n"),
        vec![
            (DiagnosticCode::ExpectedToken, 5, 0, "']' expected.".to_string()),
            (DiagnosticCode::ExpectedToken, 5, 0, "'}' expected.".to_string()),
        ]
    );
}
