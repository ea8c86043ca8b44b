//! End-to-end scanning scenarios through `SyntaxTree`.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use tide_diagnostic::DiagnosticCode;
use tide_ir::{ParseOptions, SyntaxKind, TextChange};
use tide_syntax::SyntaxTree;

fn parse(text: &str) -> Arc<SyntaxTree> {
    SyntaxTree::parse("scenario.ts", text, ParseOptions::default())
}

fn token_texts(tree: &SyntaxTree) -> Vec<(SyntaxKind, String)> {
    tree.root()
        .tokens()
        .iter()
        .map(|t| (t.kind(), t.text(tree.source()).to_string()))
        .collect()
}

#[test]
fn trivia_boundary() {
    let tree = parse("x /*c*/\n\n  y");
    let tokens = tree.root().tokens();
    assert_eq!(tokens[0].full_text(tree.source()), "x /*c*/\n");
    assert_eq!(tokens[1].full_text(tree.source()), "\n  y");
    assert!(tokens[0].has_trailing_comment());
    assert!(tokens[0].has_trailing_newline());
    assert!(tokens[1].has_leading_newline());
    assert!(!tokens[1].has_leading_comment());

    let trailing: Vec<_> = tokens[0]
        .trailing_trivia(tree.source())
        .iter()
        .map(|t| t.text.to_string())
        .collect();
    assert_eq!(trailing, vec![" ", "/*c*/", "\n"]);
}

#[test]
fn keyword_boundary() {
    let tree = parse("items.forEach(for_each)");
    assert_eq!(
        token_texts(&tree)[..3],
        [
            (SyntaxKind::IdentifierName, "items".to_string()),
            (SyntaxKind::DotToken, ".".to_string()),
            (SyntaxKind::IdentifierName, "forEach".to_string()),
        ]
    );
}

#[test]
fn divide_and_regex() {
    let tree = parse("var r = a / b / c, s = /b/g.test(x) / 2;");
    let kinds: Vec<_> = tree.root().tokens().iter().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::VarKeyword,
            SyntaxKind::IdentifierName,
            SyntaxKind::EqualsToken,
            SyntaxKind::IdentifierName,
            SyntaxKind::SlashToken,
            SyntaxKind::IdentifierName,
            SyntaxKind::SlashToken,
            SyntaxKind::IdentifierName,
            SyntaxKind::CommaToken,
            SyntaxKind::IdentifierName,
            SyntaxKind::EqualsToken,
            SyntaxKind::RegularExpressionLiteral,
            SyntaxKind::DotToken,
            SyntaxKind::IdentifierName,
            SyntaxKind::OpenParenToken,
            SyntaxKind::IdentifierName,
            SyntaxKind::CloseParenToken,
            SyntaxKind::SlashToken,
            SyntaxKind::NumericLiteral,
            SyntaxKind::SemicolonToken,
            SyntaxKind::EndOfFileToken,
        ]
    );
}

#[test]
fn unterminated_string() {
    let tree = parse("s = \"abc\nnext");
    let diagnostics = tree.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, DiagnosticCode::MissingClosingQuote);
    assert_eq!((diagnostics[0].start, diagnostics[0].length), (8, 1));
    assert_eq!(
        diagnostics[0].to_string(),
        "scenario.ts(8..9): error TD1002: Missing close quote character."
    );

    let string = &tree.root().tokens()[2];
    assert!(string.is_realized());
    assert_eq!(string.text(tree.source()), "\"abc");
    assert_eq!(tree.root().tokens()[3].text(tree.source()), "next");
}

#[test]
fn values_resolve_escapes() {
    let tree = parse(r"'tab\there' 0xff 1.5e2 café");
    let values: Vec<_> = tree
        .root()
        .tokens()
        .iter()
        .map(|t| t.value_text(tree.source()))
        .collect();
    assert_eq!(values, vec!["tab\there", "255", "150", "caf\u{e9}", ""]);
}

#[test]
fn incremental_session() {
    let mut text = String::from("function f(a) {\n  return a * 2;\n}\n");
    let mut tree = parse(&text);

    let edits: [(u32, u32, &str); 4] = [
        (29, 1, "3"),
        (0, 0, "// header\n"),
        (20, 0, "/* note */ "),
        (55, 0, "f(1);\n"),
    ];
    for (start, removed, inserted) in edits {
        let change = TextChange::replace(start, removed, inserted.len() as u32);
        text.replace_range(start as usize..(start + removed) as usize, inserted);
        tree = SyntaxTree::update(&tree, Some(change), &text);

        let full = parse(&text);
        assert_eq!(token_texts(&tree), token_texts(&full));
        assert_eq!(tree.root().full_text(tree.source()), text);
        assert_eq!(tree.diagnostics(), full.diagnostics());
    }
    assert!(text.starts_with("// header\nfunction f/* note */ (a) {\n  return a * 3;"));
    assert!(text.ends_with("f(1);\n"));
}

#[test]
fn change_between_texts() {
    let old = "let a = 1;";
    let new = "let ab = 1;";
    let tree = parse(old);
    let change = TextChange::between(old, new);
    assert_eq!(change, Some(TextChange::insert(5, 1)));
    let updated = SyntaxTree::update(&tree, change, new);
    assert_eq!(updated.root().tokens()[1].text(updated.source()), "ab");
    assert_eq!(token_texts(&updated), token_texts(&parse(new)));
}
