use super::*;
use pretty_assertions::assert_eq;

fn parse(text: &str) -> Arc<SyntaxTree> {
    SyntaxTree::parse("test.ts", text, ParseOptions::default())
}

/// Apply `change` to `text`, inserting `inserted`.
fn edit(text: &str, change: TextChange, inserted: &str) -> String {
    assert_eq!(change.new_len as usize, inserted.len());
    format!(
        "{}{}{}",
        &text[..change.start as usize],
        inserted,
        &text[change.old_end as usize..]
    )
}

fn shape_of(tree: &SyntaxTree) -> Vec<(SyntaxKind, u32, u32)> {
    tree.root()
        .tokens()
        .iter()
        .map(|t| (t.kind(), t.full_start(), t.full_width()))
        .collect()
}

#[test]
fn reuse_rate() {
    assert!(ReuseStats::default().reuse_rate().abs() < f64::EPSILON);
    let stats = ReuseStats {
        reused: 3,
        rescanned: 1,
    };
    assert!((stats.reuse_rate() - 75.0).abs() < f64::EPSILON);
}

#[test]
fn full_parse_rescans_everything() {
    let tree = parse("a b c");
    assert_eq!(
        tree.reuse_stats(),
        ReuseStats {
            reused: 0,
            rescanned: 4
        }
    );
}

#[test]
fn tokens_far_before_edit_are_shared() {
    let text = "let first = 1;\nlet second = 2;\nlet third = 3;\n";
    let tree = parse(text);
    let change = TextChange::replace(text.len() as u32 - 3, 1, 2);
    let new_text = edit(text, change, "42");
    let updated = SyntaxTree::update(&tree, Some(change), &new_text);

    assert_eq!(shape_of(&updated), shape_of(&parse(&new_text)));
    assert!(updated.reuse_stats().reused > 0);
    for (old, new) in tree.root().tokens()[..5].iter().zip(updated.root().tokens()) {
        assert!(Arc::ptr_eq(old, new));
    }
}

#[test]
fn tokens_after_edit_are_relocated() {
    let text = "a;\nlet value = other + more;";
    let tree = parse(text);
    let change = TextChange::insert(0, 3);
    let new_text = edit(text, change, "bcd");
    let updated = SyntaxTree::update(&tree, Some(change), &new_text);

    assert_eq!(shape_of(&updated), shape_of(&parse(&new_text)));
    assert!(updated.reuse_stats().reused >= 5);
    let value = &updated.root().tokens()[3];
    assert_eq!(value.full_start(), 10);
    assert_eq!(value.text(updated.source()), "value");
}

#[test]
fn edit_inside_token_rescans_it() {
    let text = "alpha beta gamma";
    let tree = parse(text);
    let change = TextChange::insert(8, 1);
    let new_text = edit(text, change, "X");
    let updated = SyntaxTree::update(&tree, Some(change), &new_text);
    assert_eq!(updated.root().tokens()[1].text(updated.source()), "beXta");
    assert_eq!(shape_of(&updated), shape_of(&parse(&new_text)));
}

#[test]
fn regex_tokens_are_rescanned() {
    let padding = "x".repeat(40);
    let text = format!("r = /ab/g;\n{padding}");
    let tree = parse(&text);
    let change = TextChange::insert(text.len() as u32, 1);
    let new_text = format!("{text}y");
    let updated = SyntaxTree::update(&tree, Some(change), &new_text);

    let old_regex = &tree.root().tokens()[2];
    let new_regex = &updated.root().tokens()[2];
    assert_eq!(new_regex.kind(), SyntaxKind::RegularExpressionLiteral);
    assert!(!Arc::ptr_eq(old_regex, new_regex));
    assert!(Arc::ptr_eq(&tree.root().tokens()[0], &updated.root().tokens()[0]));
}

#[test]
fn edit_that_opens_a_string_matches_full_parse() {
    let text = "a = 1;\nb = 2;\nc = 3;";
    let tree = parse(text);
    let change = TextChange::insert(4, 1);
    let new_text = edit(text, change, "'");
    let updated = SyntaxTree::update(&tree, Some(change), &new_text);

    let full = parse(&new_text);
    assert_eq!(shape_of(&updated), shape_of(&full));
    assert_eq!(updated.parse_diagnostics(), full.parse_diagnostics());
    assert_eq!(updated.parse_diagnostics().len(), 1);
}

#[test]
fn edit_that_changes_divide_context_matches_full_parse() {
    // `a / b / c` becomes `( / b / c`, turning the first slash into a regex.
    let text = "a / b / c";
    let tree = parse(text);
    let change = TextChange::replace(0, 1, 1);
    let new_text = edit(text, change, "(");
    let updated = SyntaxTree::update(&tree, Some(change), &new_text);
    assert_eq!(
        updated.root().tokens()[1].kind(),
        SyntaxKind::RegularExpressionLiteral
    );
    assert_eq!(shape_of(&updated), shape_of(&parse(&new_text)));
}

#[test]
fn counting_parser_through_the_seam() {
    struct Counting(std::cell::Cell<usize>);
    impl SyntaxParser for Counting {
        fn parse(
            &self,
            file_name: &Arc<str>,
            source: &StringText,
            options: &ParseOptions,
        ) -> ParseResult {
            self.0.set(self.0.get() + 1);
            TokenStreamParser.parse(file_name, source, options)
        }
        fn parse_incremental(
            &self,
            previous: &SyntaxTree,
            change: &TextChange,
            source: &StringText,
        ) -> ParseResult {
            self.0.set(self.0.get() + 10);
            TokenStreamParser.parse_incremental(previous, change, source)
        }
    }

    let parser = Counting(std::cell::Cell::new(0));
    let tree = SyntaxTree::parse_with(&parser, "a.ts", "x", ParseOptions::default());
    SyntaxTree::update_with(&parser, &tree, Some(TextChange::insert(1, 1)), "xy");
    SyntaxTree::update_with(&parser, &tree, None, "x");
    assert_eq!(parser.0.get(), 11);
}
