use super::*;
use pretty_assertions::assert_eq;

#[test]
fn text_change_constructors() {
    assert_eq!(TextChange::insert(10, 5), TextChange::new(10, 10, 5));
    assert_eq!(TextChange::delete(5, 3), TextChange::new(5, 8, 0));
    assert_eq!(TextChange::replace(0, 3, 5), TextChange::new(0, 3, 5));
    assert_eq!(TextChange::replace(4, 3, 5).new_end(), 9);
}

#[test]
fn delta_sign() {
    assert_eq!(TextChange::insert(0, 4).delta(), 4);
    assert_eq!(TextChange::delete(0, 4).delta(), -4);
    assert_eq!(TextChange::replace(0, 4, 4).delta(), 0);
}

#[test]
fn new_to_old_mapping() {
    // old: "let a = 1;" -> new: "let abc = 1;" (insert "bc" at 5)
    let change = TextChange::insert(5, 2);
    assert_eq!(change.new_to_old(0), Some(0));
    assert_eq!(change.new_to_old(4), Some(4));
    assert_eq!(change.new_to_old(5), None);
    assert_eq!(change.new_to_old(6), None);
    assert_eq!(change.new_to_old(7), Some(5));
    assert_eq!(change.new_to_old(11), Some(9));
}

#[test]
fn new_to_old_after_deletion() {
    let change = TextChange::delete(2, 3);
    assert_eq!(change.new_to_old(1), Some(1));
    assert_eq!(change.new_to_old(2), Some(5));
    assert_eq!(change.new_to_old(4), Some(7));
}

#[test]
fn between_identical_texts() {
    assert_eq!(TextChange::between("abc", "abc"), None);
}

#[test]
fn between_finds_minimal_edit() {
    assert_eq!(
        TextChange::between("let a = 1;", "let abc = 1;"),
        Some(TextChange::new(5, 5, 2))
    );
    assert_eq!(
        TextChange::between("foo bar", "foo"),
        Some(TextChange::new(3, 7, 0))
    );
    assert_eq!(
        TextChange::between("x = 1", "y = 1"),
        Some(TextChange::new(0, 1, 1))
    );
}

#[test]
fn between_respects_char_boundaries() {
    // "é" is C3 A9, "è" is C3 A8: the shared lead byte must not split.
    let change = TextChange::between("aéb", "aèb");
    assert_eq!(change, Some(TextChange::new(1, 3, 2)));
}

#[test]
fn marker_extends_backward() {
    let marker = ChangeMarker::from_change(&TextChange::replace(100, 10, 15), 16);
    assert_eq!(marker.affected_start, 84);
    assert_eq!(marker.affected_end, 110);

    let near_start = ChangeMarker::from_change(&TextChange::insert(3, 1), 16);
    assert_eq!(near_start.affected_start, 0);
}

#[test]
fn marker_reuse_decisions() {
    let marker = ChangeMarker::from_change(&TextChange::replace(40, 4, 1), 16);
    assert!(marker.is_unaffected(Span::new(0, 24)));
    assert!(!marker.is_unaffected(Span::new(20, 25)));
    assert!(!marker.is_unaffected(Span::new(42, 50)));
    assert!(marker.is_unaffected(Span::new(44, 50)));
}

#[test]
fn pure_insertion_without_margin() {
    let marker = ChangeMarker::from_change(&TextChange::insert(10, 3), 0);
    assert!(marker.is_unaffected(Span::new(5, 10)));
    assert!(marker.is_unaffected(Span::new(10, 12)));
    assert!(!marker.is_unaffected(Span::new(8, 12)));
}
