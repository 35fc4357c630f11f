// crates/globber/tests/malformed.rs
use globber::{MatchOptions, is_match};

fn m(input: &str, pattern: &str) -> bool {
    is_match(input, pattern, MatchOptions::case_sensitive()).unwrap()
}

#[test]
fn unterminated_class_is_literal() {
    assert!(m("[abc", "[abc"));
    for s in ["a", "b", "c", "abc", "[a", "[abc]"] {
        assert!(!m(s, "[abc"), "{s:?}");
    }
}

#[test]
fn degenerate_classes_are_literal() {
    assert!(m("[]", "[]"));
    assert!(m("[!]", "[!]"));
    assert!(m("x[]y", "x[]y"));
}

#[test]
fn empty_class_then_real_class() {
    // `[]` is literal, so the scan resumes at the first `]`.
    assert!(m("[]a]", "[]a]"));
}

#[test]
fn unterminated_alternation_is_literal() {
    assert!(m("{a,b", "{a,b"));
    assert!(!m("a", "{a,b"));
}

#[test]
fn stray_closers_are_literal() {
    assert!(m("a}b", "a}b"));
    assert!(m("a]b", "a]b"));
}

#[test]
fn unterminated_class_inside_wildcard_pattern() {
    assert!(m("v1[x", "v*[x"));
    assert!(!m("v1x", "v*[x"));
}
