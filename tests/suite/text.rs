//! Case normalization tests

use stencil_types::{Case, normalize_case};

#[test]
fn preserve_returns_input() {
    for s in ["hello", "HeLLo", "", "123 !?", "ß"] {
        assert_eq!(normalize_case(s, false), s);
        assert_eq!(normalize_case(s, Case::default()), s);
    }
}

#[test]
fn upper_matches_std_uppercase() {
    for s in ["hello", "HeLLo", "", "123 !?", "ß", "ǆ"] {
        assert_eq!(normalize_case(s, true), s.to_uppercase());
    }
}

#[test]
fn concrete_cases() {
    assert_eq!(normalize_case("hello", Case::Preserve), "hello");
    assert_eq!(normalize_case("hello", Case::Upper), "HELLO");
    assert_eq!(normalize_case("", Case::Upper), "");
}
