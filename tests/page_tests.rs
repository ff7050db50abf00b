// Host-side tests for the navbar and skill-bar decisions.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod page {
    include!("../src/core/page.rs");
}

use page::*;

#[test]
fn navbar_scrolled_only_past_threshold() {
    assert!(!is_scrolled(0.0, 50.0));
    assert!(!is_scrolled(50.0, 50.0));
    assert!(is_scrolled(50.5, 50.0));
    assert!(is_scrolled(1200.0, 50.0));
}

#[test]
fn skill_width_from_numeric_levels() {
    assert_eq!(skill_width("85").as_deref(), Some("85%"));
    assert_eq!(skill_width(" 60 ").as_deref(), Some("60%"));
    assert_eq!(skill_width("62.5").as_deref(), Some("62.5%"));
    assert_eq!(skill_width("0").as_deref(), Some("0%"));
}

#[test]
fn skill_width_keeps_out_of_range_levels() {
    assert_eq!(skill_width("150").as_deref(), Some("150%"));
    assert_eq!(skill_width("-5").as_deref(), Some("-5%"));
}

#[test]
fn skill_width_rejects_non_numeric_levels() {
    assert_eq!(skill_width(""), None);
    assert_eq!(skill_width("abc"), None);
    assert_eq!(skill_width("80%"), None);
    assert_eq!(skill_width("NaN"), None);
    assert_eq!(skill_width("inf"), None);
}
