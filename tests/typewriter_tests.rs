// Host-side tests for the typewriter state machine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod typewriter {
    include!("../src/core/typewriter.rs");
}

use typewriter::*;

fn steps(tw: &mut Typewriter, n: usize) -> Vec<(String, u32)> {
    (0..n)
        .map(|_| {
            let s = tw.step().expect("phrases configured");
            (s.text, s.delay_ms)
        })
        .collect()
}

#[test]
fn types_holds_deletes_and_moves_on() {
    let mut tw = Typewriter::new(["ab", "cd"], TypewriterConfig::default());
    let got = steps(&mut tw, 7);
    let expected: Vec<(String, u32)> = [
        ("", 70),
        ("a", 70),
        ("ab", 2000),
        ("ab", 35),
        ("ab", 35),
        ("a", 70),
        ("", 70),
    ]
    .iter()
    .map(|(t, d)| (t.to_string(), *d))
    .collect();
    assert_eq!(got, expected);
    assert_eq!(tw.phrase_index(), 1);
    assert!(!tw.is_deleting());
}

#[test]
fn wraps_back_to_first_phrase() {
    let mut tw = Typewriter::new(["x"], TypewriterConfig::default());
    // "", "x" (hold), "x", "x" (last delete), then "" of the same phrase again
    let got = steps(&mut tw, 5);
    assert_eq!(got[1], ("x".to_string(), 2000));
    assert_eq!(got[3], ("x".to_string(), 70));
    assert_eq!(tw.phrase_index(), 0);
    assert_eq!(got[4], (String::new(), 70));
}

#[test]
fn full_cycle_visits_every_phrase_in_order() {
    let phrases = ["one", "two", "three"];
    let mut tw = Typewriter::new(phrases, TypewriterConfig::default());
    let mut seen = Vec::new();
    for _ in 0..200 {
        let s = tw.step().unwrap();
        if s.delay_ms == 2000 {
            seen.push(s.text);
        }
    }
    assert!(seen.len() >= 4);
    assert_eq!(&seen[..4], &["one", "two", "three", "one"]);
}

#[test]
fn counts_characters_not_bytes() {
    let mut tw = Typewriter::new(["héllo"], TypewriterConfig::default());
    let got = steps(&mut tw, 3);
    assert_eq!(got[2].0, "hé");
}

#[test]
fn custom_delays_are_used() {
    let config = TypewriterConfig {
        type_delay_ms: 10,
        delete_delay_ms: 5,
        hold_delay_ms: 500,
    };
    let mut tw = Typewriter::new(["ab"], config);
    let delays: Vec<u32> = steps(&mut tw, 6).into_iter().map(|(_, d)| d).collect();
    assert_eq!(delays, vec![10, 10, 500, 5, 5, 10]);
}

#[test]
fn empty_phrase_list_never_steps() {
    let mut tw = Typewriter::new(Vec::<String>::new(), TypewriterConfig::default());
    assert!(tw.step().is_none());
    assert!(tw.step().is_none());
}
