// Host-side tests for the web front end's constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn countdown_ids_are_distinct() {
    for (i, a) in COUNTDOWN_IDS.iter().enumerate() {
        for b in &COUNTDOWN_IDS[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(!COUNTDOWN_IDS.contains(&CANVAS_ID));
}

#[test]
fn override_attributes_are_data_attributes() {
    for attr in [ATTR_SEED, ATTR_TOKENS, ATTR_BURST, ATTR_TYPE_TEXT, ATTR_TYPE_CPS] {
        assert!(attr.starts_with("data-"), "{attr}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timers_are_positive_and_ordered() {
    assert!(TYPEWRITER_INTERVAL_MS > 0);
    assert!(COUNTDOWN_INTERVAL_MS >= TYPEWRITER_INTERVAL_MS);
    assert!(TYPEWRITER_DEFAULT_CPS > 0.0);
    // At most one character per tick at the default speed, so none are skipped.
    assert!(TYPEWRITER_DEFAULT_CPS * TYPEWRITER_INTERVAL_MS as f32 / 1000.0 <= 1.0);
}

#[test]
fn reduced_motion_query_is_well_formed() {
    assert!(REDUCED_MOTION_QUERY.starts_with('('));
    assert!(REDUCED_MOTION_QUERY.ends_with(')'));
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
}
