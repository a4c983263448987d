// Host-side tests for page constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct() {
    let ids = [CANVAS_ID, LANDING_ID, LAUNCH_BUTTON_ID, SELECTOR_ID, SELECT_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.contains(' '));
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn index_html_matches_ids() {
    let html = include_str!("../index.html");
    for id in [CANVAS_ID, LANDING_ID, LAUNCH_BUTTON_ID, SELECTOR_ID, SELECT_ID] {
        assert!(html.contains(&format!("id=\"{id}\"")), "index.html lacks #{id}");
    }
    assert!(html.contains(PAGE_TITLE));
    assert!(html.contains(SELECT_LABEL));
}

#[test]
fn texture_url_is_absolute_jpeg() {
    assert!(TEXTURE_URL.starts_with('/'));
    assert!(TEXTURE_URL.ends_with(".jpg"));
    assert!(TEXTURE_URL.ends_with(moon_core::BODY_TEXTURE_PATH));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn wheel_tuning_is_sane() {
    assert!(DOM_DELTA_LINE != DOM_DELTA_PAGE);
    assert!(WHEEL_PIXELS_PER_LINE < WHEEL_PIXELS_PER_STEP);
    assert!(WHEEL_PIXELS_PER_PAGE > WHEEL_PIXELS_PER_STEP);
    assert!(WHEEL_MAX_STEPS_PER_EVENT >= 1.0);
}
