// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn drift_constants_are_within_reasonable_bounds() {
    assert!(DRIFT_REFERENCE_FPS > 0.0);
    assert!(DRIFT_MAX_FRAMES_PER_STEP >= 1.0);
    assert!(DRIFT_DAMPING > 0.0 && DRIFT_DAMPING < 1.0);
    assert!(DRIFT_DAMPING_ROTATION > 0.0 && DRIFT_DAMPING_ROTATION < 1.0);
    assert!(DRIFT_RESTITUTION > 0.0 && DRIFT_RESTITUTION < 1.0);
    assert!(DRIFT_MAX_X > 0.0 && DRIFT_MAX_Y > 0.0);
    assert!(IMPULSE_MIN_DELAY_SEC < IMPULSE_MAX_DELAY_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_cap_covers_the_drift_catch_up() {
    // The animator's own clamp is the tighter bound on a stalled frame
    assert!(MAX_FRAME_DT_SEC * DRIFT_REFERENCE_FPS >= DRIFT_MAX_FRAMES_PER_STEP);
    assert!(MAX_FRAME_DT_SEC > 1.0 / DRIFT_REFERENCE_FPS);
}

#[test]
fn element_ids_are_unique() {
    let ids = [
        FLOG_ID,
        ROCKET_ID,
        STARS_CANVAS_ID,
        STARS_FALLBACK_ID,
        GALLERY_ID,
        LIGHTBOX_ID,
        LIGHTBOX_PANEL_ID,
        LIGHTBOX_IMAGE_ID,
        LIGHTBOX_CLOSE_ID,
        LIGHTBOX_DOWNLOAD_ID,
        LIGHTBOX_PREV_ID,
        LIGHTBOX_NEXT_ID,
        MUSIC_TOGGLE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn music_and_star_settings_are_sane() {
    assert!(MUSIC_VOLUME > 0.0 && MUSIC_VOLUME <= 1.0);
    assert!(MUSIC_SRC.starts_with(GALLERY_IMAGE_DIR));
    assert!(STAR_COUNT > 0);
    assert!(UNLOCK_EVENTS.contains(&"click"));
}
