// Host-side tests for the rocket sway and pose helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}
mod sway {
    include!("../src/core/sway.rs");
}

use glam::Vec2;
use motion::*;
use sway::*;

#[test]
fn ease_hits_endpoints_and_midpoint() {
    assert_eq!(ease_in_out(0.0), 0.0);
    assert_eq!(ease_in_out(1.0), 1.0);
    assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    assert_eq!(ease_in_out(-3.0), 0.0);
    assert_eq!(ease_in_out(7.0), 1.0);
}

#[test]
fn css_transform_formats_translate_then_rotate() {
    let pose = Pose {
        offset: Vec2::new(12.5, -3.0),
        rotation: 1.25,
    };
    assert_eq!(
        pose.css_transform(),
        "translate(12.50px, -3.00px) rotate(1.250deg)"
    );
    assert_eq!(
        Pose::REST.css_transform(),
        "translate(0.00px, 0.00px) rotate(0.000deg)"
    );
}

#[test]
fn sway_axis_yo_yos_between_amplitudes() {
    let axis = SwayAxis {
        amplitude: 10.0,
        leg_sec: 10.0,
    };
    assert_eq!(axis.sample(0.0), -10.0);
    assert!((axis.sample(5.0)).abs() < 1e-4);
    assert!((axis.sample(10.0) - 10.0).abs() < 1e-4);
    assert!((axis.sample(15.0)).abs() < 1e-4);
    assert!((axis.sample(20.0) + 10.0).abs() < 1e-4);
}

#[test]
fn sway_axis_is_bounded_and_smooth() {
    let axis = SwayAxis {
        amplitude: 20.0,
        leg_sec: 8.0,
    };
    let mut prev = axis.sample(0.0);
    let mut t = 0.0f32;
    while t < 100.0 {
        t += 0.01;
        let v = axis.sample(t);
        assert!(v.abs() <= 20.0 + 1e-4);
        assert!((v - prev).abs() < 0.1, "jump at {t}: {prev} -> {v}");
        prev = v;
    }
}

#[test]
fn degenerate_leg_parks_at_the_start() {
    let axis = SwayAxis {
        amplitude: 4.0,
        leg_sec: 0.0,
    };
    assert_eq!(axis.sample(3.0), -4.0);
}

#[test]
fn default_sway_starts_at_the_corner() {
    let sway = Sway::default();
    let pose = sway.sample(0.0);
    assert_eq!(pose.offset, Vec2::new(-sway.x.amplitude, -sway.y.amplitude));
    assert_eq!(pose.rotation, -sway.rotation.amplitude);
}

#[test]
fn default_sway_axes_use_distinct_periods() {
    let sway = Sway::default();
    assert!(sway.x.leg_sec != sway.y.leg_sec);
    assert!(sway.y.leg_sec != sway.rotation.leg_sec);
    assert!(sway.x.leg_sec != sway.rotation.leg_sec);
}
