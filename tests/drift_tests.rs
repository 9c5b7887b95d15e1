// Host-side tests for the hero drift animator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}
mod drift {
    include!("../src/core/drift.rs");
}

use drift::*;
use glam::Vec2;
use motion::Pose;
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);

fn quiet_params() -> DriftParams {
    DriftParams {
        noise_gain: Vec2::ZERO,
        noise_gain_rotation: 0.0,
        ..DriftParams::default()
    }
}

fn within_bounds(a: &DriftAnimator) -> bool {
    let b = a.params().bounds;
    let p = a.pose();
    p.offset.x.abs() <= b.x
        && p.offset.y.abs() <= b.y
        && p.rotation.abs() <= a.params().max_rotation
}

fn near_edge(a: &DriftAnimator) -> bool {
    let b = a.params().bounds;
    let p = a.pose().offset;
    p.x.abs() >= b.x - 1.0 || p.y.abs() >= b.y - 1.0
}

#[test]
fn starts_at_rest() {
    let a = DriftAnimator::new(DriftParams::default(), 1);
    assert_eq!(a.pose(), Pose::REST);
    assert_eq!(a.velocity(), Vec2::ZERO);
    assert!(!a.is_manual());
}

#[test]
fn stays_bounded_under_noise_and_impulses() {
    for seed in 0..8u64 {
        let mut a = DriftAnimator::new(DriftParams::default(), seed);
        for frame in 0..20_000 {
            if frame % 300 == 0 {
                a.impulse();
            }
            a.step(FRAME);
            assert!(within_bounds(&a), "seed {seed} frame {frame}: {:?}", a.pose());
        }
    }
}

#[test]
fn stays_bounded_when_launched_at_an_edge() {
    let mut a = DriftAnimator::new(DriftParams::default(), 3);
    a.set_motion(
        Pose {
            offset: Vec2::new(149.0, -99.0),
            rotation: 0.0,
        },
        Vec2::new(40.0, -25.0),
        0.0,
    );
    for _ in 0..2_000 {
        a.step(FRAME);
        assert!(within_bounds(&a));
    }
}

#[test]
fn idle_drift_wanders_without_pinning_to_an_edge() {
    // Two minutes at 60 fps with an impulse every 15 s
    for seed in 0..4u64 {
        let mut a = DriftAnimator::new(DriftParams::default(), seed);
        let mut at_edge = 0;
        let mut max_spin = 0.0f32;
        let mut max_offset = 0.0f32;
        for frame in 0..7_200 {
            if frame % 900 == 0 {
                a.impulse();
            }
            a.step(FRAME);
            if near_edge(&a) {
                at_edge += 1;
            }
            max_spin = max_spin.max(a.spin().abs());
            max_offset = max_offset.max(a.pose().offset.length());
        }
        assert!(at_edge < 7_200 / 5, "seed {seed}: {at_edge}/7200 frames at an edge");
        assert!(max_spin < 1.0, "seed {seed}: spin reached {max_spin} deg/frame");
        assert!(a.pose().rotation.abs() <= a.params().max_rotation);
        assert!(max_offset > 10.0, "seed {seed}: sprite barely moved ({max_offset}px)");
    }
}

#[test]
fn rotation_reflects_at_its_limit() {
    let mut a = DriftAnimator::new(quiet_params(), 0);
    let max = a.params().max_rotation;
    a.set_motion(
        Pose {
            offset: Vec2::ZERO,
            rotation: max - 0.5,
        },
        Vec2::ZERO,
        2.0,
    );
    a.step(FRAME);
    assert_eq!(a.pose().rotation, max);
    assert!(a.spin() < 0.0, "spin should point back inside, got {}", a.spin());
}

#[test]
fn bounce_reverses_and_attenuates_velocity() {
    let mut a = DriftAnimator::new(quiet_params(), 0);
    a.set_motion(
        Pose {
            offset: Vec2::new(145.0, 0.0),
            rotation: 0.0,
        },
        Vec2::new(10.0, 0.0),
        0.0,
    );
    a.step(FRAME);
    assert_eq!(a.pose().offset.x, a.params().bounds.x);
    let v = a.velocity().x;
    assert!(v < 0.0, "velocity should point back inside, got {v}");
    assert!(v.abs() < 10.0);
}

#[test]
fn reflect_axis_clamps_and_corrects() {
    let mut pos = -120.0;
    let mut vel = -5.0;
    assert!(reflect_axis(&mut pos, &mut vel, 100.0, 0.3, 0.02));
    assert_eq!(pos, -100.0);
    // flipped to 1.5, plus 20 px overshoot * 0.02 pushed inward
    assert!((vel - 1.9).abs() < 1e-5, "vel={vel}");

    let mut pos = 50.0;
    let mut vel = 3.0;
    assert!(!reflect_axis(&mut pos, &mut vel, 100.0, 0.3, 0.02));
    assert_eq!((pos, vel), (50.0, 3.0));
}

#[test]
fn damping_drives_velocity_to_rest() {
    let mut a = DriftAnimator::new(quiet_params(), 9);
    a.set_motion(Pose::REST, Vec2::new(0.5, -0.3), 0.4);
    let mut prev = a.velocity().length();
    for _ in 0..60 * 60 * 5 {
        a.step(FRAME);
        let speed = a.velocity().length();
        assert!(speed <= prev + 1e-6);
        prev = speed;
    }
    assert!(prev < 1e-3, "speed after 5 minutes: {prev}");
    assert!(a.spin().abs() < 1e-3);
}

#[test]
fn manual_control_suppresses_noise() {
    let mut a = DriftAnimator::new(DriftParams::default(), 4);
    a.set_motion(Pose::REST, Vec2::new(0.05, 0.02), 0.01);
    assert!(a.begin_manual());
    let damping = a.params().damping;
    let damping_rotation = a.params().damping_rotation;
    for _ in 0..500 {
        let before = a.velocity();
        let spin_before = a.spin();
        a.step(FRAME);
        let frames = FRAME.as_secs_f32() * a.params().reference_fps;
        let expected = Vec2::new(
            before.x * damping.x.powf(frames),
            before.y * damping.y.powf(frames),
        );
        assert!((a.velocity() - expected).length() < 1e-6);
        let expected_spin = spin_before * damping_rotation.powf(frames);
        assert!((a.spin() - expected_spin).abs() < 1e-7);
    }
}

#[test]
fn noise_moves_an_idle_sprite() {
    let mut a = DriftAnimator::new(DriftParams::default(), 5);
    for _ in 0..600 {
        a.step(FRAME);
    }
    assert!(a.pose().offset.length() > 0.0 || a.pose().rotation != 0.0);
}

#[test]
fn manual_toggles_are_idempotent() {
    let mut a = DriftAnimator::new(DriftParams::default(), 0);
    assert!(a.begin_manual());
    assert!(!a.begin_manual());
    assert!(a.is_manual());
    assert!(a.end_manual());
    assert!(!a.end_manual());
    assert!(!a.is_manual());
}

#[test]
fn impulses_are_ignored_while_dragging() {
    let mut a = DriftAnimator::new(DriftParams::default(), 11);
    a.begin_manual();
    assert!(!a.impulse());
    assert_eq!(a.velocity(), Vec2::ZERO);
    a.end_manual();
    assert!(a.impulse());
}

#[test]
fn impulse_is_visible_to_the_next_step() {
    let mut a = DriftAnimator::new(quiet_params(), 12);
    let mut kicked = false;
    for _ in 0..16 {
        a.impulse();
        if a.velocity() != Vec2::ZERO {
            kicked = true;
            break;
        }
    }
    assert!(kicked);
    let v = a.velocity();
    let pose = a.step(FRAME);
    assert!(pose.offset != Vec2::ZERO);
    assert!(pose.offset.dot(v) > 0.0);
}

#[test]
fn impulse_energy_shrinks_when_already_fast() {
    let params = DriftParams::default();
    let max = params.impulse_force_max;
    let mut a = DriftAnimator::new(params, 13);
    a.set_motion(Pose::REST, Vec2::new(9.0, 0.0), 0.0);
    for _ in 0..100 {
        let before = a.velocity();
        a.impulse();
        let added = (a.velocity() - before).length();
        assert!(added <= max / (1.0 + before.length()) + 1e-5);
    }
}

#[test]
fn impulse_delays_fall_in_range() {
    let mut a = DriftAnimator::new(DriftParams::default(), 21);
    let (lo, hi) = a.params().impulse_delay;
    for _ in 0..1_000 {
        let d = a.next_impulse_delay();
        assert!(d >= lo && d <= hi, "{d:?}");
    }
}

#[test]
fn drag_moves_within_bounds_and_throws_on_release() {
    let mut a = DriftAnimator::new(quiet_params(), 2);
    a.drag_by(Vec2::new(30.0, 0.0));
    assert_eq!(a.pose().offset, Vec2::ZERO, "drag without manual control is ignored");

    a.begin_manual();
    a.drag_by(Vec2::new(500.0, -500.0));
    let b = a.params().bounds;
    assert_eq!(a.pose().offset, Vec2::new(b.x, -b.y));

    a.drag_by(Vec2::new(-20.0, 10.0));
    assert_eq!(a.pose().offset, Vec2::new(b.x - 20.0, -b.y + 10.0));
    assert_eq!(a.velocity(), Vec2::ZERO);

    a.end_manual();
    let throw = a.params().throw_power;
    assert!((a.velocity() - Vec2::new(-20.0, 10.0) * throw).length() < 1e-6);
}

#[test]
fn time_advance_is_frame_rate_independent() {
    let mut a = DriftAnimator::new(DriftParams::default(), 0);
    let mut b = DriftAnimator::new(DriftParams::default(), 0);
    for _ in 0..120 {
        a.step(Duration::from_secs_f64(1.0 / 120.0));
    }
    for _ in 0..60 {
        b.step(Duration::from_secs_f64(1.0 / 60.0));
    }
    assert!((a.time() - b.time()).abs() < 1e-4);
    assert!((b.time() - 60.0 * a.params().phase_per_frame).abs() < 1e-4);
}

#[test]
fn long_stalls_are_capped() {
    let mut a = DriftAnimator::new(DriftParams::default(), 0);
    a.step(Duration::from_secs(10));
    let p = a.params();
    let max_time = p.phase_per_frame * p.max_frames_per_step;
    assert!((a.time() - max_time).abs() < 1e-6);
}

#[test]
fn noise_is_bounded_and_continuous() {
    let mut prev = noise(-50.0);
    let mut x = -50.0f32;
    while x < 300.0 {
        x += 0.001;
        let n = noise(x);
        assert!((-1.0..=1.0).contains(&n));
        assert!((n - prev).abs() < 0.01, "jump at {x}: {prev} -> {n}");
        prev = n;
    }
}
