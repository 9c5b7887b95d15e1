use super::constants::*;
use super::motion::Pose;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;
use std::time::Duration;

/// Tuning for [`DriftAnimator`].
///
/// Per-frame quantities (gains, damping) are expressed for one frame at
/// `reference_fps`; `step` rescales them by the real elapsed time.
#[derive(Clone, Debug)]
pub struct DriftParams {
    pub reference_fps: f32,
    pub max_frames_per_step: f32,
    pub phase_per_frame: f32,
    pub noise_frequency: f32,
    pub noise_gain: Vec2,
    pub noise_gain_rotation: f32,
    pub noise_soft_limit: f32,
    pub damping: Vec2,
    pub damping_rotation: f32,
    pub bounds: Vec2,
    /// Rotation limit in degrees, reflected like the spatial bounds.
    pub max_rotation: f32,
    pub restitution: f32,
    pub edge_correction: f32,
    pub impulse_delay: (Duration, Duration),
    pub impulse_force_max: f32,
    pub impulse_speed_softening: f32,
    pub impulse_spin_max: f32,
    pub throw_power: f32,
}

impl Default for DriftParams {
    fn default() -> Self {
        Self {
            reference_fps: DRIFT_REFERENCE_FPS,
            max_frames_per_step: DRIFT_MAX_FRAMES_PER_STEP,
            phase_per_frame: DRIFT_PHASE_PER_FRAME,
            noise_frequency: DRIFT_NOISE_FREQUENCY,
            noise_gain: Vec2::splat(DRIFT_NOISE_GAIN),
            noise_gain_rotation: DRIFT_NOISE_GAIN_ROTATION,
            noise_soft_limit: DRIFT_NOISE_SOFT_LIMIT,
            damping: Vec2::splat(DRIFT_DAMPING),
            damping_rotation: DRIFT_DAMPING_ROTATION,
            bounds: Vec2::new(DRIFT_MAX_X, DRIFT_MAX_Y),
            max_rotation: DRIFT_MAX_ROTATION_DEG,
            restitution: DRIFT_RESTITUTION,
            edge_correction: DRIFT_EDGE_CORRECTION,
            impulse_delay: (
                Duration::from_secs_f64(IMPULSE_MIN_DELAY_SEC),
                Duration::from_secs_f64(IMPULSE_MAX_DELAY_SEC),
            ),
            impulse_force_max: IMPULSE_FORCE_MAX,
            impulse_speed_softening: IMPULSE_SPEED_SOFTENING,
            impulse_spin_max: IMPULSE_SPIN_MAX,
            throw_power: DRAG_THROW_POWER,
        }
    }
}

/// Idle motion generator for the hero sprite.
///
/// Combines smoothed noise, occasional random impulses and exponential
/// damping, and reflects off a rectangular bound so the sprite never leaves
/// `[-bounds, bounds]`; rotation is held within `max_rotation` the same way.
/// While the user drags the sprite (manual control) the noise and impulses
/// are suppressed; damping, integration and reflection keep running.
///
/// Typical usage:
/// - Construct with `DriftAnimator::new(params, seed)`
/// - Call `step(dt)` once per animation frame and apply the returned `Pose`
/// - Call `impulse()` from a timer, rescheduling with `next_impulse_delay()`
/// - Bracket drags with `begin_manual` / `drag_by` / `end_manual`
pub struct DriftAnimator {
    params: DriftParams,
    rng: StdRng,
    time: f32,
    velocity: Vec2,
    spin: f32,
    pose: Pose,
    manual: bool,
    last_drag: Vec2,
}

impl DriftAnimator {
    pub fn new(params: DriftParams, seed: u64) -> Self {
        Self {
            params,
            rng: StdRng::seed_from_u64(seed),
            time: 0.0,
            velocity: Vec2::ZERO,
            spin: 0.0,
            pose: Pose::REST,
            manual: false,
            last_drag: Vec2::ZERO,
        }
    }

    pub fn params(&self) -> &DriftParams {
        &self.params
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn is_manual(&self) -> bool {
        self.manual
    }

    /// Overwrite the motion state. The pose is pulled back inside the bounds.
    pub fn set_motion(&mut self, pose: Pose, velocity: Vec2, spin: f32) {
        self.pose = pose;
        self.velocity = velocity;
        self.spin = spin;
        self.reflect();
    }

    /// Advance the simulation by `dt` of wall-clock time.
    pub fn step(&mut self, dt: Duration) -> Pose {
        let p = &self.params;
        let frames = (dt.as_secs_f32() * p.reference_fps).clamp(0.0, p.max_frames_per_step);
        self.time += p.phase_per_frame * frames;

        if !self.manual {
            let t = self.time;
            let f = p.noise_frequency;
            let nx = noise(f * t) * p.noise_gain.x;
            let ny = noise(f * (t + DRIFT_NOISE_OFFSET_Y)) * p.noise_gain.y;
            let nr = noise(f * (t + DRIFT_NOISE_OFFSET_ROTATION)) * p.noise_gain_rotation;
            let soft = p.noise_soft_limit;
            self.velocity.x += frames * nx / (1.0 + self.velocity.x.abs() * soft);
            self.velocity.y += frames * ny / (1.0 + self.velocity.y.abs() * soft);
            self.spin += frames * nr / (1.0 + self.spin.abs() * soft);
        }

        self.velocity.x *= p.damping.x.powf(frames);
        self.velocity.y *= p.damping.y.powf(frames);
        self.spin *= p.damping_rotation.powf(frames);

        self.pose.offset += self.velocity * frames;
        self.pose.rotation += self.spin * frames;
        self.reflect();
        self.pose
    }

    /// Add a random kick unless the sprite is being dragged.
    ///
    /// Returns whether the impulse was applied.
    pub fn impulse(&mut self) -> bool {
        if self.manual {
            return false;
        }
        let p = &self.params;
        let angle = self.rng.gen::<f32>() * TAU;
        let speed = self.velocity.length();
        let force =
            self.rng.gen::<f32>() * p.impulse_force_max / (1.0 + speed * p.impulse_speed_softening);
        self.velocity += Vec2::new(angle.cos(), angle.sin()) * force;
        self.spin += (self.rng.gen::<f32>() - 0.5) * p.impulse_spin_max;
        log::debug!(
            "[drift] impulse force={:.3} vel=({:.3},{:.3})",
            force,
            self.velocity.x,
            self.velocity.y
        );
        true
    }

    /// Delay until the next impulse, uniform over the configured range.
    pub fn next_impulse_delay(&mut self) -> Duration {
        let (lo, hi) = self.params.impulse_delay;
        let (lo, hi) = (lo.as_secs_f64(), hi.as_secs_f64().max(lo.as_secs_f64()));
        Duration::from_secs_f64(self.rng.gen_range(lo..=hi))
    }

    /// Returns true if this call switched manual control on.
    pub fn begin_manual(&mut self) -> bool {
        if self.manual {
            return false;
        }
        self.manual = true;
        self.last_drag = Vec2::ZERO;
        log::debug!("[drift] manual control on");
        true
    }

    /// Returns true if this call switched manual control off.
    ///
    /// The most recent drag delta is converted into release momentum.
    pub fn end_manual(&mut self) -> bool {
        if !self.manual {
            return false;
        }
        self.manual = false;
        self.velocity += self.last_drag * self.params.throw_power;
        self.last_drag = Vec2::ZERO;
        log::debug!("[drift] manual control off");
        true
    }

    /// Move the sprite by a pointer delta while dragging; clamped to bounds.
    pub fn drag_by(&mut self, delta: Vec2) {
        if !self.manual {
            return;
        }
        let b = self.params.bounds;
        self.pose.offset = (self.pose.offset + delta).clamp(-b, b);
        self.last_drag = delta;
    }

    fn reflect(&mut self) {
        let b = self.params.bounds;
        let (r, c) = (self.params.restitution, self.params.edge_correction);
        reflect_axis(&mut self.pose.offset.x, &mut self.velocity.x, b.x, r, c);
        reflect_axis(&mut self.pose.offset.y, &mut self.velocity.y, b.y, r, c);
        let max_rot = self.params.max_rotation;
        reflect_axis(&mut self.pose.rotation, &mut self.spin, max_rot, r, c);
    }
}

/// Clamp `pos` into `[-bound, bound]`, bouncing `vel` back inward.
///
/// Returns whether the bound was hit.
#[inline]
pub fn reflect_axis(
    pos: &mut f32,
    vel: &mut f32,
    bound: f32,
    restitution: f32,
    correction: f32,
) -> bool {
    let overshoot = pos.abs() - bound;
    if overshoot <= 0.0 {
        return false;
    }
    let side = pos.signum();
    *pos = side * bound;
    if *vel * side > 0.0 {
        *vel = -*vel * restitution;
    }
    *vel -= side * overshoot * correction;
    true
}

#[inline]
fn lattice(i: i64) -> f32 {
    ((i & 255) as f32).sin()
}

/// Smoothed 1-D value noise in `[-1, 1]`, continuous in `x`.
#[inline]
pub fn noise(x: f32) -> f32 {
    let i = x.floor();
    let f = x - i;
    let u = f * f * (3.0 - 2.0 * f);
    let i = i as i64;
    let a = lattice(i);
    a + (lattice(i + 1) - a) * u
}
