use super::constants::*;
use super::motion::{ease_in_out, lerp, Pose};
use glam::Vec2;

/// One axis of a yo-yo loop: travels `-amplitude -> amplitude` in `leg_sec`,
/// then back, forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwayAxis {
    pub amplitude: f32,
    pub leg_sec: f32,
}

impl SwayAxis {
    pub fn sample(&self, t_sec: f32) -> f32 {
        if self.leg_sec <= 0.0 {
            return -self.amplitude;
        }
        let legs = (t_sec / self.leg_sec).max(0.0);
        let k = ease_in_out(legs.fract());
        if (legs.floor() as u64) % 2 == 0 {
            lerp(-self.amplitude, self.amplitude, k)
        } else {
            lerp(self.amplitude, -self.amplitude, k)
        }
    }
}

/// Gentle ambient sway used by the rocket sprite. The three axes run on
/// unrelated periods so the motion never visibly repeats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sway {
    pub x: SwayAxis,
    pub y: SwayAxis,
    pub rotation: SwayAxis,
}

impl Default for Sway {
    fn default() -> Self {
        Self {
            x: SwayAxis {
                amplitude: SWAY_X_PX,
                leg_sec: SWAY_X_LEG_SEC,
            },
            y: SwayAxis {
                amplitude: SWAY_Y_PX,
                leg_sec: SWAY_Y_LEG_SEC,
            },
            rotation: SwayAxis {
                amplitude: SWAY_ROTATION_DEG,
                leg_sec: SWAY_ROTATION_LEG_SEC,
            },
        }
    }
}

impl Sway {
    pub fn sample(&self, t_sec: f32) -> Pose {
        Pose {
            offset: Vec2::new(self.x.sample(t_sec), self.y.sample(t_sec)),
            rotation: self.rotation.sample(t_sec),
        }
    }
}
