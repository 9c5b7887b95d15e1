use super::constants::*;
use super::motion::{ease_in_out, lerp};
use rand::prelude::*;

/// One background star. Position is a percentage of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
    pub period_sec: f32,
    /// Non-positive: the star's loop started this long before page load.
    pub delay_sec: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Twinkle {
    pub opacity: f32,
    pub scale: f32,
}

impl Star {
    /// Opacity and scale at `t_sec`: peak -> dim -> peak each period, eased
    /// on both halves.
    pub fn twinkle(&self, t_sec: f32) -> Twinkle {
        let phase = if self.period_sec > 0.0 {
            ((t_sec - self.delay_sec) / self.period_sec).rem_euclid(1.0)
        } else {
            0.0
        };
        // 0 at the peaks, 1 at the dim midpoint
        let dim = if phase < 0.5 {
            ease_in_out(phase * 2.0)
        } else {
            1.0 - ease_in_out((phase - 0.5) * 2.0)
        };
        Twinkle {
            opacity: lerp(self.opacity, self.opacity * STAR_DIM_FACTOR, dim),
            scale: lerp(1.0, STAR_DIM_SCALE, dim),
        }
    }
}

pub fn generate_stars<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            x: rng.gen::<f32>() * 100.0,
            y: rng.gen::<f32>() * 100.0,
            size: STAR_SIZE_MIN_PX + rng.gen::<f32>() * STAR_SIZE_SPAN_PX,
            opacity: STAR_OPACITY_MIN + rng.gen::<f32>() * STAR_OPACITY_SPAN,
            period_sec: STAR_PERIOD_MIN_SEC + rng.gen::<f32>() * STAR_PERIOD_SPAN_SEC,
            delay_sec: -rng.gen::<f32>() * STAR_DELAY_SPAN_SEC,
        })
        .collect()
}
