use glam::Vec2;

/// Visual transform of a sprite relative to its rest pose.
///
/// `offset` is in CSS pixels, `rotation` in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub offset: Vec2,
    pub rotation: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        offset: Vec2::ZERO,
        rotation: 0.0,
    };

    /// CSS `transform` value for this pose.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) rotate({:.3}deg)",
            self.offset.x, self.offset.y, self.rotation
        )
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Symmetric ease-in-out on `0..=1` (smoothstep); input is clamped.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
