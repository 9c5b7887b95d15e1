mod constants;
pub mod drift;
pub mod gallery;
pub mod motion;
pub mod music;
pub mod starfield;
pub mod sway;

pub use drift::*;
pub use gallery::*;
pub use motion::*;
pub use music::*;
pub use starfield::*;
pub use sway::*;

// Shaders bundled as string constants
pub static STARS_WGSL: &str = include_str!("../../shaders/stars.wgsl");
