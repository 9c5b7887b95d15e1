// Shared tuning constants for the hero animation, starfield and gallery.

// Drift animator: reference frame rate the per-frame constants are tuned for
pub const DRIFT_REFERENCE_FPS: f32 = 60.0;
pub const DRIFT_MAX_FRAMES_PER_STEP: f32 = 4.0; // caps catch-up after a stalled tab
pub const DRIFT_PHASE_PER_FRAME: f32 = 0.0004;

// Noise is sampled at phase * frequency; one lattice cell is roughly a second
pub const DRIFT_NOISE_FREQUENCY: f32 = 40.0;
// Noise sampling offsets decorrelate the three axes
pub const DRIFT_NOISE_OFFSET_Y: f32 = 100.0;
pub const DRIFT_NOISE_OFFSET_ROTATION: f32 = 200.0;
pub const DRIFT_NOISE_GAIN: f32 = 0.01; // px/frame per unit noise
pub const DRIFT_NOISE_GAIN_ROTATION: f32 = 0.02; // deg/frame per unit noise
pub const DRIFT_NOISE_SOFT_LIMIT: f32 = 10.0; // noise push shrinks as 1 / (1 + |v| * limit)

// Per-frame velocity retention
pub const DRIFT_DAMPING: f32 = 0.999;
pub const DRIFT_DAMPING_ROTATION: f32 = 0.998;

// Edge behavior (CSS px from rest pose)
pub const DRIFT_MAX_X: f32 = 150.0;
pub const DRIFT_MAX_Y: f32 = 100.0;
pub const DRIFT_MAX_ROTATION_DEG: f32 = 15.0;
pub const DRIFT_RESTITUTION: f32 = 0.3;
pub const DRIFT_EDGE_CORRECTION: f32 = 0.02;

// Random impulses
pub const IMPULSE_MIN_DELAY_SEC: f64 = 8.0;
pub const IMPULSE_MAX_DELAY_SEC: f64 = 22.0;
pub const IMPULSE_FORCE_MAX: f32 = 0.2;
pub const IMPULSE_SPEED_SOFTENING: f32 = 1.0;
pub const IMPULSE_SPIN_MAX: f32 = 0.5; // full width of the rotational kick

// Drag release momentum
pub const DRAG_THROW_POWER: f32 = 0.02;

// Rocket sway: amplitude and one-way leg duration per axis
pub const SWAY_X_PX: f32 = 10.0;
pub const SWAY_X_LEG_SEC: f32 = 10.0;
pub const SWAY_Y_PX: f32 = 20.0;
pub const SWAY_Y_LEG_SEC: f32 = 8.0;
pub const SWAY_ROTATION_DEG: f32 = 1.0;
pub const SWAY_ROTATION_LEG_SEC: f32 = 15.0;

// Starfield
pub const STAR_SIZE_MIN_PX: f32 = 1.0;
pub const STAR_SIZE_SPAN_PX: f32 = 2.0;
pub const STAR_OPACITY_MIN: f32 = 0.5;
pub const STAR_OPACITY_SPAN: f32 = 0.5;
pub const STAR_PERIOD_MIN_SEC: f32 = 2.0;
pub const STAR_PERIOD_SPAN_SEC: f32 = 3.0;
pub const STAR_DELAY_SPAN_SEC: f32 = 4.0; // delays are negative: already mid-cycle
pub const STAR_DIM_FACTOR: f32 = 0.3;
pub const STAR_DIM_SCALE: f32 = 0.9;

// Gallery
pub const GALLERY_LEN: usize = 10;
pub const GALLERY_IMAGE_DIR: &str = "/img";
pub const GALLERY_DOWNLOAD_PREFIX: &str = "flob";
pub const GALLERY_EXTENSION: &str = "jpg";
