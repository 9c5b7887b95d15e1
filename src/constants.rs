// Browser-side identifiers and tuning. Element ids must match `index.html`.

// Hero scene
pub const FLOG_ID: &str = "flog";
pub const ROCKET_ID: &str = "rocket";

// Starfield
pub const STARS_CANVAS_ID: &str = "stars-canvas";
pub const STARS_FALLBACK_ID: &str = "starfield";
pub const STAR_COUNT: usize = 200;
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

// Gallery and lightbox
pub const GALLERY_ID: &str = "gallery";
pub const GALLERY_COLUMN_CLASSES: [&str; 2] = ["gallery-column", "gallery-column offset"];
pub const LIGHTBOX_ID: &str = "lightbox";
pub const LIGHTBOX_PANEL_ID: &str = "lightbox-panel";
pub const LIGHTBOX_IMAGE_ID: &str = "lightbox-image";
pub const LIGHTBOX_CLOSE_ID: &str = "lightbox-close";
pub const LIGHTBOX_DOWNLOAD_ID: &str = "lightbox-download";
pub const LIGHTBOX_PREV_ID: &str = "lightbox-prev";
pub const LIGHTBOX_NEXT_ID: &str = "lightbox-next";
pub const HIDDEN_CLASS: &str = "hidden";

// Background music
pub const MUSIC_TOGGLE_ID: &str = "music-toggle";
pub const MUSIC_SRC: &str = "/img/sound.mp3";
pub const MUSIC_VOLUME: f64 = 0.5;
pub const UNLOCK_EVENTS: [&str; 4] = ["click", "touchstart", "mousemove", "keydown"];

// Frame pacing: longest frame delta fed to the animations (seconds)
pub const MAX_FRAME_DT_SEC: f32 = 0.25;
