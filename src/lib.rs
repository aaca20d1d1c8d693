//! Pixel Arcade - two tiny fixed-window arcade games
//!
//! Core modules:
//! - `breakout`: paddle/ball/brick simulation (phases, collisions, scoring)
//! - `platformer`: tile-grid platformer simulation (physics, level generation)
//! - `gfx`: CPU framebuffer drawing helpers (rects, circles, bitmap text)
//! - `audio`: square-wave tone synthesis and a dedicated playback thread
//! - `settings`: volume/display preferences
//!
//! The simulation modules are pure and deterministic: fixed 60 Hz tick,
//! seeded RNG only, no windowing or audio dependencies. The binaries under
//! `src/bin/` own the window, the input mapping, and the frame pacing.

pub mod audio;
pub mod breakout;
pub mod gfx;
pub mod platformer;
pub mod rect;
pub mod settings;

pub use rect::Rect;
pub use settings::Settings;

/// Shared configuration constants
pub mod consts {
    /// Window width in pixels (both games)
    pub const WINDOW_WIDTH: u32 = 600;
    /// Window height in pixels (both games)
    pub const WINDOW_HEIGHT: u32 = 400;

    /// Fixed simulation timestep (60 Hz, one tick per displayed frame)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Audio sample rate (mono PCM)
    pub const SAMPLE_RATE: u32 = 44_100;
}
