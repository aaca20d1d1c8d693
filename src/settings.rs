//! Game settings and preferences.

use serde::{Deserialize, Serialize};

/// Player preferences shared by both games.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all audio
    pub muted: bool,
    /// Show the frames-per-second counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Combined playback volume, zero when muted.
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Native stub: nothing is persisted, every run starts from defaults.
    pub fn load() -> Self {
        Self::default()
    }

    /// Native stub.
    pub fn save(&self) {
        // No-op: no files are written.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_volume() {
        let mut s = Settings::default();
        s.master_volume = 0.5;
        s.sfx_volume = 0.5;
        assert!((s.effective_volume() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_muted_is_silent() {
        let mut s = Settings::default();
        s.muted = true;
        assert_eq!(s.effective_volume(), 0.0);
    }
}
