use serde::{Deserialize, Serialize};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub decompose: DecomposeConfig,
    pub playback: PlaybackConfig,
}

/// Configuration for the Fourier decomposition stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecomposeConfig {
    /// Minimum radius a component must exceed to be kept, in the curve's
    /// coordinate units.
    pub significance_threshold: f64,
}

impl Default for DecomposeConfig {
    fn default() -> Self {
        Self {
            significance_threshold: 0.01,
        }
    }
}

/// Configuration for animation playback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Speed factor applied when playback starts.
    pub initial_speed: f64,
    /// Number of scheduler ticks that cover one full parameter sweep at
    /// speed factor 1.0.
    pub frames_per_sweep: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            initial_speed: 0.1,
            frames_per_sweep: 100,
        }
    }
}

impl PlaybackConfig {
    /// Parameter time advanced per frame at speed factor 1.0.
    pub fn time_scale(&self) -> f64 {
        std::f64::consts::TAU / self.frames_per_sweep as f64
    }
}
