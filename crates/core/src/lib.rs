//! Core library for the Curve Visualiser application.
//!
//! The crate decomposes a sampled 2D curve into a ranked set of rotating
//! vector ("epicycle") components via discrete Fourier analysis, persists
//! that decomposition in a line-oriented text format, and reconstructs the
//! curve by summing the rotating vectors over time. Each module owns a
//! distinct subsystem (decomposition, persistence, reconstruction,
//! playback) with a synchronous API that can be driven by tests and by the
//! command line front end; drawing and input capture live in separate
//! programs.

pub mod config;
pub mod curve;
pub mod decompose;
pub mod error;
pub mod playback;
pub mod reconstruct;
pub mod store;

pub use config::{AppConfig, DecomposeConfig, PlaybackConfig};
pub use curve::{parse_points_json, points_to_json, Point};
pub use decompose::{Decomposer, Epicycle, EpicycleSet, DEFAULT_SIGNIFICANCE_THRESHOLD};
pub use error::{CurveVizError, Result};
pub use playback::{PlaybackController, RenderedFrame};
pub use reconstruct::{positions_at, static_chain, ChainRecord};
