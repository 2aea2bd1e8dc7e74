/// Result alias that carries the custom [`CurveVizError`] type.
pub type Result<T> = std::result::Result<T, CurveVizError>;

/// Common error type for the core crate.
///
/// Every failure here is synchronous and local to the call that raised it;
/// the core performs no I/O of its own beyond the store's file helpers, so
/// there is nothing to retry.
#[derive(Debug, thiserror::Error)]
pub enum CurveVizError {
    /// Decomposition was handed fewer sampled points than a discrete
    /// Fourier transform can operate on.
    #[error("decomposition requires at least 2 sampled points, got {0}")]
    InsufficientData(usize),
    /// A stored epicycle record could not be parsed. Deserialization aborts
    /// on the first bad line instead of skipping it; a partially loaded set
    /// would reconstruct the wrong curve.
    #[error("malformed epicycle record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
    /// A non-positive (or non-finite) playback speed factor was requested.
    #[error("speed factor must be a positive number, got {0}")]
    InvalidSpeed(f64),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON (de)serialization errors.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
