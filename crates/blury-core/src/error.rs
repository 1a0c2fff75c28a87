/// Errors returned by the focus-measure pipeline.
///
/// Every variant is a permanent input-validation failure; retrying with the
/// same pixels yields the same error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FocusError {
    #[error("invalid image dimensions (width={width}, height={height})")]
    InvalidImage { width: usize, height: usize },

    #[error("image too small for a focus measure (working size {width}x{height}, need at least 3x3)")]
    InsufficientData { width: usize, height: usize },

    #[error("invalid pixel buffer length (expected {expected} bytes, got {got})")]
    BufferLength { expected: usize, got: usize },
}
