use thiserror::Error;

/// Caller-contract violations. Every variant is an invalid argument: the blur
/// itself cannot fail on well-formed input.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The pixel buffer does not hold exactly `width * height` pixels.
    #[error("buffer holds {actual} pixels, expected {expected}")]
    BufferLength { expected: usize, actual: usize },
    /// `width * height` does not fit in a `usize`.
    #[error("image dimensions {width}x{height} overflow")]
    DimensionOverflow { width: usize, height: usize },
    /// Sigma was negative, infinite or NaN.
    #[error("sigma must be finite and non-negative, got {0}")]
    InvalidSigma(f32),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check that `len` pixels describe a `width` by `height` image.
pub(crate) fn check_dimensions(len: usize, width: usize, height: usize) -> Result<()> {
    let expected = width
        .checked_mul(height)
        .ok_or(Error::DimensionOverflow { width, height })?;
    if len != expected {
        return Err(Error::BufferLength {
            expected,
            actual: len,
        });
    }
    Ok(())
}
