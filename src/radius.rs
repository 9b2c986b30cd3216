use crate::error::{Error, Result};
use std::fmt;
use umath::FF32;

/// Half-width of a box window, always within `1..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radius(u8);

impl Radius {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(100);

    /// `None` unless `1 <= radius <= 100`.
    pub const fn new(radius: usize) -> Option<Self> {
        if radius >= Self::MIN.0 as usize && radius <= Self::MAX.0 as usize {
            Some(Self(radius as u8))
        } else {
            None
        }
    }

    /// Saturate `radius` into `1..=100`.
    pub fn clamped(radius: usize) -> Self {
        Self(radius.clamp(Self::MIN.0 as usize, Self::MAX.0 as usize) as u8)
    }

    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Blur strength: the standard deviation of the Gaussian being approximated.
///
/// Finite and non-negative, which is also what makes it a valid [`FF32`].
#[derive(Clone, Copy)]
pub struct Sigma(FF32);

impl Sigma {
    /// Validate a raw sigma.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSigma`] if `sigma` is negative, infinite or NaN.
    pub fn new(sigma: f32) -> Result<Self> {
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(Error::InvalidSigma(sigma));
        }
        // SAFETY: checked finite above
        Ok(Self(unsafe { FF32::new(sigma) }))
    }

    pub fn get(self) -> f32 {
        *self.0
    }

    pub fn as_fast(self) -> FF32 {
        self.0
    }

    /// Box radius for a three pass blur of this strength.
    pub fn radius(self) -> Radius {
        estimate_radius(self.0)
    }
}

impl TryFrom<f32> for Sigma {
    type Error = Error;

    fn try_from(sigma: f32) -> Result<Self> {
        Self::new(sigma)
    }
}

impl fmt::Debug for Sigma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sigma").field(&self.get()).finish()
    }
}

/// Pick the box radius whose three-fold repetition matches a Gaussian of `sigma`.
///
/// Three boxes of width `w` have a combined variance of `3 * (w² - 1) / 12`, so
/// the ideal width is `sqrt(12σ² / 3 + 1)` and the radius is half of that
/// minus the centre pixel, rounded down. The result is clamped to `1..=100`.
pub fn estimate_radius(sigma: FF32) -> Radius {
    // σ² may overflow to infinity, which fast math may not see
    let sigma = *sigma;
    let ideal_width = (12.0 * sigma * sigma / 3.0 + 1.0).sqrt();
    // float to int casts saturate, so huge widths land on usize::MAX
    Radius::clamped(((ideal_width - 1.0) / 2.0) as usize)
}
