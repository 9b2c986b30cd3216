use crate::boxblur::box_blur_in;
use crate::error::{check_dimensions, Result};
use crate::radius::{Radius, Sigma};
use log::debug;

/// Repeated box blur approximating a Gaussian.
///
/// ```
/// use argblur::{GaussianBlur, Radius, Sigma};
///
/// let blur = GaussianBlur::new(Sigma::new(3.0)?);
/// assert_eq!(blur.radius(), Radius::new(2).unwrap());
///
/// let mut pixels = vec![0xff00_0000; 16];
/// GaussianBlur::with_radius(Radius::MIN).passes(1).apply(&mut pixels, 4, 4)?;
/// # Ok::<(), argblur::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GaussianBlur {
    radius: Radius,
    passes: usize,
}

impl GaussianBlur {
    /// Three passes give a close Gaussian approximation.
    pub const DEFAULT_PASSES: usize = 3;

    /// Blur of strength `sigma`, radius from [`estimate_radius`](crate::estimate_radius).
    pub fn new(sigma: Sigma) -> Self {
        Self::with_radius(sigma.radius())
    }

    /// Blur with a fixed box radius.
    pub const fn with_radius(radius: Radius) -> Self {
        Self {
            radius,
            passes: Self::DEFAULT_PASSES,
        }
    }

    /// Number of box passes. Zero leaves images untouched.
    #[must_use]
    pub const fn passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    pub const fn radius(&self) -> Radius {
        self.radius
    }

    pub const fn pass_count(&self) -> usize {
        self.passes
    }

    /// Blur `pixels` in place.
    ///
    /// # Errors
    ///
    /// Fails if `pixels` does not hold exactly `width * height` pixels.
    pub fn apply(&self, pixels: &mut [u32], width: usize, height: usize) -> Result<()> {
        check_dimensions(pixels.len(), width, height)?;
        if pixels.is_empty() || self.passes == 0 {
            debug!("nothing to blur ({width}x{height}, {} passes)", self.passes);
            return Ok(());
        }
        debug!(
            "blurring {width}x{height} with {} passes of r={}",
            self.passes, self.radius
        );
        let mut backbuf = vec![0; pixels.len()];
        for _ in 0..self.passes {
            box_blur_in(pixels, &mut backbuf, width, height, self.radius);
        }
        Ok(())
    }

    /// Blur a copy of `pixels`, leaving the source untouched.
    ///
    /// # Errors
    ///
    /// As [`apply`](Self::apply).
    pub fn apply_copy(&self, pixels: &[u32], width: usize, height: usize) -> Result<Vec<u32>> {
        let mut out = pixels.to_vec();
        self.apply(&mut out, width, height)?;
        Ok(out)
    }
}

/// Gaussian blur `pixels` in place with three box passes.
///
/// # Errors
///
/// Fails if `pixels` does not hold exactly `width * height` pixels.
pub fn gaussian_blur(pixels: &mut [u32], width: usize, height: usize, sigma: Sigma) -> Result<()> {
    debug!("gaussian blur sigma={}", sigma.get());
    GaussianBlur::new(sigma).apply(pixels, width, height)
}

/// Gaussian blurred copy of `pixels`.
///
/// # Errors
///
/// Fails if `pixels` does not hold exactly `width * height` pixels.
pub fn blurred(pixels: &[u32], width: usize, height: usize, sigma: Sigma) -> Result<Vec<u32>> {
    GaussianBlur::new(sigma).apply_copy(pixels, width, height)
}
