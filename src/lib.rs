#![doc = include_str!("../README.md")]
mod boxblur;
mod error;
mod gauss;
mod pixel;
mod radius;

use fimg::Image;

pub use boxblur::box_blur;
pub use error::{Error, Result};
pub use gauss::{blurred, gaussian_blur, GaussianBlur};
pub use pixel::{from_rgba, pack, to_rgba, unpack, CHANNELS};
pub use radius::{estimate_radius, Radius, Sigma};

/// Gaussian blur an RGBA image in place.
///
/// # Errors
///
/// Fails if the image buffer does not hold `width * height` pixels.
pub fn blur<T: AsRef<[u8]> + AsMut<[u8]>>(
    image: &mut Image<T, CHANNELS>,
    sigma: Sigma,
) -> Result<()> {
    let width = image.width() as usize;
    let height = image.height() as usize;
    // SAFETY: bytes are only overwritten, the buffer keeps its length
    let bytes = unsafe { image.buffer_mut() }.as_mut();

    let mut pixels: Vec<u32> = bytes
        .chunks_exact(CHANNELS)
        .map(|c| from_rgba([c[0], c[1], c[2], c[3]]))
        .collect();
    gaussian_blur(&mut pixels, width, height, sigma)?;

    for (chunk, px) in bytes.chunks_exact_mut(CHANNELS).zip(pixels) {
        chunk.copy_from_slice(&to_rgba(px));
    }
    Ok(())
}
