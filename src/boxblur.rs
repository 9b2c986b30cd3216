use crate::error::{check_dimensions, Result};
use crate::pixel::Window;
use crate::radius::Radius;
use log::trace;

/// One separable box pass over a packed ARGB image.
///
/// Every row is averaged into a scratch buffer with a sliding window, then
/// every column of the scratch buffer is averaged back into `pixels`. The
/// window covering position `x` spans `x - radius ..= x + radius + 1`,
/// clipped to the image, and each channel is divided by the number of pixels
/// actually inside it, truncating.
///
/// Allocates a single scratch buffer the size of `pixels`. Empty images are
/// left alone.
///
/// # Errors
///
/// Fails if `pixels` does not hold exactly `width * height` pixels.
pub fn box_blur(pixels: &mut [u32], width: usize, height: usize, radius: Radius) -> Result<()> {
    check_dimensions(pixels.len(), width, height)?;
    if pixels.is_empty() {
        return Ok(());
    }
    let mut backbuf = vec![0; pixels.len()];
    box_blur_in(pixels, &mut backbuf, width, height, radius);
    Ok(())
}

/// [`box_blur`] with caller-provided scratch space. Dimensions must already
/// be checked, and `backbuf` must be as long as `frontbuf`.
pub(crate) fn box_blur_in(
    frontbuf: &mut [u32],
    backbuf: &mut [u32],
    width: usize,
    height: usize,
    radius: Radius,
) {
    debug_assert_eq!(frontbuf.len(), width * height);
    debug_assert_eq!(frontbuf.len(), backbuf.len());
    trace!("box pass {width}x{height} r={radius}");
    box_blur_horz(frontbuf, backbuf, width, height, radius.get());
    box_blur_vert(backbuf, frontbuf, width, height, radius.get());
}

#[inline]
fn box_blur_horz(src: &[u32], dst: &mut [u32], width: usize, height: usize, radius: usize) {
    for y in 0..height {
        slide(src, dst, y * width, 1, width, radius);
    }
}

#[inline]
fn box_blur_vert(src: &[u32], dst: &mut [u32], width: usize, height: usize, radius: usize) {
    for x in 0..width {
        slide(src, dst, x, width, height, radius);
    }
}

/// Moving average along the line `start, start + step, ..` of `len` pixels.
fn slide(src: &[u32], dst: &mut [u32], start: usize, step: usize, len: usize, radius: usize) {
    if len == 0 {
        return;
    }
    let at = |i: usize| start + i * step;

    let mut window = Window::default();
    for i in 0..=radius.min(len - 1) {
        window.push(src[at(i)]);
    }

    for x in 0..len {
        let entering = x + radius + 1;
        if entering < len {
            window.push(src[at(entering)]);
        }
        // evict x - radius - 1 once it is a real index, i.e. >= 0
        if x > radius {
            window.pop(src[at(x - radius - 1)]);
        }
        debug_assert!(window.len() > 0);
        dst[at(x)] = window.mean();
    }
}
