//! Packed `0xAARRGGBB` pixels.

/// Number of channels in a packed pixel.
pub const CHANNELS: usize = 4;

/// Bit offsets of alpha, red, green, blue.
const SHIFTS: [u32; CHANNELS] = [24, 16, 8, 0];

/// Split a packed pixel into `[a, r, g, b]`.
#[inline]
pub fn unpack(pixel: u32) -> [u32; CHANNELS] {
    SHIFTS.map(|s| (pixel >> s) & 0xff)
}

/// Inverse of [`unpack`]. Channels above 255 are masked off.
#[inline]
pub fn pack(channels: [u32; CHANNELS]) -> u32 {
    let mut pixel = 0;
    for (c, s) in channels.into_iter().zip(SHIFTS) {
        pixel |= (c & 0xff) << s;
    }
    pixel
}

/// Build a packed pixel from RGBA bytes, as laid out by [`fimg::Image`].
#[inline]
pub fn from_rgba([r, g, b, a]: [u8; CHANNELS]) -> u32 {
    u32::from_be_bytes([a, r, g, b])
}

/// Inverse of [`from_rgba`].
#[inline]
pub fn to_rgba(pixel: u32) -> [u8; CHANNELS] {
    let [a, r, g, b] = pixel.to_be_bytes();
    [r, g, b, a]
}

/// Running per-channel sum over a window of pixels.
///
/// A window holds at most `2 * 100 + 2` pixels, so each channel peaks at
/// `202 * 255`, well inside a `u32`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Window {
    sums: [u32; CHANNELS],
    count: u32,
}

impl Window {
    #[inline]
    pub fn push(&mut self, pixel: u32) {
        let px = unpack(pixel);
        for i in 0..CHANNELS {
            self.sums[i] += px[i];
        }
        self.count += 1;
    }

    #[inline]
    pub fn pop(&mut self, pixel: u32) {
        let px = unpack(pixel);
        for i in 0..CHANNELS {
            self.sums[i] -= px[i];
        }
        self.count -= 1;
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.count
    }

    /// Truncating per-channel mean, repacked.
    ///
    /// The window must be non-empty.
    #[inline]
    pub fn mean(&self) -> u32 {
        debug_assert!(self.count > 0, "mean of an empty window");
        pack(self.sums.map(|s| s / self.count))
    }
}
