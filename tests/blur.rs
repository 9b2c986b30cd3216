use argblur::{
    blur, blurred, box_blur, from_rgba, gaussian_blur, pack, to_rgba, unpack, Error, GaussianBlur,
    Radius, Sigma,
};
use fimg::Image;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn channel(pixels: &[u32], c: usize) -> Vec<u32> {
    pixels.iter().map(|&p| unpack(p)[c]).collect()
}

/// `width * height` pixels where only channel `c` varies, as a diagonal ramp.
fn ramp(width: usize, height: usize, c: usize) -> Vec<u32> {
    (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);
            let mut px = [0; 4];
            px[c] = ((x * 37 + y * 11) % 256) as u32;
            pack(px)
        })
        .collect()
}

#[test]
fn centre_impulse_radius_one() {
    init();
    let mut pixels = vec![pack([255, 0, 0, 0]); 25];
    pixels[2 * 5 + 2] = pack([255, 255, 0, 0]);

    box_blur(&mut pixels, 5, 5, Radius::MIN).unwrap();

    #[rustfmt::skip]
    let red = [
        28, 21, 21, 28, 0,
        21, 15, 15, 21, 0,
        21, 15, 15, 21, 0,
        28, 21, 21, 28, 0,
         0,  0,  0,  0, 0,
    ];
    assert_eq!(channel(&pixels, 1), red);
    assert!(channel(&pixels, 0).iter().all(|&a| a == 255));
    assert!(channel(&pixels, 2).iter().all(|&g| g == 0));
    assert!(channel(&pixels, 3).iter().all(|&b| b == 0));
    // the centre loses intensity, trailing corners stay dark
    assert!(red[12] < 255);
    assert_eq!(red[4], 0);
    assert_eq!(red[20], 0);
    assert_eq!(red[24], 0);
}

#[test]
fn channels_do_not_leak() {
    init();
    let (w, h) = (31, 19);
    for c in 0..4 {
        let mut pixels = ramp(w, h, c);
        gaussian_blur(&mut pixels, w, h, Sigma::new(5.0).unwrap()).unwrap();
        for other in (0..4).filter(|&o| o != c) {
            assert!(
                channel(&pixels, other).iter().all(|&v| v == 0),
                "channel {c} leaked into {other}"
            );
        }
        assert!(channel(&pixels, c).iter().any(|&v| v != 0));
    }
}

#[test]
fn flat_image_is_unchanged() {
    init();
    for sigma in [0.0, 1.5, 12.0, 500.0] {
        let mut pixels = vec![0x7f_c0_10_ee; 40 * 30];
        gaussian_blur(&mut pixels, 40, 30, Sigma::new(sigma).unwrap()).unwrap();
        assert!(pixels.iter().all(|&p| p == 0x7f_c0_10_ee), "sigma {sigma}");
    }
}

#[test]
fn empty_images() {
    init();
    let sigma = Sigma::new(2.0).unwrap();
    let mut pixels: Vec<u32> = Vec::new();
    gaussian_blur(&mut pixels, 0, 9, sigma).unwrap();
    gaussian_blur(&mut pixels, 9, 0, sigma).unwrap();
    assert!(blurred(&pixels, 0, 0, sigma).unwrap().is_empty());
}

#[test]
fn shape_is_preserved() {
    init();
    for (w, h) in [(1, 1), (1, 50), (50, 1), (7, 3), (64, 64)] {
        let src = ramp(w, h, 2);
        let out = blurred(&src, w, h, Sigma::new(3.0).unwrap()).unwrap();
        assert_eq!(out.len(), w * h);
    }
}

#[test]
fn rejects_mismatched_buffer() {
    init();
    let mut pixels = vec![0; 10];
    let err = gaussian_blur(&mut pixels, 3, 3, Sigma::new(1.0).unwrap()).unwrap_err();
    assert_eq!(
        err,
        Error::BufferLength {
            expected: 9,
            actual: 10
        }
    );
    assert_eq!(err.to_string(), "buffer holds 10 pixels, expected 9");
}

#[test]
fn blur_smooths_edges() {
    init();
    // hard vertical edge, black to white
    let (w, h) = (20, 4);
    let src: Vec<u32> = (0..w * h)
        .map(|i| if i % w < w / 2 { 0xff00_0000 } else { 0xffff_ffff })
        .collect();
    let out = GaussianBlur::with_radius(Radius::new(2).unwrap())
        .apply_copy(&src, w, h)
        .unwrap();
    let green = channel(&out, 2);
    let row = &green[..w];
    assert!(row.windows(2).all(|p| p[0] <= p[1]), "{row:?}");
    assert!(row.iter().any(|&v| v > 0 && v < 255), "{row:?}");
}

#[test]
fn image_adapter_matches_packed() {
    init();
    let (w, h) = (12u32, 9u32);
    let mut bytes: Vec<u8> = (0..w * h * 4).map(|i| (i * 53 % 251) as u8).collect();
    let sigma = Sigma::new(2.5).unwrap();

    let mut expected: Vec<u32> = bytes
        .chunks_exact(4)
        .map(|c| from_rgba([c[0], c[1], c[2], c[3]]))
        .collect();
    gaussian_blur(&mut expected, w as usize, h as usize, sigma).unwrap();
    let expected: Vec<u8> = expected.into_iter().flat_map(to_rgba).collect();

    blur(&mut Image::build(w, h).buf(&mut *bytes), sigma).unwrap();
    assert_eq!(bytes, expected);
}
