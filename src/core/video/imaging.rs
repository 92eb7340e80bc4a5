// src/core/video/imaging.rs
//
// Pixel-level operations on 8-bit grayscale images.

use image::{GrayImage, Luma, RgbImage};

use crate::core::dsp::{mean, std_dev, variance};

/// BT.601 luma conversion
pub fn to_grayscale(frame: &RgbImage) -> GrayImage {
    let (w, h) = frame.dimensions();
    GrayImage::from_fn(w, h, |x, y| {
        let p = frame.get_pixel(x, y);
        let luma = 0.299 * f64::from(p[0]) + 0.587 * f64::from(p[1]) + 0.114 * f64::from(p[2]);
        Luma([luma.round().clamp(0.0, 255.0) as u8])
    })
}

/// Reflect-101 border index for offsets of at most one pixel
fn reflect101(i: i64, len: i64) -> u32 {
    if len <= 1 {
        return 0;
    }
    let r = if i < 0 {
        -i
    } else if i >= len {
        2 * (len - 1) - i
    } else {
        i
    };
    r as u32
}

/// 4-neighbour Laplacian response with reflect-101 borders
pub fn laplacian(image: &GrayImage) -> Vec<f64> {
    let (w, h) = image.dimensions();
    let (wi, hi) = (i64::from(w), i64::from(h));
    let at = |x: i64, y: i64| f64::from(image.get_pixel(reflect101(x, wi), reflect101(y, hi))[0]);

    let mut out = Vec::with_capacity(w as usize * h as usize);
    for y in 0..hi {
        for x in 0..wi {
            let v = at(x, y - 1) + at(x - 1, y) + at(x + 1, y) + at(x, y + 1) - 4.0 * at(x, y);
            out.push(v);
        }
    }
    out
}

/// Variance of the Laplacian response; low values mean little fine detail
pub fn laplacian_variance(image: &GrayImage) -> f64 {
    variance(&laplacian(image))
}

/// Standard deviation of pixel intensities
pub fn intensity_std(image: &GrayImage) -> f64 {
    let values: Vec<f64> = image.as_raw().iter().map(|&v| f64::from(v)).collect();
    std_dev(&values)
}

/// Source coordinate and weight for one destination index, pixel-centre aligned
fn linear_tap(dst: u32, scale: f64, src_len: u32) -> (u32, u32, f64) {
    let pos = (f64::from(dst) + 0.5) * scale - 0.5;
    let mut i0 = pos.floor();
    let mut frac = pos - i0;
    if i0 < 0.0 {
        i0 = 0.0;
        frac = 0.0;
    }
    let last = f64::from(src_len.saturating_sub(1));
    if i0 >= last {
        i0 = last;
        frac = 0.0;
    }
    let i0 = i0 as u32;
    let i1 = (i0 + 1).min(src_len.saturating_sub(1));
    (i0, i1, frac)
}

/// Bilinear resize with edge clamping, rounded back to 8 bits
pub fn resize_bilinear(image: &GrayImage, new_w: u32, new_h: u32) -> GrayImage {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 || new_w == 0 || new_h == 0 {
        return GrayImage::new(new_w, new_h);
    }
    let sx = f64::from(w) / f64::from(new_w);
    let sy = f64::from(h) / f64::from(new_h);

    GrayImage::from_fn(new_w, new_h, |x, y| {
        let (x0, x1, fx) = linear_tap(x, sx, w);
        let (y0, y1, fy) = linear_tap(y, sy, h);
        let p = |px: u32, py: u32| f64::from(image.get_pixel(px, py)[0]);
        let top = p(x0, y0) * (1.0 - fx) + p(x1, y0) * fx;
        let bottom = p(x0, y1) * (1.0 - fx) + p(x1, y1) * fx;
        let v = top * (1.0 - fy) + bottom * fy;
        Luma([v.round().clamp(0.0, 255.0) as u8])
    })
}

/// Mean absolute difference between an image and its 8x down-then-up
/// resampled copy. Images too small to downsample score 0.
pub fn blockiness(image: &GrayImage) -> f64 {
    let (w, h) = image.dimensions();
    let (small_w, small_h) = (w / 8, h / 8);
    if small_w == 0 || small_h == 0 {
        return 0.0;
    }
    let small = resize_bilinear(image, small_w, small_h);
    let restored = resize_bilinear(&small, w, h);

    let diffs: Vec<f64> = image
        .as_raw()
        .iter()
        .zip(restored.as_raw())
        .map(|(&a, &b)| f64::from(a.abs_diff(b)))
        .collect();
    mean(&diffs)
}
