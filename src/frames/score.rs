use image::{RgbaImage, imageops};

/// Mean squared per-channel color difference between `a` and `b`, restricted
/// to pixels where neither image is fully transparent.
///
/// If the dimensions differ, `b` is resampled to `a`'s size with
/// nearest-neighbor so hard pixel-art edges stay hard. The alpha channel only
/// gates which pixels count; its numeric value never enters the score. With no
/// jointly-opaque pixel at all the score is 0.
pub fn seam_score(a: &RgbaImage, b: &RgbaImage) -> f64 {
    let resized;
    let b = if a.dimensions() != b.dimensions() {
        resized = imageops::resize(b, a.width(), a.height(), imageops::FilterType::Nearest);
        &resized
    } else {
        b
    };

    let mut total = 0u64;
    let mut count = 0u64;

    for (pa, pb) in a.pixels().zip(b.pixels()) {
        if pa[3] == 0 || pb[3] == 0 {
            continue;
        }
        for c in 0..3 {
            let d = i64::from(pa[c]) - i64::from(pb[c]);
            total += (d * d) as u64;
        }
        count += 3;
    }

    if count == 0 {
        return 0.0;
    }
    total as f64 / count as f64
}
