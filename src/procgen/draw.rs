use image::{Rgba, RgbaImage};

/// Fill the inclusive box `[x0, x1] x [y0, y1]`, optionally tracing a 1px
/// outline on its border. Coordinates are signed and clipped to the canvas,
/// so callers can animate shapes partially off-screen.
pub fn fill_rect(
    img: &mut RgbaImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    fill: Rgba<u8>,
    outline: Option<Rgba<u8>>,
) {
    if x1 < x0 || y1 < y0 {
        return;
    }
    for y in y0..=y1 {
        for x in x0..=x1 {
            let Some(px) = pixel_mut(img, x, y) else {
                continue;
            };
            let on_border = x == x0 || x == x1 || y == y0 || y == y1;
            *px = match outline {
                Some(o) if on_border => o,
                _ => fill,
            };
        }
    }
}

/// Fill the ellipse inscribed in the inclusive box `[x0, x1] x [y0, y1]`.
/// Border pixels (inside pixels with an outside 4-neighbor) take the outline
/// color when one is given.
pub fn fill_ellipse(
    img: &mut RgbaImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    fill: Rgba<u8>,
    outline: Option<Rgba<u8>>,
) {
    if x1 < x0 || y1 < y0 {
        return;
    }
    let cx = f64::from(x0 + x1) / 2.0;
    let cy = f64::from(y0 + y1) / 2.0;
    let rx = f64::from(x1 - x0) / 2.0 + 0.5;
    let ry = f64::from(y1 - y0) / 2.0 + 0.5;

    let inside = |x: i32, y: i32| -> bool {
        let dx = (f64::from(x) - cx) / rx;
        let dy = (f64::from(y) - cy) / ry;
        dx * dx + dy * dy <= 1.0
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            if !inside(x, y) {
                continue;
            }
            let Some(px) = pixel_mut(img, x, y) else {
                continue;
            };
            let on_border = !inside(x - 1, y) || !inside(x + 1, y) || !inside(x, y - 1)
                || !inside(x, y + 1);
            *px = match outline {
                Some(o) if on_border => o,
                _ => fill,
            };
        }
    }
}

fn pixel_mut(img: &mut RgbaImage, x: i32, y: i32) -> Option<&mut Rgba<u8>> {
    if x < 0 || y < 0 || x as u32 >= img.width() || y as u32 >= img.height() {
        return None;
    }
    Some(img.get_pixel_mut(x as u32, y as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILL: Rgba<u8> = Rgba([10, 20, 30, 255]);
    const LINE: Rgba<u8> = Rgba([1, 2, 3, 255]);

    #[test]
    fn rect_fills_interior_and_outlines_border() {
        let mut img = RgbaImage::new(8, 8);
        fill_rect(&mut img, 1, 1, 4, 4, FILL, Some(LINE));
        assert_eq!(*img.get_pixel(1, 1), LINE);
        assert_eq!(*img.get_pixel(4, 2), LINE);
        assert_eq!(*img.get_pixel(2, 2), FILL);
        assert_eq!(*img.get_pixel(5, 5), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn rect_clips_to_canvas() {
        let mut img = RgbaImage::new(4, 4);
        fill_rect(&mut img, -2, -2, 6, 1, FILL, None);
        assert_eq!(*img.get_pixel(0, 0), FILL);
        assert_eq!(*img.get_pixel(3, 1), FILL);
        assert_eq!(*img.get_pixel(0, 2), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn ellipse_center_is_filled_and_corners_stay_empty() {
        let mut img = RgbaImage::new(9, 9);
        fill_ellipse(&mut img, 1, 1, 7, 7, FILL, Some(LINE));
        assert_eq!(*img.get_pixel(4, 4), FILL);
        // Bounding-box corners are outside the inscribed ellipse.
        assert_eq!(*img.get_pixel(1, 1), Rgba([0, 0, 0, 0]));
        assert_eq!(*img.get_pixel(7, 7), Rgba([0, 0, 0, 0]));
        // Extremes along the axes are border pixels.
        assert_eq!(*img.get_pixel(4, 1), LINE);
        assert_eq!(*img.get_pixel(1, 4), LINE);
    }
}
