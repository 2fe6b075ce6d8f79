use image::{Rgba, RgbaImage};

pub const TILE_SIZE: u32 = 64;

// Blue-gray rock palette.
const ROCK_DARK: Rgba<u8> = Rgba([0x1c, 0x23, 0x30, 255]);
const ROCK_MID: Rgba<u8> = Rgba([0x2b, 0x36, 0x48, 255]);
const ROCK_LIGHT: Rgba<u8> = Rgba([0x45, 0x57, 0x71, 255]);
const ROCK_HIGHLIGHT: Rgba<u8> = Rgba([0x6a, 0x7a, 0x8e, 255]);

/// Color of pixel `(x, y)` in the 64x64 rocky ground tile.
///
/// Granular variation comes from a mix of linear and xor terms, which avoids
/// obvious stripes while staying fully deterministic.
pub fn ground_color(x: u32, y: u32) -> Rgba<u8> {
    let n = (x * 13 + y * 17 + (x ^ (y * 3))) & 63;

    // Bias toward mid and light, with very rare highlights.
    let mut color = if n < 8 {
        ROCK_DARK // deeper pockets
    } else if n < 46 {
        ROCK_MID // main mass
    } else if n < 62 {
        ROCK_LIGHT // lighter planes
    } else {
        ROCK_HIGHLIGHT // very sparse bright flecks
    };

    // Occasional darker "cracks", mostly vertical-ish.
    if y > 6 && y < TILE_SIZE - 4 && x % 11 == 0 && (x + y) % 4 == 0 {
        color = ROCK_DARK;
    }

    // Sparse extra light pixels deeper in the rock.
    if y > 10 && y < TILE_SIZE - 6 && (x + 2 * y) % 19 == 0 {
        color = ROCK_LIGHT;
    }

    color
}

pub fn generate_ground_tile() -> RgbaImage {
    RgbaImage::from_fn(TILE_SIZE, TILE_SIZE, ground_color)
}
