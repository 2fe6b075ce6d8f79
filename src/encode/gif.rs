use std::{fs::File, io::BufWriter, path::Path};

use anyhow::Context as _;
use image::{
    Delay, Frame, RgbaImage,
    codecs::gif::{GifEncoder, Repeat},
};

use crate::foundation::error::{SpriteError, SpriteResult};

/// Per-frame display time in whole milliseconds for a playback rate.
///
/// The rate is clamped away from zero before the division, so `fps = 0`
/// yields the 10-second-per-frame floor rather than a blow-up.
pub fn frame_duration_ms(fps: f64) -> u32 {
    (1000.0 / fps.max(0.1)).round() as u32
}

pub fn ensure_parent_dir(path: &Path) -> SpriteResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write `frames` as an infinitely looping animated GIF at `out_path`,
/// each frame shown for the same duration derived from `fps`.
///
/// Frame order is preserved exactly; fully transparent pixels keep a
/// transparent palette index in the output. Parent directories are created
/// and an existing file at the path is overwritten.
pub fn export_gif(frames: &[RgbaImage], out_path: &Path, fps: f64) -> SpriteResult<()> {
    if frames.is_empty() {
        return Err(SpriteError::EmptySequence);
    }

    ensure_parent_dir(out_path)?;
    let file = File::create(out_path)
        .with_context(|| format!("create gif '{}'", out_path.display()))?;

    let delay = Delay::from_numer_denom_ms(frame_duration_ms(fps), 1);

    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder
        .set_repeat(Repeat::Infinite)
        .context("set gif repeat")?;
    for frame in frames {
        encoder
            .encode_frame(Frame::from_parts(frame.clone(), 0, 0, delay))
            .with_context(|| format!("encode gif frame into '{}'", out_path.display()))?;
    }

    Ok(())
}
