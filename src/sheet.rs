use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::{RgbaImage, imageops};

use crate::foundation::error::{SpriteError, SpriteResult};

pub const DEFAULT_TARGET_SIZE: u32 = 64;

#[derive(Clone, Debug)]
pub struct SliceConfig {
    pub sheet_path: PathBuf,
    /// Animation mode name baked into output filenames (e.g. `walking`).
    pub mode: String,
    /// Columns in the sheet grid.
    pub cols: u32,
    /// Frames to export, row-major.
    pub frame_count: u32,
    /// Final square frame size; 0 keeps the original size.
    pub target_size: u32,
    /// Pad every frame to this square before resizing, so the subject keeps a
    /// consistent scale across sheets; 0 pads to the frame's own max side.
    pub normalize_size: u32,
    pub out_dir: PathBuf,
}

impl SliceConfig {
    pub fn validate(&self) -> SpriteResult<()> {
        if self.cols == 0 {
            return Err(SpriteError::validation("cols must be > 0"));
        }
        if self.frame_count == 0 {
            return Err(SpriteError::validation("frame count must be > 0"));
        }
        Ok(())
    }
}

/// Cut a grid-laid-out sprite sheet into numbered frames
/// (`robot_<mode>_NN.png`), interchangeable with the extractor's output
/// layout as loader input.
pub fn slice_sheet(cfg: &SliceConfig) -> SpriteResult<Vec<PathBuf>> {
    cfg.validate()?;

    let sheet = image::open(&cfg.sheet_path)
        .with_context(|| format!("open sheet '{}'", cfg.sheet_path.display()))?
        .to_rgba8();
    let (sheet_w, sheet_h) = sheet.dimensions();

    // Uniform grid: infer the frame cell from the sheet dimensions.
    let frame_w = sheet_w / cfg.cols;
    if frame_w == 0 {
        return Err(SpriteError::validation(
            "computed frame width is 0; check cols against the sheet width",
        ));
    }
    let rows_needed = cfg.frame_count.div_ceil(cfg.cols);
    let frame_h = sheet_h / rows_needed;
    if frame_h == 0 {
        return Err(SpriteError::validation(
            "computed frame height is 0; check cols/frames against the sheet size",
        ));
    }

    std::fs::create_dir_all(&cfg.out_dir)
        .with_context(|| format!("create output directory '{}'", cfg.out_dir.display()))?;

    let mut written = Vec::with_capacity(cfg.frame_count as usize);
    for i in 0..cfg.frame_count {
        let col = i % cfg.cols;
        let row = i / cfg.cols;
        let mut frame =
            imageops::crop_imm(&sheet, col * frame_w, row * frame_h, frame_w, frame_h).to_image();

        if cfg.target_size > 0 {
            frame = normalize_frame(&frame, cfg.target_size, cfg.normalize_size);
        }

        let out_path = cfg.out_dir.join(format!("robot_{}_{:02}.png", cfg.mode, i));
        frame
            .save(&out_path)
            .with_context(|| format!("save frame '{}'", out_path.display()))?;
        written.push(out_path);
    }

    Ok(written)
}

/// Pad to a transparent square (preserving aspect ratio), then
/// nearest-neighbor resize to `target_size`.
fn normalize_frame(frame: &RgbaImage, target_size: u32, normalize_size: u32) -> RgbaImage {
    let pad_dim = if normalize_size > 0 {
        normalize_size
    } else {
        frame.width().max(frame.height())
    };

    let mut padded;
    let square = if frame.width() != pad_dim || frame.height() != pad_dim {
        padded = RgbaImage::new(pad_dim, pad_dim);
        let x_off = i64::from(pad_dim.saturating_sub(frame.width()) / 2);
        let y_off = i64::from(pad_dim.saturating_sub(frame.height()) / 2);
        imageops::overlay(&mut padded, frame, x_off, y_off);
        &padded
    } else {
        frame
    };

    if square.width() != target_size || square.height() != target_size {
        imageops::resize(square, target_size, target_size, imageops::FilterType::Nearest)
    } else {
        square.clone()
    }
}
