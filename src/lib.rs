//! Offline asset preparation for a 2D game.
//!
//! Five bounded, deterministic tools share this crate:
//!
//! 1. **Generate**: procedural pixel art — a rocky ground tile
//!    ([`procgen::tile`]) and a parametric robot sprite across seven
//!    animation modes ([`procgen::robot`]).
//! 2. **Extract**: decode a recorded video into a numbered PNG frame
//!    sequence via the system `ffmpeg` ([`extract`]).
//! 3. **Slice**: cut an externally drawn sprite sheet into the same numbered
//!    layout ([`sheet`]).
//! 4. **Search**: brute-force the frame range whose first and last frame
//!    make the most seamless animation loop ([`frames::search`]), scored by
//!    an alpha-masked pixel difference ([`frames::score`]).
//! 5. **Export**: encode a chosen frame sequence as an infinitely looping
//!    GIF ([`encode::gif`]).
//!
//! Every tool is a single-shot transform over local files: no services, no
//! caches, no partial success. Failures surface as one fatal [`SpriteError`].
#![forbid(unsafe_code)]

pub mod encode;
pub mod extract;
pub mod foundation;
pub mod frames;
pub mod procgen;
pub mod sheet;

pub use encode::gif::{export_gif, frame_duration_ms};
pub use extract::{EXTRACT_PATTERN, ExtractConfig, extract_frames, is_ffmpeg_on_path};
pub use foundation::core::{FrameIndex, FrameRange};
pub use foundation::error::{SpriteError, SpriteResult};
pub use frames::load::{format_pattern, frame_path, load_frames};
pub use frames::score::seam_score;
pub use frames::search::{BestLoop, candidate_ranges, find_best_loop};
pub use procgen::robot::{RobotMode, SPRITE_SIZE, output_name, robot_frame};
pub use procgen::tile::{TILE_SIZE, generate_ground_tile, ground_color};
pub use sheet::{DEFAULT_TARGET_SIZE, SliceConfig, slice_sheet};
