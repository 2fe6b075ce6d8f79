use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use spriteprep::{
    ExtractConfig, FrameIndex, FrameRange, RobotMode, SliceConfig, export_gif, extract_frames,
    find_best_loop, generate_ground_tile, load_frames, output_name, robot_frame, slice_sheet,
};

#[derive(Parser, Debug)]
#[command(name = "spriteprep", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect a frame sequence, search for the best loop point, and export it as a GIF.
    Loop(LoopArgs),
    /// Generate the procedural rock ground tile as a PNG.
    Tile(TileArgs),
    /// Generate one frame of the procedural robot sprite.
    Robot(RobotArgs),
    /// Slice a grid sprite sheet into numbered frames.
    Slice(SliceArgs),
    /// Extract frames from a video (requires `ffmpeg` on PATH).
    Extract(ExtractArgs),
}

#[derive(Parser, Debug)]
struct LoopArgs {
    /// Source frame directory.
    #[arg(long)]
    dir: PathBuf,

    /// Filename pattern with one integer placeholder (e.g. `robot_walking_%02d.png`).
    #[arg(long)]
    pattern: String,

    /// Explicit range start (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u32,

    /// Explicit range end (exclusive).
    #[arg(long, default_value_t = 36)]
    end: u32,

    /// Playback rate for the exported GIF.
    #[arg(long, default_value_t = 24.0)]
    fps: f64,

    /// Search for the best loop instead of using --start/--end.
    #[arg(long)]
    find_best: bool,

    /// Search window start (inclusive).
    #[arg(long, default_value_t = 0)]
    search_start: u32,

    /// Search window end (exclusive).
    #[arg(long, default_value_t = 36)]
    search_end: u32,

    /// Minimum candidate loop length.
    #[arg(long, default_value_t = 6)]
    min_len: u32,

    /// Maximum candidate loop length.
    #[arg(long, default_value_t = 12)]
    max_len: u32,

    /// If set, write the chosen sequence here as a looping GIF.
    #[arg(long)]
    gif: Option<PathBuf>,

    /// Print the search result as JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct TileArgs {
    /// Output PNG path.
    #[arg(long, default_value = "assets/textures/ground.png")]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RobotArgs {
    /// Animation mode (idle, walking, attack-1-ing, jumping, hurting, spawning, dying).
    #[arg(long)]
    mode: String,

    /// Frame index within the mode's cycle.
    #[arg(long)]
    frame: u32,

    /// Output directory.
    #[arg(long, default_value = "assets/textures")]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct SliceArgs {
    /// Path to the source sprite sheet PNG.
    sheet: PathBuf,

    /// Animation mode name baked into output filenames.
    #[arg(long)]
    mode: String,

    /// Number of columns in the sheet grid.
    #[arg(long)]
    cols: u32,

    /// Number of frames to export (row-major order).
    #[arg(long, default_value_t = 10)]
    frames: u32,

    /// Resize each frame to this square size; 0 keeps the original size.
    #[arg(long, default_value_t = spriteprep::DEFAULT_TARGET_SIZE)]
    target_size: u32,

    /// Pad all frames to this size before resizing; 0 pads per-frame.
    #[arg(long, default_value_t = 0)]
    normalize_size: u32,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct ExtractArgs {
    /// Path to the input video (any ffmpeg-supported container).
    movie: PathBuf,

    /// Directory to write frames into; defaults to `<movie stem>_frames`
    /// next to the input.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Optional FPS override; omitted means every source frame.
    #[arg(long)]
    fps: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Loop(args) => cmd_loop(args),
        Command::Tile(args) => cmd_tile(args),
        Command::Robot(args) => cmd_robot(args),
        Command::Slice(args) => cmd_slice(args),
        Command::Extract(args) => cmd_extract(args),
    }
}

fn cmd_loop(args: LoopArgs) -> anyhow::Result<()> {
    let range = if args.find_best {
        let window = FrameRange::new(FrameIndex(args.search_start), FrameIndex(args.search_end))?;
        let best = find_best_loop(&args.dir, &args.pattern, window, args.min_len, args.max_len)?;
        if args.json {
            println!("{}", serde_json::to_string(&best)?);
        } else {
            println!(
                "best range: start={} end={} len={} seam_score={:.2}",
                best.range.start.0,
                best.range.end.0,
                best.range.len_frames(),
                best.score
            );
        }
        best.range
    } else {
        FrameRange::new(FrameIndex(args.start), FrameIndex(args.end))?
    };

    let frames = load_frames(&args.dir, &args.pattern, range)?;

    if let Some(gif_path) = &args.gif {
        export_gif(&frames, gif_path, args.fps)?;
        eprintln!("wrote {}", gif_path.display());
    } else if !args.find_best {
        eprintln!("loaded {} frames from {}", frames.len(), args.dir.display());
    }

    Ok(())
}

fn cmd_tile(args: TileArgs) -> anyhow::Result<()> {
    let tile = generate_ground_tile();
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    tile.save(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_robot(args: RobotArgs) -> anyhow::Result<()> {
    let mode: RobotMode = args.mode.parse()?;
    let img = robot_frame(mode, args.frame);
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let out = args.out_dir.join(output_name(mode, args.frame));
    img.save(&out)
        .with_context(|| format!("write png '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_slice(args: SliceArgs) -> anyhow::Result<()> {
    let cfg = SliceConfig {
        sheet_path: args.sheet,
        mode: args.mode,
        cols: args.cols,
        frame_count: args.frames,
        target_size: args.target_size,
        normalize_size: args.normalize_size,
        out_dir: args.out_dir,
    };
    let written = slice_sheet(&cfg)?;
    for path in &written {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_extract(args: ExtractArgs) -> anyhow::Result<()> {
    let out_dir = match args.out_dir {
        Some(dir) => dir,
        None => default_extract_dir(&args.movie),
    };
    let cfg = ExtractConfig {
        movie_path: args.movie,
        out_dir: out_dir.clone(),
        fps: args.fps,
    };
    extract_frames(&cfg)?;
    eprintln!("wrote frames to {}", out_dir.display());
    Ok(())
}

/// `/path/to/clip.mov` -> `/path/to/clip_frames`
fn default_extract_dir(movie: &Path) -> PathBuf {
    let stem = movie
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "movie".to_string());
    movie.with_file_name(format!("{stem}_frames"))
}
