//! Offscreen viewer for the animated iso-contour field.
//!
//! Renders a frame sequence to PNG files. Window creation and frame
//! pacing belong to a host shell; this binary stands in as the host
//! loop, owning the playback state and feeding frame counts to the
//! pipeline.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use field_common::{FieldConfig, Playback};
use field_render::pipeline::FramePipeline;
use field_render::png;
use field_render::surface::PixmapSurface;

#[derive(Parser, Debug)]
#[command(name = "field-viewer")]
#[command(about = "Animated scalar-field contour renderer")]
struct Args {
    /// Configuration file (JSON); built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Number of frames to render
    #[arg(short = 'n', long, default_value_t = 60)]
    frames: u64,

    /// Output directory for rendered frames
    #[arg(short, long, default_value = "frames")]
    out_dir: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => FieldConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => FieldConfig::default(),
    };
    info!(
        cell_size = config.cell_size,
        backend = ?config.noise.backend,
        seed = config.noise.seed,
        levels = config.thresholds().len(),
        "configuration loaded"
    );

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let show_fps = config.show_fps;
    let mut pipeline = FramePipeline::new(config, args.width, args.height)?;
    let mut surface = PixmapSurface::new(args.width, args.height)?;
    let mut playback = Playback::new();

    let started = Instant::now();
    let mut rendered = 0u64;
    while rendered < args.frames {
        let Some(frame) = playback.advance() else {
            // nothing in this host toggles pause back off
            break;
        };

        pipeline.render_frame(&mut surface, frame);

        let encoded = png::create_png(
            &surface.to_rgba(),
            args.width as usize,
            args.height as usize,
        )?;
        let path = args.out_dir.join(format!("frame_{frame:04}.png"));
        std::fs::write(&path, &encoded)
            .with_context(|| format!("writing {}", path.display()))?;
        rendered += 1;

        if show_fps && rendered % 30 == 0 {
            let fps = rendered as f64 / started.elapsed().as_secs_f64();
            info!(frame, fps = (fps * 10.0).round() / 10.0, "render rate");
        }
    }

    info!(
        frames = rendered,
        elapsed_ms = started.elapsed().as_millis() as u64,
        out_dir = %args.out_dir.display(),
        "done"
    );
    Ok(())
}
