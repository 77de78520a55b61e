use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use carousel::constants::*;
use carousel::{CarouselConfig, SlideDeck};
use carousel::config::ConfigOverrides;
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

mod ffmpeg;
mod texture_loader;
mod viewer;

use crate::ffmpeg::Ffmpeg;
use crate::viewer::Viewer;

#[derive(Parser, Debug)]
#[command(version, about = "Auto-advancing image carousel")]
struct Args {
    /// Directory of images, or a JSON slide manifest
    source: PathBuf,

    /// Delay between the track moving and the next slide becoming active (ms)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seconds each indicator takes to fill before advancing
    #[arg(long)]
    duration: Option<f32>,

    /// Track slide animation (ms)
    #[arg(long)]
    transition_ms: Option<u64>,

    /// Show slides in random order
    #[arg(long)]
    shuffle: bool,

    #[arg(long, default_value_t = RENDER_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT)]
    height: i32,

    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Encode the rendered frames to this video file (needs ffmpeg)
    #[arg(long)]
    record: Option<PathBuf>,

    /// Stop after this many full cycles
    #[arg(long)]
    cycles: Option<u32>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    if args.width <= 0 || args.height <= 0 || args.fps == 0 {
        bail!("width, height and fps must be positive");
    }

    // --- Load Slides ---
    let mut deck = if args.source.is_dir() {
        SlideDeck::from_directory(&args.source)?
    } else {
        SlideDeck::from_manifest(&args.source)?
    };
    if args.shuffle {
        deck.shuffle();
    }
    if deck.is_empty() {
        warn!(source = %args.source.display(), "no slides, nothing will render");
    }

    let cli = ConfigOverrides {
        duration: args.duration,
        advance_delay_ms: args.delay_ms,
        transition_ms: args.transition_ms,
    };
    let config = CarouselConfig::default()
        .merge(&deck.settings)
        .merge(&cli)
        .validate()?;
    info!(?config, "starting carousel");

    let (mut rl, thread) = raylib::init()
        .size(args.width / 2, args.height / 2)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut ffmpeg = args
        .record
        .as_deref()
        .map(|output| Ffmpeg::spawn(args.width, args.height, args.fps, output))
        .transpose()?;

    let mut viewer = Viewer::new(&mut rl, &thread, deck, config);

    let mut framebuffer = rl
        .load_render_texture(&thread, args.width as u32, args.height as u32)
        .map_err(|e| anyhow::anyhow!("failed to create render texture: {e}"))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        // Recordings advance by a fixed step so the video keeps real timing
        let dt = if ffmpeg.is_some() { 1.0 / args.fps as f32 } else { rl.get_frame_time() };
        viewer.update(dt);

        if args.cycles.is_some_and(|cycles| viewer.completed_cycles() >= cycles) {
            info!(cycles = viewer.completed_cycles(), "requested cycles shown");
            break;
        }

        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            viewer.draw(&mut d, args.width, args.height);
        });

        // Render textures are stored upside down, flip when drawing to the screen
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
        drop(d);

        if let Some(ffmpeg) = ffmpeg.as_mut() {
            let image = framebuffer
                .load_image()
                .map_err(|e| anyhow::anyhow!("failed to read back framebuffer: {e}"))?;
            ffmpeg.write(&image).context("recording failed")?;
        }
    }

    Ok(())
}
