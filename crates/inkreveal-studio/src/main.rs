//! InkReveal studio: replays a scripted scratch gesture over a card and logs
//! what the reveal machine does.
//!
//! ```text
//! inkreveal-studio --rows 5 --threshold 45 -v
//! RUST_LOG=inkreveal_engine=trace inkreveal-studio --config card.toml
//! ```

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use inkreveal_engine::logging::{init_logging, LoggingConfig};
use inkreveal_engine::time::FrameClock;
use inkreveal_ui::prelude::*;

mod config;
mod gesture;

use config::StudioConfig;
use gesture::Gesture;

#[derive(Parser)]
#[command(name = "inkreveal-studio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Replay a scratch gesture over an InkReveal card", long_about = None)]
struct Cli {
    /// TOML file with card size, replay and scratch settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Card width in logical pixels
    #[arg(long)]
    width: Option<f32>,

    /// Card height in logical pixels
    #[arg(long)]
    height: Option<f32>,

    /// Coverage percentage that must be exceeded to reveal
    #[arg(short, long)]
    threshold: Option<f32>,

    /// Horizontal passes in the scripted zigzag
    #[arg(long)]
    rows: Option<u32>,

    /// Pace frames with the wall clock instead of fixed virtual steps
    #[arg(long)]
    realtime: bool,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        default_level: if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info },
        ..LoggingConfig::default()
    });

    let mut config = match &cli.config {
        Some(path) => StudioConfig::load(path)?,
        None => StudioConfig::default(),
    };
    if let Some(w) = cli.width { config.width = w; }
    if let Some(h) = cli.height { config.height = h; }
    if let Some(t) = cli.threshold { config.scratch.reveal_threshold = t; }
    if let Some(r) = cli.rows { config.rows = r; }

    run(&config, cli.realtime)
}

fn run(config: &StudioConfig, realtime: bool) -> Result<()> {
    let viewport = Vec2::new(config.width, config.height);
    let frame = Duration::from_millis(config.frame_ms);

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    let mut factory = |layer: ContentLayer| -> Option<Element> {
        let color = match layer {
            ContentLayer::Masked => Color::from_srgb_u8(240, 190, 40, 255),
            ContentLayer::Hidden => Color::from_srgb_u8(250, 215, 90, 255),
        };
        Some(Swatch::new(color).into())
    };

    let card = ScratchCard::with_config(config.scratch.clone(), &mut factory)
        .context("Failed to build the scratch card")?
        .on_start(|p| log::debug!("scratch started at ({:.0}, {:.0})", p.x, p.y))
        .on_end(|| log::debug!("scratch lifted"))
        .on_session_event(move |e| {
            log::info!("{e:?}");
            sink.borrow_mut().push(e.clone());
        });
    let mut root: Element = card.into();

    // Long enough after the last stroke for decay, the hold and the fade-out.
    let tail = config.scratch.grace_duration()
        + config.scratch.hold_duration()
        + config.scratch.fade_out_duration()
        + Duration::from_secs(1);
    let idle_frames = (tail.as_secs_f64() / frame.as_secs_f64()).ceil() as usize;
    let gesture = Gesture::zigzag(viewport, config.rows, config.step).then_idle(idle_frames);

    log::info!(
        "replaying {} frames over a {}x{} card ({} px ink, {}% threshold)",
        gesture.len(),
        config.width,
        config.height,
        config.scratch.stroke_width,
        config.scratch.reveal_threshold,
    );

    let mut scene = UiScene::new();
    let mut clock = FrameClock::new();
    for input in gesture.frames() {
        let dt = if realtime {
            std::thread::sleep(frame);
            clock.tick().dt
        } else {
            frame
        };
        let list = scene.frame(&mut root, viewport, input, dt);
        log::trace!("frame: {} draw items", list.len());
    }

    let events = events.borrow();
    let reveals = events.iter().filter(|e| matches!(e, SessionEvent::Revealed { .. })).count();
    if reveals == 0 {
        log::warn!("the gesture never crossed the reveal threshold");
    } else {
        log::info!("done: {reveals} reveal(s), {} session events", events.len());
    }
    Ok(())
}
