//! Lumen command line renderer.
//!
//! Usage: `lumen [settings.json]`. Without a settings file the default cover
//! scene is rendered once at 1280x720.

use std::env;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use lumen_renderer::{render_sweep, LogProgress};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod scenes;
mod settings;

use settings::Settings;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path))?,
        None => Settings::default(),
    };

    log::info!("Starting Lumen");

    let start = Instant::now();
    let scene = settings
        .scene
        .build(&mut StdRng::seed_from_u64(settings.scene_seed));
    log::info!("Scene built in {:?}", start.elapsed());

    std::fs::create_dir_all(&settings.output.directory).with_context(|| {
        format!(
            "Failed to create output directory {}",
            settings.output.directory.display()
        )
    })?;

    let progress = LogProgress::new(64);
    let start = Instant::now();
    render_sweep(
        &scene,
        &settings.camera,
        &settings.render,
        &settings.sweep,
        &progress,
        |index, frame| {
            let path = settings.output.frame_path(index);
            frame.save(&path, settings.output.format)?;
            log::info!("Saved {}", path.display());
            Ok(())
        },
    )?;

    log::info!(
        "Done: {} frame(s) in {:?}",
        settings.sweep.frames,
        start.elapsed()
    );
    if settings.sweep.frames > 1 {
        log::info!(
            "Make a video with: ffmpeg -r 60 -i {}%d.{} -vcodec libx264 -crf 15 -pix_fmt yuv420p {}.mp4",
            settings.output.prefix,
            settings.output.format.extension(),
            settings.output.prefix
        );
    }

    Ok(())
}
