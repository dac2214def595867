//! mosaic_game - exploding mosaic cube viewer
//!
//! Six faces of randomly subdivided tiles that drift out along the face
//! normals and settle back.
//!
//! Controls:
//! - Click / tap: pause or resume the animation
//! - Left drag: orbit
//! - Scroll: zoom
//! - R: regenerate the cube

use std::path::PathBuf;

use anyhow::{Context, Result};
use bevy::prelude::*;
use clap::Parser;
use mosaic_bevy::MosaicCubePlugin;
use mosaic_core::MosaicConfig;

/// Exploding mosaic cube viewer.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
  /// TOML config file; defaults are used when omitted.
  #[arg(long)]
  config: Option<PathBuf>,

  /// RNG seed for the cube layout; drawn from entropy when omitted.
  #[arg(long)]
  seed: Option<u64>,
}

fn load_config(path: Option<&PathBuf>) -> Result<MosaicConfig> {
  match path {
    Some(path) => MosaicConfig::load(path)
      .with_context(|| format!("failed to load config from {}", path.display())),
    None => Ok(MosaicConfig::default()),
  }
}

fn main() -> Result<()> {
  let args = Args::parse();
  let config = load_config(args.config.as_ref())?;

  let mut app = App::new();
  app
    .add_plugins(DefaultPlugins.set(WindowPlugin {
      primary_window: Some(Window {
        title: "Exploding Mosaic Cube".into(),
        resolution: (1280, 800).into(),
        ..default()
      }),
      ..default()
    }));

  #[cfg(feature = "debug_ui")]
  app.add_plugins((
    bevy::diagnostic::FrameTimeDiagnosticsPlugin::default(),
    bevy_egui::EguiPlugin::default(),
  ));

  app
    .add_plugins(MosaicCubePlugin {
      config,
      seed: args.seed,
    })
    .run();
  Ok(())
}
