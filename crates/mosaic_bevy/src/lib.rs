//! Bevy presentation layer for mosaic_core.
//!
//! This crate bridges the engine-independent mosaic_core with Bevy:
//! one entity per cube face, one box mesh per tile, and the per-frame
//! systems that toggle and drive the explode animation.

pub mod components;
#[cfg(feature = "debug_ui")]
pub mod debug_ui;
pub mod orbit_camera;
pub mod resources;
pub mod systems;

use bevy::prelude::*;
pub use components::*;
use mosaic_core::MosaicConfig;
pub use orbit_camera::{orbit_camera, orbit_transform, OrbitCamera};
use rand::Rng;
pub use resources::*;

/// Clear colour behind the cube (#EEE).
pub const BACKGROUND: Color = Color::srgb(0.933, 0.933, 0.933);

/// Bevy plugin for the exploding mosaic cube.
///
/// Without a seed, one is drawn from entropy and logged so a run can be
/// reproduced.
#[derive(Default)]
pub struct MosaicCubePlugin {
  pub config: MosaicConfig,
  pub seed: Option<u64>,
}

impl Plugin for MosaicCubePlugin {
  fn build(&self, app: &mut App) {
    let seed = self.seed.unwrap_or_else(|| rand::rng().random::<u64>());
    info!("Mosaic seed: {}", seed);

    app
      .insert_resource(MosaicSettings(self.config.clone()))
      .insert_resource(ExplodeAnimation::new(&self.config.animation))
      .insert_resource(MosaicRng::new(seed))
      .insert_resource(ClearColor(BACKGROUND))
      .add_systems(Startup, systems::startup::setup_mosaic_scene)
      .add_systems(
        Update,
        (
          systems::animation::toggle_on_tap,
          systems::animation::animate_tiles,
        )
          .chain(),
      )
      .add_systems(
        Update,
        (orbit_camera, systems::regenerate::regenerate_on_key),
      );

    #[cfg(feature = "debug_ui")]
    app.add_plugins(debug_ui::MosaicDebugUiPlugin);
  }
}
