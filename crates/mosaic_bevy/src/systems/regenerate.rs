//! Rebuild the cube on demand.

use bevy::prelude::*;
use mosaic_core::build_cube;

use crate::components::CubeFaceRoot;
use crate::resources::{ExplodeAnimation, MosaicRng, MosaicSettings, TileMaterial};
use crate::systems::entities::spawn_cube;

/// Key that re-rolls every face.
pub const REGENERATE_KEY: KeyCode = KeyCode::KeyR;

/// Despawn all faces and build a fresh cube from the next RNG draws.
pub fn regenerate_on_key(
  mut commands: Commands,
  keys: Res<ButtonInput<KeyCode>>,
  faces: Query<Entity, With<CubeFaceRoot>>,
  mut meshes: ResMut<Assets<Mesh>>,
  material: Res<TileMaterial>,
  settings: Res<MosaicSettings>,
  animation: Res<ExplodeAnimation>,
  mut rng: ResMut<MosaicRng>,
) {
  if !keys.just_pressed(REGENERATE_KEY) {
    return;
  }

  for entity in &faces {
    commands.entity(entity).despawn();
  }

  let config = &settings.0;
  let cube = build_cube(config, rng.rng_mut());
  info!("Regenerated cube: {} tiles", cube.tile_count());
  spawn_cube(
    &mut commands,
    &mut meshes,
    &material.0,
    &cube,
    config.cube.tile_thickness,
    animation.last_factor,
  );
}
