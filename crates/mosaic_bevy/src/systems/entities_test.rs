//! Scene tests: the full plugin on a headless `App`.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use mosaic_core::{build_cube, CubeSide, MosaicConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::{MosaicCamera, MosaicCubePlugin, TileMaterial};

const SEED: u64 = 0x5EED;

fn test_app() -> App {
  let mut app = App::new();
  app
    .add_plugins((MinimalPlugins, AssetPlugin::default()))
    .init_asset::<Mesh>()
    .init_asset::<StandardMaterial>()
    .init_resource::<ButtonInput<MouseButton>>()
    .init_resource::<ButtonInput<KeyCode>>()
    .init_resource::<Touches>()
    .init_resource::<AccumulatedMouseMotion>()
    .init_resource::<AccumulatedMouseScroll>()
    .add_plugins(MosaicCubePlugin {
      config: MosaicConfig::default(),
      seed: Some(SEED),
    });
  app
}

fn tile_count(app: &mut App) -> usize {
  let world = app.world_mut();
  world.query::<&MosaicTile>().iter(world).count()
}

fn face_sides(app: &mut App) -> Vec<CubeSide> {
  let world = app.world_mut();
  world
    .query::<&CubeFaceRoot>()
    .iter(world)
    .map(|face| face.side)
    .collect()
}

// =============================================================================
// Startup
// =============================================================================

/// The spawned scene matches a cube built from the same seed.
#[test]
fn test_startup_spawns_seeded_cube() {
  let mut app = test_app();
  app.update();

  let mut rng = ChaCha8Rng::seed_from_u64(SEED);
  let expected = build_cube(&MosaicConfig::default(), &mut rng);

  assert_eq!(tile_count(&mut app), expected.tile_count());

  let sides = face_sides(&mut app);
  assert_eq!(sides.len(), 6);
  for side in CubeSide::ALL {
    assert!(sides.contains(&side), "missing {} face", side.name());
  }
}

#[test]
fn test_tiles_are_children_of_their_face() {
  let mut app = test_app();
  app.update();

  let world = app.world_mut();
  let tiles: Vec<(CubeSide, Entity)> = world
    .query::<(&MosaicTile, &ChildOf)>()
    .iter(world)
    .map(|(tile, child_of)| (tile.side, child_of.parent()))
    .collect();

  assert!(!tiles.is_empty());
  for (side, parent) in tiles {
    let face = world.get::<CubeFaceRoot>(parent).map(|f| f.side);
    assert_eq!(face, Some(side));
  }
}

#[test]
fn test_face_root_carries_placement() {
  let mut app = test_app();
  app.update();

  let world = app.world_mut();
  let half_extent = MosaicConfig::default().cube.half_extent;
  for (face, transform) in world.query::<(&CubeFaceRoot, &Transform)>().iter(world) {
    let expected = face.side.placement(half_extent).translation;
    assert!((transform.translation.x - expected.x).abs() < 1e-4);
    assert!((transform.translation.y - expected.y).abs() < 1e-4);
    assert!((transform.translation.z - expected.z).abs() < 1e-4);
  }
}

#[test]
fn test_startup_creates_material_and_camera() {
  let mut app = test_app();
  app.update();

  assert!(app.world().get_resource::<TileMaterial>().is_some());

  let world = app.world_mut();
  let cameras: Vec<(Vec3, bool)> = world
    .query_filtered::<(&Transform, &Projection), With<MosaicCamera>>()
    .iter(world)
    .map(|(transform, projection)| {
      (
        transform.translation,
        matches!(projection, Projection::Orthographic(_)),
      )
    })
    .collect();

  assert_eq!(cameras.len(), 1);
  let (position, orthographic) = cameras[0];
  assert!(position.distance(Vec3::new(50.0, 50.0, 100.0)) < 1e-2);
  assert!(orthographic);
}

// =============================================================================
// Regenerate
// =============================================================================

/// R replaces all faces with the next cube drawn from the seeded stream.
#[test]
fn test_regenerate_rebuilds_from_stream() {
  let mut app = test_app();
  app.update();

  app
    .world_mut()
    .resource_mut::<ButtonInput<KeyCode>>()
    .press(KeyCode::KeyR);
  app.update();
  app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
  app.update();

  let mut rng = ChaCha8Rng::seed_from_u64(SEED);
  let config = MosaicConfig::default();
  let _first = build_cube(&config, &mut rng);
  let second = build_cube(&config, &mut rng);

  assert_eq!(face_sides(&mut app).len(), 6);
  assert_eq!(tile_count(&mut app), second.tile_count());
}
