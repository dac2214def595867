//! Startup system: material, cube, camera and light.

use bevy::camera::ScalingMode;
use bevy::prelude::*;
use mosaic_core::build_cube;
use mosaic_core::constants::FRUSTUM_SIZE;

use crate::components::MosaicCamera;
use crate::orbit_camera::{orbit_transform, OrbitCamera};
use crate::resources::{ExplodeAnimation, MosaicRng, MosaicSettings, TileMaterial};
use crate::systems::entities::spawn_cube;

/// Initial camera position; the camera looks at the origin.
pub const CAMERA_POSITION: Vec3 = Vec3::new(50.0, 50.0, 100.0);

/// Light position in camera space.
pub const LIGHT_POSITION: Vec3 = Vec3::new(200.0, 500.0, 100.0);

const LIGHT_ILLUMINANCE: f32 = 10_000.0;

/// Build the shared material, the cube and the camera rig.
pub fn setup_mosaic_scene(
  mut commands: Commands,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<StandardMaterial>>,
  settings: Res<MosaicSettings>,
  animation: Res<ExplodeAnimation>,
  mut rng: ResMut<MosaicRng>,
) {
  let config = &settings.0;
  info!("Setting up mosaic scene (seed {})", rng.seed());

  let material = materials.add(StandardMaterial {
    base_color: Color::WHITE,
    perceptual_roughness: 0.0,
    ..default()
  });
  commands.insert_resource(TileMaterial(material.clone()));

  let cube = build_cube(config, rng.rng_mut());
  info!("Built cube: {} tiles", cube.tile_count());
  spawn_cube(
    &mut commands,
    &mut meshes,
    &material,
    &cube,
    config.cube.tile_thickness,
    animation.clock.explode_factor(),
  );

  let orbit = OrbitCamera::from_position(Vec3::ZERO, CAMERA_POSITION);
  commands.spawn((
    Camera3d::default(),
    Projection::from(OrthographicProjection {
      near: -1000.0,
      far: 1000.0,
      scaling_mode: ScalingMode::FixedVertical {
        viewport_height: 2.0 * FRUSTUM_SIZE,
      },
      ..OrthographicProjection::default_3d()
    }),
    orbit_transform(&orbit),
    orbit,
    MosaicCamera,
    children![(
      DirectionalLight {
        illuminance: LIGHT_ILLUMINANCE,
        ..default()
      },
      Transform::from_translation(LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    )],
  ));
}
