//! Entity management for cube faces and tiles.

use bevy::prelude::*;
use mosaic_core::{Cube, Face, FacePlacement};

use crate::components::{CubeFaceRoot, MosaicTile};

fn placement_transform(placement: &FacePlacement) -> Transform {
  Transform {
    translation: Vec3::from_array(placement.translation.to_array()),
    rotation: Quat::from_array(placement.rotation.to_array()),
    ..default()
  }
}

/// Spawn one face root with a box mesh per tile as children.
///
/// Tiles start at the local Z matching `factor`, so a face spawned mid
/// animation lines up with the others.
pub fn spawn_face_entity(
  commands: &mut Commands,
  meshes: &mut Assets<Mesh>,
  material: &Handle<StandardMaterial>,
  face: &Face,
  tile_thickness: f32,
  factor: f32,
) -> Entity {
  commands
    .spawn((
      CubeFaceRoot { side: face.side },
      placement_transform(&face.placement),
      Visibility::default(),
    ))
    .with_children(|parent| {
      for tile in &face.tiles {
        let marker = MosaicTile {
          side: face.side,
          depth_offset: tile.depth_offset,
        };
        parent.spawn((
          Mesh3d(meshes.add(Cuboid::new(tile.width, tile.height, tile_thickness))),
          MeshMaterial3d(material.clone()),
          Transform::from_xyz(tile.center.x, tile.center.y, marker.local_z(factor)),
          marker,
        ));
      }
    })
    .id()
}

/// Spawn all six faces of `cube`.
pub fn spawn_cube(
  commands: &mut Commands,
  meshes: &mut Assets<Mesh>,
  material: &Handle<StandardMaterial>,
  cube: &Cube,
  tile_thickness: f32,
  factor: f32,
) -> Vec<Entity> {
  cube
    .faces()
    .iter()
    .map(|face| {
      debug!("Spawning {} face: {} tiles", face.side.name(), face.tiles.len());
      spawn_face_entity(commands, meshes, material, face, tile_thickness, factor)
    })
    .collect()
}

#[cfg(test)]
#[path = "entities_test.rs"]
mod entities_test;
