//! Bevy components for the mosaic cube.

use bevy::prelude::*;
use mosaic_core::CubeSide;

/// Parent entity of one cube face.
///
/// Carries the face placement as its `Transform`; all tiles of the face are
/// its children.
#[derive(Component, Debug)]
pub struct CubeFaceRoot {
  pub side: CubeSide,
}

/// Per-tile animation data, attached to every tile mesh entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MosaicTile {
  /// Side the tile belongs to (sets the outward direction).
  pub side: CubeSide,
  /// Maximum outward displacement.
  pub depth_offset: f32,
}

impl MosaicTile {
  /// Local Z of the tile at the given explode factor.
  #[inline]
  pub fn local_z(&self, factor: f32) -> f32 {
    self.side.displaced_z(self.depth_offset, factor)
  }
}

/// Marker for the camera that looks at the cube.
#[derive(Component, Default)]
pub struct MosaicCamera;
