//! Face assembly: one subdivided mosaic per cube side, placed by a rigid
//! transform.
//!
//! # Placement
//!
//! Every face is built in its own XY plane and pushed `half_extent` along its
//! (rotated) local Z. Sides are grouped in pairs that share a rotation:
//!
//! ```text
//!   side     rotation        local Z → world    offset   outward sign
//!   ───────  ──────────────  ─────────────────  ───────  ────────────
//!   Front    identity        +Z                 +h       +1
//!   Back     identity        +Z                 -h       -1
//!   Right    +90° about Y    +X                 +h       +1
//!   Left     +90° about Y    +X                 -h       -1
//!   Top      +90° about X    -Y                 -h       -1
//!   Bottom   +90° about X    -Y                 +h       +1
//! ```
//!
//! Because a pair shares its rotation, local +Z points into the cube on half
//! of the faces; [`CubeSide::outward_sign`] corrects displacement for those.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use rand::Rng;

use crate::animation::tile_displacement;
use crate::config::MosaicConfig;
use crate::subdivide::subdivide_into;
use crate::types::{Region, Tile};

/// The six sides of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CubeSide {
  Front,
  Back,
  Right,
  Left,
  Top,
  Bottom,
}

impl CubeSide {
  /// All sides in build order.
  pub const ALL: [CubeSide; 6] = [
    CubeSide::Front,
    CubeSide::Back,
    CubeSide::Right,
    CubeSide::Left,
    CubeSide::Top,
    CubeSide::Bottom,
  ];

  /// Rotation shared by the side and its opposite.
  pub fn rotation(self) -> Quat {
    match self {
      CubeSide::Front | CubeSide::Back => Quat::IDENTITY,
      CubeSide::Right | CubeSide::Left => Quat::from_rotation_y(FRAC_PI_2),
      CubeSide::Top | CubeSide::Bottom => Quat::from_rotation_x(FRAC_PI_2),
    }
  }

  /// +1 if local +Z points out of the cube, -1 if it points in.
  ///
  /// Also the sign of the translation along local Z.
  pub fn outward_sign(self) -> f32 {
    match self {
      CubeSide::Front | CubeSide::Right | CubeSide::Bottom => 1.0,
      CubeSide::Back | CubeSide::Left | CubeSide::Top => -1.0,
    }
  }

  /// World-space unit normal pointing out of the cube.
  pub fn outward_normal(self) -> Vec3 {
    self.rotation() * Vec3::Z * self.outward_sign()
  }

  /// Rigid transform for this side on a cube of the given half extent.
  pub fn placement(self, half_extent: f32) -> FacePlacement {
    let rotation = self.rotation();
    FacePlacement {
      rotation,
      translation: rotation * Vec3::new(0.0, 0.0, self.outward_sign() * half_extent),
    }
  }

  /// Local Z for a tile with `depth_offset` at the given explode factor.
  ///
  /// Sign is `outward_sign`, not a fixed `-depth_offset`: opposite faces share
  /// a rotation, so a fixed local sign would push half the faces inward.
  #[inline]
  pub fn displaced_z(self, depth_offset: f32, factor: f32) -> f32 {
    self.outward_sign() * tile_displacement(depth_offset, factor)
  }

  #[inline]
  pub fn tile_local_z(self, tile: &Tile, factor: f32) -> f32 {
    self.displaced_z(tile.depth_offset, factor)
  }

  pub fn name(self) -> &'static str {
    match self {
      CubeSide::Front => "front",
      CubeSide::Back => "back",
      CubeSide::Right => "right",
      CubeSide::Left => "left",
      CubeSide::Top => "top",
      CubeSide::Bottom => "bottom",
    }
  }
}

/// Rotation then translation placing a face on the cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FacePlacement {
  pub rotation: Quat,
  pub translation: Vec3,
}

/// One side of the cube with its mosaic.
#[derive(Clone, Debug)]
pub struct Face {
  pub side: CubeSide,
  pub tiles: Vec<Tile>,
  pub placement: FacePlacement,
}

impl Face {
  /// Sum of tile areas; equals `face_size²` up to float error.
  pub fn covered_area(&self) -> f32 {
    self.tiles.iter().map(Tile::area).sum()
  }
}

/// Build one face by subdividing the full face square.
pub fn build_face<R: Rng + ?Sized>(side: CubeSide, config: &MosaicConfig, rng: &mut R) -> Face {
  let mut tiles = Vec::new();
  subdivide_into(
    Region::square(config.cube.face_size),
    0,
    &config.subdivision,
    rng,
    &mut tiles,
  );
  Face {
    side,
    tiles,
    placement: side.placement(config.cube.half_extent),
  }
}

/// The six faces of the cube.
#[derive(Clone, Debug)]
pub struct Cube {
  faces: Vec<Face>,
}

impl Cube {
  pub fn faces(&self) -> &[Face] {
    &self.faces
  }

  pub fn face(&self, side: CubeSide) -> Option<&Face> {
    self.faces.iter().find(|f| f.side == side)
  }

  /// Total tiles across all faces.
  pub fn tile_count(&self) -> usize {
    self.faces.iter().map(|f| f.tiles.len()).sum()
  }
}

/// Build all six faces, each from independent draws of `rng`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "mosaic::build_cube"))]
pub fn build_cube<R: Rng + ?Sized>(config: &MosaicConfig, rng: &mut R) -> Cube {
  let faces: Vec<Face> = CubeSide::ALL
    .iter()
    .map(|&side| build_face(side, config, rng))
    .collect();

  #[cfg(feature = "tracing")]
  for face in &faces {
    tracing::debug!(side = face.side.name(), tiles = face.tiles.len(), "face built");
  }

  Cube { faces }
}

#[cfg(test)]
#[path = "face_test.rs"]
mod face_test;
