//! Core data types for face subdivision.

use glam::Vec2;

/// Axis-aligned rectangle in face-local coordinates, described by its centre.
///
/// Only lives for the duration of a subdivision pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
  /// Centre of the rectangle.
  pub center: Vec2,
  /// Extent along X.
  pub width: f32,
  /// Extent along Y.
  pub height: f32,
}

/// Which way a region is cut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitAxis {
  /// Cut perpendicular to X; children sit side by side and share the height.
  Vertical,
  /// Cut perpendicular to Y; children are stacked and share the width.
  Horizontal,
}

impl Region {
  pub fn new(center: Vec2, width: f32, height: f32) -> Self {
    Self {
      center,
      width,
      height,
    }
  }

  /// Square region of side `size` centred at the origin.
  pub fn square(size: f32) -> Self {
    Self::new(Vec2::ZERO, size, size)
  }

  #[inline]
  pub fn area(&self) -> f32 {
    self.width * self.height
  }

  /// Minimum corner (lower-left).
  #[inline]
  pub fn min(&self) -> Vec2 {
    self.center - Vec2::new(self.width, self.height) * 0.5
  }

  /// Maximum corner (upper-right).
  #[inline]
  pub fn max(&self) -> Vec2 {
    self.center + Vec2::new(self.width, self.height) * 0.5
  }

  /// Axis a subdivider should cut along: the longer side, vertical on ties.
  #[inline]
  pub fn split_axis(&self) -> SplitAxis {
    if self.height <= self.width {
      SplitAxis::Vertical
    } else {
      SplitAxis::Horizontal
    }
  }

  /// Extent of the region along the dimension that `axis` cuts.
  #[inline]
  pub fn extent(&self, axis: SplitAxis) -> f32 {
    match axis {
      SplitAxis::Vertical => self.width,
      SplitAxis::Horizontal => self.height,
    }
  }

  /// Cut the region `split_at` units from its minimum edge.
  ///
  /// The first child spans `[min, min + split_at]`, the second the remainder,
  /// so `first + second == extent` along the cut dimension.
  pub fn split(&self, axis: SplitAxis, split_at: f32) -> (Region, Region) {
    let Region {
      center,
      width,
      height,
    } = *self;
    match axis {
      SplitAxis::Vertical => (
        Region::new(
          Vec2::new(center.x - width / 2.0 + split_at / 2.0, center.y),
          split_at,
          height,
        ),
        Region::new(
          Vec2::new(center.x + split_at / 2.0, center.y),
          width - split_at,
          height,
        ),
      ),
      SplitAxis::Horizontal => (
        Region::new(
          Vec2::new(center.x, center.y - height / 2.0 + split_at / 2.0),
          width,
          split_at,
        ),
        Region::new(
          Vec2::new(center.x, center.y + split_at / 2.0),
          width,
          height - split_at,
        ),
      ),
    }
  }
}

/// Leaf rectangle produced by the subdivider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
  /// Centre in face-local coordinates.
  pub center: Vec2,
  /// Extent along X (never negative).
  pub width: f32,
  /// Extent along Y (never negative).
  pub height: f32,
  /// Maximum outward displacement, sampled once at creation.
  pub depth_offset: f32,
  /// Recursion depth the tile was emitted at (0 = unsplit region).
  pub depth: u32,
}

impl Tile {
  #[inline]
  pub fn area(&self) -> f32 {
    self.width * self.height
  }

  /// Footprint of the tile as a region.
  #[inline]
  pub fn region(&self) -> Region {
    Region::new(self.center, self.width, self.height)
  }

  /// True if the interiors of the two tiles intersect.
  ///
  /// Shared edges do not count, and `epsilon` absorbs float error at them.
  pub fn overlaps(&self, other: &Tile, epsilon: f32) -> bool {
    let (a_min, a_max) = (self.region().min(), self.region().max());
    let (b_min, b_max) = (other.region().min(), other.region().max());
    a_min.x + epsilon < b_max.x
      && b_min.x + epsilon < a_max.x
      && a_min.y + epsilon < b_max.y
      && b_min.y + epsilon < a_max.y
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
