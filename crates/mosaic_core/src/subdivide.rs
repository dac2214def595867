//! Jittered recursive subdivision of a rectangle into tiles.
//!
//! Each step cuts the longer side of the region near its middle, then
//! recurses into both halves. Regions thinner than `2 * jitter` on either
//! axis become tiles.
//!
//! ```text
//!   ┌───────────────┬───────┐      split_at ∈ [w/2 - j, w/2 + j]
//!   │               │       │
//!   │       A       │   B   │      first  = [min.x, min.x + split_at]
//!   ├───────┬───────┤       │      second = [min.x + split_at, max.x]
//!   │   C   │   D   ├───────┤
//!   │       │       │   E   │      first.width + second.width == width
//!   └───────┴───────┴───────┘
//! ```
//!
//! Children are visited first-then-second, depth first, so a seeded RNG
//! produces the same tile sequence every run.

use rand::Rng;

use crate::config::SubdivisionConfig;
use crate::types::{Region, Tile};

/// Subdivide `region` and return its tiles.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "mosaic::subdivide"))]
pub fn subdivide<R: Rng + ?Sized>(
  region: Region,
  config: &SubdivisionConfig,
  rng: &mut R,
) -> Vec<Tile> {
  let mut tiles = Vec::new();
  subdivide_into(region, 0, config, rng, &mut tiles);
  tiles
}

/// Subdivide `region`, appending its tiles to `out`.
///
/// `depth` is the recursion level of `region` itself and is recorded on every
/// emitted tile.
pub fn subdivide_into<R: Rng + ?Sized>(
  region: Region,
  depth: u32,
  config: &SubdivisionConfig,
  rng: &mut R,
  out: &mut Vec<Tile>,
) {
  if is_leaf(&region, depth, config) {
    out.push(make_tile(&region, depth, config, rng));
    return;
  }

  let axis = region.split_axis();
  let mid = region.extent(axis) / 2.0;
  let split_at = rng.random_range((mid - config.jitter)..=(mid + config.jitter));
  let (first, second) = region.split(axis, split_at);

  subdivide_into(first, depth + 1, config, rng, out);
  subdivide_into(second, depth + 1, config, rng, out);
}

/// Leaf test. Negated so NaN extents are leaves too.
#[inline]
fn is_leaf(region: &Region, depth: u32, config: &SubdivisionConfig) -> bool {
  let min_splittable = config.min_splittable();
  let splittable = config.jitter > 0.0
    && region.width >= min_splittable
    && region.height >= min_splittable
    && region.width.is_finite()
    && region.height.is_finite();
  !splittable || depth >= config.max_depth
}

fn make_tile<R: Rng + ?Sized>(
  region: &Region,
  depth: u32,
  config: &SubdivisionConfig,
  rng: &mut R,
) -> Tile {
  Tile {
    center: region.center,
    width: region.width.max(0.0),
    height: region.height.max(0.0),
    depth_offset: sample_depth_offset(config, rng),
    depth,
  }
}

fn sample_depth_offset<R: Rng + ?Sized>(config: &SubdivisionConfig, rng: &mut R) -> f32 {
  let (min, max) = (config.depth_offset_min, config.depth_offset_max);
  if min < max {
    rng.random_range(min..=max)
  } else {
    min
  }
}

#[cfg(test)]
#[path = "subdivide_test.rs"]
mod subdivide_test;
