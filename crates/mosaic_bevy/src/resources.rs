//! Bevy resources for the mosaic cube.

use std::time::Duration;

use bevy::prelude::*;
use mosaic_core::{AnimationClock, AnimationConfig, AnimationState, MosaicConfig, TapDetector};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Configuration the scene was built with.
#[derive(Resource, Clone, Debug, Default)]
pub struct MosaicSettings(pub MosaicConfig);

/// Explode animation state: the clock plus the tap detector that toggles it.
#[derive(Resource, Debug)]
pub struct ExplodeAnimation {
  pub clock: AnimationClock,
  pub tap: TapDetector,
  /// Factor applied to the tiles on the most recent frame.
  pub last_factor: f32,
}

impl ExplodeAnimation {
  pub fn new(config: &AnimationConfig) -> Self {
    Self::from_clock(AnimationClock::new(config), TapDetector::from_config(config))
  }

  pub fn from_clock(clock: AnimationClock, tap: TapDetector) -> Self {
    Self {
      clock,
      tap,
      last_factor: 0.0,
    }
  }

  pub fn pointer_down(&mut self, at: Duration) {
    self.tap.press(at);
  }

  pub fn pointer_moved(&mut self, distance: f32) {
    self.tap.moved(distance);
  }

  /// Returns the new state if this release completed a tap.
  pub fn pointer_up(&mut self, at: Duration) -> Option<AnimationState> {
    self.tap.release(at).then(|| self.clock.toggle())
  }
}

/// Seeded RNG shared by cube generation.
#[derive(Resource)]
pub struct MosaicRng {
  seed: u64,
  rng: ChaCha8Rng,
}

impl MosaicRng {
  pub fn new(seed: u64) -> Self {
    Self {
      seed,
      rng: ChaCha8Rng::seed_from_u64(seed),
    }
  }

  /// Seed the current stream was started from.
  pub fn seed(&self) -> u64 {
    self.seed
  }

  pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
    &mut self.rng
  }
}

/// Material shared by every tile.
#[derive(Resource, Clone)]
pub struct TileMaterial(pub Handle<StandardMaterial>);

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;
