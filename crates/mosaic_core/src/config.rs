//! MosaicConfig - tunables for subdivision, cube assembly and animation.
//!
//! Defaults come from [`crate::constants`]. A TOML file may override any
//! subset of fields:
//!
//! ```toml
//! [subdivision]
//! jitter = 6.0
//!
//! [animation]
//! clock_step = 0.03125
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::*;

/// Errors raised while loading or validating a [`MosaicConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file {path}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse config TOML")]
  Parse(#[from] toml::de::Error),

  #[error("{field} must be finite, got {value}")]
  NotFinite { field: &'static str, value: f64 },

  #[error("{field} must be positive, got {value}")]
  NotPositive { field: &'static str, value: f64 },

  #[error("depth offset range is inverted: min {min} > max {max}")]
  InvertedDepthRange { min: f32, max: f32 },

  #[error("tap threshold must be at least 1ms")]
  ZeroTapThreshold,

  #[error("jitter {jitter} is too fine for face size {face_size}: ratio {ratio} exceeds {max}")]
  TooFine {
    face_size: f32,
    jitter: f32,
    ratio: f32,
    max: f32,
  },
}

/// Root configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct MosaicConfig {
  pub subdivision: SubdivisionConfig,
  pub cube: CubeConfig,
  pub animation: AnimationConfig,
}

/// Subdivider settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SubdivisionConfig {
  /// Split jitter; also sets the leaf size threshold (`2 * jitter`).
  pub jitter: f32,
  /// Lower bound of the per-tile depth offset.
  pub depth_offset_min: f32,
  /// Upper bound of the per-tile depth offset.
  pub depth_offset_max: f32,
  /// Recursion depth at which a region becomes a leaf regardless of size.
  pub max_depth: u32,
}

impl Default for SubdivisionConfig {
  fn default() -> Self {
    Self {
      jitter: JITTER,
      depth_offset_min: DEPTH_OFFSET_MIN,
      depth_offset_max: DEPTH_OFFSET_MAX,
      max_depth: MAX_SUBDIVISION_DEPTH,
    }
  }
}

impl SubdivisionConfig {
  /// Smallest extent a region needs on both axes to be split.
  #[inline]
  pub fn min_splittable(&self) -> f32 {
    self.jitter * 2.0
  }

  pub fn with_jitter(mut self, jitter: f32) -> Self {
    self.jitter = jitter;
    self
  }

  pub fn with_depth_offset_range(mut self, min: f32, max: f32) -> Self {
    self.depth_offset_min = min;
    self.depth_offset_max = max;
    self
  }

  pub fn with_max_depth(mut self, max_depth: u32) -> Self {
    self.max_depth = max_depth;
    self
  }
}

/// Cube assembly settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CubeConfig {
  /// Side of the square subdivided for every face.
  pub face_size: f32,
  /// Distance from the cube centre to each face plane.
  pub half_extent: f32,
  /// Depth of each tile box.
  pub tile_thickness: f32,
}

impl Default for CubeConfig {
  fn default() -> Self {
    Self {
      face_size: FACE_SIZE,
      half_extent: CUBE_HALF_EXTENT,
      tile_thickness: TILE_THICKNESS,
    }
  }
}

/// Animator settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
  /// Clock value below which tiles stay flush.
  pub threshold: f64,
  /// Clock span of one explode/implode cycle.
  pub period: f64,
  /// Clock increment per frame while running.
  pub clock_step: f64,
  /// Longest press (ms) still treated as a tap.
  pub tap_threshold_ms: u64,
  /// Pointer travel (logical pixels) that turns a press into a drag.
  pub tap_slop_px: f32,
  /// Whether the clock runs from the first frame.
  pub start_running: bool,
}

impl Default for AnimationConfig {
  fn default() -> Self {
    Self {
      threshold: EXPLODE_THRESHOLD,
      period: EXPLODE_PERIOD,
      clock_step: CLOCK_STEP,
      tap_threshold_ms: TAP_THRESHOLD_MS,
      tap_slop_px: TAP_SLOP_PX,
      start_running: true,
    }
  }
}

impl AnimationConfig {
  #[inline]
  pub fn tap_threshold(&self) -> Duration {
    Duration::from_millis(self.tap_threshold_ms)
  }
}

impl MosaicConfig {
  /// Parse and validate a TOML document. Missing fields keep their defaults.
  pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
    let config: MosaicConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
  }

  /// Load configuration from a TOML file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_toml_str(&content)
  }

  /// Reject values the subdivider or animator cannot work with.
  ///
  /// Jitter must stay coarse enough relative to the face that the tile count
  /// is bounded (see [`MAX_FACE_JITTER_RATIO`]).
  pub fn validate(&self) -> Result<(), ConfigError> {
    let s = &self.subdivision;
    positive("subdivision.jitter", s.jitter as f64)?;
    finite("subdivision.depth_offset_min", s.depth_offset_min as f64)?;
    finite("subdivision.depth_offset_max", s.depth_offset_max as f64)?;
    if s.depth_offset_min > s.depth_offset_max {
      return Err(ConfigError::InvertedDepthRange {
        min: s.depth_offset_min,
        max: s.depth_offset_max,
      });
    }

    let c = &self.cube;
    positive("cube.face_size", c.face_size as f64)?;
    positive("cube.half_extent", c.half_extent as f64)?;
    positive("cube.tile_thickness", c.tile_thickness as f64)?;

    let ratio = c.face_size / s.min_splittable();
    if ratio > MAX_FACE_JITTER_RATIO {
      return Err(ConfigError::TooFine {
        face_size: c.face_size,
        jitter: s.jitter,
        ratio,
        max: MAX_FACE_JITTER_RATIO,
      });
    }

    let a = &self.animation;
    finite("animation.threshold", a.threshold)?;
    positive("animation.period", a.period)?;
    positive("animation.clock_step", a.clock_step)?;
    if a.tap_threshold_ms == 0 {
      return Err(ConfigError::ZeroTapThreshold);
    }
    finite("animation.tap_slop_px", a.tap_slop_px as f64)?;

    Ok(())
  }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
  if value.is_finite() {
    Ok(())
  } else {
    Err(ConfigError::NotFinite { field, value })
  }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
  finite(field, value)?;
  if value > 0.0 {
    Ok(())
  } else {
    Err(ConfigError::NotPositive { field, value })
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
