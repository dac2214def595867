//! Explode/implode animation: clock, easing and tap toggle.
//!
//! The clock `inc` only ever grows while running. It is mapped onto an
//! explode factor in `[0, 1]` by a periodic easing, so the cube keeps
//! breathing out and back in for as long as the clock runs:
//!
//! ```text
//!   factor
//!     1 ┤            ╭──╮               ╭──╮
//!       │           ╱    ╲             ╱    ╲
//!       │          ╱      ╲           ╱      ╲
//!     0 ┼─────────╯        ╰─────────╯        ╰──── ...
//!       0         π        2π        3π        4π        5π   inc
//!       └─ flush ─┘└──── period ─────┘└──── period ─────┘
//! ```

use std::f64::consts::PI;
use std::time::Duration;

use crate::config::AnimationConfig;
use crate::constants::TAP_SLOP_PX;

/// Explode factor for clock value `inc`.
///
/// Zero up to `threshold`, then `sin²(π (inc - threshold) / period)`: rises
/// smoothly to 1 at half a period and returns to 0 at a full period.
#[inline]
pub fn explode_factor(inc: f64, threshold: f64, period: f64) -> f32 {
  if !(inc > threshold) || !(period > 0.0) {
    return 0.0;
  }
  let s = (PI * (inc - threshold) / period).sin();
  (s * s) as f32
}

/// Displacement along the outward normal: interpolates from flush (0) at
/// factor 0 to `depth_offset` at factor 1.
///
/// Positive offsets always move a tile out of the cube, on every side. The
/// face-local sign is applied by [`crate::CubeSide::displaced_z`].
#[inline]
pub fn tile_displacement(depth_offset: f32, factor: f32) -> f32 {
  depth_offset * factor
}

/// Whether the clock advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
  Idle,
  Running,
}

impl AnimationState {
  pub fn toggled(self) -> Self {
    match self {
      AnimationState::Idle => AnimationState::Running,
      AnimationState::Running => AnimationState::Idle,
    }
  }
}

/// Monotonic animation clock.
#[derive(Clone, Debug)]
pub struct AnimationClock {
  inc: f64,
  state: AnimationState,
  threshold: f64,
  period: f64,
  step: f64,
}

impl AnimationClock {
  /// Clock at 0, running or idle per `config.start_running`.
  pub fn new(config: &AnimationConfig) -> Self {
    Self {
      inc: 0.0,
      state: if config.start_running {
        AnimationState::Running
      } else {
        AnimationState::Idle
      },
      threshold: config.threshold,
      period: config.period,
      step: config.clock_step,
    }
  }

  /// Start the clock at a given value instead of 0.
  pub fn with_inc(mut self, inc: f64) -> Self {
    self.inc = inc;
    self
  }

  pub fn with_state(mut self, state: AnimationState) -> Self {
    self.state = state;
    self
  }

  #[inline]
  pub fn inc(&self) -> f64 {
    self.inc
  }

  #[inline]
  pub fn state(&self) -> AnimationState {
    self.state
  }

  #[inline]
  pub fn is_running(&self) -> bool {
    self.state == AnimationState::Running
  }

  /// Flip between idle and running. Returns the new state.
  pub fn toggle(&mut self) -> AnimationState {
    self.state = self.state.toggled();
    self.state
  }

  /// Explode factor for the current clock value.
  #[inline]
  pub fn explode_factor(&self) -> f32 {
    explode_factor(self.inc, self.threshold, self.period)
  }

  /// Step the clock if running; hold it if idle.
  #[inline]
  pub fn advance(&mut self) {
    if self.is_running() {
      self.inc += self.step;
    }
  }

  /// One frame: sample the factor, then advance.
  pub fn frame(&mut self) -> f32 {
    let factor = self.explode_factor();
    self.advance();
    factor
  }
}

/// Tells quick taps apart from long presses and drags.
///
/// Timestamps are durations since any fixed epoch (usually app start). A
/// press whose pointer travels more than `slop` is dropped, however short.
#[derive(Clone, Debug)]
pub struct TapDetector {
  threshold: Duration,
  slop: f32,
  pressed_at: Option<Duration>,
  travelled: f32,
}

impl TapDetector {
  pub fn new(threshold: Duration) -> Self {
    Self {
      threshold,
      slop: TAP_SLOP_PX,
      pressed_at: None,
      travelled: 0.0,
    }
  }

  pub fn from_config(config: &AnimationConfig) -> Self {
    Self::new(config.tap_threshold()).with_slop(config.tap_slop_px)
  }

  pub fn with_slop(mut self, slop: f32) -> Self {
    self.slop = slop.max(0.0);
    self
  }

  #[inline]
  pub fn is_pressed(&self) -> bool {
    self.pressed_at.is_some()
  }

  /// Record a press. A second press before release restarts the timer.
  pub fn press(&mut self, at: Duration) {
    self.pressed_at = Some(at);
    self.travelled = 0.0;
  }

  /// Record pointer travel while pressed. Past the slop the press is a drag
  /// and its release will not count.
  pub fn moved(&mut self, distance: f32) {
    if self.pressed_at.is_none() {
      return;
    }
    self.travelled += distance.abs();
    if self.travelled > self.slop {
      self.pressed_at = None;
    }
  }

  /// Record a release. Returns true if it completes a tap.
  ///
  /// A release without a recorded press never counts.
  pub fn release(&mut self, at: Duration) -> bool {
    match self.pressed_at.take() {
      Some(pressed_at) => at.saturating_sub(pressed_at) < self.threshold,
      None => false,
    }
  }
}

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;
