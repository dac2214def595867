//! Compiled-in defaults for the mosaic cube.
//!
//! Every value here is the default of a field in
//! [`MosaicConfig`](crate::config::MosaicConfig); the config layer may
//! override them at startup.
//!
//! # Cube Layout
//!
//! ```text
//!            ┌───────────── FACE_SIZE (150) ─────────────┐
//!
//!            ┌───────────────────────────────────────────┐  ─┐
//!            │                                           │   │
//!            │               face plane at               │   │ TILE_THICKNESS
//!            │         ±CUBE_HALF_EXTENT (70)            │   │ (10, centred on
//!            │                                           │   │  the face plane)
//!            └───────────────────────────────────────────┘  ─┘
//!
//!   Faces are wider (150) than the cube (2 × 70 = 140); the 10 unit slabs
//!   overlap at the cube edges so no seam is visible at rest.
//! ```
//!
//! # Animation Timeline
//!
//! ```text
//!   inc:      0 ........ π ........ 2π ........ 3π ........ 4π ...
//!   factor:   0  (flush)  0 ──rise──► 1 ──fall──► 0 ──rise──► ...
//!             └ held ─────┘  (sin² easing, period EXPLODE_PERIOD = 2π)
//! ```

use std::f64::consts::{PI, TAU};

/// Side length of the square region subdivided for each face.
pub const FACE_SIZE: f32 = 150.0;

/// Distance from the cube centre to each face plane.
pub const CUBE_HALF_EXTENT: f32 = 70.0;

/// Depth of every tile box (along the face normal).
pub const TILE_THICKNESS: f32 = 10.0;

/// Split jitter. Regions narrower than `2 * JITTER` on either axis are leaves.
pub const JITTER: f32 = 4.0;

/// Lower bound of the per-tile depth offset range.
pub const DEPTH_OFFSET_MIN: f32 = -10.0;

/// Upper bound of the per-tile depth offset range.
pub const DEPTH_OFFSET_MAX: f32 = 20.0;

/// Hard recursion limit for the subdivider.
pub const MAX_SUBDIVISION_DEPTH: u32 = 64;

/// Largest accepted `face_size / (2 * jitter)`.
///
/// Tiles per face grow with the square of this ratio; 256 keeps a face near
/// 10^5 tiles (defaults give 18.75, a few hundred tiles).
pub const MAX_FACE_JITTER_RATIO: f32 = 256.0;

/// Pointer travel (logical pixels) after which a press is a drag, not a tap.
pub const TAP_SLOP_PX: f32 = 5.0;

/// Clock value below which tiles stay flush.
pub const EXPLODE_THRESHOLD: f64 = PI;

/// Clock span of one full explode/implode cycle.
pub const EXPLODE_PERIOD: f64 = TAU;

/// Clock increment applied once per frame while running.
pub const CLOCK_STEP: f64 = 1.0 / 16.0;

/// Press/release pairs shorter than this toggle the animation (milliseconds).
pub const TAP_THRESHOLD_MS: u64 = 250;

/// Orthographic half-height of the view volume.
pub const FRUSTUM_SIZE: f32 = 200.0;

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
