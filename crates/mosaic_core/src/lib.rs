//! mosaic_core - Framework/engine independent mosaic cube generation
//!
//! This crate builds a cube whose six faces are tiled by a randomized
//! recursive rectangle subdivision, and drives the explode/implode animation
//! that pushes every tile along its face normal and back.
//!
//! # Features
//!
//! - **Subdivider**: jittered binary space partition of a rectangle into
//!   leaf tiles that exactly cover it
//! - **Face Assembler**: one independent mosaic per cube side, placed by a
//!   fixed rigid transform
//! - **Animator**: monotonic clock mapped through a periodic easing onto a
//!   per-tile displacement, toggled by a quick tap
//!
//! # Example
//!
//! ```ignore
//! use mosaic_core::{build_cube, AnimationClock, MosaicConfig};
//!
//! let config = MosaicConfig::default();
//! let mut rng = rand::rng();
//! let cube = build_cube(&config, &mut rng);
//!
//! let mut clock = AnimationClock::new(&config.animation);
//! let factor = clock.frame();
//! for face in cube.faces() {
//!     for tile in &face.tiles {
//!         let z = face.side.tile_local_z(tile, factor);
//!     }
//! }
//! ```

pub mod animation;
pub mod config;
pub mod constants;
pub mod face;
pub mod subdivide;
pub mod types;

// Re-export commonly used items
pub use animation::{explode_factor, tile_displacement, AnimationClock, AnimationState, TapDetector};
pub use config::{AnimationConfig, ConfigError, CubeConfig, MosaicConfig, SubdivisionConfig};
pub use face::{build_cube, build_face, Cube, CubeSide, Face, FacePlacement};
pub use subdivide::{subdivide, subdivide_into};
pub use types::{Region, SplitAxis, Tile};
