//! Bevy systems for the mosaic cube.

pub mod animation;
pub mod entities;
pub mod regenerate;
pub mod startup;
