//! Per-frame animation systems.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::components::MosaicTile;
use crate::resources::ExplodeAnimation;

/// Feed left mouse / touch press, travel and release into the tap detector.
///
/// Timestamps come from `Time<Real>` so pausing virtual time does not stretch
/// a tap. Travel while held turns the press into a drag (camera orbit).
pub fn toggle_on_tap(
  time: Res<Time<Real>>,
  mouse_button: Res<ButtonInput<MouseButton>>,
  mouse_motion: Res<AccumulatedMouseMotion>,
  touches: Res<Touches>,
  mut animation: ResMut<ExplodeAnimation>,
) {
  let now = time.elapsed();

  if mouse_button.just_pressed(MouseButton::Left) || touches.any_just_pressed() {
    animation.pointer_down(now);
  } else {
    let mouse = if mouse_button.pressed(MouseButton::Left) {
      mouse_motion.delta.length()
    } else {
      0.0
    };
    let touch = touches
      .iter()
      .map(|touch| touch.delta().length())
      .fold(0.0, f32::max);
    let travel = mouse.max(touch);
    if travel > 0.0 {
      animation.pointer_moved(travel);
    }
  }

  if mouse_button.just_released(MouseButton::Left) || touches.any_just_released() {
    if let Some(state) = animation.pointer_up(now) {
      info!("Explode animation {:?} at inc {:.3}", state, animation.clock.inc());
    }
  }
}

/// Sample the explode factor, move every tile along its face normal, then
/// advance the clock.
pub fn animate_tiles(
  mut animation: ResMut<ExplodeAnimation>,
  mut tiles: Query<(&MosaicTile, &mut Transform)>,
) {
  let factor = animation.clock.frame();
  animation.last_factor = factor;

  for (tile, mut transform) in &mut tiles {
    let z = tile.local_z(factor);
    if transform.translation.z != z {
      transform.translation.z = z;
    }
  }
}

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;
