//! Orbit camera around the cube with orthographic zoom.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;

/// Radians of orbit per pixel of drag.
const ORBIT_SENSITIVITY: f32 = 0.005;

/// Fraction of the current scale changed per scroll line.
const ZOOM_SENSITIVITY: f32 = 0.1;

/// Orbit state around a focus point.
#[derive(Component, Clone, Debug)]
pub struct OrbitCamera {
  pub focus: Vec3,
  pub radius: f32,
  pub pitch: f32,
  pub yaw: f32,
  /// Allowed orthographic scale range.
  pub min_scale: f32,
  pub max_scale: f32,
}

impl Default for OrbitCamera {
  fn default() -> Self {
    Self {
      focus: Vec3::ZERO,
      radius: 100.0,
      pitch: 0.0,
      yaw: 0.0,
      min_scale: 0.25,
      max_scale: 4.0,
    }
  }
}

impl OrbitCamera {
  /// Orbit that reproduces a camera placed at `position` looking at `focus`.
  pub fn from_position(focus: Vec3, position: Vec3) -> Self {
    let offset = position - focus;
    let radius = offset.length();
    if radius <= f32::EPSILON {
      return Self {
        focus,
        ..default()
      };
    }
    Self {
      focus,
      radius,
      pitch: -(offset.y / radius).clamp(-1.0, 1.0).asin(),
      yaw: offset.x.atan2(offset.z),
      ..default()
    }
  }
}

/// Camera transform for an orbit state.
pub fn orbit_transform(orbit: &OrbitCamera) -> Transform {
  let rotation = Quat::from_euler(EulerRot::YXZ, orbit.yaw, orbit.pitch, 0.0);
  let position = orbit.focus + rotation * Vec3::new(0.0, 0.0, orbit.radius);
  Transform::from_translation(position).looking_at(orbit.focus, Vec3::Y)
}

/// Orthographic scale after `scroll` lines of zoom, clamped to the orbit range.
pub fn zoomed_scale(orbit: &OrbitCamera, scale: f32, scroll: f32) -> f32 {
  (scale - scroll * scale * ZOOM_SENSITIVITY).clamp(orbit.min_scale, orbit.max_scale)
}

/// Left-drag orbits, scroll zooms the orthographic projection.
pub fn orbit_camera(
  mouse_button: Res<ButtonInput<MouseButton>>,
  mouse_motion: Res<AccumulatedMouseMotion>,
  mouse_scroll: Res<AccumulatedMouseScroll>,
  mut query: Query<(&mut OrbitCamera, &mut Transform, &mut Projection)>,
) {
  let Ok((mut orbit, mut transform, mut projection)) = query.single_mut() else {
    return;
  };

  if mouse_button.pressed(MouseButton::Left) {
    let delta = mouse_motion.delta;
    orbit.yaw -= delta.x * ORBIT_SENSITIVITY;
    orbit.pitch -= delta.y * ORBIT_SENSITIVITY;
    orbit.pitch = orbit.pitch.clamp(-1.5, 1.5);
  }

  let scroll = mouse_scroll.delta.y;
  if scroll != 0.0 {
    if let Projection::Orthographic(ortho) = projection.as_mut() {
      ortho.scale = zoomed_scale(&orbit, ortho.scale, scroll);
    }
  }

  *transform = orbit_transform(&orbit);
}

#[cfg(test)]
#[path = "orbit_camera_test.rs"]
mod orbit_camera_test;
