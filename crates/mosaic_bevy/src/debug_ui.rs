//! egui window with the animation state and cube statistics.
//!
//! The host app adds `EguiPlugin`; this plugin only registers the window.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::components::MosaicTile;
use crate::resources::{ExplodeAnimation, MosaicRng};

/// Plugin for the mosaic debug window.
pub struct MosaicDebugUiPlugin;

impl Plugin for MosaicDebugUiPlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(EguiPrimaryContextPass, render_mosaic_window);
  }
}

fn row(ui: &mut egui::Ui, label: &str, value: String) {
  ui.horizontal(|ui| {
    ui.label(label);
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
      ui.label(value);
    });
  });
}

fn render_mosaic_window(
  mut contexts: EguiContexts,
  animation: Res<ExplodeAnimation>,
  rng: Res<MosaicRng>,
  tiles: Query<(), With<MosaicTile>>,
) {
  let Ok(ctx) = contexts.ctx_mut() else {
    return;
  };

  egui::Window::new("Mosaic")
    .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
    .resizable(false)
    .collapsible(true)
    .show(ctx, |ui| {
      ui.set_min_width(160.0);
      row(ui, "State:", format!("{:?}", animation.clock.state()));
      row(ui, "Clock:", format!("{:.3}", animation.clock.inc()));
      row(ui, "Explode:", format!("{:.3}", animation.last_factor));
      ui.separator();
      row(ui, "Tiles:", format!("{}", tiles.iter().count()));
      row(ui, "Seed:", format!("{}", rng.seed()));
      ui.separator();
      ui.label(egui::RichText::new("tap: pause/resume  R: regenerate").weak());
    });
}
