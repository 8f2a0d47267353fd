//! Settings panel: egui controls that emit typed events.
//!
//! The panel owns editable copies of the tunable state and never reaches
//! into the scene or renderer. Every interaction becomes a [`SettingsEvent`]
//! the app applies after the UI pass, keeping the widget layer decoupled
//! from the data model.

use crate::galaxy::GalaxyParams;
use glam::Vec3;

/// Bloom pass tuning. The panel exposes intensity and radius; threshold
/// keeps its scene default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomSettings {
    pub intensity: f32,
    pub threshold: f32,
    pub radius: f32,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self {
            intensity: 0.1,
            threshold: 0.85,
            radius: 0.4,
        }
    }
}

/// Everything the panel can ask the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    RegenerateGalaxy(GalaxyParams),
    SetFlightMode(bool),
    ReverseSpacecraft,
    SetBloom(BloomSettings),
    GoToGalaxy,
    LogCamera,
}

pub struct SettingsPanel {
    galaxy: GalaxyParams,
    bloom: BloomSettings,
    fly: bool,
}

impl SettingsPanel {
    pub fn new(galaxy: GalaxyParams, bloom: BloomSettings) -> Self {
        Self {
            galaxy,
            bloom,
            fly: false,
        }
    }

    /// Draw the panel, pushing one event per interaction into `events`.
    pub fn ui(&mut self, ctx: &egui::Context, events: &mut Vec<SettingsEvent>) {
        egui::Window::new("Controls")
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.collapsing("Spaceship", |ui| {
                    if ui.checkbox(&mut self.fly, "Fly spaceship").changed() {
                        events.push(SettingsEvent::SetFlightMode(self.fly));
                    }
                    if ui.button("Reverse").clicked() {
                        events.push(SettingsEvent::ReverseSpacecraft);
                    }
                });

                ui.collapsing("Galaxy", |ui| {
                    if ui.button("Go to galaxy").clicked() {
                        events.push(SettingsEvent::GoToGalaxy);
                    }

                    let mut changed = false;
                    changed |= ui
                        .add(
                            egui::Slider::new(&mut self.galaxy.count, 100..=100_000)
                                .step_by(100.0)
                                .text("stars count"),
                        )
                        .changed();
                    changed |= ui
                        .add(
                            egui::Slider::new(&mut self.galaxy.size, 0.001..=0.1)
                                .text("star size"),
                        )
                        .changed();
                    changed |= ui
                        .add(
                            egui::Slider::new(&mut self.galaxy.radius, 1.0..=10.0)
                                .step_by(1.0)
                                .text("radius"),
                        )
                        .changed();
                    changed |= ui
                        .add(
                            egui::Slider::new(&mut self.galaxy.branches, 1..=10)
                                .text("branches count"),
                        )
                        .changed();
                    changed |= ui
                        .add(egui::Slider::new(&mut self.galaxy.spin, -5.0..=5.0).text("spin"))
                        .changed();
                    changed |= ui
                        .add(
                            egui::Slider::new(&mut self.galaxy.randomness_power, 1..=10)
                                .text("randomness"),
                        )
                        .changed();

                    changed |= color_edit(ui, &mut self.galaxy.inside_color, "core color");
                    changed |= color_edit(ui, &mut self.galaxy.outside_color, "branches color");

                    if changed {
                        events.push(SettingsEvent::RegenerateGalaxy(self.galaxy));
                    }
                });

                ui.collapsing("Bloom", |ui| {
                    let mut changed = false;
                    changed |= ui
                        .add(
                            egui::Slider::new(&mut self.bloom.intensity, 0.0..=2.0)
                                .text("intensity"),
                        )
                        .changed();
                    changed |= ui
                        .add(egui::Slider::new(&mut self.bloom.radius, 0.0..=1.0).text("radius"))
                        .changed();
                    if changed {
                        events.push(SettingsEvent::SetBloom(self.bloom));
                    }
                });

                if ui.button("Log camera settings").clicked() {
                    events.push(SettingsEvent::LogCamera);
                }
            });
    }
}

fn color_edit(ui: &mut egui::Ui, color: &mut Vec3, label: &str) -> bool {
    let mut rgb = [color.x, color.y, color.z];
    let changed = ui
        .horizontal(|ui| {
            let response = ui.color_edit_button_rgb(&mut rgb);
            ui.label(label);
            response.changed()
        })
        .inner;
    if changed {
        *color = Vec3::from_array(rgb);
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bloom_defaults_match_the_scene_pass() {
        let bloom = BloomSettings::default();
        assert_eq!(bloom.intensity, 0.1);
        assert_eq!(bloom.threshold, 0.85);
        assert_eq!(bloom.radius, 0.4);
    }
}
