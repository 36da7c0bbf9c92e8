use eframe::egui;

use crate::config::EditorConfig;

const TITLE_COLOR: egui::Color32 = egui::Color32::from_rgb(129, 140, 248);

pub fn header_panel(ctx: &egui::Context, config: &EditorConfig) {
    egui::TopBottomPanel::top("header_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(config.title.as_str())
                        .size(32.0)
                        .strong()
                        .color(TITLE_COLOR),
                );
                ui.label(egui::RichText::new(config.subtitle.as_str()).weak());
                ui.add_space(12.0);
            });
        });
}
