use eframe::egui;

use super::PanelAction;
use crate::command::EditorCommand;
use crate::state::{EditorState, Parameter};

pub fn adjustments_panel(ctx: &egui::Context, state: &EditorState) -> Vec<PanelAction> {
    let mut actions = Vec::new();

    egui::SidePanel::right("adjustments_panel")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("🎚 Adjustments");
            ui.separator();

            for parameter in Parameter::ALL {
                ui.add_space(8.0);
                if let Some(value) = parameter_slider(ui, state, parameter) {
                    actions.push(PanelAction::Command(EditorCommand::SetParameter { parameter, value }));
                }
            }
        });

    actions
}

/// Shows one labelled slider. Returns the new value if the user moved it.
fn parameter_slider(ui: &mut egui::Ui, state: &EditorState, parameter: Parameter) -> Option<i32> {
    let mut value = state.parameter(parameter);

    ui.label(
        egui::RichText::new(format!("{}  {}", parameter.icon(), parameter.label()))
            .small()
            .weak(),
    );

    let response = ui
        .scope(|ui| {
            ui.spacing_mut().slider_width = (ui.available_width() - 56.0).max(80.0);
            ui.add(
                egui::Slider::new(&mut value, parameter.range())
                    .suffix("%")
                    .integer(),
            )
        })
        .inner;

    if response.changed() {
        log::trace!("{} -> {}", parameter, value);
    }

    (value != state.parameter(parameter)).then_some(value)
}
