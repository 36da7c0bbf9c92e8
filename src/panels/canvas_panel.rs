use eframe::egui;

use super::PanelAction;
use crate::command::EditorCommand;
use crate::components::ActionButton;
use crate::renderer::{self, Renderer};
use crate::state::EditorState;

const UPLOAD_FILL: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
const SAVE_FILL: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
const RESET_FILL: egui::Color32 = egui::Color32::from_rgb(55, 65, 81);
const CLEAR_FILL: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);

/// Id of the bottom panel holding the Upload/Save/Reset/Clear buttons
pub const TOOLBAR_PANEL_ID: &str = "canvas_toolbar";

/// Draws the toolbar pinned to the bottom of the window, then the canvas in the
/// space that is left, so the buttons stay reachable however short the window is.
pub fn canvas_panel(
    ctx: &egui::Context,
    state: &EditorState,
    renderer: &mut Renderer,
    loading: bool,
) -> Vec<PanelAction> {
    let mut actions = Vec::new();

    egui::TopBottomPanel::bottom(TOOLBAR_PANEL_ID)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            toolbar(ui, state, loading, &mut actions);
            ui.add_space(12.0);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        let view = renderer::project(state);
        renderer.paint(ui, &view);
    });

    actions
}

fn toolbar(ui: &mut egui::Ui, state: &EditorState, loading: bool, actions: &mut Vec<PanelAction>) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 12.0;

        if ActionButton::new("⬆", "Upload Image", UPLOAD_FILL).show(ui).clicked() {
            actions.push(PanelAction::PickFile);
        }
        if ActionButton::new("⬇", "Save Image", SAVE_FILL)
            .enabled(state.has_image())
            .show(ui)
            .clicked()
        {
            actions.push(PanelAction::SaveImage);
        }
        if ActionButton::new("⟳", "Reset", RESET_FILL).show(ui).clicked() {
            actions.push(PanelAction::Command(EditorCommand::ResetParameters));
        }
        if ActionButton::new("🗑", "Clear", CLEAR_FILL).show(ui).clicked() {
            actions.push(PanelAction::Command(EditorCommand::ClearImage));
        }

        if loading {
            ui.spinner();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::panels::{adjustments_panel, header_panel};
    use eframe::egui::panel::PanelState;
    use eframe::egui::{Id, Pos2, Rect, Vec2};

    fn toolbar_rect_in(screen: Rect) -> Rect {
        let ctx = egui::Context::default();
        let config = EditorConfig::default();
        let mut renderer = Renderer::new(&config);
        let state = EditorState::new();

        let input = egui::RawInput {
            screen_rect: Some(screen),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            header_panel(ctx, &config);
            adjustments_panel(ctx, &state);
            canvas_panel(ctx, &state, &mut renderer, false);
        });

        PanelState::load(&ctx, Id::new(TOOLBAR_PANEL_ID))
            .expect("toolbar panel was shown")
            .rect
    }

    #[test]
    fn toolbar_stays_on_screen_in_wide_short_windows() {
        let screen = Rect::from_min_size(Pos2::ZERO, Vec2::new(1280.0, 600.0));
        let toolbar = toolbar_rect_in(screen);

        assert!(toolbar.height() > 0.0);
        assert!(screen.contains_rect(toolbar), "{:?} outside {:?}", toolbar, screen);
    }

    #[test]
    fn toolbar_stays_on_screen_in_tall_windows() {
        let screen = Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 1200.0));
        assert!(screen.contains_rect(toolbar_rect_in(screen)));
    }
}
