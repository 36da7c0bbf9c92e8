use crate::command::EditorCommand;
use crate::config::EditorConfig;
use crate::export;
use crate::file_handler::FileHandler;
use crate::panels::{self, PanelAction};
use crate::renderer::Renderer;
use crate::state::EditorState;

/// The photo editor widget.
///
/// Lives for one UI session; nothing is saved on shutdown.
pub struct PhotoEditorApp {
    config: EditorConfig,
    state: EditorState,
    renderer: Renderer,
    file_handler: FileHandler,
}

impl Default for PhotoEditorApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl PhotoEditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            renderer: Renderer::new(&config),
            file_handler: FileHandler::new(config.max_preview_side),
            state: EditorState::new(),
            config,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Applies one state mutation.
    pub fn execute_command(&mut self, command: EditorCommand) {
        self.state.apply(command);
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: PanelAction) {
        match action {
            PanelAction::Command(command) => self.execute_command(command),
            PanelAction::PickFile => self.file_handler.pick_file(ctx),
            PanelAction::SaveImage => match self.state.image() {
                Some(image) => export::save_image(
                    image.clone(),
                    *self.state.params(),
                    self.config.export_file_name.clone(),
                ),
                None => log::warn!("Nothing to save: no image loaded"),
            },
        }
    }
}

impl eframe::App for PhotoEditorApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.renderer.begin_frame();

        // Finished loads land before drawing so the frame shows them
        for command in self.file_handler.poll() {
            self.execute_command(command);
        }
        self.file_handler.check_for_dropped_files(ctx);

        panels::header_panel(ctx, &self.config);
        let mut actions = panels::adjustments_panel(ctx, &self.state);
        actions.extend(panels::canvas_panel(
            ctx,
            &self.state,
            &mut self.renderer,
            self.file_handler.is_loading(),
        ));

        self.file_handler.preview_files_being_dropped(ctx);

        if !actions.is_empty() {
            for action in actions {
                self.handle_action(ctx, action);
            }
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaded_image::{LoadedImage, test_support::png_bytes};
    use crate::state::Parameter;

    #[test]
    fn starts_without_image() {
        let app = PhotoEditorApp::default();
        assert!(!app.state().has_image());
        assert!(app.state().params().is_default());
        assert_eq!(app.config(), &EditorConfig::default());
    }

    #[test]
    fn panel_commands_reach_the_state() {
        let ctx = egui::Context::default();
        let mut app = PhotoEditorApp::default();
        let image = LoadedImage::decode("a.png", png_bytes(2, 2, [1, 2, 3, 255]), 64).unwrap();

        app.handle_action(&ctx, PanelAction::Command(EditorCommand::LoadImage(image)));
        app.handle_action(
            &ctx,
            PanelAction::Command(EditorCommand::SetParameter {
                parameter: Parameter::Contrast,
                value: 175,
            }),
        );
        assert_eq!(app.state().parameter(Parameter::Contrast), 175);

        app.handle_action(&ctx, PanelAction::Command(EditorCommand::ClearImage));
        assert!(!app.state().has_image());
        assert!(app.state().params().is_default());
    }
}
