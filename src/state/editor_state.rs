//! The editor's state holder.
//!
//! Owns the picture being edited (if any) and the four adjustment knobs. The
//! state is only mutated from the UI thread, through the operations below or
//! through [`EditorState::apply`] with an [`EditorCommand`].
//!
//! The valid states are the presence or absence of a picture, crossed with an
//! always fully populated [`AdjustmentParameters`]:
//!
//! ```text
//!   ┌──────────────┐   load_image    ┌──────────────┐
//!   │              ├────────────────►│              │◄──┐ load_image
//!   │    Empty     │                 │    Loaded    ├───┘ (last write wins)
//!   │              │◄────────────────┤              │
//!   └──────────────┘   clear_image   └──────────────┘
//! ```
//!
//! `set_parameter` and `reset_parameters` are valid in both states and never
//! change which one the editor is in.

use crate::command::EditorCommand;
use crate::loaded_image::LoadedImage;

use super::{AdjustmentParameters, Parameter};

#[derive(Debug, Default, Clone)]
pub struct EditorState {
    image: Option<LoadedImage>,
    params: AdjustmentParameters,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current picture. Adjustments are left as they are.
    pub fn load_image(&mut self, image: LoadedImage) {
        log::info!("Loaded image {} ({})", image.name(), image.id());
        self.image = Some(image);
    }

    /// Overwrites one parameter, clamped to its range, leaving the others untouched.
    pub fn set_parameter(&mut self, parameter: Parameter, value: i32) {
        self.params.set(parameter, value);
    }

    /// Restores every parameter to its default. The picture stays loaded.
    pub fn reset_parameters(&mut self) {
        self.params = AdjustmentParameters::default();
    }

    /// Drops the picture and resets the parameters.
    pub fn clear_image(&mut self) {
        if let Some(image) = self.image.take() {
            log::info!("Cleared image {} ({})", image.name(), image.id());
        }
        self.reset_parameters();
    }

    /// Dispatches a command to the matching operation.
    pub fn apply(&mut self, command: EditorCommand) {
        log::debug!("Applying {}", command.name());
        match command {
            EditorCommand::LoadImage(image) => self.load_image(image),
            EditorCommand::SetParameter { parameter, value } => self.set_parameter(parameter, value),
            EditorCommand::ResetParameters => self.reset_parameters(),
            EditorCommand::ClearImage => self.clear_image(),
        }
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn params(&self) -> &AdjustmentParameters {
        &self.params
    }

    pub fn parameter(&self, parameter: Parameter) -> i32 {
        self.params.get(parameter)
    }
}
