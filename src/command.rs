use crate::loaded_image::LoadedImage;
use crate::state::Parameter;

/// Every mutation the UI can request of the [`crate::EditorState`].
///
/// Panels and the loader return commands instead of touching the state
/// directly; the app applies them in order once per frame.
pub enum EditorCommand {
    /// Replaces the current picture with a freshly decoded one
    LoadImage(LoadedImage),
    /// Moves one slider
    SetParameter { parameter: Parameter, value: i32 },
    /// Puts every slider back to its default
    ResetParameters,
    /// Drops the picture and resets the sliders
    ClearImage,
}

impl EditorCommand {
    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::LoadImage(_) => "Load Image",
            EditorCommand::SetParameter { .. } => "Set Parameter",
            EditorCommand::ResetParameters => "Reset Parameters",
            EditorCommand::ClearImage => "Clear Image",
        }
    }
}

impl std::fmt::Debug for EditorCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorCommand::LoadImage(image) => f
                .debug_tuple("LoadImage")
                .field(&image.name())
                .finish(),
            EditorCommand::SetParameter { parameter, value } => f
                .debug_struct("SetParameter")
                .field("parameter", parameter)
                .field("value", value)
                .finish(),
            EditorCommand::ResetParameters => write!(f, "ResetParameters"),
            EditorCommand::ClearImage => write!(f, "ClearImage"),
        }
    }
}
