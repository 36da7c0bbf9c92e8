mod adjustments_panel;
mod canvas_panel;
mod header_panel;

pub use adjustments_panel::adjustments_panel;
pub use canvas_panel::canvas_panel;
pub use header_panel::header_panel;

use crate::command::EditorCommand;

/// What a panel asks of the app after drawing itself.
///
/// State changes travel as [`EditorCommand`]s; the other actions need
/// services only the app owns (the loader and the exporter).
#[derive(Debug)]
pub enum PanelAction {
    Command(EditorCommand),
    PickFile,
    SaveImage,
}
