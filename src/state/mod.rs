mod editor_state;
mod params;

pub use editor_state::EditorState;
pub use params::{AdjustmentParameters, Parameter};
