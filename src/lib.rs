#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod effect;
pub mod error;
pub mod export;
pub mod file_handler;
pub mod loaded_image;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod texture_manager;
pub mod util;

pub use app::PhotoEditorApp;
pub use command::EditorCommand;
pub use config::EditorConfig;
pub use effect::{FilterDescription, ScaleTransform, VisualEffect};
pub use error::{ExportError, LoadError};
pub use loaded_image::{ImageId, LoadedImage};
pub use renderer::{project, Renderer, View};
pub use state::{AdjustmentParameters, EditorState, Parameter};
