use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui;

use crate::command::EditorCommand;
use crate::error::{LoadError, LoadResult};
use crate::loaded_image::LoadedImage;
use crate::util::task;

/// Extensions offered by the file dialog and accepted for extension-only drops
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// A finished load task on its way back to the UI thread
enum LoadOutcome {
    /// The user closed the file dialog without choosing anything
    Dismissed,
    Finished {
        file_name: String,
        result: LoadResult<LoadedImage>,
    },
}

/// Where the bytes of a file come from
enum FileSource {
    Bytes(Vec<u8>),
    #[cfg(not(target_arch = "wasm32"))]
    Path(std::path::PathBuf),
}

/// Turns user files into [`LoadedImage`]s without blocking the UI.
///
/// Every load runs as its own task and reports back over a channel. Loads are
/// never cancelled: [`FileHandler::poll`] hands results over in the order they
/// finish, so the one finishing last ends up on screen.
pub struct FileHandler {
    sender: Sender<LoadOutcome>,
    receiver: Receiver<LoadOutcome>,
    max_preview_side: u32,
    in_flight: usize,
}

impl FileHandler {
    pub fn new(max_preview_side: u32) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            max_preview_side,
            in_flight: 0,
        }
    }

    /// Opens the platform file dialog and loads whatever the user picks.
    pub fn pick_file(&mut self, ctx: &egui::Context) {
        let sender = self.sender.clone();
        let ctx = ctx.clone();
        let max_preview_side = self.max_preview_side;
        self.in_flight += 1;

        task::spawn(async move {
            let picked = rfd::AsyncFileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_file()
                .await;

            let outcome = match picked {
                Some(file) => {
                    let file_name = file.file_name();
                    let bytes = file.read().await;
                    log::info!("Picked {} ({} bytes)", file_name, bytes.len());
                    LoadOutcome::Finished {
                        result: LoadedImage::decode(file_name.clone(), bytes, max_preview_side),
                        file_name,
                    }
                }
                None => LoadOutcome::Dismissed,
            };

            // The app may already be gone; nothing left to deliver to then
            let _ = sender.send(outcome);
            ctx.request_repaint();
        });
    }

    /// Loads an in-memory file, such as a drop that arrives with its bytes
    /// (every drop in the browser).
    pub fn load_bytes(&mut self, ctx: &egui::Context, file_name: impl Into<String>, bytes: Vec<u8>) {
        self.spawn_load(ctx, file_name.into(), FileSource::Bytes(bytes));
    }

    fn spawn_load(&mut self, ctx: &egui::Context, file_name: String, source: FileSource) {
        let sender = self.sender.clone();
        let ctx = ctx.clone();
        let max_preview_side = self.max_preview_side;
        self.in_flight += 1;

        task::spawn(async move {
            let result = read_source(source)
                .and_then(|bytes| LoadedImage::decode(file_name.clone(), bytes, max_preview_side));
            let _ = sender.send(LoadOutcome::Finished { file_name, result });
            ctx.request_repaint();
        });
    }

    /// Takes the files dropped onto the window this frame and starts loading them.
    /// Returns how many loads were started.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> usize {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let mut started = 0;

        for file in dropped {
            let file_name = if let Some(path) = &file.path {
                path.display().to_string()
            } else if !file.name.is_empty() {
                file.name.clone()
            } else {
                "unknown".to_owned()
            };

            if !is_image_file(&file) {
                log::warn!("{}", LoadError::Unsupported(file_name));
                continue;
            }

            if let Some(bytes) = &file.bytes {
                log::info!("Loading dropped file {}", file_name);
                self.load_bytes(ctx, file_name, bytes.to_vec());
                started += 1;
                continue;
            }

            match dropped_path(&file) {
                Some(source) => {
                    log::info!("Loading dropped file {}", file_name);
                    self.spawn_load(ctx, file_name, source);
                    started += 1;
                }
                None => log::warn!("{}", LoadError::NoData(file_name)),
            }
        }

        started
    }

    /// Drains every finished load, oldest first, as commands for the state.
    /// Failed loads are logged and produce nothing.
    pub fn poll(&mut self) -> Vec<EditorCommand> {
        let mut commands = Vec::new();

        while let Ok(outcome) = self.receiver.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            match outcome {
                LoadOutcome::Dismissed => log::debug!("File dialog dismissed"),
                LoadOutcome::Finished { result: Ok(image), .. } => {
                    commands.push(EditorCommand::LoadImage(image));
                }
                LoadOutcome::Finished { file_name, result: Err(err) } => {
                    log::warn!("Could not load {}: {}", file_name, err);
                }
            }
        }

        commands
    }

    /// True while at least one load has not reported back yet
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Dims the window and lists the files being dragged over it.
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order, TextStyle};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Drop to load:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else if !file.mime.is_empty() {
                    text += &format!("\n{}", file.mime);
                } else {
                    text += "\n(name not available)";
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));

        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }
}

/// Check if a dropped file is an image based on MIME type or extension
pub fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return file.mime.starts_with("image/");
    }

    let name = match &file.path {
        Some(path) => path.to_string_lossy().into_owned(),
        None => file.name.clone(),
    };
    has_image_extension(&name)
}

pub fn has_image_extension(name: &str) -> bool {
    std::path::Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Native drops usually carry a path instead of bytes
fn dropped_path(file: &egui::DroppedFile) -> Option<FileSource> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        file.path.clone().map(FileSource::Path)
    }
    #[cfg(target_arch = "wasm32")]
    {
        let _ = file;
        None
    }
}

fn read_source(source: FileSource) -> LoadResult<Vec<u8>> {
    match source {
        FileSource::Bytes(bytes) => Ok(bytes),
        #[cfg(not(target_arch = "wasm32"))]
        FileSource::Path(path) => Ok(std::fs::read(path)?),
    }
}
