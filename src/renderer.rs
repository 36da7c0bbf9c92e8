use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Vec2};

use crate::config::EditorConfig;
use crate::effect::{ScaleTransform, VisualEffect};
use crate::loaded_image::{ImageId, LoadedImage};
use crate::state::EditorState;
use crate::texture_manager::{TextureGenerationError, TextureManager};

pub const PLACEHOLDER_PROMPT: &str = "Upload an image to get started";

const CANVAS_FILL: Color32 = Color32::from_rgb(17, 24, 39);
const PLACEHOLDER_INK: Color32 = Color32::from_rgb(75, 85, 99);

/// What the canvas should show, derived from the editor state alone.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Placeholder { prompt: &'static str },
    Picture { image: &'a LoadedImage, effect: VisualEffect },
}

/// Projects the state onto a view. Pure, and cheap enough to run every frame.
pub fn project(state: &EditorState) -> View<'_> {
    match state.image() {
        Some(image) => View::Picture {
            image,
            effect: VisualEffect::from_params(state.params()),
        },
        None => View::Placeholder {
            prompt: PLACEHOLDER_PROMPT,
        },
    }
}

/// Size of a picture fitted inside `bounds` without upscaling, keeping its aspect ratio.
pub fn fit_size(natural: Vec2, bounds: Vec2) -> Vec2 {
    if natural.x <= 0.0 || natural.y <= 0.0 {
        return Vec2::ZERO;
    }
    let factor = (bounds.x / natural.x).min(bounds.y / natural.y).min(1.0);
    natural * factor
}

/// Largest canvas of the given aspect ratio that fits inside `available`.
pub fn canvas_size(available: Vec2, aspect_ratio: f32) -> Vec2 {
    let aspect_ratio = aspect_ratio.max(0.1);
    let width = available.x.max(0.0);
    let height = (width / aspect_ratio).min(available.y.max(0.0));
    Vec2::new(height * aspect_ratio, height)
}

/// Where the picture lands on the canvas: fitted, then scaled around the canvas center.
/// The result may exceed `canvas`; the painter clips it.
pub fn picture_rect(canvas: Rect, natural: Vec2, transform: ScaleTransform) -> Rect {
    let fitted = fit_size(natural, canvas.size());
    Rect::from_center_size(canvas.center(), transform.apply(fitted))
}

/// Realizes [`View`]s on screen.
///
/// egui has no filter stage, so the colour part of the effect is baked into a
/// texture built from the preview pixels and cached per filter.
pub struct Renderer {
    textures: TextureManager,
    canvas_aspect_ratio: f32,
    /// Picture drawn last frame, its textures are dropped once it goes away
    shown_image: Option<ImageId>,
}

impl Renderer {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            textures: TextureManager::new(config.texture_cache_capacity),
            canvas_aspect_ratio: config.canvas_aspect_ratio,
            shown_image: None,
        }
    }

    pub fn begin_frame(&mut self) {
        self.textures.begin_frame();
    }

    pub fn cached_textures(&self) -> usize {
        self.textures.cache_size()
    }

    /// Allocates the canvas in the space left in `ui`, centered horizontally,
    /// and draws `view` in it.
    pub fn paint(&mut self, ui: &mut egui::Ui, view: &View<'_>) -> egui::Response {
        let size = canvas_size(ui.available_size(), self.canvas_aspect_ratio);
        let (row, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), size.y), Sense::hover());
        let canvas = Rect::from_center_size(row.center(), size);
        let response = ui.interact(canvas, ui.id().with("canvas"), Sense::hover());

        let showing = match view {
            View::Picture { image, .. } => Some(image.id()),
            View::Placeholder { .. } => None,
        };
        if self.shown_image != showing {
            if let Some(previous) = self.shown_image.take() {
                self.textures.invalidate_image(previous);
            }
            self.shown_image = showing;
        }

        if !ui.is_rect_visible(canvas) {
            return response;
        }

        let painter = ui.painter_at(canvas);
        painter.rect_filled(canvas, 8.0, CANVAS_FILL);

        match view {
            View::Placeholder { prompt } => paint_placeholder(&painter, canvas, prompt),
            View::Picture { image, effect } => {
                let texture = self.textures.get_or_create_texture(
                    image.id(),
                    effect.filter.cache_key(),
                    || Ok::<_, TextureGenerationError>(effect.filter.apply(image.preview())),
                    ui.ctx(),
                );
                match texture {
                    Ok(texture_id) => {
                        let rect = picture_rect(canvas, image.display_size(), effect.transform);
                        let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
                        painter.image(texture_id, rect, uv, Color32::WHITE);
                    }
                    Err(err) => log::error!("Cannot draw {}: {}", image.name(), err),
                }
            }
        }

        response.on_hover_text_at_pointer(match view {
            View::Picture { effect, .. } => effect.to_string(),
            View::Placeholder { prompt } => prompt.to_string(),
        })
    }
}

fn paint_placeholder(painter: &egui::Painter, canvas: Rect, prompt: &str) {
    let center = canvas.center();
    painter.text(
        center - Vec2::new(0.0, 24.0),
        Align2::CENTER_CENTER,
        "🖼",
        FontId::proportional(56.0),
        PLACEHOLDER_INK,
    );
    painter.text(
        center + Vec2::new(0.0, 28.0),
        Align2::CENTER_CENTER,
        prompt,
        FontId::proportional(16.0),
        Color32::from_gray(140),
    );
}
