/// Knobs fixed at app construction.
///
/// Nothing here is read from disk or the environment: the editor keeps no
/// state between sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Window title natively, heading text everywhere
    pub title: String,
    pub subtitle: String,
    /// Width over height of the canvas the picture is shown in
    pub canvas_aspect_ratio: f32,
    /// Longest side of the decoded preview, in pixels
    pub max_preview_side: u32,
    /// Filtered textures kept alive at once
    pub texture_cache_capacity: usize,
    pub export_file_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            title: "Cumulonimbus Photo Editor".to_owned(),
            subtitle: "Professional-grade photo editing in your browser".to_owned(),
            canvas_aspect_ratio: 16.0 / 9.0,
            max_preview_side: 2048,
            texture_cache_capacity: 8,
            export_file_name: "edited.png".to_owned(),
        }
    }
}

impl EditorConfig {
    pub fn with_texture_cache_capacity(mut self, capacity: usize) -> Self {
        self.texture_cache_capacity = capacity.max(1);
        self
    }
}
