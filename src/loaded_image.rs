use std::sync::Arc;

use egui::{ColorImage, Vec2};
use uuid::Uuid;

use crate::error::LoadResult;
use crate::util::time;

/// Identifies one successful load. A reloaded file gets a fresh id.
pub type ImageId = Uuid;

/// The picture currently being edited.
///
/// Keeps the original encoded bytes untouched next to a decoded preview whose
/// longest side is bounded, so re-filtering on every slider move stays cheap.
/// Cloning is cheap: both payloads are shared.
#[derive(Clone)]
pub struct LoadedImage {
    id: ImageId,
    name: String,
    encoded: Arc<[u8]>,
    preview: Arc<ColorImage>,
    source_size: [usize; 2],
}

// ColorImage carries the whole pixel buffer, keep Debug output short
impl std::fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedImage")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("encoded_len", &self.encoded.len())
            .field("source_size", &self.source_size)
            .field("preview_size", &self.preview.size)
            .finish()
    }
}

impl PartialEq for LoadedImage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl LoadedImage {
    /// Decode `bytes` and build the preview.
    pub fn decode(name: impl Into<String>, bytes: Vec<u8>, max_preview_side: u32) -> LoadResult<Self> {
        let name = name.into();
        let started = time::current_time_secs();

        let decoded = image::load_from_memory(&bytes)?;
        let source_size = [decoded.width() as usize, decoded.height() as usize];

        let max_side = max_preview_side.max(1);
        let preview = if decoded.width() > max_side || decoded.height() > max_side {
            decoded.thumbnail(max_side, max_side)
        } else {
            decoded
        };
        let rgba = preview.to_rgba8();
        let preview_size = [rgba.width() as usize, rgba.height() as usize];
        let preview = ColorImage::from_rgba_unmultiplied(preview_size, rgba.as_flat_samples().as_slice());

        log::debug!(
            "Decoded {}: {}x{} (preview {}x{}) in {:.1} ms",
            name,
            source_size[0],
            source_size[1],
            preview_size[0],
            preview_size[1],
            time::elapsed_ms(started)
        );

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            encoded: bytes.into(),
            preview: Arc::new(preview),
            source_size,
        })
    }

    pub fn id(&self) -> ImageId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The file's bytes exactly as loaded.
    pub fn encoded(&self) -> &[u8] {
        &self.encoded
    }

    pub fn preview(&self) -> &ColorImage {
        &self.preview
    }

    pub fn source_size(&self) -> [usize; 2] {
        self.source_size
    }

    /// Natural size in points, used to lay the picture out before scaling.
    pub fn display_size(&self) -> Vec2 {
        Vec2::new(self.source_size[0] as f32, self.source_size[1] as f32)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba, RgbaImage};

    /// Encodes a solid-colour PNG in memory.
    pub fn png_bytes(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba(pixel));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encoding an in-memory PNG cannot fail");
        bytes
    }
}
