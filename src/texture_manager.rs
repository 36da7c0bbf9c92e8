use std::collections::HashMap;
use egui::{Context, TextureHandle, TextureId, ColorImage, TextureOptions};
use thiserror::Error;

use crate::loaded_image::ImageId;

/// Errors that can occur during texture generation
#[derive(Error, Debug)]
pub enum TextureGenerationError {
    #[error("Invalid texture dimensions {0}x{1}")]
    InvalidDimensions(usize, usize),
}

type CacheKey = (ImageId, u64);

/// Caches the filtered preview textures of the loaded picture.
///
/// Textures are keyed by image id and filter key, so dragging a slider back
/// to an earlier value is a cache hit instead of a re-filter.
pub struct TextureManager {
    texture_cache: HashMap<CacheKey, TextureHandle>,
    /// Frame each texture was last drawn in
    last_used: HashMap<CacheKey, u64>,
    current_frame: u64,
    max_cache_size: usize,
}

impl TextureManager {
    pub fn new(max_cache_size: usize) -> Self {
        Self {
            texture_cache: HashMap::new(),
            last_used: HashMap::new(),
            current_frame: 0,
            max_cache_size: max_cache_size.max(1),
        }
    }

    /// Call once at the start of each frame
    pub fn begin_frame(&mut self) {
        self.current_frame += 1;
    }

    /// Returns the cached texture for `(image_id, filter_key)` or builds it with `generator`
    pub fn get_or_create_texture<F>(
        &mut self,
        image_id: ImageId,
        filter_key: u64,
        generator: F,
        ctx: &Context,
    ) -> Result<TextureId, TextureGenerationError>
    where
        F: FnOnce() -> Result<ColorImage, TextureGenerationError>,
    {
        let cache_key = (image_id, filter_key);

        if let Some(handle) = self.texture_cache.get(&cache_key) {
            self.last_used.insert(cache_key, self.current_frame);
            return Ok(handle.id());
        }

        let image = generator()?;
        if image.width() == 0 || image.height() == 0 {
            return Err(TextureGenerationError::InvalidDimensions(image.width(), image.height()));
        }

        let name = format!("picture_{}_f{:012x}", image_id, filter_key);
        log::debug!("Uploading texture {}", name);
        let handle = ctx.load_texture(name, image, TextureOptions::LINEAR);

        self.texture_cache.insert(cache_key, handle.clone());
        self.last_used.insert(cache_key, self.current_frame);
        self.prune_cache_if_needed();

        Ok(handle.id())
    }

    /// Drops every texture built for `image_id`
    pub fn invalidate_image(&mut self, image_id: ImageId) {
        self.texture_cache.retain(|(id, _), _| *id != image_id);
        self.last_used.retain(|(id, _), _| *id != image_id);
    }

    fn prune_cache_if_needed(&mut self) {
        if self.texture_cache.len() <= self.max_cache_size {
            return;
        }

        let mut entries: Vec<(CacheKey, u64)> = self.last_used
            .iter()
            .map(|(k, v)| (*k, *v))
            .collect();

        // Oldest first
        entries.sort_by_key(|(_, frame)| *frame);

        let to_remove = entries.len() - self.max_cache_size;
        for (key, _) in entries.iter().take(to_remove) {
            self.texture_cache.remove(key);
            self.last_used.remove(key);
        }
    }

    pub fn cache_size(&self) -> usize {
        self.texture_cache.len()
    }

    #[cfg(test)]
    pub fn get_texture(&self, image_id: ImageId, filter_key: u64) -> Option<&TextureHandle> {
        self.texture_cache.get(&(image_id, filter_key))
    }
}
