//! Declarative description of the non-destructive transform, and the code that
//! realizes it on pixels.
//!
//! The filter follows the CSS filter-effects functions: `brightness()` and
//! `contrast()` are linear component transfers, `saturate()` is the standard
//! saturation matrix. Each primitive clamps to `[0, 1]` before the next one runs
//! and alpha is never touched.

use std::fmt;

use egui::{Color32, ColorImage, Vec2};

use crate::state::AdjustmentParameters;

/// Colour part of the visual effect, in percent as the sliders report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterDescription {
    pub brightness: i32,
    pub contrast: i32,
    pub saturate: i32,
}

/// Geometric part of the visual effect: a uniform scale around the picture center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTransform(pub f32);

/// Everything the render stage needs to draw the adjusted picture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualEffect {
    pub filter: FilterDescription,
    pub transform: ScaleTransform,
}

impl VisualEffect {
    pub fn from_params(params: &AdjustmentParameters) -> Self {
        Self {
            filter: FilterDescription::from_params(params),
            transform: ScaleTransform::from_percent(params.scale),
        }
    }
}

impl fmt::Display for VisualEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "filter: {}; transform: {}", self.filter, self.transform)
    }
}

impl FilterDescription {
    pub fn from_params(params: &AdjustmentParameters) -> Self {
        Self {
            brightness: params.brightness,
            contrast: params.contrast,
            saturate: params.saturation,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.brightness == 100 && self.contrast == 100 && self.saturate == 100
    }

    /// Packs the three percentages into one key for the texture cache.
    pub fn cache_key(&self) -> u64 {
        let pack = |v: i32| u64::from(v.clamp(0, u16::MAX as i32) as u16);
        pack(self.brightness) | pack(self.contrast) << 16 | pack(self.saturate) << 32
    }

    /// Returns a filtered copy of `image`. The input is left untouched.
    pub fn apply(&self, image: &ColorImage) -> ColorImage {
        if self.is_identity() {
            return image.clone();
        }

        let kernel = FilterKernel::new(self);
        let pixels = image
            .pixels
            .iter()
            .map(|pixel| {
                let [r, g, b, a] = pixel.to_srgba_unmultiplied();
                let [r, g, b] = kernel.map_rgb([r, g, b]);
                Color32::from_rgba_unmultiplied(r, g, b, a)
            })
            .collect();

        ColorImage {
            size: image.size,
            pixels,
        }
    }

    /// Filters a tightly packed, unmultiplied RGBA8 buffer in place.
    pub fn apply_rgba(&self, rgba: &mut [u8]) {
        if self.is_identity() {
            return;
        }

        let kernel = FilterKernel::new(self);
        for pixel in rgba.chunks_exact_mut(4) {
            let [r, g, b] = kernel.map_rgb([pixel[0], pixel[1], pixel[2]]);
            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
        }
    }
}

impl fmt::Display for FilterDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "brightness({}%) contrast({}%) saturate({}%)",
            self.brightness, self.contrast, self.saturate
        )
    }
}

impl ScaleTransform {
    pub fn from_percent(percent: i32) -> Self {
        Self(percent as f32 / 100.0)
    }

    pub fn factor(&self) -> f32 {
        self.0
    }

    pub fn apply(&self, size: Vec2) -> Vec2 {
        size * self.0
    }
}

impl fmt::Display for ScaleTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scale({})", self.0)
    }
}

/// Precomputed form of a [`FilterDescription`].
///
/// Brightness and contrast act per channel, so they collapse into one lookup
/// table; saturate mixes channels and stays a 3x3 matrix.
struct FilterKernel {
    lut: [u8; 256],
    saturate: Option<[[f32; 3]; 3]>,
}

impl FilterKernel {
    fn new(filter: &FilterDescription) -> Self {
        let brightness = filter.brightness as f32 / 100.0;
        let contrast = filter.contrast as f32 / 100.0;

        let mut lut = [0u8; 256];
        for (value, slot) in lut.iter_mut().enumerate() {
            let x = value as f32 / 255.0;
            let x = (x * brightness).clamp(0.0, 1.0);
            let x = (x * contrast + 0.5 - 0.5 * contrast).clamp(0.0, 1.0);
            *slot = (x * 255.0).round() as u8;
        }

        let saturate = (filter.saturate != 100).then(|| saturate_matrix(filter.saturate as f32 / 100.0));

        Self { lut, saturate }
    }

    fn map_rgb(&self, [r, g, b]: [u8; 3]) -> [u8; 3] {
        let rgb = [
            self.lut[r as usize],
            self.lut[g as usize],
            self.lut[b as usize],
        ];

        let Some(m) = &self.saturate else {
            return rgb;
        };

        let [r, g, b] = rgb.map(|c| c as f32);
        let mix = |row: &[f32; 3]| (row[0] * r + row[1] * g + row[2] * b).round().clamp(0.0, 255.0) as u8;
        [mix(&m[0]), mix(&m[1]), mix(&m[2])]
    }
}

fn saturate_matrix(s: f32) -> [[f32; 3]; 3] {
    [
        [0.213 + 0.787 * s, 0.715 - 0.715 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 + 0.285 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 - 0.715 * s, 0.072 + 0.928 * s],
    ]
}
