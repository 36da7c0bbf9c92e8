use std::io::Cursor;

use image::imageops::FilterType;
use image::{ImageFormat, RgbaImage};

use crate::effect::VisualEffect;
use crate::error::{ExportError, ExportResult};
use crate::loaded_image::LoadedImage;
use crate::state::AdjustmentParameters;
use crate::util::{task, time};

/// Renders `image` with `params` at full resolution and encodes it as PNG.
///
/// The colour filter is the same one the preview uses; the scale transform
/// changes the output dimensions.
pub fn render_png(image: &LoadedImage, params: &AdjustmentParameters) -> ExportResult<Vec<u8>> {
    let started = time::current_time_secs();
    let effect = VisualEffect::from_params(params);

    let decoded = image::load_from_memory(image.encoded()).map_err(ExportError::Decode)?;
    let mut rgba = decoded.to_rgba8();
    effect.filter.apply_rgba(&mut rgba);

    let rgba = scaled(rgba, effect.transform.factor());

    let mut bytes = Vec::new();
    rgba.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(ExportError::Encode)?;

    log::debug!(
        "Rendered {} as {}x{} PNG ({} bytes) in {:.1} ms",
        image.name(),
        rgba.width(),
        rgba.height(),
        bytes.len(),
        time::elapsed_ms(started)
    );

    Ok(bytes)
}

fn scaled(rgba: RgbaImage, factor: f32) -> RgbaImage {
    if (factor - 1.0).abs() < f32::EPSILON {
        return rgba;
    }
    let width = ((rgba.width() as f32 * factor).round() as u32).max(1);
    let height = ((rgba.height() as f32 * factor).round() as u32).max(1);
    image::imageops::resize(&rgba, width, height, FilterType::Lanczos3)
}

/// Renders the PNG and offers it through the save dialog, without blocking the UI.
///
/// In the browser the save dialog is a download. Failures are logged only.
pub fn save_image(image: LoadedImage, params: AdjustmentParameters, file_name: String) {
    task::spawn(async move {
        let bytes = match render_png(&image, &params) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::error!("Export of {} failed: {}", image.name(), err);
                return;
            }
        };

        let Some(handle) = rfd::AsyncFileDialog::new()
            .set_file_name(file_name.as_str())
            .add_filter("PNG image", &["png"])
            .save_file()
            .await
        else {
            log::debug!("Save dialog dismissed");
            return;
        };

        match handle.write(&bytes).await.map_err(ExportError::from) {
            Ok(()) => log::info!("Saved {} ({} bytes)", handle.file_name(), bytes.len()),
            Err(err) => log::error!("{}", err),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaded_image::test_support::png_bytes;

    fn decode_png(bytes: &[u8]) -> RgbaImage {
        image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .unwrap()
            .to_rgba8()
    }

    #[test]
    fn defaults_reproduce_the_source() {
        let image = LoadedImage::decode("src.png", png_bytes(4, 2, [12, 34, 56, 255]), 64).unwrap();

        let out = decode_png(&render_png(&image, &AdjustmentParameters::default()).unwrap());

        assert_eq!(out.dimensions(), (4, 2));
        assert!(out.pixels().all(|p| p.0 == [12, 34, 56, 255]));
    }

    #[test]
    fn filter_and_scale_are_baked_in() {
        // Preview is clamped to 2px, the export still uses the full source
        let image = LoadedImage::decode("src.png", png_bytes(10, 4, [200, 100, 50, 255]), 2).unwrap();
        let params = AdjustmentParameters {
            brightness: 0,
            scale: 150,
            ..AdjustmentParameters::default()
        };

        let out = decode_png(&render_png(&image, &params).unwrap());

        assert_eq!(out.dimensions(), (15, 6));
        assert!(out.pixels().all(|p| p.0[..3] == [0, 0, 0]));
    }

    #[test]
    fn scaling_down_never_reaches_zero() {
        let rgba = RgbaImage::new(1, 1);
        assert_eq!(scaled(rgba, 0.5).dimensions(), (1, 1));
    }
}
