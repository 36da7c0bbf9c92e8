use std::io::Cursor;

use cumulonimbus::{EditorConfig, EditorState, LoadedImage, Parameter, Renderer, View, project};
use image::{ImageFormat, Rgba, RgbaImage};

fn loaded_image() -> LoadedImage {
    let img = RgbaImage::from_pixel(32, 18, Rgba([200, 50, 50, 255]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
    LoadedImage::decode("red.png", bytes, 1024).unwrap()
}

// Runs one egui frame that paints the state's view through `renderer`
fn paint_frame(ctx: &egui::Context, renderer: &mut Renderer, state: &EditorState) {
    renderer.begin_frame();
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            renderer.paint(ui, &project(state));
        });
    });
}

#[test]
fn test_projection_describes_the_effect() {
    let mut state = EditorState::new();
    state.load_image(loaded_image());
    state.set_parameter(Parameter::Brightness, 150);
    state.set_parameter(Parameter::Scale, 50);

    match project(&state) {
        View::Picture { image, effect } => {
            assert_eq!(image.name(), "red.png");
            assert_eq!(
                effect.filter.to_string(),
                "brightness(150%) contrast(100%) saturate(100%)"
            );
            assert_eq!(effect.transform.to_string(), "scale(0.5)");
        }
        View::Placeholder { .. } => panic!("expected a picture"),
    }

    state.clear_image();
    assert!(matches!(project(&state), View::Placeholder { .. }));
}

#[test]
fn test_projection_is_pure() {
    let mut state = EditorState::new();
    state.load_image(loaded_image());
    state.set_parameter(Parameter::Contrast, 30);

    let before = state.clone();
    assert_eq!(project(&state), project(&state));
    assert_eq!(state.params(), before.params());
    assert_eq!(state.image(), before.image());
}

#[test]
fn test_renderer_caches_per_filter_and_forgets_cleared_images() {
    let ctx = egui::Context::default();
    let mut renderer = Renderer::new(&EditorConfig::default().with_texture_cache_capacity(4));
    let mut state = EditorState::new();

    paint_frame(&ctx, &mut renderer, &state);
    assert_eq!(renderer.cached_textures(), 0);

    state.load_image(loaded_image());
    paint_frame(&ctx, &mut renderer, &state);
    assert_eq!(renderer.cached_textures(), 1);

    // Scale is geometric only, no new texture
    state.set_parameter(Parameter::Scale, 120);
    paint_frame(&ctx, &mut renderer, &state);
    assert_eq!(renderer.cached_textures(), 1);

    state.set_parameter(Parameter::Saturation, 0);
    paint_frame(&ctx, &mut renderer, &state);
    assert_eq!(renderer.cached_textures(), 2);

    state.clear_image();
    paint_frame(&ctx, &mut renderer, &state);
    assert_eq!(renderer.cached_textures(), 0);
}

#[test]
fn test_canvas_fits_inside_a_short_window() {
    let ctx = egui::Context::default();
    let mut renderer = Renderer::new(&EditorConfig::default());
    let mut state = EditorState::new();
    state.load_image(loaded_image());

    let screen = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1280.0, 400.0));
    let input = egui::RawInput {
        screen_rect: Some(screen),
        ..Default::default()
    };
    let mut canvas = egui::Rect::NOTHING;
    let _ = ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            canvas = renderer.paint(ui, &project(&state)).rect;
        });
    });

    assert!(canvas.height() > 0.0);
    assert!(screen.contains_rect(canvas), "{:?} outside {:?}", canvas, screen);
}
