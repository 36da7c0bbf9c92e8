use std::io::Cursor;

use cumulonimbus::{AdjustmentParameters, EditorCommand, EditorState, LoadedImage, Parameter};
use image::{ImageFormat, Rgba, RgbaImage};

// Helper to decode a small solid-colour picture
fn loaded_image(name: &str) -> LoadedImage {
    let img = RgbaImage::from_pixel(8, 6, Rgba([120, 60, 30, 255]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
    LoadedImage::decode(name, bytes, 1024).unwrap()
}

fn defaults() -> AdjustmentParameters {
    AdjustmentParameters {
        brightness: 100,
        contrast: 100,
        saturation: 100,
        scale: 100,
    }
}

#[test]
fn test_setting_brightness_from_initial_state() {
    let mut state = EditorState::new();
    assert!(state.image().is_none());
    assert_eq!(*state.params(), defaults());

    state.set_parameter(Parameter::Brightness, 150);

    assert!(state.image().is_none());
    assert_eq!(
        *state.params(),
        AdjustmentParameters {
            brightness: 150,
            ..defaults()
        }
    );
}

#[test]
fn test_reset_after_edit_keeps_image() {
    let mut state = EditorState::new();
    let image = loaded_image("photo.png");
    state.load_image(image.clone());
    state.set_parameter(Parameter::Brightness, 50);

    state.reset_parameters();

    assert_eq!(state.image(), Some(&image));
    assert_eq!(state.parameter(Parameter::Brightness), 100);
}

#[test]
fn test_reset_from_any_state_yields_defaults() {
    let mut state = EditorState::new();
    for (i, parameter) in Parameter::ALL.into_iter().enumerate() {
        state.set_parameter(parameter, 60 + i as i32 * 10);
    }
    assert_ne!(*state.params(), defaults());

    state.reset_parameters();
    assert_eq!(*state.params(), defaults());
}

#[test]
fn test_clear_resets_everything() {
    let mut state = EditorState::new();
    state.load_image(loaded_image("photo.png"));
    state.set_parameter(Parameter::Saturation, 0);
    state.set_parameter(Parameter::Scale, 150);

    state.clear_image();

    assert!(state.image().is_none());
    assert_eq!(*state.params(), defaults());

    // Clearing again, with nothing loaded, changes nothing
    state.clear_image();
    assert!(state.image().is_none());
    assert_eq!(*state.params(), defaults());
}

#[test]
fn test_first_load_leaves_defaults() {
    let mut state = EditorState::new();
    state.load_image(loaded_image("first.png"));

    assert!(state.has_image());
    assert_eq!(*state.params(), defaults());
}

#[test]
fn test_later_load_replaces_earlier() {
    let mut state = EditorState::new();
    let first = loaded_image("first.png");
    let second = loaded_image("second.png");

    // Loads complete in this order; the last one wins
    for command in [EditorCommand::LoadImage(first), EditorCommand::LoadImage(second.clone())] {
        state.apply(command);
    }

    assert_eq!(state.image(), Some(&second));
    assert_eq!(state.image().map(LoadedImage::name), Some("second.png"));
}

#[test]
fn test_slider_values_stay_in_bounds() {
    let mut state = EditorState::new();
    for parameter in Parameter::ALL {
        let range = parameter.range();
        for value in [i32::MIN, -1, 0, 49, 50, 100, 150, 151, 200, 201, i32::MAX] {
            state.set_parameter(parameter, value);
            assert!(range.contains(&state.parameter(parameter)), "{parameter} = {value}");
        }
    }
}
