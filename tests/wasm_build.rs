//! WASM build test
//!
//! This module tests that the WASM module can be built and that the
//! JavaScript-facing API works against a real browser window.

#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use rhythm_wasm::api::*;

wasm_bindgen_test_configure!(run_in_browser);

fn config_object(base_font_size: f64, line_height_ratio: f64, scale_ratio: &str) -> JsValue {
    let obj = Object::new();
    Reflect::set(&obj, &"baseFontSize".into(), &base_font_size.into()).unwrap();
    Reflect::set(&obj, &"lineHeightRatio".into(), &line_height_ratio.into()).unwrap();
    Reflect::set(&obj, &"scaleRatio".into(), &scale_ratio.into()).unwrap();
    obj.into()
}

/// Provider options with breakpoints disabled, so the result does not
/// depend on the test browser's window size.
fn fixed_options(base_font_size: f64, line_height_ratio: f64) -> JsValue {
    let obj = Object::new();
    Reflect::set(&obj, &"baseFontSize".into(), &base_font_size.into()).unwrap();
    Reflect::set(&obj, &"lineHeightRatio".into(), &line_height_ratio.into()).unwrap();
    Reflect::set(&obj, &"breakpoints".into(), &JsValue::FALSE).unwrap();
    obj.into()
}

#[wasm_bindgen_test]
fn test_type_step_computation() {
    let result = compute_type_step(1, config_object(16.0, 1.5, "major third"));
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 20.0);
}

#[wasm_bindgen_test]
fn test_rhythm_units_computation() {
    let result = compute_rhythm_units(2.0, config_object(16.0, 1.5, "major third"));
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 48.0);
}

#[wasm_bindgen_test]
fn test_invalid_config_is_rejected() {
    let result = compute_type_step(1, JsValue::from_str("not a config"));
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_resolve_breakpoints_disabled() {
    let resolved = resolve_breakpoints_js(JsValue::FALSE, config_object(16.0, 1.5, "major third"));
    assert!(resolved.is_ok());

    let base = Reflect::get(&resolved.unwrap(), &"baseFontSize".into()).unwrap();
    assert_eq!(base.as_f64(), Some(16.0));
}

#[wasm_bindgen_test]
fn test_provider_lifecycle() {
    let result = mount_rhythm_provider(fixed_options(16.0, 1.5));
    assert!(result.is_ok());

    let state = current_baseline();
    assert!(state.is_ok());

    let state = state.unwrap();
    let baseline = Reflect::get(&state, &"baseline".into()).unwrap();
    assert_eq!(baseline.as_f64(), Some(24.0));

    let result = update_rhythm_provider(fixed_options(18.0, 1.5));
    assert!(result.is_ok());

    let state = current_baseline().unwrap();
    let baseline = Reflect::get(&state, &"baseline".into()).unwrap();
    assert_eq!(baseline.as_f64(), Some(27.0));

    unmount_rhythm_provider();
    assert!(current_baseline().is_err());
}

#[wasm_bindgen_test]
fn test_mount_rejects_four_thirds_line_height() {
    let result = mount_rhythm_provider(fixed_options(16.0, 1.0 + 1.0 / 3.0));
    assert!(result.is_err());
}
