//! WASM API for the vertical rhythm engine
//!
//! The JavaScript-facing surface: the pure calculators, breakpoint
//! resolution against the live viewport, and the provider lifecycle.
//! Providers hold non-`Send` browser handles, so the mounted provider lives
//! in a thread-local slot (wasm is single-threaded).

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::breakpoints::resolve_breakpoints;
use crate::host::Host;
use crate::models::{Breakpoints, TypographyConfig};
use crate::provider::{ProviderOptions, RhythmProvider};
use crate::rhythm;

use super::helpers::{config_error, deserialize, log_debug, serialize};

thread_local! {
    // WASM-owned provider slot (at most one mounted provider per module)
    static PROVIDER: RefCell<Option<RhythmProvider>> = RefCell::new(None);
}

/// Font size for an integer step on the modular scale, in pixels
#[wasm_bindgen(js_name = computeTypeStep)]
pub fn compute_type_step(step: i32, config: JsValue) -> Result<f64, JsValue> {
    let config: TypographyConfig = deserialize(config, "Invalid typography config")?;
    Ok(rhythm::compute_type_step(step, &config))
}

/// Pixel size of `lines` rhythm lines
#[wasm_bindgen(js_name = computeRhythmUnits)]
pub fn compute_rhythm_units(lines: f64, config: JsValue) -> Result<f64, JsValue> {
    let config: TypographyConfig = deserialize(config, "Invalid typography config")?;
    Ok(rhythm::compute_rhythm_units(lines, &config))
}

/// Resolve breakpoints against the live viewport
///
/// `breakpoints` is a condition→override object or `false`; the result is
/// the effective typography config.
#[wasm_bindgen(js_name = resolveBreakpoints)]
pub fn resolve_breakpoints_js(breakpoints: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let breakpoints: Breakpoints = deserialize(breakpoints, "Invalid breakpoints")?;
    let defaults: TypographyConfig = deserialize(config, "Invalid typography config")?;
    let host = Host::from_window();
    let resolved = resolve_breakpoints(&breakpoints, &defaults, host.viewport.as_deref())
        .map_err(config_error)?;
    serialize(&resolved, "Failed to serialize resolved config")
}

/// Mount a provider against the browser host, replacing any existing one
#[wasm_bindgen(js_name = mountRhythmProvider)]
pub fn mount_rhythm_provider(options: JsValue) -> Result<(), JsValue> {
    let options: ProviderOptions = deserialize(options, "Invalid provider options")?;
    let provider = RhythmProvider::mount(options, Host::from_window()).map_err(config_error)?;
    log_debug("Rhythm provider mounted");
    PROVIDER.with(|slot| {
        // Dropping a previous provider tears it down first.
        *slot.borrow_mut() = Some(provider);
    });
    Ok(())
}

/// Update the mounted provider's options (synchronous recompute)
#[wasm_bindgen(js_name = updateRhythmProvider)]
pub fn update_rhythm_provider(options: JsValue) -> Result<(), JsValue> {
    let options: ProviderOptions = deserialize(options, "Invalid provider options")?;
    PROVIDER.with(|slot| match slot.borrow().as_ref() {
        Some(provider) => provider.update(options).map_err(config_error),
        None => Err(JsValue::from_str("No rhythm provider is mounted")),
    })
}

/// Unmount the provider, detaching any overlay; a no-op when none is mounted
#[wasm_bindgen(js_name = unmountRhythmProvider)]
pub fn unmount_rhythm_provider() {
    PROVIDER.with(|slot| {
        if slot.borrow_mut().take().is_some() {
            log_debug("Rhythm provider unmounted");
        }
    });
}

/// Current baseline state of the mounted provider
#[wasm_bindgen(js_name = currentBaseline)]
pub fn current_baseline() -> Result<JsValue, JsValue> {
    PROVIDER.with(|slot| match slot.borrow().as_ref() {
        Some(provider) => serialize(&*provider.state(), "Failed to serialize baseline state"),
        None => Err(JsValue::from_str("No rhythm provider is mounted")),
    })
}
