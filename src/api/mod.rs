//! Vertical rhythm WASM API
//!
//! This module provides the JavaScript-facing API for the rhythm engine.
//! `helpers` holds shared serialization and error-handling utilities;
//! `core` holds the exported functions.

pub mod core;
pub mod helpers;

pub use self::core::*;
