//! Host capability interfaces
//!
//! Every side effect the engine needs from its environment sits behind one
//! of these small traits: media-condition queries, viewport-change
//! notifications, overlay document mutation, and timers. Any capability may
//! be absent (headless or non-interactive hosts), and absence always
//! degrades gracefully rather than erroring.

pub mod web;

use std::rc::Rc;

use thiserror::Error;

pub use web::{WebDocumentHost, WebTimer, WindowEvents, WindowViewport};

/// Errors surfaced by fallible host operations
#[derive(Debug, Clone, Error)]
pub enum HostError {
    /// The underlying document rejected a mutation
    #[error("Document mutation failed: {0}")]
    DocumentMutation(String),
}

/// Evaluates media-condition strings against the live viewport
pub trait ViewportQuery {
    /// Does this condition currently hold?
    fn matches(&self, condition: &str) -> bool;
}

/// Viewport-change notification source
///
/// One listener per instance; a provider owns its events capability
/// exclusively, mirroring one resize handler per component.
pub trait ViewportEvents {
    /// Install the listener, replacing any previous one
    fn register(&self, listener: Rc<dyn Fn()>);
    /// Remove the listener; a no-op when none is installed
    fn unregister(&self);
}

/// The two document-level style properties the overlay temporarily overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyStyleProp {
    Height,
    Position,
}

/// Visual parameters for the baseline overlay node
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    /// Pixel height of one rhythm line (the gradient stripe period)
    pub baseline_px: f64,
    /// CSS color of the baseline stripes
    pub color: String,
}

/// Document mutation capability, scoped to the overlay's needs
///
/// Owns at most one overlay node. Creating while one exists replaces its
/// styling; removing without one is a no-op.
pub trait DocumentHost {
    /// Create the overlay node and append it to the document
    fn create_overlay_node(&self, style: &OverlayStyle) -> Result<(), HostError>;
    /// Restyle the existing overlay node; a no-op when absent
    fn update_overlay_node(&self, style: &OverlayStyle);
    /// Remove the overlay node; a no-op when absent
    fn remove_overlay_node(&self);
    /// Read one of the tracked document-level style properties
    fn read_body_style(&self, prop: BodyStyleProp) -> String;
    /// Write one of the tracked document-level style properties
    fn write_body_style(&self, prop: BodyStyleProp, value: &str);
}

/// One-shot timer with schedule-with-replace semantics
pub trait TaskTimer {
    /// Schedule `task` after `delay_ms`, cancelling any pending task first
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
    /// Cancel the pending task, if any
    fn cancel(&self);
}

/// The capability bundle handed to a provider
///
/// Each field is independently optional; [`Host::headless`] is the empty
/// bundle used by non-interactive contexts and tests of the pure paths.
#[derive(Default, Clone)]
pub struct Host {
    pub viewport: Option<Rc<dyn ViewportQuery>>,
    pub events: Option<Rc<dyn ViewportEvents>>,
    pub document: Option<Rc<dyn DocumentHost>>,
    pub timer: Option<Rc<dyn TaskTimer>>,
}

impl Host {
    /// A bundle with no capabilities at all
    pub fn headless() -> Self {
        Self::default()
    }

    /// The browser-backed bundle, with each capability present only where
    /// the window/document actually exists
    pub fn from_window() -> Self {
        Self {
            viewport: WindowViewport::capability(),
            events: WindowEvents::capability(),
            document: WebDocumentHost::capability(),
            timer: WebTimer::capability(),
        }
    }
}
