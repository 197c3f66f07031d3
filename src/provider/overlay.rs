//! Baseline overlay lifecycle
//!
//! Renders the visual baseline grid over the whole page while debugging
//! rhythm alignment. Attach captures the document's `height` and `position`
//! styles before overriding them so detach can restore them exactly as
//! found. Both operations are idempotent, and without a document capability
//! both are no-ops.

use std::rc::Rc;

use crate::host::{BodyStyleProp, DocumentHost, OverlayStyle};

struct SavedStyles {
    height: String,
    position: String,
}

pub struct Overlay {
    document: Option<Rc<dyn DocumentHost>>,
    saved: Option<SavedStyles>,
}

impl Overlay {
    pub fn new(document: Option<Rc<dyn DocumentHost>>) -> Self {
        Self {
            document,
            saved: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.saved.is_some()
    }

    /// Attach the overlay node; a no-op when already attached
    ///
    /// The document's height and position are forced to `auto`/`relative` so
    /// the absolutely positioned grid spans the full content height.
    pub fn attach(&mut self, style: &OverlayStyle) {
        let Some(document) = self.document.clone() else {
            return;
        };
        if self.saved.is_some() {
            return;
        }
        let saved = SavedStyles {
            height: document.read_body_style(BodyStyleProp::Height),
            position: document.read_body_style(BodyStyleProp::Position),
        };
        document.write_body_style(BodyStyleProp::Height, "auto");
        document.write_body_style(BodyStyleProp::Position, "relative");
        if let Err(e) = document.create_overlay_node(style) {
            log::error!("Baseline overlay attach failed: {}", e);
            document.write_body_style(BodyStyleProp::Height, &saved.height);
            document.write_body_style(BodyStyleProp::Position, &saved.position);
            return;
        }
        self.saved = Some(saved);
    }

    /// Restyle the attached overlay after a recompute; no-op when detached
    pub fn refresh(&self, style: &OverlayStyle) {
        if !self.is_attached() {
            return;
        }
        if let Some(document) = &self.document {
            document.update_overlay_node(style);
        }
    }

    /// Remove the overlay and restore the captured styles; a no-op when
    /// detached
    pub fn detach(&mut self) {
        let Some(saved) = self.saved.take() else {
            return;
        };
        let Some(document) = &self.document else {
            return;
        };
        document.remove_overlay_node();
        document.write_body_style(BodyStyleProp::Height, &saved.height);
        document.write_body_style(BodyStyleProp::Position, &saved.position);
    }

    /// Attach or detach to match the requested visibility
    pub fn sync(&mut self, requested: bool, style: &OverlayStyle) {
        if requested {
            self.attach(style);
        } else {
            self.detach();
        }
    }
}
