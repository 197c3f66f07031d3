//! Browser-backed host capabilities
//!
//! web-sys implementations of the capability traits: `matchMedia` for
//! viewport queries, a held `resize` closure for change notifications,
//! `setTimeout`/`clearTimeout` for the debounce timer, and an overlay div
//! plus body-style access for the baseline grid.
//!
//! Constructors return `None` when the window or document is unavailable, so
//! non-interactive contexts simply end up with an emptier [`super::Host`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::{BodyStyleProp, DocumentHost, HostError, OverlayStyle, TaskTimer, ViewportEvents, ViewportQuery};

/// Matches the overlay's stacking context in the original stylesheet
const OVERLAY_Z_INDEX: u32 = 16777271;

fn body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

/// `window.matchMedia`-backed viewport queries
pub struct WindowViewport;

impl WindowViewport {
    pub fn capability() -> Option<Rc<dyn ViewportQuery>> {
        web_sys::window().map(|_| Rc::new(WindowViewport) as Rc<dyn ViewportQuery>)
    }
}

impl ViewportQuery for WindowViewport {
    fn matches(&self, condition: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(condition).ok().flatten())
            .map(|mql| mql.matches())
            .unwrap_or(false)
    }
}

/// `resize` listener registration on the window
pub struct WindowEvents {
    handler: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl WindowEvents {
    pub fn capability() -> Option<Rc<dyn ViewportEvents>> {
        web_sys::window().map(|_| {
            Rc::new(WindowEvents {
                handler: RefCell::new(None),
            }) as Rc<dyn ViewportEvents>
        })
    }
}

impl ViewportEvents for WindowEvents {
    fn register(&self, listener: Rc<dyn Fn()>) {
        self.unregister();
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::wrap(Box::new(move || listener()) as Box<dyn FnMut()>);
        if window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::error!("Failed to register resize listener");
            return;
        }
        *self.handler.borrow_mut() = Some(closure);
    }

    fn unregister(&self) {
        let Some(closure) = self.handler.borrow_mut().take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
    }
}

/// `setTimeout`-backed one-shot timer with schedule-with-replace semantics
pub struct WebTimer {
    pending: RefCell<Option<(i32, Closure<dyn FnMut()>)>>,
}

impl WebTimer {
    pub fn capability() -> Option<Rc<dyn TaskTimer>> {
        web_sys::window().map(|_| {
            Rc::new(WebTimer {
                pending: RefCell::new(None),
            }) as Rc<dyn TaskTimer>
        })
    }
}

impl TaskTimer for WebTimer {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.cancel();
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move || task());
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms as i32,
        ) {
            Ok(handle) => {
                *self.pending.borrow_mut() = Some((handle, closure));
            }
            Err(_) => log::error!("Failed to schedule timer"),
        }
    }

    fn cancel(&self) {
        let Some((handle, _closure)) = self.pending.borrow_mut().take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(handle);
        }
    }
}

/// Overlay node and body-style access on the live document
pub struct WebDocumentHost {
    node: RefCell<Option<Element>>,
}

impl WebDocumentHost {
    pub fn capability() -> Option<Rc<dyn DocumentHost>> {
        let window = web_sys::window()?;
        window.document()?;
        Some(Rc::new(WebDocumentHost {
            node: RefCell::new(None),
        }) as Rc<dyn DocumentHost>)
    }

    fn css(style: &OverlayStyle) -> String {
        format!(
            "background-image: linear-gradient(to bottom, {} 1px, transparent 1px); \
             background-size: auto {}px; \
             position: absolute; top: 0; right: 0; bottom: 0; left: 0; \
             pointer-events: none; z-index: {};",
            style.color, style.baseline_px, OVERLAY_Z_INDEX
        )
    }
}

impl DocumentHost for WebDocumentHost {
    fn create_overlay_node(&self, style: &OverlayStyle) -> Result<(), HostError> {
        if self.node.borrow().is_some() {
            self.update_overlay_node(style);
            return Ok(());
        }
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| HostError::DocumentMutation("no document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| HostError::DocumentMutation("no document body".to_string()))?;
        let node = document
            .create_element("div")
            .map_err(|_| HostError::DocumentMutation("createElement failed".to_string()))?;
        node.set_attribute("style", &Self::css(style))
            .map_err(|_| HostError::DocumentMutation("setAttribute failed".to_string()))?;
        let _ = node.set_attribute("data-vr-baseline", "true");
        body.append_child(&node)
            .map_err(|_| HostError::DocumentMutation("appendChild failed".to_string()))?;
        *self.node.borrow_mut() = Some(node);
        Ok(())
    }

    fn update_overlay_node(&self, style: &OverlayStyle) {
        if let Some(node) = self.node.borrow().as_ref() {
            let _ = node.set_attribute("style", &Self::css(style));
        }
    }

    fn remove_overlay_node(&self) {
        if let Some(node) = self.node.borrow_mut().take() {
            node.remove();
        }
    }

    fn read_body_style(&self, prop: BodyStyleProp) -> String {
        let Some(body) = body() else {
            return String::new();
        };
        let name = match prop {
            BodyStyleProp::Height => "height",
            BodyStyleProp::Position => "position",
        };
        body.style().get_property_value(name).unwrap_or_default()
    }

    fn write_body_style(&self, prop: BodyStyleProp, value: &str) {
        let Some(body) = body() else {
            return;
        };
        let name = match prop {
            BodyStyleProp::Height => "height",
            BodyStyleProp::Position => "position",
        };
        if body.style().set_property(name, value).is_err() {
            log::error!("Failed to set body style {}", name);
        }
    }
}
