//! Rhythm context provider
//!
//! Owns the effective typography state for one subtree: resolves breakpoints
//! at mount, recomputes on viewport change (debounced, trailing edge) and on
//! explicit option updates (synchronous), publishes immutable
//! [`BaselineState`] snapshots, and manages the baseline overlay lifecycle.
//! Teardown runs on every unmount path via `Drop`: the resize listener is
//! unregistered, any pending debounced recompute is cancelled, and the
//! overlay restores the document styles it captured.

pub mod context;
pub mod debounce;
pub mod overlay;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::breakpoints::resolve_breakpoints;
use crate::host::{Host, OverlayStyle};
use crate::models::config::check_line_height_ratio;
use crate::models::{BaselineState, Breakpoints, ConfigError, NamedRatio, ScaleRatio, TypographyConfig};
use crate::rhythm::compute_rhythm_units;

pub use context::{RhythmReader, RhythmScope};
pub use debounce::{Debouncer, RESIZE_DEBOUNCE_MS};
pub use overlay::Overlay;

use context::StateCell;

/// Provider configuration, with the stock defaults
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderOptions {
    pub base_font_size: f64,

    /// Show the baseline grid overlay
    pub baseline: bool,
    pub baseline_color: String,
    pub breakpoints: Breakpoints,
    pub line_height_ratio: f64,
    pub scale_ratio: ScaleRatio,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            base_font_size: 16.0,
            baseline: false,
            baseline_color: "rgba(255,0,255,0.25)".to_string(),
            breakpoints: Breakpoints::default(),
            line_height_ratio: 1.5,
            scale_ratio: ScaleRatio::Named(NamedRatio::DiminishedFourth),
        }
    }
}

impl ProviderOptions {
    fn default_config(&self) -> Result<TypographyConfig, ConfigError> {
        TypographyConfig::new(self.base_font_size, self.line_height_ratio, self.scale_ratio)
    }

    /// Validate the base config and every breakpoint override up front
    ///
    /// Checking each override here, not just the currently matching merge,
    /// means a later viewport change can never cascade into an invalid
    /// config: debounced recomputes are infallible by construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.default_config()?;
        let Breakpoints::Rules(rules) = &self.breakpoints else {
            return Ok(());
        };
        for rule in rules {
            if let Some(base) = rule.overrides.base_font_size {
                if base <= 0.0 {
                    return Err(ConfigError::NonPositive {
                        field: "baseFontSize",
                        value: base,
                    });
                }
            }
            if let Some(ratio) = rule.overrides.line_height_ratio {
                check_line_height_ratio(ratio)?;
            }
            if let Some(scale) = rule.overrides.scale_ratio {
                if scale.multiplier() <= 0.0 {
                    return Err(ConfigError::NonPositive {
                        field: "scaleRatio",
                        value: scale.multiplier(),
                    });
                }
            }
        }
        Ok(())
    }
}

struct ProviderInner {
    options: ProviderOptions,
    host: Host,
    published: StateCell,
    overlay: Overlay,
    debounce: Debouncer,
}

impl ProviderInner {
    fn resolve(options: &ProviderOptions, host: &Host) -> Result<BaselineState, ConfigError> {
        let defaults = options.default_config()?;
        let config = resolve_breakpoints(&options.breakpoints, &defaults, host.viewport.as_deref())?;
        let baseline_px = compute_rhythm_units(1.0, &config);
        Ok(BaselineState { config, baseline_px })
    }

    fn overlay_style(&self) -> OverlayStyle {
        OverlayStyle {
            baseline_px: self.published.borrow().baseline_px,
            color: self.options.baseline_color.clone(),
        }
    }

    /// Re-resolve breakpoints and publish a fresh snapshot
    fn recompute(&mut self) -> Result<(), ConfigError> {
        let state = Self::resolve(&self.options, &self.host)?;
        log::debug!(
            "Rhythm recompute: base {}px, baseline {}px",
            state.config.base_font_size,
            state.baseline_px
        );
        *self.published.borrow_mut() = Rc::new(state);
        self.overlay.refresh(&self.overlay_style());
        Ok(())
    }

    fn teardown(&mut self) {
        if let Some(events) = &self.host.events {
            events.unregister();
        }
        self.debounce.cancel();
        self.overlay.detach();
    }
}

/// A mounted rhythm provider
///
/// Dropping the provider is unmounting it; teardown is guaranteed on every
/// path, including during an in-flight debounce window (the pending task
/// holds the provider weakly and the timer is cancelled).
pub struct RhythmProvider {
    inner: Rc<RefCell<ProviderInner>>,
}

impl RhythmProvider {
    /// Mount: validate options, resolve the initial state, hook up the
    /// debounced resize recompute, and attach the overlay if requested
    pub fn mount(options: ProviderOptions, host: Host) -> Result<Self, ConfigError> {
        options.validate()?;
        let state = ProviderInner::resolve(&options, &host)?;
        let published: StateCell = Rc::new(RefCell::new(Rc::new(state)));
        let debounce = Debouncer::new(host.timer.clone(), RESIZE_DEBOUNCE_MS);
        let overlay = Overlay::new(host.document.clone());
        let show_baseline = options.baseline;
        let inner = Rc::new(RefCell::new(ProviderInner {
            options,
            host,
            published,
            overlay,
            debounce,
        }));

        {
            let borrowed = inner.borrow();
            if let Some(events) = borrowed.host.events.clone() {
                let weak = Rc::downgrade(&inner);
                let debounce = borrowed.debounce.clone();
                events.register(Rc::new(move || {
                    let weak = weak.clone();
                    debounce.schedule(Box::new(move || {
                        let Some(inner) = weak.upgrade() else {
                            return;
                        };
                        if let Err(e) = inner.borrow_mut().recompute() {
                            // Unreachable for validated options; kept state
                            // stays published if it ever happens.
                            log::error!("Rhythm recompute failed: {}", e);
                        };
                    }));
                }));
            }
        }

        if show_baseline {
            let mut borrowed = inner.borrow_mut();
            let style = borrowed.overlay_style();
            borrowed.overlay.attach(&style);
        }

        Ok(Self { inner })
    }

    /// Replace the options and recompute synchronously (not debounced)
    pub fn update(&self, options: ProviderOptions) -> Result<(), ConfigError> {
        options.validate()?;
        let mut inner = self.inner.borrow_mut();
        inner.options = options;
        inner.recompute()?;
        let requested = inner.options.baseline;
        let style = inner.overlay_style();
        inner.overlay.sync(requested, &style);
        Ok(())
    }

    /// Current published snapshot
    pub fn state(&self) -> Rc<BaselineState> {
        self.inner.borrow().published.borrow().clone()
    }

    /// A consumer handle onto this provider's state
    pub fn reader(&self) -> RhythmReader {
        RhythmReader::new(&self.inner.borrow().published)
    }

    /// Whether the overlay is currently attached
    pub fn overlay_attached(&self) -> bool {
        self.inner.borrow().overlay.is_attached()
    }

    /// Unmount explicitly. Equivalent to dropping the provider.
    pub fn unmount(self) {}
}

impl Drop for RhythmProvider {
    fn drop(&mut self) {
        self.inner.borrow_mut().teardown();
    }
}
