//! Explicit configuration channel
//!
//! Providers publish immutable [`BaselineState`] snapshots; consumers hold a
//! [`RhythmReader`] and ask for the current value when they need it. Nesting
//! is modeled by [`RhythmScope`], an explicit stack where the innermost live
//! provider shadows outer ones. There is no global singleton: whoever builds
//! the tree owns the scope.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::models::BaselineState;

/// Shared publication cell owned by a provider
pub(crate) type StateCell = Rc<RefCell<Rc<BaselineState>>>;

/// A consumer's handle onto one provider's current state
///
/// Holds the provider weakly, so a reader outliving its provider simply
/// reads `None` instead of keeping torn-down state alive.
#[derive(Clone)]
pub struct RhythmReader {
    cell: Weak<RefCell<Rc<BaselineState>>>,
}

impl RhythmReader {
    pub(crate) fn new(cell: &StateCell) -> Self {
        Self {
            cell: Rc::downgrade(cell),
        }
    }

    /// The provider's current snapshot, or `None` after unmount
    pub fn current(&self) -> Option<Rc<BaselineState>> {
        self.cell.upgrade().map(|cell| cell.borrow().clone())
    }
}

/// Explicit nesting stack of providers
#[derive(Default)]
pub struct RhythmScope {
    stack: RefCell<Vec<RhythmReader>>,
}

impl RhythmScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a provider's subtree
    pub fn enter(&self, reader: RhythmReader) {
        self.stack.borrow_mut().push(reader);
    }

    /// Leave the innermost subtree
    pub fn exit(&self) {
        self.stack.borrow_mut().pop();
    }

    /// Snapshot of the nearest enclosing live provider
    pub fn nearest(&self) -> Option<Rc<BaselineState>> {
        self.stack
            .borrow()
            .iter()
            .rev()
            .find_map(|reader| reader.current())
    }
}
