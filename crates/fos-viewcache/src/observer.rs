//! Collaborators that track which view is active.
//!
//! The popup and prompt handlers both need to know the current web view so
//! that dialogs open over the right tab. The cache pushes every switch to
//! them through [`ActiveViewObserver`].

use crate::message::TabId;
use crate::view::ViewHandle;
use std::cell::RefCell;
use std::rc::Rc;

/// Receives the active view on every switch.
pub trait ActiveViewObserver<V> {
    fn set_active_view(&self, tab_id: TabId, view: &ViewHandle<V>);
}

/// Holds the externally observed "active web view" reference.
///
/// This is what a popup or prompt handler embeds: the cache writes it, the
/// handler reads it when a dialog needs a parent view.
pub struct ActiveViewSlot<V> {
    inner: RefCell<Option<(TabId, ViewHandle<V>)>>,
}

impl<V> ActiveViewSlot<V> {
    pub fn new() -> Self {
        Self {
            inner: RefCell::new(None),
        }
    }

    /// Create a slot already wrapped for sharing with the cache.
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// The view most recently made active, if any.
    pub fn active_view(&self) -> Option<ViewHandle<V>> {
        self.inner.borrow().as_ref().map(|(_, view)| Rc::clone(view))
    }

    /// The tab owning the active view.
    pub fn active_tab(&self) -> Option<TabId> {
        self.inner.borrow().as_ref().map(|(tab_id, _)| *tab_id)
    }
}

impl<V> Default for ActiveViewSlot<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ActiveViewObserver<V> for ActiveViewSlot<V> {
    fn set_active_view(&self, tab_id: TabId, view: &ViewHandle<V>) {
        *self.inner.borrow_mut() = Some((tab_id, Rc::clone(view)));
    }
}
