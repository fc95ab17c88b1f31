//! The view and factory capabilities the cache is built on.
//!
//! Views are heavyweight rendering surfaces owned by the GUI toolkit. The
//! cache never looks inside them; it only needs to show, hide, suspend and
//! reset them.

use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a pooled view.
///
/// The popup and prompt handlers hold on to the active view as well, so
/// views are reference counted rather than owned by the cache alone.
pub type ViewHandle<V> = Rc<RefCell<V>>;

/// A browser tab's rendering and navigation surface.
pub trait WebView {
    /// Start loading a URL.
    fn load(&mut self, url: &str);

    /// Stop any in-flight navigation.
    fn stop(&mut self);

    /// Release rendering resources while keeping page state.
    fn suspend_view(&mut self);

    /// Ask the renderer to resume a suspended view.
    fn resume_view(&mut self);

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    fn is_loading(&self) -> bool;
}

/// Builds new views on a pool miss.
///
/// `Container` is the owning parent widget and `Args` the construction
/// properties; both are stored at init and passed through untouched.
pub trait ViewFactory {
    type View: WebView;
    type Container;
    type Args;

    /// Instantiate a view inside `container`.
    fn create_object(
        &mut self,
        container: &Self::Container,
        args: &Self::Args,
    ) -> anyhow::Result<Self::View>;
}

/// Wrap a freshly built view in a shared handle.
pub(crate) fn new_handle<V>(view: V) -> ViewHandle<V> {
    Rc::new(RefCell::new(view))
}
