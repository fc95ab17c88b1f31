//! Tab view cache - recycles web views across tabs.
//!
//! Building a web view is expensive, so views are never destroyed while the
//! cache lives. A tab borrows a view on `get_view` and hands it back on
//! `release_view`, after which the next new tab picks it up from the front
//! of the free pool.

use crate::config::ViewCacheConfig;
use crate::error::ViewCacheError;
use crate::message::{BindSource, CacheEvent, TabId};
use crate::observer::ActiveViewObserver;
use crate::stats::PoolStats;
use crate::view::{new_handle, ViewFactory, ViewHandle, WebView};
use crossbeam_channel::Sender;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Everything `init` hands over.
struct Setup<F: ViewFactory> {
    factory: F,
    container: F::Container,
    args: F::Args,
}

/// The currently shown view.
struct ActiveView<V> {
    /// `None` once the owning tab has been released
    tab_id: Option<TabId>,
    view: ViewHandle<V>,
}

/// Pools web views and tracks which one is on screen.
///
/// All calls are expected on the UI thread. Callers must not hold a
/// `borrow()` of a view handle across `get_view` or `release_view`, since
/// both mutate the views they touch.
pub struct TabViewCache<F: ViewFactory> {
    config: ViewCacheConfig,
    /// Factory, container and construction args; `None` until init
    setup: Option<Setup<F>>,
    /// Views not bound to any tab, reused front first
    pool: VecDeque<ViewHandle<F::View>>,
    /// Views currently bound to a tab
    bound: HashMap<TabId, ViewHandle<F::View>>,
    active: Option<ActiveView<F::View>>,
    popup_handler: Rc<dyn ActiveViewObserver<F::View>>,
    prompt_handler: Rc<dyn ActiveViewObserver<F::View>>,
    /// Optional channel to the UI thread
    events: Option<Sender<CacheEvent>>,
    stats: PoolStats,
}

impl<F: ViewFactory> TabViewCache<F> {
    /// Create an uninitialized cache wired to the popup and prompt handlers.
    pub fn new(
        config: ViewCacheConfig,
        popup_handler: Rc<dyn ActiveViewObserver<F::View>>,
        prompt_handler: Rc<dyn ActiveViewObserver<F::View>>,
    ) -> Self {
        Self {
            config,
            setup: None,
            pool: VecDeque::new(),
            bound: HashMap::new(),
            active: None,
            popup_handler,
            prompt_handler,
            events: None,
            stats: PoolStats::default(),
        }
    }

    /// Report cache activity on `tx`.
    pub fn with_events(mut self, tx: Sender<CacheEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    /// Store the factory and its inputs, then build the prewarmed views.
    ///
    /// Nothing is kept if the configuration is invalid or the factory fails,
    /// so `init` may be retried.
    pub fn init(
        &mut self,
        args: F::Args,
        mut factory: F,
        container: F::Container,
    ) -> Result<(), ViewCacheError> {
        if self.setup.is_some() {
            return Err(ViewCacheError::AlreadyInitialized);
        }
        self.config.validate()?;

        let mut prewarmed = Vec::with_capacity(self.config.prewarm_views);
        for _ in 0..self.config.prewarm_views {
            let view = factory
                .create_object(&container, &args)
                .map_err(ViewCacheError::Factory)?;
            prewarmed.push(new_handle(view));
        }

        for view in prewarmed {
            self.pool.push_back(view);
            self.stats.created += 1;
            self.emit(CacheEvent::ViewCreated {
                total: self.total_views(),
            });
        }

        self.setup = Some(Setup {
            factory,
            container,
            args,
        });

        info!(
            "View cache initialized with {} pooled view(s)",
            self.pool.len()
        );
        Ok(())
    }

    /// Whether `init` has completed.
    pub fn is_initialized(&self) -> bool {
        self.setup.is_some()
    }

    /// Get the view for a tab, binding one if needed, and make it active.
    ///
    /// Returns `None` before `init`, or when the factory cannot build a view
    /// for a pool miss.
    pub fn get_view(&mut self, tab_id: TabId) -> Option<ViewHandle<F::View>> {
        if self.setup.is_none() {
            return None;
        }

        let view = if let Some(view) = self.bound.get(&tab_id) {
            self.stats.rebinds += 1;
            Rc::clone(view)
        } else if let Some(view) = self.pool.pop_front() {
            self.stats.pool_hits += 1;
            self.bind(tab_id, view, BindSource::Pool)
        } else {
            let view = self.build_view()?;
            self.stats.pool_misses += 1;
            self.bind(tab_id, view, BindSource::Factory)
        };

        self.activate(tab_id, &view);
        Some(view)
    }

    /// Return a tab's view to the free pool. Unknown tabs are ignored.
    pub fn release_view(&mut self, tab_id: TabId) {
        let Some(view) = self.bound.remove(&tab_id) else {
            debug!("Release of unbound {} ignored", tab_id);
            return;
        };

        let was_active = self
            .active
            .as_ref()
            .is_some_and(|active| Rc::ptr_eq(&active.view, &view));

        {
            let mut released = view.borrow_mut();
            // Only the page is reset, navigation history is kept.
            released.load(&self.config.blank_url);
            // Views other than the active one were suspended when they lost focus.
            if self.config.suspend_on_release && was_active {
                released.set_visible(false);
                released.suspend_view();
            }
        }

        if self.config.suspend_on_release && was_active {
            // Already hidden and suspended; the next switch must not touch it.
            self.active = None;
            self.emit(CacheEvent::ViewSuspended {
                tab_id: Some(tab_id),
            });
        } else if let Some(active) = self.active.as_mut() {
            if active.tab_id == Some(tab_id) {
                active.tab_id = None;
            }
        }

        self.pool.push_back(view);
        self.stats.releases += 1;

        debug!("Released view of {} ({} pooled)", tab_id, self.pool.len());
        self.emit(CacheEvent::ViewReleased {
            tab_id,
            pooled: self.pool.len(),
        });
    }

    /// The view bound to `tab_id`, without activating it.
    pub fn view_for(&self, tab_id: TabId) -> Option<ViewHandle<F::View>> {
        self.bound.get(&tab_id).map(Rc::clone)
    }

    /// The view of the active tab.
    pub fn active_view(&self) -> Option<ViewHandle<F::View>> {
        self.active
            .as_ref()
            .filter(|active| active.tab_id.is_some())
            .map(|active| Rc::clone(&active.view))
    }

    /// The tab whose view is on screen, `None` once it has been released.
    pub fn active_tab(&self) -> Option<TabId> {
        self.active.as_ref().and_then(|active| active.tab_id)
    }

    /// Number of views waiting in the free pool.
    pub fn pooled_count(&self) -> usize {
        self.pool.len()
    }

    /// Number of tabs holding a view.
    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }

    /// Every view the cache owns, pooled or bound.
    pub fn total_views(&self) -> usize {
        self.pool.len() + self.bound.len()
    }

    /// Tabs holding a view, in ascending order.
    pub fn bound_tabs(&self) -> Vec<TabId> {
        let mut tabs: Vec<TabId> = self.bound.keys().copied().collect();
        tabs.sort();
        tabs
    }

    /// Snapshot of the pool counters.
    pub fn stats(&self) -> PoolStats {
        self.stats
    }

    /// The configuration the cache was created with.
    pub fn config(&self) -> &ViewCacheConfig {
        &self.config
    }

    fn build_view(&mut self) -> Option<ViewHandle<F::View>> {
        let setup = self.setup.as_mut()?;
        match setup.factory.create_object(&setup.container, &setup.args) {
            Ok(view) => {
                self.stats.created += 1;
                let view = new_handle(view);
                // The new view is not in the pool or map yet, hence the +1.
                self.emit(CacheEvent::ViewCreated {
                    total: self.total_views() + 1,
                });
                Some(view)
            }
            Err(e) => {
                warn!("View factory failed: {:#}", e);
                None
            }
        }
    }

    fn bind(
        &mut self,
        tab_id: TabId,
        view: ViewHandle<F::View>,
        source: BindSource,
    ) -> ViewHandle<F::View> {
        self.bound.insert(tab_id, Rc::clone(&view));
        debug!("Bound view from {} to {}", source, tab_id);
        self.emit(CacheEvent::ViewBound { tab_id, source });
        view
    }

    /// Hide and suspend the old view, then show the new one.
    fn activate(&mut self, tab_id: TabId, view: &ViewHandle<F::View>) {
        if let Some(previous) = self.active.take() {
            if !Rc::ptr_eq(&previous.view, view) {
                {
                    let mut old = previous.view.borrow_mut();
                    old.set_visible(false);
                    if old.is_loading() {
                        old.stop();
                    }
                    old.suspend_view();
                }
                self.emit(CacheEvent::ViewSuspended {
                    tab_id: previous.tab_id,
                });
            }
        }

        {
            let mut current = view.borrow_mut();
            current.resume_view();
            current.set_visible(true);
        }

        self.active = Some(ActiveView {
            tab_id: Some(tab_id),
            view: Rc::clone(view),
        });
        self.stats.activations += 1;

        self.popup_handler.set_active_view(tab_id, view);
        self.prompt_handler.set_active_view(tab_id, view);
        self.emit(CacheEvent::ViewActivated { tab_id });
    }

    fn emit(&self, event: CacheEvent) {
        if let Some(tx) = &self.events {
            // Listener may be gone; the cache keeps working without it
            let _ = tx.send(event);
        }
    }
}

impl<F: ViewFactory> Drop for TabViewCache<F> {
    fn drop(&mut self) {
        if self.is_initialized() {
            debug!(
                "Dropping view cache ({} bound, {} pooled)",
                self.bound.len(),
                self.pool.len()
            );
        }
    }
}
