//! Headless views for the shell binary and tests.
//!
//! A headless view keeps the state a real web view would expose (URL,
//! visibility, loading and suspension) without rendering anything.

use crate::view::{ViewFactory, WebView};
use tracing::debug;

/// Identifier assigned by [`HeadlessFactory`] to each view it builds.
pub type ViewId = u64;

/// A view that only tracks state.
#[derive(Debug)]
pub struct HeadlessView {
    id: ViewId,
    /// Current URL
    url: String,
    /// Loading state
    loading: bool,
    visible: bool,
    suspended: bool,
    /// URLs passed to `load`, oldest first
    history: Vec<String>,
    stops: usize,
    suspends: usize,
    resumes: usize,
}

impl HeadlessView {
    pub fn new(id: ViewId, url: &str) -> Self {
        Self {
            id,
            url: url.to_string(),
            loading: false,
            visible: false,
            suspended: false,
            history: Vec::new(),
            stops: 0,
            suspends: 0,
            resumes: 0,
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Get the current URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Every URL loaded into this view.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Mark the current navigation as finished.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    pub fn stop_count(&self) -> usize {
        self.stops
    }

    pub fn suspend_count(&self) -> usize {
        self.suspends
    }

    pub fn resume_count(&self) -> usize {
        self.resumes
    }
}

impl WebView for HeadlessView {
    fn load(&mut self, url: &str) {
        debug!("View {} loading {}", self.id, url);
        self.url = url.to_string();
        self.loading = true;
        self.history.push(url.to_string());
    }

    fn stop(&mut self) {
        self.loading = false;
        self.stops += 1;
    }

    fn suspend_view(&mut self) {
        self.suspended = true;
        self.suspends += 1;
    }

    fn resume_view(&mut self) {
        self.suspended = false;
        self.resumes += 1;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Parent a headless view is created in.
#[derive(Debug, Clone, Default)]
pub struct HeadlessContainer {
    pub name: String,
}

/// Construction properties for a headless view.
#[derive(Debug, Clone)]
pub struct HeadlessArgs {
    /// URL the view starts on
    pub initial_url: String,
}

impl Default for HeadlessArgs {
    fn default() -> Self {
        Self {
            initial_url: String::from(crate::config::DEFAULT_BLANK_URL),
        }
    }
}

/// Builds [`HeadlessView`]s with increasing ids.
#[derive(Debug, Default)]
pub struct HeadlessFactory {
    next_id: ViewId,
    /// Refuse to build once this many views exist
    limit: Option<usize>,
}

impl HeadlessFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory that fails after `limit` views, for exercising error paths.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            next_id: 0,
            limit: Some(limit),
        }
    }

    /// Number of views built so far.
    pub fn built(&self) -> usize {
        self.next_id as usize
    }
}

impl ViewFactory for HeadlessFactory {
    type View = HeadlessView;
    type Container = HeadlessContainer;
    type Args = HeadlessArgs;

    fn create_object(
        &mut self,
        container: &HeadlessContainer,
        args: &HeadlessArgs,
    ) -> anyhow::Result<HeadlessView> {
        if let Some(limit) = self.limit {
            if self.built() >= limit {
                anyhow::bail!("headless view limit of {} reached", limit);
            }
        }

        self.next_id += 1;
        debug!("Building headless view {} in '{}'", self.next_id, container.name);
        Ok(HeadlessView::new(self.next_id, &args.initial_url))
    }
}
