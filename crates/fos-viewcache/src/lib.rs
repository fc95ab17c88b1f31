//! fOS Tab View Cache
//!
//! Recycles a pool of heavyweight web views across browser tabs:
//! - Free pool reused first-in, first-out
//! - Tab to view bindings with idempotent lookup
//! - Single active view, handed off to the popup and prompt handlers

mod cache;
mod config;
mod error;
mod headless;
mod message;
mod observer;
mod stats;
mod view;

pub use cache::TabViewCache;
pub use config::{ViewCacheConfig, DEFAULT_BLANK_URL};
pub use error::ViewCacheError;
pub use headless::{HeadlessArgs, HeadlessContainer, HeadlessFactory, HeadlessView, ViewId};
pub use message::{BindSource, CacheEvent, TabId};
pub use observer::{ActiveViewObserver, ActiveViewSlot};
pub use stats::PoolStats;
pub use view::{ViewFactory, ViewHandle, WebView};
