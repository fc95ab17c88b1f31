//! fOS-WB: tab view cache shell
//!
//! Sets up the allocator and logging, loads the cache configuration and
//! drives a tab-switching session against headless views.

use anyhow::{Context, Result};
use crossbeam_channel::{unbounded, Receiver};
use fos_viewcache::{
    ActiveViewSlot, CacheEvent, HeadlessArgs, HeadlessContainer, HeadlessFactory, HeadlessView,
    TabId, TabViewCache, ViewCacheConfig, WebView,
};
use std::env;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

// Use mimalloc as the global allocator for reduced memory fragmentation
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<()> {
    init_logging();

    info!("fOS-WB starting...");

    let config = match env::args().nth(1) {
        Some(path) => ViewCacheConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => ViewCacheConfig::default(),
    };
    let popup_handler = ActiveViewSlot::<HeadlessView>::shared();
    let prompt_handler = ActiveViewSlot::<HeadlessView>::shared();
    let (event_tx, event_rx) = unbounded();

    let mut cache: TabViewCache<HeadlessFactory> =
        TabViewCache::new(config, popup_handler.clone(), prompt_handler.clone())
            .with_events(event_tx);

    let container = HeadlessContainer {
        name: String::from("tab-stack"),
    };
    cache.init(HeadlessArgs::default(), HeadlessFactory::new(), container)?;
    info!("Using config: {:?}", cache.config());

    run_session(&mut cache)?;
    drain_events(&event_rx);

    if let Some(tab_id) = popup_handler.active_tab() {
        info!("Popups and prompts attach to {}", tab_id);
    }

    let stats = cache.stats();
    info!(
        "Views: {} built, {} pooled, {} bound; {} switches, pool hit rate {:.0}%",
        stats.created,
        cache.pooled_count(),
        cache.bound_count(),
        stats.activations,
        stats.hit_rate() * 100.0
    );

    info!("fOS-WB shutting down");
    Ok(())
}

/// Log at INFO unless `RUST_LOG` says otherwise.
fn init_logging() {
    let builder = FmtSubscriber::builder().with_target(false).compact();
    match EnvFilter::try_from_default_env() {
        Ok(filter) => builder.with_env_filter(filter).init(),
        Err(_) => builder.with_max_level(Level::INFO).init(),
    }
}

/// Open, switch between and close a handful of tabs.
fn run_session(cache: &mut TabViewCache<HeadlessFactory>) -> Result<()> {
    let pages = [
        (TabId::new(1), "https://duckduckgo.com"),
        (TabId::new(2), "https://example.org"),
        (TabId::new(3), "https://www.rust-lang.org"),
    ];

    for (tab_id, url) in pages {
        let view = cache
            .get_view(tab_id)
            .with_context(|| format!("no view for {}", tab_id))?;
        view.borrow_mut().load(url);
    }

    // Back to the first tab while the third is still loading
    cache
        .get_view(TabId::new(1))
        .context("no view for Tab(1)")?;

    cache.release_view(TabId::new(2));
    cache.release_view(TabId::new(3));

    // New tabs pick up the released views in order
    for id in 4..=5 {
        let tab_id = TabId::new(id);
        let view = cache
            .get_view(tab_id)
            .with_context(|| format!("no view for {}", tab_id))?;
        let view = view.borrow();
        info!("{} reuses view {} at {}", tab_id, view.id(), view.url());
    }

    Ok(())
}

fn drain_events(rx: &Receiver<CacheEvent>) {
    for event in rx.try_iter() {
        info!("{:?}", event);
    }
}
