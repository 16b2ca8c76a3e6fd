//! Application context for Prism Identity.
//!
//! Startup configuration is stored once, before launch, and the exporter
//! is shared with every component through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Exporter::to_directory(config().download_dir.clone()));
//!
//! // In child components
//! let exporter = use_exporter();
//! let saving = use_export_busy();
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

use dioxus::prelude::*;
use prism_core::Exporter;

/// Settings resolved from the command line.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Where exported quote scrolls are written
    pub download_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("."),
        }
    }
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Store the startup configuration. Later calls are ignored.
pub fn init_config(config: AppConfig) {
    if APP_CONFIG.set(config).is_err() {
        tracing::warn!("App config already initialised");
    }
}

/// The startup configuration, or defaults if none was stored.
pub fn config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(AppConfig::default)
}

/// Hook to access the shared exporter.
///
/// The exporter outlives the collection modal, so an export started before
/// the modal was closed still blocks a new one after it reopens.
pub fn use_exporter() -> Exporter {
    use_context::<Exporter>()
}

/// Hook tracking whether an export is running.
///
/// Follows the shared exporter rather than the component's own click, so a
/// view mounted while an export is already running clears its busy state
/// when that export ends.
pub fn use_export_busy() -> Signal<bool> {
    let exporter = use_exporter();
    let mut busy = use_signal(|| exporter.is_in_progress());

    use_future(move || {
        let mut rx = exporter.subscribe();
        async move {
            busy.set(*rx.borrow_and_update());
            while rx.changed().await.is_ok() {
                busy.set(*rx.borrow_and_update());
            }
        }
    });

    busy
}
