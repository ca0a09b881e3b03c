//! Descriptor manifest watcher for recompilation on change.
//!
//! The manifest's parent directory is watched rather than the file itself:
//! editors that save by writing a temp file and renaming it over the
//! manifest would otherwise detach a file-level watch after the first save.

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::descriptor::ControllerRegistry;

/// Watches the descriptor manifest and publishes reloaded registries.
pub struct ManifestWatcher {
    reloader: Reloader,
}

/// Event filter and reload step, shared with the notify callback.
struct Reloader {
    path: PathBuf,
    file_name: Option<OsString>,
    update_tx: mpsc::UnboundedSender<ControllerRegistry>,
}

impl ManifestWatcher {
    /// Create a watcher for `path`.
    ///
    /// Returns the watcher and a receiver for reloaded registries. A manifest
    /// that fails to load is logged and skipped; the receiver only ever sees
    /// registries that loaded cleanly.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<ControllerRegistry>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let reloader = Reloader {
            path: path.to_path_buf(),
            file_name: path.file_name().map(OsString::from),
            update_tx,
        };
        (Self { reloader }, update_rx)
    }

    /// Start watching in a background thread.
    ///
    /// The returned watcher must be kept alive for events to be delivered.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let directory = match self.reloader.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let manifest = self.reloader.path.clone();
        let reloader = self.reloader;

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    reloader.handle(&event);
                }
                Err(e) => tracing::error!(error = %e, "Manifest watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&directory, RecursiveMode::NonRecursive)?;

        tracing::info!(manifest = %manifest.display(), "Manifest watcher started");
        Ok(watcher)
    }
}

impl Reloader {
    /// Reload on a relevant event. Returns whether a registry was published.
    fn handle(&self, event: &Event) -> bool {
        if !self.concerns(event) {
            return false;
        }

        tracing::info!(manifest = %self.path.display(), "Manifest change detected, reloading");
        match ControllerRegistry::from_path(&self.path) {
            Ok(registry) => {
                tracing::debug!(controllers = registry.len(), "Manifest reloaded");
                self.update_tx.send(registry).is_ok()
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to reload manifest; keeping current routes");
                false
            }
        }
    }

    /// Modify or create events that touch the manifest file.
    fn concerns(&self, event: &Event) -> bool {
        (event.kind.is_modify() || event.kind.is_create())
            && event
                .paths
                .iter()
                .any(|p| p.file_name().map(OsString::from) == self.file_name)
    }
}
