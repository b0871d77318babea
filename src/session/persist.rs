//! Durable session persistence.
//!
//! The whole session is stored as one JSON record under a single
//! namespaced key. Reads that fail for any reason (missing key, storage
//! unavailable, malformed record) fall back to "no prior session" so a
//! corrupt record can never block startup. Writes are fire-and-forget:
//! a failed write is logged and otherwise ignored, since authorization
//! decisions never depend on write success.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::sync::{Arc, Mutex};

/// localStorage key holding the serialized session record.
pub const STORAGE_KEY: &str = "nicelab_session";

/// Raw record storage for the session. One logical slot, string-valued.
pub trait SessionBackend {
    /// Read the stored record, or `None` if absent or unreadable.
    fn read(&self) -> Option<String>;

    /// Overwrite the stored record. Failures are handled internally.
    fn write(&self, record: &str);
}

/// Browser localStorage backend. Outside the browser (SSR, native tests)
/// every read misses and every write is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

impl SessionBackend for LocalStorageBackend {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(STORAGE_KEY).ok()?
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write(&self, record: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    if storage.set_item(STORAGE_KEY, record).is_err() {
                        log::warn!("session record write failed");
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = record;
        }
    }
}

/// In-memory backend for native tests and server-side rendering.
///
/// Cloning shares the underlying slot, so a test can keep a handle and
/// inspect what the store committed.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with a stored record, valid or not.
    pub fn with_record(record: &str) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(record.to_owned()))),
        }
    }

    /// Current record, as a later `read` would see it.
    pub fn record(&self) -> Option<String> {
        self.slot.lock().ok()?.clone()
    }
}

impl SessionBackend for MemoryBackend {
    fn read(&self) -> Option<String> {
        self.record()
    }

    fn write(&self, record: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(record.to_owned());
        }
    }
}
