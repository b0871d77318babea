use super::*;

// =============================================================
// MemoryBackend
// =============================================================

#[test]
fn memory_backend_starts_empty() {
    let backend = MemoryBackend::new();
    assert_eq!(backend.read(), None);
}

#[test]
fn memory_backend_write_then_read() {
    let backend = MemoryBackend::new();
    backend.write("{\"logged_in\":false}");
    assert_eq!(backend.read(), Some("{\"logged_in\":false}".to_owned()));
}

#[test]
fn memory_backend_write_overwrites() {
    let backend = MemoryBackend::new();
    backend.write("first");
    backend.write("second");
    assert_eq!(backend.read(), Some("second".to_owned()));
}

#[test]
fn memory_backend_clones_share_the_slot() {
    let backend = MemoryBackend::new();
    let probe = backend.clone();
    backend.write("shared");
    assert_eq!(probe.record(), Some("shared".to_owned()));
}

#[test]
fn memory_backend_with_record_is_readable() {
    let backend = MemoryBackend::with_record("not json");
    assert_eq!(backend.read(), Some("not json".to_owned()));
}

// =============================================================
// LocalStorageBackend (native build: browser APIs unavailable)
// =============================================================

#[test]
fn local_storage_backend_misses_outside_the_browser() {
    let backend = LocalStorageBackend;
    assert_eq!(backend.read(), None);
    // Write must be a harmless no-op.
    backend.write("ignored");
    assert_eq!(backend.read(), None);
}
