//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! The repository actors emit one event per request with an `entity_type` field
//! (`Book`, `User`), and every client method opens a span, so a single line shows
//! which client call produced it.
//!
//! ```bash
//! # Saves, updates, deletes and actor lifecycle
//! RUST_LOG=info cargo run
//!
//! # Every request, including lookups and query payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the actor loop
//! RUST_LOG=library_catalog::framework=debug cargo run
//! ```
//!
//! The core repositories themselves stay silent; failures are returned, not logged.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Calling it again once a subscriber is installed is a no-op.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type already says where an event came from
        .compact()
        .try_init();
}
