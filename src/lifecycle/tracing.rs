//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. The compact format hides the
//! module prefix (`with_target(false)`); every remote accessor opens a span carrying the
//! user's `uid`, so lines stay short while keeping their context.
//!
//! ## What Gets Traced
//!
//! - **Population**: `Populated fields=37` once a record is applied
//! - **Relationships**: `Fetched method=facebook.friends.get count=12`, plus `Cache hit` on reuse
//! - **Publishing**: a warning when the remote side does not acknowledge with `"1"`
//! - **Skipped keys**: `Skipping non-attribute key=...` at debug level
//!
//! ## Usage Examples
//!
//! ```bash
//! # Fetches and publishes only
//! RUST_LOG=info cargo test
//!
//! # Cache hits and skipped keys as well
//! RUST_LOG=social_graph=debug cargo test
//! ```
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! INFO friends{uid=Some(1)}: Fetched method=facebook.friends.get count=2
//! DEBUG friends{uid=Some(1)}: Cache hit count=2
//! ```

/// Installs the compact fmt subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
