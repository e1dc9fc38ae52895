//! # fskv
//!
//! A minimal async key-value store that keeps every value in its own file:
//! - One flat root directory per store, created lazily and exactly once
//! - Reversible percent-encoding from keys to filenames
//! - get / set / remove / clear / list-keys behind an async trait
//! - Optional Node-style callbacks on every operation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              KeyValueStore / CallbackExt                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    FileStore                                 │
//! │        (InitState latch, key encoding, value codec)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ FileSystem  │          │  DebugSink  │
//!   │(tokio::fs)  │          │  (tracing)  │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Quick start
//!
//! ```no_run
//! use fskv::{create_store, KeyValueStore, StoreOptions};
//!
//! # async fn demo() -> fskv::Result<()> {
//! let store = create_store(StoreOptions {
//!     storage_path: Some("/tmp/store1".into()),
//!     ..Default::default()
//! });
//! store.set_item("user:1", r#"{"name":"Ana"}"#).await?;
//! assert_eq!(store.get_item("user:1").await?, r#"{"name":"Ana"}"#);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod key;
pub mod codec;
pub mod fs;
pub mod diagnostics;
pub mod store;
pub mod callback;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ClearStep, Result, StoreError};
pub use config::{Config, Encoding, StoreOptions};
pub use store::{create_store, FileStore, InitState, KeyValueStore};
pub use callback::{callback, Callback, CallbackExt};
pub use fs::{FileSystem, TokioFileSystem};
pub use diagnostics::{DebugSink, NullSink, TracingSink};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of fskv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
