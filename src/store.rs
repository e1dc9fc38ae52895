//! Store Module
//!
//! The file-backed key-value store.
//!
//! ## Responsibilities
//! - Lazily create the root directory, exactly once per instance
//! - Map keys to entry files under the root
//! - get / set / remove / clear / list keys
//!
//! ## Initialization State Machine
//! ```text
//!                 ┌──────────┐
//!                 │  Ready   │
//!                 └──────────┘
//!                      ▲
//! ┌───────────────┐    │ root exists or was created
//! │ Uninitialized │────┤
//! └───────────────┘    │ stat or create failed
//!                      ▼
//!                 ┌──────────┐
//!                 │  Failed  │  (terminal)
//!                 └──────────┘
//! ```
//! Every operation except `clear` waits for the store to leave
//! `Uninitialized`. `Failed` hands the same error to all of them.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::sync::Mutex;

use crate::codec::{decode_value, encode_value};
use crate::config::{Config, StoreOptions};
use crate::diagnostics::{DebugSink, TracingSink};
use crate::error::{ClearStep, Result, StoreError};
use crate::fs::{FileSystem, TokioFileSystem};
use crate::key::{decode_key, encode_key, is_reserved_name, validate_key};

/// Generic async key-value contract
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    async fn get_item(&self, key: &str) -> Result<String>;

    /// Create or overwrite `key`
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; a missing key is not an error
    async fn remove_item(&self, key: &str) -> Result<()>;

    /// Delete every entry
    async fn clear(&self) -> Result<()>;

    /// Every stored key
    async fn get_all_keys(&self) -> Result<Vec<String>>;

    /// Like `get_item`, but a missing key is `Ok(None)`
    async fn try_get_item(&self, key: &str) -> Result<Option<String>> {
        match self.get_item(key).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Lifecycle of the root directory
#[derive(Debug, Clone)]
pub enum InitState {
    /// Constructed; the root has not been checked yet
    Uninitialized,

    /// The root exists
    Ready,

    /// Creating the root failed; the store never recovers
    Failed(StoreError),
}

/// Key-value store keeping one file per entry
///
/// ## Concurrency
/// - `state`: read on every operation, written once
/// - `init_latch`: held while initializing so at most one creation attempt runs
/// - Entry operations are not ordered against each other; the filesystem's
///   last-writer-wins applies
pub struct FileStore {
    config: Config,
    fs: Arc<dyn FileSystem>,
    sink: Arc<dyn DebugSink>,
    state: RwLock<InitState>,
    init_latch: Mutex<()>,
}

/// Build a store from caller overrides merged onto the defaults
pub fn create_store(options: StoreOptions) -> FileStore {
    FileStore::new(Config::from_options(options))
}

impl FileStore {
    /// Create a store on `tokio::fs` with `tracing` diagnostics
    ///
    /// Nothing touches the filesystem until the first operation.
    pub fn new(config: Config) -> Self {
        Self::with_backend(config, Arc::new(TokioFileSystem::new()), Arc::new(TracingSink))
    }

    /// Create a store with injected collaborators
    pub fn with_backend(
        config: Config,
        fs: Arc<dyn FileSystem>,
        sink: Arc<dyn DebugSink>,
    ) -> Self {
        Self {
            config,
            fs,
            sink,
            state: RwLock::new(InitState::Uninitialized),
            init_latch: Mutex::new(()),
        }
    }

    /// Wait until the root directory is usable
    ///
    /// The first caller runs initialization; everyone else waits on the latch
    /// and sees the memoized outcome.
    pub async fn ready(&self) -> Result<()> {
        if let Some(outcome) = self.settled() {
            return outcome;
        }

        let _guard = self.init_latch.lock().await;

        // Re-check: another task may have finished while we waited
        if let Some(outcome) = self.settled() {
            return outcome;
        }

        let outcome = self.initialize().await;
        *self.state.write() = match &outcome {
            Ok(()) => InitState::Ready,
            Err(e) => InitState::Failed(e.clone()),
        };
        outcome
    }

    /// Current initialization state
    pub fn state(&self) -> InitState {
        self.state.read().clone()
    }

    /// Entry file for `key`
    pub fn path_for_key(&self, key: &str) -> PathBuf {
        self.config.storage_path.join(encode_key(key))
    }

    /// Get the root directory path
    pub fn root(&self) -> &Path {
        &self.config.storage_path
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn settled(&self) -> Option<Result<()>> {
        match &*self.state.read() {
            InitState::Uninitialized => None,
            InitState::Ready => Some(Ok(())),
            InitState::Failed(e) => Some(Err(e.clone())),
        }
    }

    async fn initialize(&self) -> Result<()> {
        let root = self.root();
        let exists = self
            .fs
            .exists(root)
            .await
            .map_err(|e| StoreError::directory_creation(root, e))?;

        if exists {
            self.debug("Using existing root directory");
            return Ok(());
        }

        self.debug("Creating new root directory...");
        self.fs
            .create_dir_all(root)
            .await
            .map_err(|e| StoreError::directory_creation(root, e))?;

        tracing::info!(root = %root.display(), "created root directory");
        Ok(())
    }

    fn debug(&self, message: &str) {
        if self.config.diagnostics_enabled() {
            self.sink.emit(&self.config.name, message);
        }
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> Result<String> {
        validate_key(key)?;
        self.ready().await?;
        self.debug(&format!("getItem: {}", key));

        let bytes = self
            .fs
            .read(&self.path_for_key(key))
            .await
            .map_err(|e| StoreError::read(key, e))?;

        decode_value(self.config.encoding, key, bytes)
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.ready().await?;
        self.debug(&format!("setItem: {}", key));

        let bytes = encode_value(self.config.encoding, key, value)?;
        self.fs
            .write(&self.path_for_key(key), &bytes)
            .await
            .map_err(|e| StoreError::write(key, e))
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.ready().await?;
        self.debug(&format!("removeItem: {}", key));

        match self.fs.remove_file(&self.path_for_key(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::delete(key, e)),
        }
    }

    /// Does not wait for initialization: wiping and recreating the root is
    /// itself a way of making the store usable.
    async fn clear(&self) -> Result<()> {
        self.debug("clear");
        let root = self.root();

        match self.fs.remove_dir_all(root).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(StoreError::clear(root, ClearStep::Remove, e)),
        }

        self.fs
            .create_dir_all(root)
            .await
            .map_err(|e| StoreError::clear(root, ClearStep::Recreate, e))
    }

    async fn get_all_keys(&self) -> Result<Vec<String>> {
        self.ready().await?;
        self.debug("getAllKeys");

        let root = self.root();
        let names = self.fs.list_files(root).await.map_err(|e| StoreError::List {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut keys = Vec::with_capacity(names.len());
        for name in names {
            if is_reserved_name(&name) {
                continue;
            }
            let key = decode_key(&name).map_err(|e| StoreError::List {
                path: root.to_path_buf(),
                message: e.to_string(),
            })?;
            keys.push(key);
        }

        keys.sort();
        Ok(keys)
    }
}
