//! Filesystem Backend
//!
//! The store never touches the filesystem directly; it goes through the
//! `FileSystem` trait so the primitive can be swapped (sandboxed platform
//! APIs, fault injection in tests).
//!
//! `TokioFileSystem` is the default backend on top of `tokio::fs`.

use std::io::{self, Write};
use std::path::Path;

use async_trait::async_trait;

/// Filesystem primitives used by the store
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Whether anything exists at `path`
    async fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Create `path` and any missing parents
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Read a whole file
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or replace a file with `contents`
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Delete a file. Fails with `NotFound` if it is absent.
    async fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Delete a directory and everything below it. Fails with `NotFound` if absent.
    async fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Names of the regular files directly under `path`
    async fn list_files(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// Random characters in a temp file name (".XXXXXXXXXX", well below NAME_MAX)
const TEMP_RAND_BYTES: usize = 10;

/// `tokio::fs` backend
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileSystem for TokioFileSystem {
    async fn exists(&self, path: &Path) -> io::Result<bool> {
        tokio::fs::try_exists(path).await
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    /// Write to a uniquely named temp sibling, then rename over the target
    ///
    /// Each call owns its temp file, so concurrent writers of one key never
    /// share a half-written file. The last rename wins.
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let path = path.to_path_buf();
        let contents = contents.to_vec();

        tokio::task::spawn_blocking(move || {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let mut tmp = tempfile::Builder::new()
                .prefix(".")
                .rand_bytes(TEMP_RAND_BYTES)
                .tempfile_in(dir)?;
            tmp.write_all(&contents)?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok::<(), io::Error>(())
        })
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        tokio::fs::remove_file(path).await
    }

    async fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::remove_dir_all(path).await
    }

    async fn list_files(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(path).await?;

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::warn!(name = ?raw, "skipping non UTF-8 filename"),
            }
        }

        Ok(names)
    }
}
