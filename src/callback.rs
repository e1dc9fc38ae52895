//! Callback Adapter
//!
//! Node-style optional callbacks on top of any `KeyValueStore`.
//!
//! ## Contract
//! - Callback supplied: the outcome (`Ok(&value)` or `Err(&error)`) goes to
//!   the callback and the returned future resolves `Ok`. Value-returning
//!   operations resolve `Ok(Some(value))` on success and `Ok(None)` when the
//!   error went to the callback.
//! - No callback: the error fails the returned future.
//!
//! `get_item_with` follows the same rule as every other operation; a missing
//! key is an error on both channels.

use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::store::KeyValueStore;

/// Receives the outcome of one operation
pub type Callback<T> = Box<dyn for<'a> FnOnce(std::result::Result<&'a T, &'a StoreError>) + Send>;

/// Box a closure as a callback
///
/// Lets closure arguments be inferred without annotations.
pub fn callback<T, F>(f: F) -> Option<Callback<T>>
where
    F: for<'a> FnOnce(std::result::Result<&'a T, &'a StoreError>) + Send + 'static,
{
    Some(Box::new(f))
}

/// Route `outcome` to `callback` if one was given
fn deliver<T>(outcome: Result<T>, callback: Option<Callback<T>>) -> Result<Option<T>> {
    match (outcome, callback) {
        (Ok(value), Some(cb)) => {
            cb(Ok(&value));
            Ok(Some(value))
        }
        (Ok(value), None) => Ok(Some(value)),
        (Err(e), Some(cb)) => {
            cb(Err(&e));
            Ok(None)
        }
        (Err(e), None) => Err(e),
    }
}

/// Optional-callback variants of the store operations
#[async_trait]
pub trait CallbackExt: KeyValueStore {
    async fn get_item_with(
        &self,
        key: &str,
        callback: Option<Callback<String>>,
    ) -> Result<Option<String>> {
        deliver(self.get_item(key).await, callback)
    }

    async fn set_item_with(
        &self,
        key: &str,
        value: &str,
        callback: Option<Callback<()>>,
    ) -> Result<()> {
        deliver(self.set_item(key, value).await, callback).map(|_| ())
    }

    async fn remove_item_with(&self, key: &str, callback: Option<Callback<()>>) -> Result<()> {
        deliver(self.remove_item(key).await, callback).map(|_| ())
    }

    async fn clear_with(&self, callback: Option<Callback<()>>) -> Result<()> {
        deliver(self.clear().await, callback).map(|_| ())
    }

    async fn get_all_keys_with(
        &self,
        callback: Option<Callback<Vec<String>>>,
    ) -> Result<Option<Vec<String>>> {
        deliver(self.get_all_keys().await, callback)
    }
}

impl<S: KeyValueStore + ?Sized> CallbackExt for S {}
