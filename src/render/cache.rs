use std::future::Future;

use tokio::sync::OnceCell;

/// The rendered board list, computed once per owner.
///
/// Concurrent first callers share a single initialisation; a failed
/// initialisation leaves the cache empty so the next caller tries again.
/// Nothing invalidates a filled cache.
#[derive(Debug, Default)]
pub struct BoardListCache {
    cell: OnceCell<String>,
}

impl BoardListCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached page, if it was rendered already.
    pub fn get(&self) -> Option<&str> {
        self.cell.get().map(String::as_str)
    }

    /// Returns the cached page, rendering it with `init` on first use.
    ///
    /// # Errors
    ///
    /// Returns the error of `init`; nothing is cached in that case.
    pub async fn get_or_try_init<E, F, Fut>(&self, init: F) -> Result<&str, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, E>>,
    {
        self.cell.get_or_try_init(init).await.map(String::as_str)
    }
}
