//! Page-owned record snapshots with stale-response protection.
//!
//! DESIGN
//! ======
//! Every fetch takes a generation number from `begin`. Only the result
//! carrying the latest generation is applied, so a slow earlier request can
//! never overwrite the rows of a newer refresh. Failed fetches keep the rows
//! already on screen and record the error for the banner.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiResult;
use crate::util::task;

/// Rows currently displayed by one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None, generation: 0 }
    }
}

impl<T> Snapshot<T> {
    /// Start a fetch and return its generation.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply a fetch result. Returns `false` when the result is stale and
    /// was dropped.
    pub fn resolve(&mut self, generation: u64, result: ApiResult<Vec<T>>) -> bool {
        if generation != self.generation {
            log::debug!("snapshot: dropping stale generation {generation} (current {})", self.generation);
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
        true
    }

    /// Record a failure from a mutation (create/update/delete) without
    /// touching the rows.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Drop rows and error when the snapshot is reused for a different
    /// record. The generation is kept so in-flight fetches stay stale.
    pub fn clear(&mut self) {
        self.items.clear();
        self.error = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Fetch rows into `snapshot`, dropping the result if a newer fetch started
/// meanwhile or the owning page has been disposed.
pub fn load<T, F, Fut>(snapshot: RwSignal<Snapshot<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = ApiResult<Vec<T>>> + 'static,
{
    let Some(generation) = snapshot.try_update(Snapshot::begin) else {
        return;
    };
    task::spawn(async move {
        let result = fetch().await;
        snapshot.try_update(|s| s.resolve(generation, result));
    });
}

/// Settle a create, update, or delete: clear `busy`, then run `on_success` or
/// surface the error on the page banner. No-op once the page is gone.
pub fn settle<T, R>(
    snapshot: RwSignal<Snapshot<T>>,
    busy: RwSignal<bool>,
    result: ApiResult<R>,
    on_success: impl FnOnce(),
) where
    T: Send + Sync + 'static,
{
    if snapshot.is_disposed() {
        return;
    }
    busy.try_set(false);
    match result {
        Ok(_) => on_success(),
        Err(err) => snapshot.update(|s| s.fail(err.to_string())),
    }
}

/// `limit`/`offset` cursor for paginated list screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    pub limit: u32,
    pub offset: u32,
}

impl PageCursor {
    pub fn first(limit: u32) -> Self {
        Self { limit: limit.max(1), offset: 0 }
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self { offset: self.offset.saturating_add(self.limit), ..self }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self { offset: self.offset.saturating_sub(self.limit), ..self }
    }

    pub fn has_prev(self) -> bool {
        self.offset > 0
    }

    /// A full page suggests more rows may follow.
    pub fn has_next(self, rows_on_page: usize) -> bool {
        u32::try_from(rows_on_page).is_ok_and(|n| n >= self.limit)
    }

    /// 1-based page number for display.
    pub fn page_number(self) -> u32 {
        self.offset / self.limit.max(1) + 1
    }
}
