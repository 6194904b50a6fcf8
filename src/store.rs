//! Result persistence: the store contract and three implementations.
//!
//! - [`ResultStore`]: `put` / `get` / `contains` by [`ResultCode`].
//! - [`MemoryStore`]: a `hashbrown::HashMap`, owned by whoever creates it.
//! - [`LocalCache`]: client-scoped storage for in-progress answers and past
//!   results. It can be snapshotted for persistence.
//! - [`FallbackStore`]: a remote primary backed by a local cache. Remote
//!   failures degrade to the cache instead of failing the caller.
//!
//! # Invariants
//!
//! - Stored results are never mutated. A second `put` under the same code is
//!   [`StoreError::Duplicate`].
//! - No store is a process-wide singleton. Lifetimes are explicit, so the
//!   classifier and each store can be tested in isolation.
//! - no_std compatible; uses `hashbrown::HashMap` (no `std` dependency).

use alloc::vec::Vec;
use core::cell::Cell;

use hashbrown::HashMap;
use tracing::{debug, warn};

use crate::answers::AnswerSet;
use crate::code::ResultCode;
use crate::error::StoreError;
use crate::record::StoredResult;

// ─── Contract ────────────────────────────────────────────────────────────────

/// Keyed persistence for stored results.
pub trait ResultStore {
    /// Persist `result` under `code`.
    fn put(&mut self, code: ResultCode, result: StoredResult) -> Result<(), StoreError>;

    /// Fetch the result stored under `code`; `Ok(None)` if there is none.
    fn get(&self, code: &ResultCode) -> Result<Option<StoredResult>, StoreError>;

    /// `true` if a result is stored under `code`.
    fn contains(&self, code: &ResultCode) -> Result<bool, StoreError> {
        Ok(self.get(code)?.is_some())
    }
}

impl<S: ResultStore + ?Sized> ResultStore for &mut S {
    fn put(&mut self, code: ResultCode, result: StoredResult) -> Result<(), StoreError> {
        (**self).put(code, result)
    }

    fn get(&self, code: &ResultCode) -> Result<Option<StoredResult>, StoreError> {
        (**self).get(code)
    }

    fn contains(&self, code: &ResultCode) -> Result<bool, StoreError> {
        (**self).contains(code)
    }
}

// ─── MemoryStore ─────────────────────────────────────────────────────────────

/// In-memory result store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    results: HashMap<ResultCode, StoredResult>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate over stored results in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&ResultCode, &StoredResult)> {
        self.results.iter()
    }
}

impl ResultStore for MemoryStore {
    fn put(&mut self, code: ResultCode, result: StoredResult) -> Result<(), StoreError> {
        if self.results.contains_key(&code) {
            return Err(StoreError::Duplicate(code));
        }
        self.results.insert(code, result);
        Ok(())
    }

    fn get(&self, code: &ResultCode) -> Result<Option<StoredResult>, StoreError> {
        Ok(self.results.get(code).cloned())
    }

    fn contains(&self, code: &ResultCode) -> Result<bool, StoreError> {
        Ok(self.results.contains_key(code))
    }
}

// ─── LocalCache ──────────────────────────────────────────────────────────────

/// Client-scoped cache: the quiz in progress plus every result seen locally.
///
/// Unlike [`MemoryStore`], re-saving a result under a known code replaces it.
/// This matches browser storage, where the same result may be written by both
/// the submit and the lookup paths.
#[derive(Clone, Debug, Default)]
pub struct LocalCache {
    progress: Option<AnswerSet>,
    results: HashMap<ResultCode, StoredResult>,
}

impl LocalCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the answers given so far.
    pub fn save_progress(&mut self, answers: &AnswerSet) {
        self.progress = Some(answers.clone());
    }

    /// Answers saved by [`save_progress`](Self::save_progress), if any.
    pub fn progress(&self) -> Option<&AnswerSet> {
        self.progress.as_ref()
    }

    /// Forget the quiz in progress (after submission).
    pub fn clear_progress(&mut self) {
        self.progress = None;
    }

    /// Number of cached results.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Capture the cache for persistence.
    pub fn snapshot(&self) -> CacheSnapshot {
        let mut results: Vec<StoredResult> = self.results.values().cloned().collect();
        results.sort_by(|a, b| a.code.cmp(&b.code));
        CacheSnapshot {
            progress: self.progress.clone(),
            results,
        }
    }

    /// Rebuild a cache from a snapshot.
    ///
    /// Records whose derived fields disagree with their raw scores are
    /// dropped with a warning rather than loaded.
    pub fn restore(snapshot: CacheSnapshot) -> Self {
        let mut results = HashMap::with_capacity(snapshot.results.len());
        for result in snapshot.results {
            if !result.is_consistent() {
                warn!(code = %result.code, "dropping inconsistent cached result");
                continue;
            }
            results.insert(result.code.clone(), result);
        }
        Self {
            progress: snapshot.progress,
            results,
        }
    }
}

impl ResultStore for LocalCache {
    fn put(&mut self, code: ResultCode, result: StoredResult) -> Result<(), StoreError> {
        self.results.insert(code, result);
        Ok(())
    }

    fn get(&self, code: &ResultCode) -> Result<Option<StoredResult>, StoreError> {
        Ok(self.results.get(code).cloned())
    }

    fn contains(&self, code: &ResultCode) -> Result<bool, StoreError> {
        Ok(self.results.contains_key(code))
    }
}

/// Serializable image of a [`LocalCache`].
///
/// With the `serde` feature it serializes as:
///
/// ```text
/// { "progress": { "1": 4, ... } | null, "results": [ StoredResult, ... ] }
/// ```
///
/// Results are sorted by code so the encoding is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheSnapshot {
    /// The quiz in progress, if any.
    pub progress: Option<AnswerSet>,
    /// All cached results.
    pub results: Vec<StoredResult>,
}

// ─── FallbackStore ───────────────────────────────────────────────────────────

/// A primary store with a local cache underneath.
///
/// - `put` writes the primary, then the cache. A primary failure other than
///   [`StoreError::Duplicate`] is logged and swallowed, and the store is
///   marked degraded. A cache failure after a successful primary write is
///   logged only: the result is already persisted.
/// - `get` asks the primary first. On a miss or an error it answers from the
///   cache. A primary hit is written back to the cache.
#[derive(Debug)]
pub struct FallbackStore<P, L> {
    primary: P,
    local: L,
    degraded: Cell<bool>,
}

impl<P: ResultStore, L: ResultStore> FallbackStore<P, L> {
    /// Combine a primary store with a local cache.
    pub fn new(primary: P, local: L) -> Self {
        Self {
            primary,
            local,
            degraded: Cell::new(false),
        }
    }

    /// `true` once any primary operation (write, lookup or existence check)
    /// has failed.
    pub fn is_degraded(&self) -> bool {
        self.degraded.get()
    }

    /// The primary store.
    pub fn primary(&self) -> &P {
        &self.primary
    }

    /// The local cache.
    pub fn local(&self) -> &L {
        &self.local
    }

    /// Look up `code`, writing a primary hit back into the cache.
    pub fn get_and_cache(&mut self, code: &ResultCode) -> Result<Option<StoredResult>, StoreError> {
        match self.primary.get(code) {
            Ok(Some(result)) => {
                if !self.local.contains(code).unwrap_or(false) {
                    if let Err(err) = self.local.put(code.clone(), result.clone()) {
                        debug!(%code, error = %err, "could not cache result locally");
                    }
                }
                Ok(Some(result))
            }
            Ok(None) => self.local.get(code),
            Err(err) => {
                warn!(%code, error = %err, "primary store lookup failed, using local cache");
                self.degraded.set(true);
                self.local.get(code)
            }
        }
    }
}

impl<P: ResultStore, L: ResultStore> ResultStore for FallbackStore<P, L> {
    fn put(&mut self, code: ResultCode, result: StoredResult) -> Result<(), StoreError> {
        match self.primary.put(code.clone(), result.clone()) {
            Ok(()) => {
                if let Err(err) = self.local.put(code.clone(), result) {
                    warn!(%code, error = %err, "could not cache stored result locally");
                }
                Ok(())
            }
            Err(err @ StoreError::Duplicate(_)) => Err(err),
            Err(err) => {
                warn!(%code, error = %err, "primary store write failed, result kept locally");
                self.degraded.set(true);
                self.local.put(code, result)
            }
        }
    }

    fn get(&self, code: &ResultCode) -> Result<Option<StoredResult>, StoreError> {
        match self.primary.get(code) {
            Ok(Some(result)) => Ok(Some(result)),
            Ok(None) => self.local.get(code),
            Err(err) => {
                warn!(%code, error = %err, "primary store lookup failed, using local cache");
                self.degraded.set(true);
                self.local.get(code)
            }
        }
    }

    fn contains(&self, code: &ResultCode) -> Result<bool, StoreError> {
        match self.primary.contains(code) {
            Ok(true) => Ok(true),
            Ok(false) => self.local.contains(code),
            Err(err) => {
                warn!(%code, error = %err, "primary store check failed, using local cache");
                self.degraded.set(true);
                self.local.contains(code)
            }
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
