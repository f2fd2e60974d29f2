use crate::observer::{MissObserver, TracingObserver};
use msgprops_core::{Bundle, Message, MessageId};
use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// A [`Bundle`] that records every id it was asked for but could not find.
///
/// Lookups are forwarded to the wrapped bundle unchanged. When the wrapped
/// bundle has no message for an id, the id is added to the failed set and
/// the observer is notified; the caller still gets `None` and falls back to
/// the source text. The failed set only grows.
///
/// One instance may be shared across threads rendering concurrently.
pub struct TrackingBundle<B> {
    tag: String,
    delegate: B,
    observer: Arc<dyn MissObserver>,
    failed: Mutex<FxHashSet<MessageId>>,
}

impl<B: Bundle> TrackingBundle<B> {
    /// Wraps `delegate`, reporting misses through [`TracingObserver`].
    ///
    /// `tag` identifies where the bundle came from (e.g. a file path) in
    /// miss reports.
    pub fn new(tag: impl Into<String>, delegate: B) -> Self {
        Self::with_observer(tag, delegate, TracingObserver)
    }

    pub fn with_observer(
        tag: impl Into<String>,
        delegate: B,
        observer: impl MissObserver + 'static,
    ) -> Self {
        Self::with_shared_observer(tag, delegate, Arc::new(observer))
    }

    /// Like [`with_observer`](Self::with_observer), for an observer shared
    /// between several bundles.
    pub fn with_shared_observer(
        tag: impl Into<String>,
        delegate: B,
        observer: Arc<dyn MissObserver>,
    ) -> Self {
        Self {
            tag: tag.into(),
            delegate,
            observer,
            failed: Mutex::new(FxHashSet::default()),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn delegate(&self) -> &B {
        &self.delegate
    }

    pub fn into_inner(self) -> B {
        self.delegate
    }

    /// Returns a sorted snapshot of every id that missed so far.
    pub fn failed_lookups(&self) -> BTreeSet<MessageId> {
        self.failed.lock().iter().copied().collect()
    }

    pub fn has_failed(&self, id: MessageId) -> bool {
        self.failed.lock().contains(&id)
    }
}

impl<B: Bundle> Bundle for TrackingBundle<B> {
    fn lookup(&self, id: MessageId) -> Option<&Message> {
        // This is the only point where the renderer reveals which ids it needs,
        // so it is where missing entries of a translated bundle show up.
        let found = self.delegate.lookup(id);
        if found.is_none() {
            self.failed.lock().insert(id);
            self.observer.lookup_missed(&self.tag, id);
        }
        found
    }

    fn locale(&self) -> &str {
        self.delegate.locale()
    }

    fn len(&self) -> usize {
        self.delegate.len()
    }

    fn messages(&self) -> Box<dyn Iterator<Item = &Message> + '_> {
        self.delegate.messages()
    }
}

impl<B: fmt::Debug> fmt::Debug for TrackingBundle<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackingBundle")
            .field("tag", &self.tag)
            .field("delegate", &self.delegate)
            .field("failed", &self.failed.lock().len())
            .finish_non_exhaustive()
    }
}
