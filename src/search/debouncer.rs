//! Debounced, cancellable search coordinator
//!
//! Every requester (a chat, an inline-query user, a console) owns at most one
//! pending search. A new submission cancels the previous one and waits out the
//! quiet interval before looking anything up, so a burst of keystrokes costs a
//! single lookup. Each task holds a child [`CancellationToken`] of the
//! coordinator's root token and a cleanup guard that clears its table slot on
//! every exit path.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use tokio::runtime::Handle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use super::pending::{CleanupGuard, PendingTable, lock_table};
use super::types::{SearchConfig, Submission};
use crate::dispatch::{Answer, ResultDispatcher};
use crate::error::BkrsError;
use crate::lookup::{LookupRecord, LookupService};

/// Per-requester debounced search coordinator
pub struct RequestDebouncer<R, T> {
    config: SearchConfig,
    runtime: Handle,
    lookup: Arc<dyn LookupService>,
    dispatcher: Arc<dyn ResultDispatcher<T>>,
    table: Arc<Mutex<PendingTable<R>>>,
    /// Parent of every task token; cancelled on shutdown
    root_token: CancellationToken,
    tracker: TaskTracker,
}

/// Everything a scheduled search needs once it leaves `submit`
struct SearchJob<T> {
    seq: u64,
    query: String,
    target: T,
    deadline: Instant,
    cancel_token: CancellationToken,
    deliver_superseded: bool,
    lookup: Arc<dyn LookupService>,
    dispatcher: Arc<dyn ResultDispatcher<T>>,
}

impl<R, T> RequestDebouncer<R, T>
where
    R: Eq + Hash + Clone + Debug + Send + 'static,
    T: Debug + Send + 'static,
{
    /// Create a debouncer that spawns onto the current tokio runtime.
    pub fn new(
        config: SearchConfig,
        lookup: Arc<dyn LookupService>,
        dispatcher: Arc<dyn ResultDispatcher<T>>,
    ) -> Result<Self, BkrsError> {
        let runtime = Handle::try_current().map_err(|_| BkrsError::NoRuntime)?;
        Ok(Self::with_runtime(runtime, config, lookup, dispatcher))
    }

    /// Create a debouncer bound to an explicit runtime.
    ///
    /// `submit` can then be called from threads outside the runtime.
    pub fn with_runtime(
        runtime: Handle,
        config: SearchConfig,
        lookup: Arc<dyn LookupService>,
        dispatcher: Arc<dyn ResultDispatcher<T>>,
    ) -> Self {
        Self {
            config,
            runtime,
            lookup,
            dispatcher,
            table: Arc::new(Mutex::new(PendingTable::new())),
            root_token: CancellationToken::new(),
            tracker: TaskTracker::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Submit a search for `requester`.
    ///
    /// Cancels the requester's pending search, if any. An empty query only
    /// clears and dispatches [`Answer::Empty`]; anything else is looked up
    /// after the quiet interval unless superseded first. Never blocks on the
    /// lookup or on delivery.
    pub fn submit(
        &self,
        requester: R,
        query: impl Into<String>,
        target: T,
    ) -> Result<Submission, BkrsError> {
        let query = query.into();
        let mut table = lock_table(&self.table);

        if self.tracker.is_closed() {
            return Err(BkrsError::ShutDown);
        }

        if table.cancel(&requester) {
            log::debug!("Superseded pending search for {:?}", requester);
        }

        if query.is_empty() {
            drop(table);
            log::debug!("Empty query from {:?}, dispatching empty answer", requester);
            let dispatcher = self.dispatcher.clone();
            self.tracker.spawn_on(
                async move { deliver(dispatcher.as_ref(), target, Answer::Empty).await },
                &self.runtime,
            );
            return Ok(Submission::Cleared);
        }

        let cancel_token = self.root_token.child_token();
        let seq = table.insert(requester.clone(), query.clone(), cancel_token.clone());
        log::debug!("Scheduled search {} for {:?}: {:?}", seq, requester, query);

        let job = SearchJob {
            seq,
            query,
            target,
            deadline: Instant::now() + self.config.quiet_interval,
            cancel_token,
            deliver_superseded: self.config.deliver_superseded,
            lookup: self.lookup.clone(),
            dispatcher: self.dispatcher.clone(),
        };
        let guard = CleanupGuard::new(self.table.clone(), requester, seq);

        // A runtime that has shut down drops the task, and its guard, on this thread
        drop(table);
        self.tracker.spawn_on(run_search(job, guard), &self.runtime);

        Ok(Submission::Scheduled { seq })
    }

    /// Cancel the requester's pending search. Returns false if nothing was pending.
    pub fn cancel(&self, requester: &R) -> bool {
        lock_table(&self.table).cancel(requester)
    }

    pub fn pending_count(&self) -> usize {
        lock_table(&self.table).len()
    }

    pub fn is_pending(&self, requester: &R) -> bool {
        lock_table(&self.table).contains(requester)
    }

    /// Query captured by the requester's pending search
    pub fn pending_query(&self, requester: &R) -> Option<String> {
        lock_table(&self.table).query(requester).map(str::to_string)
    }

    /// Sequence number of the requester's pending search
    pub fn pending_seq(&self, requester: &R) -> Option<u64> {
        lock_table(&self.table).current_seq(requester)
    }

    pub fn is_shut_down(&self) -> bool {
        self.tracker.is_closed()
    }

    /// Cancel every pending search and stop accepting new ones.
    ///
    /// Waits for running tasks at most `shutdown_grace`. Calling it twice is harmless.
    pub async fn shutdown(&self) {
        let cancelled = self.close_and_cancel();
        log::debug!("Shutdown cancelled {} pending searches", cancelled);
        self.wait_for_tasks().await;
    }

    /// Stop accepting searches and let pending ones finish.
    ///
    /// Whatever is still running after `shutdown_grace` is cancelled.
    pub async fn drain(&self) {
        {
            let _table = lock_table(&self.table);
            self.tracker.close();
        }
        self.wait_for_tasks().await;

        let cancelled = self.close_and_cancel();
        if cancelled > 0 {
            log::warn!("Drain cancelled {} searches still pending", cancelled);
        }
    }

    fn close_and_cancel(&self) -> usize {
        let cancelled = {
            let mut table = lock_table(&self.table);
            self.tracker.close();
            table.cancel_all()
        };
        self.root_token.cancel();
        cancelled
    }

    async fn wait_for_tasks(&self) {
        if tokio::time::timeout(self.config.shutdown_grace, self.tracker.wait())
            .await
            .is_err()
        {
            log::warn!(
                "{} search tasks still running after {:?}",
                self.tracker.len(),
                self.config.shutdown_grace
            );
        }
    }
}

impl<R, T> Drop for RequestDebouncer<R, T> {
    fn drop(&mut self) {
        self.root_token.cancel();
    }
}

/// Body of a scheduled search: wait, look up, deliver.
///
/// `_guard` clears the table slot when this future finishes or is dropped.
async fn run_search<R, T>(job: SearchJob<T>, _guard: CleanupGuard<R>)
where
    R: Eq + Hash,
    T: Debug,
{
    tokio::select! {
        biased;
        _ = job.cancel_token.cancelled() => {
            log::debug!("Search {} cancelled during quiet interval", job.seq);
            return;
        }
        _ = tokio::time::sleep_until(job.deadline) => {}
    }

    if job.cancel_token.is_cancelled() {
        log::debug!("Search {} cancelled before lookup", job.seq);
        return;
    }

    let record = run_lookup(job.lookup.clone(), &job.query).await;

    if job.cancel_token.is_cancelled() {
        if !job.deliver_superseded {
            log::debug!("Search {} superseded mid-lookup, result dropped", job.seq);
            return;
        }
        log::debug!(
            "Search {} superseded mid-lookup, delivering to {:?}",
            job.seq,
            job.target
        );
    }

    let answer = Answer::from_lookup(&job.query, record.as_ref());
    deliver(job.dispatcher.as_ref(), job.target, answer).await;
}

/// Run a lookup on the blocking pool. Faults and panics count as not found.
async fn run_lookup(lookup: Arc<dyn LookupService>, query: &str) -> Option<LookupRecord> {
    let key = query.to_string();
    match tokio::task::spawn_blocking(move || lookup.lookup(&key)).await {
        Ok(Ok(record)) => record,
        Ok(Err(e)) => {
            log::warn!("Lookup for {:?} failed, treating as not found: {}", query, e);
            None
        }
        Err(e) => {
            log::warn!("Lookup task for {:?} did not complete: {}", query, e);
            None
        }
    }
}

/// Hand an answer to the dispatcher; failures are logged here and nowhere else.
async fn deliver<T: Debug>(dispatcher: &dyn ResultDispatcher<T>, target: T, answer: Answer) {
    let label = format!("{:?}", target);
    if let Err(e) = dispatcher.deliver(target, answer).await {
        log::warn!("Delivery to {} failed: {}", label, e);
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
