//! Record source that answers after a simulated network delay.

use std::fmt::Debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use registrar_business::{InMemorySource, ListQuery, OnFetched, Record, RecordSource};
use tokio::runtime::Handle;

/// Every n-th request is held back three times as long, so responses can
/// arrive out of order.
const SLOW_EVERY: u64 = 3;

/// Wraps an [`InMemorySource`] and completes each fetch on a Tokio runtime
/// after `latency`.
#[derive(Debug)]
pub struct DelayedSource<T> {
    inner: Arc<InMemorySource<T>>,
    latency: Duration,
    runtime: Handle,
    issued: AtomicU64,
}

impl<T: Record + Debug> DelayedSource<T> {
    pub fn new(inner: InMemorySource<T>, latency: Duration, runtime: Handle) -> Self {
        Self {
            inner: Arc::new(inner),
            latency,
            runtime,
            issued: AtomicU64::new(0),
        }
    }

    fn delay_for(&self, sequence: u64) -> Duration {
        if sequence % SLOW_EVERY == SLOW_EVERY - 1 {
            self.latency * 3
        } else {
            self.latency
        }
    }
}

impl<T: Record + Debug> RecordSource<T> for DelayedSource<T> {
    fn fetch(&self, query: ListQuery, on_done: OnFetched<T>) {
        let sequence = self.issued.fetch_add(1, Ordering::Relaxed);
        let delay = self.delay_for(sequence);
        let inner = Arc::clone(&self.inner);

        log::debug!("delayed fetch #{sequence} in {delay:?}: {query:?}");
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            on_done(inner.query(&query));
        });
    }
}
