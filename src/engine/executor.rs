//! Serial executors that run dispatch bodies one at a time.
//!
//! A machine hands each dispatch to its executor as a single job. The
//! executor decides when that job runs but must never run two jobs at once
//! and must preserve submission order.

use tokio::sync::{mpsc, oneshot};

/// A unit of work submitted to an executor.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Runs submitted jobs strictly in FIFO order, never concurrently.
pub trait SerialExecutor: Send + Sync {
    fn submit(&self, job: Job);
}

/// Runs each job immediately on the submitting thread.
///
/// Used when a machine is built without an executor, in which case
/// `dispatch` returning implies the transition has completed.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineExecutor;

impl SerialExecutor for InlineExecutor {
    fn submit(&self, job: Job) {
        job();
    }
}

/// FIFO queue drained by a single [`QueueWorker`].
///
/// The executor never spawns anything itself; the caller decides where the
/// worker runs:
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use switchyard::engine::{QueueExecutor, SerialExecutor};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let (executor, worker) = QueueExecutor::new();
/// tokio::spawn(worker.run());
///
/// let ran = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&ran);
/// executor.submit(Box::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// }));
///
/// executor.barrier().await;
/// assert_eq!(ran.load(Ordering::SeqCst), 1);
/// # }
/// ```
#[derive(Clone)]
pub struct QueueExecutor {
    tx: mpsc::UnboundedSender<Job>,
}

/// Receiving half of a [`QueueExecutor`]; runs jobs until every executor
/// handle has been dropped.
pub struct QueueWorker {
    rx: mpsc::UnboundedReceiver<Job>,
}

impl QueueExecutor {
    pub fn new() -> (Self, QueueWorker) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, QueueWorker { rx })
    }

    /// Resolves once every job submitted before this call has run.
    pub async fn barrier(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        self.submit(Box::new(move || {
            let _ = done_tx.send(());
        }));
        // Err means the worker is gone; nothing left to wait for.
        let _ = done_rx.await;
    }
}

impl SerialExecutor for QueueExecutor {
    fn submit(&self, job: Job) {
        if self.tx.send(job).is_err() {
            tracing::warn!("queue worker has stopped; dropping submitted job");
        }
    }
}

impl QueueWorker {
    /// Drain the queue on an async runtime.
    pub async fn run(mut self) {
        while let Some(job) = self.rx.recv().await {
            job();
        }
        tracing::debug!("queue executor closed; worker exiting");
    }

    /// Drain the queue on a dedicated thread. Must not be called from
    /// within an async runtime.
    pub fn run_blocking(mut self) {
        while let Some(job) = self.rx.blocking_recv() {
            job();
        }
        tracing::debug!("queue executor closed; worker exiting");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn inline_executor_runs_immediately() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);

        InlineExecutor.submit(Box::new(move || sink.lock().push(1)));

        assert_eq!(*log.lock(), vec![1]);
    }

    #[tokio::test]
    async fn queue_executor_preserves_submission_order() {
        let (executor, worker) = QueueExecutor::new();
        let handle = tokio::spawn(worker.run());
        let log = Arc::new(Mutex::new(Vec::new()));

        for i in 0..50 {
            let sink = Arc::clone(&log);
            executor.submit(Box::new(move || sink.lock().push(i)));
        }
        executor.barrier().await;

        assert_eq!(*log.lock(), (0..50).collect::<Vec<_>>());

        drop(executor);
        handle.await.unwrap();
    }

    #[test]
    fn queue_executor_defers_until_worker_runs() {
        let (executor, worker) = QueueExecutor::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);

        executor.submit(Box::new(move || sink.lock().push("ran")));
        assert!(log.lock().is_empty());

        drop(executor);
        worker.run_blocking();

        assert_eq!(*log.lock(), vec!["ran"]);
    }

    #[test]
    fn submit_after_worker_dropped_is_ignored() {
        let (executor, worker) = QueueExecutor::new();
        drop(worker);

        executor.submit(Box::new(|| panic!("job must not run")));
    }
}
