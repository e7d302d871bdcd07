//! Bounded concurrent download pool over a drain-and-stop task queue.
//!
//! Every pending task is loaded before the first worker starts and the queue
//! is never refilled, so a worker that pops `None` exits instead of waiting.
//! The coordinator returns once every worker has finished.

use anyhow::Result;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::dedup::DownloadTask;
use crate::error::TaskError;
use crate::fetch;
use crate::storage;

/// Thread-safe multi-consumer queue of download tasks. Loaded once; no task
/// is ever requeued.
pub struct TaskQueue {
    inner: Mutex<VecDeque<DownloadTask>>,
}

impl TaskQueue {
    pub fn new(tasks: Vec<DownloadTask>) -> Self {
        Self {
            inner: Mutex::new(tasks.into()),
        }
    }

    /// Atomically pop one task without blocking. `None` means drained; since
    /// the queue is never refilled, callers exit on `None`.
    pub fn try_pop(&self) -> Option<DownloadTask> {
        self.inner.lock().unwrap().pop_front()
    }
}

/// Outcome of a pool run: completed count plus per-task failures as
/// (record name, rendered error). The coordinator makes no completion-count
/// promise; callers inspect this report or the filesystem.
#[derive(Debug, Default)]
pub struct DownloadReport {
    pub completed: usize,
    pub failed: Vec<(String, String)>,
}

impl DownloadReport {
    fn merge(&mut self, other: DownloadReport) {
        self.completed += other.completed;
        self.failed.extend(other.failed);
    }
}

/// Downloads every queued task with up to `workers` concurrent workers
/// (floored at 1) and returns after all workers have exited.
///
/// A fetch or write failure is confined to its task: the worker logs it,
/// records it in the report, and keeps draining the queue. Only a panicked
/// worker aborts the batch. Blocking; call from `spawn_blocking` in async
/// code.
pub fn run_downloads(
    tasks: Vec<DownloadTask>,
    workers: usize,
    timeout: Option<Duration>,
) -> Result<DownloadReport> {
    if tasks.is_empty() {
        return Ok(DownloadReport::default());
    }
    let num_workers = workers.max(1).min(tasks.len());
    let queue = Arc::new(TaskQueue::new(tasks));

    let mut handles = Vec::with_capacity(num_workers);
    for _ in 0..num_workers {
        let queue = Arc::clone(&queue);
        handles.push(std::thread::spawn(move || drain_queue(&queue, timeout)));
    }

    let mut report = DownloadReport::default();
    for handle in handles {
        let worker = handle
            .join()
            .map_err(|e| anyhow::anyhow!("download worker panicked: {:?}", e))?;
        report.merge(worker);
    }
    tracing::info!(
        completed = report.completed,
        failed = report.failed.len(),
        "download pool finished"
    );
    Ok(report)
}

/// One worker: pop until the queue is drained, keeping its own tally.
fn drain_queue(queue: &TaskQueue, timeout: Option<Duration>) -> DownloadReport {
    let mut report = DownloadReport::default();
    while let Some(task) = queue.try_pop() {
        match process_task(&task, timeout) {
            Ok(()) => report.completed += 1,
            Err(e) => {
                tracing::warn!("Exception occured while downloading images: {}", e);
                report.failed.push((task.record.name.clone(), e.to_string()));
            }
        }
    }
    report
}

/// Fetch one image body and write it to its destination atomically.
fn process_task(task: &DownloadTask, timeout: Option<Duration>) -> Result<(), TaskError> {
    let bytes = fetch::fetch_bytes(&task.record.image_url, timeout)?;
    storage::write_atomic(&task.destination, &bytes).map_err(|source| TaskError::Write {
        path: task.destination.clone(),
        source,
    })?;
    tracing::debug!(
        path = %task.destination.display(),
        bytes = bytes.len(),
        "image saved"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ProductRecord;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn task(n: usize) -> DownloadTask {
        DownloadTask {
            record: ProductRecord {
                name: format!("Item N-{}", n),
                price: n as u64,
                image_url: format!("http://shop.example/img/{}.jpg", n),
            },
            destination: PathBuf::from(format!("images/item-n_{}.jpg", n)),
        }
    }

    #[test]
    fn try_pop_is_fifo_and_signals_drained() {
        let queue = TaskQueue::new(vec![task(1), task(2)]);
        assert_eq!(queue.try_pop().unwrap().record.name, "Item N-1");
        assert_eq!(queue.try_pop().unwrap().record.name, "Item N-2");
        assert!(queue.try_pop().is_none());
    }

    #[test]
    fn concurrent_pops_hand_out_each_task_once() {
        let queue = Arc::new(TaskQueue::new((0..100).map(task).collect()));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let queue = Arc::clone(&queue);
            handles.push(std::thread::spawn(move || {
                let mut seen = Vec::new();
                while let Some(t) = queue.try_pop() {
                    seen.push(t.record.name);
                }
                seen
            }));
        }
        let mut all = Vec::new();
        for h in handles {
            all.extend(h.join().unwrap());
        }
        assert_eq!(all.len(), 100);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 100);
    }

    #[test]
    fn empty_task_list_short_circuits() {
        let report = run_downloads(Vec::new(), 4, None).unwrap();
        assert_eq!(report.completed, 0);
        assert!(report.failed.is_empty());
    }
}
