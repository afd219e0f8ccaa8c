//! The live-preview update queue.
//!
//! File-watcher events arrive in rapid bursts during a save, and preview
//! swaps (iframe content replacement) are asynchronous and must not
//! interleave. The queue debounces incoming entries into one batch, keeps a
//! single batch in flight, and waits for each page/block to acknowledge its
//! swap (or for the swap timeout) before the next batch flushes.
//!
//! ```no_run
//! use fieldgate::queue::{PreviewSink, QueueConfig, QueueEntry, UpdateQueue};
//!
//! struct Renderer;
//!
//! impl PreviewSink for Renderer {
//!     fn apply(&mut self, entry: &QueueEntry) -> Vec<String> {
//!         // Push the batch to the preview and return the identifiers
//!         // that must acknowledge their swap.
//!         entry.changed_pages.clone()
//!     }
//!     fn batch_complete(&mut self, _entry: QueueEntry) {}
//! }
//!
//! # async fn example() {
//! let queue = UpdateQueue::spawn(QueueConfig::default(), Renderer);
//! queue.enqueue(QueueEntry::default());
//! // ...the renderer later acknowledges each swap:
//! queue.report_swap_complete("page-1");
//! # }
//! ```

mod entry;
mod worker;

pub use entry::{BlockUpdate, PageUpdate, PreloadBlock, QueueEntry};

use std::time::Duration;
use tokio::sync::mpsc;
use worker::{Command, Worker};

/// Timing knobs for the queue.
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// How long to keep coalescing after the last enqueue before flushing.
    pub debounce: Duration,
    /// How long to wait for swap acknowledgements before forcing completion.
    pub swap_timeout: Duration,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(50),
            swap_timeout: Duration::from_secs(8),
        }
    }
}

/// The seam to the live-preview renderer.
pub trait PreviewSink: Send + 'static {
    /// Applies a flushed batch and returns the identifiers (page slugs,
    /// block names) that must report a completed swap. Returning an empty
    /// vec completes the batch immediately.
    fn apply(&mut self, entry: &QueueEntry) -> Vec<String>;

    /// Called exactly once per flushed batch, after every swap has been
    /// acknowledged or the swap timeout fired.
    fn batch_complete(&mut self, entry: QueueEntry);
}

/// Handle to a spawned update queue.
///
/// All methods are non-blocking command sends. After [`destroy`] (or once
/// the worker is gone) they become silent no-ops.
///
/// [`destroy`]: UpdateQueue::destroy
#[derive(Debug)]
pub struct UpdateQueue {
    tx: mpsc::UnboundedSender<Command>,
}

impl UpdateQueue {
    /// Spawns the queue worker on the current tokio runtime.
    pub fn spawn<S: PreviewSink>(config: QueueConfig, sink: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(Worker::new(config, sink).run(rx));
        Self { tx }
    }

    /// Merges an entry into the accumulating batch and (re)starts the
    /// debounce window, unless a batch is currently in flight.
    pub fn enqueue(&self, entry: QueueEntry) {
        let _ = self.tx.send(Command::Enqueue(Box::new(entry)));
    }

    /// Acknowledges that the preview finished swapping the given
    /// page/block. Unknown identifiers and calls outside an in-flight
    /// batch are no-ops.
    pub fn report_swap_complete(&self, slug: &str) {
        let _ = self.tx.send(Command::SwapComplete(slug.to_string()));
    }

    /// Tears the queue down. Pending and in-flight work is abandoned and no
    /// further callbacks fire.
    pub fn destroy(&self) {
        let _ = self.tx.send(Command::Destroy);
    }
}
