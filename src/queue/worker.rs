use super::entry::QueueEntry;
use super::{PreviewSink, QueueConfig};
use ahash::AHashSet;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::Instant;

/// Commands accepted by the queue worker task.
pub(super) enum Command {
    Enqueue(Box<QueueEntry>),
    SwapComplete(String),
    Destroy,
}

/// The queue's lifecycle, made explicit so every timer has exactly one
/// phase in which it may be armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing pending, nothing in flight.
    Idle,
    /// An entry is pending and the debounce timer is running.
    Debouncing,
    /// A batch is in flight, waiting for swap acknowledgements.
    AwaitingSwaps,
}

/// Owns all queue state and drives it from a single task. Serialization of
/// batches falls out of the structure: `apply` for the next batch can only
/// run from `complete_batch` of the previous one.
pub(super) struct Worker<S> {
    sink: S,
    config: QueueConfig,
    phase: Phase,
    pending: Option<QueueEntry>,
    processing: Option<QueueEntry>,
    pending_swaps: AHashSet<String>,
    debounce_deadline: Option<Instant>,
    swap_deadline: Option<Instant>,
}

impl<S: PreviewSink> Worker<S> {
    pub(super) fn new(config: QueueConfig, sink: S) -> Self {
        Self {
            sink,
            config,
            phase: Phase::Idle,
            pending: None,
            processing: None,
            pending_swaps: AHashSet::new(),
            debounce_deadline: None,
            swap_deadline: None,
        }
    }

    pub(super) async fn run(mut self, mut rx: UnboundedReceiver<Command>) {
        loop {
            let debounce = self.debounce_deadline;
            let swap = self.swap_deadline;

            tokio::select! {
                cmd = rx.recv() => match cmd {
                    Some(Command::Enqueue(entry)) => self.enqueue(*entry),
                    Some(Command::SwapComplete(slug)) => self.swap_complete(&slug),
                    // Destroy abandons all pending and in-flight work; no
                    // further callbacks fire.
                    Some(Command::Destroy) | None => break,
                },
                _ = sleep_until_opt(debounce), if debounce.is_some() => self.flush(),
                _ = sleep_until_opt(swap), if swap.is_some() => self.swap_timeout(),
            }
        }
    }

    fn enqueue(&mut self, entry: QueueEntry) {
        match self.pending.as_mut() {
            Some(held) => held.merge(entry),
            None => self.pending = Some(entry),
        }
        if self.phase == Phase::AwaitingSwaps {
            // The new entry waits for the in-flight batch; completion will
            // flush it without a fresh debounce window.
            return;
        }
        self.phase = Phase::Debouncing;
        self.debounce_deadline = Some(Instant::now() + self.config.debounce);
    }

    fn flush(&mut self) {
        self.debounce_deadline = None;
        debug_assert!(self.processing.is_none());
        let Some(entry) = self.pending.take() else {
            self.phase = Phase::Idle;
            return;
        };

        let required = self.sink.apply(&entry);
        self.processing = Some(entry);
        self.pending_swaps = required.into_iter().collect();

        if self.pending_swaps.is_empty() {
            self.complete_batch();
        } else {
            self.phase = Phase::AwaitingSwaps;
            self.swap_deadline = Some(Instant::now() + self.config.swap_timeout);
        }
    }

    fn swap_complete(&mut self, slug: &str) {
        if self.phase != Phase::AwaitingSwaps {
            return;
        }
        self.pending_swaps.remove(slug);
        if self.pending_swaps.is_empty() {
            self.complete_batch();
        }
    }

    /// Safety valve for a hung or crashed preview frame: treat the batch as
    /// done rather than failed.
    fn swap_timeout(&mut self) {
        let unacknowledged: Vec<&str> = self.pending_swaps.iter().map(String::as_str).collect();
        tracing::warn!(
            ?unacknowledged,
            "swap timeout elapsed, forcing batch completion"
        );
        self.complete_batch();
    }

    fn complete_batch(&mut self) {
        self.swap_deadline = None;
        self.pending_swaps.clear();
        let Some(entry) = self.processing.take() else {
            self.phase = Phase::Idle;
            return;
        };
        self.sink.batch_complete(entry);

        if self.pending.is_some() {
            self.flush();
        } else {
            self.phase = Phase::Idle;
        }
    }
}

/// A sleep that never resolves when no deadline is armed; the select
/// preconditions keep the disarmed branches from being polled.
async fn sleep_until_opt(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
