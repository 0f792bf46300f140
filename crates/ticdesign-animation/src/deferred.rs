//! One-shot deferred tasks on the single-threaded frame loop.
//!
//! Tasks are keyed by frame time rather than wall-clock time: the host calls
//! [`DeferredQueue::run_due`] with the current frame timestamp and every task
//! whose deadline has passed runs exactly once, in deadline order.

use crate::NANOS_PER_MILLI;

/// Handle for cancelling a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CancelToken(u64);

struct DeferredTask {
    token: CancelToken,
    due_nanos: u64,
    action: Box<dyn FnOnce()>,
}

/// Queue of fire-once actions.
#[derive(Default)]
pub struct DeferredQueue {
    tasks: Vec<DeferredTask>,
    next_id: u64,
}

impl std::fmt::Debug for DeferredQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredQueue")
            .field("pending", &self.tasks.len())
            .finish()
    }
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` to run `delay_millis` after `now_nanos`.
    pub fn schedule(
        &mut self,
        now_nanos: u64,
        delay_millis: u64,
        action: impl FnOnce() + 'static,
    ) -> CancelToken {
        self.next_id += 1;
        let token = CancelToken(self.next_id);
        let due_nanos = now_nanos.saturating_add(delay_millis.saturating_mul(NANOS_PER_MILLI));
        // Keep sorted by deadline; equal deadlines run in scheduling order.
        let at = self.tasks.partition_point(|task| task.due_nanos <= due_nanos);
        self.tasks.insert(
            at,
            DeferredTask {
                token,
                due_nanos,
                action: Box::new(action),
            },
        );
        token
    }

    /// Drops a pending task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, token: CancelToken) -> bool {
        match self.tasks.iter().position(|task| task.token == token) {
            Some(pos) => {
                self.tasks.remove(pos);
                log::debug!("deferred task {:?} cancelled", token);
                true
            }
            None => false,
        }
    }

    /// Runs `token`'s action now instead of at its deadline.
    pub fn run_now(&mut self, token: CancelToken) -> bool {
        match self.tasks.iter().position(|task| task.token == token) {
            Some(pos) => {
                let task = self.tasks.remove(pos);
                (task.action)();
                true
            }
            None => false,
        }
    }

    /// Runs every task due at or before `now_nanos`. Returns how many ran.
    pub fn run_due(&mut self, now_nanos: u64) -> usize {
        let due = self.tasks.partition_point(|task| task.due_nanos <= now_nanos);
        // Detach before running so an action can never observe a half-drained queue.
        let ready: Vec<DeferredTask> = self.tasks.drain(..due).collect();
        let count = ready.len();
        for task in ready {
            (task.action)();
        }
        count
    }

    pub fn is_pending(&self, token: CancelToken) -> bool {
        self.tasks.iter().any(|task| task.token == token)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
