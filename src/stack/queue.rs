//! Sequential task queue.
//!
//! A `TaskQueue` holds asynchronous steps and runs them strictly one
//! after another against a shared context. A step is a function taking
//! the context and returning a future; the future resolving is the
//! step's "proceed" signal. Step N+1 is not even started until step
//! N has resolved, and `on_all_done` runs exactly once after the last.
//!
//! `run` consumes the queue, so steps cannot be pushed while it runs and
//! a drained queue cannot be reused. Steps own what they capture
//! (`'static`); everything they borrow comes through the context.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

/// The future a step returns. Borrows the context for its lifetime.
pub type StepFuture<'a> = Pin<Box<dyn Future<Output = ()> + 'a>>;

type Step<S> = Box<dyn for<'a> FnOnce(&'a mut S) -> StepFuture<'a>>;

/// An ordered list of pending asynchronous steps.
///
/// ## Example
///
/// ```
/// use duck_duel::stack::TaskQueue;
///
/// let mut queue: TaskQueue<Vec<u32>> = TaskQueue::new();
/// for i in 0..3 {
///     queue.push(move |log: &mut Vec<u32>| {
///         Box::pin(async move {
///             tokio::task::yield_now().await;
///             log.push(i);
///         })
///     });
/// }
///
/// let mut log = Vec::new();
/// let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// runtime.block_on(queue.run(&mut log, |log| log.push(99)));
///
/// assert_eq!(log, vec![0, 1, 2, 99]);
/// ```
pub struct TaskQueue<S> {
    steps: VecDeque<Step<S>>,
}

impl<S> TaskQueue<S> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self { steps: VecDeque::new() }
    }

    /// Append a step.
    pub fn push<F>(&mut self, step: F)
    where
        F: for<'a> FnOnce(&'a mut S) -> StepFuture<'a> + 'static,
    {
        self.steps.push_back(Box::new(step));
    }

    /// Number of pending steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Is the queue empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order, then `on_all_done`.
    pub async fn run(mut self, ctx: &mut S, on_all_done: impl FnOnce(&mut S)) {
        let mut progress = RunProgress {
            completed: 0,
            total: self.steps.len(),
        };

        while let Some(step) = self.steps.pop_front() {
            step(ctx).await;
            progress.completed += 1;
            tracing::trace!(completed = progress.completed, total = progress.total, "task step done");
        }

        on_all_done(ctx);
    }
}

/// Bookkeeping for one `run`. Dropped before every step resolved means a
/// step never signalled completion.
struct RunProgress {
    completed: usize,
    total: usize,
}

impl Drop for RunProgress {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            debug_assert!(
                self.completed == self.total,
                "task queue dropped with {} of {} steps completed",
                self.completed,
                self.total
            );
        }
    }
}

impl<S> Default for TaskQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> std::fmt::Debug for TaskQueue<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskQueue").field("pending", &self.steps.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Trace {
        events: Vec<String>,
        done_calls: u32,
    }

    #[tokio::test]
    async fn test_empty_queue_finishes_immediately() {
        let queue: TaskQueue<Trace> = TaskQueue::new();
        assert!(queue.is_empty());

        let mut trace = Trace::default();
        queue.run(&mut trace, |t| t.done_calls += 1).await;

        assert_eq!(trace.done_calls, 1);
        assert!(trace.events.is_empty());
    }

    #[tokio::test]
    async fn test_steps_never_overlap() {
        let mut queue: TaskQueue<Trace> = TaskQueue::new();
        for i in 0..4 {
            queue.push(move |t: &mut Trace| {
                Box::pin(async move {
                    t.events.push(format!("start {i}"));
                    // Yield a few times so an overlapping scheduler would interleave.
                    for _ in 0..3 {
                        tokio::task::yield_now().await;
                    }
                    t.events.push(format!("end {i}"));
                })
            });
        }
        assert_eq!(queue.len(), 4);

        let mut trace = Trace::default();
        queue
            .run(&mut trace, |t| {
                t.done_calls += 1;
                t.events.push("all done".to_string());
            })
            .await;

        let expected: Vec<String> = (0..4)
            .flat_map(|i| [format!("start {i}"), format!("end {i}")])
            .chain(std::iter::once("all done".to_string()))
            .collect();
        assert_eq!(trace.events, expected);
        assert_eq!(trace.done_calls, 1);
    }

    #[tokio::test]
    async fn test_later_steps_see_earlier_effects() {
        let mut queue: TaskQueue<Vec<u32>> = TaskQueue::new();
        queue.push(|values: &mut Vec<u32>| {
            Box::pin(async move {
                tokio::task::yield_now().await;
                values.push(1);
            })
        });
        queue.push(|values: &mut Vec<u32>| {
            Box::pin(async move {
                let last = values.last().copied().unwrap_or(0);
                values.push(last + 1);
            })
        });

        let mut values = Vec::new();
        queue.run(&mut values, |values| assert_eq!(values.len(), 2)).await;
        assert_eq!(values, vec![1, 2]);
    }

    #[cfg(debug_assertions)]
    #[tokio::test]
    #[should_panic(expected = "task queue dropped with 1 of 3 steps completed")]
    async fn test_step_that_never_completes_is_reported() {
        let mut queue: TaskQueue<Trace> = TaskQueue::new();
        queue.push(|t: &mut Trace| Box::pin(async move { t.events.push("first".to_string()) }));
        queue.push(|_: &mut Trace| Box::pin(std::future::pending::<()>()));
        queue.push(|t: &mut Trace| Box::pin(async move { t.events.push("never".to_string()) }));

        let mut trace = Trace::default();
        let run = queue.run(&mut trace, |t| t.done_calls += 1);
        let outcome = tokio::time::timeout(std::time::Duration::from_millis(20), run).await;
        assert!(outcome.is_err());
    }
}
