//! Ordered resolution of asynchronous combat steps.
//!
//! Some combat actions break into several animated sub-steps: a sweep
//! hits each opposing card in turn, a brew heals each duck in turn. Each
//! sub-step may wait on the view before the next may begin. The
//! [`TaskQueue`] guarantees that ordering: one step at a time, in push
//! order, with a single completion callback at the end.
//!
//! ## Example Usage
//!
//! ```
//! use duck_duel::stack::TaskQueue;
//!
//! let mut queue: TaskQueue<u32> = TaskQueue::new();
//! queue.push(|total: &mut u32| Box::pin(async move { *total += 2 }));
//! queue.push(|total: &mut u32| Box::pin(async move { *total *= 10 }));
//!
//! let mut total = 1;
//! let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! runtime.block_on(queue.run(&mut total, |_| {}));
//!
//! // Strict order: (1 + 2) * 10
//! assert_eq!(total, 30);
//! ```

mod queue;

pub use queue::{StepFuture, TaskQueue};
