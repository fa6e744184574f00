//! Timer abstraction behind the debounce window.
//!
//! The observer never sleeps or spawns threads. It hands deferred work to a
//! `Scheduler`; the host decides when that work runs (`setTimeout` in the
//! browser, a virtual clock in tests).

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

/// Deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Runs tasks after a delay on the current thread.
pub trait Scheduler {
    /// Schedules `task` to run once, `delay_ms` milliseconds from now.
    fn schedule(&self, delay_ms: u32, task: Task);
}

struct ScheduledTask {
    due: u64,
    seq: u64,
    task: Task,
}

/// A scheduler driven by a virtual clock.
///
/// Nothing runs until the clock is advanced. Tasks run in due-time order,
/// FIFO among equal due times. Tasks scheduled while the clock advances are
/// picked up in the same call when they fall due.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use vista_reactive::{ManualScheduler, Scheduler};
///
/// let scheduler = ManualScheduler::new();
/// let fired = Rc::new(Cell::new(false));
/// let fired_clone = fired.clone();
/// scheduler.schedule(10, Box::new(move || fired_clone.set(true)));
///
/// scheduler.advance(9);
/// assert!(!fired.get());
/// scheduler.advance(1);
/// assert!(fired.get());
/// ```
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    next_seq: Cell<u64>,
    queue: RefCell<Vec<ScheduledTask>>,
}

impl ManualScheduler {
    /// Creates a scheduler at time 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current virtual time in milliseconds.
    #[inline]
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    /// Returns the number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Advances the clock by `ms`, running every task that falls due.
    ///
    /// Returns the number of tasks run.
    pub fn advance(&self, ms: u64) -> usize {
        let target = self.now.get() + ms;
        let mut ran = 0;
        while let Some(scheduled) = self.take_next(Some(target)) {
            self.now.set(scheduled.due.max(self.now.get()));
            (scheduled.task)();
            ran += 1;
        }
        self.now.set(target);
        ran
    }

    /// Runs tasks until the queue is empty, moving the clock as needed.
    ///
    /// Returns the number of tasks run.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while let Some(scheduled) = self.take_next(None) {
            self.now.set(scheduled.due.max(self.now.get()));
            (scheduled.task)();
            ran += 1;
        }
        ran
    }

    /// Removes the earliest task due at or before `limit`.
    ///
    /// The queue borrow ends before the task runs.
    fn take_next(&self, limit: Option<u64>) -> Option<ScheduledTask> {
        let mut queue = self.queue.borrow_mut();
        let index = queue
            .iter()
            .enumerate()
            .filter(|(_, scheduled)| limit.map_or(true, |limit| scheduled.due <= limit))
            .min_by_key(|(_, scheduled)| (scheduled.due, scheduled.seq))
            .map(|(index, _)| index)?;
        Some(queue.remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.queue.borrow_mut().push(ScheduledTask {
            due: self.now.get() + u64::from(delay_ms),
            seq,
            task,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;

    #[test]
    fn test_nothing_runs_before_due() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        scheduler.schedule(10, Box::new(move || count_clone.set(count_clone.get() + 1)));

        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.advance(5), 0);
        assert_eq!(count.get(), 0);
        assert_eq!(scheduler.now(), 5);

        assert_eq!(scheduler.advance(5), 1);
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_due_order_then_fifo() {
        let scheduler = ManualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for (delay, label) in [(10, "b"), (5, "a"), (10, "c")] {
            let order = order.clone();
            scheduler.schedule(delay, Box::new(move || order.borrow_mut().push(label)));
        }

        scheduler.advance(10);
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_nested_schedule_within_window() {
        let scheduler = Rc::new(ManualScheduler::new());
        let fired_at = Rc::new(Cell::new(0));

        let inner_scheduler = scheduler.clone();
        let fired_clone = fired_at.clone();
        scheduler.schedule(
            2,
            Box::new(move || {
                let sched = inner_scheduler.clone();
                let fired = fired_clone.clone();
                inner_scheduler.schedule(3, Box::new(move || fired.set(sched.now())));
            }),
        );

        assert_eq!(scheduler.advance(10), 2);
        assert_eq!(fired_at.get(), 5);
    }

    #[test]
    fn test_run_until_idle() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        for delay in [100, 1, 50] {
            let count = count.clone();
            scheduler.schedule(delay, Box::new(move || count.set(count.get() + 1)));
        }

        assert_eq!(scheduler.run_until_idle(), 3);
        assert_eq!(count.get(), 3);
        assert_eq!(scheduler.now(), 100);
    }
}
