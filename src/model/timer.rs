use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

pub type TimerCallback = Box<dyn FnOnce()>;

/// Schedules one-shot callbacks. Dropping the returned handle cancels the
/// callback if it has not fired yet.
pub trait TimerScheduler {
    type Handle;

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Self::Handle;
}

/// Browser timers backed by `setTimeout`.
#[cfg(feature = "yew")]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlooScheduler;

#[cfg(feature = "yew")]
impl TimerScheduler for GlooScheduler {
    type Handle = gloo::timers::callback::Timeout;

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Self::Handle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo::timers::callback::Timeout::new(millis, callback)
    }
}

struct PendingTimer {
    id: u64,
    deadline: Duration,
    callback: TimerCallback,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

/// Simulated clock. Timers only fire from [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

pub struct ManualTimer {
    id: u64,
    clock: Weak<RefCell<ManualClock>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            if let Ok(mut clock) = clock.try_borrow_mut() {
                clock.pending.retain(|timer| timer.id != self.id);
            }
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Moves the clock forward, firing due timers in deadline order.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let due = {
                let mut clock = self.clock.borrow_mut();
                let next = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.deadline <= target)
                    .min_by_key(|(_, timer)| (timer.deadline, timer.id))
                    .map(|(index, _)| index);
                next.map(|index| {
                    let timer = clock.pending.remove(index);
                    clock.now = timer.deadline;
                    timer.callback
                })
            };
            match due {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl TimerScheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> ManualTimer {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let deadline = clock.now + delay;
        clock.pending.push(PendingTimer {
            id,
            deadline,
            callback,
        });
        ManualTimer {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}
