use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use slotmap::{SlotMap, new_key_type};
use web_time::Instant;

use crate::{Dispose, Runtime, current_scope};

// Runtime clock
pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock you drive by hand. Clones share the same time.
#[derive(Clone)]
pub struct ManualClock {
    t: Rc<Cell<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            t: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}

new_key_type! {
    pub struct TimerKey;
}

struct Timer {
    period: Duration,
    next_due: Instant,
    callback: Rc<dyn Fn()>,
}

#[derive(Default)]
pub(crate) struct Timers {
    table: SlotMap<TimerKey, Timer>,
}

impl Timers {
    pub(crate) fn insert(&mut self, period: Duration, now: Instant, cb: Rc<dyn Fn()>) -> TimerKey {
        self.table.insert(Timer {
            period,
            next_due: now + period,
            callback: cb,
        })
    }

    pub(crate) fn remove(&mut self, key: TimerKey) -> bool {
        self.table.remove(key).is_some()
    }

    /// Every tick due at `now`, oldest first. A timer that fell several
    /// periods behind yields one entry per missed period.
    pub(crate) fn due(&mut self, now: Instant) -> Vec<(Instant, TimerKey)> {
        let mut out = Vec::new();
        for (key, timer) in self.table.iter_mut() {
            while timer.next_due <= now {
                out.push((timer.next_due, key));
                timer.next_due += timer.period;
            }
        }
        out.sort_by_key(|(due, _)| *due);
        out
    }

    pub(crate) fn callback(&self, key: TimerKey) -> Option<Rc<dyn Fn()>> {
        self.table.get(key).map(|t| t.callback.clone())
    }

    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }
}

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Repeating timer on the current runtime. Runs `f` once per `period` until
/// the returned guard runs. `f` should read state when it fires (e.g. via
/// `Signal::update`), not capture it when the timer is created. Ticks run in
/// the scope that started the timer.
pub fn interval(period: Duration, f: impl Fn() + 'static) -> Dispose {
    let Some(rt) = Runtime::current() else {
        log::warn!("interval() outside of a runtime; the timer will never fire");
        return Dispose::noop();
    };
    let period = period.max(MIN_PERIOD);
    let tick: Rc<dyn Fn()> = match current_scope() {
        Some(scope) => Rc::new(move || scope.run(&f)),
        None => Rc::new(f),
    };
    let key = rt.timers.borrow_mut().insert(period, rt.now(), tick);
    log::debug!("interval {key:?} every {period:?}");

    let rt: Weak<Runtime> = Rc::downgrade(&rt);
    Dispose::new(move || {
        if let Some(rt) = rt.upgrade() {
            rt.timers.borrow_mut().remove(key);
            log::debug!("interval {key:?} cancelled");
        }
    })
}
