//! Browser repeating timers for the session display refresh.

use gloo_timers::callback::Interval;
use reading_tracker::Scheduler;

/// `setInterval` scheduler; dropping the returned [`Interval`] clears it
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Task = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, tick)
    }
}
