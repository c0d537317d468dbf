//! Animated stat counters: a fixed-framerate interpolation from zero up to
//! a `data-target` value, started the first time the stat scrolls into view.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::Element;

use crate::config;
use crate::reveal::{ObserveOptions, Watcher};

/// Stepwise interpolation toward a target count. Each tick reports the
/// value to display; once the running value reaches the target the
/// schedule snaps to exactly the target and stays done.
pub struct CounterSchedule {
    target: i64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterSchedule {
    pub fn new(target: i64, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = (duration_ms / frame_ms.max(1)).max(1) as f64;
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
            done: false,
        }
    }

    pub fn tick(&mut self) -> i64 {
        if self.done {
            return self.target.max(0);
        }
        // A non-positive target would never cross the finish line through
        // accumulation; it completes on the first tick instead.
        if self.target <= 0 {
            self.done = true;
            return self.target.max(0);
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.done = true;
            self.target
        } else {
            self.current.floor() as i64
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Drives a schedule against an element's text content on a 16ms interval;
/// the interval disarms itself once the schedule completes.
pub fn animate_element(element: Element, target: i64) {
    let schedule = Rc::new(RefCell::new(CounterSchedule::new(
        target,
        config::COUNTER_DURATION_MS,
        config::COUNTER_FRAME_MS,
    )));
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let handle_clone = handle.clone();

    let interval = Interval::new(config::COUNTER_FRAME_MS, move || {
        let value = schedule.borrow_mut().tick();
        element.set_text_content(Some(&value.to_string()));
        if schedule.borrow().is_done() {
            if let Some(interval) = handle_clone.borrow_mut().take() {
                drop(interval);
            }
        }
    });
    *handle.borrow_mut() = Some(interval);
}

/// Watches `.stat-item` blocks and animates their `.stat-number` child the
/// first time one becomes visible.
pub fn observe_stats() -> Option<Watcher> {
    let options = ObserveOptions {
        threshold: config::STATS_OBSERVER_THRESHOLD,
        root_margin: "0px",
    };
    Watcher::mount(".stat-item", options, |item| {
        if let Ok(Some(number)) = item.query_selector(".stat-number") {
            let target = number
                .get_attribute("data-target")
                .and_then(|raw| raw.parse::<i64>().ok())
                .unwrap_or(0);
            animate_element(number, target);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(schedule: &mut CounterSchedule) -> (i64, u32) {
        let mut last = 0;
        let mut ticks = 0;
        while !schedule.is_done() {
            last = schedule.tick();
            ticks += 1;
            assert!(ticks < 10_000, "schedule failed to terminate");
        }
        (last, ticks)
    }

    #[test]
    fn counter_lands_exactly_on_target() {
        let mut schedule = CounterSchedule::new(100, 2000, 16);
        let (last, _) = run_to_completion(&mut schedule);
        assert_eq!(last, 100);
    }

    #[test]
    fn counter_never_exceeds_target() {
        let mut schedule = CounterSchedule::new(100, 2000, 16);
        while !schedule.is_done() {
            assert!(schedule.tick() <= 100);
        }
    }

    #[test]
    fn first_tick_matches_increment_floor() {
        // 2000ms / 16ms = 125 frames, so the increment is 0.8 per tick and
        // the first few displayed values stay at 0.
        let mut schedule = CounterSchedule::new(100, 2000, 16);
        assert_eq!(schedule.tick(), 0);
        assert_eq!(schedule.tick(), 1);
    }

    #[test]
    fn zero_target_completes_on_first_tick() {
        let mut schedule = CounterSchedule::new(0, 2000, 16);
        assert_eq!(schedule.tick(), 0);
        assert!(schedule.is_done());
    }

    #[test]
    fn negative_target_clamps_to_zero_display() {
        let mut schedule = CounterSchedule::new(-5, 2000, 16);
        assert_eq!(schedule.tick(), 0);
        assert!(schedule.is_done());
    }

    #[test]
    fn done_schedule_keeps_reporting_target() {
        let mut schedule = CounterSchedule::new(3, 300, 100);
        let (last, _) = run_to_completion(&mut schedule);
        assert_eq!(last, 3);
        assert_eq!(schedule.tick(), 3);
    }
}
