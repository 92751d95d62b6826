//! Periodic on/off state for blinking indicators.

use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Flips an on/off state every time a duration elapses.
///
/// While stopped the state is held on, so an indicator driven by
/// [`is_on`](Self::is_on) shows steady when idle and blinks when started.
/// The timer does not read a clock itself; callers poll
/// [`update`](Self::update) with the current time.
///
/// # Type Parameters
/// * `I` - Time instant type
#[derive(Debug, Clone, Copy)]
pub struct ToggleTimer<I: TimeInstant> {
    duration: I::Duration,
    is_on: bool,
    previous_state: bool,
    started: bool,
    toggled_at: Option<I>,
}

impl<I: TimeInstant> ToggleTimer<I> {
    /// Creates a stopped timer. The state reads off until the first `update`.
    pub const fn new(duration: I::Duration) -> Self {
        Self {
            duration,
            is_on: false,
            previous_state: false,
            started: false,
            toggled_at: None,
        }
    }

    /// Returns the current on/off state.
    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Returns true if the timer is toggling.
    #[inline]
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Returns the toggle interval.
    pub fn duration(&self) -> I::Duration {
        self.duration
    }

    /// Changes the toggle interval.
    ///
    /// The interval in progress keeps its start point; the new duration applies
    /// from the next `update`.
    pub fn set_duration(&mut self, duration: I::Duration) {
        self.duration = duration;
    }

    /// Starts toggling from the on state, measuring the first interval from `now`.
    pub fn start(&mut self, now: I) {
        self.is_on = true;
        self.started = true;
        self.toggled_at = Some(now);
    }

    /// Starts toggling, reading the current time from `clock`.
    pub fn start_with<T: TimeSource<I>>(&mut self, clock: &T) {
        self.start(clock.now());
    }

    /// Stops toggling and holds the state on.
    pub fn stop(&mut self) {
        self.is_on = true;
        self.started = false;
    }

    /// Advances the timer to `now`.
    ///
    /// When started, flips the state if more than the duration has passed since
    /// the last flip. When stopped, forces the state on.
    pub fn update(&mut self, now: I) {
        if !self.started {
            self.is_on = true;
            return;
        }

        if let Some(toggled_at) = self.toggled_at {
            let elapsed = now.duration_since(toggled_at);
            if elapsed.as_millis() > self.duration.as_millis() {
                self.toggled_at = Some(now);
                self.is_on = !self.is_on;
            }
        }
    }

    /// Advances the timer, reading the current time from `clock`.
    pub fn update_with<T: TimeSource<I>>(&mut self, clock: &T) {
        self.update(clock.now());
    }

    /// Returns true if the state differs from the last call, then records it.
    ///
    /// A second call without a state change in between returns false.
    pub fn has_state_changed(&mut self) -> bool {
        let changed = self.previous_state != self.is_on;
        self.previous_state = self.is_on;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{Millis, MillisDuration};

    #[test]
    fn new_timer_is_off_and_stopped() {
        let timer = ToggleTimer::<Millis>::new(MillisDuration(500));

        assert!(!timer.is_on());
        assert!(!timer.has_started());
        assert_eq!(timer.duration(), MillisDuration(500));
    }

    #[test]
    fn first_update_turns_idle_timer_on() {
        let mut timer = ToggleTimer::<Millis>::new(MillisDuration(500));

        timer.update(Millis(0));
        assert!(timer.is_on());
        assert!(timer.has_state_changed());
        assert!(!timer.has_state_changed());
    }

    #[test]
    fn interval_must_be_exceeded_to_flip() {
        let mut timer = ToggleTimer::<Millis>::new(MillisDuration(100));
        timer.start(Millis(0));

        timer.update(Millis(100));
        assert!(timer.is_on());

        timer.update(Millis(101));
        assert!(!timer.is_on());
    }

    #[test]
    fn toggles_across_counter_wrap() {
        let mut timer = ToggleTimer::<Millis>::new(MillisDuration(100));
        timer.start(Millis(u32::MAX - 50));

        timer.update(Millis(40));
        assert!(timer.is_on());

        timer.update(Millis(50));
        assert!(!timer.is_on());
    }

    #[test]
    fn stop_holds_state_on() {
        let mut timer = ToggleTimer::<Millis>::new(MillisDuration(100));
        timer.start(Millis(0));
        timer.update(Millis(101));
        assert!(!timer.is_on());

        timer.stop();
        assert!(timer.is_on());
        assert!(!timer.has_started());

        timer.update(Millis(500));
        assert!(timer.is_on());
    }
}
