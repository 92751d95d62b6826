//! Debounced push-button reader with press and long-press detection.
//!
//! Provides [`DebouncedButton`], which is fed raw level changes from a pin
//! interrupt and exposes latched press flags to the polling loop.

use core::cell::Cell;
use core::sync::atomic::{AtomicBool, Ordering};

use critical_section::Mutex;
use embedded_hal::digital::InputPin;

use crate::time::{TimeDuration, TimeInstant};
use crate::types::{ButtonConfig, Level};

/// Point-in-time copy of a button's flags.
///
/// Reading a snapshot does not consume the latched flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSnapshot {
    /// Current debounced level is the active level.
    pub is_pressed: bool,
    /// A release has been latched and not yet read.
    pub was_pressed: bool,
    /// A long-press release has been latched and not yet read.
    pub was_long_pressed: bool,
    /// The next accepted transition will clear all flags.
    pub reset_pending: bool,
}

/// Last accepted transition. Only touched from the level-change path.
#[derive(Clone, Copy)]
struct LineState<I> {
    level: Level,
    changed_at: I,
}

/// A push button debounced by a minimum interval between accepted transitions.
///
/// The interrupt handler for the button's pin calls
/// [`on_level_change`](Self::on_level_change) (or
/// [`on_pin_change`](Self::on_pin_change)) on every edge. The main loop reads
/// [`is_pressed`](Self::is_pressed), [`was_pressed`](Self::was_pressed) and
/// [`was_long_pressed`](Self::was_long_pressed). Every method takes `&self`,
/// so a button can be placed in a `static` and shared between both contexts.
///
/// Long presses are classified when the button is released, by comparing the
/// time since the press was accepted against the configured threshold.
///
/// # Type Parameters
/// * `I` - Time instant type
pub struct DebouncedButton<I: TimeInstant> {
    config: ButtonConfig<I::Duration>,
    line: Mutex<Cell<LineState<I>>>,
    is_pressed: AtomicBool,
    was_pressed: AtomicBool,
    was_long_pressed: AtomicBool,
    reset_pending: AtomicBool,
}

impl<I: TimeInstant> DebouncedButton<I> {
    /// Creates a released button with the default configuration.
    ///
    /// `now` is taken as the time of the last accepted transition, so edges
    /// within the debounce interval after construction are ignored.
    pub fn new(now: I) -> Self {
        Self::with_config(ButtonConfig::default(), now)
    }

    /// Creates a released button with the given configuration.
    pub const fn with_config(config: ButtonConfig<I::Duration>, now: I) -> Self {
        let released = config.active_level().inverted();

        Self {
            config,
            line: Mutex::new(Cell::new(LineState {
                level: released,
                changed_at: now,
            })),
            is_pressed: AtomicBool::new(false),
            was_pressed: AtomicBool::new(false),
            was_long_pressed: AtomicBool::new(false),
            reset_pending: AtomicBool::new(false),
        }
    }

    /// Returns the button's configuration.
    pub fn config(&self) -> &ButtonConfig<I::Duration> {
        &self.config
    }

    /// Returns the current debounced level. Does not clear anything.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.is_pressed.load(Ordering::Relaxed)
    }

    /// Returns `true` once per release, then clears the flag.
    pub fn was_pressed(&self) -> bool {
        take(&self.was_pressed)
    }

    /// Returns `true` once per release that ended a long press, then clears the flag.
    pub fn was_long_pressed(&self) -> bool {
        take(&self.was_long_pressed)
    }

    /// Clears the pressed state and arms a reset.
    ///
    /// The next accepted transition, whatever its direction, leaves all three
    /// flags false. The button's binding and timing are unaffected.
    pub fn reset(&self) {
        critical_section::with(|_| {
            self.reset_pending.store(true, Ordering::Relaxed);
            self.is_pressed.store(false, Ordering::Relaxed);
            self.was_pressed.store(false, Ordering::Relaxed);
        });
    }

    /// Returns all flags without consuming them.
    pub fn snapshot(&self) -> ButtonSnapshot {
        critical_section::with(|_| ButtonSnapshot {
            is_pressed: self.is_pressed.load(Ordering::Relaxed),
            was_pressed: self.was_pressed.load(Ordering::Relaxed),
            was_long_pressed: self.was_long_pressed.load(Ordering::Relaxed),
            reset_pending: self.reset_pending.load(Ordering::Relaxed),
        })
    }

    /// Handles a raw level change on the button's input.
    ///
    /// Intended to be called from the pin's edge interrupt with the level read
    /// at that moment. Edges arriving within the debounce interval of the last
    /// accepted transition are discarded entirely, as are edges that report the
    /// level already accepted.
    pub fn on_level_change(&self, level: Level, now: I) {
        critical_section::with(|cs| {
            let line = self.line.borrow(cs);
            let last = line.get();

            let elapsed = now.duration_since(last.changed_at);
            if elapsed.as_millis() <= self.config.debounce().as_millis() {
                return;
            }

            if level == last.level {
                return;
            }

            line.set(LineState {
                level,
                changed_at: now,
            });

            let pressed = level == self.config.active_level();
            self.is_pressed.store(pressed, Ordering::Relaxed);

            if pressed {
                // A fresh press cancels any stale long-press latch
                self.was_long_pressed.store(false, Ordering::Relaxed);
            } else {
                let long = elapsed.as_millis() > self.config.long_press().as_millis();
                self.was_pressed.store(true, Ordering::Relaxed);
                self.was_long_pressed.store(long, Ordering::Relaxed);
            }

            if self.reset_pending.load(Ordering::Relaxed) {
                self.reset_pending.store(false, Ordering::Relaxed);
                self.is_pressed.store(false, Ordering::Relaxed);
                self.was_pressed.store(false, Ordering::Relaxed);
                self.was_long_pressed.store(false, Ordering::Relaxed);
            }
        });
    }

    /// Reads `pin` and forwards its level to [`on_level_change`](Self::on_level_change).
    ///
    /// The pin is expected to be configured as an input with pull-up (or
    /// pull-down for active-high buttons) by the HAL.
    ///
    /// # Errors
    /// Returns the pin's error if the level cannot be read. No state is changed
    /// in that case.
    pub fn on_pin_change<P: InputPin>(&self, pin: &mut P, now: I) -> Result<(), P::Error> {
        let level = Level::from(pin.is_high()?);
        self.on_level_change(level, now);
        Ok(())
    }
}

/// Read-and-clear that cannot interleave with the interrupt path, including on
/// cores without atomic swap.
fn take(flag: &AtomicBool) -> bool {
    critical_section::with(|_| {
        let set = flag.load(Ordering::Relaxed);
        flag.store(false, Ordering::Relaxed);
        set
    })
}
