//! Time abstraction traits for platform-agnostic timing.
//!
//! Also provides [`Millis`] and [`MillisDuration`], a ready-made pair for the
//! common case of a free-running 32-bit millisecond counter (e.g. a SysTick
//! driven `millis()`).

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations over wrapping counters must use wrapping subtraction so
    /// that a single counter overflow between the two instants is handled.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Millisecond duration backed by a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisDuration(pub u32);

impl MillisDuration {
    /// Creates a duration of `millis` milliseconds.
    pub const fn from_ms(millis: u32) -> Self {
        MillisDuration(millis)
    }
}

impl TimeDuration for MillisDuration {
    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    /// Values above `u32::MAX` saturate.
    fn from_millis(millis: u64) -> Self {
        MillisDuration(u32::try_from(millis).unwrap_or(u32::MAX))
    }
}

/// Instant read from a wrapping 32-bit millisecond counter.
///
/// The counter wraps after ~49.7 days; [`TimeInstant::duration_since`] stays
/// correct across one wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl Millis {
    /// Counter value zero, i.e. boot time.
    pub const ZERO: Millis = Millis(0);

    /// Returns the raw counter value.
    pub const fn as_millis(&self) -> u32 {
        self.0
    }
}

impl TimeInstant for Millis {
    type Duration = MillisDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        MillisDuration(self.0.wrapping_sub(earlier.0))
    }
}
