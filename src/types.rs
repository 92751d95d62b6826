//! Core types for button configuration.

use crate::time::TimeDuration;

/// Logic level of a digital input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Input reads low.
    Low,

    /// Input reads high.
    High,
}

impl Level {
    /// Returns the opposite level.
    #[inline]
    pub const fn inverted(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    /// `true` maps to `High`, matching `InputPin::is_high`.
    fn from(is_high: bool) -> Self {
        if is_high { Level::High } else { Level::Low }
    }
}

/// Default debounce interval in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 50;

/// Default long-press threshold in milliseconds.
pub const DEFAULT_LONG_PRESS_MS: u64 = 1000;

/// Timing and polarity settings for a [`DebouncedButton`](crate::DebouncedButton).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonConfig<D: TimeDuration> {
    debounce: D,
    long_press: D,
    active_level: Level,
}

impl<D: TimeDuration> ButtonConfig<D> {
    /// Creates a configuration without validation.
    ///
    /// Usable in `static` initializers. See [`ButtonConfig::checked`] for the
    /// validating variant.
    pub const fn new(debounce: D, long_press: D, active_level: Level) -> Self {
        Self {
            debounce,
            long_press,
            active_level,
        }
    }

    /// Creates a configuration, rejecting a long-press threshold that does not
    /// exceed the debounce interval.
    pub fn checked(debounce: D, long_press: D, active_level: Level) -> Result<Self, ConfigError> {
        if long_press.as_millis() <= debounce.as_millis() {
            return Err(ConfigError::LongPressWithinDebounce);
        }

        Ok(Self::new(debounce, long_press, active_level))
    }

    /// Minimum interval between accepted transitions.
    #[inline]
    pub fn debounce(&self) -> D {
        self.debounce
    }

    /// Press duration beyond which a release counts as a long press.
    #[inline]
    pub fn long_press(&self) -> D {
        self.long_press
    }

    /// Level read while the button is held down.
    #[inline]
    pub const fn active_level(&self) -> Level {
        self.active_level
    }
}

impl<D: TimeDuration> Default for ButtonConfig<D> {
    /// 50 ms debounce, 1000 ms long press, active low (pull-up wiring).
    fn default() -> Self {
        Self::new(
            D::from_millis(DEFAULT_DEBOUNCE_MS),
            D::from_millis(DEFAULT_LONG_PRESS_MS),
            Level::Low,
        )
    }
}

/// Button configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Long-press threshold is not greater than the debounce interval.
    LongPressWithinDebounce,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::LongPressWithinDebounce => {
                write!(
                    f,
                    "long-press threshold must be greater than the debounce interval"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::MillisDuration;

    #[test]
    fn default_config_matches_pull_up_wiring() {
        let config = ButtonConfig::<MillisDuration>::default();

        assert_eq!(config.debounce(), MillisDuration(50));
        assert_eq!(config.long_press(), MillisDuration(1000));
        assert_eq!(config.active_level(), Level::Low);
    }

    #[test]
    fn checked_rejects_long_press_within_debounce() {
        let result = ButtonConfig::checked(MillisDuration(50), MillisDuration(50), Level::Low);
        assert_eq!(result, Err(ConfigError::LongPressWithinDebounce));

        let result = ButtonConfig::checked(MillisDuration(50), MillisDuration(51), Level::High);
        assert!(result.is_ok());
    }

    #[test]
    fn level_from_is_high() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert_eq!(Level::High.inverted(), Level::Low);
    }
}
