//! Shared test infrastructure for debounce-toggle integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use core::convert::Infallible;

use debounce_toggle::{DebouncedButton, Level, TimeDuration, TimeInstant, TimeSource};
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Pins
// ============================================================================

/// Input pin whose level is set by the test
pub struct MockPin {
    level: Level,
}

impl MockPin {
    /// Idle pull-up input
    pub fn new() -> Self {
        Self { level: Level::High }
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level == Level::High)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level == Level::Low)
    }
}

/// Input pin that always fails to read
pub struct FaultyPin;

impl ErrorType for FaultyPin {
    type Error = ErrorKind;
}

impl InputPin for FaultyPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(ErrorKind::Other)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(ErrorKind::Other)
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Press at `at`, release `hold` ms later. Returns the release time.
pub fn click(button: &DebouncedButton<TestInstant>, at: u64, hold: u64) -> u64 {
    button.on_level_change(Level::Low, TestInstant(at));
    button.on_level_change(Level::High, TestInstant(at + hold));
    at + hold
}
