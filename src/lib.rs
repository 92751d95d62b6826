#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DebouncedButton`**: Push button fed from a pin interrupt, with latched press and long-press flags
//! - **`ButtonConfig`**: Debounce interval, long-press threshold and active level of a button
//! - **`ButtonRegistry`**: Routes edges from a shared interrupt handler to the button bound to each pin
//! - **`ToggleTimer`**: On/off state that flips every time its duration elapses, for blinking indicators
//! - **`TimeInstant`** / **`TimeDuration`**: Traits to implement for your timing system
//! - **`Millis`** / **`MillisDuration`**: Ready-made implementation over a wrapping `u32` millisecond counter
//!
//! Neither component reads a clock on its own: the current time is passed in by
//! the caller, which keeps both usable with any timer and with synthetic time in tests.

pub mod time;
pub mod types;
pub mod button;
pub mod toggle;
pub mod registry;

pub use types::{ButtonConfig, ConfigError, Level, DEFAULT_DEBOUNCE_MS, DEFAULT_LONG_PRESS_MS};
pub use time::{Millis, MillisDuration, TimeDuration, TimeInstant, TimeSource};
pub use button::{ButtonSnapshot, DebouncedButton};
pub use toggle::ToggleTimer;
pub use registry::{ButtonRegistry, PinId, RegistryError};
