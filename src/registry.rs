//! Binding of buttons to the pins whose interrupts drive them.
//!
//! A single edge interrupt handler often serves several pins. Binding each
//! [`DebouncedButton`] to its [`PinId`] in a [`ButtonRegistry`] lets that
//! handler route every edge with one [`dispatch`](ButtonRegistry::dispatch)
//! call instead of a hand-written trampoline per button.

use heapless::Vec;

use crate::button::DebouncedButton;
use crate::time::TimeInstant;
use crate::types::Level;

/// Identifier of the input pin a button is wired to.
///
/// The numbering is the caller's choice (GPIO number, EXTI line, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub u8);

impl From<u8> for PinId {
    fn from(pin: u8) -> Self {
        PinId(pin)
    }
}

impl From<PinId> for u8 {
    fn from(pin: PinId) -> Self {
        pin.0
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// A button is already bound to this pin.
    DuplicatePin(PinId),

    /// The registry is full and cannot accept more bindings.
    RegistryFull,

    /// No button is bound to this pin.
    UnboundPin(PinId),
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RegistryError::DuplicatePin(pin) => {
                write!(f, "pin {} already has a button bound", pin.0)
            }
            RegistryError::RegistryFull => {
                write!(f, "registry is full, cannot bind more buttons")
            }
            RegistryError::UnboundPin(pin) => {
                write!(f, "no button bound to pin {}", pin.0)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RegistryError {}

/// Fixed-capacity pin to button routing table.
///
/// # Type Parameters
/// * `'b` - Lifetime of the bound buttons (usually `'static`)
/// * `I` - Time instant type
/// * `N` - Maximum number of bindings
pub struct ButtonRegistry<'b, I: TimeInstant, const N: usize> {
    bindings: Vec<(PinId, &'b DebouncedButton<I>), N>,
}

impl<'b, I: TimeInstant, const N: usize> ButtonRegistry<'b, I, N> {
    /// Creates an empty registry.
    pub const fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Binds `button` to `pin`.
    ///
    /// # Errors
    /// * `DuplicatePin` - A button is already bound to this pin
    /// * `RegistryFull` - All `N` slots are taken
    pub fn bind(&mut self, pin: PinId, button: &'b DebouncedButton<I>) -> Result<(), RegistryError> {
        if self.contains(pin) {
            return Err(RegistryError::DuplicatePin(pin));
        }

        self.bindings
            .push((pin, button))
            .map_err(|_| RegistryError::RegistryFull)
    }

    /// Routes a level change on `pin` to its button.
    ///
    /// # Errors
    /// * `UnboundPin` - No button is bound to this pin
    pub fn dispatch(&self, pin: PinId, level: Level, now: I) -> Result<(), RegistryError> {
        let button = self.button(pin).ok_or(RegistryError::UnboundPin(pin))?;
        button.on_level_change(level, now);
        Ok(())
    }

    /// Returns the button bound to `pin`, if any.
    pub fn button(&self, pin: PinId) -> Option<&'b DebouncedButton<I>> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == pin)
            .map(|(_, button)| *button)
    }

    /// Resets every bound button.
    pub fn reset_all(&self) {
        for (_, button) in &self.bindings {
            button.reset();
        }
    }

    /// Returns the number of bound buttons.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if no buttons are bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns true if a button is bound to `pin`.
    pub fn contains(&self, pin: PinId) -> bool {
        self.bindings.iter().any(|(bound, _)| *bound == pin)
    }
}

impl<I: TimeInstant, const N: usize> Default for ButtonRegistry<'_, I, N> {
    fn default() -> Self {
        Self::new()
    }
}
