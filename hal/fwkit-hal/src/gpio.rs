//! GPIO pin abstractions
//!
//! `embedded-hal` splits pins into input and output types. Open-drain
//! emulation needs to flip a single line between the two at runtime, so the
//! helpers use this smaller trait instead.

use core::ops::Not;

/// Logic level of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// Logic 0
    #[default]
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Check if this is the high level
    pub fn is_high(self) -> bool {
        self == Level::High
    }

    /// Check if this is the low level
    pub fn is_low(self) -> bool {
        self == Level::Low
    }
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinMode {
    /// High impedance input
    Input,
    /// Push-pull output
    Output,
}

/// Digital pin whose direction can be changed at runtime
///
/// Implementations handle the hardware register access for the specific
/// chip. Writing a level while the pin is an input only updates the output
/// register; the line is not driven until the pin becomes an output.
pub trait PinControl {
    /// Configure the pin direction
    fn set_mode(&mut self, mode: PinMode);

    /// Write the output register
    fn write(&mut self, level: Level);

    /// Read the level currently present on the line
    fn read(&self) -> Level;

    /// Drive the pin high (logic 1)
    fn set_high(&mut self) {
        self.write(Level::High);
    }

    /// Drive the pin low (logic 0)
    fn set_low(&mut self) {
        self.write(Level::Low);
    }

    /// Check if the line reads high
    fn is_high(&self) -> bool {
        self.read().is_high()
    }

    /// Check if the line reads low
    fn is_low(&self) -> bool {
        self.read().is_low()
    }
}

impl<T: PinControl + ?Sized> PinControl for &mut T {
    fn set_mode(&mut self, mode: PinMode) {
        (**self).set_mode(mode);
    }

    fn write(&mut self, level: Level) {
        (**self).write(level);
    }

    fn read(&self) -> Level {
        (**self).read()
    }
}
