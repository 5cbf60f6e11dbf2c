//! GPIO support for RP2040
//!
//! `Flex` is the only embassy-rp pin type that can switch direction at
//! runtime, so it is the one that gets [`PinControl`].

use embassy_rp::gpio::{self, Flex, Pull};
use embassy_rp::Peri;
use fwkit_hal::{Level, PinControl, PinMode};

impl PinControl for Flex<'_> {
    fn set_mode(&mut self, mode: PinMode) {
        match mode {
            PinMode::Input => self.set_as_input(),
            PinMode::Output => self.set_as_output(),
        }
    }

    fn write(&mut self, level: Level) {
        self.set_level(to_rp_level(level));
    }

    fn read(&self) -> Level {
        Level::from(self.is_high())
    }
}

/// Convert to the embassy-rp level type
pub fn to_rp_level(level: Level) -> gpio::Level {
    match level {
        Level::Low => gpio::Level::Low,
        Level::High => gpio::Level::High,
    }
}

/// Convert from the embassy-rp level type
pub fn from_rp_level(level: gpio::Level) -> Level {
    match level {
        gpio::Level::Low => Level::Low,
        gpio::Level::High => Level::High,
    }
}

/// Create a line for open-drain use
///
/// The pin starts released (input, output register low) with the internal
/// pull-up enabled, for buses without an external pull-up.
pub fn open_drain_line<'d>(pin: Peri<'d, impl gpio::Pin>) -> Flex<'d> {
    let mut flex = Flex::new(pin);
    flex.set_pull(Pull::Up);
    flex.set_low();
    flex.set_as_input();
    flex
}

/// Create a pin for an LED, configured as an output at its off level
pub fn led_pin<'d>(pin: Peri<'d, impl gpio::Pin>, on_level: Level) -> Flex<'d> {
    let mut flex = Flex::new(pin);
    flex.set_level(to_rp_level(!on_level));
    flex.set_as_output();
    flex
}
