//! RP2040-specific HAL for fwkit
//!
//! Implements the shared `fwkit-hal` traits on top of `embassy-rp`:
//!
//! - [`PinControl`](fwkit_hal::PinControl) for `embassy_rp::gpio::Flex`
//! - [`CharStream`](fwkit_hal::CharStream) for the buffered UART

#![no_std]

pub mod gpio;
pub mod uart;

// Re-export shared traits from fwkit-hal for convenience
pub use fwkit_hal::{CharStream, Level, PinControl, PinMode};
pub use uart::UartStream;
