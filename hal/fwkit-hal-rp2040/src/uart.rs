//! UART support for RP2040
//!
//! The interrupt-driven buffered UART implements the blocking
//! `embedded-io` traits including `ReadReady`, which is everything
//! [`IoStream`] needs.

use embassy_rp::uart::BufferedUart;
use fwkit_hal::IoStream;

/// Character stream over a buffered UART
pub type UartStream = IoStream<BufferedUart>;

/// Wrap a buffered UART as a character stream
pub fn uart_stream(uart: BufferedUart) -> UartStream {
    IoStream::new(uart)
}
