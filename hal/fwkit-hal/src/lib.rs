//! fwkit Hardware Abstraction Layer
//!
//! This crate defines the capability traits that the fwkit helpers are
//! written against. Chip-specific HALs (RP2040, host mocks, etc.) implement
//! them so the same helper code runs on every board.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (fwkit-firmware, etc.)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  fwkit-core (gpio / stream helpers)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  fwkit-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  fwkit-hal-   │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::PinControl`] - Direction switching plus level read/write
//! - [`stream::CharStream`] - Polled, bidirectional byte stream
//! - [`DelayNs`] - Blocking delays, re-exported from `embedded-hal`

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod stream;

// Re-export key traits at crate root for convenience
pub use embedded_hal::delay::DelayNs;
pub use gpio::{Level, PinControl, PinMode};
pub use stream::{CharStream, IoStream};
