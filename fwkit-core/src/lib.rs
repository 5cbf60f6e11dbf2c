//! Board-agnostic helpers for embedded firmware
//!
//! This crate contains small, stateless helpers written against the
//! capability traits in `fwkit-hal`:
//!
//! - GPIO conveniences (open-drain emulation, toggling, blink sequences)
//! - Stream formatting (hex rendering, wait-for-character, fluent chaining)
//! - A result-check combinator for execute-then-check control flow
//! - A [`Console`](console::Console) that binds the stream shorthands to
//!   one owned stream
//! - Configuration types

#![no_std]
#![deny(unsafe_code)]

pub mod check;
pub mod config;
pub mod console;
pub mod gpio;
pub mod hex;
pub mod stream;

#[cfg(test)]
pub(crate) mod mock;

pub use config::{BlinkConfig, HexStyle};
pub use console::Console;
pub use hex::{HexArray, HexBuffer, HexByte, HexDWord, HexWord};
pub use stream::{Emit, StreamExt};
