//! Console bound to a single stream
//!
//! Firmware usually has one debug port. [`Console`] owns it so call sites
//! can print hex dumps or wait for a key without passing the stream every
//! time.

use fwkit_hal::CharStream;

use crate::config::HexStyle;
use crate::stream::{self, Emit};

/// Line terminator written by [`Console::println`]
pub const LINE_ENDING: &str = "\r\n";

/// Shorthands over one owned [`CharStream`]
pub struct Console<S> {
    stream: S,
    style: HexStyle,
}

impl<S: CharStream> Console<S> {
    /// Create a console with plain hex buffer output
    pub fn new(stream: S) -> Self {
        Self::with_style(stream, HexStyle::Plain)
    }

    /// Create a console with the given buffer style
    pub fn with_style(stream: S, style: HexStyle) -> Self {
        Self { stream, style }
    }

    /// Buffer style used by [`print_buffer`](Self::print_buffer)
    pub fn style(&self) -> HexStyle {
        self.style
    }

    /// Change the buffer style
    pub fn set_style(&mut self, style: HexStyle) {
        self.style = style;
    }

    /// Borrow the underlying stream
    pub fn stream_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Give the stream back
    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Write any [`Emit`] value
    pub fn put<T: Emit>(&mut self, value: T) -> Result<&mut Self, S::Error> {
        value.emit(&mut self.stream)?;
        Ok(self)
    }

    /// Write a value followed by CR LF
    pub fn println<T: Emit>(&mut self, value: T) -> Result<&mut Self, S::Error> {
        value.emit(&mut self.stream)?;
        self.stream.write_str(LINE_ENDING)?;
        Ok(self)
    }

    /// Block until `c` arrives, see [`stream::wait_for`]
    pub fn wait_for(&mut self, c: u8) -> Result<&mut Self, S::Error> {
        stream::wait_for(&mut self.stream, c)?;
        Ok(self)
    }

    pub fn print_hex_byte(&mut self, data: u8) -> Result<&mut Self, S::Error> {
        stream::hex_byte(&mut self.stream, data)?;
        Ok(self)
    }

    pub fn print_hex_word(&mut self, data: u16) -> Result<&mut Self, S::Error> {
        stream::hex_word(&mut self.stream, data)?;
        Ok(self)
    }

    pub fn print_hex_dword(&mut self, data: u32) -> Result<&mut Self, S::Error> {
        stream::hex_dword(&mut self.stream, data)?;
        Ok(self)
    }

    /// Same as [`print_hex_dword`](Self::print_hex_dword)
    pub fn print_hex(&mut self, data: u32) -> Result<&mut Self, S::Error> {
        self.print_hex_dword(data)
    }

    pub fn print_hex_buffer(&mut self, buf: &[u8]) -> Result<&mut Self, S::Error> {
        stream::hex_buffer(&mut self.stream, buf)?;
        Ok(self)
    }

    pub fn print_hex_buffer_arr(&mut self, buf: &[u8]) -> Result<&mut Self, S::Error> {
        stream::hex_buffer_arr(&mut self.stream, buf)?;
        Ok(self)
    }

    /// Print a buffer in the configured [`HexStyle`]
    pub fn print_buffer(&mut self, buf: &[u8]) -> Result<&mut Self, S::Error> {
        match self.style {
            HexStyle::Plain => self.print_hex_buffer(buf),
            HexStyle::Array => self.print_hex_buffer_arr(buf),
        }
    }
}
