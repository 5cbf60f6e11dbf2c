//! Hexadecimal rendering
//!
//! Wrapper types that render integers and byte buffers as uppercase hex.
//! They implement [`core::fmt::Display`] for use with `write!` and
//! [`Emit`] for use in stream chains; both paths produce the same text as
//! the [`stream`](crate::stream) helpers.

use core::fmt::{self, Write as _};

use fwkit_hal::CharStream;

use crate::stream::{self, Emit};

/// Uppercase hex digits, indexed by nibble value
pub const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Prefix written before each byte in array style
pub const ARRAY_PREFIX: &str = " 0x";

/// Separator written after each byte in array style
pub const ARRAY_SUFFIX: u8 = b',';

/// The two ASCII hex digits of a byte, high nibble first
pub const fn hex_digits(data: u8) -> [u8; 2] {
    [
        HEX_DIGITS[((data & 0xF0) >> 4) as usize],
        HEX_DIGITS[(data & 0x0F) as usize],
    ]
}

fn fmt_byte(f: &mut fmt::Formatter<'_>, data: u8) -> fmt::Result {
    let [hi, lo] = hex_digits(data);
    f.write_char(hi as char)?;
    f.write_char(lo as char)
}

/// A byte rendered as two hex digits: `0A`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HexByte(pub u8);

/// A 16-bit word rendered as four hex digits, most significant first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HexWord(pub u16);

/// A 32-bit double word rendered as eight hex digits, most significant first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HexDWord(pub u32);

/// A buffer rendered as back-to-back hex digits: `0AFF`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HexBuffer<'a>(pub &'a [u8]);

/// A buffer rendered as array literal items: ` 0x0A, 0xFF,`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HexArray<'a>(pub &'a [u8]);

impl fmt::Display for HexByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_byte(f, self.0)
    }
}

impl fmt::Display for HexWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0.to_be_bytes() {
            fmt_byte(f, b)?;
        }
        Ok(())
    }
}

impl fmt::Display for HexDWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0.to_be_bytes() {
            fmt_byte(f, b)?;
        }
        Ok(())
    }
}

impl fmt::Display for HexBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0 {
            fmt_byte(f, b)?;
        }
        Ok(())
    }
}

impl fmt::Display for HexArray<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0 {
            f.write_str(ARRAY_PREFIX)?;
            fmt_byte(f, b)?;
            f.write_char(ARRAY_SUFFIX as char)?;
        }
        Ok(())
    }
}

impl Emit for HexByte {
    fn emit<S: CharStream + ?Sized>(&self, out: &mut S) -> Result<(), S::Error> {
        stream::hex_byte(out, self.0).map(|_| ())
    }
}

impl Emit for HexWord {
    fn emit<S: CharStream + ?Sized>(&self, out: &mut S) -> Result<(), S::Error> {
        stream::hex_word(out, self.0).map(|_| ())
    }
}

impl Emit for HexDWord {
    fn emit<S: CharStream + ?Sized>(&self, out: &mut S) -> Result<(), S::Error> {
        stream::hex_dword(out, self.0).map(|_| ())
    }
}

impl Emit for HexBuffer<'_> {
    fn emit<S: CharStream + ?Sized>(&self, out: &mut S) -> Result<(), S::Error> {
        stream::hex_buffer(out, self.0).map(|_| ())
    }
}

impl Emit for HexArray<'_> {
    fn emit<S: CharStream + ?Sized>(&self, out: &mut S) -> Result<(), S::Error> {
        stream::hex_buffer_arr(out, self.0).map(|_| ())
    }
}
