//! Stream formatting helpers
//!
//! Every helper takes the stream by mutable reference and hands it back on
//! success, so calls chain with `?`:
//!
//! ```ignore
//! use fwkit_core::{HexWord, StreamExt};
//!
//! serial.put("id=")?.put(HexWord(0x3508))?.put("\r\n")?;
//! serial.wait_for(b'g')?.hex_buffer(&frame)?;
//! ```
//!
//! Errors from the underlying stream are passed through unchanged. Helpers
//! keep no state between calls.

use core::fmt;

use embedded_io_async::{Read, Write};
use fwkit_hal::CharStream;

use crate::hex::{hex_digits, ARRAY_PREFIX, ARRAY_SUFFIX};

/// Written once by [`wait_for`] before it starts polling
pub const PROGRESS_MARKER: u8 = b'.';

/// Write a progress marker, then block until `c` is read
///
/// Every other byte is discarded. While nothing is available the stream's
/// [`yield_now`](CharStream::yield_now) is called between polls. There is
/// no timeout: if `c` never arrives this never returns.
pub fn wait_for<S: CharStream + ?Sized>(stream: &mut S, c: u8) -> Result<&mut S, S::Error> {
    stream.write_byte(PROGRESS_MARKER)?;
    loop {
        while stream.available()? == 0 {
            stream.yield_now();
        }
        if stream.read_byte()? == c {
            break;
        }
    }
    Ok(stream)
}

/// Async version of [`wait_for`] over an `embedded-io-async` transport
///
/// The task suspends in `read` while the line is idle. A transport that
/// reports end-of-stream is polled again after a yield.
pub async fn wait_for_async<T>(io: &mut T, c: u8) -> Result<(), T::Error>
where
    T: Read + Write + ?Sized,
{
    io.write_all(&[PROGRESS_MARKER]).await?;
    let mut buf = [0u8; 1];
    loop {
        match io.read(&mut buf).await? {
            0 => embassy_futures::yield_now().await,
            _ if buf[0] == c => return Ok(()),
            _ => {}
        }
    }
}

/// Write a byte as two uppercase hex digits, high nibble first
pub fn hex_byte<S: CharStream + ?Sized>(stream: &mut S, data: u8) -> Result<&mut S, S::Error> {
    let [hi, lo] = hex_digits(data);
    stream.write_byte(hi)?;
    stream.write_byte(lo)?;
    Ok(stream)
}

/// Write a 16-bit word as four hex digits, high byte first
pub fn hex_word<S: CharStream + ?Sized>(stream: &mut S, data: u16) -> Result<&mut S, S::Error> {
    let [hi, lo] = data.to_be_bytes();
    hex_byte(stream, hi)?;
    hex_byte(stream, lo)
}

/// Write a 32-bit double word as eight hex digits, most significant byte
/// first regardless of host endianness
pub fn hex_dword<S: CharStream + ?Sized>(stream: &mut S, data: u32) -> Result<&mut S, S::Error> {
    for b in data.to_be_bytes() {
        hex_byte(stream, b)?;
    }
    Ok(stream)
}

/// Write every byte of `buf` as hex, no separators
///
/// An empty buffer writes nothing.
pub fn hex_buffer<'s, S: CharStream + ?Sized>(
    stream: &'s mut S,
    buf: &[u8],
) -> Result<&'s mut S, S::Error> {
    for &b in buf {
        hex_byte(stream, b)?;
    }
    Ok(stream)
}

/// Write every byte of `buf` as an array literal item: ` 0xXX,`
///
/// The output can be pasted straight into a source file. An empty buffer
/// writes nothing.
pub fn hex_buffer_arr<'s, S: CharStream + ?Sized>(
    stream: &'s mut S,
    buf: &[u8],
) -> Result<&'s mut S, S::Error> {
    for &b in buf {
        stream.write_str(ARRAY_PREFIX)?;
        hex_byte(stream, b)?;
        stream.write_byte(ARRAY_SUFFIX)?;
    }
    Ok(stream)
}

/// Something that can be written to a [`CharStream`]
pub trait Emit {
    /// Write `self` to the stream
    fn emit<S: CharStream + ?Sized>(&self, stream: &mut S) -> Result<(), S::Error>;
}

impl<T: Emit + ?Sized> Emit for &T {
    fn emit<S: CharStream + ?Sized>(&self, stream: &mut S) -> Result<(), S::Error> {
        (**self).emit(stream)
    }
}

/// Stream handles returned by other chained calls
///
/// Their output has already been written, so putting one into a chain
/// writes nothing and leaves the receiving stream untouched.
impl<T: CharStream + ?Sized> Emit for &mut T {
    fn emit<S: CharStream + ?Sized>(&self, _stream: &mut S) -> Result<(), S::Error> {
        Ok(())
    }
}

/// `None` writes nothing
impl<T: Emit> Emit for Option<T> {
    fn emit<S: CharStream + ?Sized>(&self, stream: &mut S) -> Result<(), S::Error> {
        match self {
            Some(value) => value.emit(stream),
            None => Ok(()),
        }
    }
}

impl Emit for str {
    fn emit<S: CharStream + ?Sized>(&self, stream: &mut S) -> Result<(), S::Error> {
        stream.write_str(self)
    }
}

impl Emit for char {
    fn emit<S: CharStream + ?Sized>(&self, stream: &mut S) -> Result<(), S::Error> {
        stream.write_char(*self)
    }
}

impl Emit for fmt::Arguments<'_> {
    fn emit<S: CharStream + ?Sized>(&self, stream: &mut S) -> Result<(), S::Error> {
        write_fmt(stream, *self)
    }
}

// Integers print in decimal
macro_rules! emit_decimal {
    ($($t:ty),*) => {
        $(
            impl Emit for $t {
                fn emit<S: CharStream + ?Sized>(&self, stream: &mut S) -> Result<(), S::Error> {
                    write_fmt(stream, format_args!("{}", self))
                }
            }
        )*
    };
}

emit_decimal!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Adapter that lets `core::fmt` machinery write into a [`CharStream`]
///
/// `fmt::Error` carries no payload, so the stream error is parked here
/// and handed back by [`write_fmt`].
struct FmtWriter<'a, S: CharStream + ?Sized> {
    stream: &'a mut S,
    error: Option<S::Error>,
}

impl<S: CharStream + ?Sized> fmt::Write for FmtWriter<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.stream.write_str(s).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

/// Write formatted text to a stream
///
/// A formatting error raised by a `Display` impl (rather than the stream)
/// truncates the output but is not reported.
pub fn write_fmt<S: CharStream + ?Sized>(
    stream: &mut S,
    args: fmt::Arguments<'_>,
) -> Result<(), S::Error> {
    let mut writer = FmtWriter {
        stream,
        error: None,
    };
    match fmt::write(&mut writer, args) {
        Ok(()) => Ok(()),
        Err(fmt::Error) => match writer.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        },
    }
}

/// Fluent, chainable access to the stream helpers
///
/// Implemented for every [`CharStream`].
pub trait StreamExt: CharStream {
    /// Write any [`Emit`] value
    fn put<T: Emit>(&mut self, value: T) -> Result<&mut Self, Self::Error> {
        value.emit(self)?;
        Ok(self)
    }

    /// Write formatted text, e.g. `put_fmt(format_args!("{}", n))`
    fn put_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<&mut Self, Self::Error> {
        write_fmt(self, args)?;
        Ok(self)
    }

    /// See [`wait_for`]
    fn wait_for(&mut self, c: u8) -> Result<&mut Self, Self::Error> {
        wait_for(self, c)
    }

    /// See [`hex_byte`]
    fn hex_byte(&mut self, data: u8) -> Result<&mut Self, Self::Error> {
        hex_byte(self, data)
    }

    /// See [`hex_word`]
    fn hex_word(&mut self, data: u16) -> Result<&mut Self, Self::Error> {
        hex_word(self, data)
    }

    /// See [`hex_dword`]
    fn hex_dword(&mut self, data: u32) -> Result<&mut Self, Self::Error> {
        hex_dword(self, data)
    }

    /// See [`hex_buffer`]
    fn hex_buffer(&mut self, buf: &[u8]) -> Result<&mut Self, Self::Error> {
        hex_buffer(self, buf)
    }

    /// See [`hex_buffer_arr`]
    fn hex_buffer_arr(&mut self, buf: &[u8]) -> Result<&mut Self, Self::Error> {
        hex_buffer_arr(self, buf)
    }
}

impl<S: CharStream + ?Sized> StreamExt for S {}
