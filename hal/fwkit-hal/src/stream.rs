//! Character stream abstractions
//!
//! A polled, bidirectional byte channel: a serial port, a USB CDC endpoint,
//! a display with a keypad, and so on. Helpers borrow a stream for the
//! duration of one call and never keep it.

/// Bidirectional, polled byte stream
pub trait CharStream {
    /// Error type for transport failures
    type Error;

    /// Write a single byte
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Write a string
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for byte in s.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Write a single character (UTF-8 encoded)
    fn write_char(&mut self, c: char) -> Result<(), Self::Error> {
        let mut buf = [0u8; 4];
        self.write_str(c.encode_utf8(&mut buf))
    }

    /// Number of bytes that can be read without blocking
    ///
    /// Streams that cannot report an exact count return 1 when at least
    /// one byte is pending.
    fn available(&mut self) -> Result<usize, Self::Error>;

    /// Read one byte
    ///
    /// Only called after [`available`](Self::available) reported data, so
    /// implementations may block if nothing is pending.
    fn read_byte(&mut self) -> Result<u8, Self::Error>;

    /// Give other cooperative work a chance to run while polling
    fn yield_now(&mut self) {
        core::hint::spin_loop();
    }
}

impl<T: CharStream + ?Sized> CharStream for &mut T {
    type Error = T::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        (**self).write_str(s)
    }

    fn available(&mut self) -> Result<usize, Self::Error> {
        (**self).available()
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        (**self).read_byte()
    }

    fn yield_now(&mut self) {
        (**self).yield_now();
    }
}

/// [`CharStream`] over any `embedded-io` transport
///
/// Works with anything that implements blocking `Read`, `Write` and
/// `ReadReady`, e.g. a buffered UART.
pub struct IoStream<T> {
    inner: T,
}

impl<T> IoStream<T> {
    /// Wrap an `embedded-io` transport
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped transport
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the wrapped transport
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwrap the transport
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> CharStream for IoStream<T>
where
    T: embedded_io::Read + embedded_io::Write + embedded_io::ReadReady,
{
    type Error = T::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.inner.write_all(&[byte])
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.inner.write_all(s.as_bytes())
    }

    fn available(&mut self) -> Result<usize, Self::Error> {
        Ok(usize::from(self.inner.read_ready()?))
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        // A zero-length read means "nothing yet", keep asking
        while self.inner.read(&mut buf)? == 0 {
            core::hint::spin_loop();
        }
        Ok(buf[0])
    }
}
