//! Mock pins, delays and streams for unit tests

use core::cell::RefCell;
use core::convert::Infallible;

use fwkit_hal::{CharStream, Level, PinControl, PinMode};
use heapless::{Deque, Vec};

/// Something a mock observed, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Mode(PinMode),
    Write(Level),
    DelayMs(u32),
}

pub type EventLog = RefCell<Vec<Event, 64>>;

/// Pin that records every call into a shared log
pub struct MockPin<'a> {
    log: &'a EventLog,
    pub mode: PinMode,
    /// Output register
    pub out: Level,
    /// Level an external device puts on the line while we are an input
    pub external: Level,
}

impl<'a> MockPin<'a> {
    pub fn new(log: &'a EventLog) -> Self {
        Self {
            log,
            mode: PinMode::Input,
            out: Level::High,
            external: Level::High,
        }
    }
}

impl PinControl for MockPin<'_> {
    fn set_mode(&mut self, mode: PinMode) {
        self.mode = mode;
        self.log.borrow_mut().push(Event::Mode(mode)).unwrap();
    }

    fn write(&mut self, level: Level) {
        self.out = level;
        self.log.borrow_mut().push(Event::Write(level)).unwrap();
    }

    fn read(&self) -> Level {
        match self.mode {
            PinMode::Output => self.out,
            PinMode::Input => self.external,
        }
    }
}

/// Delay that records the requested durations instead of waiting
pub struct MockDelay<'a> {
    log: &'a EventLog,
}

impl<'a> MockDelay<'a> {
    pub fn new(log: &'a EventLog) -> Self {
        Self { log }
    }
}

impl embedded_hal::delay::DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        embedded_hal::delay::DelayNs::delay_ms(self, ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms)).unwrap();
    }
}

impl embedded_hal_async::delay::DelayNs for MockDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        embedded_hal_async::delay::DelayNs::delay_ms(self, ns / 1_000_000).await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms)).unwrap();
    }
}

/// In-memory stream
///
/// Bytes in `input` are available immediately. Bytes in `trickle` arrive
/// one at a time, each time the caller yields.
pub struct MockStream {
    pub out: Vec<u8, 512>,
    pub input: Deque<u8, 32>,
    pub trickle: Deque<u8, 32>,
    pub yields: u32,
}

impl MockStream {
    pub fn new() -> Self {
        Self {
            out: Vec::new(),
            input: Deque::new(),
            trickle: Deque::new(),
            yields: 0,
        }
    }

    pub fn with_input(input: &[u8]) -> Self {
        let mut stream = Self::new();
        for &b in input {
            stream.input.push_back(b).unwrap();
        }
        stream
    }

    pub fn with_trickle(trickle: &[u8]) -> Self {
        let mut stream = Self::new();
        for &b in trickle {
            stream.trickle.push_back(b).unwrap();
        }
        stream
    }

    pub fn out_str(&self) -> &str {
        core::str::from_utf8(&self.out).unwrap()
    }
}

impl CharStream for MockStream {
    type Error = Infallible;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.out.push(byte).unwrap();
        Ok(())
    }

    fn available(&mut self) -> Result<usize, Self::Error> {
        Ok(self.input.len())
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        Ok(self.input.pop_front().unwrap())
    }

    fn yield_now(&mut self) {
        self.yields += 1;
        if let Some(b) = self.trickle.pop_front() {
            self.input.push_back(b).unwrap();
        }
    }
}

/// Stream whose writes always fail
pub struct BrokenStream;

#[derive(Debug, PartialEq, Eq)]
pub struct LinkDown;

impl CharStream for BrokenStream {
    type Error = LinkDown;

    fn write_byte(&mut self, _byte: u8) -> Result<(), Self::Error> {
        Err(LinkDown)
    }

    fn available(&mut self) -> Result<usize, Self::Error> {
        Err(LinkDown)
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        Err(LinkDown)
    }
}

/// `embedded-io-async` transport; reads return 0 once `rx` is drained
pub struct MockAsyncIo {
    pub rx: Deque<u8, 32>,
    pub tx: Vec<u8, 64>,
}

impl MockAsyncIo {
    pub fn new(input: &[u8]) -> Self {
        let mut rx = Deque::new();
        for &b in input {
            rx.push_back(b).unwrap();
        }
        Self { rx, tx: Vec::new() }
    }
}

impl embedded_io_async::ErrorType for MockAsyncIo {
    type Error = Infallible;
}

impl embedded_io_async::Read for MockAsyncIo {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        match (buf.first_mut(), self.rx.pop_front()) {
            (Some(slot), Some(b)) => {
                *slot = b;
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

impl embedded_io_async::Write for MockAsyncIo {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.tx.extend_from_slice(buf).unwrap();
        Ok(buf.len())
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
