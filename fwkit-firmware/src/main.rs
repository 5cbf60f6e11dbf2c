//! fwkit demo firmware
//!
//! Exercises the fwkit helpers on a Raspberry Pi Pico:
//!
//! - Boot blink on the on-board LED (GPIO25)
//! - Open-drain reset pulse on GPIO2
//! - Console on UART0 (GPIO0/GPIO1): waits for the sentinel key, dumps
//!   diagnostics as hex, then echoes every received byte in hex
//! - Heartbeat task toggling the LED

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Flex;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::{Delay, Duration, Instant, Ticker, Timer};
use embedded_io_async::Read;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use fwkit_core::check::check_result;
use fwkit_core::gpio::{blink_led_async, open_drain, toggle_pin};
use fwkit_core::stream::wait_for_async;
use fwkit_core::{Console, HexDWord, HexStyle};
use fwkit_hal::CharStream;
use fwkit_hal_rp2040::gpio::{led_pin, open_drain_line};
use fwkit_hal_rp2040::uart::{uart_stream, UartStream};

/// Settings generated from board.toml
mod board {
    use fwkit_core::BlinkConfig;
    use fwkit_hal::Level;

    include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
}

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Printed on the console at boot
const BANNER: &str = "fwkit demo";

/// Heartbeat interval
const HEARTBEAT_MS: u64 = 500;

type UartError = <UartStream as CharStream>::Error;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("fwkit firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Boot blink
    let mut led = led_pin(p.PIN_25, board::BLINK.on_level);
    blink_led_async(&mut led, &mut Delay, board::BLINK).await;
    info!(
        "Boot blink done ({} cycles, {} ms)",
        board::BLINK.count,
        board::BLINK.total_duration_ms()
    );

    // Reset pulse on the open-drain bus
    let mut bus = open_drain_line(p.PIN_2);
    open_drain(&mut bus, false);
    Timer::after_millis(board::BUS_RESET_PULSE_MS).await;
    open_drain(&mut bus, true);
    if bus.is_high() {
        info!("Bus released");
    } else {
        warn!("Bus still low after release, check the pull-up");
    }

    // Console
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = board::CONSOLE_BAUDRATE;

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let mut console = Console::with_style(uart_stream(uart), HexStyle::Array);
    info!("UART initialized for console");

    report(console.println(BANNER).map(|_| ()));

    info!(
        "Waiting for '{}' on the console",
        board::CONSOLE_SENTINEL as char
    );
    let waited = wait_for_async(console.stream_mut().inner_mut(), board::CONSOLE_SENTINEL).await;
    if check_result(waited, |e| error!("Console read failed: {:?}", e)).is_continue() {
        report(dump_diagnostics(&mut console));
    }

    spawner.spawn(heartbeat_task(led)).unwrap();
    info!("All tasks spawned");

    echo_hex(&mut console).await;
}

/// Print uptime and the build-time settings
fn dump_diagnostics(console: &mut Console<UartStream>) -> Result<(), UartError> {
    let uptime_ms = Instant::now().as_millis() as u32;

    console.println("")?.put("uptime_ms=")?.println(HexDWord(uptime_ms))?;
    console
        .put("banner={")?
        .print_buffer(BANNER.as_bytes())?
        .println(" }")?;
    console
        .put("sentinel=")?
        .print_hex_byte(board::CONSOLE_SENTINEL)?
        .put(" baud=")?
        .println(board::CONSOLE_BAUDRATE)?;
    Ok(())
}

/// Echo every received byte as two hex digits
async fn echo_hex(console: &mut Console<UartStream>) {
    let mut byte = [0u8; 1];
    loop {
        match console.stream_mut().inner_mut().read(&mut byte).await {
            Ok(0) => Timer::after_millis(1).await,
            Ok(_) => report(console.print_hex_byte(byte[0]).map(|_| ())),
            Err(e) => warn!("Console read error: {:?}", e),
        }
    }
}

/// Log console write failures and carry on
fn report(result: Result<(), UartError>) {
    let _ = check_result(result, |e| warn!("Console write failed: {:?}", e));
}

/// Toggle the LED forever
#[embassy_executor::task]
async fn heartbeat_task(mut led: Flex<'static>) {
    info!("Heartbeat task started");

    let mut ticker = Ticker::every(Duration::from_millis(HEARTBEAT_MS));
    loop {
        toggle_pin(&mut led);
        ticker.next().await;
    }
}
