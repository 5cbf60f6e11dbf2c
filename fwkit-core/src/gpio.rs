//! GPIO conveniences
//!
//! Stateless helpers over [`PinControl`]. The pin is borrowed for the call
//! only; ownership stays with the board code.

use embedded_hal::delay::DelayNs;
use fwkit_hal::{Level, PinControl, PinMode};

use crate::config::BlinkConfig;

/// Drive a line in open-drain (open-collector) fashion
///
/// The output register is set low first, so the pin can only ever sink:
/// - `released = true`: pin becomes a high-impedance input and the external
///   pull-up takes the line high
/// - `released = false`: pin becomes an output and pulls the line low
pub fn open_drain<P: PinControl + ?Sized>(pin: &mut P, released: bool) {
    pin.write(Level::Low);
    if released {
        pin.set_mode(PinMode::Input);
    } else {
        pin.set_mode(PinMode::Output);
    }
}

/// Flip the pin to the opposite of the level it currently reads
///
/// Read and write are separate operations; a change on the line between
/// them is lost.
pub fn toggle_pin<P: PinControl + ?Sized>(pin: &mut P) {
    let level = pin.read();
    pin.write(!level);
}

/// Blink an LED `config.count` times
///
/// Configures the pin as an output, then for each cycle drives the on
/// level, waits, drives the off level and waits again. Blocks the caller
/// for [`BlinkConfig::total_duration_ms`] and never yields.
///
/// ```ignore
/// // Three 300 ms blinks on an active-high LED
/// blink_led(&mut led, &mut delay, BlinkConfig::default());
/// ```
pub fn blink_led<P, D>(pin: &mut P, delay: &mut D, config: BlinkConfig)
where
    P: PinControl + ?Sized,
    D: DelayNs + ?Sized,
{
    pin.set_mode(PinMode::Output);
    for _ in 0..config.count {
        pin.write(config.on_level);
        delay.delay_ms(config.delay_ms);
        pin.write(config.off_level());
        delay.delay_ms(config.delay_ms);
    }
}

/// Async version of [`blink_led`]
///
/// Same level and delay sequence; other tasks run while the delays are
/// pending.
pub async fn blink_led_async<P, D>(pin: &mut P, delay: &mut D, config: BlinkConfig)
where
    P: PinControl + ?Sized,
    D: embedded_hal_async::delay::DelayNs + ?Sized,
{
    pin.set_mode(PinMode::Output);
    for _ in 0..config.count {
        pin.write(config.on_level);
        delay.delay_ms(config.delay_ms).await;
        pin.write(config.off_level());
        delay.delay_ms(config.delay_ms).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Event, EventLog, MockDelay, MockPin};

    #[test]
    fn test_open_drain_released() {
        let log = EventLog::default();
        let mut pin = MockPin::new(&log);
        pin.mode = PinMode::Output;

        open_drain(&mut pin, true);

        assert_eq!(pin.mode, PinMode::Input);
        assert_eq!(pin.out, Level::Low);
        // Register is cleared before the direction changes
        assert_eq!(
            log.borrow().as_slice(),
            &[Event::Write(Level::Low), Event::Mode(PinMode::Input)]
        );
    }

    #[test]
    fn test_open_drain_pulled_low() {
        let log = EventLog::default();
        let mut pin = MockPin::new(&log);

        open_drain(&mut pin, false);

        assert_eq!(pin.mode, PinMode::Output);
        assert_eq!(pin.read(), Level::Low);
        assert_eq!(
            log.borrow().as_slice(),
            &[Event::Write(Level::Low), Event::Mode(PinMode::Output)]
        );
    }

    #[test]
    fn test_open_drain_release_after_pull() {
        let log = EventLog::default();
        let mut pin = MockPin::new(&log);

        open_drain(&mut pin, false);
        assert!(pin.is_low());

        // Released line follows the external pull-up
        open_drain(&mut pin, true);
        assert_eq!(pin.mode, PinMode::Input);
        assert!(pin.is_high());
        assert_eq!(pin.out, Level::Low);
    }

    #[test]
    fn test_toggle_pin() {
        let log = EventLog::default();
        let mut pin = MockPin::new(&log);
        pin.mode = PinMode::Output;
        pin.out = Level::Low;

        toggle_pin(&mut pin);
        assert_eq!(pin.read(), Level::High);

        toggle_pin(&mut pin);
        assert_eq!(pin.read(), Level::Low);
    }

    #[test]
    fn test_toggle_twice_restores_level() {
        for start in [Level::Low, Level::High] {
            let log = EventLog::default();
            let mut pin = MockPin::new(&log);
            pin.mode = PinMode::Output;
            pin.out = start;

            toggle_pin(&mut pin);
            assert_eq!(pin.read(), !start);
            toggle_pin(&mut pin);
            assert_eq!(pin.read(), start);
        }
    }

    #[test]
    fn test_blink_sequence() {
        let log = EventLog::default();
        let mut pin = MockPin::new(&log);
        let mut delay = MockDelay::new(&log);

        blink_led(&mut pin, &mut delay, BlinkConfig::new(2, Level::High, 10));

        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::Mode(PinMode::Output),
                Event::Write(Level::High),
                Event::DelayMs(10),
                Event::Write(Level::Low),
                Event::DelayMs(10),
                Event::Write(Level::High),
                Event::DelayMs(10),
                Event::Write(Level::Low),
                Event::DelayMs(10),
            ]
        );

        let waited: u32 = log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::DelayMs(ms) => Some(*ms),
                _ => None,
            })
            .sum();
        assert_eq!(waited, 40);
    }

    #[test]
    fn test_blink_active_low() {
        let log = EventLog::default();
        let mut pin = MockPin::new(&log);
        let mut delay = MockDelay::new(&log);

        blink_led(&mut pin, &mut delay, BlinkConfig::new(1, Level::Low, 5));

        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::Mode(PinMode::Output),
                Event::Write(Level::Low),
                Event::DelayMs(5),
                Event::Write(Level::High),
                Event::DelayMs(5),
            ]
        );
        // Active-low LED ends up off
        assert_eq!(pin.out, Level::High);
    }

    #[test]
    fn test_blink_defaults() {
        let log = EventLog::default();
        let mut pin = MockPin::new(&log);
        let mut delay = MockDelay::new(&log);

        blink_led(&mut pin, &mut delay, BlinkConfig::default());

        let log = log.borrow();
        // Mode change + 3 cycles of (write, delay, write, delay)
        assert_eq!(log.len(), 1 + 3 * 4);
        assert!(log
            .iter()
            .all(|e| !matches!(e, Event::DelayMs(ms) if *ms != 300)));
    }

    #[test]
    fn test_blink_zero_count() {
        let log = EventLog::default();
        let mut pin = MockPin::new(&log);
        let mut delay = MockDelay::new(&log);

        blink_led(&mut pin, &mut delay, BlinkConfig::default().with_count(0));

        // Still configured as output, but nothing toggled
        assert_eq!(log.borrow().as_slice(), &[Event::Mode(PinMode::Output)]);
    }

    #[test]
    fn test_blink_async_matches_blocking() {
        let config = BlinkConfig::new(2, Level::High, 10);

        let blocking_log = EventLog::default();
        {
            let mut pin = MockPin::new(&blocking_log);
            let mut delay = MockDelay::new(&blocking_log);
            blink_led(&mut pin, &mut delay, config);
        }

        let async_log = EventLog::default();
        {
            let mut pin = MockPin::new(&async_log);
            let mut delay = MockDelay::new(&async_log);
            embassy_futures::block_on(blink_led_async(&mut pin, &mut delay, config));
        }

        assert_eq!(blocking_log.borrow().as_slice(), async_log.borrow().as_slice());
    }
}
