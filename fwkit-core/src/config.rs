//! Configuration types
//!
//! All types implement `Default` with the values the helpers use when the
//! caller does not care. With the `serde` feature they can be loaded from a
//! board config file; missing fields fall back to the defaults.

use fwkit_hal::Level;

/// Default number of blink cycles
pub const DEFAULT_BLINK_COUNT: u32 = 3;

/// Default time each blink phase is held (ms)
pub const DEFAULT_BLINK_DELAY_MS: u32 = 300;

/// Blink sequence parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BlinkConfig {
    /// Number of on/off cycles
    pub count: u32,
    /// Level that turns the LED on (High for active-high wiring)
    pub on_level: Level,
    /// Time each phase (on, then off) is held, in milliseconds
    pub delay_ms: u32,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_BLINK_COUNT,
            on_level: Level::High,
            delay_ms: DEFAULT_BLINK_DELAY_MS,
        }
    }
}

impl BlinkConfig {
    /// Create a blink configuration
    pub const fn new(count: u32, on_level: Level, delay_ms: u32) -> Self {
        Self {
            count,
            on_level,
            delay_ms,
        }
    }

    /// Set the number of cycles
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Set the level that turns the LED on
    pub fn with_on_level(mut self, on_level: Level) -> Self {
        self.on_level = on_level;
        self
    }

    /// Set the per-phase delay
    pub fn with_delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Level that turns the LED off
    pub fn off_level(&self) -> Level {
        !self.on_level
    }

    /// Total time a blink sequence blocks for (ms)
    ///
    /// Saturates at `u64::MAX` rather than wrapping.
    pub fn total_duration_ms(&self) -> u64 {
        (self.count as u64)
            .saturating_mul(2)
            .saturating_mul(self.delay_ms as u64)
    }
}

/// How a byte buffer is rendered as hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexStyle {
    /// Digits only: `0AFF`
    #[default]
    Plain,
    /// Array literal items: ` 0x0A, 0xFF,`
    Array,
}
