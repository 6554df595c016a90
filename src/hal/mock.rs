//! Mock implementations for testing without hardware.
//!
//! This module provides test doubles for the hardware traits, enabling
//! development and testing on desktop without a physical encoder.
//!
//! # Available Mocks
//!
//! | Mock | Trait | Purpose |
//! |------|-------|---------|
//! | [`MockPulseCounter`] | [`PulseCounter`] | Settable count, records rebases |
//! | [`MockPin`] | [`InputPin`] | Settable logic level |
//!
//! # Example
//!
//! ```rust
//! use pendant_encoder::{EncoderConfig, EncoderReader};
//! use pendant_encoder::hal::MockPulseCounter;
//!
//! let config = EncoderConfig::default().with_pulses_per_click(1);
//! let mut reader = EncoderReader::new(MockPulseCounter::new(), &config).unwrap();
//!
//! reader.counter_mut().set(100);
//! assert_eq!(reader.read_delta(), 100);
//!
//! // Verify via counter state
//! assert_eq!(reader.counter().count, 0);
//! assert_eq!(reader.counter().write_count, 1);
//! ```
//!
//! [`PulseCounter`]: crate::traits::PulseCounter
//! [`InputPin`]: embedded_hal::digital::InputPin

use core::convert::Infallible;

use critical_section::CriticalSection;
use embedded_hal::digital::{ErrorType, InputPin};

use crate::traits::PulseCounter;

// ============================================================================
// Pulse Counter Mock
// ============================================================================

/// Mock pulse counter for testing.
///
/// Stands in for the interrupt-driven counter. Move the count with
/// [`set`](Self::set) or [`advance`](Self::advance) between polls, then
/// inspect the public fields to see what the reader wrote back.
///
/// # Example
///
/// ```rust
/// use pendant_encoder::hal::MockPulseCounter;
/// use pendant_encoder::traits::PulseCounter;
///
/// let mut counter = MockPulseCounter::new().with_count(10);
/// counter.advance(-4);
///
/// critical_section::with(|cs| {
///     assert_eq!(counter.read(cs), 6);
///     counter.write(cs, 0);
/// });
///
/// assert_eq!(counter.read_count, 1);
/// assert_eq!(counter.write_count, 1);
/// assert_eq!(counter.last_write, Some(0));
/// ```
#[derive(Debug, Default)]
pub struct MockPulseCounter {
    /// Current raw pulse count.
    pub count: i32,
    /// Number of times `read` was called.
    pub read_count: usize,
    /// Number of times `write` was called.
    pub write_count: usize,
    /// Value passed to the most recent `write`.
    pub last_write: Option<i32>,
}

impl MockPulseCounter {
    /// Creates a new mock counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock counter with the specified starting count.
    pub fn with_count(mut self, count: i32) -> Self {
        self.count = count;
        self
    }

    /// Set the raw count, as if the encoder had moved to it.
    pub fn set(&mut self, count: i32) {
        self.count = count;
    }

    /// Simulate `pulses` edges (negative for the other direction).
    pub fn advance(&mut self, pulses: i32) {
        self.count += pulses;
    }
}

impl PulseCounter for MockPulseCounter {
    fn read(&mut self, _cs: CriticalSection<'_>) -> i32 {
        self.read_count += 1;
        self.count
    }

    fn write(&mut self, _cs: CriticalSection<'_>, value: i32) {
        self.count = value;
        self.write_count += 1;
        self.last_write = Some(value);
    }
}

// ============================================================================
// Pin Mock
// ============================================================================

/// Mock digital input pin.
///
/// # Example
///
/// ```rust
/// use embedded_hal::digital::InputPin;
/// use pendant_encoder::hal::MockPin;
///
/// let mut pin = MockPin::high();
/// assert!(pin.is_high().unwrap());
///
/// pin.set_high(false);
/// assert!(pin.is_low().unwrap());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MockPin {
    level: bool,
}

impl MockPin {
    /// Creates a pin reading low.
    pub fn low() -> Self {
        Self { level: false }
    }

    /// Creates a pin reading high.
    pub fn high() -> Self {
        Self { level: true }
    }

    /// Set the logic level.
    pub fn set_high(&mut self, high: bool) {
        self.level = high;
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.level)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.level)
    }
}

// ============================================================================
// Tests
// ============================================================================
