//! Detent-aligned click reader over a raw pulse counter.
//!
//! [`EncoderReader`] turns a continuously updated quadrature pulse count
//! into whole-click deltas. Partial clicks stay in the raw counter and are
//! reported once enough pulses accumulate. To keep the raw counter bounded
//! during long sessions, it is rebased toward zero by
//! `wrap_clicks * pulses_per_click` whenever its magnitude reaches that
//! bound. Rebasing never changes the reported delta.
//!
//! # Example
//!
//! ```rust
//! use pendant_encoder::{EncoderConfig, EncoderReader, hal::MockPulseCounter};
//!
//! let config = EncoderConfig::default().with_pulses_per_click(4);
//! let mut reader = EncoderReader::new(MockPulseCounter::new(), &config).unwrap();
//!
//! reader.counter_mut().advance(9); // two clicks and a bit
//! assert_eq!(reader.read_delta(), 2);
//!
//! reader.counter_mut().advance(3); // the remainder completes a third
//! assert_eq!(reader.read_delta(), 1);
//! assert_eq!(reader.read_delta(), 0);
//! ```

use crate::config::{EncoderConfig, NameString};
use crate::error::ConfigError;
use crate::traits::{EncoderInput, PulseCounter};

/// Reads click deltas from a [`PulseCounter`].
///
/// One reader per physical encoder, built once at startup and polled from
/// a single context. The counter may be updated concurrently by interrupts;
/// each poll runs its read/rebase sequence inside one critical section.
#[derive(Debug)]
pub struct EncoderReader<C: PulseCounter> {
    /// Raw pulse source
    counter: C,
    /// Name used in log output
    name: NameString,
    /// Raw pulses per detent (always > 0)
    pulses_per_click: i32,
    /// Raw magnitude at which the counter is rebased (always > 0)
    wrap_pulses: i32,
    /// Click position seen at the end of the previous poll
    last_click_position: i32,
}

impl<C: PulseCounter> EncoderReader<C> {
    /// Creates a reader over `counter`.
    ///
    /// The baseline click position starts at zero, matching a freshly
    /// reset counter.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` fails
    /// [`EncoderConfig::validate`].
    pub fn new(counter: C, config: &EncoderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let wrap_pulses = config.wrap_pulses().ok_or(ConfigError::WrapOverflow {
            wrap_clicks: config.wrap_clicks,
            pulses_per_click: config.pulses_per_click,
        })?;

        log::info!(
            "[{}] encoder on pins {}/{}: {} pulses per click, rebase at +/-{} pulses",
            config.name,
            config.pin_a,
            config.pin_b,
            config.pulses_per_click,
            wrap_pulses
        );

        Ok(Self {
            counter,
            name: config.name.clone(),
            pulses_per_click: i32::from(config.pulses_per_click),
            wrap_pulses,
            last_click_position: 0,
        })
    }

    /// Returns whole clicks turned since the previous call.
    ///
    /// Positive for one direction, negative for the other, zero if no
    /// detent boundary was crossed. Never fails and never blocks.
    ///
    /// The subtraction wraps like [`SharedPulseCounter::add`], so a counter
    /// that has wrapped past an `i32` extreme yields a wrapped delta rather
    /// than a panic.
    ///
    /// [`SharedPulseCounter::add`]: crate::SharedPulseCounter::add
    pub fn read_delta(&mut self) -> i32 {
        let (delta, rebased) = critical_section::with(|cs| {
            let raw = self.counter.read(cs);
            let delta = (raw / self.pulses_per_click).wrapping_sub(self.last_click_position);

            let rebased = if raw >= self.wrap_pulses {
                Some(raw - self.wrap_pulses)
            } else if raw <= -self.wrap_pulses {
                Some(raw + self.wrap_pulses)
            } else {
                None
            };

            let settled = match rebased {
                Some(value) => {
                    self.counter.write(cs, value);
                    value
                }
                None => raw,
            };
            self.last_click_position = settled / self.pulses_per_click;

            (delta, rebased.map(|value| (raw, value)))
        });

        if let Some((from, to)) = rebased {
            log::debug!("[{}] rebased pulse counter {} -> {}", self.name, from, to);
        }

        delta
    }

    /// Raw pulses per detent.
    #[inline]
    pub fn pulses_per_click(&self) -> i32 {
        self.pulses_per_click
    }

    /// Raw magnitude at which the counter is rebased.
    #[inline]
    pub fn wrap_pulses(&self) -> i32 {
        self.wrap_pulses
    }

    /// Click position recorded by the most recent poll.
    #[inline]
    pub fn last_click_position(&self) -> i32 {
        self.last_click_position
    }

    /// Encoder name from the configuration.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get a reference to the pulse counter.
    pub fn counter(&self) -> &C {
        &self.counter
    }

    /// Get a mutable reference to the pulse counter.
    pub fn counter_mut(&mut self) -> &mut C {
        &mut self.counter
    }

    /// Consumes the reader and returns the pulse counter.
    pub fn into_inner(self) -> C {
        self.counter
    }
}

impl<C: PulseCounter> EncoderInput for EncoderReader<C> {
    fn read_delta(&mut self) -> i32 {
        EncoderReader::read_delta(self)
    }
}
