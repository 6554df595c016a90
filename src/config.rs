//! Encoder and pendant configuration.
//!
//! Uses `heapless::String` for `no_std` compatibility while remaining
//! ergonomic to use on desktop with `std`.
//!
//! # Example
//!
//! ```rust
//! use pendant_encoder::config::{Config, EncoderConfig};
//!
//! // Use defaults
//! let config = Config::default();
//! assert_eq!(config.encoder.wrap_clicks, 100);
//!
//! // Or customize
//! let config = Config::default()
//!     .with_encoder(EncoderConfig::default().with_name("feed").with_pulses_per_click(2))
//!     .with_poll_interval_ms(10);
//! assert!(config.encoder.validate().is_ok());
//! ```

use heapless::String as HString;

use crate::error::ConfigError;

/// Maximum length for encoder names
pub const MAX_NAME_LEN: usize = 32;

/// Type alias for encoder names
pub type NameString = HString<MAX_NAME_LEN>;

/// Default pulses per detent (common mechanical encoders emit a full
/// quadrature cycle per click)
pub const DEFAULT_PULSES_PER_CLICK: u16 = 4;

/// Default wraparound headroom, in clicks, before the raw counter is rebased
pub const DEFAULT_WRAP_CLICKS: u16 = 100;

/// Create a NameString from a &str, truncating if too long
pub fn name_string(s: &str) -> NameString {
    let mut hs = NameString::new();
    for c in s.chars() {
        if hs.push(c).is_err() {
            break;
        }
    }
    hs
}

// ============================================================================
// Main Config
// ============================================================================

/// Complete pendant configuration
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Jog wheel encoder
    pub encoder: EncoderConfig,
    /// Interval between `read_delta()` polls in milliseconds
    pub poll_interval_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encoder: EncoderConfig::default(),
            poll_interval_ms: 20,
        }
    }
}

impl Config {
    /// Set encoder configuration
    pub fn with_encoder(mut self, encoder: EncoderConfig) -> Self {
        self.encoder = encoder;
        self
    }

    /// Set the poll interval
    pub fn with_poll_interval_ms(mut self, ms: u32) -> Self {
        self.poll_interval_ms = ms;
        self
    }
}

// ============================================================================
// Encoder Config
// ============================================================================

/// Configuration for a single quadrature encoder
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncoderConfig {
    /// Name used in log output (e.g. "jog", "feed")
    pub name: NameString,
    /// GPIO number of the A signal line
    pub pin_a: i32,
    /// GPIO number of the B signal line
    pub pin_b: i32,
    /// Raw pulses emitted per detent
    pub pulses_per_click: u16,
    /// Counter headroom in clicks; the raw count is rebased by this many
    /// clicks once its magnitude reaches it
    pub wrap_clicks: u16,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            name: name_string("jog"),
            pin_a: 6,
            pin_b: 7,
            pulses_per_click: DEFAULT_PULSES_PER_CLICK,
            wrap_clicks: DEFAULT_WRAP_CLICKS,
        }
    }
}

impl EncoderConfig {
    /// Set the encoder name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name_string(name);
        self
    }

    /// Set the A/B signal pins
    pub fn with_pins(mut self, pin_a: i32, pin_b: i32) -> Self {
        self.pin_a = pin_a;
        self.pin_b = pin_b;
        self
    }

    /// Set the pulses per click
    pub fn with_pulses_per_click(mut self, pulses: u16) -> Self {
        self.pulses_per_click = pulses;
        self
    }

    /// Set the wraparound headroom in clicks
    pub fn with_wrap_clicks(mut self, clicks: u16) -> Self {
        self.wrap_clicks = clicks;
        self
    }

    /// Raw pulse magnitude at which the counter is rebased.
    ///
    /// Returns `None` if the product overflows an `i32`.
    pub fn wrap_pulses(&self) -> Option<i32> {
        i32::from(self.wrap_clicks).checked_mul(i32::from(self.pulses_per_click))
    }

    /// Check the configuration for values that would break click arithmetic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pulses_per_click == 0 {
            return Err(ConfigError::ZeroPulsesPerClick);
        }
        if self.wrap_clicks == 0 {
            return Err(ConfigError::ZeroWrapClicks);
        }
        if self.wrap_pulses().is_none() {
            return Err(ConfigError::WrapOverflow {
                wrap_clicks: self.wrap_clicks,
                pulses_per_click: self.pulses_per_click,
            });
        }
        if self.pin_a == self.pin_b {
            return Err(ConfigError::SharedPins(self.pin_a));
        }
        Ok(())
    }

    /// Check that the GPIOs actually handed to a sampler are the configured
    /// ones.
    pub fn check_wiring(&self, pin_a: i32, pin_b: i32) -> Result<(), ConfigError> {
        if (pin_a, pin_b) != (self.pin_a, self.pin_b) {
            return Err(ConfigError::PinMismatch {
                configured: (self.pin_a, self.pin_b),
                wired: (pin_a, pin_b),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
