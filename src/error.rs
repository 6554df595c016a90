//! Error types for encoder configuration.

use core::fmt;

/// Reasons an [`EncoderConfig`](crate::EncoderConfig) is rejected.
///
/// Reading the encoder itself cannot fail; only construction is checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `pulses_per_click` is zero.
    ZeroPulsesPerClick,

    /// `wrap_clicks` is zero.
    ZeroWrapClicks,

    /// `wrap_clicks * pulses_per_click` does not fit in an `i32` pulse count.
    WrapOverflow {
        /// Configured wraparound bound in clicks.
        wrap_clicks: u16,
        /// Configured pulses per click.
        pulses_per_click: u16,
    },

    /// Both quadrature lines are assigned to the same pin.
    SharedPins(i32),

    /// The pins handed to the sampler differ from the configured ones.
    PinMismatch {
        /// Configured `(pin_a, pin_b)`.
        configured: (i32, i32),
        /// Pins actually wired to the sampler.
        wired: (i32, i32),
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::ZeroPulsesPerClick => write!(f, "pulses per click must be non-zero"),
            ConfigError::ZeroWrapClicks => write!(f, "wraparound bound must be non-zero"),
            ConfigError::WrapOverflow {
                wrap_clicks,
                pulses_per_click,
            } => write!(
                f,
                "wraparound bound of {} clicks at {} pulses per click overflows the pulse counter",
                wrap_clicks, pulses_per_click
            ),
            ConfigError::SharedPins(pin) => {
                write!(f, "encoder A and B lines both assigned to pin {}", pin)
            }
            ConfigError::PinMismatch { configured, wired } => write!(
                f,
                "encoder configured on pins {}/{} but wired to {}/{}",
                configured.0, configured.1, wired.0, wired.1
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
