//! Jog wheel pulse sampling for ESP32.
//!
//! The ESP32-C3 has no PCNT peripheral, so the A/B lines are decoded in
//! software by a [`QuadratureSampler`] running on its own thread. The
//! thread plays the part of the edge interrupt: it is the only code that
//! increments the shared counter, and the poll loop reads it through an
//! [`EncoderReader`](crate::EncoderReader).
//!
//! # Wiring
//!
//! - A → GPIO6
//! - B → GPIO7
//! - C (common) → GND
//!
//! The sample period must be shorter than the fastest edge spacing.
//! `thread::sleep` rounds up to the FreeRTOS tick, so millisecond periods
//! rely on `CONFIG_FREERTOS_HZ=1000` from the crate's `sdkconfig.defaults`.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use esp_idf_hal::gpio::{Input, InputPin, OutputPin, PinDriver, Pull};
use esp_idf_hal::peripheral::Peripheral;

use crate::config::{EncoderConfig, NameString};
use crate::counter::SharedPulseCounter;
use crate::hal::QuadratureSampler;

/// Background quadrature sampler for ESP32 GPIO.
///
/// # Example
///
/// ```ignore
/// use pendant_encoder::hal::esp32::Esp32Sampler;
/// use pendant_encoder::{EncoderConfig, EncoderReader, SharedPulseCounter};
///
/// static JOG: SharedPulseCounter = SharedPulseCounter::new();
///
/// let peripherals = Peripherals::take()?;
/// let config = EncoderConfig::default();
/// Esp32Sampler::new(
///     peripherals.pins.gpio6, // A
///     peripherals.pins.gpio7, // B
///     &JOG,
///     &config,
/// )?
/// .spawn(Duration::from_millis(1))?;
///
/// let mut reader = EncoderReader::new(&JOG, &config)?;
/// loop {
///     let delta = reader.read_delta();
///     if delta != 0 {
///         log::info!("Jog: {}", delta);
///     }
/// }
/// ```
pub struct Esp32Sampler<A, B>
where
    A: InputPin + OutputPin,
    B: InputPin + OutputPin,
{
    /// Decoder over the two pin drivers
    sampler: QuadratureSampler<'static, PinDriver<'static, A, Input>, PinDriver<'static, B, Input>>,
    /// Name used in log output
    name: NameString,
}

impl<A, B> Esp32Sampler<A, B>
where
    A: InputPin + OutputPin,
    B: InputPin + OutputPin,
{
    /// Configures both lines as pulled-up inputs and captures their
    /// starting levels.
    ///
    /// `a_pin` and `b_pin` must be the GPIOs named by `config.pin_a` and
    /// `config.pin_b`.
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO initialization fails or the pins do not
    /// match the configuration ([`ConfigError::PinMismatch`]).
    ///
    /// [`ConfigError::PinMismatch`]: crate::ConfigError::PinMismatch
    pub fn new(
        a_pin: impl Peripheral<P = A> + 'static,
        b_pin: impl Peripheral<P = B> + 'static,
        counter: &'static SharedPulseCounter,
        config: &EncoderConfig,
    ) -> anyhow::Result<Self> {
        let mut a = PinDriver::input(a_pin)?;
        let mut b = PinDriver::input(b_pin)?;
        config.check_wiring(a.pin(), b.pin())?;

        // Encoder contacts switch to common ground
        a.set_pull(Pull::Up)?;
        b.set_pull(Pull::Up)?;

        let sampler = QuadratureSampler::new(a, b, counter)
            .map_err(|e| anyhow::anyhow!("[{}] initial pin read failed: {:?}", config.name, e))?;

        Ok(Self {
            sampler,
            name: config.name.clone(),
        })
    }

    /// Starts sampling every `period` on a dedicated thread.
    ///
    /// Pin read errors are logged and sampling continues.
    pub fn spawn(mut self, period: Duration) -> std::io::Result<JoinHandle<()>> {
        log::info!("[{}] sampling every {:?}", self.name, period);

        thread::Builder::new()
            .name("enc-sampler".into())
            .stack_size(4096)
            .spawn(move || loop {
                if let Err(e) = self.sampler.sample() {
                    log::warn!("[{}] pin read failed: {:?}", self.name, e);
                }
                thread::sleep(period);
            })
    }
}
