//! ESP32-C3 SuperMini pendant jog wheel.
//!
//! This is the main entry point for the physical hardware. It:
//! - Starts the quadrature sampler thread for the jog wheel
//! - Polls the encoder reader at a fixed interval
//! - Logs every non-zero click delta
//!
//! The pendant menu, display and machine link consume `read_delta()` in
//! the same loop; they are not part of this binary.
//!
//! # Build
//!
//! ```bash
//! cargo build --release --features esp32 --bin esp32_main
//! espflash flash --monitor target/riscv32imc-esp-espidf/release/esp32_main
//! ```

use esp_idf_hal::peripherals::Peripherals;
use pendant_encoder::hal::esp32::{pins, Esp32Sampler};
use pendant_encoder::{Config, EncoderConfig, EncoderReader, SharedPulseCounter};
use std::thread;
use std::time::Duration;

/// Jog wheel sample period (one FreeRTOS tick at the 1 kHz rate set in
/// `sdkconfig.defaults`)
const SAMPLE_PERIOD: Duration = Duration::from_millis(1);

/// Raw pulse count for the jog wheel, written by the sampler thread
static JOG_PULSES: SharedPulseCounter = SharedPulseCounter::new();

fn main() -> anyhow::Result<()> {
    // Initialize ESP-IDF
    esp_idf_hal::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    log::info!("pendant-encoder starting");

    // =========================================================================
    // Configuration
    // =========================================================================
    let config = Config::default().with_encoder(
        EncoderConfig::default()
            .with_name("jog")
            .with_pins(pins::JOG_A, pins::JOG_B)
            .with_pulses_per_click(4),
    );
    config.encoder.validate()?;

    // =========================================================================
    // Hardware
    // =========================================================================
    let peripherals = Peripherals::take()?;

    // These GPIOs must match `pins::JOG_A`/`pins::JOG_B` above; the sampler
    // refuses to start otherwise.
    Esp32Sampler::new(
        peripherals.pins.gpio6,
        peripherals.pins.gpio7,
        &JOG_PULSES,
        &config.encoder,
    )?
    .spawn(SAMPLE_PERIOD)?;

    let mut jog = EncoderReader::new(&JOG_PULSES, &config.encoder)?;

    // =========================================================================
    // Poll loop
    // =========================================================================
    let interval = Duration::from_millis(u64::from(config.poll_interval_ms));
    let mut position: i64 = 0;

    loop {
        let delta = jog.read_delta();
        if delta != 0 {
            position += i64::from(delta);
            log::info!("[{}] {:+} clicks (position {})", jog.name(), delta, position);
        }

        thread::sleep(interval);
    }
}

