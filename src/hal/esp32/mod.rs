//! ESP32-C3 SuperMini hardware abstraction layer for the pendant encoder.
//!
//! # Hardware Configuration
//!
//! - **MCU**: ESP32-C3 SuperMini (RISC-V 160MHz, 4MB Flash)
//! - **Encoder**: mechanical quadrature jog wheel, open-drain outputs
//!
//! # Pin Assignments
//!
//! See the [`pins`] module for GPIO assignments matching the SuperMini layout.

mod encoder;

pub use encoder::Esp32Sampler;

/// Pin assignments for SuperMini ESP32-C3.
pub mod pins {
    // =========================================================================
    // Jog Wheel
    // =========================================================================

    /// Jog wheel A signal
    pub const JOG_A: i32 = 6;

    /// Jog wheel B signal
    pub const JOG_B: i32 = 7;
}
