//! Hardware Abstraction Layer implementations.
//!
//! This module contains concrete implementations of the traits
//! defined in [`crate::traits`] for various platforms.
//!
//! # Available Implementations
//!
//! - `mock`: Test implementations for desktop development
//! - `quadrature`: Portable software decoder over `embedded-hal` input pins
//! - `esp32`: ESP32-C3 SuperMini sampler thread (requires `esp32` feature)

pub mod mock;
pub mod quadrature;

#[cfg(feature = "esp32")]
pub mod esp32;

pub use mock::*;
pub use quadrature::QuadratureSampler;

#[cfg(feature = "esp32")]
pub use esp32::*;
