//! # pendant-encoder
//!
//! Rotary encoder reader for CNC pendant controls: turns a raw,
//! interrupt-driven quadrature pulse count into detent-aligned click deltas.
//!
//! ## Features
//!
//! - **Whole clicks only**: partial detents stay in the counter until they
//!   complete, so nothing is dropped
//! - **Bounded counter**: the raw count is rebased toward zero once it
//!   reaches a configurable headroom, without disturbing reported deltas
//! - **Interrupt safe**: every read/rebase runs inside one critical section
//! - **Hardware abstraction**: pulse counters, pins and mocks behind traits
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `traits` - Hardware abstractions
//! - `encoder` - Click delta computation
//! - `counter` - Pulse counter shared with interrupt handlers
//! - `config` - Encoder configuration and validation
//! - `hal` - Concrete implementations (mock for testing, esp32 for hardware)
//!
//! ## Example
//!
//! ```rust
//! use pendant_encoder::{EncoderConfig, EncoderReader, hal::MockPulseCounter};
//!
//! let config = EncoderConfig::default().with_pulses_per_click(4);
//! let mut jog = EncoderReader::new(MockPulseCounter::new(), &config).unwrap();
//!
//! // The interrupt handler moved the counter from 398 to 402
//! jog.counter_mut().set(398);
//! jog.read_delta();
//! jog.counter_mut().set(402);
//!
//! // Call once per poll cycle
//! assert_eq!(jog.read_delta(), 1);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

/// Encoder configuration and validation.
pub mod config;
/// Pulse counter shared between interrupt handlers and the poll loop.
pub mod counter;
/// Detent-aligned click reader.
pub mod encoder;
/// Configuration error types.
pub mod error;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// Core traits for hardware abstraction.
pub mod traits;

// Re-exports for convenience
pub use config::{Config, EncoderConfig, DEFAULT_PULSES_PER_CLICK, DEFAULT_WRAP_CLICKS};
pub use counter::SharedPulseCounter;
pub use encoder::EncoderReader;
pub use error::ConfigError;
pub use traits::{EncoderInput, PulseCounter};
