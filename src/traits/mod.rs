//! Trait definitions for hardware abstraction.
//!
//! This module defines the core abstractions that allow pendant-encoder to:
//! - Run on different hardware (ESP32, desktop mock)
//! - Swap the pulse source (interrupts, sampler thread, hardware counter)
//!   without touching the click arithmetic
//!
//! # Submodules
//!
//! - `hardware`: Pulse counter and encoder input
//!
//! # Hardware Abstraction
//!
//! - [`PulseCounter`]: Raw signed pulse count, read and rebased under a
//!   critical section
//! - [`EncoderInput`]: Detent-aligned click deltas

pub mod hardware;

pub use hardware::*;
