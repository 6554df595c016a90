//! Hardware abstraction traits for pulse counting and encoder input.
//!
//! This module defines the hardware interfaces that let pendant-encoder
//! run against real quadrature hardware, a shared software counter, or
//! desktop mocks.
//!
//! # Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`PulseCounter`] | Running signed pulse count fed by edge interrupts |
//! | [`EncoderInput`] | Detent-aligned click deltas for the application |
//!
//! # Implementation
//!
//! For testing and desktop development, use [`MockPulseCounter`] from
//! [`crate::hal::mock`]. On hardware, share a [`SharedPulseCounter`]
//! between the interrupt (or sampler) side and the reader.
//!
//! # Example
//!
//! ```rust
//! use pendant_encoder::traits::PulseCounter;
//! use pendant_encoder::hal::MockPulseCounter;
//!
//! let mut counter = MockPulseCounter::new();
//! counter.set(12);
//!
//! critical_section::with(|cs| {
//!     assert_eq!(counter.read(cs), 12);
//!     counter.write(cs, 0);
//! });
//! assert_eq!(counter.count, 0);
//! ```
//!
//! [`MockPulseCounter`]: crate::hal::MockPulseCounter
//! [`SharedPulseCounter`]: crate::SharedPulseCounter

use critical_section::CriticalSection;

/// Raw quadrature pulse counter.
///
/// The count is updated asynchronously (typically by edge interrupts) and
/// is signed: one rotation direction counts up, the other down.
///
/// Both methods take a [`CriticalSection`] token. Holding the token means
/// interrupts are suspended (or the global lock is held on hosted targets),
/// so a read followed by a write cannot lose pulses that arrive between
/// them.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use critical_section::CriticalSection;
/// use pendant_encoder::traits::PulseCounter;
///
/// struct PcntUnit { /* peripheral handle */ }
///
/// impl PulseCounter for PcntUnit {
///     fn read(&mut self, _cs: CriticalSection<'_>) -> i32 {
///         // Read hardware counter register...
///         0
///     }
///
///     fn write(&mut self, _cs: CriticalSection<'_>, value: i32) {
///         // Preload hardware counter register...
///     }
/// }
/// ```
pub trait PulseCounter {
    /// Returns the current accumulated pulse count.
    fn read(&mut self, cs: CriticalSection<'_>) -> i32;

    /// Overwrites the accumulated pulse count.
    ///
    /// Only used to rebase the counter back toward zero.
    fn write(&mut self, cs: CriticalSection<'_>, value: i32);
}

impl<T: PulseCounter + ?Sized> PulseCounter for &mut T {
    #[inline]
    fn read(&mut self, cs: CriticalSection<'_>) -> i32 {
        (**self).read(cs)
    }

    #[inline]
    fn write(&mut self, cs: CriticalSection<'_>, value: i32) {
        (**self).write(cs, value)
    }
}

/// Rotary encoder input trait.
///
/// Abstracts a detented rotary encoder (jog wheel, value knob) as seen by
/// the pendant application.
///
/// # Implementation Notes
///
/// - `read_delta()` returns whole clicks since the previous call
/// - Positive values = one rotation direction, negative = the other
/// - Partial clicks must be carried over, not dropped
pub trait EncoderInput {
    /// Returns delta clicks since last call.
    fn read_delta(&mut self) -> i32;
}
