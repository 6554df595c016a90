//! Pulse counter shared between an interrupt handler and the poll loop.
//!
//! [`SharedPulseCounter`] is meant to live in `static` storage. The edge
//! interrupt (or a sampler thread) calls [`add`](SharedPulseCounter::add),
//! and an [`EncoderReader`](crate::EncoderReader) holding a
//! `&'static SharedPulseCounter` reads and rebases it. Every access goes
//! through a [`CriticalSection`] token.
//!
//! ```rust
//! use pendant_encoder::{EncoderConfig, EncoderReader, SharedPulseCounter};
//!
//! static JOG: SharedPulseCounter = SharedPulseCounter::new();
//!
//! let mut reader = EncoderReader::new(&JOG, &EncoderConfig::default()).unwrap();
//!
//! // Interrupt side
//! critical_section::with(|cs| JOG.add(cs, 8));
//!
//! assert_eq!(reader.read_delta(), 2);
//! ```

use core::cell::Cell;
use core::fmt;

use critical_section::{CriticalSection, Mutex};

use crate::traits::PulseCounter;

/// Signed pulse count guarded by a critical-section mutex.
pub struct SharedPulseCounter {
    count: Mutex<Cell<i32>>,
}

impl SharedPulseCounter {
    /// Creates a counter starting at zero.
    pub const fn new() -> Self {
        Self {
            count: Mutex::new(Cell::new(0)),
        }
    }

    /// Adds `pulses` (negative to count down).
    ///
    /// Wraps on `i32` overflow instead of panicking; the reader keeps the
    /// count far away from that range.
    #[inline]
    pub fn add(&self, cs: CriticalSection<'_>, pulses: i32) {
        let cell = self.count.borrow(cs);
        cell.set(cell.get().wrapping_add(pulses));
    }

    /// Returns the current count.
    #[inline]
    pub fn load(&self, cs: CriticalSection<'_>) -> i32 {
        self.count.borrow(cs).get()
    }

    /// Overwrites the current count.
    #[inline]
    pub fn store(&self, cs: CriticalSection<'_>, value: i32) {
        self.count.borrow(cs).set(value);
    }
}

impl fmt::Debug for SharedPulseCounter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let count = critical_section::with(|cs| self.load(cs));
        f.debug_struct("SharedPulseCounter").field("count", &count).finish()
    }
}

impl Default for SharedPulseCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl PulseCounter for &SharedPulseCounter {
    #[inline]
    fn read(&mut self, cs: CriticalSection<'_>) -> i32 {
        self.load(cs)
    }

    #[inline]
    fn write(&mut self, cs: CriticalSection<'_>, value: i32) {
        self.store(cs, value)
    }
}
