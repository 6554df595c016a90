//! Software quadrature decoding into a [`SharedPulseCounter`].
//!
//! For boards without a hardware pulse counter. Sample the A/B lines fast
//! enough to see every edge (from a pin-change interrupt, a timer tick, or a
//! dedicated thread) and each valid Gray-code step is added to the shared
//! counter inside a critical section.
//!
//! Forward sequence of `(A, B)` levels: `00 -> 10 -> 11 -> 01 -> 00`,
//! one pulse per transition (four per full cycle).

use embedded_hal::digital::InputPin;

use crate::counter::SharedPulseCounter;

/// Pulse step for each `(previous << 2) | current` state pair.
///
/// Unchanged states and double transitions (both lines flipped, so the
/// direction is unknown) count as zero.
const TRANSITIONS: [i8; 16] = [0, -1, 1, 0, 1, 0, 0, -1, -1, 0, 0, 1, 0, 1, -1, 0];

/// Decodes A/B pin levels into signed pulses.
pub struct QuadratureSampler<'a, A, B>
where
    A: InputPin,
    B: InputPin<Error = A::Error>,
{
    /// A signal input
    pin_a: A,
    /// B signal input
    pin_b: B,
    /// Last sampled `(A << 1) | B`
    state: u8,
    /// Destination counter
    counter: &'a SharedPulseCounter,
}

impl<'a, A, B> QuadratureSampler<'a, A, B>
where
    A: InputPin,
    B: InputPin<Error = A::Error>,
{
    /// Creates a sampler and records the current pin levels as the
    /// starting state.
    ///
    /// # Errors
    ///
    /// Returns the pin error if either line cannot be read.
    pub fn new(
        mut pin_a: A,
        mut pin_b: B,
        counter: &'a SharedPulseCounter,
    ) -> Result<Self, A::Error> {
        let state = Self::levels(&mut pin_a, &mut pin_b)?;
        Ok(Self {
            pin_a,
            pin_b,
            state,
            counter,
        })
    }

    fn levels(pin_a: &mut A, pin_b: &mut B) -> Result<u8, A::Error> {
        Ok((u8::from(pin_a.is_high()?) << 1) | u8::from(pin_b.is_high()?))
    }

    /// Samples both lines once and applies any resulting step.
    ///
    /// Returns the step that was added to the counter (`-1`, `0` or `1`).
    pub fn sample(&mut self) -> Result<i32, A::Error> {
        let current = Self::levels(&mut self.pin_a, &mut self.pin_b)?;
        let step = i32::from(TRANSITIONS[usize::from((self.state << 2) | current)]);
        self.state = current;

        if step != 0 {
            critical_section::with(|cs| self.counter.add(cs, step));
        }
        Ok(step)
    }

    /// Get mutable references to the A and B pins.
    pub fn pins_mut(&mut self) -> (&mut A, &mut B) {
        (&mut self.pin_a, &mut self.pin_b)
    }

    /// Consumes the sampler and returns the pins.
    pub fn release(self) -> (A, B) {
        (self.pin_a, self.pin_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::MockPin;

    const FORWARD: [(bool, bool); 4] = [(true, false), (true, true), (false, true), (false, false)];

    fn drive(
        sampler: &mut QuadratureSampler<'_, MockPin, MockPin>,
        levels: &[(bool, bool)],
    ) -> i32 {
        let mut total = 0;
        for &(a, b) in levels {
            let (pin_a, pin_b) = sampler.pins_mut();
            pin_a.set_high(a);
            pin_b.set_high(b);
            total += sampler.sample().unwrap();
        }
        total
    }

    fn count(counter: &SharedPulseCounter) -> i32 {
        critical_section::with(|cs| counter.load(cs))
    }

    #[test]
    fn forward_cycle_counts_four() {
        let counter = SharedPulseCounter::new();
        let mut sampler =
            QuadratureSampler::new(MockPin::low(), MockPin::low(), &counter).unwrap();

        assert_eq!(drive(&mut sampler, &FORWARD), 4);
        assert_eq!(count(&counter), 4);
    }

    #[test]
    fn reverse_cycle_counts_minus_four() {
        let counter = SharedPulseCounter::new();
        let mut sampler =
            QuadratureSampler::new(MockPin::low(), MockPin::low(), &counter).unwrap();

        let reverse = [(false, true), (true, true), (true, false), (false, false)];
        assert_eq!(drive(&mut sampler, &reverse), -4);
        assert_eq!(count(&counter), -4);
    }

    #[test]
    fn unchanged_levels_add_nothing() {
        let counter = SharedPulseCounter::new();
        let mut sampler =
            QuadratureSampler::new(MockPin::high(), MockPin::high(), &counter).unwrap();

        assert_eq!(sampler.sample(), Ok(0));
        assert_eq!(sampler.sample(), Ok(0));
        assert_eq!(count(&counter), 0);
    }

    #[test]
    fn double_transition_is_ignored() {
        let counter = SharedPulseCounter::new();
        let mut sampler =
            QuadratureSampler::new(MockPin::low(), MockPin::low(), &counter).unwrap();

        assert_eq!(drive(&mut sampler, &[(true, true)]), 0);
        assert_eq!(count(&counter), 0);

        // Decoding resumes from the new state: 11 -> 01 is forward
        assert_eq!(drive(&mut sampler, &[(false, true)]), 1);
    }

    #[test]
    fn bounce_cancels_out() {
        let counter = SharedPulseCounter::new();
        let mut sampler =
            QuadratureSampler::new(MockPin::low(), MockPin::low(), &counter).unwrap();

        let bounce = [(true, false), (false, false), (true, false), (false, false)];
        assert_eq!(drive(&mut sampler, &bounce), 0);
        assert_eq!(count(&counter), 0);
    }

    #[test]
    fn release_returns_pins() {
        let counter = SharedPulseCounter::new();
        let sampler = QuadratureSampler::new(MockPin::high(), MockPin::low(), &counter).unwrap();

        let (mut a, mut b) = sampler.release();
        assert_eq!(a.is_high(), Ok(true));
        assert_eq!(b.is_high(), Ok(false));
    }
}
