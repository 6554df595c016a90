//! Edge case and concurrency tests for the encoder reader

use std::thread;

use embedded_hal::digital::InputPin;
use pendant_encoder::{
    hal::{MockPin, MockPulseCounter, QuadratureSampler},
    EncoderConfig, EncoderReader, SharedPulseCounter,
};

fn config(pulses_per_click: u16) -> EncoderConfig {
    EncoderConfig::default().with_pulses_per_click(pulses_per_click)
}

// ============================================================================
// Missed Polls
// ============================================================================

#[test]
fn large_jump_is_reported_in_one_poll() {
    let mut jog = EncoderReader::new(MockPulseCounter::new(), &config(1)).unwrap();

    jog.counter_mut().set(1000);
    assert_eq!(jog.read_delta(), 1000);
    assert_eq!(jog.counter().count, 900);
}

#[test]
fn oversized_counter_drains_one_bound_per_poll() {
    let mut jog = EncoderReader::new(MockPulseCounter::new(), &config(1)).unwrap();
    jog.counter_mut().set(1000);
    jog.read_delta();

    let mut polls = 0;
    while jog.counter().count >= 100 {
        assert_eq!(jog.read_delta(), 0);
        polls += 1;
    }

    assert_eq!(polls, 9);
    assert_eq!(jog.counter().count, 0);
    assert_eq!(jog.read_delta(), 0);
    assert_eq!(jog.counter().write_count, 10);
}

#[test]
fn negative_jump_drains_toward_zero() {
    let mut jog = EncoderReader::new(MockPulseCounter::new(), &config(2)).unwrap();

    jog.counter_mut().set(-450);
    assert_eq!(jog.read_delta(), -225);
    assert_eq!(jog.counter().count, -250);

    assert_eq!(jog.read_delta(), 0);
    assert_eq!(jog.counter().count, -50);

    assert_eq!(jog.read_delta(), 0);
    assert_eq!(jog.counter().count, -50);
}

// ============================================================================
// Truncation Around Zero
// ============================================================================

#[test]
fn zero_click_bucket_spans_both_signs() {
    // Truncating division maps -3..=3 to click 0 at four pulses per click
    let mut jog = EncoderReader::new(MockPulseCounter::new(), &config(4)).unwrap();

    for raw in [3, 0, -3, 2, -1] {
        jog.counter_mut().set(raw);
        assert_eq!(jog.read_delta(), 0, "raw={}", raw);
    }

    jog.counter_mut().set(-4);
    assert_eq!(jog.read_delta(), -1);
    jog.counter_mut().set(4);
    assert_eq!(jog.read_delta(), 2);
}

#[test]
fn reversal_after_rebase_settles_once_back_in_range() {
    let mut jog = EncoderReader::new(MockPulseCounter::new(), &config(4)).unwrap();
    let mut clicks = 0;

    jog.counter_mut().set(401);
    clicks += jog.read_delta();
    assert_eq!(jog.counter().count, 1);

    // Back across zero and forward again
    jog.counter_mut().advance(-3);
    clicks += jog.read_delta();
    jog.counter_mut().advance(3);
    clicks += jog.read_delta();

    assert_eq!(clicks, 100);
    assert_eq!(jog.read_delta(), 0);
}

// ============================================================================
// Shared Counter
// ============================================================================

#[test]
fn static_shared_counter() {
    static PULSES: SharedPulseCounter = SharedPulseCounter::new();

    let mut jog = EncoderReader::new(&PULSES, &config(4)).unwrap();
    critical_section::with(|cs| PULSES.add(cs, 402));

    assert_eq!(jog.read_delta(), 100);
    critical_section::with(|cs| assert_eq!(PULSES.load(cs), 2));
    assert_eq!(jog.read_delta(), 0);
}

#[test]
fn concurrent_pulses_are_never_lost() {
    const PULSES: i32 = 40_000;

    for p in [1u16, 4] {
        let counter = SharedPulseCounter::new();
        let mut jog = EncoderReader::new(&counter, &config(p)).unwrap();

        let clicks = thread::scope(|s| {
            let producer = s.spawn(|| {
                for _ in 0..PULSES {
                    critical_section::with(|cs| counter.add(cs, 1));
                }
            });

            let mut clicks = 0;
            while !producer.is_finished() {
                clicks += jog.read_delta();
            }
            producer.join().unwrap();
            clicks + jog.read_delta()
        });

        assert_eq!(clicks, PULSES / i32::from(p), "p={}", p);

        // A backlog larger than one bound drains over later polls without
        // reporting any further movement
        let bound = 100 * i32::from(p);
        while critical_section::with(|cs| counter.load(cs)) >= bound {
            assert_eq!(jog.read_delta(), 0, "p={}", p);
        }
        let remaining = critical_section::with(|cs| counter.load(cs));
        assert!(remaining.abs() < bound, "p={} remaining={}", p, remaining);
        assert_eq!(jog.read_delta(), 0, "p={}", p);
    }
}

#[test]
fn concurrent_reverse_pulses_are_never_lost() {
    const PULSES: i32 = 25_000;

    let counter = SharedPulseCounter::new();
    let mut jog = EncoderReader::new(&counter, &config(2)).unwrap();

    let clicks = thread::scope(|s| {
        let producer = s.spawn(|| {
            for _ in 0..PULSES {
                critical_section::with(|cs| counter.add(cs, -1));
            }
        });

        let mut clicks = 0;
        while !producer.is_finished() {
            clicks += jog.read_delta();
            thread::yield_now();
        }
        producer.join().unwrap();
        clicks + jog.read_delta()
    });

    assert_eq!(clicks, -PULSES / 2);

    while critical_section::with(|cs| counter.load(cs)) <= -200 {
        assert_eq!(jog.read_delta(), 0);
    }
    assert_eq!(jog.read_delta(), 0);
}

// ============================================================================
// Sampler Pipeline
// ============================================================================

#[test]
fn sampled_quadrature_cycles_become_clicks() {
    let counter = SharedPulseCounter::new();
    let mut sampler = QuadratureSampler::new(MockPin::low(), MockPin::low(), &counter).unwrap();
    let mut jog = EncoderReader::new(&counter, &config(4)).unwrap();

    let forward = [(true, false), (true, true), (false, true), (false, false)];

    // Half a detent
    for &(a, b) in &forward[..2] {
        let (pin_a, pin_b) = sampler.pins_mut();
        pin_a.set_high(a);
        pin_b.set_high(b);
        sampler.sample().unwrap();
    }
    assert_eq!(jog.read_delta(), 0);

    // Rest of that detent plus two more
    for &(a, b) in forward[2..].iter().chain(forward.iter()).chain(forward.iter()) {
        let (pin_a, pin_b) = sampler.pins_mut();
        pin_a.set_high(a);
        pin_b.set_high(b);
        sampler.sample().unwrap();
    }
    assert_eq!(jog.read_delta(), 3);

    let (mut a, mut b) = sampler.release();
    assert_eq!(a.is_low(), Ok(true));
    assert_eq!(b.is_low(), Ok(true));
}
