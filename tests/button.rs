#![allow(missing_docs)]
//! Host-level tests for edge dispatch.

mod common;

use common::FakeInput;
use digit_matrix::button::{ButtonLine, DigitButtons, Edge, EdgeEvent, LineId, PressedTo};
use digit_matrix::digit::{AtomicDigit, Digit};
use embassy_futures::block_on;
use embassy_time::Instant;
use proptest::prelude::*;

const INCREMENT: LineId = LineId(5);
const DECREMENT: LineId = LineId(6);

fn digit(value: u8) -> Digit {
    Digit::new(value).expect("test digits are in range")
}

fn falling(line: LineId, ms: u64) -> EdgeEvent {
    EdgeEvent {
        line,
        edge: Edge::Falling,
        timestamp: Instant::from_millis(ms),
    }
}

fn held_buttons(shared: &AtomicDigit) -> DigitButtons<'_, FakeInput> {
    DigitButtons::new(
        ButtonLine::new(INCREMENT, FakeInput::pressed_low()),
        ButtonLine::new(DECREMENT, FakeInput::pressed_low()),
        PressedTo::Ground,
        shared,
    )
}

#[test]
fn press_edges_step_the_digit() {
    let shared = AtomicDigit::default();
    let mut buttons = held_buttons(&shared);

    assert_eq!(buttons.on_edge(falling(INCREMENT, 0)), Some(digit(1)));
    assert_eq!(buttons.on_edge(falling(INCREMENT, 300)), Some(digit(2)));
    assert_eq!(buttons.on_edge(falling(DECREMENT, 310)), Some(digit(1)));
    assert_eq!(shared.load(), digit(1));
}

#[test]
fn increment_from_nine_wraps_to_zero() {
    let shared = AtomicDigit::new(digit(9));
    let mut buttons = held_buttons(&shared);
    assert_eq!(buttons.on_edge(falling(INCREMENT, 0)), Some(Digit::ZERO));
}

#[test]
fn decrement_from_zero_wraps_to_nine() {
    let shared = AtomicDigit::default();
    let mut buttons = held_buttons(&shared);
    assert_eq!(buttons.on_edge(falling(DECREMENT, 0)), Some(digit(9)));
}

#[test]
fn bounce_inside_window_is_ignored() {
    let shared = AtomicDigit::default();
    let mut buttons = held_buttons(&shared);
    assert_eq!(buttons.on_edge(falling(INCREMENT, 1000)), Some(digit(1)));
    assert_eq!(buttons.on_edge(falling(INCREMENT, 1005)), None);
    assert_eq!(buttons.on_edge(falling(INCREMENT, 1150)), None);
    assert_eq!(shared.load(), digit(1));
    assert_eq!(
        buttons.increment().debouncer().last_accepted(),
        Some(Instant::from_millis(1000))
    );
}

#[test]
fn each_line_has_its_own_window() {
    let shared = AtomicDigit::default();
    let mut buttons = held_buttons(&shared);
    assert_eq!(buttons.on_edge(falling(INCREMENT, 0)), Some(digit(1)));
    // The decrement line has not accepted anything yet.
    assert_eq!(buttons.on_edge(falling(DECREMENT, 10)), Some(Digit::ZERO));
    assert_eq!(buttons.decrement().debouncer().last_accepted(), Some(Instant::from_millis(10)));
}

#[test]
fn rising_edges_are_ignored_for_ground_wiring() {
    let shared = AtomicDigit::default();
    let mut buttons = held_buttons(&shared);
    let rising = EdgeEvent {
        edge: Edge::Rising,
        ..falling(INCREMENT, 0)
    };
    assert_eq!(buttons.on_edge(rising), None);
    assert_eq!(shared.load(), Digit::ZERO);
    // A non-press edge does not consume the window.
    assert_eq!(buttons.increment().debouncer().last_accepted(), None);
}

#[test]
fn unknown_lines_are_ignored() {
    let shared = AtomicDigit::default();
    let mut buttons = held_buttons(&shared);
    assert_eq!(buttons.on_edge(falling(LineId(13), 0)), None);
    assert_eq!(shared.load(), Digit::ZERO);
}

#[test]
fn released_level_at_edge_is_ignored() {
    let shared = AtomicDigit::default();
    let mut buttons = DigitButtons::new(
        ButtonLine::new(INCREMENT, FakeInput::released_high()),
        ButtonLine::new(DECREMENT, FakeInput::pressed_low()),
        PressedTo::Ground,
        &shared,
    );
    assert_eq!(buttons.on_edge(falling(INCREMENT, 0)), None);
    assert_eq!(shared.load(), Digit::ZERO);
}

#[test]
fn voltage_wiring_presses_on_rising_edge() {
    let shared = AtomicDigit::default();
    let mut buttons = DigitButtons::new(
        ButtonLine::new(INCREMENT, FakeInput::released_high()),
        ButtonLine::new(DECREMENT, FakeInput::released_high()),
        PressedTo::Voltage,
        &shared,
    );
    assert_eq!(buttons.on_edge(falling(INCREMENT, 0)), None);
    let rising = EdgeEvent {
        edge: Edge::Rising,
        ..falling(INCREMENT, 0)
    };
    assert_eq!(buttons.on_edge(rising), Some(digit(1)));
}

#[test]
fn wait_for_press_edge_reports_the_line_that_fired() {
    let shared = AtomicDigit::default();
    let mut decrement_pin = FakeInput::pressed_low();
    decrement_pin.falling_edges = 1;
    let mut buttons = DigitButtons::new(
        ButtonLine::new(INCREMENT, FakeInput::pressed_low()),
        ButtonLine::new(DECREMENT, decrement_pin),
        PressedTo::Ground,
        &shared,
    );

    let line = block_on(buttons.wait_for_press_edge());
    assert_eq!(line, DECREMENT);
    assert_eq!(
        buttons.on_edge(falling(line, 0)),
        Some(digit(9)),
        "one decrement from zero"
    );
}

#[test]
fn wait_for_press_edge_uses_rising_edges_for_voltage_wiring() {
    let shared = AtomicDigit::default();
    let mut increment_pin = FakeInput::released_high();
    increment_pin.rising_edges = 1;
    increment_pin.falling_edges = 3;
    let mut decrement_pin = FakeInput::released_high();
    decrement_pin.falling_edges = 3;
    let mut buttons = DigitButtons::new(
        ButtonLine::new(INCREMENT, increment_pin),
        ButtonLine::new(DECREMENT, decrement_pin),
        PressedTo::Voltage,
        &shared,
    );
    assert_eq!(block_on(buttons.wait_for_press_edge()), INCREMENT);
}

#[test]
fn simultaneous_press_edges_report_increment_first() {
    let shared = AtomicDigit::default();
    let mut increment_pin = FakeInput::pressed_low();
    increment_pin.falling_edges = 1;
    let mut decrement_pin = FakeInput::pressed_low();
    decrement_pin.falling_edges = 1;
    let mut buttons = DigitButtons::new(
        ButtonLine::new(INCREMENT, increment_pin),
        ButtonLine::new(DECREMENT, decrement_pin),
        PressedTo::Ground,
        &shared,
    );

    assert_eq!(block_on(buttons.wait_for_press_edge()), INCREMENT);
    assert_eq!(buttons.increment().pin().falling_edges, 0);
    // The decrement edge was never consumed, so the next wait reports it.
    assert_eq!(buttons.decrement().pin().falling_edges, 1);
    assert_eq!(block_on(buttons.wait_for_press_edge()), DECREMENT);
}

proptest! {
    #[test]
    fn edge_sequences_count_accepted_presses(
        start in 0u8..10,
        presses in prop::collection::vec((0u64..400, any::<bool>()), 0..64),
    ) {
        let shared = AtomicDigit::new(digit(start));
        let mut buttons = held_buttons(&shared);
        let window = buttons.increment().debouncer().window().as_millis();

        let mut now = 0;
        let mut net: i64 = 0;
        let mut last_increment: Option<u64> = None;
        let mut last_decrement: Option<u64> = None;
        for (gap, is_increment) in presses {
            now += gap;
            let (line, last) = if is_increment {
                (INCREMENT, &mut last_increment)
            } else {
                (DECREMENT, &mut last_decrement)
            };
            let expected = last.is_none_or(|at| now - at >= window);
            let stepped = buttons.on_edge(falling(line, now));
            prop_assert_eq!(stepped.is_some(), expected, "edge at {} ms", now);
            if let Some(new_digit) = stepped {
                if let Some(at) = *last {
                    prop_assert!(now - at >= window);
                }
                *last = Some(now);
                net += if is_increment { 1 } else { -1 };
                prop_assert_eq!(new_digit, shared.load());
            }
        }

        let expected = (i64::from(start) + net).rem_euclid(10);
        prop_assert_eq!(i64::from(shared.load().get()), expected);
    }
}
