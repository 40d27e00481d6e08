#![allow(missing_docs)]
//! Host-level tests for configuration defaults and validation.

use digit_matrix::Error;
use digit_matrix::button::PressedTo;
use digit_matrix::config::{
    BLINK_PERIOD_DEFAULT, DEBOUNCE_WINDOW_DEFAULT, DigitMatrixConfig, FRAME_TRANSMIT_TIME,
    RENDER_PERIOD_DEFAULT,
};
use digit_matrix::digit::Digit;
use digit_matrix::led_strip::{BITS_PER_LED, LED_TIME, RESET_GAP, frame_time};
use digit_matrix::led2d::MATRIX_LEN;
use embassy_time::Duration;

#[test]
fn defaults_match_the_board() {
    let config = DigitMatrixConfig::default();
    assert_eq!(config, DigitMatrixConfig::DEFAULT);
    assert_eq!(config.pressed_to, PressedTo::Ground);
    assert_eq!(config.initial_digit, Digit::ZERO);
    assert_eq!(DEBOUNCE_WINDOW_DEFAULT, Duration::from_millis(200));
    assert_eq!(RENDER_PERIOD_DEFAULT, Duration::from_millis(200));
    assert_eq!(BLINK_PERIOD_DEFAULT, Duration::from_millis(200));
    assert!(config.validate().is_ok());
}

#[test]
fn frame_time_covers_25_leds_and_latch() {
    // 25 LEDs × 24 bits × 1.25 µs, plus the PIO driver's 55 µs latch gap.
    assert_eq!(FRAME_TRANSMIT_TIME, Duration::from_micros(805));
    assert_eq!(FRAME_TRANSMIT_TIME, frame_time(MATRIX_LEN));
    assert_eq!(LED_TIME, Duration::from_micros(30));
    assert_eq!(LED_TIME.as_nanos(), u64::from(BITS_PER_LED) * 1_250);
    assert_eq!(RESET_GAP, Duration::from_micros(55));
}

#[test]
fn render_period_just_above_frame_time_is_accepted() {
    let config = DigitMatrixConfig {
        render_period: FRAME_TRANSMIT_TIME + Duration::from_micros(1),
        ..DigitMatrixConfig::DEFAULT
    };
    assert!(config.validate().is_ok());
}

#[test]
fn render_period_must_exceed_frame_time() {
    let config = DigitMatrixConfig {
        render_period: FRAME_TRANSMIT_TIME,
        ..DigitMatrixConfig::DEFAULT
    };
    assert!(matches!(config.validate(), Err(Error::PeriodTooShort)));

    let config = DigitMatrixConfig {
        render_period: Duration::from_millis(1),
        ..DigitMatrixConfig::DEFAULT
    };
    assert!(config.validate().is_ok());
}

#[test]
fn zero_periods_are_rejected() {
    for config in [
        DigitMatrixConfig {
            blink_period: Duration::from_ticks(0),
            ..DigitMatrixConfig::DEFAULT
        },
        DigitMatrixConfig {
            debounce_window: Duration::from_ticks(0),
            ..DigitMatrixConfig::DEFAULT
        },
    ] {
        assert!(matches!(config.validate(), Err(Error::PeriodTooShort)));
    }
}
