//! Tunable values, with the board's defaults.
//!
//! See [`DigitMatrixConfig`].

use embassy_time::Duration;

use crate::button::PressedTo;
use crate::digit::Digit;
use crate::led_strip::{Rgb, colors, frame_time};
use crate::led2d::MATRIX_LEN;
use crate::{Error, Result};

#[doc(inline)]
pub use crate::debounce::DEBOUNCE_WINDOW_DEFAULT;

/// How often the matrix is redrawn.
pub const RENDER_PERIOD_DEFAULT: Duration = Duration::from_millis(200);

/// How often the status LED toggles.
pub const BLINK_PERIOD_DEFAULT: Duration = Duration::from_millis(200);

/// Color of lit glyph cells.
pub const ON_COLOR_DEFAULT: Rgb = colors::BLUE;

/// Color of dark glyph cells.
pub const OFF_COLOR_DEFAULT: Rgb = colors::BLACK;

/// Time one matrix frame occupies the data line, latch gap included.
///
/// A render period must be longer than this. It is a lower bound on how long
/// [`write_frame`](crate::led_strip::LedTransport::write_frame) takes; timer
/// wake-up latency comes on top.
pub const FRAME_TRANSMIT_TIME: Duration = frame_time(MATRIX_LEN);

/// Everything about the device that is not a pin.
///
/// ```rust
/// use digit_matrix::config::DigitMatrixConfig;
/// use digit_matrix::led_strip::colors;
///
/// let config = DigitMatrixConfig {
///     on_color: colors::RED,
///     ..DigitMatrixConfig::DEFAULT
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DigitMatrixConfig {
    /// How the buttons are wired.
    pub pressed_to: PressedTo,
    /// Minimum time between two accepted presses of the same button.
    pub debounce_window: Duration,
    /// Redraw period of the matrix.
    pub render_period: Duration,
    /// Toggle period of the status LED.
    pub blink_period: Duration,
    /// Color of lit cells.
    pub on_color: Rgb,
    /// Color of dark cells.
    pub off_color: Rgb,
    /// Digit shown at power-up.
    pub initial_digit: Digit,
    /// Status LED level at power-up (`true` is on).
    pub status_led_initial: bool,
}

impl DigitMatrixConfig {
    /// The board's configuration.
    pub const DEFAULT: Self = Self {
        pressed_to: PressedTo::Ground,
        debounce_window: DEBOUNCE_WINDOW_DEFAULT,
        render_period: RENDER_PERIOD_DEFAULT,
        blink_period: BLINK_PERIOD_DEFAULT,
        on_color: ON_COLOR_DEFAULT,
        off_color: OFF_COLOR_DEFAULT,
        initial_digit: Digit::ZERO,
        status_led_initial: false,
    };

    /// Checks that the periods can be honored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PeriodTooShort`] if any period is zero, or if the render
    /// period is not longer than one frame transmission.
    pub const fn validate(&self) -> Result<()> {
        if self.debounce_window.as_ticks() == 0
            || self.blink_period.as_ticks() == 0
            || self.render_period.as_ticks() <= FRAME_TRANSMIT_TIME.as_ticks()
        {
            return Err(Error::PeriodTooShort);
        }
        Ok(())
    }
}

impl Default for DigitMatrixConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
