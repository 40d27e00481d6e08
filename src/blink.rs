//! A status LED that toggles on every tick.
//!
//! See [`Blinker`].

use embedded_hal::digital::{OutputPin, PinState};

/// Drives a single on/off output, flipping it once per [`tick`](Self::tick).
///
/// After `n` ticks the output is `initial XOR (n % 2 == 1)`. The blinker knows
/// nothing about time: the caller ticks it at a fixed period, independent of
/// the display.
///
/// ```rust
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::{ErrorType, OutputPin};
/// # struct Led(bool);
/// # impl ErrorType for Led { type Error = Infallible; }
/// # impl OutputPin for Led {
/// #     fn set_low(&mut self) -> Result<(), Infallible> { self.0 = false; Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Infallible> { self.0 = true; Ok(()) }
/// # }
/// use digit_matrix::blink::Blinker;
///
/// let mut blinker = Blinker::new(Led(false), false)?;
/// assert!(blinker.tick()?);
/// assert!(!blinker.tick()?);
/// # Ok::<(), Infallible>(())
/// ```
#[derive(Debug)]
pub struct Blinker<P> {
    pin: P,
    state: bool,
}

impl<P: OutputPin> Blinker<P> {
    /// Takes ownership of `pin` and drives it to `initial` (`true` is high).
    ///
    /// # Errors
    ///
    /// Returns the pin's write error.
    pub fn new(mut pin: P, initial: bool) -> Result<Self, P::Error> {
        pin.set_state(PinState::from(initial))?;
        Ok(Self {
            pin,
            state: initial,
        })
    }

    /// Toggles the output and returns the new level.
    ///
    /// The remembered level flips even if the write fails, so the phase of
    /// later ticks is unchanged.
    ///
    /// # Errors
    ///
    /// Returns the pin's write error.
    pub fn tick(&mut self) -> Result<bool, P::Error> {
        self.state = !self.state;
        self.pin.set_state(PinState::from(self.state))?;
        Ok(self.state)
    }

    /// The level last written (or attempted).
    #[must_use]
    pub const fn state(&self) -> bool {
        self.state
    }

    /// The underlying pin.
    #[must_use]
    pub const fn pin(&self) -> &P {
        &self.pin
    }
}
