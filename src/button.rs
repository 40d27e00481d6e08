//! Edge-triggered increment/decrement buttons that step the shared digit.
//!
//! See [`DigitButtons`] for the dispatch rules.

use embassy_futures::select::{Either, select};
use embassy_time::Instant;
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

use crate::debounce::{DEBOUNCE_WINDOW_DEFAULT, Debouncer};
use crate::digit::{AtomicDigit, Digit};

// ============================================================================
// PressedTo - How the button is wired
// ============================================================================

/// Describes how the button is physically wired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub enum PressedTo {
    /// Button connects pin to voltage (3.3V) when pressed.
    /// Uses internal pull-down resistor. Pin reads HIGH when pressed.
    ///
    /// Note: The original Pico 2 (RP2350) has a known silicon bug with pull-down resistors
    /// that can cause pins to stay HIGH after button release. Use `Ground` instead.
    Voltage,

    /// Button connects pin to ground (GND) when pressed (active-low).
    /// Uses internal pull-up resistor. Pin reads LOW when pressed.
    Ground,
}

impl PressedTo {
    /// The edge that signals a press.
    #[must_use]
    pub const fn press_edge(self) -> Edge {
        match self {
            Self::Voltage => Edge::Rising,
            Self::Ground => Edge::Falling,
        }
    }

    /// Reads the raw level of `pin` and reports whether it means "pressed".
    ///
    /// # Errors
    ///
    /// Returns the pin's read error.
    pub fn is_pressed<P: InputPin>(self, pin: &mut P) -> Result<bool, P::Error> {
        match self {
            Self::Voltage => pin.is_high(),
            Self::Ground => pin.is_low(),
        }
    }
}

impl Default for PressedTo {
    fn default() -> Self {
        Self::Ground
    }
}

// ============================================================================
// Edge events
// ============================================================================

/// Direction of a level transition on an input line.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, defmt::Format)]
pub enum Edge {
    /// High to low.
    Falling,
    /// Low to high.
    Rising,
}

/// Identifies an input line (its GPIO number).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub struct LineId(pub u8);

/// One edge notification: which line, which direction, and when.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub struct EdgeEvent {
    /// The line the edge happened on.
    pub line: LineId,
    /// The direction of the transition.
    pub edge: Edge,
    /// When the edge was seen.
    pub timestamp: Instant,
}

// ============================================================================
// DigitButtons - dispatch from edges to digit updates
// ============================================================================

/// One button: its line id, its pin, and its own debounce state.
#[derive(Debug)]
pub struct ButtonLine<P> {
    line: LineId,
    pin: P,
    debouncer: Debouncer,
}

impl<P> ButtonLine<P> {
    /// Creates a button on `line` using the default debounce window.
    #[must_use]
    pub const fn new(line: LineId, pin: P) -> Self {
        Self::with_debouncer(line, pin, Debouncer::new(DEBOUNCE_WINDOW_DEFAULT))
    }

    /// Creates a button on `line` with the given debounce filter.
    #[must_use]
    pub const fn with_debouncer(line: LineId, pin: P, debouncer: Debouncer) -> Self {
        Self {
            line,
            pin,
            debouncer,
        }
    }

    /// The line this button is wired to.
    #[must_use]
    pub const fn line(&self) -> LineId {
        self.line
    }

    /// This button's debounce state.
    #[must_use]
    pub const fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    /// The input pin.
    #[must_use]
    pub const fn pin(&self) -> &P {
        &self.pin
    }
}

/// The increment and decrement buttons, bound to the shared [`AtomicDigit`].
///
/// [`on_edge`](Self::on_edge) is the edge handler. It does at most one debounce
/// check, one pin read, and one atomic digit update. It never blocks, waits, or
/// logs, so it is safe to run at a priority that preempts the renderer.
///
/// # Example
///
/// ```rust,ignore
/// let mut buttons = DigitButtons::new(
///     ButtonLine::new(LineId(5), increment_input),
///     ButtonLine::new(LineId(6), decrement_input),
///     PressedTo::Ground,
///     &DIGIT,
/// );
/// loop {
///     let line = buttons.wait_for_press_edge().await;
///     let edge = PressedTo::Ground.press_edge();
///     buttons.on_edge(EdgeEvent { line, edge, timestamp: Instant::now() });
/// }
/// ```
#[derive(Debug)]
pub struct DigitButtons<'a, P> {
    increment: ButtonLine<P>,
    decrement: ButtonLine<P>,
    pressed_to: PressedTo,
    digit: &'a AtomicDigit,
}

impl<'a, P> DigitButtons<'a, P> {
    /// Binds the two buttons to `digit`.
    #[must_use]
    pub const fn new(
        increment: ButtonLine<P>,
        decrement: ButtonLine<P>,
        pressed_to: PressedTo,
        digit: &'a AtomicDigit,
    ) -> Self {
        Self {
            increment,
            decrement,
            pressed_to,
            digit,
        }
    }

    /// The increment button.
    #[must_use]
    pub const fn increment(&self) -> &ButtonLine<P> {
        &self.increment
    }

    /// The decrement button.
    #[must_use]
    pub const fn decrement(&self) -> &ButtonLine<P> {
        &self.decrement
    }

    /// How both buttons are wired.
    #[must_use]
    pub const fn pressed_to(&self) -> PressedTo {
        self.pressed_to
    }
}

impl<P: InputPin> DigitButtons<'_, P> {
    /// Handles one edge notification and returns the new digit if it changed.
    ///
    /// Edges other than the press edge and lines other than the two buttons are
    /// ignored. A press edge that the line's [`Debouncer`] rejects is ignored too.
    pub fn on_edge(&mut self, event: EdgeEvent) -> Option<Digit> {
        if event.edge != self.pressed_to.press_edge() {
            return None;
        }

        let (button, step): (&mut ButtonLine<P>, fn(&AtomicDigit) -> Digit) =
            if event.line == self.increment.line {
                (&mut self.increment, AtomicDigit::increment)
            } else if event.line == self.decrement.line {
                (&mut self.decrement, AtomicDigit::decrement)
            } else {
                return None;
            };

        if !button
            .debouncer
            .check(event.timestamp, &mut button.pin, self.pressed_to)
        {
            return None;
        }
        Some(step(self.digit))
    }
}

impl<P: InputPin + Wait> DigitButtons<'_, P> {
    /// Waits for the press edge on either button and returns its line.
    ///
    /// Both lines are re-armed on every call. If both buttons are pressed
    /// before this wait is polled, only the increment line is reported; the
    /// decrement wait is dropped, and on hardware its edge is lost unless it is
    /// still pending when the next call re-arms it. Presses on both buttons at
    /// once therefore step the digit by at most one.
    pub async fn wait_for_press_edge(&mut self) -> LineId {
        let pressed_to = self.pressed_to;
        let increment = wait_for_edge(&mut self.increment.pin, pressed_to);
        let decrement = wait_for_edge(&mut self.decrement.pin, pressed_to);
        match select(increment, decrement).await {
            Either::First(()) => self.increment.line,
            Either::Second(()) => self.decrement.line,
        }
    }
}

async fn wait_for_edge<P: Wait>(pin: &mut P, pressed_to: PressedTo) {
    // A wait error still means "look at the line"; the debounce check reads the level.
    let _ = match pressed_to.press_edge() {
        Edge::Falling => pin.wait_for_falling_edge().await,
        Edge::Rising => pin.wait_for_rising_edge().await,
    };
}
