//! Per-input debounce filter for edge-triggered buttons.
//!
//! See [`Debouncer`].

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

use crate::button::PressedTo;

/// Minimum time between two accepted activations of the same input.
pub const DEBOUNCE_WINDOW_DEFAULT: Duration = Duration::from_millis(200);

/// Turns the burst of edges from one bouncing button into single activations.
///
/// Call [`check`](Self::check) only when the press edge fires. A check that comes
/// less than the window after the last *accepted* check is rejected and changes
/// nothing. Otherwise the check is accepted: its time becomes the new reference,
/// and it reports an activation only if the pin still reads as pressed right now.
///
/// A fresh filter has never accepted a check, so the first press always gets
/// past the time rule.
///
/// Each input owns its own `Debouncer`; it is never shared between inputs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub struct Debouncer {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl Debouncer {
    /// Creates a filter with the given window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    /// The window this filter enforces.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Time of the last accepted check, or `None` if there has been none.
    #[must_use]
    pub const fn last_accepted(&self) -> Option<Instant> {
        self.last_accepted
    }

    /// Returns `true` when the edge at `now` is a genuine activation.
    ///
    /// A pin read error counts as "not pressed". The window still restarts, since
    /// the check itself was accepted.
    pub fn check<P: InputPin>(&mut self, now: Instant, pin: &mut P, pressed_to: PressedTo) -> bool {
        if let Some(last_accepted) = self.last_accepted {
            // An instant earlier than the reference cannot be trusted either.
            match now.checked_duration_since(last_accepted) {
                Some(elapsed) if elapsed >= self.window => {}
                _ => return false,
            }
        }
        self.last_accepted = Some(now);
        pressed_to.is_pressed(pin).unwrap_or(false)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW_DEFAULT)
    }
}
