//! The shown digit and the lock-free cell that shares it between the input handler and the renderer.
//!
//! See [`AtomicDigit`] for the sharing rules.

use derive_more::Display;
use portable_atomic::{AtomicU8, Ordering};

use crate::Error;

/// A decimal digit, always in `0..=9`.
///
/// Stepping wraps around: `9.next()` is `0` and `0.prev()` is `9`.
///
/// ```rust
/// use digit_matrix::digit::Digit;
///
/// let nine = Digit::new(9).unwrap();
/// assert_eq!(nine.next(), Digit::ZERO);
/// assert_eq!(Digit::ZERO.prev(), nine);
/// ```
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub struct Digit(u8);

impl Digit {
    /// Number of distinct digits.
    pub const COUNT: u8 = 10;

    /// The digit shown at power-up.
    pub const ZERO: Self = Self(0);

    /// The largest digit.
    pub const MAX: Self = Self(Self::COUNT - 1);

    /// Returns `None` if `value` is not in `0..=9`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value < Self::COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The digit as a number in `0..=9`.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The successor, modulo 10.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % Self::COUNT)
    }

    /// The predecessor, modulo 10.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self((self.0 + Self::COUNT - 1) % Self::COUNT)
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(Error::DigitOutOfRange(value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// The one shared [`Digit`], readable and writable from any context without blocking.
///
/// Writers (the button handler, which preempts everything else) and the reader
/// (the renderer) touch it only through these methods. Each call is one atomic
/// operation on a single byte: reads are `Acquire`, updates are a single
/// read-modify-write with `AcqRel`. There is no lock, so the handler can never
/// wait on the renderer.
///
/// On thumbv6m (Pico 1) there is no native compare-and-swap; `portable_atomic`
/// supplies it with a very short critical section.
#[derive(Debug)]
pub struct AtomicDigit(AtomicU8);

impl AtomicDigit {
    /// Creates the cell holding `digit`.
    #[must_use]
    pub const fn new(digit: Digit) -> Self {
        Self(AtomicU8::new(digit.0))
    }

    /// Takes a consistent snapshot of the digit.
    #[must_use]
    pub fn load(&self) -> Digit {
        Digit(self.0.load(Ordering::Acquire))
    }

    /// Replaces the digit, e.g. to set the power-up value.
    pub fn store(&self, digit: Digit) {
        self.0.store(digit.0, Ordering::Release);
    }

    /// Atomically replaces the digit with its successor and returns the new digit.
    pub fn increment(&self) -> Digit {
        self.update(Digit::next)
    }

    /// Atomically replaces the digit with its predecessor and returns the new digit.
    pub fn decrement(&self) -> Digit {
        self.update(Digit::prev)
    }

    fn update(&self, step: fn(Digit) -> Digit) -> Digit {
        let previous = match self
            .0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |raw| {
                Some(step(Digit(raw)).0)
            }) {
            Ok(previous) | Err(previous) => previous,
        };
        step(Digit(previous))
    }
}

impl Default for AtomicDigit {
    fn default() -> Self {
        Self::new(Digit::ZERO)
    }
}
