//! Frames, wire encoding, and the transport seam for NeoPixel-style (WS2812) LED strips.
//!
//! A [`Frame1d`] holds one color per LED in wiring order. [`grb_word`] packs a color
//! into the word the WS2812 bitstream expects, and [`LedTransport`] is anything that
//! can put a whole frame on the wire. On a Pico, the transport is
//! [`Ws2812`](ws2812::Ws2812), embassy-rp's PIO WS2812 driver.
//!
//! See the [`led2d`](mod@crate::led2d) module for how a digit becomes a frame.

/// Predefined RGB color constants from the `smart_leds` crate.
///
/// Common colors include `RED`, `GREEN`, `BLUE`, `YELLOW`, `WHITE`, `BLACK`, `CYAN`, `MAGENTA`, `ORANGE`, `PURPLE`.
#[doc(inline)]
pub use smart_leds::colors;

use core::ops::{Deref, DerefMut};
use embassy_time::Duration;
use smart_leds::RGB8;

use crate::Result;

#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod ws2812;

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = RGB8;

// ============================================================================
// Wire encoding
// ============================================================================

/// Bits sent per LED (8 each for green, red, blue).
pub const BITS_PER_LED: u32 = 24;

/// Time to shift out one LED's [`BITS_PER_LED`] bits at 800 kHz (1.25 µs per bit).
pub const LED_TIME: Duration = Duration::from_micros(30);

/// Time the PIO driver holds the data line low after a frame so the LEDs latch it.
pub const RESET_GAP: Duration = Duration::from_micros(55);

/// Time an `n`-LED frame occupies the data line: every LED's bits, then the latch gap.
///
/// ```rust
/// use digit_matrix::led_strip::frame_time;
///
/// assert_eq!(frame_time(25).as_micros(), 25 * 30 + 55);
/// ```
#[must_use]
pub const fn frame_time(n: usize) -> Duration {
    Duration::from_micros(LED_TIME.as_micros() * n as u64 + RESET_GAP.as_micros())
}

/// Packs `color` into the 32-bit word shifted out for one LED.
///
/// WS2812 takes green, then red, then blue, most significant bit first. The
/// 24 color bits sit at the top of the word (`0xGGRRBB00`) because the shifter
/// sends from bit 31 downward and stops after 24 bits. This is the word the PIO
/// driver builds for its `Grb` order; host code uses it to check frames.
///
/// ```rust
/// use digit_matrix::led_strip::{Rgb, grb_word};
///
/// assert_eq!(grb_word(Rgb::new(0x11, 0x22, 0x33)), 0x2211_3300);
/// ```
#[must_use]
pub const fn grb_word(color: Rgb) -> u32 {
    (color.g as u32) << 24 | (color.r as u32) << 16 | (color.b as u32) << 8
}

// ============================================================================
// Frame1d
// ============================================================================

/// [`Rgb`] pixel data for an LED strip, indexed by position on the wire.
///
/// Frames deref to `[Rgb; N]`, so you can mutate pixels directly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Frame1d<const N: usize>(pub [Rgb; N]);

impl<const N: usize> Frame1d<N> {
    /// Number of LEDs in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([Rgb::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: Rgb) -> Self {
        Self([color; N])
    }

    /// The wire words for this frame, LED 0 first.
    pub fn grb_words(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().map(|color| grb_word(*color))
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[Rgb; N]> for Frame1d<N> {
    fn from(array: [Rgb; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<Frame1d<N>> for [Rgb; N] {
    fn from(frame: Frame1d<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// LedTransport
// ============================================================================

/// Something that can send a whole frame to an LED strip.
///
/// Implementations send slot 0 first and return only after every slot has been
/// accepted (and, for WS2812, after the latch gap). There is no retry: a failed
/// frame is an error for the caller.
pub trait LedTransport<const N: usize> {
    /// Sends `frame`, LED 0 first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) if the strip cannot take the frame.
    async fn write_frame(&mut self, frame: &Frame1d<N>) -> Result<()>;
}

impl<const N: usize, T: LedTransport<N>> LedTransport<N> for &mut T {
    async fn write_frame(&mut self, frame: &Frame1d<N>) -> Result<()> {
        (**self).write_frame(frame).await
    }
}
