//! Renders the shared digit onto the 5×5 NeoPixel-style (WS2812) matrix.
//!
//! Two tables meet here: the [`glyph`] table says which `(row, col)` cells of a digit
//! are lit, and the [`layout`] says where each cell sits on the LED chain.
//! [`DigitRenderer`] composes them into a [`Frame1d`] in wiring order, and
//! [`MatrixDisplay`] snapshots the shared digit and sends that frame out.
//!
//! # Example
//!
//! ```rust
//! use digit_matrix::digit::Digit;
//! use digit_matrix::led2d::{DigitRenderer, layout::MATRIX_LAYOUT};
//! use digit_matrix::led_strip::colors;
//!
//! let renderer = DigitRenderer::new(&MATRIX_LAYOUT, colors::BLUE, colors::BLACK);
//! let frame = renderer.render(Digit::ZERO);
//!
//! // The top-left cell of "0" is lit, and it is the last LED on the chain.
//! assert_eq!(frame[24], colors::BLUE);
//! // The center cell is dark.
//! assert_eq!(frame[12], colors::BLACK);
//! ```

pub mod glyph;
pub mod layout;

use crate::Result;
use crate::digit::{AtomicDigit, Digit};
use crate::led_strip::{Frame1d, LedTransport, Rgb};
use glyph::{GLYPH_HEIGHT, GLYPH_WIDTH, Glyph};
use layout::LedLayout;

/// Matrix width in LEDs.
pub const MATRIX_WIDTH: usize = GLYPH_WIDTH;

/// Matrix height in LEDs.
pub const MATRIX_HEIGHT: usize = GLYPH_HEIGHT;

/// Number of LEDs in the matrix.
pub const MATRIX_LEN: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// One full frame for the matrix, in wiring order.
pub type MatrixFrame = Frame1d<MATRIX_LEN>;

/// Turns a [`Digit`] into a [`MatrixFrame`].
///
/// Every render starts from an all-off frame and then lights the glyph's cells,
/// so nothing from a previous digit can linger. Rendering is pure: the same digit
/// always gives the same frame.
#[derive(Clone, Copy, Debug)]
pub struct DigitRenderer {
    xy_to_index: [u16; MATRIX_LEN],
    on_color: Rgb,
    off_color: Rgb,
}

impl DigitRenderer {
    /// Creates a renderer for the matrix wired as `led_layout`.
    #[must_use]
    pub const fn new(
        led_layout: &LedLayout<MATRIX_LEN, MATRIX_WIDTH, MATRIX_HEIGHT>,
        on_color: Rgb,
        off_color: Rgb,
    ) -> Self {
        Self {
            xy_to_index: led_layout.xy_to_index(),
            on_color,
            off_color,
        }
    }

    /// Color of lit cells.
    #[must_use]
    pub const fn on_color(&self) -> Rgb {
        self.on_color
    }

    /// Color of dark cells.
    #[must_use]
    pub const fn off_color(&self) -> Rgb {
        self.off_color
    }

    // `row` and `col` come from a glyph, so both are below 5.
    fn led_index(&self, row: usize, col: usize) -> usize {
        usize::from(self.xy_to_index[row * MATRIX_WIDTH + col])
    }

    /// Builds the frame that shows `digit`.
    #[must_use]
    pub fn render(&self, digit: Digit) -> MatrixFrame {
        let mut frame = Frame1d::filled(self.off_color);
        for (row, col) in Glyph::for_digit(digit).lit_cells() {
            frame[self.led_index(row, col)] = self.on_color;
        }
        frame
    }
}

/// Shows the shared digit on the matrix, one frame per call.
///
/// Call [`render_frame`](Self::render_frame) periodically from the main context,
/// never from the button handler: it waits for the transport.
pub struct MatrixDisplay<'a, T> {
    digit: &'a AtomicDigit,
    renderer: DigitRenderer,
    transport: T,
}

impl<'a, T: LedTransport<MATRIX_LEN>> MatrixDisplay<'a, T> {
    /// Creates a display of `digit` that sends frames through `transport`.
    #[must_use]
    pub const fn new(digit: &'a AtomicDigit, renderer: DigitRenderer, transport: T) -> Self {
        Self {
            digit,
            renderer,
            transport,
        }
    }

    /// Reads the digit once, renders it, and sends the frame (LED 0 first).
    ///
    /// Returns the digit that was shown. Later changes to the digit wait for the next call.
    ///
    /// # Errors
    ///
    /// Returns the transport's error; the frame may be partly sent.
    pub async fn render_frame(&mut self) -> Result<Digit> {
        let digit = self.digit.load();
        let frame = self.renderer.render(digit);
        self.transport.write_frame(&frame).await?;
        Ok(digit)
    }

    /// The transport, e.g. to inspect it.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}
