//! A single button-driven digit shown on a 5×5 NeoPixel-style (WS2812) matrix,
//! with an independently blinking status LED, for Pico 1 and 2.
//!
//! The portable core ([`digit`], [`debounce`], [`button`], [`led2d`], [`led_strip`],
//! [`blink`], [`config`]) has no hardware dependencies and is tested on the host.
//! The Pico peripheral layer ([`digit_matrix`] and the PIO transport) is compiled
//! with the `pico1` or `pico2` feature.
//!
//! # Glossary
//!
//! - **Digit:** the single value (0–9) shown on the matrix.
//! - **Glyph:** the 5×5 on/off pattern for one digit.
//! - **Layout:** the translation from `(col, row)` to the LED's position on the wiring.
//! - **Frame:** one complete sequence of 25 colors, sent to the matrix in wiring order.
//! - **PIO ([Programmable I/O](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25)):**
//!   Pico 1 has 2. Pico 2 has 3. One state machine generates the WS2812 bitstream.
#![no_std]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time check: a board build needs an architecture
#[cfg(all(any(feature = "pico1", feature = "pico2"), not(feature = "arm")))]
compile_error!("Board features 'pico1'/'pico2' require the 'arm' feature");

pub mod blink;
pub mod button;
pub mod config;
pub mod debounce;
pub mod digit;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod digit_matrix;
mod error;
pub mod led2d;
pub mod led_strip;
#[cfg(any(feature = "pico1", feature = "pico2"))]
#[doc(hidden)]
pub mod pio_irqs;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
