//! Fake pins and transports shared by the host tests.
#![allow(dead_code, reason = "each test binary uses a subset")]

use core::convert::Infallible;
use core::future;

use digit_matrix::led_strip::{Frame1d, LedTransport};
use digit_matrix::{Error, Result};
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};
use embedded_hal_async::digital::Wait;

/// An input whose level the test sets, with queued edges for `Wait`.
#[derive(Debug, Default)]
pub struct FakeInput {
    pub high: bool,
    pub falling_edges: usize,
    pub rising_edges: usize,
    pub reads: usize,
}

impl FakeInput {
    /// An active-low button, currently held down.
    pub fn pressed_low() -> Self {
        Self {
            high: false,
            ..Self::default()
        }
    }

    /// An active-low button, currently released.
    pub fn released_high() -> Self {
        Self {
            high: true,
            ..Self::default()
        }
    }
}

impl ErrorType for FakeInput {
    type Error = Infallible;
}

impl InputPin for FakeInput {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        self.reads += 1;
        Ok(self.high)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        self.reads += 1;
        Ok(!self.high)
    }
}

impl Wait for FakeInput {
    async fn wait_for_high(&mut self) -> Result<(), Infallible> {
        if !self.high {
            future::pending::<()>().await;
        }
        Ok(())
    }

    async fn wait_for_low(&mut self) -> Result<(), Infallible> {
        if self.high {
            future::pending::<()>().await;
        }
        Ok(())
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Infallible> {
        if self.rising_edges == 0 {
            future::pending::<()>().await;
        }
        self.rising_edges -= 1;
        Ok(())
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Infallible> {
        if self.falling_edges == 0 {
            future::pending::<()>().await;
        }
        self.falling_edges -= 1;
        Ok(())
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Infallible> {
        if self.falling_edges > 0 {
            self.wait_for_falling_edge().await
        } else {
            self.wait_for_rising_edge().await
        }
    }
}

/// An input whose every read fails.
#[derive(Debug, Default)]
pub struct BrokenInput;

impl ErrorType for BrokenInput {
    type Error = ErrorKind;
}

impl InputPin for BrokenInput {
    fn is_high(&mut self) -> Result<bool, ErrorKind> {
        Err(ErrorKind::Other)
    }

    fn is_low(&mut self) -> Result<bool, ErrorKind> {
        Err(ErrorKind::Other)
    }
}

/// An output that remembers every level written to it.
#[derive(Debug, Default)]
pub struct FakeOutput {
    pub writes: Vec<bool>,
}

impl FakeOutput {
    pub fn level(&self) -> Option<bool> {
        self.writes.last().copied()
    }
}

impl ErrorType for FakeOutput {
    type Error = Infallible;
}

impl OutputPin for FakeOutput {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.writes.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.writes.push(true);
        Ok(())
    }
}

/// A transport that records the wire words of every frame, slot 0 first.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub frames: Vec<Vec<u32>>,
}

impl<const N: usize> LedTransport<N> for RecordingTransport {
    async fn write_frame(&mut self, frame: &Frame1d<N>) -> Result<()> {
        self.frames.push(frame.grb_words().collect());
        Ok(())
    }
}

/// A transport that refuses every frame.
#[derive(Debug, Default)]
pub struct FailingTransport;

impl<const N: usize> LedTransport<N> for FailingTransport {
    async fn write_frame(&mut self, _frame: &Frame1d<N>) -> Result<()> {
        Err(Error::Transport)
    }
}
