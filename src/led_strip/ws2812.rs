//! WS2812 transport on one PIO state machine, fed by DMA.
//!
//! See [`Ws2812`].

use embassy_rp::Peri;
use embassy_rp::dma::Channel;
use embassy_rp::pio::{Common, Instance, PioPin, StateMachine};
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812, PioWs2812Program};

use super::{Frame1d, LedTransport};
use crate::Result;

/// A WS2812 strip of `N` LEDs, driven by embassy-rp's PIO program in green-red-blue order.
///
/// [`write_frame`](LedTransport::write_frame) returns once DMA has handed every
/// LED's word to the state machine and the driver's latch gap
/// ([`RESET_GAP`](super::RESET_GAP)) has passed.
pub struct Ws2812<'d, PIO: Instance, const SM: usize, const N: usize> {
    driver: PioWs2812<'d, PIO, SM, N, Grb>,
}

impl<'d, PIO: Instance, const SM: usize, const N: usize> Ws2812<'d, PIO, SM, N> {
    /// Starts `sm` on `pin` with an already loaded `program`.
    ///
    /// Load the program once per PIO block with [`PioWs2812Program::new`].
    pub fn new(
        common: &mut Common<'d, PIO>,
        sm: StateMachine<'d, PIO, SM>,
        dma: Peri<'d, impl Channel>,
        pin: Peri<'d, impl PioPin>,
        program: &PioWs2812Program<'d, PIO>,
    ) -> Self {
        Self {
            driver: PioWs2812::new(common, sm, dma, pin, program),
        }
    }
}

impl<PIO: Instance, const SM: usize, const N: usize> LedTransport<N> for Ws2812<'_, PIO, SM, N> {
    async fn write_frame(&mut self, frame: &Frame1d<N>) -> Result<()> {
        self.driver.write(frame).await;
        Ok(())
    }
}
