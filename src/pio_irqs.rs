//! Interrupt bindings for the PIO block that drives the matrix.
#![expect(missing_docs, reason = "bind_interrupts! generates an undocumented struct")]

use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::InterruptHandler;

bind_interrupts!(pub struct Pio0Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});
