//! Digit counter: GPIO5 counts up, GPIO6 counts down, the digit shows on a 5×5
//! WS2812 matrix on GPIO7, and the LED on GPIO13 blinks to show the firmware is alive.
#![no_std]
#![no_main]

use core::convert::Infallible;
use core::future;

use digit_matrix::Result;
use digit_matrix::config::DigitMatrixConfig;
use digit_matrix::digit_matrix::{DigitMatrix, DigitMatrixStatic};
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use {defmt_rtt as _, panic_probe as _};

// Button presses are handled here; it preempts the thread-mode render and blink tasks.
static INPUT_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
#[expect(unsafe_code, reason = "interrupt handler that runs the input executor")]
unsafe fn SWI_IRQ_1() {
    // SAFETY: SWI_IRQ_1 is used only by INPUT_EXECUTOR, which was started on it.
    unsafe { INPUT_EXECUTOR.on_interrupt() }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let input_spawner = INPUT_EXECUTOR.start(interrupt::SWI_IRQ_1);

    static DIGIT_MATRIX_STATIC: DigitMatrixStatic = DigitMatrix::new_static();
    let digit_matrix = DigitMatrix::new(
        &DIGIT_MATRIX_STATIC,
        p.PIN_5,
        p.PIN_6,
        p.PIN_7,
        p.PIN_13,
        p.PIO0,
        p.DMA_CH0,
        DigitMatrixConfig::DEFAULT,
        spawner,
        input_spawner,
    )?;
    defmt::info!("digit_counter: started at {}", digit_matrix.digit());

    // The tasks own everything from here on.
    future::pending().await
}
