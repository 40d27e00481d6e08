//! The whole device: two buttons, the 5×5 matrix, and the status LED, each run by its own task.
//!
//! See [`DigitMatrix`] for usage.

use embassy_executor::{SendSpawner, Spawner};
use embassy_rp::Peri;
use embassy_rp::dma::Channel;
use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{Common, Pio, PioPin};
use embassy_rp::pio_programs::ws2812::PioWs2812Program;
use embassy_time::{Duration, Instant, Ticker};
use static_cell::StaticCell;

use crate::blink::Blinker;
use crate::button::{ButtonLine, DigitButtons, EdgeEvent, LineId, PressedTo};
use crate::config::DigitMatrixConfig;
use crate::debounce::Debouncer;
use crate::digit::{AtomicDigit, Digit};
use crate::led_strip::ws2812::Ws2812;
use crate::led2d::layout::MATRIX_LAYOUT;
use crate::led2d::{DigitRenderer, MATRIX_LEN, MatrixDisplay};
use crate::pio_irqs::Pio0Irqs;
use crate::{Error, Result};

type MatrixTransport = Ws2812<'static, PIO0, 0, MATRIX_LEN>;

// ============================================================================
// DigitMatrixStatic - Static resources for the device
// ============================================================================

/// Static resources for [`DigitMatrix`].
///
/// Create with [`DigitMatrix::new_static`] and keep in a `static`.
pub struct DigitMatrixStatic {
    digit: AtomicDigit,
    common_cell: StaticCell<Common<'static, PIO0>>,
    program_cell: StaticCell<PioWs2812Program<'static, PIO0>>,
}

impl DigitMatrixStatic {
    #[must_use]
    const fn new() -> Self {
        Self {
            digit: AtomicDigit::new(Digit::ZERO),
            common_cell: StaticCell::new(),
            program_cell: StaticCell::new(),
        }
    }
}

// ============================================================================
// DigitMatrix - Handle to the running device
// ============================================================================

/// A digit that two buttons step up and down, shown on a 5×5 WS2812 matrix,
/// plus a status LED that blinks on its own.
///
/// [`new`](Self::new) spawns three tasks and returns:
/// - **input**, on `input_spawner`: waits for a press edge on either button,
///   debounces it, and steps the digit. Give it an executor at a higher interrupt
///   priority than `spawner` so a press is handled even while a frame is being sent.
/// - **render**, on `spawner`: every render period, snapshots the digit and sends its frame.
/// - **blink**, on `spawner`: every blink period, toggles the status LED.
///
/// The tasks share nothing but the digit, which is a single atomic byte.
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// use digit_matrix::config::DigitMatrixConfig;
/// use digit_matrix::digit_matrix::{DigitMatrix, DigitMatrixStatic};
/// use embassy_executor::{SendSpawner, Spawner};
/// # #[panic_handler]
/// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
///
/// async fn example(spawner: Spawner, input_spawner: SendSpawner) -> digit_matrix::Result<()> {
///     static DIGIT_MATRIX_STATIC: DigitMatrixStatic = DigitMatrix::new_static();
///     let p = embassy_rp::init(Default::default());
///
///     let digit_matrix = DigitMatrix::new(
///         &DIGIT_MATRIX_STATIC,
///         p.PIN_5,
///         p.PIN_6,
///         p.PIN_7,
///         p.PIN_13,
///         p.PIO0,
///         p.DMA_CH0,
///         DigitMatrixConfig::DEFAULT,
///         spawner,
///         input_spawner,
///     )?;
///     defmt::info!("showing {}", digit_matrix.digit());
///     Ok(())
/// }
/// ```
pub struct DigitMatrix {
    digit: &'static AtomicDigit,
}

impl DigitMatrix {
    /// Create [`DigitMatrix`] resources.
    #[must_use]
    pub const fn new_static() -> DigitMatrixStatic {
        DigitMatrixStatic::new()
    }

    /// Configures the pins, PIO0 and its DMA channel, then spawns the input, render, and blink tasks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PeriodTooShort`] if `config` does not validate, and
    /// [`Error::TaskSpawn`] if a task cannot be spawned.
    ///
    /// # Panics
    ///
    /// Panics if called twice with the same `digit_matrix_static`.
    #[expect(
        clippy::too_many_arguments,
        reason = "one argument per pin and peripheral, plus the two executors"
    )]
    pub fn new(
        digit_matrix_static: &'static DigitMatrixStatic,
        increment_pin: Peri<'static, impl Pin>,
        decrement_pin: Peri<'static, impl Pin>,
        led_pin: Peri<'static, impl PioPin>,
        status_led_pin: Peri<'static, impl Pin>,
        pio: Peri<'static, PIO0>,
        dma: Peri<'static, impl Channel>,
        config: DigitMatrixConfig,
        spawner: Spawner,
        input_spawner: SendSpawner,
    ) -> Result<Self> {
        config.validate()?;

        let digit = &digit_matrix_static.digit;
        digit.store(config.initial_digit);

        // Buttons
        let pull = match config.pressed_to {
            PressedTo::Voltage => Pull::Down,
            PressedTo::Ground => Pull::Up,
        };
        let increment_line = LineId(increment_pin.pin());
        let decrement_line = LineId(decrement_pin.pin());
        let buttons = DigitButtons::new(
            ButtonLine::with_debouncer(
                increment_line,
                Input::new(increment_pin, pull),
                Debouncer::new(config.debounce_window),
            ),
            ButtonLine::with_debouncer(
                decrement_line,
                Input::new(decrement_pin, pull),
                Debouncer::new(config.debounce_window),
            ),
            config.pressed_to,
            digit,
        );

        // Matrix
        let Pio {
            mut common, sm0, ..
        } = Pio::new(pio, Pio0Irqs);
        let program = digit_matrix_static
            .program_cell
            .init(PioWs2812Program::new(&mut common));
        let transport = Ws2812::new(&mut common, sm0, dma, led_pin, program);
        digit_matrix_static.common_cell.init(common);
        let renderer = DigitRenderer::new(&MATRIX_LAYOUT, config.on_color, config.off_color);
        let display = MatrixDisplay::new(digit, renderer, transport);

        // Status LED
        let status_led = Output::new(status_led_pin, Level::from(config.status_led_initial));
        let Ok(blinker) = Blinker::new(status_led, config.status_led_initial);

        defmt::info!(
            "DigitMatrix: increment GPIO{}, decrement GPIO{}, {}, digit {}",
            increment_line.0,
            decrement_line.0,
            config.pressed_to,
            config.initial_digit
        );
        defmt::info!(
            "DigitMatrix: render every {} ms, blink every {} ms, debounce {} ms",
            config.render_period.as_millis(),
            config.blink_period.as_millis(),
            config.debounce_window.as_millis()
        );

        input_spawner
            .spawn(input_task(buttons))
            .map_err(Error::TaskSpawn)?;
        spawner
            .spawn(render_task(display, config.render_period))
            .map_err(Error::TaskSpawn)?;
        spawner
            .spawn(blink_task(blinker, config.blink_period))
            .map_err(Error::TaskSpawn)?;

        Ok(Self { digit })
    }

    /// The digit as of now.
    #[must_use]
    pub fn digit(&self) -> Digit {
        self.digit.load()
    }
}

// ============================================================================
// Tasks
// ============================================================================

#[embassy_executor::task]
async fn input_task(mut buttons: DigitButtons<'static, Input<'static>>) -> ! {
    let edge = buttons.pressed_to().press_edge();
    loop {
        let line = buttons.wait_for_press_edge().await;
        buttons.on_edge(EdgeEvent {
            line,
            edge,
            timestamp: Instant::now(),
        });
    }
}

#[embassy_executor::task]
async fn render_task(
    mut display: MatrixDisplay<'static, MatrixTransport>,
    period: Duration,
) -> ! {
    let mut ticker = Ticker::every(period);
    let mut shown: Option<Digit> = None;
    loop {
        let digit = match display.render_frame().await {
            Ok(digit) => digit,
            Err(err) => defmt::panic!("DigitMatrix: render failed: {}", err),
        };
        if shown != Some(digit) {
            defmt::info!("DigitMatrix: showing {}", digit);
            shown = Some(digit);
        }
        ticker.next().await;
    }
}

#[embassy_executor::task]
async fn blink_task(mut blinker: Blinker<Output<'static>>, period: Duration) -> ! {
    let mut ticker = Ticker::every(period);
    loop {
        ticker.next().await;
        let Ok(level) = blinker.tick();
        defmt::trace!("DigitMatrix: status LED {}", level);
    }
}
