use derive_more::{Display, Error, From};
use embassy_executor::SpawnError;

/// Errors returned by this crate.
///
/// Bounced or spurious button edges are not errors; the debounce filter drops them silently.
#[derive(Debug, Display, Error, From, defmt::Format)]
pub enum Error {
    /// A background task could not be spawned (its pool is already in use).
    #[display("failed to spawn task: {_0:?}")]
    #[from]
    TaskSpawn(#[error(not(source))] SpawnError),

    /// A value outside `0..=9` was offered as a digit.
    #[display("{_0} is not a digit (expected 0..=9)")]
    DigitOutOfRange(#[error(not(source))] u8),

    /// A configured period is zero, or too short for one frame transmission.
    #[display("period is too short for the LED frame transmission")]
    PeriodTooShort,

    /// The LED transport did not accept a frame.
    #[display("LED transport failed")]
    Transport,
}

/// Result type for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
