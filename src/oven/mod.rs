//! Oven control core: state machine, countdown and digit entry.

pub mod controller;
pub mod countdown;
pub mod digits;
pub mod display;
pub mod io;
pub mod state;

pub use controller::{OvenController, Transition};
pub use countdown::Countdown;
pub use digits::DigitBuffer;
pub use io::OvenIo;
pub use state::{Event, Guards, Notice, OvenState, PauseReason, Power};
