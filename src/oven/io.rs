use super::state::Event;

/// Board services the oven controller drives.
///
/// On the target every method maps onto pins, Timer1 and the LCD and the
/// error type is `Infallible`. Tests substitute an in-memory board.
pub trait OvenIo {
    type Error;

    /// Start/stop buttons; returns once a pressed button is released.
    fn poll_event(&mut self) -> Result<Event, Self::Error>;

    fn door_open(&mut self) -> Result<bool, Self::Error>;

    fn food_present(&mut self) -> Result<bool, Self::Error>;

    /// ASCII key from the keypad; `WouldBlock` when nothing is pressed.
    fn read_key(&mut self) -> nb::Result<u8, Self::Error>;

    /// Heater, lamp and motor together.
    fn set_loads(&mut self, on: bool) -> Result<(), Self::Error>;

    /// Start Timer1 with its overflow interrupt, or stop and mask it.
    fn run_ticks(&mut self, on: bool);

    fn clear_screen(&mut self) -> Result<(), Self::Error>;

    /// Write `text` at a zero based `row`/`col` of the character LCD.
    fn write_at(&mut self, row: u8, col: u8, text: &str) -> Result<(), Self::Error>;

    fn delay_ms(&mut self, ms: u16);
}
