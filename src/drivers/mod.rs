pub mod buttons;
pub mod keypad;
pub mod lcd;
pub mod loads;
pub mod sensors;

#[cfg(target_arch = "avr")]
pub mod serial_console;

pub use buttons::ButtonPair;
pub use keypad::{Keypad, OVEN_KEYMAP};
pub use lcd::{Lcd, LcdOption};
pub use loads::Loads;
pub use sensors::Sensors;

#[cfg(target_arch = "avr")]
pub use serial_console::SerialConsole;
