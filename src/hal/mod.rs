//! ATmega32 register access: port pins, Timer1 ticks, busy-wait delays
//! and the USART transmitter.

pub mod gpio;
pub mod timer;
pub mod uart;

pub use gpio::{board, Input, Output, Pin, Port};
pub use timer::{Delay, Prescaler, Timer1};
pub use uart::Uart;
