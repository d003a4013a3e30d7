use avr_device::atmega32a::{PORTA, PORTB, PORTC, PORTD};
use core::convert::Infallible;
use core::marker::PhantomData;
use core::ptr::{read_volatile, write_volatile};
use embedded_hal::digital::v2::{InputPin, OutputPin, ToggleableOutputPin};

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Port {
    A,
    B,
    C,
    D,
}

// PINx, DDRx and PORTx are consecutive in every port block
const PIN: usize = 0;
const DDR: usize = 1;
const OUT: usize = 2;

impl Port {
    fn reg(self, offset: usize) -> *mut u8 {
        let base = match self {
            Port::A => PORTA::ptr() as *mut u8,
            Port::B => PORTB::ptr() as *mut u8,
            Port::C => PORTC::ptr() as *mut u8,
            Port::D => PORTD::ptr() as *mut u8,
        };
        base.wrapping_add(offset)
    }

    fn modify(self, offset: usize, f: impl FnOnce(u8) -> u8) {
        avr_device::interrupt::free(|_| unsafe {
            let reg = self.reg(offset);
            write_volatile(reg, f(read_volatile(reg)));
        });
    }

    /// Input levels of all eight pins.
    pub fn read(self) -> u8 {
        unsafe { read_volatile(self.reg(PIN)) }
    }

    /// Drive all eight output latches at once.
    pub fn write(self, value: u8) {
        unsafe { write_volatile(self.reg(OUT), value) }
    }
}

/// One port pin, selected at runtime so pins can be stored in arrays.
#[derive(Debug)]
pub struct Pin<MODE> {
    port: Port,
    bit: u8,
    _mode: PhantomData<MODE>,
}

impl Pin<Input> {
    /// Pin in its reset state: input without pull-up.
    pub const fn new(port: Port, bit: u8) -> Self {
        Pin {
            port,
            bit,
            _mode: PhantomData,
        }
    }
}

impl<MODE: PinMode> Pin<MODE> {
    fn mask(&self) -> u8 {
        1 << self.bit
    }

    fn with_mode<NEW>(self) -> Pin<NEW> {
        Pin {
            port: self.port,
            bit: self.bit,
            _mode: PhantomData,
        }
    }

    pub fn into_output(self) -> Pin<Output> {
        let mask = self.mask();
        self.port.modify(DDR, |r| r | mask);
        self.with_mode()
    }

    pub fn into_input(self) -> Pin<Input> {
        let mask = self.mask();
        self.port.modify(DDR, |r| r & !mask);
        self.port.modify(OUT, |r| r & !mask);
        self.with_mode()
    }

    pub fn into_pull_up_input(self) -> Pin<Input> {
        let mask = self.mask();
        self.port.modify(DDR, |r| r & !mask);
        self.port.modify(OUT, |r| r | mask);
        self.with_mode()
    }
}

impl InputPin for Pin<Input> {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(self.port.read() & self.mask() != 0)
    }

    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(self.port.read() & self.mask() == 0)
    }
}

impl OutputPin for Pin<Output> {
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Infallible> {
        let mask = self.mask();
        self.port.modify(OUT, |r| r | mask);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        let mask = self.mask();
        self.port.modify(OUT, |r| r & !mask);
        Ok(())
    }
}

// The ATmega32 has no PINx write-to-toggle, flip the latch instead
impl ToggleableOutputPin for Pin<Output> {
    type Error = Infallible;

    fn toggle(&mut self) -> Result<(), Infallible> {
        let mask = self.mask();
        self.port.modify(OUT, |r| r ^ mask);
        Ok(())
    }
}

/// Oven board wiring
pub mod board {
    use super::Port;

    // Push buttons and sensors (PORTA)
    pub const START_BUTTON: (Port, u8) = (Port::A, 0);
    pub const STOP_BUTTON: (Port, u8) = (Port::A, 1);
    pub const DOOR_SENSOR: (Port, u8) = (Port::A, 2);
    pub const WEIGHT_SENSOR: (Port, u8) = (Port::A, 3);

    // Loads (PORTC)
    pub const HEATER: (Port, u8) = (Port::C, 0);
    pub const LAMP: (Port, u8) = (Port::C, 1);
    pub const MOTOR: (Port, u8) = (Port::C, 2);

    // Keypad (PORTD)
    pub const KEYPAD_ROWS: [(Port, u8); 4] = [(Port::D, 0), (Port::D, 1), (Port::D, 2), (Port::D, 3)];
    pub const KEYPAD_COLS: [(Port, u8); 4] = [(Port::D, 4), (Port::D, 5), (Port::D, 6), (Port::D, 7)];

    // LCD control on PORTB, D4..D7 on PORTC
    pub const LCD_RS: (Port, u8) = (Port::B, 2);
    pub const LCD_EN: (Port, u8) = (Port::B, 3);
    pub const LCD_DATA: [(Port, u8); 4] = [(Port::C, 4), (Port::C, 5), (Port::C, 6), (Port::C, 7)];
}
