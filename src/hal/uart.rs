use crate::config::{CPU_FREQ_HZ, UART_BAUD};
use avr_device::atmega32a::USART;

// Normal speed: UBRR = f_cpu / (16 * baud) - 1, 51 at 8 MHz / 9600
const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

const UDRE: u8 = 1 << 5;
const TXEN: u8 = 1 << 3;
// URSEL selects UCSRC over UBRRH on the shared address
const UCSRC_8N1: u8 = (1 << 7) | (1 << 2) | (1 << 1);

/// Transmit-only USART. Writes busy-wait on the data register.
pub struct Uart {
    usart: USART,
}

impl Uart {
    pub fn new(usart: USART) -> Self {
        usart.ubrrl.write(|w| unsafe { w.bits(UBRR as u8) });
        usart.ucsrc.write(|w| unsafe { w.bits(UCSRC_8N1) });
        usart.ucsrb.write(|w| unsafe { w.bits(TXEN) });
        Self { usart }
    }

    pub fn write_byte(&mut self, byte: u8) {
        while self.usart.ucsra.read().bits() & UDRE == 0 {}
        self.usart.udr.write(|w| unsafe { w.bits(byte) });
    }

    pub fn write_str(&mut self, s: &str) {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
    }
}
