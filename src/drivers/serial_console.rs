use crate::hal::Uart;
use core::convert::Infallible;

/// Line-oriented console on the USART, the sink for [`crate::logger::Logger`].
pub struct SerialConsole {
    uart: Uart,
}

impl SerialConsole {
    pub fn new(uart: Uart) -> Self {
        Self { uart }
    }
}

impl ufmt::uWrite for SerialConsole {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.uart.write_str(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> Result<(), Infallible> {
        let mut buf = [0u8; 4];
        self.uart.write_str(c.encode_utf8(&mut buf));
        Ok(())
    }
}
