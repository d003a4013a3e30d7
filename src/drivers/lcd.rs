//! HD44780 character LCD in 4-bit mode.

use crate::config::{LCD_CLEAR_MS, LCD_COLS, LCD_COMMAND_MS, LCD_POWER_ON_MS, LCD_ROWS};
use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::digital::v2::OutputPin;

const CLEAR_DISPLAY: u8 = 0x01;
const RETURN_HOME: u8 = 0x02;
const ENTRY_MODE_INCREMENT: u8 = 0x06;
const DISPLAY_CONTROL: u8 = 0x08;
const DISPLAY_ON: u8 = 0x04;
const CURSOR_ON: u8 = 0x02;
const BLINK_ON: u8 = 0x01;
const FUNCTION_SET_4BIT_2LINE: u8 = 0x28;
const SET_CGRAM: u8 = 0x40;
const SET_DDRAM: u8 = 0x80;

// 4x20 modules continue line 0 on line 2 and line 1 on line 3
const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// Display settings changed through [`Lcd::set_option`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LcdOption {
    Clear,
    Home,
    DisplayOn,
    DisplayOff,
    CursorOn,
    CursorOff,
    BlinkOn,
    BlinkOff,
}

/// "Set DDRAM address" command for a zero based position, clamped to the panel.
pub fn ddram_address(row: u8, col: u8) -> u8 {
    let row = row.min(LCD_ROWS - 1) as usize;
    let col = col.min(LCD_COLS - 1);
    SET_DDRAM | (ROW_OFFSETS[row] + col)
}

pub struct Lcd<P, D> {
    rs: P,
    en: P,
    data: [P; 4],
    delay: D,
    control: u8,
}

impl<P, D, E> Lcd<P, D>
where
    P: OutputPin<Error = E>,
    D: DelayMs<u16> + DelayUs<u16>,
{
    /// `data` is D4..D7.
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
            control: DISPLAY_ON,
        }
    }

    pub fn init(&mut self) -> Result<(), E> {
        self.delay.delay_ms(LCD_POWER_ON_MS);
        self.rs.set_low()?;

        // Wake up in 8-bit mode, then drop to 4-bit
        for _ in 0..3 {
            self.write_nibble(0x3)?;
            self.delay.delay_ms(5);
        }
        self.write_nibble(0x2)?;
        self.delay.delay_ms(LCD_COMMAND_MS);

        self.command(FUNCTION_SET_4BIT_2LINE)?;
        self.command(DISPLAY_CONTROL | self.control)?;
        self.set_option(LcdOption::Clear)?;
        self.command(ENTRY_MODE_INCREMENT)
    }

    pub fn set_option(&mut self, option: LcdOption) -> Result<(), E> {
        match option {
            LcdOption::Clear => {
                self.command(CLEAR_DISPLAY)?;
                self.delay.delay_ms(LCD_CLEAR_MS);
                return Ok(());
            }
            LcdOption::Home => {
                self.command(RETURN_HOME)?;
                self.delay.delay_ms(LCD_CLEAR_MS);
                return Ok(());
            }
            LcdOption::DisplayOn => self.control |= DISPLAY_ON,
            LcdOption::DisplayOff => self.control &= !DISPLAY_ON,
            LcdOption::CursorOn => self.control |= CURSOR_ON,
            LcdOption::CursorOff => self.control &= !CURSOR_ON,
            LcdOption::BlinkOn => self.control |= BLINK_ON,
            LcdOption::BlinkOff => self.control &= !BLINK_ON,
        }
        self.command(DISPLAY_CONTROL | self.control)
    }

    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), E> {
        self.command(ddram_address(row, col))
    }

    pub fn write_char(&mut self, ch: u8) -> Result<(), E> {
        self.rs.set_high()?;
        self.write_byte(ch)?;
        self.delay.delay_us(41);
        Ok(())
    }

    pub fn write_string(&mut self, s: &str) -> Result<(), E> {
        s.bytes().try_for_each(|b| self.write_char(b))
    }

    pub fn write_number(&mut self, n: i32) -> Result<(), E> {
        ufmt::uwrite!(self, "{}", n)
    }

    pub fn write_hex(&mut self, n: u16) -> Result<(), E> {
        const HEX_CHARS: [u8; 16] = *b"0123456789ABCDEF";
        self.write_string("0x")?;
        for shift in [12, 8, 4, 0] {
            self.write_char(HEX_CHARS[((n >> shift) & 0xF) as usize])?;
        }
        Ok(())
    }

    pub fn write_binary(&mut self, n: u8) -> Result<(), E> {
        for bit in (0..8).rev() {
            self.write_char(if n & (1 << bit) != 0 { b'1' } else { b'0' })?;
        }
        Ok(())
    }

    /// Store a 5x8 glyph in CGRAM `slot` (0-7); print it with `write_char(slot)`.
    pub fn define_glyph(&mut self, slot: u8, pattern: &[u8; 8]) -> Result<(), E> {
        self.command(SET_CGRAM | ((slot & 0x07) << 3))?;
        for &row in pattern {
            self.write_char(row & 0x1F)?;
        }
        self.command(SET_DDRAM)
    }

    fn command(&mut self, cmd: u8) -> Result<(), E> {
        self.rs.set_low()?;
        self.write_byte(cmd)?;
        self.delay.delay_ms(LCD_COMMAND_MS);
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), E> {
        self.write_nibble(byte >> 4)?;
        self.write_nibble(byte & 0x0F)
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), E> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            if nibble & (1 << bit) != 0 {
                pin.set_high()?;
            } else {
                pin.set_low()?;
            }
        }
        self.en.set_high()?;
        self.delay.delay_us(1);
        self.en.set_low()?;
        self.delay.delay_us(1);
        Ok(())
    }
}

impl<P, D, E> ufmt::uWrite for Lcd<P, D>
where
    P: OutputPin<Error = E>,
    D: DelayMs<u16> + DelayUs<u16>,
{
    type Error = E;

    fn write_str(&mut self, s: &str) -> Result<(), E> {
        self.write_string(s)
    }
}
