//! Configuration constants for the microwave firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 8_000_000;

/// Firmware version shown on the splash screen
pub const FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Timer1 clock divider used for the countdown tick
pub const TICK_PRESCALER: u32 = 256;

/// Timer1 counts per one second tick
pub const TICK_COUNTS: u32 = CPU_FREQ_HZ / TICK_PRESCALER;

/// Value loaded into TCNT1 so that the next overflow is one second away
pub const TICK_RELOAD: u16 = (65_536 - TICK_COUNTS) as u16;

const _: () = assert!(TICK_COUNTS < 65_536, "tick does not fit in Timer1");

/// UART baud rate for the serial log
pub const UART_BAUD: u32 = 9600;

/// Character LCD geometry
pub const LCD_ROWS: u8 = 4;
pub const LCD_COLS: u8 = 20;

/// Countdown position (`MM:SS`)
pub const TIMER_ROW: u8 = 2;
pub const TIMER_COL: u8 = 7;

/// Status line position
pub const STATUS_ROW: u8 = 3;
pub const STATUS_COL: u8 = 0;

/// Blinking notices: blank time, visible time and number of blinks
pub const BLINK_OFF_MS: u16 = 375;
pub const BLINK_ON_MS: u16 = 750;
pub const BLINK_COUNT: u8 = 2;

/// Hold time after a static status banner is drawn
pub const BANNER_HOLD_MS: u16 = 500;

/// HD44780 timings in milliseconds
pub const LCD_POWER_ON_MS: u16 = 50;
pub const LCD_COMMAND_MS: u16 = 1;
pub const LCD_CLEAR_MS: u16 = 2;
