//! Screen layout: splash, countdown and status line texts.

use super::digits::DigitBuffer;
use super::io::OvenIo;
use super::state::{Notice, PauseReason};
use crate::config::{
    BANNER_HOLD_MS, BLINK_COUNT, BLINK_OFF_MS, BLINK_ON_MS, FIRMWARE_VERSION, STATUS_COL,
    STATUS_ROW, TIMER_COL, TIMER_ROW,
};

pub const BLANK_LINE: &str = "                    ";
const SPLASH_TITLE: &str = "     Microwave      ";
const SPLASH_VERSION: &str = "  Firmware v";

/// Static status line for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    SetTimer,
    Running,
    Paused(PauseReason),
}

impl Banner {
    pub fn text(self) -> &'static str {
        match self {
            Banner::SetTimer => ">>Set Timer Please<<",
            Banner::Running => ">>>>>>RUNNING<<<<<<<",
            Banner::Paused(PauseReason::User) => ">>>>>>>PAUSED<<<<<<<",
            Banner::Paused(PauseReason::DoorOpen) => ">>PAUSED Door Open<<",
            Banner::Paused(PauseReason::NoFood) => ">>PAUSED Put Food<<<",
        }
    }
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::DoorOpened => ">>>>Door Opened<<<<<",
            Notice::PutFood => ">>>>>>Put Food<<<<<<",
            Notice::Reset => ">>>>>>>RESET<<<<<<<<",
            Notice::Done => ">>>>>>>>DONE<<<<<<<<",
            Notice::TimerNotAdjusted => ">Timer Not Adjusted<",
        }
    }
}

pub fn show_splash<I: OvenIo>(io: &mut I) -> Result<(), I::Error> {
    io.clear_screen()?;
    io.write_at(0, 0, SPLASH_TITLE)?;
    io.write_at(1, 0, SPLASH_VERSION)?;
    io.write_at(1, SPLASH_VERSION.len() as u8, FIRMWARE_VERSION)
}

pub fn show_banner<I: OvenIo>(io: &mut I, banner: Banner) -> Result<(), I::Error> {
    io.write_at(STATUS_ROW, STATUS_COL, BLANK_LINE)?;
    io.write_at(STATUS_ROW, STATUS_COL, banner.text())?;
    io.delay_ms(BANNER_HOLD_MS);
    Ok(())
}

/// Blocks for the whole blink sequence.
pub fn blink_notice<I: OvenIo>(io: &mut I, notice: Notice) -> Result<(), I::Error> {
    for _ in 0..BLINK_COUNT {
        io.write_at(STATUS_ROW, STATUS_COL, BLANK_LINE)?;
        io.delay_ms(BLINK_OFF_MS);
        io.write_at(STATUS_ROW, STATUS_COL, notice.text())?;
        io.delay_ms(BLINK_ON_MS);
    }
    Ok(())
}

pub fn show_clock<I: OvenIo>(io: &mut I, digits: &DigitBuffer) -> Result<(), I::Error> {
    let clock = digits.to_clock();
    let text = core::str::from_utf8(&clock).unwrap_or("--:--");
    io.write_at(TIMER_ROW, TIMER_COL, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LCD_COLS;

    #[test]
    fn status_texts_fill_one_line() {
        let banners = [
            Banner::SetTimer,
            Banner::Running,
            Banner::Paused(PauseReason::User),
            Banner::Paused(PauseReason::DoorOpen),
            Banner::Paused(PauseReason::NoFood),
        ];
        for banner in banners {
            assert_eq!(banner.text().len(), LCD_COLS as usize, "{:?}", banner);
        }
        let notices = [
            Notice::DoorOpened,
            Notice::PutFood,
            Notice::Reset,
            Notice::Done,
            Notice::TimerNotAdjusted,
        ];
        for notice in notices {
            assert_eq!(notice.text().len(), LCD_COLS as usize, "{:?}", notice);
        }
        assert_eq!(BLANK_LINE.len(), LCD_COLS as usize);
        assert_eq!(SPLASH_TITLE.len(), LCD_COLS as usize);
    }

    #[test]
    fn clock_fits_on_its_row() {
        assert!(TIMER_COL as usize + 5 <= LCD_COLS as usize);
    }
}
