use super::buttons::wait_for_release;
use embedded_hal::digital::v2::{InputPin, OutputPin};

/// Oven keypad layout, `0` marks a position without a key.
pub const OVEN_KEYMAP: [[u8; 4]; 4] = [
    [b'7', b'8', b'9', 0],
    [b'4', b'5', b'6', 0],
    [b'1', b'2', b'3', 0],
    [0, b'0', 0, 0],
];

/// Row/column matrix keypad. Rows are driven low one at a time and the
/// columns read back through pull-ups.
pub struct Keypad<R, C, const ROWS: usize, const COLS: usize> {
    rows: [R; ROWS],
    cols: [C; COLS],
    keymap: [[u8; COLS]; ROWS],
    release_limit: Option<u32>,
}

impl<R, C, E, const ROWS: usize, const COLS: usize> Keypad<R, C, ROWS, COLS>
where
    R: OutputPin<Error = E>,
    C: InputPin<Error = E>,
{
    pub fn new(rows: [R; ROWS], cols: [C; COLS], keymap: [[u8; COLS]; ROWS]) -> Self {
        Self {
            rows,
            cols,
            keymap,
            release_limit: None,
        }
    }

    /// Stop waiting for a key release after `polls` reads.
    pub fn with_release_limit(mut self, polls: u32) -> Self {
        self.release_limit = Some(polls);
        self
    }

    /// Scan once. Returns the first pressed key after it is released,
    /// `WouldBlock` when no key is down.
    pub fn get_key(&mut self) -> nb::Result<u8, E> {
        for row in self.rows.iter_mut() {
            row.set_high()?;
        }

        for r in 0..ROWS {
            self.rows[r].set_low()?;
            for c in 0..COLS {
                let key = self.keymap[r][c];
                if key == 0 {
                    continue;
                }
                if self.cols[c].is_low()? {
                    wait_for_release(&self.cols[c], self.release_limit)?;
                    self.rows[r].set_high()?;
                    return Ok(key);
                }
            }
            self.rows[r].set_high()?;
        }

        Err(nb::Error::WouldBlock)
    }
}
