//! `MM:SS` digit entry from the keypad.

/// Four decimal digits `[minute tens, minute units, second tens, second units]`.
///
/// New digits enter at the seconds-units place and the oldest one drops
/// out at the minute-tens place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitBuffer {
    digits: [u8; 4],
    shifts: u8,
}

impl DigitBuffer {
    pub const fn new() -> Self {
        Self {
            digits: [0; 4],
            shifts: 0,
        }
    }

    /// Clock digits for a duration in seconds. Minutes saturate at 99:59.
    pub fn from_seconds(total: u16) -> Self {
        let (minutes, seconds) = if total / 60 > 99 {
            (99, 59)
        } else {
            (total / 60, total % 60)
        };
        Self {
            digits: [
                (minutes / 10) as u8,
                (minutes % 10) as u8,
                (seconds / 10) as u8,
                (seconds % 10) as u8,
            ],
            shifts: 0,
        }
    }

    /// Shift `digit` in. Returns `true` when this completed a group of four.
    pub fn push(&mut self, digit: u8) -> bool {
        debug_assert!(digit <= 9);
        self.digits.copy_within(1.., 0);
        self.digits[3] = digit;
        self.shifts = (self.shifts + 1) % 4;
        self.shifts == 0
    }

    /// Shift in an ASCII key. `None` if the key is not a decimal digit.
    pub fn push_key(&mut self, key: u8) -> Option<bool> {
        key.is_ascii_digit().then(|| self.push(key - b'0'))
    }

    /// Saturate an out of range seconds-tens digit to `6` and clear the units.
    pub fn normalize(&mut self) {
        if self.digits[2] >= 6 {
            self.digits[2] = 6;
            self.digits[3] = 0;
        }
    }

    /// Normalize, then return the entered duration in seconds.
    pub fn total_seconds(&mut self) -> u16 {
        self.normalize();
        let [mt, mu, st, su] = self.digits.map(u16::from);
        (mt * 10 + mu) * 60 + st * 10 + su
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn digits(&self) -> [u8; 4] {
        self.digits
    }

    /// ASCII `MM:SS`.
    pub fn to_clock(&self) -> [u8; 5] {
        let [mt, mu, st, su] = self.digits;
        [b'0' + mt, b'0' + mu, b':', b'0' + st, b'0' + su]
    }
}
