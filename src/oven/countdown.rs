//! Remaining cook time shared between the Timer1 overflow interrupt and
//! the main loop.
//!
//! A 16-bit counter is not read or written atomically by an 8-bit core,
//! so every access goes through a critical section.

use core::cell::Cell;
use critical_section::Mutex;

pub struct Countdown {
    remaining: Mutex<Cell<u16>>,
    dirty: Mutex<Cell<bool>>,
}

impl Countdown {
    pub const fn new() -> Self {
        Self {
            remaining: Mutex::new(Cell::new(0)),
            dirty: Mutex::new(Cell::new(false)),
        }
    }

    /// One second elapsed. Called from the overflow interrupt.
    pub fn tick(&self) {
        critical_section::with(|cs| {
            let remaining = self.remaining.borrow(cs);
            remaining.set(remaining.get().saturating_sub(1));
            self.dirty.borrow(cs).set(true);
        });
    }

    pub fn remaining(&self) -> u16 {
        critical_section::with(|cs| self.remaining.borrow(cs).get())
    }

    pub fn set(&self, seconds: u16) {
        critical_section::with(|cs| self.remaining.borrow(cs).set(seconds));
    }

    pub fn clear(&self) {
        self.set(0);
    }

    pub fn is_done(&self) -> bool {
        self.remaining() == 0
    }

    /// Read and clear the "countdown needs redraw" flag.
    pub fn take_dirty(&self) -> bool {
        critical_section::with(|cs| self.dirty.borrow(cs).replace(false))
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_counts_down_and_flags_redraw() {
        let countdown = Countdown::new();
        countdown.set(2);
        assert!(!countdown.take_dirty());

        countdown.tick();
        assert_eq!(countdown.remaining(), 1);
        assert!(countdown.take_dirty());
        assert!(!countdown.take_dirty());

        countdown.tick();
        assert!(countdown.is_done());
    }

    #[test]
    fn tick_never_goes_below_zero() {
        let countdown = Countdown::new();
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.remaining(), 0);
        assert!(countdown.take_dirty());
    }

    #[test]
    fn clear_zeroes_the_duration() {
        let countdown = Countdown::new();
        countdown.set(754);
        countdown.clear();
        assert!(countdown.is_done());
    }

    #[test]
    fn ticks_from_another_thread_are_not_lost() {
        static SHARED: Countdown = Countdown::new();
        SHARED.set(1000);

        let ticker = std::thread::spawn(|| {
            for _ in 0..500 {
                SHARED.tick();
            }
        });
        for _ in 0..500 {
            let _ = SHARED.remaining();
        }
        ticker.join().unwrap();

        assert_eq!(SHARED.remaining(), 500);
    }
}
