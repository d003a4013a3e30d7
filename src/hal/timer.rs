use crate::config::{CPU_FREQ_HZ, TICK_RELOAD};
use avr_device::atmega32a::{TC0, TC1};
use avr_device::interrupt::{self, Mutex};
use core::cell::Cell;
use embedded_hal::blocking::delay::{DelayMs, DelayUs};

// Single handler invoked from the Timer1 overflow vector
static OVERFLOW_CALLBACK: Mutex<Cell<Option<fn()>>> = Mutex::new(Cell::new(None));

// TIMSK is shared by all three timers and sits at 0x59 on the ATmega32
const TIMSK: *mut u8 = 0x59 as *mut u8;
const TOIE1: u8 = 1 << 2;

const PRESCALER_MASK: u8 = 0x07;

#[derive(Clone, Copy)]
pub enum Prescaler {
    Stop = 0,
    Direct = 1,
    Div8 = 2,
    Div64 = 3,
    Div256 = 4,
    Div1024 = 5,
}

/// Timer1 in normal mode, reloaded on every overflow so that it
/// overflows once per countdown tick.
pub struct Timer1 {
    tc1: TC1,
    prescaler: Prescaler,
}

impl Timer1 {
    pub fn new(tc1: TC1, prescaler: Prescaler) -> Self {
        // Normal mode, OC1A/OC1B disconnected, clock stopped
        tc1.tccr1a.write(|w| unsafe { w.bits(0) });
        tc1.tccr1b.write(|w| unsafe { w.bits(0) });
        let mut timer = Self { tc1, prescaler };
        timer.set_counter(TICK_RELOAD);
        timer
    }

    pub fn set_counter(&mut self, value: u16) {
        self.tc1.tcnt1.write(|w| unsafe { w.bits(value) });
    }

    /// Install the handler run on every overflow. Set once at startup.
    pub fn set_overflow_callback(&mut self, callback: fn()) {
        interrupt::free(|cs| OVERFLOW_CALLBACK.borrow(cs).set(Some(callback)));
    }

    pub fn start(&mut self) {
        let bits = self.prescaler as u8;
        self.tc1
            .tccr1b
            .modify(|r, w| unsafe { w.bits((r.bits() & !PRESCALER_MASK) | bits) });
    }

    pub fn stop(&mut self) {
        self.tc1
            .tccr1b
            .modify(|r, w| unsafe { w.bits(r.bits() & !PRESCALER_MASK) });
    }

    pub fn enable_overflow_interrupt(&mut self, enabled: bool) {
        interrupt::free(|_| unsafe {
            let timsk = core::ptr::read_volatile(TIMSK);
            let timsk = if enabled { timsk | TOIE1 } else { timsk & !TOIE1 };
            core::ptr::write_volatile(TIMSK, timsk);
        });
    }
}

#[avr_device::interrupt(atmega32a)]
fn TIMER1_OVF() {
    // SAFETY: only TCNT1 is touched; Timer1 writes it solely before the
    // interrupt is unmasked.
    let tc1 = unsafe { &*TC1::ptr() };
    tc1.tcnt1.write(|w| unsafe { w.bits(TICK_RELOAD) });

    let callback = interrupt::free(|cs| OVERFLOW_CALLBACK.borrow(cs).get());
    if let Some(callback) = callback {
        callback();
    }
}

// Timer0 at clk/64 counts this many ticks per millisecond
const TIMER0_TICKS_PER_MS: u8 = (CPU_FREQ_HZ / 64 / 1000) as u8;
const TIMER0_DIV64: u8 = 0x03;

/// Busy-wait delays. Milliseconds are timed with Timer0, which nothing
/// else uses; microseconds are spun on the core clock.
#[derive(Clone, Copy, Default)]
pub struct Delay;

impl Delay {
    pub fn new() -> Self {
        Delay
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        // SAFETY: Timer0 is owned by the delay routine.
        let tc0 = unsafe { &*TC0::ptr() };
        tc0.tcnt0.write(|w| unsafe { w.bits(0) });
        tc0.tccr0.write(|w| unsafe { w.bits(TIMER0_DIV64) });

        for _ in 0..ms {
            while tc0.tcnt0.read().bits() < TIMER0_TICKS_PER_MS {}
            tc0.tcnt0.write(|w| unsafe { w.bits(0) });
        }

        tc0.tccr0.write(|w| unsafe { w.bits(0) });
    }
}

impl DelayMs<u8> for Delay {
    fn delay_ms(&mut self, ms: u8) {
        DelayMs::<u16>::delay_ms(self, u16::from(ms));
    }
}

impl DelayUs<u16> for Delay {
    fn delay_us(&mut self, us: u16) {
        // roughly four cycles per loop turn
        const TURNS_PER_US: u32 = CPU_FREQ_HZ / 1_000_000 / 4;
        for _ in 0..u32::from(us) * TURNS_PER_US {
            avr_device::asm::nop();
        }
    }
}
