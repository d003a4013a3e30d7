//! In-memory oven board for driving the controller from tests.

#![allow(dead_code)]

use microwave_firmware::config::{STATUS_ROW, TIMER_COL, TIMER_ROW};
use microwave_firmware::oven::display::BLANK_LINE;
use microwave_firmware::oven::{Countdown, Event, OvenController, OvenIo, Transition};
use std::collections::VecDeque;
use std::convert::Infallible;

#[derive(Debug, Default)]
pub struct FakeBoard {
    pub events: VecDeque<Event>,
    pub keys: VecDeque<u8>,
    pub door_open: bool,
    pub food_present: bool,
    pub loads_on: bool,
    pub ticking: bool,
    pub writes: Vec<(u8, u8, String)>,
    pub clears: usize,
    pub slept_ms: u32,
    pub sensor_reads: usize,
}

impl FakeBoard {
    /// Door closed, food on the plate.
    pub fn ready() -> Self {
        Self {
            food_present: true,
            ..Self::default()
        }
    }

    pub fn press(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn type_keys(&mut self, keys: &[u8]) {
        self.keys.extend(keys.iter().copied());
    }

    pub fn status_lines(&self) -> Vec<&str> {
        self.writes
            .iter()
            .filter(|(row, _, _)| *row == STATUS_ROW)
            .map(|(_, _, text)| text.as_str())
            .collect()
    }

    /// Last non-blank text on the status row.
    pub fn last_status(&self) -> Option<&str> {
        self.status_lines()
            .into_iter()
            .rev()
            .find(|text| *text != BLANK_LINE)
    }

    pub fn last_clock(&self) -> Option<&str> {
        self.writes
            .iter()
            .rev()
            .find(|(row, col, _)| *row == TIMER_ROW && *col == TIMER_COL)
            .map(|(_, _, text)| text.as_str())
    }

    pub fn forget_writes(&mut self) {
        self.writes.clear();
    }
}

impl OvenIo for FakeBoard {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Event, Infallible> {
        Ok(self.events.pop_front().unwrap_or(Event::None))
    }

    fn door_open(&mut self) -> Result<bool, Infallible> {
        self.sensor_reads += 1;
        Ok(self.door_open)
    }

    fn food_present(&mut self) -> Result<bool, Infallible> {
        self.sensor_reads += 1;
        Ok(self.food_present)
    }

    fn read_key(&mut self) -> nb::Result<u8, Infallible> {
        self.keys.pop_front().ok_or(nb::Error::WouldBlock)
    }

    fn set_loads(&mut self, on: bool) -> Result<(), Infallible> {
        self.loads_on = on;
        Ok(())
    }

    fn run_ticks(&mut self, on: bool) {
        self.ticking = on;
    }

    fn clear_screen(&mut self) -> Result<(), Infallible> {
        self.clears += 1;
        Ok(())
    }

    fn write_at(&mut self, row: u8, col: u8, text: &str) -> Result<(), Infallible> {
        self.writes.push((row, col, text.to_string()));
        Ok(())
    }

    fn delay_ms(&mut self, ms: u16) {
        self.slept_ms += u32::from(ms);
    }
}

pub fn poll(controller: &mut OvenController<'_>, board: &mut FakeBoard) -> Transition {
    match controller.poll(board) {
        Ok(t) => t,
        Err(never) => match never {},
    }
}

/// Poll until the event and key queues are drained, plus one idle pass.
pub fn settle(controller: &mut OvenController<'_>, board: &mut FakeBoard) -> Vec<Transition> {
    let mut passes = Vec::new();
    while !board.events.is_empty() || !board.keys.is_empty() {
        let before = (board.events.len(), board.keys.len());
        passes.push(poll(controller, board));
        if (board.events.len(), board.keys.len()) == before {
            break;
        }
    }
    passes.push(poll(controller, board));
    passes
}

/// Deliver `n` timer overflows, as the interrupt would while ticks run.
pub fn tick(countdown: &Countdown, board: &FakeBoard, n: u16) {
    for _ in 0..n {
        if board.ticking {
            countdown.tick();
        }
    }
}

pub fn powered_on<'a>(countdown: &'a Countdown, board: &mut FakeBoard) -> OvenController<'a> {
    let mut controller = OvenController::new(countdown);
    match controller.power_on(board) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    controller
}
