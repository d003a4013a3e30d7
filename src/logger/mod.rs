//! Serial event log
//!
//! Lines look like `[INF] Idle -> Running on Start\r\n`. Write errors are
//! dropped so logging never stalls the main loop.

use crate::oven::{Notice, Transition};
use ufmt::{uwrite, uWrite};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error,
    Info,
    Debug,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Error => "[ERR] ",
            Level::Info => "[INF] ",
            Level::Debug => "[DBG] ",
        }
    }
}

pub struct Logger<W> {
    sink: W,
    level: Level,
}

impl<W: uWrite> Logger<W> {
    pub fn new(sink: W, level: Level) -> Self {
        Self { sink, level }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level
    }

    pub fn log(&mut self, level: Level, msg: &str) {
        if self.enabled(level) {
            uwrite!(self.sink, "{}{}\r\n", level.tag(), msg).ok();
        }
    }

    pub fn info(&mut self, msg: &str) {
        self.log(Level::Info, msg);
    }

    pub fn debug(&mut self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    pub fn banner(&mut self, version: &str) {
        if self.enabled(Level::Info) {
            uwrite!(self.sink, "{}Microwave firmware v{}\r\n", Level::Info.tag(), version).ok();
        }
    }

    /// Log a main loop pass: state changes and notices at info level,
    /// accepted digits at debug level.
    pub fn transition(&mut self, t: &Transition) {
        if let Some(key) = t.key {
            if self.enabled(Level::Debug) {
                let key = [key];
                let key = core::str::from_utf8(&key).unwrap_or("?");
                uwrite!(self.sink, "{}key {}\r\n", Level::Debug.tag(), key).ok();
            }
        }
        if t.changed() && self.enabled(Level::Info) {
            uwrite!(self.sink, "{}{} -> {} on {}\r\n", Level::Info.tag(), t.from, t.to, t.event).ok();
        }
        if let Some(notice) = t.notice {
            self.notice(notice);
        }
    }

    pub fn countdown(&mut self, remaining: u16) {
        if self.enabled(Level::Debug) {
            uwrite!(self.sink, "{}remaining {}s\r\n", Level::Debug.tag(), remaining).ok();
        }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn notice(&mut self, notice: Notice) {
        if self.enabled(Level::Info) {
            uwrite!(self.sink, "{}notice: {}\r\n", Level::Info.tag(), notice.name()).ok();
        }
    }
}
