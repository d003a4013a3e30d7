use crate::oven::Event;
use embedded_hal::digital::v2::InputPin;

/// Busy-wait until an active-low `pin` reads high again.
///
/// With `limit` set the wait gives up after that many extra polls and
/// returns `false`; firmware passes `None` and waits for the user.
pub fn wait_for_release<P: InputPin>(pin: &P, limit: Option<u32>) -> Result<bool, P::Error> {
    let mut polls = 0u32;
    while pin.is_low()? {
        polls = polls.saturating_add(1);
        if limit.map_or(false, |limit| polls >= limit) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Momentary start and stop buttons, active low.
///
/// A press is reported once the button has been released, which also
/// debounces it. Stop wins when both are held.
pub struct ButtonPair<S, C> {
    start: S,
    stop: C,
    release_limit: Option<u32>,
}

impl<S, C, E> ButtonPair<S, C>
where
    S: InputPin<Error = E>,
    C: InputPin<Error = E>,
{
    pub fn new(start: S, stop: C) -> Self {
        Self {
            start,
            stop,
            release_limit: None,
        }
    }

    /// Stop waiting for a release after `polls` reads.
    pub fn with_release_limit(mut self, polls: u32) -> Self {
        self.release_limit = Some(polls);
        self
    }

    pub fn poll(&mut self) -> Result<Event, E> {
        if self.stop.is_low()? {
            wait_for_release(&self.stop, self.release_limit)?;
            return Ok(Event::Cancel);
        }
        if self.start.is_low()? {
            wait_for_release(&self.start, self.release_limit)?;
            return Ok(Event::Start);
        }
        Ok(Event::None)
    }
}
