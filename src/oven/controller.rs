use super::countdown::Countdown;
use super::digits::DigitBuffer;
use super::display::{self, Banner};
use super::io::OvenIo;
use super::state::{self, Effects, Event, Guards, Notice, OvenState, PauseReason, Power};

/// What happened during one [`OvenController::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: OvenState,
    pub to: OvenState,
    pub event: Event,
    pub notice: Option<Notice>,
    /// Digit accepted from the keypad this pass.
    pub key: Option<u8>,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// The oven state machine and everything it owns.
///
/// The remaining duration lives in a [`Countdown`] shared with the
/// Timer1 overflow interrupt; all other state is private to the main loop.
pub struct OvenController<'a> {
    state: OvenState,
    history: OvenState,
    pause_reason: PauseReason,
    digits: DigitBuffer,
    display_dirty: bool,
    outputs_on: bool,
    countdown: &'a Countdown,
}

impl<'a> OvenController<'a> {
    pub fn new(countdown: &'a Countdown) -> Self {
        Self {
            state: OvenState::Idle,
            history: OvenState::Idle,
            pause_reason: PauseReason::User,
            digits: DigitBuffer::new(),
            display_dirty: true,
            outputs_on: false,
            countdown,
        }
    }

    /// Bring the board to a safe idle: loads off, timer stopped, splash drawn.
    pub fn power_on<I: OvenIo>(&mut self, io: &mut I) -> Result<(), I::Error> {
        self.state = OvenState::Idle;
        self.history = OvenState::Idle;
        self.reset_timer();
        self.apply_outputs(io, Power::Off)?;
        display::show_splash(io)?;
        self.display_dirty = true;
        Ok(())
    }

    /// One main loop pass: sample, transition, outputs, display.
    pub fn poll<I: OvenIo>(&mut self, io: &mut I) -> Result<Transition, I::Error> {
        let event = io.poll_event()?;
        let key = if self.state == OvenState::Idle {
            self.read_keypad(io)?
        } else {
            None
        };

        let guards = self.sample_guards(io, event)?;
        let from = self.state;
        let step = state::next(from, event, guards);
        self.state = step.next;
        self.apply_effects(io, &step.effects)?;
        self.refresh_display(io, step.effects.notice)?;

        Ok(Transition {
            from,
            to: self.state,
            event,
            notice: step.effects.notice,
            key,
        })
    }

    /// Energize or de-energize heater, lamp, motor and the tick timer.
    ///
    /// `On` is ignored unless the oven is coming out of Idle or Paused.
    /// `Off` always switches everything off and may be repeated.
    pub fn apply_outputs<I: OvenIo>(&mut self, io: &mut I, power: Power) -> Result<(), I::Error> {
        match power {
            Power::On => {
                if matches!(self.history, OvenState::Paused | OvenState::Idle) {
                    self.history = OvenState::Running;
                    io.set_loads(true)?;
                    io.run_ticks(true);
                    self.outputs_on = true;
                }
            }
            Power::Off => {
                io.set_loads(false)?;
                io.run_ticks(false);
                self.outputs_on = false;
            }
        }
        Ok(())
    }

    pub fn state(&self) -> OvenState {
        self.state
    }

    pub fn history(&self) -> OvenState {
        self.history
    }

    pub fn pause_reason(&self) -> PauseReason {
        self.pause_reason
    }

    pub fn digits(&self) -> &DigitBuffer {
        &self.digits
    }

    pub fn remaining(&self) -> u16 {
        self.countdown.remaining()
    }

    pub fn outputs_on(&self) -> bool {
        self.outputs_on
    }

    pub fn display_dirty(&self) -> bool {
        self.display_dirty
    }

    fn read_keypad<I: OvenIo>(&mut self, io: &mut I) -> Result<Option<u8>, I::Error> {
        let key = match io.read_key() {
            Ok(key) => key,
            Err(nb::Error::WouldBlock) => return Ok(None),
            Err(nb::Error::Other(e)) => return Err(e),
        };
        match self.digits.push_key(key) {
            Some(group_complete) => {
                self.display_dirty = true;
                if group_complete {
                    self.countdown.set(self.digits.total_seconds());
                }
                Ok(Some(key))
            }
            None => Ok(None),
        }
    }

    fn sample_guards<I: OvenIo>(&mut self, io: &mut I, event: Event) -> Result<Guards, I::Error> {
        let duration_set = match (self.state, event) {
            (OvenState::Idle, Event::Start) => {
                let seconds = self.digits.total_seconds();
                self.countdown.set(seconds);
                seconds > 0
            }
            (OvenState::Running, _) => !self.countdown.is_done(),
            _ => return Ok(Guards::default()),
        };
        Ok(Guards {
            door_open: io.door_open()?,
            food_present: io.food_present()?,
            duration_set,
        })
    }

    fn apply_effects<I: OvenIo>(&mut self, io: &mut I, effects: &Effects) -> Result<(), I::Error> {
        if let Some(history) = effects.history {
            self.history = history;
        }
        if let Some(reason) = effects.pause_reason {
            self.pause_reason = reason;
        }
        if effects.reset_timer {
            self.reset_timer();
        }
        if let Some(power) = effects.outputs {
            self.apply_outputs(io, power)?;
        }
        if effects.mark_dirty {
            self.display_dirty = true;
        }
        Ok(())
    }

    fn refresh_display<I: OvenIo>(
        &mut self,
        io: &mut I,
        notice: Option<Notice>,
    ) -> Result<(), I::Error> {
        if let Some(notice) = notice {
            display::blink_notice(io, notice)?;
            self.display_dirty = true;
        }

        let redraw = core::mem::replace(&mut self.display_dirty, false);
        match self.state {
            OvenState::Idle => {
                if redraw {
                    display::show_banner(io, Banner::SetTimer)?;
                    display::show_clock(io, &self.digits)?;
                }
            }
            OvenState::Running => {
                if redraw {
                    display::show_banner(io, Banner::Running)?;
                }
                if self.countdown.take_dirty() || redraw {
                    let clock = DigitBuffer::from_seconds(self.countdown.remaining());
                    display::show_clock(io, &clock)?;
                }
            }
            OvenState::Paused => {
                if redraw {
                    display::show_banner(io, Banner::Paused(self.pause_reason))?;
                }
            }
        }
        Ok(())
    }

    fn reset_timer(&mut self) {
        self.digits.clear();
        self.countdown.clear();
    }
}
