//! Oven states, input events and the transition table.
//!
//! [`next`] is pure: it maps the current state, the sampled event and the
//! guard readings to the next state plus the side effects the controller
//! has to carry out. Every combination yields a defined step.

use ufmt::{uDisplay, uWrite, Formatter};

/// Operating state of the oven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvenState {
    Idle,
    Running,
    Paused,
}

impl OvenState {
    pub const ALL: [OvenState; 3] = [OvenState::Idle, OvenState::Running, OvenState::Paused];

    pub fn name(self) -> &'static str {
        match self {
            OvenState::Idle => "Idle",
            OvenState::Running => "Running",
            OvenState::Paused => "Paused",
        }
    }
}

impl uDisplay for OvenState {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(self.name())
    }
}

/// Button input sampled once per main loop pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Start,
    Cancel,
}

impl Event {
    pub const ALL: [Event; 3] = [Event::None, Event::Start, Event::Cancel];

    pub fn name(self) -> &'static str {
        match self {
            Event::None => "None",
            Event::Start => "Start",
            Event::Cancel => "Cancel",
        }
    }
}

impl uDisplay for Event {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(self.name())
    }
}

/// Why the oven sits in [`OvenState::Paused`]. Only affects the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseReason {
    User,
    DoorOpen,
    NoFood,
}

/// Blinking message shown on the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    DoorOpened,
    PutFood,
    Reset,
    Done,
    TimerNotAdjusted,
}

impl Notice {
    pub fn name(self) -> &'static str {
        match self {
            Notice::DoorOpened => "door opened",
            Notice::PutFood => "put food",
            Notice::Reset => "reset",
            Notice::Done => "done",
            Notice::TimerNotAdjusted => "timer not adjusted",
        }
    }
}

/// Requested state of the heater, lamp and motor (and the tick timer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Power {
    On,
    Off,
}

/// Precondition readings. Only sampled where the table needs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Guards {
    pub door_open: bool,
    pub food_present: bool,
    /// Remaining duration is above zero.
    pub duration_set: bool,
}

impl Guards {
    /// Door closed, food inside, time left.
    pub fn all_clear(self) -> bool {
        !self.door_open && self.food_present && self.duration_set
    }
}

/// Side effects of one step, applied by the controller in field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Effects {
    pub history: Option<OvenState>,
    pub pause_reason: Option<PauseReason>,
    pub reset_timer: bool,
    pub outputs: Option<Power>,
    pub notice: Option<Notice>,
    pub mark_dirty: bool,
}

/// Result of [`next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub next: OvenState,
    pub effects: Effects,
}

impl Step {
    fn stay(state: OvenState) -> Self {
        Self {
            next: state,
            effects: Effects::default(),
        }
    }

    fn notice(state: OvenState, notice: Notice) -> Self {
        Self {
            next: state,
            effects: Effects {
                notice: Some(notice),
                ..Effects::default()
            },
        }
    }
}

/// Evaluate one pass of the state machine.
pub fn next(state: OvenState, event: Event, guards: Guards) -> Step {
    match state {
        OvenState::Idle => idle(event, guards),
        OvenState::Running => running(event, guards),
        OvenState::Paused => paused(event),
    }
}

fn idle(event: Event, guards: Guards) -> Step {
    match event {
        Event::Start if guards.door_open => Step::notice(OvenState::Idle, Notice::DoorOpened),
        Event::Start if !guards.food_present => Step::notice(OvenState::Idle, Notice::PutFood),
        Event::Start if !guards.duration_set => {
            Step::notice(OvenState::Idle, Notice::TimerNotAdjusted)
        }
        Event::Start => Step {
            next: OvenState::Running,
            effects: Effects {
                history: Some(OvenState::Idle),
                mark_dirty: true,
                ..Effects::default()
            },
        },
        Event::Cancel => reset(),
        Event::None => Step::stay(OvenState::Idle),
    }
}

// Sensor and countdown checks run on every pass; the button is applied
// afterwards and Cancel always ends in Paused.
fn running(event: Event, guards: Guards) -> Step {
    let mut step = if guards.door_open {
        halt(Notice::DoorOpened, PauseReason::DoorOpen)
    } else if !guards.food_present {
        halt(Notice::PutFood, PauseReason::NoFood)
    } else if !guards.duration_set {
        Step {
            next: OvenState::Idle,
            effects: Effects {
                reset_timer: true,
                outputs: Some(Power::Off),
                notice: Some(Notice::Done),
                ..Effects::default()
            },
        }
    } else {
        Step {
            next: OvenState::Running,
            effects: Effects {
                outputs: Some(Power::On),
                ..Effects::default()
            },
        }
    };

    if event == Event::Cancel {
        step.next = OvenState::Paused;
        step.effects.outputs = Some(Power::Off);
        step.effects.mark_dirty = true;
        if step.effects.pause_reason.is_none() {
            step.effects.pause_reason = Some(PauseReason::User);
        }
    }
    step
}

fn paused(event: Event) -> Step {
    match event {
        Event::Start => Step {
            next: OvenState::Running,
            effects: Effects {
                history: Some(OvenState::Paused),
                mark_dirty: true,
                ..Effects::default()
            },
        },
        Event::Cancel => reset(),
        Event::None => Step::stay(OvenState::Paused),
    }
}

fn halt(notice: Notice, reason: PauseReason) -> Step {
    Step {
        next: OvenState::Paused,
        effects: Effects {
            pause_reason: Some(reason),
            outputs: Some(Power::Off),
            notice: Some(notice),
            mark_dirty: true,
            ..Effects::default()
        },
    }
}

fn reset() -> Step {
    Step {
        next: OvenState::Idle,
        effects: Effects {
            reset_timer: true,
            notice: Some(Notice::Reset),
            ..Effects::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR: Guards = Guards {
        door_open: false,
        food_present: true,
        duration_set: true,
    };

    fn all_guards() -> impl Iterator<Item = Guards> {
        (0..8u8).map(|bits| Guards {
            door_open: bits & 1 != 0,
            food_present: bits & 2 != 0,
            duration_set: bits & 4 != 0,
        })
    }

    #[test]
    fn every_combination_has_a_step() {
        for state in OvenState::ALL {
            for event in Event::ALL {
                for guards in all_guards() {
                    let step = next(state, event, guards);
                    assert!(OvenState::ALL.contains(&step.next));
                }
            }
        }
    }

    #[test]
    fn no_event_outside_running_changes_nothing() {
        for guards in all_guards() {
            assert_eq!(next(OvenState::Idle, Event::None, guards), Step::stay(OvenState::Idle));
            assert_eq!(
                next(OvenState::Paused, Event::None, guards),
                Step::stay(OvenState::Paused)
            );
        }
    }

    #[test]
    fn idle_start_checks_guards_in_order() {
        let door = Guards {
            door_open: true,
            food_present: false,
            duration_set: false,
        };
        assert_eq!(next(OvenState::Idle, Event::Start, door).effects.notice, Some(Notice::DoorOpened));

        let food = Guards {
            door_open: false,
            food_present: false,
            duration_set: false,
        };
        assert_eq!(next(OvenState::Idle, Event::Start, food).effects.notice, Some(Notice::PutFood));

        let time = Guards {
            door_open: false,
            food_present: true,
            duration_set: false,
        };
        let step = next(OvenState::Idle, Event::Start, time);
        assert_eq!(step.next, OvenState::Idle);
        assert_eq!(step.effects.notice, Some(Notice::TimerNotAdjusted));
    }

    #[test]
    fn idle_start_with_clear_guards_runs() {
        let step = next(OvenState::Idle, Event::Start, CLEAR);
        assert_eq!(step.next, OvenState::Running);
        assert_eq!(step.effects.history, Some(OvenState::Idle));
        assert!(step.effects.mark_dirty);
        assert_eq!(step.effects.outputs, None);
    }

    #[test]
    fn cancel_outside_running_resets_to_idle() {
        for state in [OvenState::Idle, OvenState::Paused] {
            for guards in all_guards() {
                let step = next(state, Event::Cancel, guards);
                assert_eq!(step.next, OvenState::Idle);
                assert!(step.effects.reset_timer);
                assert_eq!(step.effects.notice, Some(Notice::Reset));
            }
        }
    }

    #[test]
    fn running_keeps_outputs_on_while_clear() {
        for event in [Event::None, Event::Start] {
            let step = next(OvenState::Running, event, CLEAR);
            assert_eq!(step.next, OvenState::Running);
            assert_eq!(step.effects.outputs, Some(Power::On));
        }
    }

    #[test]
    fn running_pauses_on_door_before_food() {
        let guards = Guards {
            door_open: true,
            food_present: false,
            duration_set: true,
        };
        let step = next(OvenState::Running, Event::None, guards);
        assert_eq!(step.next, OvenState::Paused);
        assert_eq!(step.effects.outputs, Some(Power::Off));
        assert_eq!(step.effects.notice, Some(Notice::DoorOpened));
        assert_eq!(step.effects.pause_reason, Some(PauseReason::DoorOpen));
    }

    #[test]
    fn running_pauses_without_food() {
        let guards = Guards {
            food_present: false,
            ..CLEAR
        };
        let step = next(OvenState::Running, Event::None, guards);
        assert_eq!(step.next, OvenState::Paused);
        assert_eq!(step.effects.pause_reason, Some(PauseReason::NoFood));
    }

    #[test]
    fn running_finishes_when_time_is_up() {
        let guards = Guards {
            duration_set: false,
            ..CLEAR
        };
        let step = next(OvenState::Running, Event::None, guards);
        assert_eq!(step.next, OvenState::Idle);
        assert_eq!(step.effects.outputs, Some(Power::Off));
        assert_eq!(step.effects.notice, Some(Notice::Done));
        assert!(step.effects.reset_timer);
    }

    #[test]
    fn cancel_in_running_always_pauses() {
        for guards in all_guards() {
            let step = next(OvenState::Running, Event::Cancel, guards);
            assert_eq!(step.next, OvenState::Paused);
            assert_eq!(step.effects.outputs, Some(Power::Off));
            assert!(step.effects.mark_dirty);
        }
        let step = next(OvenState::Running, Event::Cancel, CLEAR);
        assert_eq!(step.effects.pause_reason, Some(PauseReason::User));
    }

    #[test]
    fn paused_start_resumes_with_history() {
        let step = next(OvenState::Paused, Event::Start, Guards::default());
        assert_eq!(step.next, OvenState::Running);
        assert_eq!(step.effects.history, Some(OvenState::Paused));
        assert!(step.effects.mark_dirty);
    }
}
