//! Input module - edge-triggered logical inputs and the sub-poll cadence
//!
//! Input devices report raw press/release events. A held key must act once, so
//! [`InputLatch`] remembers which inputs are down and lets only the press edge
//! through. [`Cadence`] counts sub-polls and signals when a gravity step is due.

use std::collections::VecDeque;

use crate::types::{InputEvent, LogicalInput, INPUT_POLLS_PER_GRAVITY};

/// Source of logical input events, drained once per sub-poll
pub trait InputSource {
    /// Next pending event, or `None` once the source is drained for this poll
    fn next_event(&mut self) -> Option<InputEvent>;
}

impl InputSource for VecDeque<InputEvent> {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.pop_front()
    }
}

/// Per-input `was_pressed` flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLatch {
    was_pressed: [bool; LogicalInput::ALL.len()],
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one event; returns true only on a press edge.
    ///
    /// A repeated press without a release in between is swallowed. A release re-arms
    /// the input.
    pub fn on_event(&mut self, event: InputEvent) -> bool {
        let slot = &mut self.was_pressed[event.input.index()];
        if event.pressed {
            let edge = !*slot;
            *slot = true;
            edge
        } else {
            *slot = false;
            false
        }
    }

    pub fn is_held(&self, input: LogicalInput) -> bool {
        self.was_pressed[input.index()]
    }

    /// Forget every held input
    pub fn reset(&mut self) {
        self.was_pressed = [false; LogicalInput::ALL.len()];
    }
}

/// Counts input sub-polls and fires once every `polls_per_step`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cadence {
    polls_per_step: u32,
    polls: u32,
}

impl Cadence {
    pub fn new(polls_per_step: u32) -> Self {
        Self {
            polls_per_step: polls_per_step.max(1),
            polls: 0,
        }
    }

    /// Count one sub-poll; true when it closes a gravity interval
    pub fn poll(&mut self) -> bool {
        self.polls += 1;
        if self.polls >= self.polls_per_step {
            self.polls = 0;
            true
        } else {
            false
        }
    }

    /// Sub-polls counted since the last gravity step
    pub fn pending(&self) -> u32 {
        self.polls
    }

    pub fn reset(&mut self) {
        self.polls = 0;
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::new(INPUT_POLLS_PER_GRAVITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_passes_only_press_edge() {
        let mut latch = InputLatch::new();
        let press = InputEvent::press(LogicalInput::Rotate);
        let release = InputEvent::release(LogicalInput::Rotate);

        assert!(latch.on_event(press));
        assert!(latch.is_held(LogicalInput::Rotate));
        // Held key: typematic repeats are swallowed
        assert!(!latch.on_event(press));
        assert!(!latch.on_event(press));

        assert!(!latch.on_event(release));
        assert!(!latch.is_held(LogicalInput::Rotate));
        assert!(latch.on_event(press));
    }

    #[test]
    fn test_latch_inputs_are_independent() {
        let mut latch = InputLatch::new();
        assert!(latch.on_event(InputEvent::press(LogicalInput::MoveLeft)));
        assert!(latch.on_event(InputEvent::press(LogicalInput::MoveRight)));
        assert!(!latch.on_event(InputEvent::press(LogicalInput::MoveLeft)));

        latch.reset();
        assert!(latch.on_event(InputEvent::press(LogicalInput::MoveLeft)));
    }

    #[test]
    fn test_cadence_fires_every_fifth_poll() {
        let mut cadence = Cadence::default();
        let fired: Vec<bool> = (0..10).map(|_| cadence.poll()).collect();
        assert_eq!(
            fired,
            vec![false, false, false, false, true, false, false, false, false, true]
        );
        assert_eq!(cadence.pending(), 0);
    }

    #[test]
    fn test_cadence_zero_is_every_poll() {
        let mut cadence = Cadence::new(0);
        assert!(cadence.poll());
        assert!(cadence.poll());
    }

    #[test]
    fn test_vecdeque_source_drains_in_order() {
        let mut queue: VecDeque<InputEvent> = VecDeque::new();
        queue.push_back(InputEvent::press(LogicalInput::MoveLeft));
        queue.push_back(InputEvent::release(LogicalInput::MoveLeft));

        assert_eq!(
            queue.next_event(),
            Some(InputEvent::press(LogicalInput::MoveLeft))
        );
        assert_eq!(
            queue.next_event(),
            Some(InputEvent::release(LogicalInput::MoveLeft))
        );
        assert_eq!(queue.next_event(), None);
    }
}
