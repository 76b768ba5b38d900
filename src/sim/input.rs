//! Keyboard input tracking
//!
//! Reduces raw directional key events to a single paddle [`Direction`].
//! Only changes are reported, so repeated key-down events from auto-repeat
//! are swallowed.

use serde::{Deserialize, Serialize};

/// A directional key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
}

/// A directional key press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// Paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    None,
    Right,
}

impl Direction {
    /// Signed unit value: -1, 0 or 1
    #[inline]
    pub fn value(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::None => 0.0,
            Direction::Right => 1.0,
        }
    }

    fn of(key: Key) -> Self {
        match key {
            Key::Left => Direction::Left,
            Key::Right => Direction::Right,
        }
    }
}

/// What releasing a key does to the direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReleasePolicy {
    /// Any release stops the paddle, even if the other key is still down
    #[default]
    ResetToNeutral,
    /// Releasing one key falls back to the other if it is still held
    RestoreHeld,
}

/// Current direction derived from key events
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    policy: ReleasePolicy,
    direction: Direction,
    left_held: bool,
    right_held: bool,
}

impl InputTracker {
    pub fn new(policy: ReleasePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Latest direction
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Apply a key event, returning the new direction if it changed
    pub fn apply(&mut self, event: KeyEvent) -> Option<Direction> {
        let next = match event {
            KeyEvent::Pressed(key) => {
                self.set_held(key, true);
                Direction::of(key)
            }
            KeyEvent::Released(key) => {
                self.set_held(key, false);
                match self.policy {
                    ReleasePolicy::ResetToNeutral => Direction::None,
                    ReleasePolicy::RestoreHeld => self.held_direction(),
                }
            }
        };

        if next == self.direction {
            return None;
        }
        log::debug!("Direction {:?} -> {:?}", self.direction, next);
        self.direction = next;
        Some(next)
    }

    fn set_held(&mut self, key: Key, held: bool) {
        match key {
            Key::Left => self.left_held = held,
            Key::Right => self.right_held = held,
        }
    }

    /// Direction implied by the keys still down; the active key keeps priority
    fn held_direction(&self) -> Direction {
        match (self.left_held, self.right_held) {
            (true, true) => self.direction,
            (true, false) => Direction::Left,
            (false, true) => Direction::Right,
            (false, false) => Direction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_sets_direction() {
        let mut input = InputTracker::default();
        assert_eq!(input.direction(), Direction::None);
        assert_eq!(input.apply(KeyEvent::Pressed(Key::Left)), Some(Direction::Left));
        assert_eq!(input.apply(KeyEvent::Pressed(Key::Right)), Some(Direction::Right));
        assert_eq!(input.direction().value(), 1.0);
    }

    #[test]
    fn test_repeated_state_not_reemitted() {
        let mut input = InputTracker::default();
        assert!(input.apply(KeyEvent::Pressed(Key::Left)).is_some());
        // Auto-repeat
        assert_eq!(input.apply(KeyEvent::Pressed(Key::Left)), None);
        assert!(input.apply(KeyEvent::Released(Key::Left)).is_some());
        assert_eq!(input.apply(KeyEvent::Released(Key::Right)), None);
    }

    /// Releasing "left" while "right" is still held goes to neutral, not +1.
    #[test]
    fn test_release_resets_to_neutral_even_if_other_held() {
        let mut input = InputTracker::new(ReleasePolicy::ResetToNeutral);
        input.apply(KeyEvent::Pressed(Key::Right));
        input.apply(KeyEvent::Pressed(Key::Left));
        assert_eq!(input.direction(), Direction::Left);

        assert_eq!(input.apply(KeyEvent::Released(Key::Left)), Some(Direction::None));
        assert_eq!(input.direction().value(), 0.0);
    }

    #[test]
    fn test_release_of_other_key_resets_to_neutral() {
        let mut input = InputTracker::default();
        input.apply(KeyEvent::Pressed(Key::Left));
        assert_eq!(input.apply(KeyEvent::Released(Key::Right)), Some(Direction::None));
    }

    #[test]
    fn test_restore_held_policy() {
        let mut input = InputTracker::new(ReleasePolicy::RestoreHeld);
        input.apply(KeyEvent::Pressed(Key::Right));
        input.apply(KeyEvent::Pressed(Key::Left));
        assert_eq!(input.apply(KeyEvent::Released(Key::Left)), Some(Direction::Right));

        // Releasing a key that is not active keeps the active one
        input.apply(KeyEvent::Pressed(Key::Left));
        assert_eq!(input.apply(KeyEvent::Released(Key::Right)), None);
        assert_eq!(input.direction(), Direction::Left);

        assert_eq!(input.apply(KeyEvent::Released(Key::Left)), Some(Direction::None));
    }
}
