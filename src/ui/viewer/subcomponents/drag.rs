// SPDX-License-Identifier: MPL-2.0
//! Drag/pan sub-component with double-press detection.

use iced::{Point, Vector};
use std::time::{Duration, Instant};

/// Time threshold for double-press detection.
const DOUBLE_PRESS_THRESHOLD: Duration = Duration::from_millis(350);

/// Anchor captured at drag start; pans are cumulative deltas from here.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Anchor {
    grab: Point,
    pan: Vector,
}

/// Drag sub-component state.
///
/// Tracks the cursor, the active drag anchor, and press timing for
/// double-press detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    anchor: Option<Anchor>,
    cursor_position: Option<Point>,
    last_press: Option<Instant>,
}

/// Messages for the drag sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer pressed - requires the current pan from the orchestrator so
    /// later moves can report cumulative targets.
    Pressed { position: Point, pan: Vector },
    /// Pointer moved (also used for cursor tracking while not dragging).
    Moved(Point),
    /// Pointer released.
    Released,
    /// Cursor left the stage.
    CursorLeft,
}

/// Effects produced by drag operations.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// New pan target: anchor pan plus the cumulative pointer delta.
    PanTo(Vector),
    /// Second press within the double-press window.
    DoublePressed(Point),
}

impl State {
    /// Handle a drag message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)`
    /// pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Pressed { position, pan } => {
                self.cursor_position = Some(position);
                let now = Instant::now();

                let is_double_press = self
                    .last_press
                    .is_some_and(|t| now.duration_since(t) < DOUBLE_PRESS_THRESHOLD);

                if is_double_press {
                    self.last_press = None; // Reset to avoid triple-press
                    self.anchor = None;
                    return Effect::DoublePressed(position);
                }

                self.last_press = Some(now);
                self.anchor = Some(Anchor {
                    grab: position,
                    pan,
                });
                Effect::None
            }
            Message::Moved(position) => {
                self.cursor_position = Some(position);
                match self.anchor {
                    Some(anchor) => Effect::PanTo(Vector::new(
                        anchor.pan.x + (position.x - anchor.grab.x),
                        anchor.pan.y + (position.y - anchor.grab.y),
                    )),
                    None => Effect::None,
                }
            }
            Message::Released => {
                self.anchor = None;
                Effect::None
            }
            Message::CursorLeft => {
                self.anchor = None;
                self.cursor_position = None;
                Effect::None
            }
        }
    }

    /// Check if a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Get the current cursor position (if known).
    #[must_use]
    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: &mut State, x: f32, y: f32) -> Effect {
        state.handle(Message::Pressed {
            position: Point::new(x, y),
            pan: Vector::new(0.0, 0.0),
        })
    }

    #[test]
    fn press_and_release_toggle_dragging() {
        let mut state = State::default();
        assert!(!state.is_dragging());

        press(&mut state, 100.0, 100.0);
        assert!(state.is_dragging());

        state.handle(Message::Released);
        assert!(!state.is_dragging());
    }

    #[test]
    fn moved_updates_cursor_position() {
        let mut state = State::default();
        assert!(state.cursor_position().is_none());

        state.handle(Message::Moved(Point::new(50.0, 75.0)));
        assert_eq!(state.cursor_position(), Some(Point::new(50.0, 75.0)));
    }

    #[test]
    fn moves_report_cumulative_delta_from_anchor() {
        let mut state = State::default();
        state.handle(Message::Pressed {
            position: Point::new(200.0, 150.0),
            pan: Vector::new(-40.0, 10.0),
        });

        let effect = state.handle(Message::Moved(Point::new(180.0, 170.0)));
        match effect {
            Effect::PanTo(pan) => {
                assert_eq!(pan.x, -60.0);
                assert_eq!(pan.y, 30.0);
            }
            _ => panic!("expected PanTo effect"),
        }

        // Cumulative, not incremental: the same move target yields the same pan.
        let effect = state.handle(Message::Moved(Point::new(180.0, 170.0)));
        assert!(matches!(effect, Effect::PanTo(pan) if pan.x == -60.0 && pan.y == 30.0));
    }

    #[test]
    fn moves_without_anchor_produce_no_pan() {
        let mut state = State::default();
        let effect = state.handle(Message::Moved(Point::new(10.0, 10.0)));
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn second_press_within_threshold_is_a_double_press() {
        let mut state = State::default();
        assert!(matches!(press(&mut state, 5.0, 5.0), Effect::None));

        let effect = press(&mut state, 5.0, 5.0);
        assert!(matches!(effect, Effect::DoublePressed(p) if p == Point::new(5.0, 5.0)));
        // A double press never leaves a live drag behind.
        assert!(!state.is_dragging());
    }

    #[test]
    fn third_press_starts_a_fresh_cycle() {
        let mut state = State::default();
        press(&mut state, 0.0, 0.0);
        press(&mut state, 0.0, 0.0); // double
        let effect = press(&mut state, 0.0, 0.0);
        assert!(matches!(effect, Effect::None));
        assert!(state.is_dragging());
    }

    #[test]
    fn cursor_left_cancels_drag_and_cursor() {
        let mut state = State::default();
        press(&mut state, 100.0, 100.0);
        state.handle(Message::CursorLeft);

        assert!(!state.is_dragging());
        assert!(state.cursor_position().is_none());
    }
}
