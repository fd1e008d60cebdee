// SPDX-License-Identifier: MPL-2.0
//! Touch sub-component: one finger pans, two fingers pinch-zoom.
//!
//! The pinch factor is the ratio between the current and the previous span of
//! the two tracked fingers, anchored at their midpoint. Any lift or cancel
//! clears every tracked contact and the span baseline, so each two-finger
//! gesture starts from a fresh baseline and a finger left over from a
//! previous gesture can never skew the next one.

use crate::ui::state::PointerTracker;
use iced::{Point, Vector};

/// Pinch/touch sub-component state.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    tracker: PointerTracker,
    last_span: Option<f32>,
}

/// Messages for the touch sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    FingerPressed { id: u64, position: Point },
    FingerMoved { id: u64, position: Point },
    /// Finger lifted or lost; the id is accepted for symmetry but every
    /// contact is dropped regardless.
    FingerLifted,
}

/// Effects produced by touch gestures.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// Single-finger pan by the finger's movement delta.
    PanBy(Vector),
    /// Two-finger zoom anchored at the fingers' midpoint.
    ZoomAt { factor: f32, focal: Point },
}

impl State {
    /// Handle a touch message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::FingerPressed { id, position } => {
                self.tracker.press(id, position);
                if self.tracker.len() == 2 {
                    // Baseline for the new pinch; the first move divides by it.
                    self.last_span = self.tracker.span();
                }
                Effect::None
            }
            Message::FingerMoved { id, position } => {
                let previous = match self.tracker.len() {
                    1 => self.tracker.single(),
                    _ => None,
                };
                if !self.tracker.moved(id, position) {
                    return Effect::None;
                }

                if let (Some(span), Some(focal)) = (self.tracker.span(), self.tracker.midpoint()) {
                    let factor = span / self.last_span.unwrap_or(span);
                    self.last_span = Some(span);
                    return Effect::ZoomAt { factor, focal };
                }

                match previous {
                    Some(previous) => Effect::PanBy(Vector::new(
                        position.x - previous.x,
                        position.y - previous.y,
                    )),
                    None => Effect::None,
                }
            }
            Message::FingerLifted => {
                self.tracker.clear();
                self.last_span = None;
                Effect::None
            }
        }
    }

    /// Number of fingers currently tracked.
    #[must_use]
    pub fn contacts(&self) -> usize {
        self.tracker.len()
    }

    /// Check if a two-finger pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.tracker.len() == 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn single_finger_moves_pan() {
        let mut state = State::default();
        state.handle(Message::FingerPressed {
            id: 1,
            position: Point::new(100.0, 100.0),
        });

        let effect = state.handle(Message::FingerMoved {
            id: 1,
            position: Point::new(90.0, 120.0),
        });
        match effect {
            Effect::PanBy(delta) => {
                assert_abs_diff_eq!(delta.x, -10.0);
                assert_abs_diff_eq!(delta.y, 20.0);
            }
            _ => panic!("expected PanBy effect"),
        }
    }

    #[test]
    fn two_fingers_zoom_at_midpoint() {
        let mut state = State::default();
        state.handle(Message::FingerPressed {
            id: 1,
            position: Point::new(70.0, 80.0),
        });
        state.handle(Message::FingerPressed {
            id: 2,
            position: Point::new(170.0, 80.0),
        });
        assert!(state.is_pinching());

        // Spread from a 100px span to 150px, midpoint lands at (145, 80).
        let effect = state.handle(Message::FingerMoved {
            id: 2,
            position: Point::new(220.0, 80.0),
        });
        match effect {
            Effect::ZoomAt { factor, focal } => {
                assert_abs_diff_eq!(factor, 1.5);
                assert_abs_diff_eq!(focal.x, 145.0);
                assert_abs_diff_eq!(focal.y, 80.0);
            }
            _ => panic!("expected ZoomAt effect"),
        }
    }

    #[test]
    fn first_pinch_move_uses_press_baseline() {
        let mut state = State::default();
        state.handle(Message::FingerPressed {
            id: 1,
            position: Point::new(0.0, 0.0),
        });
        state.handle(Message::FingerPressed {
            id: 2,
            position: Point::new(100.0, 0.0),
        });

        // No movement: span unchanged, factor must be exactly 1.
        let effect = state.handle(Message::FingerMoved {
            id: 1,
            position: Point::new(0.0, 0.0),
        });
        assert!(matches!(effect, Effect::ZoomAt { factor, .. } if factor == 1.0));
    }

    #[test]
    fn lift_clears_contacts_and_baseline() {
        let mut state = State::default();
        state.handle(Message::FingerPressed {
            id: 1,
            position: Point::new(0.0, 0.0),
        });
        state.handle(Message::FingerPressed {
            id: 2,
            position: Point::new(100.0, 0.0),
        });
        state.handle(Message::FingerLifted);

        assert_eq!(state.contacts(), 0);
        // The finger that stayed down is gone too; its moves are ignored
        // until it presses again.
        let effect = state.handle(Message::FingerMoved {
            id: 1,
            position: Point::new(10.0, 0.0),
        });
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn new_pinch_after_lift_starts_fresh() {
        let mut state = State::default();
        state.handle(Message::FingerPressed {
            id: 1,
            position: Point::new(0.0, 0.0),
        });
        state.handle(Message::FingerPressed {
            id: 2,
            position: Point::new(200.0, 0.0),
        });
        state.handle(Message::FingerLifted);

        // Re-press at a much smaller span; the old 200px span must not leak
        // into the new baseline.
        state.handle(Message::FingerPressed {
            id: 3,
            position: Point::new(0.0, 0.0),
        });
        state.handle(Message::FingerPressed {
            id: 4,
            position: Point::new(50.0, 0.0),
        });
        let effect = state.handle(Message::FingerMoved {
            id: 4,
            position: Point::new(50.0, 0.0),
        });
        assert!(matches!(effect, Effect::ZoomAt { factor, .. } if factor == 1.0));
    }

    #[test]
    fn third_finger_does_not_disturb_the_pinch() {
        let mut state = State::default();
        state.handle(Message::FingerPressed {
            id: 1,
            position: Point::new(0.0, 0.0),
        });
        state.handle(Message::FingerPressed {
            id: 2,
            position: Point::new(100.0, 0.0),
        });
        state.handle(Message::FingerPressed {
            id: 3,
            position: Point::new(500.0, 500.0),
        });

        assert_eq!(state.contacts(), 2);
        let effect = state.handle(Message::FingerMoved {
            id: 3,
            position: Point::new(400.0, 400.0),
        });
        assert!(matches!(effect, Effect::None));
    }
}
