// SPDX-License-Identifier: MPL-2.0
//! Bounded tracker for active touch contacts.
//!
//! Pinch only ever needs the two earliest contacts, so the tracker is a fixed
//! two-slot structure rather than an open-ended map. Later fingers are
//! ignored, and the owner clears the whole tracker on any lift or cancel so a
//! stale entry can never bias the next gesture's baseline.

use iced::Point;

const MAX_CONTACTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Contact {
    id: u64,
    position: Point,
}

/// Positions of the currently tracked fingers, keyed by platform finger id.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    slots: [Option<Contact>; MAX_CONTACTS],
}

impl PointerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a finger press. Returns false when the finger was ignored
    /// because both slots are already occupied by other fingers.
    pub fn press(&mut self, id: u64, position: Point) -> bool {
        if let Some(contact) = self.contact_mut(id) {
            contact.position = position;
            return true;
        }
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some(Contact { id, position });
            return true;
        }
        false
    }

    /// Updates a tracked finger's position. Unknown fingers are ignored and
    /// return false.
    pub fn moved(&mut self, id: u64, position: Point) -> bool {
        match self.contact_mut(id) {
            Some(contact) => {
                contact.position = position;
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, id: u64) {
        for slot in &mut self.slots {
            if matches!(slot, Some(contact) if contact.id == id) {
                *slot = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.slots = [None; MAX_CONTACTS];
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the sole tracked finger, if exactly one is down.
    #[must_use]
    pub fn single(&self) -> Option<Point> {
        let mut contacts = self.slots.iter().flatten();
        let first = contacts.next()?;
        match contacts.next() {
            None => Some(first.position),
            Some(_) => None,
        }
    }

    /// Distance between the two tracked fingers, if both are down.
    #[must_use]
    pub fn span(&self) -> Option<f32> {
        let (a, b) = self.pair()?;
        Some(a.distance(b))
    }

    /// Midpoint of the two tracked fingers, the pinch focal point.
    #[must_use]
    pub fn midpoint(&self) -> Option<Point> {
        let (a, b) = self.pair()?;
        Some(Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0))
    }

    fn pair(&self) -> Option<(Point, Point)> {
        match &self.slots {
            [Some(a), Some(b)] => Some((a.position, b.position)),
            _ => None,
        }
    }

    fn contact_mut(&mut self, id: u64) -> Option<&mut Contact> {
        self.slots
            .iter_mut()
            .flatten()
            .find(|contact| contact.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_up_to_two_contacts() {
        let mut tracker = PointerTracker::new();
        assert!(tracker.press(1, Point::new(0.0, 0.0)));
        assert!(tracker.press(2, Point::new(100.0, 0.0)));
        assert_eq!(tracker.len(), 2);

        // Third finger is ignored outright.
        assert!(!tracker.press(3, Point::new(50.0, 50.0)));
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn repeated_press_updates_position() {
        let mut tracker = PointerTracker::new();
        tracker.press(7, Point::new(0.0, 0.0));
        assert!(tracker.press(7, Point::new(30.0, 40.0)));
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.single(), Some(Point::new(30.0, 40.0)));
    }

    #[test]
    fn moved_ignores_unknown_fingers() {
        let mut tracker = PointerTracker::new();
        tracker.press(1, Point::new(0.0, 0.0));
        assert!(!tracker.moved(9, Point::new(10.0, 10.0)));
        assert_eq!(tracker.single(), Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn span_and_midpoint_need_two_contacts() {
        let mut tracker = PointerTracker::new();
        tracker.press(1, Point::new(0.0, 0.0));
        assert_eq!(tracker.span(), None);
        assert_eq!(tracker.midpoint(), None);

        tracker.press(2, Point::new(60.0, 80.0));
        assert_eq!(tracker.span(), Some(100.0));
        assert_eq!(tracker.midpoint(), Some(Point::new(30.0, 40.0)));
    }

    #[test]
    fn release_frees_the_slot() {
        let mut tracker = PointerTracker::new();
        tracker.press(1, Point::new(0.0, 0.0));
        tracker.press(2, Point::new(10.0, 0.0));
        tracker.release(1);

        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.single(), Some(Point::new(10.0, 0.0)));
        assert!(tracker.press(3, Point::new(5.0, 5.0)));
    }

    #[test]
    fn clear_removes_everything() {
        let mut tracker = PointerTracker::new();
        tracker.press(1, Point::new(0.0, 0.0));
        tracker.press(2, Point::new(10.0, 0.0));
        tracker.clear();

        assert!(tracker.is_empty());
        assert_eq!(tracker.span(), None);
    }
}
