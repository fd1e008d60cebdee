// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer, wheel, and touch gestures reach the viewer through the stage
//! canvas, which converts them to stage-local coordinates itself. Only
//! window-level keyboard shortcuts are routed here.

use super::Message;
use iced::{event, keyboard, Subscription};

/// Creates the keyboard shortcut subscription.
///
/// - Arrow keys navigate between plans
/// - `+` / `-` step-zoom around the stage center
/// - `0` or `f` reset to the fitted view
/// - `Escape` closes the viewer
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if matches!(status, event::Status::Captured) {
            return None;
        }

        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return None;
        };

        match key {
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Message::NavigateNext),
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                Some(Message::NavigatePrevious)
            }
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::Exit),
            keyboard::Key::Character(c) => match c.as_str() {
                "+" | "=" => Some(Message::StepZoomIn),
                "-" => Some(Message::StepZoomOut),
                "0" | "f" | "F" => Some(Message::ResetZoom),
                _ => None,
            },
            _ => None,
        }
    })
}
