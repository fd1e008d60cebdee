// SPDX-License-Identifier: MPL-2.0
//! Stage pane: renders the plan under the current transform and converts raw
//! window events into stage-local gesture events.
//!
//! The pane is a canvas program, so every `update` call receives the stage's
//! bounds fresh from layout. Coordinate conversion therefore always uses the
//! bounds at event time, never a cached copy, and a bounds change is reported
//! to the component as [`Event::StageSynced`] before any further gesture is
//! processed.

use crate::media::PlanData;
use crate::ui::state::Transform2D;
use iced::mouse;
use iced::touch;
use iced::widget::canvas;
use iced::widget::{Action, Canvas};
use iced::{Color, Element, Length, Point, Rectangle, Size, Theme, Vector};

/// Stage-local events published by the pane.
#[derive(Debug, Clone)]
pub enum Event {
    /// Observed stage bounds differ from the size the component recorded
    /// (first layout, window resize). The component refits on this signal.
    StageSynced(Size),
    /// Wheel tick with the cursor position as the zoom focal point.
    /// Positive `delta_y` means scrolling up (zoom in).
    WheelScrolled { delta_y: f32, cursor: Point },
    Pressed(Point),
    Moved(Point),
    Released,
    CursorLeft,
    FingerPressed { id: u64, position: Point },
    FingerMoved { id: u64, position: Point },
    FingerLifted,
}

/// Everything the pane needs for one frame.
pub struct ViewModel<'a> {
    pub plan: Option<&'a PlanData>,
    pub transform: Transform2D,
    /// Stage size the component currently believes in; used to detect
    /// layout changes.
    pub stage_size: Size,
    pub dragging: bool,
    pub surface: Color,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Event> {
    Canvas::new(StagePane { model })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

struct StagePane<'a> {
    model: ViewModel<'a>,
}

impl StagePane<'_> {
    /// Window-to-stage conversion for positions that may lie outside the
    /// stage (drags keep tracking past the edge, like the reference UI).
    fn stage_local(bounds: Rectangle, position: Point) -> Point {
        Point::new(position.x - bounds.x, position.y - bounds.y)
    }
}

impl canvas::Program<Event> for StagePane<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Event>> {
        // Layout is authoritative: re-read the bounds on every event and tell
        // the component first whenever they changed.
        let observed = bounds.size();
        if observed.width != self.model.stage_size.width
            || observed.height != self.model.stage_size.height
        {
            return Some(Action::publish(Event::StageSynced(observed)));
        }

        match event {
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let cursor_position = cursor.position_in(bounds)?;
                let delta_y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y,
                };
                if delta_y == 0.0 {
                    return None;
                }
                Some(
                    Action::publish(Event::WheelScrolled {
                        delta_y,
                        cursor: cursor_position,
                    })
                    .and_capture(),
                )
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let cursor_position = cursor.position_in(bounds)?;
                Some(Action::publish(Event::Pressed(cursor_position)).and_capture())
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Action::publish(Event::Released))
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Action::publish(
                Event::Moved(Self::stage_local(bounds, *position)),
            )),
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                Some(Action::publish(Event::CursorLeft))
            }
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if !bounds.contains(*position) {
                    return None;
                }
                Some(
                    Action::publish(Event::FingerPressed {
                        id: id.0,
                        position: Self::stage_local(bounds, *position),
                    })
                    .and_capture(),
                )
            }
            iced::Event::Touch(touch::Event::FingerMoved { id, position }) => Some(
                Action::publish(Event::FingerMoved {
                    id: id.0,
                    position: Self::stage_local(bounds, *position),
                })
                .and_capture(),
            ),
            iced::Event::Touch(
                touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. },
            ) => Some(Action::publish(Event::FingerLifted)),
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.model.surface);

        if let Some(plan) = self.model.plan {
            let Transform2D { pan, scale } = self.model.transform;
            let destination = Rectangle::new(
                Point::ORIGIN + Vector::new(pan.x, pan.y),
                Size::new(
                    plan.width as f32 * scale,
                    plan.height as f32 * scale,
                ),
            );
            frame.draw_image(destination, canvas::Image::new(plan.handle.clone()));
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.model.dragging {
            mouse::Interaction::Grabbing
        } else if self.model.plan.is_some() && cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
