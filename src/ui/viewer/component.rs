// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating one (stage, plan) attachment.
//!
//! Owns the transform, the geometry, and the gesture sub-components, and
//! translates stage events and control commands into transform updates. The
//! app shell only sees [`Effect`]s; everything transform-related stays here.

use crate::error::Error;
use crate::media::{self, PlanData};
use crate::ui::state::{StageGeometry, StageTransform, Transform2D, TransformOptions, ZoomDirection};
use crate::ui::viewer::subcomponents::{drag, pinch};
use crate::ui::viewer::{controls, pane};
use iced::{Size, Task};
use std::path::PathBuf;

/// Messages consumed by the viewer component.
#[derive(Debug, Clone)]
pub enum Message {
    StartLoadingPlan(PathBuf),
    PlanLoaded(Result<PlanData, Error>),
    Stage(pane::Event),
    Controls(controls::Message),
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    NavigateNext,
    NavigatePrevious,
}

/// Viewer component state.
pub struct State {
    plan: Option<PlanData>,
    /// Path of the plan being shown or loaded; the app shell uses it for the
    /// window title.
    pub current_plan_path: Option<PathBuf>,
    load_error: Option<Error>,
    is_loading: bool,
    transform: StageTransform,
    stage_size: Size,
    drag: drag::State,
    pinch: pinch::State,
}

impl Default for State {
    fn default() -> Self {
        Self::new(TransformOptions::default())
    }
}

impl State {
    #[must_use]
    pub fn new(options: TransformOptions) -> Self {
        Self {
            plan: None,
            current_plan_path: None,
            load_error: None,
            is_loading: false,
            transform: StageTransform::new(options),
            stage_size: Size::ZERO,
            drag: drag::State::default(),
            pinch: pinch::State::default(),
        }
    }

    /// Handle a viewer message, returning the app-level effect and any task
    /// to run.
    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::StartLoadingPlan(path) => {
                self.is_loading = true;
                self.load_error = None;
                self.current_plan_path = Some(path.clone());
                (
                    Effect::None,
                    Task::perform(media::load_plan_async(path), Message::PlanLoaded),
                )
            }
            Message::PlanLoaded(Ok(plan)) => {
                self.is_loading = false;
                self.load_error = None;
                self.plan = Some(plan);
                // The natural size exists only from here on; this is the
                // attach-time fit the stage has been waiting for.
                self.transform.fit_to_stage(self.geometry());
                (Effect::None, Task::none())
            }
            Message::PlanLoaded(Err(error)) => {
                self.is_loading = false;
                self.plan = None;
                self.load_error = Some(error);
                (Effect::None, Task::none())
            }
            Message::Stage(event) => {
                self.handle_stage_event(event);
                (Effect::None, Task::none())
            }
            Message::Controls(controls::Message::ZoomIn) => {
                self.step_zoom(ZoomDirection::In);
                (Effect::None, Task::none())
            }
            Message::Controls(controls::Message::ZoomOut) => {
                self.step_zoom(ZoomDirection::Out);
                (Effect::None, Task::none())
            }
            Message::Controls(controls::Message::ResetZoom) => {
                self.reset_to_fit();
                (Effect::None, Task::none())
            }
            Message::Controls(controls::Message::NavigateNext) => {
                (Effect::NavigateNext, Task::none())
            }
            Message::Controls(controls::Message::NavigatePrevious) => {
                (Effect::NavigatePrevious, Task::none())
            }
        }
    }

    fn handle_stage_event(&mut self, event: pane::Event) {
        match event {
            pane::Event::StageSynced(size) => {
                self.stage_size = size;
                // Host-reported resize: refit, exactly as the attach fit.
                self.transform.fit_to_stage(self.geometry());
            }
            pane::Event::WheelScrolled { delta_y, cursor } => {
                let direction = if delta_y > 0.0 {
                    ZoomDirection::In
                } else {
                    ZoomDirection::Out
                };
                self.transform.step(self.geometry(), direction, Some(cursor));
            }
            pane::Event::Pressed(position) => {
                let effect = self.drag.handle(drag::Message::Pressed {
                    position,
                    pan: self.transform.pan(),
                });
                if let drag::Effect::DoublePressed(focal) = effect {
                    self.transform.toggle_magnify(self.geometry(), focal);
                }
            }
            pane::Event::Moved(position) => {
                if let drag::Effect::PanTo(pan) = self.drag.handle(drag::Message::Moved(position)) {
                    self.transform.pan_to(self.geometry(), pan);
                }
            }
            pane::Event::Released => {
                self.drag.handle(drag::Message::Released);
            }
            pane::Event::CursorLeft => {
                self.drag.handle(drag::Message::CursorLeft);
            }
            pane::Event::FingerPressed { id, position } => {
                self.pinch
                    .handle(pinch::Message::FingerPressed { id, position });
            }
            pane::Event::FingerMoved { id, position } => {
                match self.pinch.handle(pinch::Message::FingerMoved { id, position }) {
                    pinch::Effect::PanBy(delta) => {
                        self.transform.pan_by(self.geometry(), delta);
                    }
                    pinch::Effect::ZoomAt { factor, focal } => {
                        self.transform.zoom_at(self.geometry(), factor, focal);
                    }
                    pinch::Effect::None => {}
                }
            }
            pane::Event::FingerLifted => {
                self.pinch.handle(pinch::Message::FingerLifted);
            }
        }
    }

    /// Host command: one zoom step centered on the stage.
    pub fn step_zoom(&mut self, direction: ZoomDirection) {
        self.transform.step(self.geometry(), direction, None);
    }

    /// Host command: back to the fitted, centered view.
    pub fn reset_to_fit(&mut self) {
        self.transform.reset_to_fit(self.geometry());
    }

    fn geometry(&self) -> StageGeometry {
        StageGeometry::new(self.stage_size, self.plan.as_ref().map(PlanData::natural_size))
    }

    #[must_use]
    pub fn has_plan(&self) -> bool {
        self.plan.is_some()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn plan(&self) -> Option<&PlanData> {
        self.plan.as_ref()
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&Error> {
        self.load_error.as_ref()
    }

    #[must_use]
    pub fn transform(&self) -> Transform2D {
        self.transform.transform()
    }

    #[must_use]
    pub fn zoom_percent(&self) -> f32 {
        self.transform.zoom_percent()
    }

    #[must_use]
    pub fn stage_size(&self) -> Size {
        self.stage_size
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }
}
