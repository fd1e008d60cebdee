// SPDX-License-Identifier: MPL-2.0
//! Plan viewer module responsible for the stage, its controls, and error
//! presentation.

pub mod component;
pub mod controls;
pub mod pane;
pub mod subcomponents;

use self::component::{Message, State};
use crate::config::StageTheme;
use crate::error::Error;
use crate::ui::theme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Stack, Text},
    Element, Length,
};

/// Presentation inputs owned by the app shell.
pub struct ViewContext {
    pub theme: StageTheme,
    /// Current plan position and total for the controls readout.
    pub position: Option<(usize, usize)>,
}

pub fn view<'a>(state: &'a State, ctx: &ViewContext) -> Element<'a, Message> {
    if let Some(error) = state.load_error() {
        return error_view(error);
    }

    let controls_model = controls::ViewModel {
        zoom_percent: state.zoom_percent(),
        position: ctx.position,
    };
    let controls_row = controls::view(&controls_model).map(Message::Controls);

    let stage = pane::view(pane::ViewModel {
        plan: state.plan(),
        transform: state.transform(),
        stage_size: state.stage_size(),
        dragging: state.is_dragging(),
        surface: theme::stage_surface_color(ctx.theme),
    })
    .map(Message::Stage);

    // The stage always renders, even while empty: its canvas is what reports
    // the stage bounds the transform needs before the first plan arrives.
    let mut stage_stack = Stack::new().push(stage);
    if let Some(notice) = stage_notice(state) {
        stage_stack = stage_stack.push(
            Container::new(Text::new(notice))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );
    }

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(controls_row)
        .push(stage_stack)
        .into()
}

fn stage_notice(state: &State) -> Option<&'static str> {
    if state.is_loading() && !state.has_plan() {
        Some("Loading plan\u{2026}")
    } else if !state.has_plan() {
        Some("Open a plan image or a directory of plans")
    } else {
        None
    }
}

fn error_view(error: &Error) -> Element<'_, Message> {
    let heading = Container::new(Text::new("Could not load the plan").size(24))
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let details = Container::new(Text::new(error.to_string()))
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let content = Column::new()
        .spacing(12)
        .width(Length::Fill)
        .push(heading)
        .push(details);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
