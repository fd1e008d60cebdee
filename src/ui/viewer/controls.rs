// SPDX-License-Identifier: MPL-2.0
//! Viewer controls: zoom buttons, the percent readout, and plan navigation.

use iced::{
    alignment::Vertical,
    widget::{button, Row, Space, Text},
    Element, Length,
};

#[derive(Debug, Clone)]
pub enum Message {
    ZoomIn,
    ZoomOut,
    /// The percent readout doubles as the reset-to-fit button, like the
    /// lightbox's `100%` control.
    ResetZoom,
    NavigatePrevious,
    NavigateNext,
}

/// Snapshot of the state the controls row displays.
#[derive(Debug, Clone)]
pub struct ViewModel {
    pub zoom_percent: f32,
    /// Current plan position and total, shown when more than one plan exists.
    pub position: Option<(usize, usize)>,
}

pub fn view(model: &ViewModel) -> Element<'static, Message> {
    let zoom_out_button = button(Text::new("\u{2212}"))
        .on_press(Message::ZoomOut)
        .padding([6, 12]);

    let reset_button = button(Text::new(format!(
        "{}%",
        format_number(model.zoom_percent)
    )))
    .on_press(Message::ResetZoom)
    .padding([6, 12]);

    let zoom_in_button = button(Text::new("+"))
        .on_press(Message::ZoomIn)
        .padding([6, 12]);

    let mut row = Row::new()
        .spacing(10)
        .padding(10)
        .align_y(Vertical::Center)
        .push(zoom_out_button)
        .push(reset_button)
        .push(zoom_in_button);

    if let Some((current, total)) = model.position {
        let previous_button = button(Text::new("\u{25C0}"))
            .on_press(Message::NavigatePrevious)
            .padding([6, 12]);
        let next_button = button(Text::new("\u{25B6}"))
            .on_press(Message::NavigateNext)
            .padding([6, 12]);

        row = row
            .push(Space::new().width(Length::Fill))
            .push(previous_button)
            .push(Text::new(format!("{}/{}", current + 1, total)))
            .push(next_button);
    }

    row.into()
}

/// Formats a number for display (removes unnecessary decimal places)
#[must_use]
pub fn format_number(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON {
        // Value has no fractional part, so it represents an integer exactly
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i32;
        format!("{int_value}")
    } else {
        format!("{value:.1}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
