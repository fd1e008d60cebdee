// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the viewer and the plan
//! navigator.
//!
//! The `App` struct wires the viewer component to persisted preferences and
//! translates navigation effects into plan loads. Policy decisions (window
//! sizing, which CLI overrides persist) stay close to the update loop so the
//! user-facing behavior is easy to audit.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{
    self, Config, StageTheme, MAX_OVERSCROLL_MARGIN, MAX_ZOOM_STEP, MIN_OVERSCROLL_MARGIN,
    MIN_ZOOM_STEP,
};
use crate::plan_navigation::PlanNavigator;
use crate::ui::state::{TransformOptions, ZoomDirection};
use crate::ui::theme;
use crate::ui::viewer::{self, component};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::path::{Path, PathBuf};

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 700.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Ensures zoom step values stay inside the supported range so persisted
/// configs cannot request nonsensical increments.
fn clamp_zoom_step(value: f32) -> f32 {
    value.clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP)
}

fn clamp_margin(value: f32) -> f32 {
    value.clamp(MIN_OVERSCROLL_MARGIN, MAX_OVERSCROLL_MARGIN)
}

/// Transform options for this session: persisted preferences overridden by
/// CLI flags, all clamped to the supported ranges.
fn transform_options(config: &Config, flags: &Flags) -> TransformOptions {
    let mut options = TransformOptions::default();
    if let Some(step) = flags.zoom_step.or(config.zoom_step) {
        options.step = clamp_zoom_step(step);
    }
    if let Some(margin) = flags.margin.or(config.overscroll_margin) {
        options.overscroll_margin = clamp_margin(margin);
    }
    options
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Root Iced application state bridging the viewer, the plan list, and
/// persisted preferences.
pub struct App {
    viewer: component::State,
    navigator: PlanNavigator,
    theme: StageTheme,
}

impl App {
    /// Initializes application state and optionally kicks off the first plan
    /// load based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let options = transform_options(&config, &flags);

        // CLI overrides become the new preference, like the reference UI's
        // stored configuration overrides.
        if flags.zoom_step.is_some() || flags.margin.is_some() {
            let updated = Config {
                zoom_step: Some(options.step),
                overscroll_margin: Some(options.overscroll_margin),
                ..config.clone()
            };
            if let Err(error) = config::save(&updated) {
                eprintln!("Failed to persist preferences: {error}");
            }
        }

        let mut app = App {
            viewer: component::State::new(options),
            navigator: PlanNavigator::new(),
            theme: config.theme.unwrap_or_default(),
        };

        let task = match flags.path.as_deref().map(PathBuf::from) {
            Some(path) => app.open_path(&path),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let file_name = self.viewer.current_plan_path.as_deref().and_then(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map(String::from)
        });

        match (file_name, self.position()) {
            (Some(name), Some((current, total))) => {
                format!("{name} ({}/{total}) - PlanLens", current + 1)
            }
            (Some(name), None) => format!("{name} - PlanLens"),
            (None, _) => "PlanLens".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        theme::app_theme(self.theme)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => self.forward_viewer(viewer_message),
            Message::NavigateNext => self.navigate_next(),
            Message::NavigatePrevious => self.navigate_previous(),
            Message::StepZoomIn => {
                self.viewer.step_zoom(ZoomDirection::In);
                Task::none()
            }
            Message::StepZoomOut => {
                self.viewer.step_zoom(ZoomDirection::Out);
                Task::none()
            }
            Message::ResetZoom => {
                self.viewer.reset_to_fit();
                Task::none()
            }
            Message::Exit => iced::exit(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let ctx = viewer::ViewContext {
            theme: self.theme,
            position: self.position(),
        };
        viewer::view(&self.viewer, &ctx).map(Message::Viewer)
    }

    /// "current / total" readout, shown only when there is something to
    /// navigate between.
    fn position(&self) -> Option<(usize, usize)> {
        if self.navigator.len() > 1 {
            self.navigator
                .current_index()
                .map(|index| (index, self.navigator.len()))
        } else {
            None
        }
    }

    fn open_path(&mut self, path: &Path) -> Task<Message> {
        let opened = if path.is_dir() {
            self.navigator.open_directory(path)
        } else {
            self.navigator.open_plan(path)
        };

        match opened {
            Ok(()) => match self.navigator.current_plan_path() {
                Some(current) => {
                    let load = component::Message::StartLoadingPlan(current.to_path_buf());
                    self.forward_viewer(load)
                }
                None => Task::none(),
            },
            Err(error) => {
                eprintln!("Failed to open {}: {error}", path.display());
                Task::none()
            }
        }
    }

    fn forward_viewer(&mut self, message: component::Message) -> Task<Message> {
        let (effect, task) = self.viewer.handle_message(message);
        let follow_up = match effect {
            component::Effect::None => Task::none(),
            component::Effect::NavigateNext => self.navigate_next(),
            component::Effect::NavigatePrevious => self.navigate_previous(),
        };
        Task::batch([task.map(Message::Viewer), follow_up])
    }

    fn navigate_next(&mut self) -> Task<Message> {
        match self.navigator.navigate_next() {
            Some(path) => self.forward_viewer(component::Message::StartLoadingPlan(path)),
            None => Task::none(),
        }
    }

    fn navigate_previous(&mut self) -> Task<Message> {
        match self.navigator.navigate_previous() {
            Some(path) => self.forward_viewer(component::Message::StartLoadingPlan(path)),
            None => Task::none(),
        }
    }
}
