// SPDX-License-Identifier: MPL-2.0
//! Application root state and Iced binding for the preview flow.
//!
//! The `App` struct is a thin view-binding layer: it spawns the preview
//! driver, renders the latest published state snapshot, forwards button
//! presses back to the driver, and reacts to navigation requests from the
//! driver's navigator port.

mod message;
mod screen;
mod subscription;

pub use message::{Flags, Message};
pub use screen::Screen;

use std::sync::Arc;

use crate::application::port::{NullHaptics, Route, VideoRef};
use crate::config;
use crate::infrastructure::{NavRequest, RfdMediaSource, WatchNavigator};
use crate::preview::{DriverOptions, PreviewDriver, PreviewHandle, PreviewPorts, PreviewState};
use crate::ui;
use iced::{window, Element, Subscription, Task, Theme};
use tokio::sync::watch;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 540;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    preview: PreviewHandle,
    preview_state: PreviewState,
    nav_rx: watch::Receiver<Option<NavRequest>>,
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
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

impl App {
    /// Initializes the application, spawns the preview driver, and mounts
    /// the preview screen with the optional initial video from `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("clip_lens: failed to load settings: {err}");
            config::Config::default()
        });

        let (navigator, nav_rx) = WatchNavigator::new();
        let ports = PreviewPorts {
            media: Arc::new(RfdMediaSource::new()),
            navigator: Arc::new(navigator),
            haptics: Arc::new(NullHaptics),
        };
        let options = DriverOptions {
            pick_request: config.pick_request(),
            handoff_delay: config.handoff_delay(),
        };
        let (driver, preview) = PreviewDriver::new(ports, options);

        preview.mount(flags.video_path.map(VideoRef::new));

        let app = App {
            screen: Screen::Preview,
            preview_state: preview.state(),
            preview,
            nav_rx,
        };

        let task = Task::perform(driver.run(), |()| Message::DriverStopped);
        (app, task)
    }

    fn title(&self) -> String {
        match &self.screen {
            Screen::Preview => "ClipLens - Preview Video".to_string(),
            Screen::Processing { video } => {
                format!("ClipLens - Analyzing {}", video.display_name())
            }
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::preview_states(self.preview.watch()),
            subscription::navigation(self.nav_rx.clone()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Preview(interaction) => {
                match interaction {
                    ui::preview::Message::AnalyzePressed => self.preview.analyze(),
                    ui::preview::Message::ReselectPressed => self.preview.reselect(),
                    ui::preview::Message::BackPressed => self.preview.back(),
                    ui::preview::Message::NoticeDismissed => self.preview.dismiss_notice(),
                    ui::preview::Message::SettingsPressed => self.preview.open_settings(),
                }
                Task::none()
            }
            Message::StateChanged(state) => {
                self.preview_state = state;
                Task::none()
            }
            Message::Navigate(NavRequest::Back) => {
                // Backing out of the entry screen leaves the application.
                self.preview.unmount();
                iced::exit()
            }
            Message::Navigate(NavRequest::Push(Route::Processing { video })) => {
                self.preview.unmount();
                self.screen = Screen::Processing { video };
                Task::none()
            }
            Message::DriverStopped => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::Preview => ui::preview::view(&self.preview_state).map(Message::Preview),
            Screen::Processing { video } => ui::processing::view(video),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::Phase;

    fn app() -> App {
        let (app, _task) = App::new(Flags::default());
        app
    }

    #[test]
    fn starts_on_preview_screen() {
        let app = app();
        assert_eq!(app.screen, Screen::Preview);
        assert_eq!(app.title(), "ClipLens - Preview Video");
    }

    #[test]
    fn state_change_message_updates_snapshot() {
        let mut app = app();
        let mut state = PreviewState::mounted(Some(VideoRef::new("file:///tmp/clip.mov")));
        state.busy = true;
        state.phase = Phase::Submitting;

        let _ = app.update(Message::StateChanged(state.clone()));
        assert_eq!(app.preview_state, state);
    }

    #[test]
    fn forward_navigation_switches_to_processing() {
        let mut app = app();
        let video = VideoRef::new("file:///tmp/clip.mov");
        let _ = app.update(Message::Navigate(NavRequest::Push(Route::Processing {
            video: video.clone(),
        })));

        assert_eq!(app.screen, Screen::Processing { video });
        assert!(app.title().contains("clip.mov"));
    }
}
