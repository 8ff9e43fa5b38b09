// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the feedback widget.
//!
//! The `App` struct is deliberately thin: the widget owns all interaction
//! state, so the app layer only resolves configuration, picks the theme,
//! and forwards messages. This file keeps the policy decisions (window
//! sizing, config overrides, theme resolution) close to the main update
//! loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::ui::feedback;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state hosting the feedback widget.
pub struct App {
    feedback: feedback::State,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("feedback", &self.feedback)
            .finish()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
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

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
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

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        Self {
            feedback: feedback::State::new(config.delays(), config.burst_settings()),
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = match flags.config_dir.as_deref() {
            Some(dir) => config::load_from_dir(Path::new(dir)),
            None => config::load(),
        };
        if let Some(warning) = warning {
            eprintln!("iced_feedback: {warning}");
        }

        let mut theme_mode = config.general.theme_mode;
        if let Some(raw) = flags.theme.as_deref() {
            match raw.parse::<ThemeMode>() {
                Ok(mode) => theme_mode = mode,
                Err(err) => eprintln!("iced_feedback: --theme ignored: {err}"),
            }
        }

        let app = App {
            feedback: feedback::State::new(config.delays(), config.burst_settings()),
            theme_mode,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        "Feedback".to_string()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_widget_subscription(&self.feedback),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Feedback(widget_message) => self
                .feedback
                .handle_message(widget_message)
                .map(Message::Feedback),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            feedback: &self.feedback,
        })
    }

    /// The hosted feedback widget state.
    #[must_use]
    pub fn feedback(&self) -> &feedback::State {
        &self.feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("ICED_FEEDBACK_CONFIG_DIR").ok();
        std::env::set_var("ICED_FEEDBACK_CONFIG_DIR", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("ICED_FEEDBACK_CONFIG_DIR", value);
        } else {
            std::env::remove_var("ICED_FEEDBACK_CONFIG_DIR");
        }
    }

    #[test]
    fn new_starts_closed_with_announcement() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert!(!app.feedback().panel_open());
            assert!(app.feedback().announcement_visible());
            assert!(!app.feedback().is_celebrating());
        });
    }

    #[test]
    fn update_forwards_widget_messages() {
        let mut app = App::default();
        let _ = app.update(Message::Feedback(feedback::Message::TogglePanel));
        assert!(app.feedback().panel_open());

        let _ = app.update(Message::Feedback(feedback::Message::ClosePanel));
        assert!(!app.feedback().panel_open());
    }

    #[test]
    fn theme_flag_overrides_config() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                theme: Some("dark".into()),
                ..Flags::default()
            });
            assert_eq!(app.theme(), Theme::Dark);
        });
    }

    #[test]
    fn invalid_theme_flag_falls_back_to_config() {
        with_temp_config_dir(|dir| {
            fs::write(
                dir.join("settings.toml"),
                "[general]\ntheme_mode = \"light\"\n",
            )
            .expect("write config");

            let (app, _task) = App::new(Flags {
                theme: Some("solarized".into()),
                ..Flags::default()
            });
            assert_eq!(app.theme(), Theme::Light);
        });
    }

    #[test]
    fn config_dir_flag_takes_precedence_over_env() {
        with_temp_config_dir(|_| {
            let override_dir = tempdir().expect("temp dir");
            fs::write(
                override_dir.path().join("settings.toml"),
                "[general]\ntheme_mode = \"dark\"\n",
            )
            .expect("write config");

            let (app, _task) = App::new(Flags {
                config_dir: Some(override_dir.path().to_string_lossy().into_owned()),
                ..Flags::default()
            });
            assert_eq!(app.theme(), Theme::Dark);
        });
    }

    #[test]
    fn window_settings_respect_minimum_size() {
        let settings = window_settings();
        let min = settings.min_size.expect("min size set");
        assert!(min.width <= settings.size.width);
        assert!(min.height <= settings.size.height);
    }
}
