// SPDX-License-Identifier: MPL-2.0
//! End-to-end widget scenarios driven through the public component API.

use iced_feedback::app::config::{self, Config, TimingConfig};
use iced_feedback::ui::feedback::{Delays, Message, State};
use iced_feedback::ui::widgets::confetti::BurstSettings;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn burst_settings() -> BurstSettings {
    Config::default().burst_settings()
}

fn type_text(state: &mut State, text: &str) {
    use iced::widget::text_editor::{Action, Edit};
    let _ = state.handle_message(Message::DraftEdited(Action::Edit(Edit::Paste(Arc::new(
        text.to_string(),
    )))));
}

#[test]
fn submit_cycle_resets_the_form_after_the_celebration() {
    // A zero celebration delay lets the next tick finish the cycle.
    let mut state = State::new(
        Delays {
            announcement: Duration::from_secs(7),
            celebration: Duration::ZERO,
        },
        burst_settings(),
    );

    let _ = state.handle_message(Message::TogglePanel);
    type_text(&mut state, "Great app");
    let _ = state.handle_message(Message::StarClicked(4));
    let _ = state.handle_message(Message::SubmitPressed);

    // Banner and burst are active immediately; the panel stays open.
    assert!(state.is_celebrating());
    assert!(state.panel_open());

    let _ = state.handle_message(Message::CountdownTick(Instant::now()));

    assert!(!state.is_celebrating());
    assert!(!state.panel_open());
    assert!(state.draft_is_empty());
    assert!(state.rating().is_empty());
}

#[test]
fn announcement_hides_without_any_interaction() {
    let mut state = State::new(
        Delays {
            announcement: Duration::ZERO,
            celebration: Duration::from_secs(3),
        },
        burst_settings(),
    );
    assert!(state.announcement_visible());

    let _ = state.handle_message(Message::CountdownTick(Instant::now()));
    assert!(!state.announcement_visible());
}

#[test]
fn timing_config_flows_into_the_widget_delays() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        timing: TimingConfig {
            announcement_ms: Some(1000),
            celebration_ms: Some(2000),
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let (loaded, warning) = config::load_from_path(&path);
    assert!(warning.is_none());

    let delays = loaded.delays();
    assert_eq!(delays.announcement, Duration::from_millis(1000));
    assert_eq!(delays.celebration, Duration::from_millis(2000));

    dir.close().expect("Failed to close temporary directory");
}
