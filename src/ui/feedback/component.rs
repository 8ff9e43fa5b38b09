// SPDX-License-Identifier: MPL-2.0
//! Feedback widget component encapsulating state and update logic.
//!
//! The widget owns every piece of interaction state: whether the panel is
//! open, the draft text, the star rating, the one-time announcement and
//! the post-submit celebration (success banner + confetti burst). Nothing
//! escapes the component; the app layer only forwards messages and stacks
//! the view layers.

use crate::ui::feedback::{announcement, banner, panel};
use crate::ui::state::{Countdown, Rating};
use crate::ui::widgets::confetti::{BurstSettings, ConfettiBurst};
use iced::widget::selector::find;
use iced::widget::{text_editor, Id};
use iced::{event, keyboard, time, window, Element, Point, Rectangle, Subscription, Task};
use std::fmt;
use std::time::{Duration, Instant};

/// Identifier of the container wrapping the submit button; its on-screen
/// bounds anchor the confetti burst.
const SUBMIT_BUTTON_ID: &str = "feedback-submit";

/// Returns the widget id of the submit button container.
#[must_use]
pub fn submit_button_id() -> Id {
    Id::new(SUBMIT_BUTTON_ID)
}

/// Fixed delays for the widget's transient surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    /// How long the onboarding announcement stays visible after mount.
    pub announcement: Duration,
    /// How long the success banner and burst stay active after submit.
    pub celebration: Duration,
}

/// Messages emitted by the feedback widget's controls and timers.
#[derive(Debug, Clone)]
pub enum Message {
    TogglePanel,
    ClosePanel,
    DraftEdited(text_editor::Action),
    /// A star control was clicked; the payload is its 1-based ordinal.
    StarClicked(u8),
    SubmitPressed,
    /// Bounds of the submit button, resolved asynchronously at submit time.
    SubmitBoundsResolved(Option<Rectangle>),
    /// Coarse tick driving countdown expiry while a countdown is pending.
    CountdownTick(Instant),
    /// Per-frame tick driving the confetti simulation.
    FrameTick(Instant),
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// The post-submit celebration: banner visibility and burst share one cycle.
struct Celebration {
    countdown: Countdown,
    burst: ConfettiBurst,
}

/// Feedback widget state.
pub struct State {
    panel_open: bool,
    draft: text_editor::Content,
    rating: Rating,
    announcement: Option<Countdown>,
    celebration: Option<Celebration>,
    /// Last resolved burst anchor; reused when bounds resolution fails.
    last_burst_origin: Point,
    delays: Delays,
    burst_settings: BurstSettings,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("panel_open", &self.panel_open)
            .field("rating", &self.rating)
            .field("announcement_visible", &self.announcement.is_some())
            .field("celebrating", &self.celebration.is_some())
            .finish()
    }
}

impl State {
    /// Creates the widget state and starts the announcement countdown.
    #[must_use]
    pub fn new(delays: Delays, burst_settings: BurstSettings) -> Self {
        Self {
            panel_open: false,
            draft: text_editor::Content::new(),
            rating: Rating::EMPTY,
            announcement: Some(Countdown::start(delays.announcement)),
            celebration: None,
            last_burst_origin: Point::ORIGIN,
            delays,
            burst_settings,
        }
    }

    /// Whether the form panel is currently visible.
    #[must_use]
    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// The currently selected star rating.
    #[must_use]
    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// The draft text area content.
    #[must_use]
    pub fn draft(&self) -> &text_editor::Content {
        &self.draft
    }

    /// Current draft text.
    #[must_use]
    pub fn draft_text(&self) -> String {
        self.draft.text()
    }

    /// True while the draft holds no visible characters. Submission is
    /// unavailable in this state (the text area is a required field).
    #[must_use]
    pub fn draft_is_empty(&self) -> bool {
        self.draft.text().trim().is_empty()
    }

    /// True while the onboarding announcement is visible.
    #[must_use]
    pub fn announcement_visible(&self) -> bool {
        self.announcement.is_some()
    }

    /// True between submit and the end of the celebration countdown.
    #[must_use]
    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_some()
    }

    /// The active confetti burst, if a celebration is running.
    #[must_use]
    pub fn burst(&self) -> Option<&ConfettiBurst> {
        self.celebration.as_ref().map(|c| &c.burst)
    }

    /// Processes a widget message and returns any follow-up task.
    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TogglePanel => {
                self.panel_open = !self.panel_open;
                Task::none()
            }
            Message::ClosePanel => {
                self.panel_open = false;
                Task::none()
            }
            Message::DraftEdited(action) => {
                self.draft.perform(action);
                Task::none()
            }
            Message::StarClicked(star) => {
                self.rating = Rating::new(star);
                Task::none()
            }
            Message::SubmitPressed => self.submit(),
            Message::SubmitBoundsResolved(bounds) => {
                if let Some(celebration) = &mut self.celebration {
                    let origin = bounds
                        .map(|rect| rect.center())
                        .unwrap_or(self.last_burst_origin);
                    self.last_burst_origin = origin;
                    celebration.burst.ignite(origin);
                }
                Task::none()
            }
            Message::CountdownTick(_) => {
                self.expire_countdowns();
                Task::none()
            }
            Message::FrameTick(_) => {
                if let Some(celebration) = &mut self.celebration {
                    celebration.burst.step();
                }
                Task::none()
            }
            Message::RawEvent { event, .. } => {
                self.handle_raw_event(event);
                Task::none()
            }
        }
    }

    /// Starts the celebration cycle and resolves the burst anchor.
    fn submit(&mut self) -> Task<Message> {
        // A submit while a celebration is running is ignored; the countdown
        // is not restarted and no second burst spawns.
        if self.celebration.is_some() {
            return Task::none();
        }

        // Required field: the submit button carries no press handler while
        // the draft is empty, so this only guards programmatic submits.
        if self.draft_is_empty() {
            return Task::none();
        }

        self.celebration = Some(Celebration {
            countdown: Countdown::start(self.delays.celebration),
            burst: ConfettiBurst::new(self.burst_settings),
        });

        find(submit_button_id())
            .map(|target| target.and_then(|t| t.visible_bounds()))
            .map(Message::SubmitBoundsResolved)
    }

    fn expire_countdowns(&mut self) {
        // Terminal: once hidden, the announcement never reappears.
        if self.announcement.as_ref().is_some_and(Countdown::expired) {
            self.announcement = None;
        }

        if self
            .celebration
            .as_ref()
            .is_some_and(|c| c.countdown.expired())
        {
            self.finish_celebration();
        }
    }

    /// Ends the celebration: banner and burst disappear, the panel closes,
    /// and the form resets to its initial values.
    fn finish_celebration(&mut self) {
        self.celebration = None;
        self.panel_open = false;
        self.draft = text_editor::Content::new();
        self.rating = Rating::EMPTY;
    }

    /// Handles raw window events routed by the app-level subscription.
    ///
    /// Only the global toggle shortcut is of interest here: `F` with no
    /// command/alt modifier flips the panel.
    fn handle_raw_event(&mut self, event: event::Event) {
        if let event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Character(ref c),
            modifiers,
            ..
        }) = event
        {
            if (c.as_str() == "f" || c.as_str() == "F")
                && !modifiers.command()
                && !modifiers.alt()
            {
                self.panel_open = !self.panel_open;
            }
        }
    }

    /// Returns the timer subscriptions the widget currently needs.
    ///
    /// Both tickers are scoped to pending work: they stop as soon as the
    /// announcement and celebration are gone, and they die with the widget,
    /// so no timer can fire into torn-down state.
    pub fn subscription(&self) -> Subscription<Message> {
        let countdown_sub = if self.announcement.is_some() || self.celebration.is_some() {
            time::every(Duration::from_millis(100)).map(Message::CountdownTick)
        } else {
            Subscription::none()
        };

        let frame_sub = if self
            .celebration
            .as_ref()
            .is_some_and(|c| !c.burst.is_ignited() || c.burst.has_particles())
        {
            // Animate the burst at 60 FPS while particles are alive (or the
            // origin is still resolving)
            time::every(Duration::from_millis(16)).map(Message::FrameTick)
        } else {
            Subscription::none()
        };

        Subscription::batch([countdown_sub, frame_sub])
    }

    /// Renders the bottom-right corner: the panel (when open) above the
    /// floating toggle button.
    pub fn view(&self) -> Element<'_, Message> {
        panel::corner(self)
    }

    /// Renders the onboarding announcement overlay, while it is visible.
    pub fn view_announcement(&self) -> Option<Element<'_, Message>> {
        self.announcement.is_some().then(announcement::view)
    }

    /// Renders the success banner, while a celebration is running.
    pub fn view_banner(&self) -> Option<Element<'_, Message>> {
        self.celebration.is_some().then(banner::view)
    }

    /// Renders the confetti layer, while the burst has anything to show.
    pub fn view_burst(&self) -> Option<Element<'_, Message>> {
        self.celebration
            .as_ref()
            .filter(|c| c.burst.has_particles())
            .map(|c| c.burst.layer())
    }
}
