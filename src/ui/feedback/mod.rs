// SPDX-License-Identifier: MPL-2.0
//! The floating feedback widget.
//!
//! One self-contained component following the "state down, messages up"
//! pattern: [`State`] owns all interaction state, the app layer forwards
//! [`Message`]s and stacks the view layers ([`State::view`] for the
//! bottom-right corner, plus the optional announcement, banner, and
//! confetti layers).

mod announcement;
mod banner;
mod component;
mod panel;
mod star_rating;

pub use component::{submit_button_id, Delays, Message, State};
