// SPDX-License-Identifier: MPL-2.0
//! `iced_feedback` is a floating feedback widget built with the Iced GUI framework.
//!
//! It provides a toggleable feedback panel with a text area and 5-star rating,
//! a one-time onboarding hint, and a confetti celebration on submit. There is
//! no backend: submitting plays the celebration and resets the form.

#![doc(html_root_url = "https://docs.rs/iced_feedback/0.1.0")]

pub mod app;
pub mod error;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
