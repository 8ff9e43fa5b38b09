// SPDX-License-Identifier: MPL-2.0
//! Reusable state management types for the UI layer.

pub mod countdown;
pub mod rating;

pub use countdown::Countdown;
pub use rating::{Rating, STAR_COUNT};
