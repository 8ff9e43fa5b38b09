// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets.

pub mod confetti;

pub use confetti::{BurstSettings, ConfettiBurst};
