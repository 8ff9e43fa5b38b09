// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`feedback`] - The floating feedback widget (panel, rating, banner)
//! - [`state`] - Reusable state management (rating, countdown)
//! - [`widgets`] - Custom Iced widgets (confetti burst)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod feedback;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
