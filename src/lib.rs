//! # light-panel
//!
//! A dashboard widget for controlling RGB lights through preset color
//! buttons, a brightness slider, and a small set of effect buttons. Built
//! for cheap RGB LED strips whose controllers only expose a handful of
//! colors and flash modes.
//!
//! The widget owns nothing but its rendered subtree: the host pushes entity
//! state into a shared [`state::EntityStates`] signal, the panel derives a
//! pure [`model::RenderModel`] from it, and user interactions are forwarded
//! as fire-and-forget [`commands::ServiceCall`]s through the host-provided
//! dispatcher. The next visual update arrives only with the next state push.

pub mod commands;
pub mod config;
pub mod model;
pub mod panel;
pub mod registry;
pub mod state;

/// The panel's stylesheet, for hosts that inline widget CSS instead of
/// serving it as a static asset.
pub const STYLESHEET: &str = include_str!("../style/light-panel.css");
