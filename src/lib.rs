// SPDX-License-Identifier: MPL-2.0
//! `clip_lens` is the clip selection and hand-off front-end of a video
//! technique-analysis pipeline, built with the Iced GUI framework.
//!
//! The preview screen itself is a plain finite-state machine
//! ([`preview::machine`]) bound to injected capability ports
//! ([`application::port`]), so the flow can run and be tested without any
//! UI framework. The [`app`] module binds it to Iced for the desktop
//! binary.

pub mod app;
pub mod application;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod preview;
pub mod ui;
