// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::infrastructure::NavRequest;
use crate::preview::PreviewState;
use crate::ui::preview;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Interaction on the preview screen, forwarded to the driver.
    Preview(preview::Message),
    /// New state snapshot published by the preview driver.
    StateChanged(PreviewState),
    /// Navigation request published by the driver's navigator port.
    Navigate(NavRequest),
    /// The driver loop terminated.
    DriverStopped,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional video path or URI to preload; without one the picker opens
    /// on startup.
    pub video_path: Option<String>,
}
