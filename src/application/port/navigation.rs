// SPDX-License-Identifier: MPL-2.0
//! Navigation port definition.
//!
//! Screen transitions are side effects with no consumed return value:
//! forward navigation carries the chosen video to the processing screen,
//! back navigation carries nothing.

use super::media::VideoRef;

/// Named destinations reachable from the preview screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The downstream processing screen, with the hand-off payload.
    Processing { video: VideoRef },
}

/// Port performing screen transitions.
pub trait Navigator: Send + Sync {
    /// Forward transition to `route`.
    fn push(&self, route: Route);

    /// Back transition to the previous screen.
    fn back(&self);
}
