// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::application::port::VideoRef;

/// Screens the user can navigate between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Preview,
    /// Downstream processing placeholder, holding the hand-off payload.
    Processing { video: VideoRef },
}
