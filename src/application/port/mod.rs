// SPDX-License-Identifier: MPL-2.0
//! Capability port definitions for the preview flow.
//!
//! - [`media`]: permission check and video picking
//! - [`navigation`]: forward/back screen transitions
//! - [`haptics`]: fire-and-forget sensory feedback

pub mod haptics;
pub mod media;
pub mod navigation;

pub use haptics::{HapticEmitter, HapticStrength, NullHaptics};
pub use media::{MediaSource, PermissionStatus, PickOutcome, PickRequest, VideoRef};
pub use navigation::{Navigator, Route};
