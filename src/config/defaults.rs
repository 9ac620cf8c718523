// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Picker Defaults
// ==========================================================================

/// Maximum clip duration accepted by the picker, in seconds.
pub const DEFAULT_MAX_CLIP_SECS: u32 = 30;

/// Requested picker quality (1.0 = maximum).
pub const DEFAULT_PICKER_QUALITY: f32 = 1.0;

/// Whether the picker offers an editing/trim step.
pub const DEFAULT_ALLOWS_TRIMMING: bool = true;

// ==========================================================================
// Hand-off Defaults
// ==========================================================================

/// Delay between the analyze trigger and the forward navigation, in
/// milliseconds.
pub const DEFAULT_HANDOFF_DELAY_MS: u64 = 500;
