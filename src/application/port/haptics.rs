// SPDX-License-Identifier: MPL-2.0
//! Haptic feedback port definition.
//!
//! Haptics are non-essential sensory confirmation. Emitting a pulse is
//! fire-and-forget; platforms without actuators use [`NullHaptics`].

/// Pulse strength, mirroring the impact levels of mobile haptic engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticStrength {
    Light,
    Medium,
}

/// Port emitting haptic pulses.
pub trait HapticEmitter: Send + Sync {
    fn pulse(&self, strength: HapticStrength);
}

/// Emitter for hardware without haptic actuators. Does nothing.
#[derive(Debug, Default)]
pub struct NullHaptics;

impl HapticEmitter for NullHaptics {
    fn pulse(&self, _strength: HapticStrength) {}
}
