// SPDX-License-Identifier: MPL-2.0
//! Video preview and hand-off flow.
//!
//! The flow is split in two layers so it stays independent of any UI
//! framework:
//!
//! - [`machine`]: a pure finite-state machine. Every user gesture and
//!   collaborator result is an [`machine::Input`]; the machine mutates its
//!   [`state::PreviewState`] and returns [`machine::Effect`]s to perform.
//! - [`driver`]: an async binding that owns the capability ports, runs a
//!   sequential command loop, executes effects, and publishes each state
//!   snapshot over a watch channel for a view-binding layer.
//!
//! The hand-off delay is held by the driver as a plain deadline, so
//! unmounting the screen while a hand-off is pending cancels it instead of
//! leaving a dangling callback.

pub mod driver;
pub mod machine;
pub mod state;

pub use driver::{DriverOptions, PreviewDriver, PreviewHandle, PreviewPorts};
pub use machine::{Effect, Input, PreviewMachine};
pub use state::{Phase, PreviewState};
