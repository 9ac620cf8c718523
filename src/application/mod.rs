// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! Holds the capability [`port`] traits that the preview flow depends on.
//! Infrastructure adapters implement the ports; the preview driver only
//! ever sees the trait objects, so every collaborator can be replaced
//! with a test double.

pub mod port;
