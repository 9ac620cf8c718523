// SPDX-License-Identifier: MPL-2.0
//! UI components and styling.

pub mod design_tokens;
pub mod preview;
pub mod processing;
pub mod styles;
