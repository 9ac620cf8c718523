// SPDX-License-Identifier: MPL-2.0
//! Desktop adapters for the capability ports.

pub mod navigation;
pub mod picker;

pub use navigation::{NavRequest, WatchNavigator};
pub use picker::RfdMediaSource;
