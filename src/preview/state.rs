// SPDX-License-Identifier: MPL-2.0
//! Observable state of the preview screen.

use crate::application::port::VideoRef;

/// Lifecycle phase of the preview flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No video selected and no selection in flight.
    Empty,
    /// Permission check or picker in flight.
    Selecting,
    /// A video is selected and the screen is idle.
    Ready,
    /// Analysis triggered, hand-off pending.
    Submitting,
    /// Terminal: navigated forward to processing.
    HandedOff,
    /// Terminal: navigated back.
    Cancelled,
}

/// Snapshot published to view-binding layers after every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewState {
    pub phase: Phase,
    /// The chosen clip. Guaranteed present once `phase` is `HandedOff`.
    pub selected_video: Option<VideoRef>,
    /// True from the analyze trigger until the screen is remounted.
    /// Guards against duplicate submission while a hand-off is in flight.
    pub busy: bool,
    /// Whether the permission-denied notice is showing.
    pub permission_notice: bool,
}

impl PreviewState {
    /// State right after mounting. An initial video skips straight to
    /// `Ready`; without one the flow starts selecting. Mounting always
    /// clears the busy flag, since a previous visit may have left it set.
    #[must_use]
    pub fn mounted(initial: Option<VideoRef>) -> Self {
        let phase = if initial.is_some() {
            Phase::Ready
        } else {
            Phase::Selecting
        };

        Self {
            phase,
            selected_video: initial,
            busy: false,
            permission_notice: false,
        }
    }

    /// Whether the flow reached a terminal phase.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::HandedOff | Phase::Cancelled)
    }
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            phase: Phase::Empty,
            selected_video: None,
            busy: false,
            permission_notice: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounted_with_video_is_ready() {
        let state = PreviewState::mounted(Some(VideoRef::new("file:///tmp/clip.mov")));
        assert_eq!(state.phase, Phase::Ready);
        assert!(state.selected_video.is_some());
        assert!(!state.busy);
    }

    #[test]
    fn mounted_without_video_is_selecting() {
        let state = PreviewState::mounted(None);
        assert_eq!(state.phase, Phase::Selecting);
        assert_eq!(state.selected_video, None);
    }

    #[test]
    fn terminal_phases() {
        let mut state = PreviewState::default();
        assert!(!state.is_terminal());
        state.phase = Phase::HandedOff;
        assert!(state.is_terminal());
        state.phase = Phase::Cancelled;
        assert!(state.is_terminal());
    }
}
