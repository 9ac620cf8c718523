// SPDX-License-Identifier: MPL-2.0
//! Pure finite-state machine for the preview flow.
//!
//! The machine knows nothing about dialogs, timers, or widgets. Callers
//! feed it [`Input`]s and perform the returned [`Effect`]s; results of
//! those effects come back as further inputs. Inputs that make no sense in
//! the current phase are ignored, which is what makes "analyze with no
//! video" and duplicate submissions no-ops.

use crate::application::port::{HapticStrength, PermissionStatus, PickOutcome, PickRequest, VideoRef};

use super::state::{Phase, PreviewState};

/// User gestures and collaborator results consumed by the machine.
#[derive(Debug, Clone)]
pub enum Input {
    /// The screen became active, with an optional initial video reference.
    Mounted { initial: Option<VideoRef> },
    /// Result of the runtime permission request.
    PermissionResolved(PermissionStatus),
    /// Result of the picker invocation.
    PickerResolved(PickOutcome),
    /// The permission notice was dismissed.
    NoticeDismissed,
    /// The permission notice's "Settings" affordance was triggered.
    SettingsRequested,
    /// The analyze action was triggered.
    AnalyzePressed,
    /// The "pick a different video" action was triggered.
    ReselectPressed,
    /// The explicit back affordance was triggered.
    BackPressed,
    /// The hand-off delay elapsed.
    HandoffElapsed,
    /// The screen is going away.
    Unmounted,
}

/// Side effects the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    RequestPermission,
    LaunchPicker(PickRequest),
    EmitHaptic(HapticStrength),
    /// Start the fixed hand-off delay; `HandoffElapsed` comes back when it
    /// fires.
    ScheduleHandoff,
    /// Drop any pending hand-off delay.
    CancelHandoff,
    NavigateBack,
    NavigateToProcessing(VideoRef),
    /// Open the OS permission settings (extension point, see the media
    /// port).
    OpenSystemSettings,
}

/// The preview screen's state machine.
#[derive(Debug)]
pub struct PreviewMachine {
    state: PreviewState,
    pick_request: PickRequest,
}

impl PreviewMachine {
    /// Creates a machine in the `Empty` phase. `pick_request` carries the
    /// picker constraints used for every selection round.
    #[must_use]
    pub fn new(pick_request: PickRequest) -> Self {
        Self {
            state: PreviewState::default(),
            pick_request,
        }
    }

    #[must_use]
    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    /// Applies `input`, returning the effects to perform in order.
    pub fn handle(&mut self, input: Input) -> Vec<Effect> {
        match input {
            Input::Mounted { initial } => {
                self.state = PreviewState::mounted(initial);
                // A stale delay from a previous visit must never fire.
                let mut effects = vec![Effect::CancelHandoff];
                if self.state.phase == Phase::Selecting {
                    effects.push(Effect::RequestPermission);
                }
                effects
            }
            Input::PermissionResolved(status) => {
                if self.state.phase != Phase::Selecting || self.state.permission_notice {
                    return Vec::new();
                }
                match status {
                    PermissionStatus::Granted => {
                        vec![Effect::LaunchPicker(self.pick_request.clone())]
                    }
                    PermissionStatus::Denied => {
                        self.state.permission_notice = true;
                        Vec::new()
                    }
                }
            }
            Input::PickerResolved(outcome) => {
                if self.state.phase != Phase::Selecting {
                    return Vec::new();
                }
                match outcome {
                    PickOutcome::Picked(video) => {
                        self.state.selected_video = Some(video);
                        self.state.phase = Phase::Ready;
                        Vec::new()
                    }
                    PickOutcome::Canceled => {
                        self.state.phase = Phase::Cancelled;
                        vec![Effect::NavigateBack]
                    }
                }
            }
            Input::NoticeDismissed => {
                if !self.state.permission_notice {
                    return Vec::new();
                }
                self.state.permission_notice = false;
                self.state.phase = Phase::Cancelled;
                vec![Effect::NavigateBack]
            }
            Input::SettingsRequested => {
                if !self.state.permission_notice {
                    return Vec::new();
                }
                self.state.permission_notice = false;
                self.state.phase = Phase::Cancelled;
                vec![Effect::OpenSystemSettings, Effect::NavigateBack]
            }
            Input::AnalyzePressed => {
                if self.state.phase != Phase::Ready || self.state.selected_video.is_none() {
                    return Vec::new();
                }
                self.state.busy = true;
                self.state.phase = Phase::Submitting;
                vec![
                    Effect::EmitHaptic(HapticStrength::Medium),
                    Effect::ScheduleHandoff,
                ]
            }
            Input::ReselectPressed => {
                if !matches!(self.state.phase, Phase::Empty | Phase::Ready) {
                    return Vec::new();
                }
                self.state.phase = Phase::Selecting;
                vec![
                    Effect::EmitHaptic(HapticStrength::Light),
                    Effect::RequestPermission,
                ]
            }
            Input::BackPressed => {
                if self.state.is_terminal() {
                    return Vec::new();
                }
                let was_submitting = self.state.phase == Phase::Submitting;
                self.state.phase = Phase::Cancelled;
                let mut effects = Vec::new();
                if was_submitting {
                    effects.push(Effect::CancelHandoff);
                }
                effects.push(Effect::NavigateBack);
                effects
            }
            Input::HandoffElapsed => {
                if self.state.phase != Phase::Submitting {
                    return Vec::new();
                }
                // Submitting is only reachable with a selection in place.
                match self.state.selected_video.clone() {
                    Some(video) => {
                        self.state.phase = Phase::HandedOff;
                        vec![Effect::NavigateToProcessing(video)]
                    }
                    None => Vec::new(),
                }
            }
            Input::Unmounted => vec![Effect::CancelHandoff],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PickRequest {
        PickRequest {
            allows_trimming: true,
            quality: 1.0,
            max_duration_secs: 30,
        }
    }

    fn clip() -> VideoRef {
        VideoRef::new("file:///tmp/clip.mov")
    }

    fn machine() -> PreviewMachine {
        PreviewMachine::new(request())
    }

    #[test]
    fn mount_with_video_does_not_request_permission() {
        let mut m = machine();
        let effects = m.handle(Input::Mounted {
            initial: Some(clip()),
        });
        assert_eq!(effects, vec![Effect::CancelHandoff]);
        assert_eq!(m.state().phase, Phase::Ready);
        assert_eq!(m.state().selected_video, Some(clip()));
    }

    #[test]
    fn mount_without_video_starts_selection() {
        let mut m = machine();
        let effects = m.handle(Input::Mounted { initial: None });
        assert_eq!(
            effects,
            vec![Effect::CancelHandoff, Effect::RequestPermission]
        );
        assert_eq!(m.state().phase, Phase::Selecting);
    }

    #[test]
    fn permission_granted_launches_picker_with_constraints() {
        let mut m = machine();
        m.handle(Input::Mounted { initial: None });
        let effects = m.handle(Input::PermissionResolved(PermissionStatus::Granted));
        assert_eq!(effects, vec![Effect::LaunchPicker(request())]);
        assert_eq!(m.state().phase, Phase::Selecting);
    }

    #[test]
    fn permission_denied_shows_notice_without_picker() {
        let mut m = machine();
        m.handle(Input::Mounted { initial: None });
        let effects = m.handle(Input::PermissionResolved(PermissionStatus::Denied));
        assert!(effects.is_empty());
        assert!(m.state().permission_notice);
        assert_eq!(m.state().phase, Phase::Selecting);
    }

    #[test]
    fn dismissing_notice_cancels_and_navigates_back() {
        let mut m = machine();
        m.handle(Input::Mounted { initial: None });
        m.handle(Input::PermissionResolved(PermissionStatus::Denied));
        let effects = m.handle(Input::NoticeDismissed);
        assert_eq!(effects, vec![Effect::NavigateBack]);
        assert_eq!(m.state().phase, Phase::Cancelled);
        assert!(!m.state().permission_notice);
    }

    #[test]
    fn settings_affordance_opens_settings_then_backs_out() {
        let mut m = machine();
        m.handle(Input::Mounted { initial: None });
        m.handle(Input::PermissionResolved(PermissionStatus::Denied));
        let effects = m.handle(Input::SettingsRequested);
        assert_eq!(
            effects,
            vec![Effect::OpenSystemSettings, Effect::NavigateBack]
        );
        assert_eq!(m.state().phase, Phase::Cancelled);
    }

    #[test]
    fn notice_inputs_are_ignored_without_notice() {
        let mut m = machine();
        m.handle(Input::Mounted { initial: None });
        assert!(m.handle(Input::NoticeDismissed).is_empty());
        assert!(m.handle(Input::SettingsRequested).is_empty());
        assert_eq!(m.state().phase, Phase::Selecting);
    }

    #[test]
    fn picker_cancel_backs_out_and_leaves_selection_unset() {
        let mut m = machine();
        m.handle(Input::Mounted { initial: None });
        m.handle(Input::PermissionResolved(PermissionStatus::Granted));
        let effects = m.handle(Input::PickerResolved(PickOutcome::Canceled));
        assert_eq!(effects, vec![Effect::NavigateBack]);
        assert_eq!(m.state().phase, Phase::Cancelled);
        assert_eq!(m.state().selected_video, None);
    }

    #[test]
    fn picked_video_becomes_ready() {
        let mut m = machine();
        m.handle(Input::Mounted { initial: None });
        m.handle(Input::PermissionResolved(PermissionStatus::Granted));
        let effects = m.handle(Input::PickerResolved(PickOutcome::Picked(clip())));
        assert!(effects.is_empty());
        assert_eq!(m.state().phase, Phase::Ready);
        assert_eq!(m.state().selected_video, Some(clip()));
    }

    #[test]
    fn analyze_without_video_is_noop() {
        let mut m = machine();
        m.handle(Input::Mounted { initial: None });
        let effects = m.handle(Input::AnalyzePressed);
        assert!(effects.is_empty());
        assert!(!m.state().busy);
        assert_eq!(m.state().phase, Phase::Selecting);
    }

    #[test]
    fn analyze_with_video_schedules_handoff_with_medium_pulse() {
        let mut m = machine();
        m.handle(Input::Mounted {
            initial: Some(clip()),
        });
        let effects = m.handle(Input::AnalyzePressed);
        assert_eq!(
            effects,
            vec![
                Effect::EmitHaptic(HapticStrength::Medium),
                Effect::ScheduleHandoff,
            ]
        );
        assert_eq!(m.state().phase, Phase::Submitting);
        assert!(m.state().busy);
    }

    #[test]
    fn analyze_while_submitting_is_noop() {
        let mut m = machine();
        m.handle(Input::Mounted {
            initial: Some(clip()),
        });
        m.handle(Input::AnalyzePressed);
        let effects = m.handle(Input::AnalyzePressed);
        assert!(effects.is_empty());
        assert_eq!(m.state().phase, Phase::Submitting);
    }

    #[test]
    fn handoff_elapsed_navigates_forward_with_payload() {
        let mut m = machine();
        m.handle(Input::Mounted {
            initial: Some(clip()),
        });
        m.handle(Input::AnalyzePressed);
        let effects = m.handle(Input::HandoffElapsed);
        assert_eq!(effects, vec![Effect::NavigateToProcessing(clip())]);
        assert_eq!(m.state().phase, Phase::HandedOff);
        // The busy flag is not reset; the screen unmounts afterwards.
        assert!(m.state().busy);
    }

    #[test]
    fn handoff_elapsed_outside_submitting_is_ignored() {
        let mut m = machine();
        m.handle(Input::Mounted {
            initial: Some(clip()),
        });
        let effects = m.handle(Input::HandoffElapsed);
        assert!(effects.is_empty());
        assert_eq!(m.state().phase, Phase::Ready);
    }

    #[test]
    fn reselect_from_ready_pulses_light_and_requests_permission() {
        let mut m = machine();
        m.handle(Input::Mounted {
            initial: Some(clip()),
        });
        let effects = m.handle(Input::ReselectPressed);
        assert_eq!(
            effects,
            vec![
                Effect::EmitHaptic(HapticStrength::Light),
                Effect::RequestPermission,
            ]
        );
        assert_eq!(m.state().phase, Phase::Selecting);
        // The previous selection stays visible until the picker resolves.
        assert_eq!(m.state().selected_video, Some(clip()));
    }

    #[test]
    fn reselect_while_submitting_is_ignored() {
        let mut m = machine();
        m.handle(Input::Mounted {
            initial: Some(clip()),
        });
        m.handle(Input::AnalyzePressed);
        assert!(m.handle(Input::ReselectPressed).is_empty());
        assert_eq!(m.state().phase, Phase::Submitting);
    }

    #[test]
    fn back_while_submitting_cancels_pending_handoff() {
        let mut m = machine();
        m.handle(Input::Mounted {
            initial: Some(clip()),
        });
        m.handle(Input::AnalyzePressed);
        let effects = m.handle(Input::BackPressed);
        assert_eq!(effects, vec![Effect::CancelHandoff, Effect::NavigateBack]);
        assert_eq!(m.state().phase, Phase::Cancelled);
    }

    #[test]
    fn unmount_cancels_handoff() {
        let mut m = machine();
        m.handle(Input::Mounted {
            initial: Some(clip()),
        });
        m.handle(Input::AnalyzePressed);
        let effects = m.handle(Input::Unmounted);
        assert_eq!(effects, vec![Effect::CancelHandoff]);
    }

    #[test]
    fn remount_resets_busy_flag() {
        let mut m = machine();
        m.handle(Input::Mounted {
            initial: Some(clip()),
        });
        m.handle(Input::AnalyzePressed);
        assert!(m.state().busy);

        m.handle(Input::Mounted {
            initial: Some(clip()),
        });
        assert!(!m.state().busy);
        assert_eq!(m.state().phase, Phase::Ready);
    }
}
