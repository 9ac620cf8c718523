// SPDX-License-Identifier: MPL-2.0
//! Media source adapter backed by the system file dialog.

use futures_util::future::BoxFuture;

use crate::application::port::{
    MediaSource, PermissionStatus, PickOutcome, PickRequest, VideoRef,
};

/// Extensions offered by the dialog filter.
const VIDEO_EXTENSIONS: [&str; 6] = ["mp4", "mov", "m4v", "webm", "mkv", "avi"];

/// Desktop [`MediaSource`] over `rfd::AsyncFileDialog`.
///
/// Desktop file dialogs carry no runtime permission gate, so the
/// permission request always reports `Granted`; the denied path stays
/// reachable through test doubles and future mobile adapters. Trim and
/// duration constraints from the [`PickRequest`] cannot be enforced by a
/// plain file dialog and are left to the downstream pipeline.
#[derive(Debug, Default)]
pub struct RfdMediaSource;

impl RfdMediaSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MediaSource for RfdMediaSource {
    fn request_permission(&self) -> BoxFuture<'_, PermissionStatus> {
        Box::pin(async { PermissionStatus::Granted })
    }

    fn pick_video(&self, _request: PickRequest) -> BoxFuture<'_, PickOutcome> {
        Box::pin(async {
            let picked = rfd::AsyncFileDialog::new()
                .set_title("Select a video")
                .add_filter("Video", &VIDEO_EXTENSIONS)
                .pick_file()
                .await;

            match picked {
                Some(handle) => {
                    let uri = format!("file://{}", handle.path().display());
                    PickOutcome::Picked(VideoRef::new(uri))
                }
                None => PickOutcome::Canceled,
            }
        })
    }

    fn open_permission_settings(&self) {
        // TODO: deep-link into the OS privacy settings once a target
        // platform actually gates media access behind one.
        eprintln!("clip_lens: permission settings hook is not wired on this platform");
    }
}
