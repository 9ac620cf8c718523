// SPDX-License-Identifier: MPL-2.0
//! Media source port definition.
//!
//! The preview screen never touches a media library directly: it asks a
//! [`MediaSource`] for permission and for a single user-chosen video.
//! Desktop adapters back this with a file dialog; a mobile adapter would
//! back it with the platform media picker. Test doubles script the
//! answers.

use futures_util::future::BoxFuture;
use std::fmt;

/// Opaque reference to a video resource (typically a URI).
///
/// The preview flow forwards this value verbatim; it never validates or
/// decodes the underlying resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoRef(String);

impl VideoRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short human-readable name for display, the last path segment of the
    /// URI when one exists.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.0
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for VideoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a runtime media-library permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Constraints passed to the picker.
///
/// The media type is video-only and single-selection by construction of
/// [`MediaSource::pick_video`]. Adapters that cannot enforce a constraint
/// (a plain desktop file dialog has no trim UI or duration probe) accept
/// the request and leave enforcement to the downstream pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PickRequest {
    /// Whether the picker should offer an editing/trim step.
    pub allows_trimming: bool,
    /// Requested quality, `0.0..=1.0` where `1.0` is maximum.
    pub quality: f32,
    /// Maximum clip duration the picker should accept, in seconds.
    pub max_duration_secs: u32,
}

/// Result of a picker invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    /// The user dismissed the picker without choosing anything.
    Canceled,
    /// The user chose a video.
    Picked(VideoRef),
}

/// Port supplying a user-chosen video, subject to a runtime permission
/// grant.
///
/// Implementations must be `Send + Sync`; the driver holds them behind
/// `Arc<dyn MediaSource>`.
pub trait MediaSource: Send + Sync {
    /// Requests runtime media-library access.
    fn request_permission(&self) -> BoxFuture<'_, PermissionStatus>;

    /// Opens the platform picker constrained to a single video.
    fn pick_video(&self, request: PickRequest) -> BoxFuture<'_, PickOutcome>;

    /// Opens the OS-level permission settings for this application.
    ///
    /// Extension point behind the permission notice's "Settings" button.
    /// Adapters without a settings deep link may report that instead of
    /// navigating.
    fn open_permission_settings(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_takes_last_path_segment() {
        let video = VideoRef::new("file:///tmp/clips/serve.mov");
        assert_eq!(video.display_name(), "serve.mov");
    }

    #[test]
    fn display_name_falls_back_to_whole_ref() {
        let video = VideoRef::new("clip-handle-42");
        assert_eq!(video.display_name(), "clip-handle-42");
    }

    #[test]
    fn video_ref_displays_full_uri() {
        let video = VideoRef::new("file:///tmp/clip.mov");
        assert_eq!(format!("{}", video), "file:///tmp/clip.mov");
    }
}
