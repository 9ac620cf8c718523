// SPDX-License-Identifier: MPL-2.0
//! Navigator adapter publishing requests over a watch channel.
//!
//! The Iced application cannot be called into directly from the driver
//! task, so navigation requests are published on a watch channel the app
//! subscribes to. Requests from this screen are one-shot (it either hands
//! off or backs out), so watch coalescing cannot lose anything relevant.

use tokio::sync::watch;

use crate::application::port::{Navigator, Route};

/// A navigation request observed by the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum NavRequest {
    Back,
    Push(Route),
}

/// [`Navigator`] that records the latest request in a watch channel.
#[derive(Debug)]
pub struct WatchNavigator {
    tx: watch::Sender<Option<NavRequest>>,
}

impl WatchNavigator {
    /// Creates the navigator and the receiver the view layer listens on.
    #[must_use]
    pub fn new() -> (Self, watch::Receiver<Option<NavRequest>>) {
        let (tx, rx) = watch::channel(None);
        (Self { tx }, rx)
    }
}

impl Navigator for WatchNavigator {
    fn push(&self, route: Route) {
        self.tx.send_replace(Some(NavRequest::Push(route)));
    }

    fn back(&self) {
        self.tx.send_replace(Some(NavRequest::Back));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::VideoRef;

    #[test]
    fn push_publishes_route() {
        let (navigator, rx) = WatchNavigator::new();
        let video = VideoRef::new("file:///tmp/clip.mov");
        navigator.push(Route::Processing {
            video: video.clone(),
        });
        assert_eq!(
            *rx.borrow(),
            Some(NavRequest::Push(Route::Processing { video }))
        );
    }

    #[test]
    fn back_publishes_back_request() {
        let (navigator, rx) = WatchNavigator::new();
        navigator.back();
        assert_eq!(*rx.borrow(), Some(NavRequest::Back));
    }
}
