// SPDX-License-Identifier: MPL-2.0
//! Subscriptions bridging the driver's channels into the Iced runtime.
//!
//! The driver publishes over tokio watch channels; these subscriptions
//! turn them into message streams. Both use stable ids, so Iced keeps the
//! first stream alive across re-renders.

use super::Message;
use crate::infrastructure::NavRequest;
use crate::preview::PreviewState;
use iced::futures::SinkExt;
use iced::stream;
use iced::Subscription;
use tokio::sync::watch;

/// Pairs a receiver with a stable id; only the id feeds the subscription
/// hash, mirroring the old `run_with_id` identity semantics.
struct Keyed<T>(&'static str, T);

impl<T> std::hash::Hash for Keyed<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Emits a message for the current preview state and every change after.
pub fn preview_states(rx: watch::Receiver<PreviewState>) -> Subscription<Message> {
    Subscription::run_with(Keyed("preview-state", rx), |keyed| {
        let rx = keyed.1.clone();
        stream::channel(
            16,
            move |mut output: iced::futures::channel::mpsc::Sender<Message>| async move {
                let mut rx = rx;
                loop {
                    let state = rx.borrow_and_update().clone();
                    if output.send(Message::StateChanged(state)).await.is_err() {
                        break;
                    }
                    if rx.changed().await.is_err() {
                        break;
                    }
                }
            },
        )
    })
}

/// Emits navigation requests published by the driver's navigator port.
pub fn navigation(rx: watch::Receiver<Option<NavRequest>>) -> Subscription<Message> {
    Subscription::run_with(Keyed("preview-navigation", rx), |keyed| {
        let rx = keyed.1.clone();
        stream::channel(
            4,
            move |mut output: iced::futures::channel::mpsc::Sender<Message>| async move {
                let mut rx = rx;
                // A request may have been published before this stream started.
                let pending = rx.borrow_and_update().clone();
                if let Some(request) = pending {
                    if output.send(Message::Navigate(request)).await.is_err() {
                        return;
                    }
                }
                loop {
                    if rx.changed().await.is_err() {
                        break;
                    }
                    let request = rx.borrow_and_update().clone();
                    if let Some(request) = request {
                        if output.send(Message::Navigate(request)).await.is_err() {
                            break;
                        }
                    }
                }
            },
        )
    })
}
