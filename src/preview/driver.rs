// SPDX-License-Identifier: MPL-2.0
//! Async binding between the preview machine and its capability ports.
//!
//! The driver runs a sequential command loop: user gestures arrive over an
//! unbounded channel, each one is fed to the machine, and the resulting
//! effects are executed before the next command is taken. The permission
//! check and the picker are awaited inline, so nothing from this screen
//! ever runs concurrently with them.
//!
//! The hand-off delay is stored as a plain deadline rather than a spawned
//! task. Cancelling it is an assignment, and a driver that is dropped
//! takes any pending hand-off with it.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant};

use crate::application::port::{HapticEmitter, MediaSource, Navigator, PickRequest, Route, VideoRef};

use super::machine::{Effect, Input, PreviewMachine};
use super::state::PreviewState;

/// Capability ports injected into the driver.
pub struct PreviewPorts {
    pub media: Arc<dyn MediaSource>,
    pub navigator: Arc<dyn Navigator>,
    pub haptics: Arc<dyn HapticEmitter>,
}

/// Tuning knobs for the flow, usually derived from the user config.
#[derive(Debug, Clone)]
pub struct DriverOptions {
    /// Constraints for every picker invocation.
    pub pick_request: PickRequest,
    /// Fixed delay between the analyze trigger and the forward navigation.
    pub handoff_delay: Duration,
}

/// Commands a view-binding layer can send to the flow.
#[derive(Debug, Clone)]
enum Command {
    Mount(Option<VideoRef>),
    Analyze,
    Reselect,
    Back,
    DismissNotice,
    OpenSettings,
    Unmount,
}

impl Command {
    fn into_input(self) -> Input {
        match self {
            Command::Mount(initial) => Input::Mounted { initial },
            Command::Analyze => Input::AnalyzePressed,
            Command::Reselect => Input::ReselectPressed,
            Command::Back => Input::BackPressed,
            Command::DismissNotice => Input::NoticeDismissed,
            Command::OpenSettings => Input::SettingsRequested,
            Command::Unmount => Input::Unmounted,
        }
    }
}

/// Cloneable handle used by view layers to drive the flow and observe its
/// state. Dropping every handle terminates the driver loop.
#[derive(Debug, Clone)]
pub struct PreviewHandle {
    commands: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<PreviewState>,
}

impl PreviewHandle {
    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> PreviewState {
        self.state.borrow().clone()
    }

    /// Receiver that yields a notification for every state change.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<PreviewState> {
        self.state.clone()
    }

    pub fn mount(&self, initial: Option<VideoRef>) {
        self.send(Command::Mount(initial));
    }

    pub fn analyze(&self) {
        self.send(Command::Analyze);
    }

    pub fn reselect(&self) {
        self.send(Command::Reselect);
    }

    pub fn back(&self) {
        self.send(Command::Back);
    }

    pub fn dismiss_notice(&self) {
        self.send(Command::DismissNotice);
    }

    pub fn open_settings(&self) {
        self.send(Command::OpenSettings);
    }

    pub fn unmount(&self) {
        self.send(Command::Unmount);
    }

    fn send(&self, command: Command) {
        // A closed channel means the driver already stopped; commands sent
        // after that are irrelevant by definition.
        let _ = self.commands.send(command);
    }
}

/// Owns the machine, the ports, and the hand-off deadline.
pub struct PreviewDriver {
    machine: PreviewMachine,
    ports: PreviewPorts,
    handoff_delay: Duration,
    handoff_deadline: Option<Instant>,
    state_tx: watch::Sender<PreviewState>,
    commands: mpsc::UnboundedReceiver<Command>,
}

impl PreviewDriver {
    /// Builds a driver and the handle that feeds it.
    #[must_use]
    pub fn new(ports: PreviewPorts, options: DriverOptions) -> (Self, PreviewHandle) {
        let machine = PreviewMachine::new(options.pick_request);
        let (state_tx, state_rx) = watch::channel(machine.state().clone());
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let driver = Self {
            machine,
            ports,
            handoff_delay: options.handoff_delay,
            handoff_deadline: None,
            state_tx,
            commands: command_rx,
        };
        let handle = PreviewHandle {
            commands: command_tx,
            state: state_rx,
        };
        (driver, handle)
    }

    /// Runs the command loop until every handle is dropped.
    pub async fn run(mut self) {
        loop {
            let command = match self.handoff_deadline {
                Some(deadline) => match time::timeout_at(deadline, self.commands.recv()).await {
                    Ok(command) => command,
                    Err(_) => {
                        self.handoff_deadline = None;
                        self.dispatch(Input::HandoffElapsed).await;
                        continue;
                    }
                },
                None => self.commands.recv().await,
            };

            match command {
                Some(command) => self.dispatch(command.into_input()).await,
                None => break,
            }
        }
    }

    /// Feeds `input` to the machine and executes the resulting effects.
    /// Effects whose results feed back into the machine (permission check,
    /// picker) are queued as follow-up inputs, keeping the whole exchange
    /// strictly sequential.
    async fn dispatch(&mut self, input: Input) {
        let mut inputs = VecDeque::from([input]);

        while let Some(input) = inputs.pop_front() {
            let effects = self.machine.handle(input);
            self.publish();

            for effect in effects {
                match effect {
                    Effect::RequestPermission => {
                        let status = self.ports.media.request_permission().await;
                        inputs.push_back(Input::PermissionResolved(status));
                    }
                    Effect::LaunchPicker(request) => {
                        let outcome = self.ports.media.pick_video(request).await;
                        inputs.push_back(Input::PickerResolved(outcome));
                    }
                    Effect::EmitHaptic(strength) => self.ports.haptics.pulse(strength),
                    Effect::ScheduleHandoff => {
                        self.handoff_deadline = Some(Instant::now() + self.handoff_delay);
                    }
                    Effect::CancelHandoff => self.handoff_deadline = None,
                    Effect::NavigateBack => self.ports.navigator.back(),
                    Effect::NavigateToProcessing(video) => {
                        self.ports.navigator.push(Route::Processing { video });
                    }
                    Effect::OpenSystemSettings => self.ports.media.open_permission_settings(),
                }
            }
        }

        self.publish();
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.machine.state().clone());
    }
}
