//! One online game: connection setup, the background receive loop, and the
//! event-driven turn orchestration.
//!
//! Two execution contexts exist per session. The receive loop is the only
//! one that blocks on the network; it forwards decoded messages through an
//! unbounded single-consumer channel of [`SessionEvent`]s. The coordination
//! context (the [`OnlineSession::run`] loop) is the sole consumer of that
//! channel and the sole mutator of board and turn state, so game state
//! needs no lock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::board::Mark;
use crate::common::NetError;
use crate::game::{LocalPlay, RemotePlay, Turn, TurnCoordinator};
use crate::protocol::Message;
use crate::transport::tcp::TcpTransport;
use crate::transport::{local_ip, MessageReceiver, MessageSender};
use crate::ui::{announce_outcome, parse_cell, StatusKind, Ui};

/// Which side of the connection this process is. The host plays X and moves
/// first; the joining peer plays O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Host,
    Join,
}

/// Intents queued by the receive loop for the coordination context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Message(Message),
    Disconnected,
}

pub struct OnlineSession {
    role: Role,
    coordinator: TurnCoordinator,
    sink: Box<dyn MessageSender>,
    events: UnboundedReceiver<SessionEvent>,
    running: Arc<AtomicBool>,
    recv_task: JoinHandle<()>,
}

impl OnlineSession {
    /// Bind the port and wait for one peer to connect.
    pub async fn host(port: u16) -> Result<Self, NetError> {
        let transport = TcpTransport::host(port).await?;
        let (sink, source) = transport.into_split();
        Self::start(Role::Host, Box::new(sink), Box::new(source)).await
    }

    /// Connect to a hosting peer.
    pub async fn join(host: &str, port: u16) -> Result<Self, NetError> {
        let transport = TcpTransport::connect(host, port).await?;
        let (sink, source) = transport.into_split();
        Self::start(Role::Join, Box::new(sink), Box::new(source)).await
    }

    /// Wire a session over any pair of transport halves. The joining side
    /// announces itself before anything else is exchanged.
    pub async fn start(
        role: Role,
        mut sink: Box<dyn MessageSender>,
        source: Box<dyn MessageReceiver>,
    ) -> Result<Self, NetError> {
        if role == Role::Join {
            sink.send(Message::JoinAnnounce {
                ip: local_ip().to_string(),
            })
            .await?;
        }
        let coordinator = match role {
            Role::Host => TurnCoordinator::new(Mark::X, true),
            Role::Join => TurnCoordinator::new(Mark::O, false),
        };
        let running = Arc::new(AtomicBool::new(true));
        let (events_tx, events_rx) = unbounded_channel();
        let recv_task = spawn_receive_loop(source, events_tx, running.clone());
        Ok(Self {
            role,
            coordinator,
            sink,
            events: events_rx,
            running,
            recv_task,
        })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn coordinator(&self) -> &TurnCoordinator {
        &self.coordinator
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Next queued intent. Resolves to `None` once the receive loop is gone
    /// and the queue is drained.
    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        self.events.recv().await
    }

    /// A cell activation from the front-end. Validates the turn, applies the
    /// mark, transmits the move and updates the display. Game-ending moves
    /// are transmitted too, so the peer reaches the same terminal state.
    pub async fn on_cell_activated(&mut self, row: usize, col: usize, ui: &mut dyn Ui) {
        match self.coordinator.play_local(row, col) {
            LocalPlay::Rejected => {
                log::debug!("ignoring local activation at ({}, {})", row, col);
                ui.render(
                    self.coordinator.board(),
                    "That move isn't available",
                    StatusKind::Error,
                );
            }
            LocalPlay::Played { outcome } => {
                let msg = Message::Move {
                    row: row as u8,
                    col: col as u8,
                };
                if let Err(err) = self.sink.send(msg).await {
                    log::warn!("{}", err);
                    self.fail_transport(ui);
                    return;
                }
                match outcome {
                    Some(outcome) => {
                        ui.disable_input();
                        announce_outcome(ui, self.coordinator.board(), outcome);
                    }
                    None => {
                        ui.disable_input();
                        ui.render(
                            self.coordinator.board(),
                            "Opponent's turn",
                            StatusKind::Info,
                        );
                    }
                }
            }
        }
    }

    /// Apply one queued intent on the coordination context.
    pub fn apply_event(&mut self, event: SessionEvent, ui: &mut dyn Ui) {
        match event {
            SessionEvent::Message(Message::JoinAnnounce { ip }) => {
                log::info!("peer announced itself from {}", ip);
            }
            SessionEvent::Message(Message::Move { row, col }) => {
                match self.coordinator.apply_remote(row as usize, col as usize) {
                    RemotePlay::Ignored(reason) => {
                        log::warn!("ignoring remote move ({}, {}): {}", row, col, reason);
                    }
                    RemotePlay::Played {
                        outcome: Some(outcome),
                    } => {
                        ui.disable_input();
                        announce_outcome(ui, self.coordinator.board(), outcome);
                    }
                    RemotePlay::Played { outcome: None } => {
                        ui.enable_input();
                        ui.render(self.coordinator.board(), "Your turn", StatusKind::Info);
                    }
                }
            }
            SessionEvent::Disconnected => self.fail_transport(ui),
        }
    }

    fn fail_transport(&mut self, ui: &mut dyn Ui) {
        self.coordinator.transport_failed();
        self.running.store(false, Ordering::SeqCst);
        ui.disable_input();
        ui.render(
            self.coordinator.board(),
            "Opponent disconnected",
            StatusKind::Error,
        );
    }

    /// Drive the session with terminal input until the game ends. Multiplexes
    /// input lines and queued session events; quitting early ("q" or end of
    /// input) shuts the session down cleanly.
    pub async fn run(mut self, ui: &mut dyn Ui) -> anyhow::Result<()> {
        match self.coordinator.turn() {
            Turn::Local => {
                ui.enable_input();
                ui.render(self.coordinator.board(), "Your turn", StatusKind::Info);
            }
            _ => {
                ui.disable_input();
                ui.render(
                    self.coordinator.board(),
                    "Waiting for opponent's move",
                    StatusKind::Info,
                );
            }
        }
        let mut input = BufReader::new(tokio::io::stdin()).lines();
        while !self.coordinator.is_over() {
            tokio::select! {
                line = input.next_line() => match line? {
                    Some(line) => {
                        let line = line.trim();
                        if line.is_empty() {
                            continue;
                        }
                        if line.eq_ignore_ascii_case("q") {
                            break;
                        }
                        match parse_cell(line) {
                            Some((row, col)) => self.on_cell_activated(row, col, ui).await,
                            None => ui.render(
                                self.coordinator.board(),
                                "Enter a move as row,col (digits 0-2), or q to quit",
                                StatusKind::Error,
                            ),
                        }
                    }
                    None => break,
                },
                event = self.events.recv() => match event {
                    Some(event) => self.apply_event(event, ui),
                    None => break,
                },
            }
        }
        self.shutdown();
        Ok(())
    }

    /// Tear the session down. Idempotent; never fails. Aborting the receive
    /// task unblocks any pending read, and dropping the halves closes the
    /// socket.
    pub fn shutdown(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        self.recv_task.abort();
    }
}

impl Drop for OnlineSession {
    fn drop(&mut self) {
        self.recv_task.abort();
    }
}

/// The background receive loop. Never touches game state: it only produces
/// queued intents. Malformed frames are dropped with the connection left
/// open; any fatal error ends the loop after queueing `Disconnected`.
fn spawn_receive_loop(
    mut source: Box<dyn MessageReceiver>,
    events: UnboundedSender<SessionEvent>,
    running: Arc<AtomicBool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while running.load(Ordering::SeqCst) {
            match source.recv().await {
                Ok(msg) => {
                    if events.send(SessionEvent::Message(msg)).is_err() {
                        break;
                    }
                }
                Err(err) if err.is_fatal() => {
                    log::info!("receive loop stopping: {}", err);
                    running.store(false, Ordering::SeqCst);
                    let _ = events.send(SessionEvent::Disconnected);
                    break;
                }
                Err(err) => log::warn!("dropping frame: {}", err),
            }
        }
    })
}
