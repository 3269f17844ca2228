use crate::board::{evaluate, Board, Mark, Outcome};
use crate::player::Player;
use crate::ui::{announce_outcome, StatusKind, Ui};

/// Whose action the game is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Local,
    Remote,
    Over,
}

/// What became of a local cell activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalPlay {
    /// Not the local player's turn, cell unavailable, or game over.
    Rejected,
    /// Mark applied; `outcome` is set when the move ended the game.
    Played { outcome: Option<Outcome> },
}

/// What became of a move received from the peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemotePlay {
    /// Off-protocol or invalid; the board is untouched.
    Ignored(&'static str),
    Played { outcome: Option<Outcome> },
}

/// The state machine governing whose move is valid and how local and remote
/// input is applied. Holds the only mutable reference to the board; all I/O
/// stays with the caller.
pub struct TurnCoordinator {
    board: Board,
    local: Mark,
    turn: Turn,
    outcome: Option<Outcome>,
}

impl TurnCoordinator {
    pub fn new(local: Mark, local_starts: bool) -> Self {
        Self {
            board: Board::new(),
            local,
            turn: if local_starts { Turn::Local } else { Turn::Remote },
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn local_mark(&self) -> Mark {
        self.local
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Terminal outcome, if the game ended with one. A session killed by a
    /// transport failure is over without an outcome.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// True between sending a local move and applying the reply.
    pub fn awaiting_remote(&self) -> bool {
        self.turn == Turn::Remote
    }

    pub fn is_over(&self) -> bool {
        self.turn == Turn::Over
    }

    /// Apply the local player's move. On success the caller must transmit
    /// the move, even a game-ending one, so the peer converges on the same
    /// terminal state.
    pub fn play_local(&mut self, row: usize, col: usize) -> LocalPlay {
        if self.turn != Turn::Local {
            return LocalPlay::Rejected;
        }
        if self.board.place(row, col, self.local).is_err() {
            return LocalPlay::Rejected;
        }
        let outcome = self.settle();
        if outcome.is_none() {
            self.turn = Turn::Remote;
        }
        LocalPlay::Played { outcome }
    }

    /// Apply a move received from the peer. Moves arriving outside the
    /// remote turn, or naming unavailable cells, are ignored rather than
    /// applied; a disconnect race can deliver a stray late message.
    pub fn apply_remote(&mut self, row: usize, col: usize) -> RemotePlay {
        match self.turn {
            Turn::Local => return RemotePlay::Ignored("received during the local turn"),
            Turn::Over => return RemotePlay::Ignored("received after the game ended"),
            Turn::Remote => {}
        }
        if self.board.place(row, col, self.local.opponent()).is_err() {
            return RemotePlay::Ignored("cell unavailable");
        }
        let outcome = self.settle();
        if outcome.is_none() {
            self.turn = Turn::Local;
        }
        RemotePlay::Played { outcome }
    }

    /// The peer is gone; no further move is valid.
    pub fn transport_failed(&mut self) {
        self.turn = Turn::Over;
    }

    fn settle(&mut self) -> Option<Outcome> {
        let outcome = evaluate(&self.board);
        if outcome.is_some() {
            self.turn = Turn::Over;
            self.outcome = outcome;
        }
        outcome
    }
}

/// Drive a full offline game, X first. Unavailable cells re-prompt the same
/// player.
pub fn run_offline(
    x: &mut dyn Player,
    o: &mut dyn Player,
    ui: &mut dyn Ui,
) -> anyhow::Result<()> {
    let mut board = Board::new();
    let mut current = Mark::X;
    loop {
        ui.render(&board, &format!("{}'s turn", current), StatusKind::Info);
        let player: &mut dyn Player = match current {
            Mark::X => &mut *x,
            Mark::O => &mut *o,
        };
        let (row, col) = player.select_cell(&board, current)?;
        if let Err(err) = board.place(row, col, current) {
            ui.render(&board, &err.to_string(), StatusKind::Error);
            continue;
        }
        if let Some(outcome) = evaluate(&board) {
            announce_outcome(ui, &board, outcome);
            return Ok(());
        }
        current = current.opponent();
    }
}
