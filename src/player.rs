use crate::board::{Board, Mark};

/// Interface implemented by the offline player types.
pub trait Player {
    /// Choose a cell to play. The caller re-asks if the cell turns out to be
    /// unavailable.
    fn select_cell(&mut self, board: &Board, mark: Mark) -> anyhow::Result<(usize, usize)>;
}
