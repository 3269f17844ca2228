use std::io::{self, Write};

use crate::board::{Board, Mark};
use crate::player::Player;
use crate::ui::parse_cell;

/// Human player prompting on the terminal.
pub struct HumanPlayer;

impl HumanPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for HumanPlayer {
    fn select_cell(&mut self, board: &Board, mark: Mark) -> anyhow::Result<(usize, usize)> {
        loop {
            print!("{} to move (row,col): ", mark);
            io::stdout().flush()?;
            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                anyhow::bail!("input closed");
            }
            match parse_cell(line.trim()) {
                Some((row, col)) => {
                    if board.get(row, col)?.is_some() {
                        println!("Cell ({}, {}) is taken", row, col);
                        continue;
                    }
                    return Ok((row, col));
                }
                None => println!("Enter row,col with digits 0-2"),
            }
        }
    }
}
