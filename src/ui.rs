use std::io::{self, Write};

use crate::board::{Board, Outcome};
use crate::config::BOARD_SIZE;

/// Tone of a status line, for front-ends that distinguish them visually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Win,
    Draw,
    Error,
}

/// Front-end collaborator. The game core renders through this seam and never
/// talks to a concrete terminal or toolkit.
pub trait Ui {
    fn render(&mut self, board: &Board, status: &str, kind: StatusKind);
    /// Remember a winning line; subsequent renders mark those cells.
    fn highlight_line(&mut self, line: [(usize, usize); 3]);
    fn enable_input(&mut self);
    fn disable_input(&mut self);
    fn prompt_host_address(&mut self) -> anyhow::Result<String>;
}

/// Announce a finished game: highlight the winning line and render the
/// closing status.
pub fn announce_outcome(ui: &mut dyn Ui, board: &Board, outcome: Outcome) {
    match outcome {
        Outcome::Win { winner, line } => {
            ui.highlight_line(line);
            ui.render(board, &format!("{} wins!", winner), StatusKind::Win);
        }
        Outcome::Draw => ui.render(board, "It's a draw!", StatusKind::Draw),
    }
}

/// Parse a `"row,col"` cell reference with both coordinates in 0-2.
pub fn parse_cell(input: &str) -> Option<(usize, usize)> {
    let (row, col) = input.split_once(',')?;
    let row: usize = row.trim().parse().ok()?;
    let col: usize = col.trim().parse().ok()?;
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some((row, col))
}

/// Terminal front-end: grid and status line on stdout, winning cells shown
/// in brackets.
pub struct TermUi {
    highlighted: Option<[(usize, usize); 3]>,
    input_enabled: bool,
}

impl TermUi {
    pub fn new() -> Self {
        Self {
            highlighted: None,
            input_enabled: true,
        }
    }

    fn cell_text(&self, board: &Board, row: usize, col: usize) -> String {
        let mark = match board.cells()[row][col] {
            Some(mark) => mark.to_string(),
            None => " ".to_string(),
        };
        let highlighted = self
            .highlighted
            .is_some_and(|line| line.contains(&(row, col)));
        if highlighted {
            format!("[{}]", mark)
        } else {
            format!(" {} ", mark)
        }
    }
}

impl Default for TermUi {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui for TermUi {
    fn render(&mut self, board: &Board, status: &str, kind: StatusKind) {
        println!();
        println!("     0   1   2");
        for row in 0..BOARD_SIZE {
            print!("  {} ", row);
            for col in 0..BOARD_SIZE {
                print!("{}", self.cell_text(board, row, col));
                if col + 1 < BOARD_SIZE {
                    print!("|");
                }
            }
            println!();
            if row + 1 < BOARD_SIZE {
                println!("    ---+---+---");
            }
        }
        match kind {
            StatusKind::Error => println!("! {}", status),
            _ => println!("{}", status),
        }
        if self.input_enabled {
            print!("move (row,col)> ");
        }
        let _ = io::stdout().flush();
    }

    fn highlight_line(&mut self, line: [(usize, usize); 3]) {
        self.highlighted = Some(line);
    }

    fn enable_input(&mut self) {
        self.input_enabled = true;
    }

    fn disable_input(&mut self) {
        self.input_enabled = false;
    }

    fn prompt_host_address(&mut self) -> anyhow::Result<String> {
        print!("Enter the host's IP address: ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        let addr = line.trim().to_string();
        anyhow::ensure!(!addr.is_empty(), "no host address given");
        Ok(addr)
    }
}
