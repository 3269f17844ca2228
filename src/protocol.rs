//! Wire messages and their text codec.
//!
//! Each message is one plain-text token: a move is `"<row>,<col>"` with both
//! digits in 0-2, a join announcement is `"join_<ip>"`. The token carries no
//! terminator of its own; the transport frames it with a trailing newline.

use crate::common::NetError;
use crate::config::BOARD_SIZE;

/// Messages exchanged between the two peers of an online game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A move at the given cell, coordinates in 0..=2.
    Move { row: u8, col: u8 },
    /// Sent once by the joining peer after connecting. Informational only;
    /// the receiver logs it and does nothing else.
    JoinAnnounce { ip: String },
}

impl Message {
    /// Serialize to the wire token.
    pub fn encode(&self) -> String {
        match self {
            Message::Move { row, col } => format!("{},{}", row, col),
            Message::JoinAnnounce { ip } => format!("join_{}", ip),
        }
    }

    /// Parse a wire token. Anything matching neither pattern is
    /// `NetError::Malformed`.
    pub fn decode(token: &str) -> Result<Message, NetError> {
        if let Some(ip) = token.strip_prefix("join_") {
            return Ok(Message::JoinAnnounce { ip: ip.to_string() });
        }
        let (row, col) = token
            .split_once(',')
            .ok_or_else(|| NetError::Malformed(token.to_string()))?;
        let row: u8 = row
            .parse()
            .map_err(|_| NetError::Malformed(token.to_string()))?;
        let col: u8 = col
            .parse()
            .map_err(|_| NetError::Malformed(token.to_string()))?;
        if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
            return Err(NetError::Malformed(token.to_string()));
        }
        Ok(Message::Move { row, col })
    }
}
