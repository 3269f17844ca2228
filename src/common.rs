//! Common types: board errors and network errors.

use std::fmt;
use std::io;

/// Errors returned by board mutations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates fall outside the 3x3 grid.
    OutOfRange { row: usize, col: usize },
    /// The target cell already holds a mark.
    Occupied { row: usize, col: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfRange { row, col } => {
                write!(f, "cell ({}, {}) is out of range", row, col)
            }
            BoardError::Occupied { row, col } => {
                write!(f, "cell ({}, {}) is already occupied", row, col)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Errors produced by the transport layer and the wire codec.
///
/// `Malformed` is the only non-fatal kind: the receive loop drops the frame
/// and keeps the connection open. Everything else ends the session.
#[derive(Debug)]
pub enum NetError {
    /// The listening socket could not be bound.
    Bind(io::Error),
    /// The listener failed while accepting the peer.
    Accept(io::Error),
    /// The outbound connection failed (unreachable, refused, timed out).
    Connect(io::Error),
    /// A write to the peer failed.
    Send(io::Error),
    /// A read from the peer failed abruptly.
    Recv(io::Error),
    /// The peer closed the connection cleanly.
    Closed,
    /// The frame decoded to text but matched no message pattern.
    Malformed(String),
}

impl NetError {
    /// True for errors that end the session; `Malformed` frames are dropped
    /// without closing the connection.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, NetError::Malformed(_))
    }
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetError::Bind(e) => write!(f, "failed to bind listener: {}", e),
            NetError::Accept(e) => write!(f, "failed to accept connection: {}", e),
            NetError::Connect(e) => write!(f, "failed to connect: {}", e),
            NetError::Send(e) => write!(f, "send failed: {}", e),
            NetError::Recv(e) => write!(f, "receive failed: {}", e),
            NetError::Closed => write!(f, "connection closed by peer"),
            NetError::Malformed(detail) => write!(f, "malformed message: {}", detail),
        }
    }
}

impl std::error::Error for NetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NetError::Bind(e)
            | NetError::Accept(e)
            | NetError::Connect(e)
            | NetError::Send(e)
            | NetError::Recv(e) => Some(e),
            NetError::Closed | NetError::Malformed(_) => None,
        }
    }
}
