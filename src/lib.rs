mod board;
mod common;
mod config;
mod game;
mod logging;
mod player;
mod player_ai;
mod player_cli;
pub mod protocol;
pub mod session;
pub mod transport;
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use protocol::*;
pub use session::*;
pub use transport::{local_ip, MessageReceiver, MessageSender};
pub use ui::*;
