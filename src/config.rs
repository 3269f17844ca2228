/// Well-known TCP port both peers use for an online game.
pub const DEFAULT_PORT: u16 = 65432;

/// Maximum length in bytes of a single wire frame, delimiter included.
pub const MAX_FRAME: usize = 1024;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;
