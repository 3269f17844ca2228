use std::collections::VecDeque;

use tictactoe::{run_offline, Board, Mark, Player, RandomAi, StatusKind, Ui};

/// Player that replays a fixed move list.
struct ScriptedPlayer {
    moves: VecDeque<(usize, usize)>,
}

impl ScriptedPlayer {
    fn new(moves: &[(usize, usize)]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn select_cell(&mut self, _board: &Board, _mark: Mark) -> anyhow::Result<(usize, usize)> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }
}

#[derive(Default)]
struct RecordingUi {
    statuses: Vec<(String, StatusKind)>,
    highlighted: Option<[(usize, usize); 3]>,
}

impl Ui for RecordingUi {
    fn render(&mut self, _board: &Board, status: &str, kind: StatusKind) {
        self.statuses.push((status.to_string(), kind));
    }

    fn highlight_line(&mut self, line: [(usize, usize); 3]) {
        self.highlighted = Some(line);
    }

    fn enable_input(&mut self) {}

    fn disable_input(&mut self) {}

    fn prompt_host_address(&mut self) -> anyhow::Result<String> {
        anyhow::bail!("offline game should not prompt for an address")
    }
}

#[test]
fn scripted_game_ends_with_the_top_row_win() {
    let mut x = ScriptedPlayer::new(&[(0, 0), (0, 1), (0, 2)]);
    let mut o = ScriptedPlayer::new(&[(1, 0), (1, 1)]);
    let mut ui = RecordingUi::default();

    run_offline(&mut x, &mut o, &mut ui).unwrap();

    assert_eq!(ui.statuses.last().unwrap().0, "X wins!");
    assert_eq!(ui.highlighted, Some([(0, 0), (0, 1), (0, 2)]));
}

#[test]
fn occupied_cell_reprompts_the_same_player() {
    // O tries (0, 0) twice; the second attempt re-prompts and plays (1, 1).
    let mut x = ScriptedPlayer::new(&[(0, 0), (0, 1), (0, 2)]);
    let mut o = ScriptedPlayer::new(&[(0, 0), (1, 1), (2, 0)]);
    let mut ui = RecordingUi::default();

    run_offline(&mut x, &mut o, &mut ui).unwrap();

    assert_eq!(ui.statuses.last().unwrap().0, "X wins!");
    assert!(ui
        .statuses
        .iter()
        .any(|(status, kind)| *kind == StatusKind::Error && status.contains("occupied")));
}

#[test]
fn two_random_ais_always_finish_the_game() {
    for seed in 0..20u64 {
        let mut x = RandomAi::seeded(seed);
        let mut o = RandomAi::seeded(seed.wrapping_add(1));
        let mut ui = RecordingUi::default();
        run_offline(&mut x, &mut o, &mut ui).unwrap();
        let (status, kind) = ui.statuses.last().unwrap();
        assert!(
            matches!(kind, StatusKind::Win | StatusKind::Draw),
            "unexpected closing status {:?} ({:?})",
            status,
            kind
        );
    }
}

#[test]
fn seeded_ai_is_deterministic_and_plays_empty_cells() {
    let mut board = Board::new();
    board.place(0, 0, Mark::X).unwrap();
    board.place(1, 1, Mark::O).unwrap();

    let pick = RandomAi::seeded(42)
        .select_cell(&board, Mark::X)
        .unwrap();
    let again = RandomAi::seeded(42)
        .select_cell(&board, Mark::X)
        .unwrap();
    assert_eq!(pick, again);
    assert_eq!(board.get(pick.0, pick.1).unwrap(), None);
}
