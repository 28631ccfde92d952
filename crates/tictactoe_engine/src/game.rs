//! Game-state engine for tic-tac-toe.
//!
//! [`GameEngine`] owns the board, the player rotation and the winner record.
//! It knows nothing about how the board is drawn; presenters ask it whether
//! a move is legal, apply it, and redraw from the returned [`Outcome`].

use crate::action::{MoveError, Outcome};
use crate::error::{ConfigurationError, ConfigurationErrorKind};
use crate::rules;
use crate::types::{BOARD_SIZE, Board, Move, Player, Position, WinningCombo, default_players};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameStatus {
    /// Moves are being accepted.
    #[strum(to_string = "In progress")]
    InProgress,
    /// A player completed a line.
    Won,
    /// The board filled up without a line.
    Tied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Winner {
    player: usize,
    combo: WinningCombo,
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    players: Vec<Player>,
    current: usize,
    board: Board,
    winning_combos: Vec<WinningCombo>,
    winner: Option<Winner>,
}

impl GameEngine {
    /// Creates a game for `players` (in turn order) on a `board_size`×`board_size` board.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the board is smaller than 1×1, fewer
    /// than two players are given, or any label is not a single character
    /// or is shared by two players.
    #[instrument(skip(players), fields(players = players.len()))]
    pub fn new(players: Vec<Player>, board_size: usize) -> Result<Self, ConfigurationError> {
        if board_size < 1 {
            return Err(ConfigurationError::new(ConfigurationErrorKind::BoardTooSmall(
                board_size,
            )));
        }
        validate_players(&players)?;

        let engine = Self::from_parts(players, board_size);
        info!(
            board_size,
            combos = engine.winning_combos.len(),
            first = %engine.current_player(),
            "Game initialized"
        );
        Ok(engine)
    }

    fn from_parts(players: Vec<Player>, board_size: usize) -> Self {
        Self {
            players,
            current: 0,
            board: Board::new(board_size),
            winning_combos: rules::winning_combos(board_size),
            winner: None,
        }
    }

    /// Returns true iff nobody has won yet and the cell at `position` is free.
    ///
    /// Positions outside the board are never valid.
    pub fn is_valid_move(&self, position: Position) -> bool {
        self.winner.is_none() && self.board.is_empty(position)
    }

    /// Claims `position` for the current player and reports what happened.
    ///
    /// Illegal moves (game over, occupied cell, off the board) are returned as
    /// [`Outcome::Rejected`] and leave the board untouched. On
    /// [`Outcome::Continue`] the caller is expected to call
    /// [`toggle_player`](Self::toggle_player).
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn apply_move(&mut self, position: Position) -> Outcome {
        if let Err(error) = self.check_move(position) {
            debug!(%error, "Move rejected");
            return Outcome::Rejected(error);
        }

        let label = self.players[self.current].label().clone();
        if let Some(cell) = self.board.get_mut(position) {
            cell.mark(&label);
        }

        if let Some(combo) = rules::find_winning_combo(&self.board, &self.winning_combos) {
            let combo = combo.clone();
            info!(%combo, winner = %label, "Line completed");
            self.winner = Some(Winner {
                player: self.current,
                combo: combo.clone(),
            });
            return Outcome::Win {
                player: self.players[self.current].clone(),
                combo,
            };
        }

        if rules::is_full(&self.board) {
            info!("Board full without a line, game tied");
            return Outcome::Tie;
        }

        debug!("Move accepted");
        Outcome::Continue
    }

    fn check_move(&self, position: Position) -> Result<(), MoveError> {
        if self.status() != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        match self.board.get(position) {
            None => Err(MoveError::OutOfBounds(position, self.board.size())),
            Some(cell) if cell.is_played() => Err(MoveError::CellOccupied(position)),
            Some(_) => Ok(()),
        }
    }

    /// Passes the turn to the next player, wrapping after the last.
    ///
    /// Not guarded against use after the game ends.
    #[instrument(skip(self))]
    pub fn toggle_player(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        debug!(player = %self.current_player(), "Turn passed");
    }

    /// Whether a line has been completed.
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// Whether the board is full with no winner.
    pub fn is_tied(&self) -> bool {
        self.winner.is_none() && rules::is_full(&self.board)
    }

    /// Current phase of the game.
    pub fn status(&self) -> GameStatus {
        if self.has_winner() {
            GameStatus::Won
        } else if self.is_tied() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        }
    }

    /// Clears the board and the winner for another round.
    ///
    /// The turn does not go back to the first player: whoever was to move
    /// when the reset happened stays current.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.winner = None;
        info!(player = %self.current_player(), "Game reset");
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Player who completed a line, if any.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.as_ref().map(|winner| &self.players[winner.player])
    }

    /// Cells of the completed line, empty while there is no winner.
    pub fn winning_combo(&self) -> &[Position] {
        self.winner
            .as_ref()
            .map(|winner| winner.combo.positions())
            .unwrap_or(&[])
    }

    /// All lines that can win, in scan order.
    pub fn winning_combos(&self) -> &[WinningCombo] {
        &self.winning_combos
    }

    /// Configured players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Side length of the board.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell contents in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Move> {
        self.board.cells().iter()
    }

    /// Contents of one cell.
    pub fn cell(&self, position: Position) -> Option<&Move> {
        self.board.get(position)
    }
}

impl Default for GameEngine {
    /// X and O on a 3×3 board.
    fn default() -> Self {
        Self::from_parts(default_players(), BOARD_SIZE)
    }
}

fn validate_players(players: &[Player]) -> Result<(), ConfigurationError> {
    if players.len() < 2 {
        return Err(ConfigurationError::new(ConfigurationErrorKind::TooFewPlayers(
            players.len(),
        )));
    }

    let mut seen = HashSet::new();
    for player in players {
        let label = player.label();
        if label.chars().count() != 1 {
            return Err(ConfigurationError::new(ConfigurationErrorKind::InvalidLabel(
                label.clone(),
            )));
        }
        if !seen.insert(label.as_str()) {
            return Err(ConfigurationError::new(ConfigurationErrorKind::DuplicateLabel(
                label.clone(),
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    /// Applies each move and toggles after every `Continue`, as a presenter would.
    fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) -> Outcome {
        let mut last = Outcome::Continue;
        for &(row, col) in moves {
            last = engine.apply_move(pos(row, col));
            if last == Outcome::Continue {
                engine.toggle_player();
            }
        }
        last
    }

    fn labels(engine: &GameEngine) -> Vec<String> {
        engine.cells().map(|cell| cell.label().to_string()).collect()
    }

    #[test]
    fn test_new_game_is_empty() {
        let engine = GameEngine::default();
        assert_eq!(engine.board_size(), 3);
        assert_eq!(engine.cells().count(), 9);
        assert!(engine.cells().all(|cell| !cell.is_played()));
        assert_eq!(engine.current_player().label(), "X");
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.status().to_string(), "In progress");
        assert!(engine.winning_combo().is_empty());
        assert_eq!(engine.winning_combos().len(), 8);
    }

    #[test]
    fn test_rejects_bad_configuration() {
        let err = GameEngine::new(default_players(), 0).expect_err("Zero-size board");
        assert_eq!(err.kind, ConfigurationErrorKind::BoardTooSmall(0));

        let err = GameEngine::new(vec![Player::new("X", "blue")], 3).expect_err("One player");
        assert_eq!(err.kind, ConfigurationErrorKind::TooFewPlayers(1));

        let err = GameEngine::new(vec![Player::new("X", "blue"), Player::new("", "red")], 3)
            .expect_err("Empty label");
        assert_eq!(err.kind, ConfigurationErrorKind::InvalidLabel(String::new()));

        let err = GameEngine::new(vec![Player::new("X", "blue"), Player::new("X", "red")], 3)
            .expect_err("Duplicate label");
        assert_eq!(err.kind, ConfigurationErrorKind::DuplicateLabel("X".into()));
        assert!(err.to_string().contains("used more than once"));
    }

    #[test]
    fn test_valid_move_checks() {
        let mut engine = GameEngine::default();
        assert!(engine.is_valid_move(pos(1, 1)));
        assert!(!engine.is_valid_move(pos(3, 3)));

        assert_eq!(engine.apply_move(pos(1, 1)), Outcome::Continue);
        assert!(!engine.is_valid_move(pos(1, 1)));
        assert!(engine.is_valid_move(pos(0, 0)));
    }

    #[test]
    fn test_occupied_cell_rejected_without_mutation() {
        let mut engine = GameEngine::default();
        engine.apply_move(pos(0, 0));
        engine.toggle_player();
        let before = labels(&engine);

        let outcome = engine.apply_move(pos(0, 0));
        assert_eq!(outcome, Outcome::Rejected(MoveError::CellOccupied(pos(0, 0))));
        assert_eq!(labels(&engine), before);
        assert_eq!(engine.cell(pos(0, 0)).map(Move::label), Some("X"));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut engine = GameEngine::default();
        assert_eq!(
            engine.apply_move(pos(0, 7)),
            Outcome::Rejected(MoveError::OutOfBounds(pos(0, 7), 3))
        );
        assert!(engine.cells().all(|cell| !cell.is_played()));
    }

    #[test]
    fn test_row_win_end_to_end() {
        let mut engine = GameEngine::default();
        let outcome = play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

        match outcome {
            Outcome::Win { player, combo } => {
                assert_eq!(player.label(), "X");
                assert_eq!(combo.positions(), [pos(0, 0), pos(0, 1), pos(0, 2)]);
            }
            other => panic!("Expected a win, got {other:?}"),
        }
        assert!(engine.has_winner());
        assert!(!engine.is_tied());
        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(engine.winner().map(|p| p.label().as_str()), Some("X"));
        assert_eq!(engine.winning_combo(), [pos(0, 0), pos(0, 1), pos(0, 2)]);
    }

    #[test]
    fn test_diagonal_win() {
        let mut engine = GameEngine::default();
        let outcome = play(&mut engine, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
        assert!(matches!(outcome, Outcome::Win { .. }));
        assert_eq!(engine.winning_combo(), [pos(0, 0), pos(1, 1), pos(2, 2)]);
    }

    #[test]
    fn test_tie() {
        let mut engine = GameEngine::default();
        // X O X / X O O / O X X
        let outcome = play(
            &mut engine,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(outcome, Outcome::Tie);
        assert!(engine.is_tied());
        assert!(!engine.has_winner());
        assert_eq!(engine.status(), GameStatus::Tied);
        assert_eq!(engine.winner(), None);
    }

    #[test]
    fn test_moves_after_game_over_rejected() {
        let mut engine = GameEngine::default();
        play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        let before = labels(&engine);

        assert_eq!(
            engine.apply_move(pos(2, 0)),
            Outcome::Rejected(MoveError::GameOver)
        );
        assert!(!engine.is_valid_move(pos(2, 0)));
        assert_eq!(labels(&engine), before);
    }

    #[test]
    fn test_toggle_cycles_players() {
        let mut engine = GameEngine::default();
        engine.toggle_player();
        assert_eq!(engine.current_player().label(), "O");
        engine.toggle_player();
        assert_eq!(engine.current_player().label(), "X");
    }

    #[test]
    fn test_three_player_rotation() {
        let players = vec![
            Player::new("A", "red"),
            Player::new("B", "green"),
            Player::new("C", "blue"),
        ];
        let mut engine = GameEngine::new(players, 4).expect("Valid configuration");
        let order: Vec<String> = (0..4)
            .map(|_| {
                let label = engine.current_player().label().clone();
                engine.toggle_player();
                label
            })
            .collect();
        assert_eq!(order, ["A", "B", "C", "A"]);
    }

    #[test]
    fn test_reset_clears_board_but_keeps_turn() {
        let mut engine = GameEngine::default();
        play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(engine.current_player().label(), "X");

        engine.reset();
        assert!(engine.cells().all(|cell| !cell.is_played()));
        assert!(!engine.has_winner());
        assert!(!engine.is_tied());
        assert!(engine.winning_combo().is_empty());
        assert_eq!(engine.board_size(), 3);
        assert_eq!(engine.players(), default_players().as_slice());
        // X won and stays on turn
        assert_eq!(engine.current_player().label(), "X");
        assert_eq!(engine.cell(pos(2, 1)).map(Move::position), Some(pos(2, 1)));
    }

    #[test]
    fn test_reset_mid_game_keeps_player_two() {
        let mut engine = GameEngine::default();
        play(&mut engine, &[(0, 0)]);
        assert_eq!(engine.current_player().label(), "O");
        engine.reset();
        assert_eq!(engine.current_player().label(), "O");
    }

    #[test]
    fn test_single_cell_board_first_move_wins() {
        let mut engine = GameEngine::new(default_players(), 1).expect("Valid configuration");
        let outcome = engine.apply_move(pos(0, 0));
        assert!(matches!(outcome, Outcome::Win { .. }));
        assert_eq!(engine.winning_combo(), [pos(0, 0)]);
        assert!(!engine.is_tied());
    }

    proptest! {
        #[test]
        fn prop_rejected_moves_never_mutate(
            board_size in 1usize..6,
            moves in prop::collection::vec((0usize..7, 0usize..7), 0..40),
        ) {
            let mut engine = GameEngine::new(default_players(), board_size)
                .expect("Valid configuration");
            for (row, col) in moves {
                let position = pos(row, col);
                let was_valid = engine.is_valid_move(position);
                let before = labels(&engine);
                let outcome = engine.apply_move(position);

                prop_assert_eq!(outcome.is_rejected(), !was_valid);
                if outcome.is_rejected() {
                    prop_assert_eq!(labels(&engine), before);
                }
                prop_assert!(!(engine.has_winner() && engine.is_tied()));
                prop_assert!(engine.winning_combo().is_empty() || engine.has_winner());
                if outcome == Outcome::Continue {
                    engine.toggle_player();
                }
            }
        }
    }
}
