//! Game state module - the single aggregate a session mutates
//!
//! Ties together the board, the active and queued pieces, the generator, and the
//! score. Every mutation goes through a validate-then-commit step: the piece is
//! moved or rotated speculatively and put back if the result collides.
//!
//! Gravity is one explicit transition. Each tick accumulates measured wall time;
//! once the accumulator passes the fall interval the active piece either moves
//! down ([`TickOutcome::Fell`]) or locks, clears rows, and hands over to the next
//! piece ([`TickOutcome::Locked`]). If the new piece does not fit at spawn the
//! session ends ([`TickOutcome::ToppedOut`]) and every later call is a no-op.

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::collision::{is_grounded, is_valid_move};
use crate::config::{ConfigError, GameConfig};
use crate::pieces::Piece;
use crate::rng::PieceGenerator;
use crate::types::{GameAction, LINE_CLEAR_POINTS};

/// Session lifecycle. `GameOver` has no way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// Result of one tick or gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Time accumulated, fall interval not yet exceeded.
    Waiting,
    /// Active piece moved down one row.
    Fell,
    /// Active piece locked; the next piece took over.
    Locked { lines_cleared: u32 },
    /// Active piece locked and its successor collides at spawn.
    ToppedOut { lines_cleared: u32 },
    /// Session already over; nothing changed.
    Halted,
}

/// Emitted once per lock, for score displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub score: u32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Piece,
    next: Piece,
    generator: PieceGenerator,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    phase: Phase,
    /// Time since the last forced descent.
    gravity_acc: Duration,
    fall_interval: Duration,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Start a session on an empty board.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.cols, config.rows);
        Self::with_board(config, seed, board)
    }

    /// Start a session on a prepared board. Its dimensions must match the config.
    pub fn with_board(config: GameConfig, seed: u64, board: Board) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.width() != config.cols || board.height() != config.rows {
            return Err(ConfigError::BoardMismatch {
                cols: config.cols,
                rows: config.rows,
                got_cols: board.width(),
                got_rows: board.height(),
            });
        }

        let mut generator = PieceGenerator::new(seed, &config.catalog)?;
        let spawn = config.spawn_position();
        let active = Piece::spawn(generator.draw(), spawn);
        let next = Piece::spawn(generator.draw(), spawn);

        let mut state = Self {
            fall_interval: config.fall_interval(),
            config,
            board,
            active,
            next,
            generator,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            phase: Phase::Running,
            gravity_acc: Duration::ZERO,
            last_event: None,
        };
        state.check_spawn();

        info!(
            seed,
            cols = state.config.cols,
            rows = state.config.rows,
            fall_ms = state.config.fall_interval_ms,
            "session started"
        );
        Ok(state)
    }

    /// Begin a fresh session in place, keeping the config and board allocation.
    pub fn restart(&mut self, seed: u64) {
        self.generator.reseed(seed);
        self.board.reset();
        let spawn = self.config.spawn_position();
        self.active = Piece::spawn(self.generator.draw(), spawn);
        self.next = Piece::spawn(self.generator.draw(), spawn);
        self.score = 0;
        self.lines = 0;
        self.pieces_locked = 0;
        self.phase = Phase::Running;
        self.gravity_acc = Duration::ZERO;
        self.last_event = None;
        self.check_spawn();
        info!(seed, "session restarted");
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    /// Time accumulated toward the next forced descent
    pub fn gravity_elapsed(&self) -> Duration {
        self.gravity_acc
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Whether the active piece is resting on the floor or the stack
    pub fn is_grounded(&self) -> bool {
        is_grounded(&self.active, &self.board)
    }

    /// Apply a player command. Returns whether the active piece changed.
    ///
    /// Rejected commands and commands after game over leave everything untouched,
    /// including the gravity accumulator.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    /// Shift the active piece, reverting if it collides
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_over() {
            return false;
        }

        self.active.x += dx;
        self.active.y += dy;
        if is_valid_move(&self.active, &self.board) {
            return true;
        }
        self.active.x -= dx;
        self.active.y -= dy;
        false
    }

    /// Rotate the active piece, restoring the previous shape if it collides
    pub fn try_rotate(&mut self) -> bool {
        if self.game_over() {
            return false;
        }

        let saved = self.active.shape;
        self.active.rotate();
        if is_valid_move(&self.active, &self.board) {
            return true;
        }
        self.active.shape = saved;
        false
    }

    /// Advance the clock by `elapsed`, applying gravity once the fall interval is exceeded.
    pub fn tick(&mut self, elapsed: Duration) -> TickOutcome {
        if self.game_over() {
            return TickOutcome::Halted;
        }

        self.gravity_acc = self.gravity_acc.saturating_add(elapsed);
        if self.gravity_acc <= self.fall_interval {
            return TickOutcome::Waiting;
        }

        let outcome = self.step_gravity();
        self.gravity_acc = Duration::ZERO;
        outcome
    }

    /// One forced descent, independent of the accumulator.
    pub fn step_gravity(&mut self) -> TickOutcome {
        if self.game_over() {
            return TickOutcome::Halted;
        }

        if self.try_move(0, 1) {
            trace!(x = self.active.x, y = self.active.y, "piece fell");
            return TickOutcome::Fell;
        }

        self.lock_active()
    }

    /// Merge the active piece, clear rows, score, and promote the queued piece.
    fn lock_active(&mut self) -> TickOutcome {
        self.board.merge(&self.active);
        let lines_cleared = self.board.clear_full_rows() as u32;

        let score_delta = lines_cleared * LINE_CLEAR_POINTS;
        self.score = self.score.saturating_add(score_delta);
        self.lines = self.lines.saturating_add(lines_cleared);
        self.pieces_locked = self.pieces_locked.saturating_add(1);
        self.last_event = Some(LockEvent {
            lines_cleared,
            score_delta,
            score: self.score,
        });

        debug!(
            kind = self.active.kind.as_str(),
            x = self.active.x,
            y = self.active.y,
            lines_cleared,
            score = self.score,
            "piece locked"
        );

        let fresh = Piece::spawn(self.generator.draw(), self.config.spawn_position());
        self.active = std::mem::replace(&mut self.next, fresh);

        if self.check_spawn() {
            TickOutcome::Locked { lines_cleared }
        } else {
            TickOutcome::ToppedOut { lines_cleared }
        }
    }

    /// End the session if the active piece collides where it stands.
    fn check_spawn(&mut self) -> bool {
        if is_valid_move(&self.active, &self.board) {
            return true;
        }
        self.phase = Phase::GameOver;
        info!(
            score = self.score,
            lines = self.lines,
            pieces = self.pieces_locked,
            "game over"
        );
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn only(kind: PieceKind) -> GameState {
        GameState::new(GameConfig::default().with_catalog([kind]), 1).unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(GameConfig::default(), 12345).unwrap();

        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.lines(), 0);
        assert_eq!((state.active().x, state.active().y), (3, 0));
        assert_eq!((state.next().x, state.next().y), (3, 0));
        assert_eq!(state.gravity_elapsed(), Duration::ZERO);
        assert_eq!(state.board().occupied_count(), 0);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let err = GameState::new(GameConfig::default().with_dimensions(0, 0), 1).unwrap_err();
        assert_eq!(err, ConfigError::EmptyBoard { cols: 0, rows: 0 });
    }

    #[test]
    fn test_preset_board_must_match() {
        let err = GameState::with_board(GameConfig::default(), 1, Board::new(8, 20)).unwrap_err();
        assert!(matches!(err, ConfigError::BoardMismatch { got_cols: 8, .. }));
    }

    #[test]
    fn test_tick_waits_until_interval_exceeded() {
        let mut state = only(PieceKind::O);

        assert_eq!(state.tick(Duration::from_millis(300)), TickOutcome::Waiting);
        assert_eq!(state.tick(Duration::from_millis(200)), TickOutcome::Waiting);
        assert_eq!(state.active().y, 0);
        assert_eq!(state.gravity_elapsed(), Duration::from_millis(500));

        assert_eq!(state.tick(Duration::from_millis(1)), TickOutcome::Fell);
        assert_eq!(state.active().y, 1);
        assert_eq!(state.gravity_elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_tick_driven_lock_resets_accumulator() {
        let mut board = Board::default();
        for x in 1..10 {
            board.set(x, 19, Some(PieceKind::S));
        }
        let mut state =
            GameState::with_board(GameConfig::default().with_catalog([PieceKind::I]), 1, board)
                .unwrap();
        assert!(state.apply_action(GameAction::Rotate));
        while state.apply_action(GameAction::MoveLeft) {}
        assert_eq!(state.active().x, 0);

        // 16 ms frames fire gravity every 32nd frame: 16 descents, then the lock.
        let mut outcome = TickOutcome::Waiting;
        for _ in 0..32 * 18 {
            outcome = state.tick(Duration::from_millis(16));
            if matches!(outcome, TickOutcome::Locked { .. }) {
                break;
            }
        }

        assert_eq!(outcome, TickOutcome::Locked { lines_cleared: 1 });
        assert_eq!(state.score(), 10);
        assert_eq!(state.gravity_elapsed(), Duration::ZERO);
        assert_eq!((state.active().x, state.active().y), (3, 0));
    }

    #[test]
    fn test_long_frame_applies_one_step() {
        let mut state = only(PieceKind::T);
        assert_eq!(state.tick(Duration::from_secs(5)), TickOutcome::Fell);
        assert_eq!(state.active().y, 1);
        assert_eq!(state.gravity_elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_commands_leave_accumulator_alone() {
        let mut state = only(PieceKind::T);
        state.tick(Duration::from_millis(120));

        assert!(state.apply_action(GameAction::MoveLeft));
        assert!(state.apply_action(GameAction::SoftDrop));
        assert!(state.apply_action(GameAction::Rotate));
        assert_eq!(state.gravity_elapsed(), Duration::from_millis(120));
    }

    #[test]
    fn test_move_left_stops_at_wall() {
        let mut state = only(PieceKind::O);
        for _ in 0..3 {
            assert!(state.apply_action(GameAction::MoveLeft));
        }
        assert_eq!(state.active().x, 0);
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.active().x, 0);
    }

    #[test]
    fn test_rotation_reverted_against_wall() {
        let mut state = only(PieceKind::I);
        assert!(state.apply_action(GameAction::Rotate));
        assert_eq!(state.active().shape.rows(), 4);

        while state.apply_action(GameAction::MoveRight) {}
        assert_eq!(state.active().x, 9);

        let before = *state.active();
        assert!(!state.apply_action(GameAction::Rotate));
        assert_eq!(*state.active(), before);
    }

    #[test]
    fn test_step_gravity_locks_grounded_piece() {
        let mut state = only(PieceKind::O);
        while state.apply_action(GameAction::SoftDrop) {}
        assert!(state.is_grounded());

        assert_eq!(state.step_gravity(), TickOutcome::Locked { lines_cleared: 0 });
        assert_eq!(state.board().occupied_count(), 4);
        assert_eq!(state.board().get(3, 19), Some(Some(PieceKind::O)));
        assert_eq!((state.active().x, state.active().y), (3, 0));
        assert_eq!(state.pieces_locked(), 1);

        let ev = state.take_last_event().unwrap();
        assert_eq!(ev, LockEvent { lines_cleared: 0, score_delta: 0, score: 0 });
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_next_piece_promoted_on_lock() {
        let mut state = GameState::new(GameConfig::default(), 2024).unwrap();
        let queued = state.next().kind;
        while state.apply_action(GameAction::SoftDrop) {}
        state.step_gravity();
        assert_eq!(state.active().kind, queued);
        assert_eq!(state.active().shape, crate::pieces::get_shape(queued));
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut board = Board::default();
        board.set(3, 2, Some(PieceKind::Z));
        let mut state =
            GameState::with_board(GameConfig::default().with_catalog([PieceKind::O]), 1, board)
                .unwrap();

        assert_eq!(
            state.tick(Duration::from_millis(501)),
            TickOutcome::ToppedOut { lines_cleared: 0 }
        );
        assert!(state.game_over());

        let frozen_board = state.board().clone();
        let frozen_piece = *state.active();
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::Rotate,
        ] {
            assert!(!state.apply_action(action));
        }
        assert_eq!(state.tick(Duration::from_secs(10)), TickOutcome::Halted);
        assert_eq!(state.step_gravity(), TickOutcome::Halted);
        assert_eq!(state.board(), &frozen_board);
        assert_eq!(*state.active(), frozen_piece);
    }

    #[test]
    fn test_blocked_spawn_at_construction_is_game_over() {
        let mut board = Board::default();
        board.set(4, 0, Some(PieceKind::L));
        let state =
            GameState::with_board(GameConfig::default().with_catalog([PieceKind::O]), 1, board)
                .unwrap();
        assert!(state.game_over());
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = only(PieceKind::O);
        while state.apply_action(GameAction::SoftDrop) {}
        state.step_gravity();
        assert_eq!(state.board().occupied_count(), 4);

        state.restart(77);
        assert_eq!(state.board().occupied_count(), 0);
        assert_eq!(state.score(), 0);
        assert_eq!(state.pieces_locked(), 0);
        assert_eq!(state.seed(), 77);
        assert_eq!(state.phase(), Phase::Running);
    }

    #[test]
    fn test_restart_replays_a_fresh_session() {
        let mut played = GameState::new(GameConfig::default(), 5).unwrap();
        for _ in 0..60 {
            played.step_gravity();
        }
        played.restart(31337);

        let fresh = GameState::new(GameConfig::default(), 31337).unwrap();
        assert_eq!(played.active(), fresh.active());
        assert_eq!(played.next(), fresh.next());
        assert_eq!(played.board(), fresh.board());

        // Both sessions keep drawing the same sequence.
        let mut fresh = fresh;
        for _ in 0..200 {
            assert_eq!(played.step_gravity(), fresh.step_gravity());
            assert_eq!(played.next().kind, fresh.next().kind);
        }
    }
}
