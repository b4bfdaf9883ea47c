//! Session module - the game state machine
//!
//! A session owns the board, the active piece, the score, the lifecycle
//! status and the timers that drive it:
//!
//! ```text
//! Init --start--> Running <--pause--> Paused
//!                    |
//!              (spawn blocked)
//!                    v
//!                  Ended --start--> Running
//! ```
//!
//! Nothing outside this type mutates session state. Collaborators feed it
//! elapsed time through [`Session::advance`] and player input through
//! [`Session::apply_action`], then read it back through
//! [`Session::snapshot`] and [`Session::take_events`].

use log::{debug, info, warn};

use crate::board::Board;
use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::piece::{MoveOutcome, Piece};
use crate::rng::PieceRandomizer;
use crate::scoring::line_clear_score;
use crate::snapshot::{ActiveSnapshot, SessionSnapshot};
use crate::timer::{Clock, IntervalTimer};
use crate::types::*;

/// Notifications for observers, drained with [`Session::take_events`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    /// The active piece could not descend and was merged into the board
    Grounded,
    LinesCleared { lines: usize, points: u32 },
    /// A grounded piece was resolved and the next piece spawned
    Updated,
    Paused,
    Resumed,
    GameOver { score: u32 },
    /// `end` was called; state is unchanged
    EndRequested,
    ClockUpdated { elapsed_ms: u64 },
}

/// A single game session
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    active: Option<Piece>,
    score: u32,
    status: GameStatus,
    randomizer: PieceRandomizer,
    drop_timer: IntervalTimer,
    clock: Clock,
    /// Key input is forwarded to the piece only while attached
    input_attached: bool,
    events: Vec<SessionEvent>,
}

impl Session {
    /// Create an idle session; `seed` fixes the piece sequence
    pub fn new(config: SessionConfig, seed: u64) -> Self {
        Self {
            config,
            board: Board::new(config.rows, config.columns),
            active: None,
            score: 0,
            status: GameStatus::Init,
            randomizer: PieceRandomizer::new(seed),
            drop_timer: IntervalTimer::new(DROP_INTERVAL_MS),
            clock: Clock::new(CLOCK_RESOLUTION_MS),
            input_attached: false,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn seed(&self) -> u64 {
        self.randomizer.seed()
    }

    /// Elapsed play time for display
    pub fn elapsed_ms(&self) -> u64 {
        self.clock.count_ms()
    }

    pub fn input_attached(&self) -> bool {
        self.input_attached
    }

    pub fn descent_running(&self) -> bool {
        self.drop_timer.is_running()
    }

    pub fn clock_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Piece controls are forwarded right now
    pub fn accepts_input(&self) -> bool {
        self.status == GameStatus::Running && self.input_attached
    }

    /// Start a new game.
    ///
    /// Fails without touching anything while a game is running or paused.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.status.is_active() {
            warn!("start rejected: game is {}", self.status);
            return Err(SessionError::GameInProgress {
                status: self.status,
            });
        }

        self.board.clear();
        self.active = None;
        self.score = 0;
        self.clock.reset();
        self.drop_timer.reset();

        self.status = GameStatus::Running;
        self.input_attached = true;
        self.drop_timer.start();
        self.clock.start();
        info!(
            "game started: {}x{} grid, seed {}",
            self.config.rows,
            self.config.columns,
            self.randomizer.seed()
        );
        self.events.push(SessionEvent::Started);

        self.resolve_grounded();
        Ok(())
    }

    /// Toggle between running and paused. Returns false (no-op) from init or ended.
    pub fn pause(&mut self) -> bool {
        match self.status {
            GameStatus::Running => {
                self.status = GameStatus::Paused;
                self.clock.stop();
                self.drop_timer.stop();
                info!("game paused at score {}", self.score);
                self.events.push(SessionEvent::Paused);
                true
            }
            GameStatus::Paused => {
                self.status = GameStatus::Running;
                self.clock.start();
                self.drop_timer.start();
                info!("game resumed");
                self.events.push(SessionEvent::Resumed);
                true
            }
            GameStatus::Init | GameStatus::Ended => false,
        }
    }

    /// Explicit end hook for collaborators. The session only reaches
    /// `Ended` through a blocked spawn; this records the request and nothing else.
    pub fn end(&mut self) {
        debug!("end requested while {}", self.status);
        self.events.push(SessionEvent::EndRequested);
    }

    /// Descent trigger: one downward step of the active piece while running
    pub fn tick(&mut self) -> Option<MoveOutcome> {
        self.step(Direction::Down)
    }

    /// Feed elapsed wall time to the clock and the descent timer
    pub fn advance(&mut self, elapsed_ms: u32) {
        if let Some(elapsed_ms) = self.clock.advance(elapsed_ms) {
            self.events.push(SessionEvent::ClockUpdated { elapsed_ms });
        }

        let drops = self.drop_timer.advance(elapsed_ms);
        for _ in 0..drops {
            if self.status != GameStatus::Running {
                break;
            }
            self.tick();
        }
    }

    /// Apply a player action. Returns true if session state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => self.start().is_ok(),
            GameAction::Pause => self.pause(),
            _ if !self.accepts_input() => false,
            GameAction::MoveLeft => self.move_active(Direction::Left) == Some(MoveOutcome::Moved),
            GameAction::MoveRight => self.move_active(Direction::Right) == Some(MoveOutcome::Moved),
            GameAction::MoveDown => matches!(
                self.move_active(Direction::Down),
                Some(MoveOutcome::Moved | MoveOutcome::Grounded)
            ),
            GameAction::RotateRight => self.rotate_active(RotateDirection::Right),
            GameAction::RotateLeft => self.rotate_active(RotateDirection::Left),
        }
    }

    /// Move the active piece. `None` when there is nothing to move.
    pub fn move_active(&mut self, direction: Direction) -> Option<MoveOutcome> {
        if !self.input_attached {
            return None;
        }
        self.step(direction)
    }

    /// Rotate the active piece in place. Returns true if the layout changed.
    pub fn rotate_active(&mut self, direction: RotateDirection) -> bool {
        if !self.accepts_input() {
            return false;
        }
        match self.active.as_mut() {
            Some(piece) => piece.rotate(direction, &self.board),
            None => false,
        }
    }

    /// Drain pending observer notifications
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.status = self.status;
        out.board.clone_from(&self.board);
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.score = self.score;
        out.elapsed_ms = self.clock.count_ms();
        out.config = self.config;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn step(&mut self, direction: Direction) -> Option<MoveOutcome> {
        if self.status != GameStatus::Running {
            return None;
        }
        let piece = self.active.as_mut()?;
        let outcome = piece.try_move(direction, &self.board);
        if outcome == MoveOutcome::Grounded {
            self.resolve_grounded();
        }
        Some(outcome)
    }

    /// Merge the active piece (if any), clear full rows, score them and spawn
    /// the next piece, ending the game if the spawn is blocked.
    fn resolve_grounded(&mut self) {
        if let Some(piece) = self.active.take() {
            let written = self.board.merge(piece.cells(), piece.color());
            if written < piece.shape().len() {
                debug!(
                    "{} piece settled with {} cell(s) above the grid",
                    piece.color().as_str(),
                    piece.shape().len() - written
                );
            }
            self.events.push(SessionEvent::Grounded);
        }

        let lines = self.board.clear_full_rows();
        if lines > 0 {
            let points = line_clear_score(lines);
            self.score = self.score.saturating_add(points);
            debug!("cleared {} line(s) for {} point(s), score {}", lines, points, self.score);
            self.events.push(SessionEvent::LinesCleared { lines, points });
        }

        let kind = self.randomizer.next_kind();
        self.spawn(kind);
    }

    fn spawn(&mut self, kind: PieceKind) {
        let piece = Piece::new(kind, 0, self.config.spawn_column());
        let blocked = !piece.fits(&self.board);
        self.active = Some(piece);

        if blocked {
            self.finish();
        } else {
            debug!("spawned {} at column {}", kind.as_str(), piece.left());
            self.events.push(SessionEvent::Updated);
        }
    }

    /// Terminal transition: stop both timers and detach input
    fn finish(&mut self) {
        self.status = GameStatus::Ended;
        self.drop_timer.stop();
        self.clock.stop();
        self.input_attached = false;
        info!("game over with score {}", self.score);
        self.events.push(SessionEvent::GameOver { score: self.score });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(seed: u64) -> Session {
        let mut session = Session::new(SessionConfig::default(), seed);
        session.start().unwrap();
        session.take_events();
        session
    }

    /// Fill `row` completely except for the listed columns
    fn fill_row_except(board: &mut Board, row: i32, gaps: &[i32]) {
        for col in 0..board.columns() as i32 {
            if !gaps.contains(&col) {
                board.set(row, col, Some(Color::Blue));
            }
        }
    }

    #[test]
    fn new_session_is_idle() {
        let session = Session::default();
        assert_eq!(session.status(), GameStatus::Init);
        assert_eq!(session.score(), 0);
        assert!(session.active().is_none());
        assert!(!session.input_attached());
        assert!(!session.descent_running());
    }

    #[test]
    fn start_spawns_at_spawn_column() {
        let session = running(3);
        let piece = session.active().unwrap();
        assert_eq!((piece.top(), piece.left()), (0, 3));
        assert_eq!(session.status(), GameStatus::Running);
        assert!(session.input_attached());
        assert!(session.descent_running());
        assert!(session.clock_running());
    }

    #[test]
    fn start_while_running_or_paused_is_rejected_untouched() {
        let mut session = running(5);
        session.board.set(19, 0, Some(Color::Red));
        session.score = 9;
        let before = session.board.clone();

        assert_eq!(
            session.start(),
            Err(SessionError::GameInProgress {
                status: GameStatus::Running
            })
        );
        assert_eq!(session.board, before);
        assert_eq!(session.score, 9);

        session.pause();
        assert_eq!(
            session.start(),
            Err(SessionError::GameInProgress {
                status: GameStatus::Paused
            })
        );
        assert_eq!(session.status(), GameStatus::Paused);
    }

    #[test]
    fn grounded_piece_is_merged_once_and_next_piece_takes_over() {
        let mut session = running(11);
        session.active = Some(Piece::new(PieceKind::O, 18, 4));

        assert_eq!(session.tick(), Some(MoveOutcome::Grounded));
        let events = session.take_events();
        assert_eq!(
            events.iter().filter(|e| **e == SessionEvent::Grounded).count(),
            1
        );
        assert!(events.contains(&SessionEvent::Updated));
        assert!(session.board.is_occupied(19, 4));
        assert!(session.board.is_occupied(18, 5));

        // The next step acts on the freshly spawned piece.
        assert_eq!(session.move_active(Direction::Down), Some(MoveOutcome::Moved));
        assert_eq!(session.active().unwrap().top(), 1);
        assert!(!session.take_events().contains(&SessionEvent::Grounded));
    }

    #[test]
    fn single_line_clear_keeps_row_count() {
        let mut session = running(2);
        fill_row_except(&mut session.board, 19, &[0, 1]);
        session.board.set(18, 9, Some(Color::Red));
        session.active = Some(Piece::new(PieceKind::O, 18, 0));

        session.tick();
        assert_eq!(session.board.rows(), 20);
        assert_eq!(session.score(), 1);
        // Row 18 shifted down; the O's top half landed there too.
        assert!(session.board.is_occupied(19, 0));
        assert!(session.board.is_occupied(19, 9));
        assert!(!session.board.is_row_full(19));
        assert_eq!(session.board.filled_count(), 3);
    }

    #[test]
    fn bar_settling_above_grid_keeps_only_inside_cells() {
        let mut session = running(6);
        session.board.set(3, 8, Some(Color::Red));
        let mut bar = Piece::new(PieceKind::I, 0, 7);
        assert!(bar.rotate(RotateDirection::Right, &session.board));
        assert!(bar.cells().any(|(row, _)| row == -1));
        session.active = Some(bar);

        assert_eq!(session.tick(), Some(MoveOutcome::Grounded));
        // Rows 0..=2 of column 8 hold the bar; its top cell is gone.
        assert_eq!(session.board.filled_count(), 4);
        for row in 0..=2 {
            assert_eq!(session.board.get(row, 8), Some(Some(Color::Cyan)));
        }
        assert_eq!(session.status(), GameStatus::Running);
        assert!(session.take_events().contains(&SessionEvent::Grounded));
    }

    #[test]
    fn double_clear_scores_four() {
        let mut session = running(8);
        fill_row_except(&mut session.board, 18, &[0, 1]);
        fill_row_except(&mut session.board, 19, &[0, 1]);
        session.active = Some(Piece::new(PieceKind::O, 18, 0));

        session.tick();
        assert_eq!(session.score(), 4);
        assert_eq!(session.board.filled_count(), 0);
        assert!(session
            .take_events()
            .contains(&SessionEvent::LinesCleared { lines: 2, points: 4 }));
    }

    #[test]
    fn blocked_spawn_ends_game_with_score_unchanged() {
        let mut session = running(21);
        for col in 3..=6 {
            session.board.set(0, col, Some(Color::Red));
        }
        session.active = Some(Piece::new(PieceKind::O, 18, 0));

        session.tick();
        assert_eq!(session.status(), GameStatus::Ended);
        assert_eq!(session.score(), 0);
        assert!(!session.descent_running());
        assert!(!session.clock_running());
        assert!(!session.input_attached());
        assert!(session
            .take_events()
            .contains(&SessionEvent::GameOver { score: 0 }));
    }

    #[test]
    fn ended_session_ignores_controls_and_ticks() {
        let mut session = running(21);
        for col in 3..=6 {
            session.board.set(0, col, Some(Color::Red));
        }
        session.active = Some(Piece::new(PieceKind::O, 18, 0));
        session.tick();
        let frozen = session.board.clone();

        assert!(!session.apply_action(GameAction::MoveLeft));
        assert!(!session.apply_action(GameAction::RotateRight));
        assert_eq!(session.tick(), None);
        session.advance(10_000);
        assert_eq!(session.board, frozen);
        assert!(!session.pause());
    }

    #[test]
    fn restart_after_game_over_clears_everything() {
        let mut session = running(21);
        for col in 3..=6 {
            session.board.set(0, col, Some(Color::Red));
        }
        session.score = 5;
        session.active = Some(Piece::new(PieceKind::O, 18, 0));
        session.tick();
        assert_eq!(session.status(), GameStatus::Ended);

        assert!(session.start().is_ok());
        assert_eq!(session.status(), GameStatus::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.board.filled_count(), 0);
        assert_eq!(session.elapsed_ms(), 0);
    }

    #[test]
    fn pause_twice_restores_status() {
        let mut session = running(4);
        assert!(session.pause());
        assert_eq!(session.status(), GameStatus::Paused);
        assert!(session.pause());
        assert_eq!(session.status(), GameStatus::Running);
    }

    #[test]
    fn pause_freezes_descent_and_clock() {
        let mut session = running(4);
        session.pause();
        session.advance(5000);
        assert_eq!(session.active().unwrap().top(), 0);
        assert_eq!(session.elapsed_ms(), 0);
        assert!(!session.apply_action(GameAction::MoveDown));
    }

    #[test]
    fn advance_drops_once_per_interval() {
        let mut session = running(6);
        session.advance(999);
        assert_eq!(session.active().unwrap().top(), 0);
        session.advance(1);
        assert_eq!(session.active().unwrap().top(), 1);
        session.advance(2000);
        assert_eq!(session.active().unwrap().top(), 3);
        assert_eq!(session.elapsed_ms(), 3000);
    }

    #[test]
    fn clock_updates_are_reported() {
        let mut session = running(6);
        session.advance(250);
        assert_eq!(
            session.take_events(),
            vec![SessionEvent::ClockUpdated { elapsed_ms: 200 }]
        );
    }

    #[test]
    fn end_is_a_hook_only() {
        let mut session = running(6);
        session.end();
        assert_eq!(session.status(), GameStatus::Running);
        assert_eq!(session.take_events(), vec![SessionEvent::EndRequested]);
    }

    #[test]
    fn square_rotation_never_changes_layout() {
        let mut session = running(6);
        session.active = Some(Piece::new(PieceKind::O, 5, 3));
        let before = *session.active().unwrap();
        assert!(!session.apply_action(GameAction::RotateRight));
        assert!(!session.apply_action(GameAction::RotateLeft));
        assert_eq!(*session.active().unwrap(), before);
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut session = running(9);
        session.active = Some(Piece::new(PieceKind::T, 4, 2));
        session.board.set(19, 9, Some(Color::Green));

        let snap = session.snapshot();
        assert_eq!(snap.status, GameStatus::Running);
        assert_eq!(snap.board.get(19, 9), Some(Some(Color::Green)));
        let active = snap.active.unwrap();
        assert_eq!(active.color, Color::Purple);
        assert_eq!(active.cells, [(4, 2), (4, 3), (4, 4), (5, 3)]);
        assert_eq!(snap.visible_cell(5, 3), Some(Color::Purple));
        assert_eq!(snap.visible_cell(0, 0), None);
    }
}
