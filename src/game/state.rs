//! Game state machine.
//!
//! [`Session`] holds the current [`GameState`] and the session high score. It changes only
//! through [`Session::reduce`], which takes an [`Event`] and returns the next session plus
//! the timers to schedule. Nothing in here sleeps or touches a clock; the session actor
//! turns [`Effect`]s into real timers and feeds them back as [`Event::Timer`].

use std::time::Duration;

use log::{debug, info};
use rand::Rng;
use uuid::{Builder, Uuid};

use crate::config::game::{
    POINTS_PER_STEP, FIRST_ROUND, ROUND_ADVANCE_DELAY_MS, FAILURE_DELAY_MS, SHAKE_DURATION_MS,
};
use crate::game::grid::Grid;
use crate::game::path::Path;
use crate::game::round::{Round, RoundSetup, start_round};
use crate::game::types::GameMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// End of the memorize phase.
    Reveal,
    /// Path walked; start the next round.
    Advance,
    /// Clear the shake effect after a wrong click.
    Shake,
    /// Wrong click; end the game.
    Failure,
}

/// Identifies a scheduled timer. A timer only applies to the game and round it was
/// scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub game_id: Uuid,
    pub round: u32,
    pub kind: TimerKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Start a new game (from the menu or the game over screen).
    Start,
    /// The player clicked a block.
    Click(usize),
    /// A scheduled timer fired.
    Timer(TimerToken),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Schedule { token: TimerToken, after: Duration },
}

/// A transition already decided during play. Further clicks are ignored until it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Advancing,
    Failing { exploded: usize, shaking: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Menu,
    Memorize {
        game_id: Uuid,
        round: Round,
        score: u32,
    },
    Play {
        game_id: Uuid,
        round: Round,
        score: u32,
        position: usize,
        outcome: Option<Outcome>,
    },
    GameOver {
        round: u32,
        score: u32,
        new_high_score: bool,
    },
}

impl GameState {
    pub fn mode(&self) -> GameMode {
        match self {
            GameState::Menu => GameMode::Menu,
            GameState::Memorize { .. } => GameMode::Memorize,
            GameState::Play { .. } => GameMode::Play,
            GameState::GameOver { .. } => GameMode::GameOver,
        }
    }

    /// Id of the game in progress. `None` on the menu and game over screens.
    pub fn game_id(&self) -> Option<Uuid> {
        match self {
            GameState::Memorize { game_id, .. } | GameState::Play { game_id, .. } => Some(*game_id),
            GameState::Menu | GameState::GameOver { .. } => None,
        }
    }

    /// The round on the board, if any.
    pub fn round(&self) -> Option<&Round> {
        match self {
            GameState::Memorize { round, .. } | GameState::Play { round, .. } => Some(round),
            GameState::Menu | GameState::GameOver { .. } => None,
        }
    }

    pub fn round_number(&self) -> u32 {
        match self {
            GameState::Menu => FIRST_ROUND,
            GameState::Memorize { round, .. } | GameState::Play { round, .. } => round.number,
            GameState::GameOver { round, .. } => *round,
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            GameState::Menu => 0,
            GameState::Memorize { score, .. }
            | GameState::Play { score, .. }
            | GameState::GameOver { score, .. } => *score,
        }
    }

    pub fn grid(&self) -> Option<Grid> {
        self.round().map(|round| round.grid)
    }

    pub fn path(&self) -> Option<&Path> {
        self.round().map(|round| &round.path)
    }

    /// Index into the path of the last block correctly reached.
    pub fn player_position(&self) -> usize {
        match self {
            GameState::Play { position, .. } => *position,
            _ => 0,
        }
    }

    /// True while the path is shown.
    pub fn revealing(&self) -> bool {
        matches!(self, GameState::Memorize { .. })
    }

    pub fn exploded_cell(&self) -> Option<usize> {
        match self {
            GameState::Play { outcome: Some(Outcome::Failing { exploded, .. }), .. } => Some(*exploded),
            _ => None,
        }
    }

    pub fn shaking(&self) -> bool {
        matches!(
            self,
            GameState::Play { outcome: Some(Outcome::Failing { shaking: true, .. }), .. }
        )
    }
}

/// Everything that lives for the whole session: the current game and the best score.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub state: GameState,
    pub high_score: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `event` and return the next session and the timers it asks for.
    ///
    /// Events that do not apply to the current state are dropped: clicks outside play,
    /// clicks while an outcome is pending, `Start` during a game, and timers from an
    /// earlier game, round or phase.
    pub fn reduce<R: Rng + ?Sized>(self, event: Event, rng: &mut R) -> (Session, Vec<Effect>) {
        let Session { state, high_score } = self;

        match (state, event) {
            (GameState::Menu | GameState::GameOver { .. }, Event::Start) => {
                let game_id = Builder::from_random_bytes(rng.random()).into_uuid();
                info!("[GameSession] New game {} started", game_id);
                let (state, effects) = begin_round(game_id, FIRST_ROUND, 0, rng);
                (Session { state, high_score }, effects)
            }

            (
                GameState::Play { game_id, round, score, position, outcome: None },
                Event::Click(cell),
            ) => {
                let (state, effects) = click(game_id, round, score, position, cell);
                (Session { state, high_score }, effects)
            }

            (state, Event::Timer(token)) => on_timer(Session { state, high_score }, token, rng),

            (state, event) => {
                debug!("[GameSession] Ignored {:?} in {:?} mode", event, state.mode());
                (Session { state, high_score }, Vec::new())
            }
        }
    }
}

fn schedule(game_id: Uuid, round: u32, kind: TimerKind, after: Duration) -> Effect {
    Effect::Schedule {
        token: TimerToken { game_id, round, kind },
        after,
    }
}

/// Generate round `number` and enter the memorize phase.
fn begin_round<R: Rng + ?Sized>(
    game_id: Uuid,
    number: u32,
    score: u32,
    rng: &mut R,
) -> (GameState, Vec<Effect>) {
    let RoundSetup { round, reveal } = start_round(number, rng);
    info!(
        "[GameSession] Round {} started: {}x{} grid, path of {} blocks, reveal {:?}",
        round.number,
        round.grid.rows,
        round.grid.cols,
        round.path.len(),
        reveal
    );
    let effect = schedule(game_id, number, TimerKind::Reveal, reveal);
    (GameState::Memorize { game_id, round, score }, vec![effect])
}

fn click(
    game_id: Uuid,
    round: Round,
    score: u32,
    position: usize,
    cell: usize,
) -> (GameState, Vec<Effect>) {
    let next = position + 1;

    if round.path.get(next) == Some(cell) {
        let score = score + POINTS_PER_STEP;
        if round.path.is_complete_at(next) {
            debug!("[GameSession] Round {} path complete", round.number);
            let effect = schedule(
                game_id,
                round.number,
                TimerKind::Advance,
                Duration::from_millis(ROUND_ADVANCE_DELAY_MS),
            );
            let state = GameState::Play {
                game_id,
                round,
                score,
                position: next,
                outcome: Some(Outcome::Advancing),
            };
            (state, vec![effect])
        } else {
            let state = GameState::Play { game_id, round, score, position: next, outcome: None };
            (state, Vec::new())
        }
    } else {
        debug!(
            "[GameSession] Wrong block {} (expected {:?})",
            cell,
            round.path.get(next)
        );
        let effects = vec![
            schedule(game_id, round.number, TimerKind::Shake, Duration::from_millis(SHAKE_DURATION_MS)),
            schedule(game_id, round.number, TimerKind::Failure, Duration::from_millis(FAILURE_DELAY_MS)),
        ];
        let state = GameState::Play {
            game_id,
            round,
            score,
            position,
            outcome: Some(Outcome::Failing { exploded: cell, shaking: true }),
        };
        (state, effects)
    }
}

fn on_timer<R: Rng + ?Sized>(
    session: Session,
    token: TimerToken,
    rng: &mut R,
) -> (Session, Vec<Effect>) {
    let Session { state, high_score } = session;

    let current = state.game_id() == Some(token.game_id) && state.round_number() == token.round;
    if !current {
        debug!("[GameSession] Dropped stale timer {:?}", token);
        return (Session { state, high_score }, Vec::new());
    }

    match (state, token.kind) {
        (GameState::Memorize { game_id, round, score }, TimerKind::Reveal) => {
            let state = GameState::Play { game_id, round, score, position: 0, outcome: None };
            (Session { state, high_score }, Vec::new())
        }

        (
            GameState::Play { game_id, round, score, outcome: Some(Outcome::Advancing), .. },
            TimerKind::Advance,
        ) => {
            let (state, effects) = begin_round(game_id, round.number + 1, score, rng);
            (Session { state, high_score }, effects)
        }

        (
            GameState::Play {
                game_id,
                round,
                score,
                position,
                outcome: Some(Outcome::Failing { exploded, .. }),
            },
            TimerKind::Shake,
        ) => {
            let state = GameState::Play {
                game_id,
                round,
                score,
                position,
                outcome: Some(Outcome::Failing { exploded, shaking: false }),
            };
            (Session { state, high_score }, Vec::new())
        }

        (
            GameState::Play { round, score, outcome: Some(Outcome::Failing { .. }), .. },
            TimerKind::Failure,
        ) => {
            // Tying the best still counts; a zero score never does.
            let new_high_score = score > 0 && score >= high_score;
            let high_score = high_score.max(score);
            info!(
                "[GameSession] Game over at round {} with score {} (best {})",
                round.number, score, high_score
            );
            let state = GameState::GameOver { round: round.number, score, new_high_score };
            (Session { state, high_score }, Vec::new())
        }

        (state, kind) => {
            debug!("[GameSession] Dropped {:?} timer in {:?} mode", kind, state.mode());
            (Session { state, high_score }, Vec::new())
        }
    }
}
