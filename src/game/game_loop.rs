//! Turn driver.
//!
//! Sides alternate attacks until one table is empty. A turn only ends
//! once its attack future has resolved, so every hit, animation and
//! removal of the current attack is finished before the next attacker
//! is even chosen.

use crate::cards::CardId;
use crate::combat::CombatResolver;
use crate::core::{EntityId, GameError, GameState, Player, PlayerId, PlayerMap};

use super::result::GameResult;

/// Callback fired once with the winning player.
pub type WinnerCallback = Box<dyn FnOnce(&Player)>;

/// Lifecycle of a [`Game`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Built, decks not yet deployed.
    Ready,
    /// Decks deployed, turns in progress.
    Running,
    /// A result has been reported.
    Finished,
}

/// A two-sided game session.
pub struct Game {
    state: GameState,
    decks: PlayerMap<Vec<CardId>>,
    phase: Phase,
    selected: PlayerMap<Option<usize>>,
    on_winner: Option<WinnerCallback>,
    result: Option<GameResult>,
}

impl Game {
    pub(super) fn new(state: GameState, decks: PlayerMap<Vec<CardId>>) -> Self {
        Self {
            state,
            decks,
            phase: Phase::Ready,
            selected: PlayerMap::with_value(None),
            on_winner: None,
            result: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The final result, once the game has finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Deploy both decks and start the game.
    ///
    /// Entry hooks fire in deck order, sheriff first. With `auto_start`
    /// turns run until the game ends and the result is returned. Without
    /// it the caller drives turns through [`Game::next_turn`] and
    /// `Ok(None)` is returned.
    ///
    /// `on_winner` fires exactly once, when a side empties the other's
    /// table. It never fires for a draw.
    pub async fn play(
        &mut self,
        auto_start: bool,
        on_winner: impl FnOnce(&Player) + 'static,
    ) -> Result<Option<GameResult>, GameError> {
        match self.phase {
            Phase::Ready => {}
            Phase::Running => return Err(GameError::AlreadyStarted),
            Phase::Finished => return Err(GameError::Finished),
        }

        for player in PlayerId::both() {
            for &kind in self.decks[player].iter() {
                self.state.deploy(player, kind)?;
            }
        }
        self.on_winner = Some(Box::new(on_winner));
        self.phase = Phase::Running;
        tracing::info!(
            sheriff = self.state.players[PlayerId::SHERIFF].table.len(),
            bandit = self.state.players[PlayerId::BANDIT].table.len(),
            first = %self.state.active_player,
            "game started"
        );

        if auto_start {
            self.run_to_end().await.map(Some)
        } else {
            Ok(None)
        }
    }

    /// Run [`Game::play`] with auto-start on a fresh current-thread runtime.
    pub fn play_blocking(&mut self, on_winner: impl FnOnce(&Player) + 'static) -> Result<GameResult, GameError> {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build()?;
        runtime.block_on(async {
            self.play(false, on_winner).await?;
            self.run_to_end().await
        })
    }

    async fn run_to_end(&mut self) -> Result<GameResult, GameError> {
        loop {
            if let Some(result) = self.next_turn().await? {
                return Ok(result);
            }
        }
    }

    /// Play one turn: the active side's attacker attacks, then the turn
    /// passes to the other side.
    ///
    /// Returns the result if this turn ended the game.
    pub async fn next_turn(&mut self) -> Result<Option<GameResult>, GameError> {
        match self.phase {
            Phase::Ready => return Err(GameError::NotStarted),
            Phase::Finished => return Err(GameError::Finished),
            Phase::Running => {}
        }

        let active = self.state.active_player;
        let attacker = self.attacker_for(active);
        tracing::debug!(turn = self.state.turn_number, player = %active, ?attacker, "turn");

        if let Some(attacker) = attacker {
            let report = CombatResolver::attack(&mut self.state, attacker).await;
            if report.removed().next().is_some() {
                // Positions on the defending side shifted.
                self.selected[active.opponent()] = None;
            }
        }

        self.state.turn_number += 1;
        self.state.active_player = active.opponent();

        Ok(self.check_end())
    }

    /// Choose which of `player`'s cards attacks on their next turn.
    ///
    /// The choice is used once and then falls back to the front card.
    pub fn select_attacker(&mut self, player: PlayerId, position: usize) -> Result<(), GameError> {
        if self.phase == Phase::Finished {
            return Err(GameError::Finished);
        }
        if position >= self.state.players[player].table.len() {
            return Err(GameError::InvalidSelection { player, position });
        }
        self.selected[player] = Some(position);
        Ok(())
    }

    fn attacker_for(&mut self, player: PlayerId) -> Option<EntityId> {
        let table = &self.state.players[player].table;
        self.selected[player]
            .take()
            .and_then(|position| table.at(position))
            .or_else(|| table.front())
            .map(|card| card.entity_id)
    }

    fn check_end(&mut self) -> Option<GameResult> {
        let defeated = PlayerId::both().find(|&p| self.state.players[p].is_defeated());
        let result = match defeated {
            Some(loser) => GameResult::Winner(loser.opponent()),
            None if self.state.turn_number > self.state.config.max_turns => GameResult::Draw,
            None => return None,
        };
        self.finish(result);
        Some(result)
    }

    fn finish(&mut self, result: GameResult) {
        self.phase = Phase::Finished;
        self.result = Some(result);
        let callback = self.on_winner.take();

        match result {
            GameResult::Winner(player) => {
                let winner = &self.state.players[player];
                tracing::info!(winner = %winner.name, side = %player, turns = self.state.turn_number - 1, "game over");
                if let Some(callback) = callback {
                    callback(winner);
                }
            }
            GameResult::Draw => {
                tracing::info!(turns = self.state.turn_number - 1, "game drawn at turn cap");
            }
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("turn", &self.state.turn_number)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog::{DOG, DUCK, TRASHER};
    use crate::cards::CardRegistry;
    use crate::game::GameBuilder;

    fn game(sheriff: &[CardId], bandit: &[CardId]) -> Game {
        GameBuilder::new().build(CardRegistry::standard(), sheriff, bandit).unwrap()
    }

    #[tokio::test]
    async fn test_next_turn_before_play() {
        let mut game = game(&[DUCK], &[DOG]);
        assert!(matches!(game.next_turn().await, Err(GameError::NotStarted)));
    }

    #[tokio::test]
    async fn test_play_twice() {
        let mut game = game(&[DUCK], &[DOG]);
        game.play(false, |_| {}).await.unwrap();
        assert!(matches!(game.play(false, |_| {}).await, Err(GameError::AlreadyStarted)));
    }

    #[tokio::test]
    async fn test_turns_alternate() {
        let mut game = game(&[DUCK], &[TRASHER]);
        game.play(false, |_| {}).await.unwrap();

        assert_eq!(game.state().active_player, PlayerId::SHERIFF);
        game.next_turn().await.unwrap();
        assert_eq!(game.state().active_player, PlayerId::BANDIT);
        assert_eq!(game.state().turn_number, 2);
    }

    #[tokio::test]
    async fn test_selection_is_used_once() {
        let mut game = game(&[DUCK, DOG], &[TRASHER]);
        game.play(false, |_| {}).await.unwrap();

        game.select_attacker(PlayerId::SHERIFF, 1).unwrap();
        let dog = game.state().players[PlayerId::SHERIFF].table.at(1).unwrap().entity_id;
        assert_eq!(game.attacker_for(PlayerId::SHERIFF), Some(dog));

        let duck = game.state().players[PlayerId::SHERIFF].table.front().unwrap().entity_id;
        assert_eq!(game.attacker_for(PlayerId::SHERIFF), Some(duck));
    }
}
