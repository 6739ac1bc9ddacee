//! A single game session: roster, packs, and the lifecycle state machine.

use smallvec::SmallVec;

use super::state::{GameAction, GameState};
use crate::core::{Entity, EntityId, GameRng, Kind};
use crate::error::{GameError, Result};
use crate::store::ObjectStore;

/// Minimum roster size required to start a game.
pub const MIN_PLAYERS: usize = 3;

/// A single game instance.
///
/// The game owns its roster and pack selection as ordered id sets; the
/// objects behind those ids live in an [`ObjectStore`] that every mutating
/// call borrows explicitly. The store stays the sole source of truth for
/// whether an id resolves to a live object of the right kind.
///
/// Invariants:
/// - the owner is always a roster member;
/// - the state only ever advances through the [`GameState`] ordering;
/// - roster and pack lists hold no duplicate ids;
/// - the czar is unset until play begins, then always a roster member.
///
/// ## Example
///
/// ```
/// use card_czar::core::{Entity, GameRng};
/// use card_czar::game::{Game, GameState};
/// use card_czar::objects::Player;
/// use card_czar::store::ObjectStore;
///
/// let mut store = ObjectStore::new();
/// let owner = Player::new("owner").unwrap();
/// let owner_id = owner.id();
/// store.add_object(owner).unwrap();
///
/// let game = Game::new("test game", owner_id, &store, GameRng::new(42)).unwrap();
/// assert_eq!(game.state(), GameState::Initializing);
/// assert_eq!(game.players(), [owner_id]);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    id: EntityId,
    name: String,
    owner: EntityId,
    players: SmallVec<[EntityId; 8]>,
    card_packs: SmallVec<[EntityId; 4]>,
    state: GameState,
    current_czar: Option<EntityId>,
    rng: GameRng,
}

impl Game {
    /// Create a game in `Initializing` state with the owner as its only
    /// roster member.
    ///
    /// Fails with `ValidationFailure` for an empty name,
    /// `ReferencedObjectMissing` if `owner` is not in the store, and
    /// `WrongObjectKind` if it resolves to something other than a player.
    pub fn new(
        name: impl Into<String>,
        owner: EntityId,
        store: &ObjectStore,
        rng: GameRng,
    ) -> Result<Self> {
        let id = EntityId::new();
        let mut game = Self {
            id,
            name: String::new(),
            owner,
            players: SmallVec::new(),
            card_packs: SmallVec::new(),
            state: GameState::Initializing,
            current_czar: None,
            rng,
        };
        game.set_name(name)?;
        game.resolve(store, owner, Kind::Player)?;
        game.players.push(owner);
        Ok(game)
    }

    /// The game's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the game. The new name must be non-empty.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(GameError::ValidationFailure {
                object: "Game",
                field: "name",
            });
        }
        self.name = name;
        Ok(())
    }

    /// The current lifecycle state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The current owner. Always a roster member.
    #[must_use]
    pub fn owner(&self) -> EntityId {
        self.owner
    }

    /// The roster, in join order.
    #[must_use]
    pub fn players(&self) -> &[EntityId] {
        &self.players
    }

    /// The selected card packs, in selection order.
    #[must_use]
    pub fn card_packs(&self) -> &[EntityId] {
        &self.card_packs
    }

    /// The current card czar, unset until play begins.
    #[must_use]
    pub fn current_czar(&self) -> Option<EntityId> {
        self.current_czar
    }

    /// Whether the current state permits the given action.
    #[must_use]
    pub fn allows(&self, action: GameAction) -> bool {
        action.allowed_in(self.state)
    }

    /// Advance the lifecycle state.
    ///
    /// The new state must strictly exceed the current one; anything else
    /// fails with `IllegalStateChange` and leaves the state untouched.
    /// There are no hooks or side effects beyond the assignment, so callers
    /// set intermediate states explicitly in ascending order.
    pub fn set_state(&mut self, new_state: GameState) -> Result<()> {
        if new_state <= self.state {
            return Err(GameError::IllegalStateChange {
                game: self.id,
                from: self.state,
                to: new_state,
            });
        }
        self.state = new_state;
        Ok(())
    }

    /// Add a player to the roster, appending at the end.
    ///
    /// Gated by `ChangePlayers`; the id must resolve to a registered
    /// player. Re-adding a roster member is a silent no-op.
    pub fn add_player(&mut self, store: &ObjectStore, id: EntityId) -> Result<()> {
        self.gate(GameAction::ChangePlayers)?;
        self.resolve(store, id, Kind::Player)?;
        if !self.players.contains(&id) {
            self.players.push(id);
        }
        Ok(())
    }

    /// Remove a player from the roster.
    ///
    /// Gated by `ChangePlayers`; the id must resolve to a registered
    /// player. Removing a non-member is a silent no-op. Removing the
    /// owner transfers ownership to a uniformly random remaining player,
    /// or finishes the game when the roster empties.
    pub fn remove_player(&mut self, store: &ObjectStore, id: EntityId) -> Result<()> {
        self.gate(GameAction::ChangePlayers)?;
        self.resolve(store, id, Kind::Player)?;
        self.players.retain(|member| *member != id);

        if self.owner == id {
            if self.players.is_empty() {
                // Nobody left to hand the game to.
                self.state = GameState::Finished;
                return Ok(());
            }
            if let Some(&successor) = self.rng.choose(&self.players) {
                self.owner = successor;
            }
        }
        Ok(())
    }

    /// Add a card pack to the game.
    ///
    /// Gated by `ChangeCardPack`; the id must resolve to a registered
    /// pack. Re-adding a selected pack is a silent no-op.
    pub fn add_card_pack(&mut self, store: &ObjectStore, id: EntityId) -> Result<()> {
        self.gate(GameAction::ChangeCardPack)?;
        self.resolve(store, id, Kind::CardPack)?;
        if !self.card_packs.contains(&id) {
            self.card_packs.push(id);
        }
        Ok(())
    }

    /// Remove a card pack from the game.
    ///
    /// Gated by `ChangeCardPack`; the id must resolve to a registered
    /// pack. Removing an unselected pack is a silent no-op.
    pub fn remove_card_pack(&mut self, store: &ObjectStore, id: EntityId) -> Result<()> {
        self.gate(GameAction::ChangeCardPack)?;
        self.resolve(store, id, Kind::CardPack)?;
        self.card_packs.retain(|pack| *pack != id);
        Ok(())
    }

    /// Start the game, transitioning to `Starting`.
    ///
    /// Gated by `StartGame`; fails with `NotEnoughPlayers` when the roster
    /// holds fewer than [`MIN_PLAYERS`].
    pub fn start(&mut self) -> Result<()> {
        self.gate(GameAction::StartGame)?;
        if self.players.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers {
                game: self.id,
                have: self.players.len(),
                need: MIN_PLAYERS,
            });
        }
        self.set_state(GameState::Starting)
    }

    /// Begin play: transition to `InGame` and pick the first card czar
    /// uniformly at random from the roster.
    ///
    /// Called once all players have confirmed their connections. This is a
    /// plain synchronous transition; sequencing it after asynchronous
    /// setup work is the caller's concern.
    pub fn play(&mut self) -> Result<()> {
        self.set_state(GameState::InGame)?;
        if let Some(&czar) = self.rng.choose(&self.players) {
            self.current_czar = Some(czar);
        }
        Ok(())
    }

    fn gate(&self, action: GameAction) -> Result<()> {
        if !self.allows(action) {
            return Err(GameError::InvalidGameState {
                game: self.id,
                action,
                state: self.state,
            });
        }
        Ok(())
    }

    /// Resolve an id through the store, checking its kind.
    fn resolve(&self, store: &ObjectStore, id: EntityId, expected: Kind) -> Result<()> {
        match store.get_object(id) {
            None => Err(GameError::ReferencedObjectMissing { game: self.id, id }),
            Some(obj) if obj.kind() != expected => Err(GameError::WrongObjectKind {
                game: self.id,
                id,
                expected,
                actual: obj.kind(),
            }),
            Some(_) => Ok(()),
        }
    }
}

impl Entity for Game {
    fn id(&self) -> EntityId {
        self.id
    }
}
