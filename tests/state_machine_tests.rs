//! Property tests for the lifecycle state machine.

use proptest::prelude::*;

use card_czar::core::{Entity, GameRng};
use card_czar::error::GameError;
use card_czar::game::{Game, GameState};
use card_czar::objects::Player;
use card_czar::store::ObjectStore;

fn new_game() -> Game {
    let mut store = ObjectStore::new();
    let owner = Player::new("owner").unwrap();
    let owner_id = owner.id();
    store.add_object(owner).unwrap();
    Game::new("prop game", owner_id, &store, GameRng::new(0)).unwrap()
}

fn arb_state() -> impl Strategy<Value = GameState> {
    prop::sample::select(GameState::ALL.to_vec())
}

proptest! {
    /// The observed state sequence is strictly increasing: every accepted
    /// transition advances, every rejected one is an `IllegalStateChange`
    /// that leaves the state untouched.
    #[test]
    fn set_state_is_strictly_monotonic(targets in prop::collection::vec(arb_state(), 1..20)) {
        let mut game = new_game();
        let mut observed = vec![game.state()];

        for target in targets {
            let before = game.state();
            match game.set_state(target) {
                Ok(()) => {
                    prop_assert!(target > before);
                    prop_assert_eq!(game.state(), target);
                    observed.push(target);
                }
                Err(err) => {
                    prop_assert_eq!(err, GameError::IllegalStateChange {
                        game: game.id(),
                        from: before,
                        to: target,
                    });
                    prop_assert_eq!(game.state(), before);
                }
            }
        }

        for window in observed.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
    }

    /// Rejection is exactly the complement of strict advance.
    #[test]
    fn set_state_accepts_iff_strictly_greater(from in arb_state(), to in arb_state()) {
        let mut game = new_game();
        // Drive the game to `from` (no-op when starting there).
        if from > game.state() {
            game.set_state(from).unwrap();
        }
        prop_assume!(game.state() == from);

        prop_assert_eq!(game.set_state(to).is_ok(), to > from);
    }
}
