use blackjack_engine::cards::Face::{self, *};
use blackjack_engine::deck::ScriptedDeck;
use blackjack_engine::engine::{Engine, Reward, Turn};
use blackjack_engine::errors::GameError;
use blackjack_engine::state::{BlackjackAction, BlackjackState};

/// Engine whose next deal is exactly `faces`, followed by seeded cards.
/// Returns the engine and what `reset` returned for the staged deal.
fn staged(faces: &[Face]) -> (Engine<ScriptedDeck>, BlackjackState, Reward) {
    // construction deals one throwaway hand
    let mut engine = Engine::with_source(ScriptedDeck::new([Two, Two, Two, Two]), false);
    engine.source_mut().extend(faces.iter().copied());
    let (state, reward) = engine.reset();
    (engine, state, reward)
}

#[test]
fn natural_ends_the_hand_on_the_deal() {
    let (engine, state, reward) = staged(&[Ace, King, Five, Six]);
    assert_eq!(reward, 1);
    assert_eq!(state.player_sum, 21);
    assert!(state.usable_ace);
    assert_eq!(state.dealer_showing, 6);
    assert!(state.terminal);
    assert!(!engine.in_play());
}

#[test]
fn actions_after_a_natural_are_rejected() {
    let (mut engine, _, _) = staged(&[King, Ace, Five, Six]);
    assert_eq!(
        engine.apply_action(BlackjackAction::Stick),
        Err(GameError::InvalidOperation)
    );
}

#[test]
fn hit_to_twenty_one_keeps_the_hand_alive() {
    let (mut engine, state, reward) = staged(&[Ten, Nine, Two, Three, Two]);
    assert_eq!((state.player_sum, reward, state.terminal), (19, 0, false));

    let (state, reward) = engine.apply_action(BlackjackAction::Hit).unwrap();
    assert_eq!(state.player_sum, 21);
    assert_eq!(reward, 0);
    assert!(!state.terminal);
    assert!(engine.in_play());
}

#[test]
fn hit_past_twenty_one_busts() {
    let (mut engine, _, _) = staged(&[Ten, Nine, Two, Three, Five]);
    let (state, reward) = engine.apply_action(BlackjackAction::Hit).unwrap();
    assert_eq!(state.player_sum, 24);
    assert_eq!(reward, -1);
    assert!(state.terminal);
    assert!(!engine.in_play());
    // the dealer never played
    assert_eq!(engine.dealer_cards().len(), 2);
    assert_eq!(engine.turn(), Turn::Player);
}

#[test]
fn stick_beats_a_dealer_that_stops_lower() {
    let (mut engine, state, _) = staged(&[Ten, Queen, Six, Five, Seven]);
    assert_eq!(state.player_sum, 20);
    assert_eq!(state.dealer_showing, 5);

    let (state, reward) = engine.apply_action(BlackjackAction::Stick).unwrap();
    assert_eq!(engine.dealer_sum(), 18);
    assert_eq!(engine.dealer_cards().len(), 3);
    assert_eq!(reward, 1);
    assert!(state.terminal);
    assert_eq!(engine.turn(), Turn::Dealer);
}

#[test]
fn dealer_bust_pays_the_player() {
    let (mut engine, state, _) = staged(&[Ten, Eight, Six, Ten, Six]);
    assert_eq!(state.player_sum, 18);
    let (state, reward) = engine.apply_action(BlackjackAction::Stick).unwrap();
    assert_eq!(engine.dealer_sum(), 22);
    assert_eq!(reward, 1);
    assert!(state.terminal);
}

#[test]
fn dealer_higher_total_wins() {
    let (mut engine, _, _) = staged(&[Ten, Seven, Ten, Nine]);
    let (_, reward) = engine.apply_action(BlackjackAction::Stick).unwrap();
    assert_eq!(engine.dealer_sum(), 19);
    assert_eq!(engine.dealer_cards().len(), 2, "dealer stands on 19");
    assert_eq!(reward, -1);
}

#[test]
fn equal_totals_push() {
    let (mut engine, _, _) = staged(&[Ten, Eight, Jack, Eight]);
    let (_, reward) = engine.apply_action(BlackjackAction::Stick).unwrap();
    assert_eq!(reward, 0);
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let (mut engine, _, _) = staged(&[Ten, Six, Ace, Six]);
    let (_, reward) = engine.apply_action(BlackjackAction::Stick).unwrap();
    assert_eq!(engine.dealer_sum(), 17);
    assert_eq!(engine.dealer_cards().len(), 2);
    assert_eq!(reward, -1);
}

#[test]
fn dealer_ace_shows_as_one() {
    let (engine, state, _) = staged(&[Ten, Six, Six, Ace]);
    assert_eq!(state.dealer_showing, 1);
    assert_eq!(engine.dealer_sum(), 17);
}

#[test]
fn showing_card_is_the_second_dealer_card() {
    let (_, state, _) = staged(&[Two, Three, King, Four]);
    assert_eq!(state.dealer_showing, 4);
    let (_, state, _) = staged(&[Two, Three, Four, King]);
    assert_eq!(state.dealer_showing, 10);
}

#[test]
fn apply_action_after_terminal_is_invalid() {
    let (mut engine, _, _) = staged(&[Ten, Nine, Two, Three, Five]);
    engine.apply_action(BlackjackAction::Hit).unwrap();
    for action in BlackjackAction::ALL {
        assert_eq!(engine.apply_action(action), Err(GameError::InvalidOperation));
    }
    // hand is untouched by the rejected calls
    assert_eq!(engine.player_cards().len(), 3);
}

#[test]
fn reset_discards_the_previous_hand() {
    let (mut engine, _, _) = staged(&[Ten, Nine, Two, Three, Five]);
    engine.apply_action(BlackjackAction::Hit).unwrap();
    assert!(!engine.in_play());

    engine.source_mut().extend([Ten, Queen, Six, Five, Seven]);
    let (state, reward) = engine.reset();
    assert_eq!(engine.player_cards().len(), 2);
    assert_eq!(engine.dealer_cards().len(), 2);
    assert_eq!(engine.turn(), Turn::Player);
    assert_eq!((state.player_sum, reward, state.terminal), (20, 0, false));

    // same outcome as a fresh engine dealt the same cards
    let (mut fresh, _, _) = staged(&[Ten, Queen, Six, Five, Seven]);
    assert_eq!(
        engine.apply_action(BlackjackAction::Stick),
        fresh.apply_action(BlackjackAction::Stick)
    );
}

#[test]
fn reset_mid_hand_abandons_it() {
    let (mut engine, _, _) = staged(&[Two, Three, Four, Five]);
    engine.apply_action(BlackjackAction::Hit).unwrap();
    assert!(engine.in_play());
    let (state, _) = engine.reset();
    assert_eq!(engine.player_cards().len(), 2);
    assert_eq!(state, engine.state());
}

#[test]
fn seeded_engines_play_identical_hands() {
    let mut a = Engine::new(Some(99), false);
    let mut b = Engine::new(Some(99), false);
    for _ in 0..50 {
        assert_eq!(a.reset(), b.reset());
        while a.in_play() {
            let action = if a.player_sum() < 15 {
                BlackjackAction::Hit
            } else {
                BlackjackAction::Stick
            };
            assert_eq!(a.apply_action(action), b.apply_action(action));
        }
        assert_eq!(a.dealer_cards(), b.dealer_cards());
    }
}

#[test]
fn default_engine_uses_the_fixed_seed() {
    let a = Engine::default();
    let b = Engine::new(Some(blackjack_engine::deck::DEFAULT_DECK_SEED), false);
    assert_eq!(a.player_cards(), b.player_cards());
    assert_eq!(a.dealer_cards(), b.dealer_cards());
}

#[test]
fn verbose_engine_plays_the_same_hand() {
    let mut quiet = Engine::new(Some(5), false);
    let mut loud = Engine::new(Some(5), true);
    assert!(loud.verbose());
    assert_eq!(quiet.state(), loud.state());
    if quiet.in_play() {
        assert_eq!(
            quiet.apply_action(BlackjackAction::Stick),
            loud.apply_action(BlackjackAction::Stick)
        );
    }
}
