//! View-model integration tests.

use std::sync::{Arc, Mutex};

use bust42::{
    Card, Deck, EngineEvent, EngineSupport, GameEngine, GameOptions, Participant, Player,
    PlayerError, PlayerState, Rank, ResultSummary, Suit, SupportEvent, SupportOptions,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn support(options: SupportOptions) -> EngineSupport {
    let engine = GameEngine::new(GameOptions::default().with_pacing(false), 11);
    EngineSupport::new(engine, options.with_delay(0))
}

fn record_events(support: &EngineSupport) -> Arc<Mutex<Vec<SupportEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    support.add_support_callback(move |_support: &EngineSupport, event: &SupportEvent| {
        sink.lock().unwrap().push(event.clone());
    });
    events
}

fn state(support: &EngineSupport, id: &str) -> PlayerState {
    support
        .player_state(&Participant::Player(id.into()))
        .unwrap()
}

// Ann: 10, 20, 28, 36, busts on the nine.
const ANN_DRAWS: [Card; 5] = [
    card(Suit::Hearts, Rank::Ten),
    card(Suit::Hearts, Rank::Jack),
    card(Suit::Hearts, Rank::Eight),
    card(Suit::Spades, Rank::Eight),
    card(Suit::Hearts, Rank::Nine),
];

// Bob: 11, 22, 32, 42.
const BOB_DRAWS: [Card; 4] = [
    card(Suit::Hearts, Rank::Ace),
    card(Suit::Spades, Rank::Ace),
    card(Suit::Spades, Rank::Ten),
    card(Suit::Diamonds, Rank::Ten),
];

// House: 10, 20, 30, 39, busts on the jack.
const HOUSE_DRAWS: [Card; 5] = [
    card(Suit::Hearts, Rank::King),
    card(Suit::Spades, Rank::King),
    card(Suit::Hearts, Rank::Queen),
    card(Suit::Spades, Rank::Nine),
    card(Suit::Spades, Rank::Jack),
];

fn stack_round(support: &EngineSupport) {
    let mut draws = ANN_DRAWS.to_vec();
    draws.extend_from_slice(&BOB_DRAWS);
    draws.extend_from_slice(&HOUSE_DRAWS);
    support.set_deck(Deck::from_draws(&draws).unwrap());
}

#[test]
fn add_and_bet_update_state_and_notify() {
    let support = support(SupportOptions::default());
    let events = record_events(&support);

    support.add_player(Player::new("1", "Ann", 500)).unwrap();
    assert_eq!(state(&support, "1").previous_points(), 500);
    assert!(!state(&support, "1").has_bet());

    assert!(!support.place_bet("1", 600).unwrap());
    assert!(!state(&support, "1").has_bet());

    assert!(support.place_bet("1", 100).unwrap());
    assert!(state(&support, "1").has_bet());

    support.reset_bet("1").unwrap();
    assert!(!state(&support, "1").has_bet());
    assert_eq!(support.get_player("1").unwrap().bet(), 0);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 3);
    assert!(matches!(&events[0], SupportEvent::PlayerAdded(player) if player.id() == "1"));
    assert!(matches!(
        &events[1],
        SupportEvent::BetPlaced { player, bet: 100 } if player.bet() == 100
    ));
    assert!(matches!(&events[2], SupportEvent::BetReset(player) if player.bet() == 0));
}

#[test]
fn unknown_players_are_rejected() {
    let support = support(SupportOptions::default());
    assert_eq!(
        support.add_player(Player::new("", "Nobody", 1)).unwrap_err(),
        PlayerError::EmptyId
    );
    assert_eq!(support.place_bet("9", 1).unwrap_err(), PlayerError::NotFound);
    assert_eq!(support.reset_bet("9").unwrap_err(), PlayerError::NotFound);
    assert!(!support.remove_player("9"));
    assert_eq!(support.deal_player("9", 0).unwrap(), None);
}

#[test]
fn deal_player_tracks_hand_and_dealt_flag() {
    let support = support(SupportOptions::default());
    support.add_player(Player::new("1", "Ann", 500)).unwrap();
    support.add_player(Player::new("2", "Bob", 300)).unwrap();
    support.place_bet("1", 100).unwrap();
    stack_round(&support);

    assert!(!support.all_players_dealt());
    support.deal_player("1", 0).unwrap();
    assert!(!support.all_players_dealt());

    let ann = state(&support, "1");
    assert!(ann.has_been_dealt());
    assert!(ann.has_busted());
    assert_eq!(ann.hand(), ANN_DRAWS);
    assert_eq!(ann.previous_bet(), 100);

    support.deal_player("2", 0).unwrap();
    assert!(support.all_players_dealt());

    let bob = state(&support, "2");
    assert!(!bob.has_busted());
    assert_eq!(bob.hand(), BOB_DRAWS);
    assert_eq!(bob.previous_bet(), 0);
}

#[test]
fn all_players_dealt_needs_players() {
    let support = support(SupportOptions::default());
    assert!(!support.all_players_dealt());
}

#[test]
fn deal_house_closes_the_round() {
    let support = support(SupportOptions::default());
    let events = record_events(&support);
    support.add_player(Player::new("1", "Ann", 500)).unwrap();
    support.add_player(Player::new("2", "Bob", 300)).unwrap();
    support.add_player(Player::new("3", "Cat", 200)).unwrap();
    support.place_bet("1", 100).unwrap();
    support.place_bet("2", 50).unwrap();
    stack_round(&support);

    support.deal_player("1", 0).unwrap();
    support.deal_player("2", 0).unwrap();
    let round = support.deal_house(0);
    assert_eq!(round.house_score, 39);

    let house = support.player_state(&Participant::House).unwrap();
    assert_eq!(house.hand(), HOUSE_DRAWS);
    assert!(house.has_busted());

    let ann = state(&support, "1");
    assert_eq!(ann.result_summary(), ResultSummary::Lost);
    assert_eq!(ann.previous_points(), 400);
    assert!(!ann.has_bet());
    assert!(!ann.has_been_dealt());

    assert_eq!(state(&support, "2").result_summary(), ResultSummary::Won);
    assert_eq!(state(&support, "2").previous_points(), 350);
    assert_eq!(state(&support, "3").result_summary(), ResultSummary::Drew);
    assert!(!support.all_players_dealt());

    assert_eq!(
        events.lock().unwrap().last(),
        Some(&SupportEvent::RoundEnded)
    );
}

#[test]
fn broke_players_leave_after_the_round() {
    let support = support(SupportOptions::default());
    let events = record_events(&support);
    support.add_player(Player::new("1", "Ann", 100)).unwrap();
    support.add_player(Player::new("2", "Bob", 300)).unwrap();
    support.place_bet("1", 100).unwrap();
    stack_round(&support);

    support.deal_player("1", 0).unwrap();
    support.deal_player("2", 0).unwrap();
    support.deal_house(0);

    assert!(support.get_player("1").is_none());
    assert!(support.player_state(&Participant::Player("1".into())).is_none());
    assert_eq!(support.get_all_players().len(), 1);

    let events = events.lock().unwrap();
    let tail = &events[events.len() - 2..];
    assert!(matches!(&tail[0], SupportEvent::PlayerRemoved(player) if player.id() == "1"));
    assert_eq!(tail[1], SupportEvent::RoundEnded);
}

#[test]
fn broke_players_can_stay() {
    let support = support(SupportOptions::default().with_remove_broke_players(false));
    support.add_player(Player::new("1", "Ann", 100)).unwrap();
    support.place_bet("1", 100).unwrap();
    stack_round(&support);

    support.deal_player("1", 0).unwrap();
    support.set_deck(Deck::from_draws(&HOUSE_DRAWS).unwrap());
    support.deal_house(0);

    assert_eq!(support.get_player("1").unwrap().points(), 0);
    assert_eq!(state(&support, "1").result_summary(), ResultSummary::Lost);
}

#[test]
fn remove_player_drops_state() {
    let support = support(SupportOptions::default());
    let events = record_events(&support);
    support.add_player(Player::new("1", "Ann", 500)).unwrap();

    assert!(support.remove_player("1"));
    assert!(support.player_state(&Participant::Player("1".into())).is_none());
    assert!(!support.remove_player("1"));

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[1], SupportEvent::PlayerRemoved(player) if player.name() == "Ann"));
}

#[test]
fn reset_game_clears_everything_but_a_fresh_house() {
    let support = support(SupportOptions::default());
    let events = record_events(&support);
    support.add_player(Player::new("1", "Ann", 500)).unwrap();
    support.add_player(Player::new("2", "Bob", 300)).unwrap();
    support.place_bet("1", 100).unwrap();
    stack_round(&support);
    support.deal_player("1", 0).unwrap();
    support.deal_player("2", 0).unwrap();
    support.deal_house(0);

    support.reset_game();

    assert!(support.get_all_players().is_empty());
    assert!(support.player_state(&Participant::Player("1".into())).is_none());
    let house = support.player_state(&Participant::House).unwrap();
    assert!(house.hand().is_empty());
    assert!(!house.has_been_dealt());
    assert_eq!(house.result_summary(), ResultSummary::None);
    assert_eq!(
        events.lock().unwrap().last(),
        Some(&SupportEvent::GameReset)
    );
}

#[test]
fn engine_callbacks_run_after_cards_are_recorded() {
    let support = support(SupportOptions::default());
    support.add_player(Player::new("1", "Ann", 500)).unwrap();
    stack_round(&support);

    let scores = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&scores);
    support.add_callback(move |_engine: &GameEngine, event: &EngineEvent| {
        if let EngineEvent::NextCard { score, .. } = event {
            sink.lock().unwrap().push(*score);
        }
    });

    support.deal_player("1", 0).unwrap();
    assert_eq!(*scores.lock().unwrap(), [10, 20, 28, 36]);
    assert_eq!(state(&support, "1").hand().len(), 5);
}

#[test]
fn support_callbacks_can_be_removed() {
    let support = support(SupportOptions::default());
    let events = record_events(&support);
    let extra = support.add_support_callback(|_support: &EngineSupport, _event: &SupportEvent| {});
    assert!(support.remove_support_callback(extra));
    assert!(!support.remove_support_callback(extra));

    support.add_player(Player::new("1", "Ann", 500)).unwrap();
    assert_eq!(events.lock().unwrap().len(), 1);
    assert_eq!(support.delay(), 0);
}

#[test]
fn players_registered_from_an_engine_sink_are_tracked() {
    let support = support(SupportOptions::default());
    support.add_player(Player::new("1", "Ann", 500)).unwrap();
    support.add_callback(|engine: &GameEngine, event: &EngineEvent| {
        if matches!(event, EngineEvent::Result { player_id, .. } if player_id == "1") {
            engine.add_player(Player::new("2", "Bob", 300)).unwrap();
        }
    });
    stack_round(&support);

    support.deal_player("1", 0).unwrap();
    assert!(support.get_player("2").is_some());
    assert!(!support.all_players_dealt());

    support.deal_player("2", 0).unwrap();
    let bob = state(&support, "2");
    assert!(bob.has_been_dealt());
    assert_eq!(bob.hand(), BOB_DRAWS);
    assert!(support.all_players_dealt());

    support.deal_house(0);
    let bob = state(&support, "2");
    assert_eq!(bob.previous_points(), 300);
    assert_eq!(bob.result_summary(), ResultSummary::Drew);
    assert_eq!(support.cards_remaining(), 0);
}
