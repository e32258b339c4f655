//! Game integration tests.

use std::collections::HashSet;

use twentyone::{
    ActionError, Card, DECK_SIZE, DealError, Deck, Decision, EmptyDeckError, Game, GameState,
    Hand, Outcome, Rank, ShowdownError, Suit, Verdict, hand_value,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn game_from_draws(draws: &[Card]) -> Game {
    Game::with_deck(Deck::from_draws(draws.to_vec()))
}

fn hand(ranks: &[Rank]) -> Hand {
    ranks.iter().map(|&rank| card(Suit::Spades, rank)).collect()
}

#[test]
fn ace_counts_eleven_when_total_stays_low() {
    assert_eq!(hand(&[Rank::Ace, Rank::Five]).value(), 16);
    assert_eq!(hand(&[Rank::Ace, Rank::Two, Rank::Three]).value(), 16);
}

#[test]
fn ace_counts_one_when_other_cards_reach_eleven() {
    assert_eq!(hand(&[Rank::Ace, Rank::Eight, Rank::Three]).value(), 12);
}

#[test]
fn only_one_ace_is_promoted() {
    assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Nine]).value(), 11);
    assert_eq!(hand(&[Rank::Ace, Rank::Ace]).value(), 12);
    assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]).value(), 14);
}

#[test]
fn ace_with_ten_card_totals_eleven() {
    // Raw total 11 is not below 11, so the Ace stays hard.
    assert_eq!(hand(&[Rank::Ace, Rank::King]).value(), 11);
    assert_eq!(hand(&[Rank::Ace, Rank::Ten]).value(), 11);
}

#[test]
fn face_cards_count_ten() {
    assert_eq!(hand(&[Rank::Jack, Rank::Queen]).value(), 20);
    assert_eq!(hand(&[Rank::King, Rank::Nine, Rank::Two]).value(), 21);
    assert_eq!(hand_value(&[]), 0);
}

#[test]
fn bust_is_strictly_over_twenty_one() {
    let twenty_one = hand(&[Rank::King, Rank::Nine, Rank::Two]);
    assert!(!twenty_one.is_busted());

    let twenty_two = hand(&[Rank::King, Rank::Nine, Rank::Three]);
    assert!(twenty_two.is_busted());
    assert_eq!(twenty_two.value(), 22);
}

#[test]
fn hand_reports_aces_and_up_card() {
    let mut h = Hand::new();
    assert!(h.is_empty());
    assert!(h.up_card().is_none());

    h.add_card(card(Suit::Clubs, Rank::Seven));
    h.add_card(card(Suit::Hearts, Rank::Ace));
    assert!(h.has_ace());
    assert_eq!(h.len(), 2);
    assert_eq!(h.up_card(), Some(&card(Suit::Clubs, Rank::Seven)));
}

#[test]
fn card_display_uses_label_and_symbol() {
    assert_eq!(card(Suit::Hearts, Rank::Ten).to_string(), "10♥");
    assert_eq!(card(Suit::Spades, Rank::Queen).to_string(), "Q♠");
    assert!(Suit::Diamonds.is_red());
    assert!(!Suit::Clubs.is_red());
}

#[test]
fn fresh_deck_holds_every_card_once() {
    let mut deck = Deck::new(1);
    assert_eq!(deck.len(), DECK_SIZE);

    let mut seen = HashSet::new();
    for _ in 0..DECK_SIZE {
        assert!(seen.insert(deck.draw().unwrap()));
    }

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(seen.contains(&card(suit, rank)));
        }
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(EmptyDeckError));
}

#[test]
fn same_seed_same_order() {
    let mut a = Deck::new(99);
    let mut b = Deck::new(99);
    for _ in 0..DECK_SIZE {
        assert_eq!(a.draw(), b.draw());
    }
}

#[test]
fn stacked_deck_draws_in_given_order() {
    let mut deck = Deck::from_draws(vec![
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Three),
    ]);
    assert_eq!(deck.draw(), Ok(card(Suit::Hearts, Rank::Two)));
    assert_eq!(deck.draw(), Ok(card(Suit::Clubs, Rank::Three)));
    assert_eq!(deck.draw(), Err(EmptyDeckError));
}

#[test]
fn deal_alternates_player_then_dealer() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Two),    // player
        card(Suit::Clubs, Rank::Three),   // dealer up
        card(Suit::Spades, Rank::Four),   // player
        card(Suit::Diamonds, Rank::Five), // dealer hole
    ]);
    assert_eq!(game.state(), GameState::InitialDeal);

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(
        game.player_hand().cards(),
        &[card(Suit::Hearts, Rank::Two), card(Suit::Spades, Rank::Four)]
    );
    assert_eq!(
        game.dealer_hand().cards(),
        &[card(Suit::Clubs, Rank::Three), card(Suit::Diamonds, Rank::Five)]
    );
    assert_eq!(game.cards_remaining(), 0);
}

#[test]
fn deal_with_short_deck_ends_game_without_drawing() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Three),
        card(Suit::Spades, Rank::Four),
    ]);

    assert_eq!(game.deal(), Err(DealError::EmptyDeck(EmptyDeckError)));
    assert_eq!(game.state(), GameState::Done);
    assert_eq!(game.cards_remaining(), 3);
    assert!(game.player_hand().is_empty());
    assert_eq!(game.hit(), Err(ActionError::InvalidState));
}

#[test]
fn steps_out_of_order_are_rejected() {
    let mut game = Game::new(5);

    assert_eq!(game.hit(), Err(ActionError::InvalidState));
    assert_eq!(game.stand(), Err(ActionError::InvalidState));
    assert_eq!(game.dealer_play(), Err(ShowdownError::InvalidState));
    assert_eq!(game.showdown(), Err(ShowdownError::InvalidState));

    game.deal().unwrap();
    assert_eq!(game.deal(), Err(DealError::InvalidState));
    assert_eq!(game.dealer_play(), Err(ShowdownError::InvalidState));

    game.stand().unwrap();
    assert_eq!(game.hit(), Err(ActionError::InvalidState));
    assert_eq!(game.showdown(), Err(ShowdownError::InvalidState));
}

#[test]
fn dealer_hits_through_sixteen_and_stops_at_twenty_one() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),   // player
        card(Suit::Clubs, Rank::Four),   // dealer up
        card(Suit::Spades, Rank::Nine),  // player
        card(Suit::Diamonds, Rank::Six), // dealer hole
        card(Suit::Hearts, Rank::Six),   // dealer draw -> 16
        card(Suit::Clubs, Rank::Five),   // dealer draw -> 21
        card(Suit::Spades, Rank::Two),   // left in deck
    ]);

    game.deal().unwrap();
    game.stand().unwrap();
    assert_eq!(game.dealer_hand().value(), 10);

    let drawn = game.dealer_play().unwrap();
    assert_eq!(
        drawn,
        vec![card(Suit::Hearts, Rank::Six), card(Suit::Clubs, Rank::Five)]
    );
    assert_eq!(game.dealer_hand().value(), 21);
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.state(), GameState::Settlement);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::DealerBeatsPlayer);
    assert_eq!(result.player_value, 19);
    assert_eq!(result.dealer_value, 21);
    assert_eq!(game.state(), GameState::Done);
}

#[test]
fn dealer_stands_on_seventeen() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Hearts, Rank::Two),
    ]);

    game.deal().unwrap();
    game.stand().unwrap();
    assert!(game.dealer_play().unwrap().is_empty());

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerBeatsDealer);
    assert_eq!(result.outcome.verdict(), Verdict::Win);
}

#[test]
fn player_bust_ends_turn_and_dealer_does_not_draw() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),   // player
        card(Suit::Clubs, Rank::Ten),    // dealer up
        card(Suit::Spades, Rank::Four),  // player
        card(Suit::Diamonds, Rank::Two), // dealer hole, dealer on 12
        card(Suit::Hearts, Rank::King),  // player hit -> 24
        card(Suit::Clubs, Rank::Queen),  // would bust the dealer
    ]);

    game.deal().unwrap();
    let hit = game.act(Decision::Hit).unwrap();
    assert_eq!(hit, Some(card(Suit::Hearts, Rank::King)));
    assert!(game.player_busted());
    assert_eq!(game.state(), GameState::DealerTurn);

    assert!(game.dealer_play().unwrap().is_empty());
    assert_eq!(game.cards_remaining(), 1);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerBusted);
    assert_eq!(result.player_value, 24);
    assert_eq!(result.dealer_value, 12);
    assert!(result.player_busted);
    assert!(!result.dealer_busted);
}

#[test]
fn dealer_bust_pays_player() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Diamonds, Rank::Three),
        card(Suit::Hearts, Rank::Queen), // dealer 13 -> 23
    ]);

    game.deal().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::DealerBusted);
    assert_eq!(result.player_value, 19);
    assert_eq!(result.dealer_value, 23);
    assert!(result.dealer_busted);
}

#[test]
fn hit_with_empty_deck_ends_game() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Six),
        card(Suit::Diamonds, Rank::Seven),
    ]);

    game.deal().unwrap();
    assert_eq!(game.hit(), Err(ActionError::EmptyDeck(EmptyDeckError)));
    assert_eq!(game.state(), GameState::Done);
    assert_eq!(game.player_hand().len(), 2);
}

#[test]
fn dealer_draw_with_empty_deck_ends_game() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Diamonds, Rank::Five),
    ]);

    game.deal().unwrap();
    game.stand().unwrap();
    assert_eq!(
        game.dealer_play(),
        Err(ShowdownError::EmptyDeck(EmptyDeckError))
    );
    assert_eq!(game.state(), GameState::Done);
    assert_eq!(game.showdown(), Err(ShowdownError::InvalidState));
}

#[test]
fn settlement_rules_in_order() {
    assert_eq!(Outcome::determine(false, 20, 19), Outcome::PlayerBeatsDealer);
    assert_eq!(Outcome::determine(false, 18, 18), Outcome::Push);
    assert_eq!(Outcome::determine(true, 24, 23), Outcome::PlayerBusted);
    assert_eq!(Outcome::determine(true, 24, 17), Outcome::PlayerBusted);
    assert_eq!(Outcome::determine(false, 19, 23), Outcome::DealerBusted);
    assert_eq!(Outcome::determine(false, 17, 20), Outcome::DealerBeatsPlayer);

    assert_eq!(Outcome::PlayerBusted.verdict(), Verdict::Lose);
    assert_eq!(Outcome::DealerBusted.verdict(), Verdict::Win);
    assert_eq!(Outcome::Push.verdict(), Verdict::Push);
    assert_eq!(Outcome::Push.to_string(), "Push: You tie with the Dealer.");
}

#[test]
fn decisions_match_on_first_letter() {
    assert_eq!(Decision::parse("h"), Some(Decision::Hit));
    assert_eq!(Decision::parse("HIT"), Some(Decision::Hit));
    assert_eq!(Decision::parse("hello"), Some(Decision::Hit));
    assert_eq!(Decision::parse("s"), Some(Decision::Stand));
    assert_eq!(Decision::parse("Stand"), Some(Decision::Stand));
    assert_eq!(Decision::parse("spaghetti"), Some(Decision::Stand));

    assert_eq!(Decision::parse(""), None);
    assert_eq!(Decision::parse("foo"), None);
    assert_eq!(Decision::parse(" h"), None);
}
