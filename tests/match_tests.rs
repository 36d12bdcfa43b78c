//! End-to-end match tests.
//!
//! These drive whole hands through the public `Match` API:
//! - Dealing, scoring and the match lifecycle
//! - Raise negotiation inside a hand
//! - The eleven rule and the end of the match

mod common;

use common::{card, first_wins, play_out, players, stacked_match, Seat, P0, P1};
use truco_core::core::{IllegalState, InvalidMove, MatchConfig, TrucoError};
use truco_core::hand::{HandPhase, MoveKind, RoundOutcome};
use truco_core::intel::IntelEvent;
use truco_core::truco::{ScoreUnit, TrucoResult};
use truco_core::Participant;

// =============================================================================
// Scoring
// =============================================================================

/// First hand: seat 0 acts first, wins two rounds and scores one point.
#[test]
fn test_first_hand_won_in_two_rounds() {
    let (a, b) = players();
    let (mut game, _) = stacked_match(MatchConfig::default(), [first_wins()], a, b);

    assert_eq!(game.first_to_act(), P0);
    assert_eq!(game.current_hand().to_act(), Some(P0));

    play_out(&mut game);
    let hand = game.current_hand();
    assert_eq!(hand.round_outcomes(), vec![RoundOutcome::Won(P0), RoundOutcome::Won(P0)]);
    assert_eq!(hand.result(), Some(TrucoResult::won_by(ScoreUnit::One, P0)));

    game.update_scores().unwrap();
    assert_eq!(game.score(P0), 1);
    assert_eq!(game.score(P1), 0);
    assert_eq!(game.player(P0).score(), 1);
}

/// The second seat asks for truco mid-hand and the first runs.
#[test]
fn test_decline_mid_hand_scores_pre_raise_level() {
    let (a, b) = players();
    let (mut game, _) = stacked_match(MatchConfig::default(), [first_wins()], a, b);

    game.play_card(P0, card("3C")).unwrap();
    assert_eq!(game.raise(P1).unwrap(), ScoreUnit::Three);
    game.decline(P0).unwrap();

    let result = game.current_hand().result().unwrap();
    assert_eq!(result.score(), ScoreUnit::One);
    assert_eq!(result.winner(), Some(P1));

    game.update_scores().unwrap();
    assert_eq!(game.score(P1), 1);
}

/// Eleven against five; the leader wins one more point and the match.
#[test]
fn test_match_ends_from_eleven() {
    let config = MatchConfig::new().with_eleven_rule(false);
    let (mut game, sink) = stacked_match(
        config,
        [first_wins()],
        Seat::new("Ana", 11),
        Seat::new("Bruno", 5),
    );
    assert!(game.is_mao_de_onze());
    assert!(!game.is_done());

    play_out(&mut game);
    game.update_scores().unwrap();

    assert_eq!(game.score(P0), 12);
    assert!(game.is_done());
    assert_eq!(game.winner(), Some(P0));
    assert_eq!(game.winning_participant().map(|p| p.name), Some("Ana"));
    assert_eq!(game.intel().event, IntelEvent::MatchConcluded { winner: P0 });
    assert_eq!(sink.entries().last().map(|i| i.event), Some(IntelEvent::MatchConcluded { winner: P0 }));
}

/// Same position under the eleven rule: accepting makes the hand worth
/// three, truncated to the one point still missing.
#[test]
fn test_match_ends_from_accepted_eleven_hand() {
    let (mut game, _) = stacked_match(
        MatchConfig::default(),
        [first_wins()],
        Seat::new("Ana", 11),
        Seat::new("Bruno", 5),
    );
    assert_eq!(game.current_hand().phase(), HandPhase::ElevenDecision { player: P0 });
    assert_eq!(
        game.current_hand().available_moves(P0),
        vec![MoveKind::Accept, MoveKind::Decline]
    );

    game.accept(P0).unwrap();
    play_out(&mut game);
    assert_eq!(game.current_hand().result().map(|r| r.score()), Some(ScoreUnit::Three));

    game.update_scores().unwrap();
    assert_eq!(game.score(P0), 12);
    assert_eq!(game.winner(), Some(P0));
}

/// Running from an eleven-rule hand hands the opponent one point.
#[test]
fn test_run_from_eleven_hand() {
    let (mut game, _) = stacked_match(
        MatchConfig::default(),
        [first_wins()],
        Seat::new("Ana", 5),
        Seat::new("Bruno", 11),
    );
    assert_eq!(game.current_hand().phase(), HandPhase::ElevenDecision { player: P1 });
    assert_eq!(
        game.decline(P0).unwrap_err(),
        TrucoError::InvalidMove(InvalidMove::OutOfTurn)
    );

    game.decline(P1).unwrap();
    game.update_scores().unwrap();
    assert_eq!(game.score(P0), 6);
    assert_eq!(game.score(P1), 11);
}

#[test]
fn test_both_on_eleven_is_not_mao_de_onze() {
    let (game, _) = stacked_match(
        MatchConfig::default(),
        [first_wins()],
        Seat::new("Ana", 11),
        Seat::new("Bruno", 11),
    );
    assert!(!game.is_mao_de_onze());
    assert_eq!(game.current_hand().phase(), HandPhase::Playing { to_act: P0 });
}

// =============================================================================
// Negotiation inside a match
// =============================================================================

#[test]
fn test_raise_ladder_to_twelve() {
    let (a, b) = players();
    let (mut game, _) = stacked_match(MatchConfig::default(), [first_wins()], a, b);

    assert_eq!(game.raise(P0).unwrap(), ScoreUnit::Three);
    assert_eq!(game.raise(P1).unwrap(), ScoreUnit::Six);
    assert_eq!(game.raise(P0).unwrap(), ScoreUnit::Nine);
    assert_eq!(game.raise(P1).unwrap(), ScoreUnit::Twelve);
    assert_eq!(
        game.raise(P0).unwrap_err(),
        TrucoError::InvalidMove(InvalidMove::RaiseAtMaximum(12))
    );

    game.accept(P0).unwrap();
    assert_eq!(game.current_hand().score(), ScoreUnit::Twelve);

    play_out(&mut game);
    game.update_scores().unwrap();
    assert_eq!(game.score(P0), 12);
    assert!(game.is_done());
}

#[test]
fn test_decline_after_re_raise_scores_re_raised_level() {
    let (a, b) = players();
    let (mut game, _) = stacked_match(MatchConfig::default(), [first_wins()], a, b);

    game.raise(P0).unwrap();
    game.raise(P1).unwrap();
    game.decline(P0).unwrap();

    let result = game.current_hand().result().unwrap();
    assert_eq!(result, TrucoResult::new(ScoreUnit::Three, Some(P1), Some(P1)));
}

#[test]
fn test_rejected_moves_change_nothing() {
    let (a, b) = players();
    let (mut game, sink) = stacked_match(MatchConfig::default(), [first_wins()], a, b);
    game.raise(P0).unwrap();
    let before = game.ledger_view();

    let errors = [
        game.raise(P0).unwrap_err(),
        game.accept(P0).unwrap_err(),
        game.play_card(P0, card("3C")).unwrap_err(),
        game.play_card(P1, card("4S")).unwrap_err(),
    ];
    assert_eq!(
        errors,
        [
            TrucoError::InvalidMove(InvalidMove::ConsecutiveRaise),
            TrucoError::InvalidMove(InvalidMove::OwnRequest),
            TrucoError::InvalidMove(InvalidMove::ResponsePending),
            TrucoError::InvalidMove(InvalidMove::ResponsePending),
        ]
    );
    assert_eq!(game.ledger_view(), before);
    assert_eq!(sink.len(), 2);
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_deal_order_alternates() {
    let (a, b) = players();
    let decks = std::iter::repeat_with(first_wins).take(6);
    let (mut game, _) = stacked_match(MatchConfig::default(), decks, a, b);

    for _ in 0..5 {
        play_out(&mut game);
        game.update_scores().unwrap();
        game.prepare_new_hand().unwrap();
    }

    let hands: Vec<_> = game.hands().collect();
    assert_eq!(hands.len(), 6);
    for pair in hands.windows(2) {
        assert_eq!(pair[1].first_to_act(), pair[0].last_to_act());
    }
    // each seat won the three hands it opened
    assert_eq!(game.score(P0), 3);
    assert_eq!(game.score(P1), 2);
}

#[test]
fn test_update_scores_before_conclusion_fails() {
    let (a, b) = players();
    let (mut game, _) = stacked_match(MatchConfig::default(), [first_wins()], a, b);
    game.play_card(P0, card("3C")).unwrap();

    let err = game.update_scores().unwrap_err();
    assert_eq!(err, TrucoError::IllegalState(IllegalState::HandNotConcluded));
    assert_eq!(err.to_string(), "illegal state: current hand has not concluded");
}

#[test]
fn test_finished_match_rejects_everything() {
    let (mut game, _) = stacked_match(
        MatchConfig::new().with_eleven_rule(false),
        [first_wins()],
        Seat::new("Ana", 11),
        Seat::new("Bruno", 0),
    );
    play_out(&mut game);
    game.update_scores().unwrap();
    let terminal = game.intel().clone();

    let finished = TrucoError::IllegalState(IllegalState::MatchFinished);
    assert_eq!(game.prepare_new_hand().unwrap_err(), finished);
    assert_eq!(game.update_scores().unwrap_err(), finished);
    assert_eq!(game.decline(P1).unwrap_err(), finished);
    assert_eq!(game.intel(), &terminal);
}
