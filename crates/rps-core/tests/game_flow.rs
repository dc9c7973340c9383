//! End-to-end game flow against the in-memory ledger.

use rps_core::{
    commit, Address, Game, GameError, Ledger, MockLedger, Move, Payout, Reveal, Salt,
};
use std::sync::Arc;

const BLIND: u64 = 5;

fn setup() -> (MockLedger, Arc<Game>, Address, Address) {
    let ledger = MockLedger::new();
    let alice = Address::from_label("alice");
    let bob = Address::from_label("bob");
    ledger.fund(alice, BLIND);
    ledger.fund(bob, BLIND);
    let game = Arc::new(Game::new(BLIND, Arc::new(ledger.clone())));
    (ledger, game, alice, bob)
}

/// Alice plays Rock, Bob plays Paper; Bob takes the pot exactly once
#[tokio::test]
async fn test_rock_vs_paper_pays_bob() {
    let (ledger, game, alice, bob) = setup();

    let alice_salt = Salt::from_text("alice").unwrap();
    let bob_salt = Salt::from_text("bob").unwrap();

    game.play(alice, commit(Move::Rock, &alice_salt), BLIND)
        .await
        .unwrap();
    game.play(bob, commit(Move::Paper, &bob_salt), BLIND)
        .await
        .unwrap();
    assert_eq!(game.pot().await, 10);
    assert_eq!(ledger.escrowed(), 10);

    let a = Reveal::new(alice, Move::Rock, alice_salt);
    let b = Reveal::new(bob, Move::Paper, bob_salt);

    assert_eq!(game.evaluate(&a, &b).await.unwrap(), Some(bob));

    let payout = game.claim(&a, &b).await.unwrap();
    assert_eq!(
        payout,
        Payout {
            winner: bob,
            amount: 10
        }
    );
    assert_eq!(game.pot().await, 0);
    assert_eq!(ledger.balance(&bob).await.unwrap(), 10);
    assert_eq!(ledger.balance(&alice).await.unwrap(), 0);
    assert_eq!(ledger.escrowed(), 0);

    assert_eq!(game.claim(&a, &b).await.unwrap_err(), GameError::EmptyPot);
    assert_eq!(ledger.balance(&bob).await.unwrap(), 10);
}

/// Many simultaneous claims: one is paid, the rest see an empty pot
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_claims_pay_once() {
    let (ledger, game, alice, bob) = setup();

    let alice_salt = Salt::random();
    let bob_salt = Salt::random();
    game.play(alice, commit(Move::Scissors, &alice_salt), BLIND)
        .await
        .unwrap();
    game.play(bob, commit(Move::Paper, &bob_salt), BLIND)
        .await
        .unwrap();

    let a = Reveal::new(alice, Move::Scissors, alice_salt);
    let b = Reveal::new(bob, Move::Paper, bob_salt);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let game = Arc::clone(&game);
            let (a, b) = (a.clone(), b.clone());
            tokio::spawn(async move { game.claim(&a, &b).await })
        })
        .collect();

    let mut paid = 0;
    let mut empty = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(payout) => {
                assert_eq!(payout.winner, alice);
                paid += 1;
            }
            Err(GameError::EmptyPot) => empty += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(paid, 1);
    assert_eq!(empty, 15);
    assert_eq!(ledger.balance(&alice).await.unwrap(), 10);
}

/// A tie leaves the pot in escrow for good
#[tokio::test]
async fn test_tie_keeps_pot() {
    let (_, game, alice, bob) = setup();

    let alice_salt = Salt::random();
    let bob_salt = Salt::random();
    game.play(alice, commit(Move::Paper, &alice_salt), BLIND)
        .await
        .unwrap();
    game.play(bob, commit(Move::Paper, &bob_salt), BLIND)
        .await
        .unwrap();

    let a = Reveal::new(alice, Move::Paper, alice_salt);
    let b = Reveal::new(bob, Move::Paper, bob_salt);

    assert_eq!(game.evaluate(&a, &b).await.unwrap(), None);
    assert_eq!(game.claim(&a, &b).await.unwrap_err(), GameError::NoWinner);
    assert_eq!(game.pot().await, 10);
}

/// Once paid, the game refuses new stakes and never settles again
#[tokio::test]
async fn test_settled_game_stays_closed() {
    let (ledger, game, alice, bob) = setup();
    let carol = Address::from_label("carol");
    ledger.fund(carol, BLIND);

    let alice_salt = Salt::from_text("alice").unwrap();
    let bob_salt = Salt::from_text("bob").unwrap();
    game.play(alice, commit(Move::Rock, &alice_salt), BLIND)
        .await
        .unwrap();
    game.play(bob, commit(Move::Paper, &bob_salt), BLIND)
        .await
        .unwrap();

    let a = Reveal::new(alice, Move::Rock, alice_salt);
    let b = Reveal::new(bob, Move::Paper, bob_salt);
    let first = game.claim(&a, &b).await.unwrap();
    assert_eq!(first.amount, 10);

    let carol_salt = Salt::from_text("carol").unwrap();
    assert_eq!(
        game.play(carol, commit(Move::Scissors, &carol_salt), BLIND)
            .await
            .unwrap_err(),
        GameError::GameSettled
    );
    assert_eq!(ledger.balance(&carol).await.unwrap(), BLIND);
    assert_eq!(game.pot().await, 0);

    assert_eq!(game.claim(&a, &b).await.unwrap_err(), GameError::EmptyPot);
    assert_eq!(ledger.balance(&bob).await.unwrap(), 10);
    assert_eq!(ledger.escrowed(), 0);
    assert_eq!(game.snapshot().await.payout, Some(first));
}
