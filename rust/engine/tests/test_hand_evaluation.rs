use blackjack_engine::cards::{Card, Face, FACES};
use blackjack_engine::hand::{evaluate, hard_total, Hand};

fn cards(faces: &[Face]) -> Vec<Card> {
    faces.iter().copied().map(Card::new).collect()
}

/// Every hand of `len` cards over the 13 faces.
fn all_hands(len: usize) -> Vec<Vec<Card>> {
    let mut hands: Vec<Vec<Card>> = vec![vec![]];
    for _ in 0..len {
        let mut next = Vec::with_capacity(hands.len() * FACES.len());
        for h in &hands {
            for &f in FACES.iter() {
                let mut h2 = h.clone();
                h2.push(Card::new(f));
                next.push(h2);
            }
        }
        hands = next;
    }
    hands
}

#[test]
fn hands_without_aces_are_hard() {
    for len in 1..=3 {
        for hand in all_hands(len).into_iter().filter(|h| h.iter().all(|c| !c.is_ace())) {
            let v = evaluate(&hand);
            assert!(!v.usable_ace, "{:?}", hand);
            assert_eq!(v.total, hard_total(&hand));
        }
    }
}

#[test]
fn single_ace_with_small_remainder_is_soft() {
    for len in 0..=3 {
        for rest in all_hands(len).into_iter().filter(|h| h.iter().all(|c| !c.is_ace())) {
            let remainder = hard_total(&rest);
            let mut hand = rest.clone();
            hand.push(Card::new(Face::Ace));
            let v = evaluate(&hand);
            if remainder <= 10 {
                assert!(v.usable_ace, "{:?}", hand);
                assert_eq!(v.total, remainder + 11);
            } else {
                assert!(!v.usable_ace, "{:?}", hand);
                assert_eq!(v.total, remainder + 1);
            }
        }
    }
}

#[test]
fn ace_position_does_not_change_the_value() {
    let front = evaluate(&cards(&[Face::Ace, Face::Five, Face::Four]));
    let back = evaluate(&cards(&[Face::Five, Face::Four, Face::Ace]));
    assert_eq!(front, back);
    assert_eq!(front.total, 20);
    assert!(front.usable_ace);
}

#[test]
fn evaluator_agrees_with_hard_sum_rule_on_all_short_hands() {
    // usable ace <=> holds an ace and the hard sum is below 12
    for len in 1..=4 {
        for hand in all_hands(len) {
            let hard = hard_total(&hand);
            let has_ace = hand.iter().any(Card::is_ace);
            let expected_usable = has_ace && hard < 12;
            let v = evaluate(&hand);
            assert_eq!(v.usable_ace, expected_usable, "{:?}", hand);
            let expected_total = if expected_usable { hard + 10 } else { hard };
            assert_eq!(v.total, expected_total, "{:?}", hand);
        }
    }
}

#[test]
fn total_never_exceeds_21_when_a_non_bust_total_exists() {
    for hand in all_hands(3) {
        let v = evaluate(&hand);
        if hard_total(&hand) <= 21 {
            assert!(v.total <= 21, "{:?}", hand);
        } else {
            assert_eq!(v.total, hard_total(&hand));
        }
    }
}

#[test]
fn many_aces_accumulated_by_hits() {
    let v = evaluate(&cards(&[Face::Ace, Face::Ace, Face::Ace, Face::Ace]));
    assert_eq!(v.total, 14);
    assert!(v.usable_ace);

    let v = evaluate(&cards(&[Face::Ace, Face::Ace, Face::Ace, Face::Ace, Face::Eight]));
    assert_eq!(v.total, 12);
    assert!(!v.usable_ace);
}

#[test]
fn hand_wraps_the_evaluator() {
    let mut hand = Hand::new();
    hand.push(Card::new(Face::King));
    hand.push(Card::new(Face::Seven));
    assert_eq!(hand.total(), 17);
    assert!(!hand.is_bust());
    hand.push(Card::new(Face::Five));
    assert_eq!(hand.total(), 22);
    assert!(hand.is_bust());
}
