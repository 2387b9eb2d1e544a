/// Property-based tests for combination classification and the play comparator
use proptest::prelude::*;

use crate::domain::cards_logic::{can_beat, legal_plays};
use crate::domain::combos::{classify, ComboKind};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: five-card sets land in exactly one five-card kind (or invalid),
    /// never a small kind.
    #[test]
    fn prop_five_cards_classify_to_five_card_kind(cards in test_gens::unique_cards(5)) {
        let kind = classify(&cards).kind;
        prop_assert!(matches!(
            kind,
            ComboKind::Straight
                | ComboKind::Flush
                | ComboKind::FullHouse
                | ComboKind::FourOfAKind
                | ComboKind::StraightFlush
                | ComboKind::Invalid
        ));
    }

    /// Property: straight ∧ flush is always reported as a straight flush.
    #[test]
    fn prop_straight_flush_wins_priority(start in 0usize..=8, suit in test_gens::suit()) {
        let cards: Vec<_> = (0..5)
            .map(|k| crate::domain::Card::new(crate::domain::Rank::ALL[start + k], suit))
            .collect();
        prop_assert_eq!(classify(&cards).kind, ComboKind::StraightFlush);
    }

    /// Property: classification is invariant under reordering.
    #[test]
    fn prop_classify_order_invariant(
        cards in test_gens::play(),
        rotation in 0usize..5,
    ) {
        let mut shuffled = cards.clone();
        shuffled.reverse();
        let len = shuffled.len();
        shuffled.rotate_left(rotation % len);
        prop_assert_eq!(classify(&cards), classify(&shuffled));
    }

    /// Property: any valid play opens an empty table, and nothing beats itself.
    #[test]
    fn prop_empty_table_and_self(cards in test_gens::play()) {
        let combo = classify(&cards);
        prop_assert_eq!(can_beat(&cards, &[]), combo.is_valid());
        prop_assert!(!can_beat(&cards, &cards));
    }

    /// Property: four of a kind beats every straight.
    #[test]
    fn prop_bombs_beat_straights(
        straight in test_gens::straight(),
        quads in test_gens::four_of_a_kind(),
    ) {
        prop_assert_eq!(classify(&quads).kind, ComboKind::FourOfAKind);
        prop_assert!(can_beat(&quads, &straight));
        prop_assert!(!can_beat(&straight, &quads));
    }

    /// Property: pairs compare by their higher card and never answer a single.
    #[test]
    fn prop_pairs(a in test_gens::pair(), b in test_gens::pair()) {
        let (ca, cb) = (classify(&a), classify(&b));
        prop_assert_eq!(ca.kind, ComboKind::Pair);
        prop_assert_eq!(can_beat(&a, &b), ca.rank > cb.rank);
        prop_assert!(!can_beat(&a, &b[..1]));
    }

    /// Property: every enumerated legal play beats the table.
    #[test]
    fn prop_legal_plays_are_legal(
        cards in test_gens::unique_cards(14),
    ) {
        let (table, hand) = cards.split_at(1);
        for play in legal_plays(hand, table, false) {
            prop_assert!(play.iter().all(|c| hand.contains(c)));
            prop_assert!(crate::domain::cards_logic::beats_table(&play, table));
        }
    }
}
