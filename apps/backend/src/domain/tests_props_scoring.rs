/// Property-based tests for round settlement and standings
use proptest::prelude::*;

use crate::domain::scoring::{score_bomb_round, score_round, RoundRecord, SeatCount, Standings};
use crate::domain::{test_gens, test_prelude};

fn seat_counts(counts: [u8; 4]) -> Vec<SeatCount> {
    counts
        .iter()
        .enumerate()
        .map(|(seat, &n)| SeatCount::new(seat as u8, n))
        .collect()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: normal settlement is zero-sum and only the winner gains.
    #[test]
    fn prop_score_round_zero_sum(
        counts in test_gens::card_counts(),
        winner in test_gens::seat(),
        base in 1u32..=100,
    ) {
        let results = score_round(&seat_counts(counts), base, winner);
        prop_assert_eq!(results.len(), 4);
        prop_assert_eq!(results.iter().map(|r| r.net_score).sum::<i64>(), 0);
        for r in &results {
            if r.seat == winner {
                prop_assert!(r.is_winner);
                prop_assert_eq!(r.multiplier, 0);
            } else {
                prop_assert!(r.net_score <= 0);
            }
        }
    }

    /// Property: bomb settlement is zero-sum and innocents are untouched.
    #[test]
    fn prop_score_bomb_round_zero_sum(
        counts in test_gens::card_counts(),
        culprit in test_gens::seat(),
        step in 1u8..4,
        base in 1u32..=100,
    ) {
        let winner = (culprit + step) % 4;
        let all = seat_counts(counts);
        let innocents: Vec<SeatCount> = all
            .iter()
            .copied()
            .filter(|c| c.seat != culprit && c.seat != winner)
            .collect();
        let results = score_bomb_round(all[culprit as usize], all[winner as usize], &innocents, base);

        prop_assert_eq!(results.iter().map(|r| r.net_score).sum::<i64>(), 0);
        for r in &results {
            if r.seat != culprit && r.seat != winner {
                prop_assert_eq!(r.net_score, 0);
            }
        }
    }

    /// Property: standings are the column sums of the round history.
    #[test]
    fn prop_standings_match_history(
        rounds in proptest::collection::vec((test_gens::card_counts(), test_gens::seat()), 0..10),
    ) {
        let history: Vec<RoundRecord> = rounds
            .iter()
            .enumerate()
            .map(|(i, (counts, winner))| RoundRecord {
                round_no: i as u32 + 1,
                winner: *winner,
                bomb: None,
                results: score_round(&seat_counts(*counts), 25, *winner),
            })
            .collect();

        let standings = Standings::from_history(&history);
        prop_assert_eq!(standings.totals.iter().sum::<i64>(), 0);
        prop_assert_eq!(standings.wins.iter().sum::<u32>() as usize, history.len());
        for seat in 0..4 {
            let expected: i64 = history
                .iter()
                .flat_map(|r| r.results.iter())
                .filter(|r| r.seat as usize == seat)
                .map(|r| r.net_score)
                .sum();
            prop_assert_eq!(standings.totals[seat], expected);
        }
    }
}
