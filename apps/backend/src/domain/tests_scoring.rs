use crate::domain::scoring::{
    multiplier, multiplier_label, score_bomb_round, score_round, SeatCount, Standings,
};

#[test]
fn multiplier_thresholds() {
    assert_eq!(multiplier(0), 1);
    assert_eq!(multiplier(9), 1);
    assert_eq!(multiplier(10), 2);
    assert_eq!(multiplier(12), 2);
    assert_eq!(multiplier(13), 4);
    assert_eq!(multiplier_label(4), "Dragon (x4)");
    assert_eq!(multiplier_label(2), "Heavy (x2)");
    assert_eq!(multiplier_label(1), "x1");
    assert_eq!(multiplier_label(0), "-");
}

#[test]
fn dragon_penalty_goes_to_the_winner() {
    let players = [
        SeatCount::new(0, 0),
        SeatCount::new(1, 13),
        SeatCount::new(2, 3),
        SeatCount::new(3, 11),
    ];
    let results = score_round(&players, 25, 0);
    assert_eq!(results[1].penalty, 13 * 25 * 4);
    assert_eq!(results[2].penalty, 75);
    assert_eq!(results[3].penalty, 11 * 25 * 2);
    assert_eq!(results[0].net_score, 1300 + 75 + 550);
    assert!(results[0].is_winner);
}

#[test]
fn bomb_round_marks_culprit_and_zeroes_innocents() {
    let results = score_bomb_round(
        SeatCount::new(1, 1),
        SeatCount::new(2, 4),
        &[SeatCount::new(0, 5), SeatCount::new(3, 10)],
        25,
    );
    assert_eq!(results.iter().map(|r| r.seat).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    assert_eq!(results[1].net_score, -(25 + 125 + 500));
    assert!(results[1].is_culprit);
    assert_eq!(results[2].net_score, 650);
    assert_eq!(results[2].multiplier, 0);
    assert_eq!(results[0].net_score, 0);
    assert_eq!(results[3].net_score, 0);
}

#[test]
fn ranking_orders_by_total_then_wins_then_seat() {
    let standings = Standings {
        totals: [100, 250, 100, -450],
        wins: [1, 2, 3, 0],
    };
    assert_eq!(standings.ranking(), vec![1, 2, 0, 3]);

    let tied = Standings::default();
    assert_eq!(tied.ranking(), vec![0, 1, 2, 3]);
}
