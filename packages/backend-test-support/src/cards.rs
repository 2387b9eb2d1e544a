//! Hand-built card layouts, as `"<value><suit>"` tokens (`"3D"`, `"TS"`, `"2S"`).

/// A full 52-card deal. Seat 0 holds the 3 of diamonds and a low straight;
/// seat 3 holds every 2 and ace.
pub const FULL_DEAL: [[&str; 13]; 4] = [
    [
        "3D", "4C", "5H", "6S", "7D", "8C", "9H", "TS", "JD", "QC", "KH", "3S", "4D",
    ],
    [
        "3C", "4H", "5S", "6D", "7C", "8H", "9S", "TD", "JC", "QH", "KS", "5D", "6C",
    ],
    [
        "3H", "4S", "5C", "6H", "7S", "8D", "9C", "TH", "JS", "QD", "KC", "7H", "8S",
    ],
    [
        "2D", "2C", "2H", "2S", "AD", "AC", "AH", "AS", "9D", "TC", "JH", "QS", "KD",
    ],
];

/// Seat 0 leads its last two cards while seat 1 can beat the lower one.
pub const ENDGAME_GAMBLE: [&[&str]; 4] = [
    &["4D", "9S"],
    &["6C", "8H", "JC"],
    &["5S", "7D", "TH"],
    &["3C", "QH", "KD"],
];

/// A lone 2 on the table, and four of a kind that blows it up.
pub const LONE_TWO_TABLE: [&str; 1] = ["2S"];
pub const QUADS_ANSWER: [&str; 5] = ["9C", "9D", "9H", "9S", "4C"];

/// Concatenate the four hands of a layout, in seat order.
pub fn all_tokens<const N: usize>(hands: &[[&'static str; N]; 4]) -> Vec<&'static str> {
    hands.iter().flat_map(|hand| hand.iter().copied()).collect()
}
