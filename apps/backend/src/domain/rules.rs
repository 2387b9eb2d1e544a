pub const PLAYERS: usize = 4;
pub const HAND_SIZE: usize = 13;
pub const DECK_SIZE: usize = PLAYERS * HAND_SIZE;

/// Passes needed before the lead opens a fresh trick.
pub const PASSES_FOR_NEW_LEAD: usize = PLAYERS - 1;

/// Remaining-card thresholds for the x4 and x2 penalty multipliers.
pub const DRAGON_THRESHOLD: u8 = 13;
pub const HEAVY_THRESHOLD: u8 = 10;

pub const DEFAULT_TARGET_ROUNDS: u32 = 25;
pub const DEFAULT_BASE_SCORE: u32 = 25;

/// Combination sizes that can be played.
pub const PLAY_SIZES: [usize; 4] = [1, 2, 3, 5];
