//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON line per match plus the CSV summary
    Jsonl,
    /// CSV summary only
    Csv,
}

/// Player kinds, named as in the backend's player registry.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlayerKind {
    Zombie,
    Random,
    Greedy,
}

impl PlayerKind {
    pub fn name(&self) -> &'static str {
        match self {
            PlayerKind::Zombie => "zombie",
            PlayerKind::Random => "random",
            PlayerKind::Greedy => "greedy",
        }
    }
}
