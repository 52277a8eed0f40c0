mod game_config;
mod status;
mod tournament;
mod user_stats;

pub use game_config::GameConfigRecord;
pub use status::TournamentStatus;
pub use tournament::TournamentRecord;
pub use user_stats::UserStatsRecord;

/// Identifier of a tournament, 1-based as assigned by the contract.
pub type TournamentId = u64;

/// Index of a registered game, 1-based as assigned by the contract.
pub type GameIndex = u64;
