use crate::{
    address::Address,
    error::Result,
    types::{GameConfigRecord, GameIndex, TournamentId, TournamentRecord, UserStatsRecord},
};
use async_trait::async_trait;
use std::marker::Send;

/// Read access to the tournament hub contract.
///
/// A record that can't be fetched resolves to `Ok(None)`: callers probe
/// ids that may not exist yet. `Err` is reserved for a payload that was
/// returned but can't be decoded.
#[async_trait]
pub trait HubQueryT: Send + Sync {
    async fn get_tournament(&self, id: TournamentId) -> Result<Option<TournamentRecord>>;

    async fn get_game_config(&self, index: GameIndex) -> Result<Option<GameConfigRecord>>;

    async fn get_user_stats(&self, addr: &Address) -> Result<Option<UserStatsRecord>>;

    async fn get_number_of_tournaments(&self) -> Result<Option<u64>>;

    async fn get_number_of_games(&self) -> Result<Option<u64>>;

    async fn get_active_tournament_ids(&self) -> Result<Option<Vec<TournamentId>>>;

    /// Entry fee of new tournaments, in the smallest EGLD denomination.
    async fn get_tournament_fee(&self) -> Result<Option<u128>>;

    /// House fee in basis points.
    async fn get_house_fee_percentage(&self) -> Result<Option<u32>>;
}
