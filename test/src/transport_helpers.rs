use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use thub_core::address::Address;
use thub_core::error::{Error, Result};
use thub_core::transport::HubQueryT;
use thub_core::types::{GameConfigRecord, GameIndex, TournamentId, TournamentRecord, UserStatsRecord};

#[derive(Default)]
struct DummyState {
    tournaments: HashMap<TournamentId, TournamentRecord>,
    game_configs: HashMap<GameIndex, GameConfigRecord>,
    user_stats: HashMap<Address, UserStatsRecord>,
    counters: Option<(u64, u64)>,
    fees: Option<(u128, u32)>,
    fail_next: bool,
}

/// In-memory query transport. Clones share state, so a test can keep a
/// handle while the transport is boxed inside something else.
#[derive(Clone, Default)]
pub struct DummyHub {
    state: Arc<Mutex<DummyState>>,
    calls: Arc<AtomicUsize>,
}

impl DummyHub {
    fn state(&self) -> MutexGuard<'_, DummyState> {
        self.state.lock().unwrap()
    }

    /// Count the call and fail it if a failure was requested.
    fn begin(&self) -> Result<MutexGuard<'_, DummyState>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state();
        if state.fail_next {
            state.fail_next = false;
            return Err(Error::TransportError("simulated failure".into()));
        }
        Ok(state)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn fail_next(&self) {
        self.state().fail_next = true;
    }

    pub fn simulate_tournament(&self, id: TournamentId, record: TournamentRecord) {
        self.state().tournaments.insert(id, record);
    }

    pub fn simulate_game_config(&self, index: GameIndex, record: GameConfigRecord) {
        self.state().game_configs.insert(index, record);
    }

    pub fn simulate_user_stats(&self, addr: Address, record: UserStatsRecord) {
        self.state().user_stats.insert(addr, record);
    }

    pub fn simulate_counters(&self, tournaments: u64, games: u64) {
        self.state().counters = Some((tournaments, games));
    }

    pub fn simulate_fees(&self, tournament_fee: u128, house_fee_percentage: u32) {
        self.state().fees = Some((tournament_fee, house_fee_percentage));
    }
}

#[async_trait]
impl HubQueryT for DummyHub {
    async fn get_tournament(&self, id: TournamentId) -> Result<Option<TournamentRecord>> {
        Ok(self.begin()?.tournaments.get(&id).cloned())
    }

    async fn get_game_config(&self, index: GameIndex) -> Result<Option<GameConfigRecord>> {
        Ok(self.begin()?.game_configs.get(&index).cloned())
    }

    async fn get_user_stats(&self, addr: &Address) -> Result<Option<UserStatsRecord>> {
        Ok(self.begin()?.user_stats.get(addr).cloned())
    }

    async fn get_number_of_tournaments(&self) -> Result<Option<u64>> {
        Ok(self.begin()?.counters.map(|(t, _)| t))
    }

    async fn get_number_of_games(&self) -> Result<Option<u64>> {
        Ok(self.begin()?.counters.map(|(_, g)| g))
    }

    async fn get_active_tournament_ids(&self) -> Result<Option<Vec<TournamentId>>> {
        let mut ids: Vec<TournamentId> = self.begin()?.tournaments.keys().copied().collect();
        ids.sort_unstable();
        Ok(Some(ids))
    }

    async fn get_tournament_fee(&self) -> Result<Option<u128>> {
        Ok(self.begin()?.fees.map(|(fee, _)| fee))
    }

    async fn get_house_fee_percentage(&self) -> Result<Option<u32>> {
        Ok(self.begin()?.fees.map(|(_, pct)| pct))
    }
}
