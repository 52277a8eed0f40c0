use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use thub_core::address::Address;
use thub_core::error::{Error, Result};
use thub_core::transport::HubQueryT;
use thub_core::types::{GameConfigRecord, GameIndex, TournamentId, TournamentRecord, UserStatsRecord};

use crate::cache::QueryCache;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    Tournaments,
    Games,
}

/// The caches behind a [`CachedHub`], one per view.
pub struct HubCaches {
    pub tournaments: QueryCache<TournamentId, TournamentRecord>,
    pub game_configs: QueryCache<GameIndex, GameConfigRecord>,
    pub user_stats: QueryCache<Address, UserStatsRecord>,
    pub counters: QueryCache<Counter, u64>,
    pub tournament_ids: QueryCache<(), Vec<TournamentId>>,
    pub tournament_fee: QueryCache<(), u128>,
    pub house_fee: QueryCache<(), u32>,
}

impl HubCaches {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            tournaments: QueryCache::new(ttl),
            game_configs: QueryCache::new(ttl),
            user_stats: QueryCache::new(ttl),
            counters: QueryCache::new(ttl),
            tournament_ids: QueryCache::new(ttl),
            tournament_fee: QueryCache::new(ttl),
            house_fee: QueryCache::new(ttl),
        }
    }

    pub fn clear(&self) {
        self.tournaments.clear();
        self.game_configs.clear();
        self.user_stats.clear();
        self.counters.clear();
        self.tournament_ids.clear();
        self.tournament_fee.clear();
        self.house_fee.clear();
    }

    pub fn evict_expired(&self) -> usize {
        self.tournaments.evict_expired()
            + self.game_configs.evict_expired()
            + self.user_stats.evict_expired()
            + self.counters.evict_expired()
            + self.tournament_ids.evict_expired()
            + self.tournament_fee.evict_expired()
            + self.house_fee.evict_expired()
    }
}

enum Miss {
    Absent,
    Failed(Error),
}

async fn cached<K, V, Fut>(cache: &QueryCache<K, V>, key: K, fetch: Fut) -> Result<Option<V>>
where
    K: Eq + std::hash::Hash + Clone,
    V: Clone,
    Fut: Future<Output = Result<Option<V>>>,
{
    let r = cache
        .get_or_try_fetch(key, || async move {
            match fetch.await {
                Ok(Some(v)) => Ok(v),
                Ok(None) => Err(Miss::Absent),
                Err(e) => Err(Miss::Failed(e)),
            }
        })
        .await;
    match r {
        Ok(v) => Ok(Some(v)),
        Err(Miss::Absent) => Ok(None),
        Err(Miss::Failed(e)) => Err(e),
    }
}

/// Wraps a query transport with TTL caches.
///
/// Absent records are never cached, so an id probed before the
/// tournament exists is fetched again on the next call.
pub struct CachedHub {
    inner: Box<dyn HubQueryT>,
    caches: HubCaches,
}

impl CachedHub {
    pub fn new(inner: Box<dyn HubQueryT>, caches: HubCaches) -> Self {
        Self { inner, caches }
    }

    pub fn with_ttl(inner: Box<dyn HubQueryT>, ttl: Duration) -> Self {
        Self::new(inner, HubCaches::with_ttl(ttl))
    }

    pub fn caches(&self) -> &HubCaches {
        &self.caches
    }
}

#[async_trait]
impl HubQueryT for CachedHub {
    async fn get_tournament(&self, id: TournamentId) -> Result<Option<TournamentRecord>> {
        cached(&self.caches.tournaments, id, self.inner.get_tournament(id)).await
    }

    async fn get_game_config(&self, index: GameIndex) -> Result<Option<GameConfigRecord>> {
        cached(&self.caches.game_configs, index, self.inner.get_game_config(index)).await
    }

    async fn get_user_stats(&self, addr: &Address) -> Result<Option<UserStatsRecord>> {
        cached(&self.caches.user_stats, *addr, self.inner.get_user_stats(addr)).await
    }

    async fn get_number_of_tournaments(&self) -> Result<Option<u64>> {
        cached(
            &self.caches.counters,
            Counter::Tournaments,
            self.inner.get_number_of_tournaments(),
        )
        .await
    }

    async fn get_number_of_games(&self) -> Result<Option<u64>> {
        cached(&self.caches.counters, Counter::Games, self.inner.get_number_of_games()).await
    }

    async fn get_active_tournament_ids(&self) -> Result<Option<Vec<TournamentId>>> {
        cached(&self.caches.tournament_ids, (), self.inner.get_active_tournament_ids()).await
    }

    async fn get_tournament_fee(&self) -> Result<Option<u128>> {
        cached(&self.caches.tournament_fee, (), self.inner.get_tournament_fee()).await
    }

    async fn get_house_fee_percentage(&self) -> Result<Option<u32>> {
        cached(&self.caches.house_fee, (), self.inner.get_house_fee_percentage()).await
    }
}
