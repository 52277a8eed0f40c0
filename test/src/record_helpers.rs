use crate::constants::*;
use base64::{engine::general_purpose, Engine as _};
use thub_core::address::Address;
use thub_core::codec::HexEncode;
use thub_core::types::{GameConfigRecord, TournamentRecord, TournamentStatus};

/// A distinct address per index, for building fixtures.
pub fn player_addr(idx: u8) -> Address {
    Address::new([idx.wrapping_add(1); 32])
}

pub fn server_addr() -> Address {
    Address::new([0x5e; 32])
}

/// The base64 `returnData` a contract would send for this record.
pub fn record_to_base64<T: HexEncode>(record: &T) -> String {
    let bytes = hex::decode(record.to_hex()).expect("writer emits valid hex");
    general_purpose::STANDARD.encode(bytes)
}

pub struct TestTournamentBuilder {
    record: TournamentRecord,
}

impl Default for TestTournamentBuilder {
    fn default() -> Self {
        let record = TournamentRecord {
            game_id: 1,
            status: TournamentStatus::Joining,
            participants: vec![],
            final_podium: vec![],
            creator: player_addr(0),
        };
        TestTournamentBuilder { record }
    }
}

impl TestTournamentBuilder {
    pub fn with_game_id(mut self, game_id: u64) -> Self {
        self.record.game_id = game_id;
        self
    }

    pub fn with_status(mut self, status: TournamentStatus) -> Self {
        self.record.status = status;
        self
    }

    pub fn with_creator(mut self, creator: Address) -> Self {
        self.record.creator = creator;
        self
    }

    pub fn add_participant(mut self, addr: Address) -> Self {
        self.record.participants.push(addr);
        self
    }

    /// Set the podium and mark the tournament completed.
    pub fn with_podium(mut self, podium: Vec<Address>) -> Self {
        self.record.final_podium = podium;
        self.record.status = TournamentStatus::Completed;
        self
    }

    pub fn build(self) -> TournamentRecord {
        self.record
    }
}

pub struct TestGameConfigBuilder {
    record: GameConfigRecord,
}

impl Default for TestGameConfigBuilder {
    fn default() -> Self {
        let record = GameConfigRecord {
            signing_server_address: server_addr(),
            podium_size: DEFAULT_PRIZE_DISTRIBUTION.len() as u32,
            prize_distribution_percentages: DEFAULT_PRIZE_DISTRIBUTION.to_vec(),
            house_fee_percentage: DEFAULT_HOUSE_FEE,
            allow_late_join: false,
        };
        TestGameConfigBuilder { record }
    }
}

impl TestGameConfigBuilder {
    pub fn with_prize_distribution(mut self, percentages: Vec<u32>) -> Self {
        self.record.podium_size = percentages.len() as u32;
        self.record.prize_distribution_percentages = percentages;
        self
    }

    pub fn with_house_fee(mut self, fee: u32) -> Self {
        self.record.house_fee_percentage = fee;
        self
    }

    pub fn allow_late_join(mut self, allow: bool) -> Self {
        self.record.allow_late_join = allow;
        self
    }

    pub fn build(self) -> GameConfigRecord {
        self.record
    }
}
