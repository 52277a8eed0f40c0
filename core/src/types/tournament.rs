#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::codec::{HexDecode, HexEncode, HexReader, HexWriter};
use crate::error::Result;
use crate::types::TournamentStatus;

/// A tournament as returned by the `getTournament` view.
///
/// Only the leading fields are decoded. Deployed contracts append more
/// (limits, entry fee, name, timestamps) after `creator` and the layout of
/// that tail has changed between deployments.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TournamentRecord {
    pub game_id: u64,
    pub status: TournamentStatus,
    pub participants: Vec<Address>,
    /// Ranked finishers, winner first.
    pub final_podium: Vec<Address>,
    pub creator: Address,
}

impl TournamentRecord {
    pub fn has_participant(&self, addr: &Address) -> bool {
        self.participants.contains(addr)
    }

    pub fn winner(&self) -> Option<&Address> {
        self.final_podium.first()
    }
}

impl HexDecode for TournamentRecord {
    fn decode_from(reader: &mut HexReader<'_>) -> Result<Self> {
        let game_id = reader.read_u64()?;
        let status = TournamentStatus::from(reader.read_u8()?);
        let participants = reader.read_address_list()?;
        let final_podium = reader.read_address_list()?;
        let creator = reader.read_address()?;
        Ok(Self {
            game_id,
            status,
            participants,
            final_podium,
            creator,
        })
    }
}

impl HexEncode for TournamentRecord {
    fn encode_to(&self, writer: &mut HexWriter) {
        writer
            .write_u64(self.game_id)
            .write_u8(self.status.into())
            .write_address_list(&self.participants)
            .write_address_list(&self.final_podium)
            .write_address(&self.creator);
    }
}
