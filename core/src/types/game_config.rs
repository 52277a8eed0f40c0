#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::codec::{HexDecode, HexEncode, HexReader, HexWriter};
use crate::error::Result;

/// Basis points in one hundred percent.
pub const BASIS_POINTS: u32 = 10_000;

/// Configuration of a registered game, from the `getGameConfig` view.
///
/// Percentages are in basis points, e.g. `[5000, 3000, 2000]` splits the
/// prize pool 50/30/20 across the podium.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameConfigRecord {
    pub signing_server_address: Address,
    pub podium_size: u32,
    pub prize_distribution_percentages: Vec<u32>,
    pub house_fee_percentage: u32,
    pub allow_late_join: bool,
}

impl GameConfigRecord {
    /// Whether the prize split covers exactly the whole pool.
    pub fn is_distribution_complete(&self) -> bool {
        self.prize_distribution_percentages
            .iter()
            .try_fold(0u32, |acc, p| acc.checked_add(*p))
            == Some(BASIS_POINTS)
    }
}

impl HexDecode for GameConfigRecord {
    fn decode_from(reader: &mut HexReader<'_>) -> Result<Self> {
        Ok(Self {
            signing_server_address: reader.read_address()?,
            podium_size: reader.read_u32()?,
            prize_distribution_percentages: reader.read_u32_list()?,
            house_fee_percentage: reader.read_u32()?,
            allow_late_join: reader.read_bool()?,
        })
    }
}

impl HexEncode for GameConfigRecord {
    fn encode_to(&self, writer: &mut HexWriter) {
        writer
            .write_address(&self.signing_server_address)
            .write_u32(self.podium_size)
            .write_u32_list(&self.prize_distribution_percentages)
            .write_u32(self.house_fee_percentage)
            .write_bool(self.allow_late_join);
    }
}
