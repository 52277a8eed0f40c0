#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codec::{HexDecode, HexEncode, HexReader, HexWriter};
use crate::error::Result;

/// Rating assigned to players who have never finished a tournament.
pub const DEFAULT_TELO_RATING: u32 = 1500;

/// Per-player statistics from the `getUserStats` view, used by leaderboards.
///
/// Token amounts are big unsigned integers on chain; values wider than
/// 128 bits are rejected when decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UserStatsRecord {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: u32,
    pub tokens_won: u128,
    pub tokens_spent: u128,
    pub tournaments_created: u32,
    pub tournaments_won: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub last_activity: u64,
    pub member_since: u64,
    pub telo_rating: u32,
}

impl Default for UserStatsRecord {
    fn default() -> Self {
        Self {
            games_played: 0,
            wins: 0,
            losses: 0,
            win_rate: 0,
            tokens_won: 0,
            tokens_spent: 0,
            tournaments_created: 0,
            tournaments_won: 0,
            current_streak: 0,
            best_streak: 0,
            last_activity: 0,
            member_since: 0,
            telo_rating: DEFAULT_TELO_RATING,
        }
    }
}

impl UserStatsRecord {
    /// Tokens won minus tokens spent, negative for a net loss.
    pub fn net_tokens(&self) -> i128 {
        let won = i128::try_from(self.tokens_won).unwrap_or(i128::MAX);
        let spent = i128::try_from(self.tokens_spent).unwrap_or(i128::MAX);
        won.saturating_sub(spent)
    }
}

impl HexDecode for UserStatsRecord {
    fn decode_from(reader: &mut HexReader<'_>) -> Result<Self> {
        Ok(Self {
            games_played: reader.read_u32()?,
            wins: reader.read_u32()?,
            losses: reader.read_u32()?,
            win_rate: reader.read_u32()?,
            tokens_won: reader.read_biguint()?,
            tokens_spent: reader.read_biguint()?,
            tournaments_created: reader.read_u32()?,
            tournaments_won: reader.read_u32()?,
            current_streak: reader.read_u32()?,
            best_streak: reader.read_u32()?,
            last_activity: reader.read_u64()?,
            member_since: reader.read_u64()?,
            telo_rating: reader.read_u32()?,
        })
    }
}

impl HexEncode for UserStatsRecord {
    fn encode_to(&self, writer: &mut HexWriter) {
        writer
            .write_u32(self.games_played)
            .write_u32(self.wins)
            .write_u32(self.losses)
            .write_u32(self.win_rate)
            .write_biguint(self.tokens_won)
            .write_biguint(self.tokens_spent)
            .write_u32(self.tournaments_created)
            .write_u32(self.tournaments_won)
            .write_u32(self.current_streak)
            .write_u32(self.best_streak)
            .write_u64(self.last_activity)
            .write_u64(self.member_since)
            .write_u32(self.telo_rating);
    }
}
