//! Entry points for decoding view-function return values.
//!
//! Each function takes the hex form of `returnData[0]`. Structural errors
//! always surface; nothing here returns a zeroed or partial record.

use tracing::trace;

use crate::codec::{HexDecode, HexReader};
use crate::error::{Error, Result};
use crate::types::{GameConfigRecord, TournamentRecord, UserStatsRecord};

const U64_CHARS: usize = 16;

fn decode_record<T: HexDecode>(hex: &str, name: &str) -> Result<T> {
    let mut reader = HexReader::new(hex)?;
    let record = T::decode_from(&mut reader)?;
    if !reader.is_exhausted() {
        trace!(
            "Ignored {} trailing hex chars after {} at offset {}",
            reader.remaining(),
            name,
            reader.offset()
        );
    }
    Ok(record)
}

pub fn decode_tournament(hex: &str) -> Result<TournamentRecord> {
    decode_record(hex, "tournament")
}

pub fn decode_game_config(hex: &str) -> Result<GameConfigRecord> {
    decode_record(hex, "game config")
}

pub fn decode_user_stats(hex: &str) -> Result<UserStatsRecord> {
    decode_record(hex, "user stats")
}

/// Decode a single top-encoded integer, e.g. `getNumberOfTournaments`.
pub fn decode_top_u64(hex: &str) -> Result<u64> {
    HexReader::new(hex)?.read_top_u64()
}

/// Decode a single top-encoded `u32`, e.g. `getHouseFeePercentage`.
pub fn decode_top_u32(hex: &str) -> Result<u32> {
    u32::try_from(decode_top_u64(hex)?).map_err(|_| Error::Overflow)
}

/// Decode a single top-encoded big integer, e.g. `getTournamentFee`.
pub fn decode_top_biguint(hex: &str) -> Result<u128> {
    HexReader::new(hex)?.read_top_biguint()
}

/// Decode a top-level list of `u64`, which carries no length prefix.
pub fn decode_u64_list(hex: &str) -> Result<Vec<u64>> {
    let mut reader = HexReader::new(hex)?;
    let rem = reader.remaining() % U64_CHARS;
    if rem != 0 {
        return Err(Error::Truncated {
            needed: U64_CHARS,
            remaining: rem,
        });
    }
    let mut values = Vec::with_capacity(reader.remaining() / U64_CHARS);
    while !reader.is_exhausted() {
        values.push(reader.read_u64()?);
    }
    Ok(values)
}
