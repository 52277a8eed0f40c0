pub use crate::address::{Address, INVALID_ADDRESS};
pub use crate::codec::{HexDecode, HexEncode, HexReader, HexWriter};
pub use crate::decoder::{decode_game_config, decode_tournament, decode_user_stats};
pub use crate::error::{Error, Result};
pub use crate::transport::HubQueryT;
pub use crate::types::{
    GameConfigRecord, GameIndex, TournamentId, TournamentRecord, TournamentStatus, UserStatsRecord,
};
