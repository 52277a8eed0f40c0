pub use crate::constants::*;
pub use crate::gateway_helpers::*;
pub use crate::record_helpers::*;
pub use crate::transport_helpers::*;

pub use thub_core::address::Address;
pub use thub_core::error::{Error, Result};
pub use thub_core::transport::HubQueryT;
pub use thub_core::types::{GameConfigRecord, TournamentRecord, TournamentStatus, UserStatsRecord};
