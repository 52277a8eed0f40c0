use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lifecycle of a tournament.
///
/// Contract deployments haven't always agreed on the numbering, so a
/// discriminant outside the known range is kept as `Unknown` instead of
/// failing the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TournamentStatus {
    Joining,
    ReadyToStart,
    Active,
    ProcessingResults,
    Completed,
    Unknown(u8),
}

impl TournamentStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, TournamentStatus::Joining | TournamentStatus::ReadyToStart)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, TournamentStatus::Completed)
    }
}

impl From<u8> for TournamentStatus {
    fn from(value: u8) -> Self {
        match value {
            0 => TournamentStatus::Joining,
            1 => TournamentStatus::ReadyToStart,
            2 => TournamentStatus::Active,
            3 => TournamentStatus::ProcessingResults,
            4 => TournamentStatus::Completed,
            n => TournamentStatus::Unknown(n),
        }
    }
}

impl From<TournamentStatus> for u8 {
    fn from(value: TournamentStatus) -> Self {
        match value {
            TournamentStatus::Joining => 0,
            TournamentStatus::ReadyToStart => 1,
            TournamentStatus::Active => 2,
            TournamentStatus::ProcessingResults => 3,
            TournamentStatus::Completed => 4,
            TournamentStatus::Unknown(n) => n,
        }
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TournamentStatus::Joining => write!(f, "Joining"),
            TournamentStatus::ReadyToStart => write!(f, "Ready to start"),
            TournamentStatus::Active => write!(f, "Active"),
            TournamentStatus::ProcessingResults => write!(f, "Processing results"),
            TournamentStatus::Completed => write!(f, "Completed"),
            TournamentStatus::Unknown(n) => write!(f, "Unknown({})", n),
        }
    }
}
