//! MultiversX account addresses.
//!
//! An address is 32 raw bytes on the wire and a bech32 string with the
//! `erd` prefix for humans. Turning bytes into text never fails: a value
//! that can't be encoded is rendered as [`INVALID_ADDRESS`], so a single
//! bad field doesn't abort decoding of an otherwise valid record.

use std::fmt;
use std::str::FromStr;

use bech32::{FromBase32, ToBase32, Variant};
use tracing::warn;

use crate::error::{Error, Result};

pub const ADDRESS_LEN: usize = 32;
pub const ADDRESS_HRP: &str = "erd";
pub const INVALID_ADDRESS: &str = "invalid";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn zero() -> Self {
        Self([0u8; ADDRESS_LEN])
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|_| {
            Error::InvalidAddress(format!("expected {} bytes, got {}", ADDRESS_LEN, bytes.len()))
        })?;
        Ok(Self(raw))
    }

    pub fn from_bech32(s: &str) -> Result<Self> {
        let (hrp, data, variant) = bech32::decode(s)?;
        if hrp != ADDRESS_HRP {
            return Err(Error::InvalidAddress(format!("unexpected prefix: {}", hrp)));
        }
        if variant != Variant::Bech32 {
            return Err(Error::InvalidAddress("bech32m is not used for addresses".into()));
        }
        let bytes = Vec::<u8>::from_base32(&data)?;
        Self::from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    pub fn to_bech32(&self) -> String {
        bytes_to_bech32(&self.0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// Render raw address bytes as bech32, falling back to [`INVALID_ADDRESS`].
pub fn bytes_to_bech32(bytes: &[u8]) -> String {
    if bytes.len() != ADDRESS_LEN {
        warn!("Cannot convert {} bytes to an address", bytes.len());
        return INVALID_ADDRESS.into();
    }
    bech32::encode(ADDRESS_HRP, bytes.to_base32(), Variant::Bech32).unwrap_or_else(|e| {
        warn!("Failed to encode address {}: {}", hex::encode(bytes), e);
        INVALID_ADDRESS.into()
    })
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_bech32())
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bech32(s)
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_bech32(&s).map_err(serde::de::Error::custom)
    }
}
