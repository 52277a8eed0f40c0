//! This crate contains the basics of the tournament hub client
//! - Record types returned by the contract views
//! - Hex decoder and reference encoder for return data
//! - Address conversion
//! - Query interface implemented by transports

pub mod address;
pub mod codec;
pub mod decoder;
pub mod error;
pub mod prelude;
pub mod transport;
pub mod types;
