//! Hex cursor over contract return data.
//!
//! Values are laid out field by field, big-endian, without padding.
//! Nested lists carry a `u32` element count. [`HexReader`] walks the
//! input once from left to right, [`HexWriter`] produces the same
//! layout and is used to build view arguments and fixtures.

use crate::address::{Address, ADDRESS_LEN};
use crate::error::{Error, Result};

const U8_CHARS: usize = 2;
const U32_CHARS: usize = 8;
const U64_CHARS: usize = 16;
const ADDRESS_CHARS: usize = ADDRESS_LEN * 2;

/// Maximum significant bytes of a big unsigned integer that fit in `u128`.
const U128_BYTES: usize = 16;

pub trait HexDecode: Sized {
    fn decode_from(reader: &mut HexReader<'_>) -> Result<Self>;
}

pub trait HexEncode {
    fn encode_to(&self, writer: &mut HexWriter);

    fn to_hex(&self) -> String {
        let mut writer = HexWriter::default();
        self.encode_to(&mut writer);
        writer.into_hex()
    }
}

#[derive(Debug, Clone)]
pub struct HexReader<'a> {
    hex: &'a str,
    pos: usize,
}

impl<'a> HexReader<'a> {
    /// Validate the whole input up front, so later reads only fail on length.
    pub fn new(hex: &'a str) -> Result<Self> {
        if hex.len() % 2 != 0 {
            return Err(Error::Malformed(format!("odd hex length {}", hex.len())));
        }
        if let Some((i, c)) = hex.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
            return Err(Error::Malformed(format!("invalid hex character {:?} at {}", c, i)));
        }
        Ok(Self { hex, pos: 0 })
    }

    /// Number of hex characters consumed so far.
    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.hex.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos == self.hex.len()
    }

    fn take(&mut self, chars: usize) -> Result<&'a str> {
        let remaining = self.remaining();
        if chars > remaining {
            return Err(Error::Truncated {
                needed: chars,
                remaining,
            });
        }
        let s = &self.hex[self.pos..self.pos + chars];
        self.pos += chars;
        Ok(s)
    }

    fn ensure(&self, chars: usize) -> Result<()> {
        let remaining = self.remaining();
        if chars > remaining {
            Err(Error::Truncated {
                needed: chars,
                remaining,
            })
        } else {
            Ok(())
        }
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let chars = len.checked_mul(2).ok_or(Error::Overflow)?;
        Ok(hex::decode(self.take(chars)?)?)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let s = self.take(U8_CHARS)?;
        u8::from_str_radix(s, 16).map_err(|e| Error::Malformed(e.to_string()))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let s = self.take(U32_CHARS)?;
        u32::from_str_radix(s, 16).map_err(|e| Error::Malformed(e.to_string()))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let s = self.take(U64_CHARS)?;
        u64::from_str_radix(s, 16).map_err(|e| Error::Malformed(e.to_string()))
    }

    /// Any byte other than `01` reads as false.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.take(U8_CHARS)? == "01")
    }

    pub fn read_address(&mut self) -> Result<Address> {
        let mut raw = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(self.take(ADDRESS_CHARS)?, &mut raw)?;
        Ok(Address::new(raw))
    }

    pub fn read_address_list(&mut self) -> Result<Vec<Address>> {
        let len = self.read_u32()? as usize;
        // Check the whole list fits before allocating for a bogus count
        self.ensure(len.saturating_mul(ADDRESS_CHARS))?;
        let mut addrs = Vec::with_capacity(len);
        for _ in 0..len {
            addrs.push(self.read_address()?);
        }
        Ok(addrs)
    }

    pub fn read_u32_list(&mut self) -> Result<Vec<u32>> {
        let len = self.read_u32()? as usize;
        self.ensure(len.saturating_mul(U32_CHARS))?;
        let mut values = Vec::with_capacity(len);
        for _ in 0..len {
            values.push(self.read_u32()?);
        }
        Ok(values)
    }

    /// A nested big unsigned integer: `u32` byte length, then big-endian magnitude.
    pub fn read_biguint(&mut self) -> Result<u128> {
        let len = self.read_u32()? as usize;
        let bytes = self.read_bytes(len)?;
        be_bytes_to_u128(&bytes)
    }

    /// A top-encoded `u64` occupies the rest of the input, leading zeros stripped.
    pub fn read_top_u64(&mut self) -> Result<u64> {
        let bytes = self.read_bytes(self.remaining() / 2)?;
        let value = be_bytes_to_u128(&bytes)?;
        u64::try_from(value).map_err(|_| Error::Overflow)
    }

    pub fn read_top_biguint(&mut self) -> Result<u128> {
        let bytes = self.read_bytes(self.remaining() / 2)?;
        be_bytes_to_u128(&bytes)
    }
}

fn be_bytes_to_u128(bytes: &[u8]) -> Result<u128> {
    let significant = match bytes.iter().position(|b| *b != 0) {
        Some(i) => &bytes[i..],
        None => return Ok(0),
    };
    if significant.len() > U128_BYTES {
        return Err(Error::Overflow);
    }
    Ok(significant
        .iter()
        .fold(0u128, |acc, b| (acc << 8) | u128::from(*b)))
}

fn u128_to_minimal_be(value: u128) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    bytes[first..].to_vec()
}

#[derive(Debug, Default, Clone)]
pub struct HexWriter {
    buf: String,
}

impl HexWriter {
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_hex(self) -> String {
        self.buf
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.push_str(&hex::encode(bytes));
        self
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buf.push_str(&format!("{:02x}", value));
        self
    }

    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        self.buf.push_str(&format!("{:08x}", value));
        self
    }

    pub fn write_u64(&mut self, value: u64) -> &mut Self {
        self.buf.push_str(&format!("{:016x}", value));
        self
    }

    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        self.write_u8(u8::from(value))
    }

    pub fn write_address(&mut self, addr: &Address) -> &mut Self {
        self.write_bytes(addr.as_bytes())
    }

    pub fn write_address_list(&mut self, addrs: &[Address]) -> &mut Self {
        self.write_u32(addrs.len() as u32);
        for addr in addrs {
            self.write_address(addr);
        }
        self
    }

    pub fn write_u32_list(&mut self, values: &[u32]) -> &mut Self {
        self.write_u32(values.len() as u32);
        for v in values {
            self.write_u32(*v);
        }
        self
    }

    pub fn write_biguint(&mut self, value: u128) -> &mut Self {
        let bytes = u128_to_minimal_be(value);
        self.write_u32(bytes.len() as u32);
        self.write_bytes(&bytes)
    }

    /// Minimal big-endian encoding, as used for view arguments and single-value results.
    pub fn write_top_u64(&mut self, value: u64) -> &mut Self {
        self.write_bytes(&u128_to_minimal_be(u128::from(value)))
    }
}

/// Hex argument for an integer view parameter such as a tournament id.
pub fn encode_top_u64(value: u64) -> String {
    let mut writer = HexWriter::default();
    writer.write_top_u64(value);
    writer.into_hex()
}
