use primitive_types::U256;
use serde::de::Error as SerdeError;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use std::{
    convert::TryInto,
    fmt::{Display, Error, Formatter},
    str::FromStr,
};

pub const HASH_SIZE: usize = 32; // 32 bytes / 256 bits

#[derive(Eq, PartialEq, PartialOrd, Ord, Clone, Debug, Hash)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    pub const fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    pub const fn zero() -> Self {
        Hash::new([0; HASH_SIZE])
    }

    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; HASH_SIZE] {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Interpret the hash as a big-endian 256-bit integer
    pub fn to_u256(&self) -> U256 {
        U256::from_big_endian(&self.0)
    }
}

impl FromStr for Hash {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|_| "Invalid hex string")?;
        let bytes: [u8; HASH_SIZE] = bytes.try_into().map_err(|_| "Invalid hash")?;
        Ok(Hash::new(bytes))
    }
}

// Hash a byte array using keccak256
#[inline(always)]
pub fn keccak256(value: &[u8]) -> Hash {
    let mut result = [0u8; HASH_SIZE];
    result.copy_from_slice(&Keccak256::digest(value));
    Hash(result)
}

/// ABI-encode a list of uint256 values (each as a 32-byte big-endian word)
pub fn abi_encode_words(values: &[U256]) -> Vec<u8> {
    let mut data = Vec::with_capacity(values.len() * 32);
    for value in values {
        data.extend_from_slice(&value.to_big_endian());
    }
    data
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Hash {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", &self.to_hex())
    }
}

impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'a> Deserialize<'a> for Hash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let hex = String::deserialize(deserializer)?;
        Hash::from_str(&hex).map_err(SerdeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak_of_empty_input() {
        // Well-known keccak256("")
        assert_eq!(
            keccak256(b"").to_hex(),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_abi_encode_words_layout() {
        let data = abi_encode_words(&[U256::from(1u64), U256::from(0x0203u64)]);
        assert_eq!(data.len(), 64);
        assert_eq!(data[31], 1);
        assert_eq!(&data[62..], &[0x02, 0x03]);
        assert!(data[..31].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_hash_hex_parse_accepts_prefix() {
        let hash = keccak256(b"fantasy");
        let with_prefix = format!("0x{}", hash.to_hex());
        assert_eq!(Hash::from_str(&with_prefix), Ok(hash.clone()));
        assert_eq!(Hash::from_str(&hash.to_hex()), Ok(hash));
        assert!(Hash::from_str("abcd").is_err());
    }
}
