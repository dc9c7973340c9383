//! Hex encoding for fixed-size byte arrays.

use super::CodecError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Decode a hex string, with or without a `0x` prefix, into exactly `N` bytes
pub(crate) fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], CodecError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let bytes = hex::decode(digits).map_err(|_| CodecError::InvalidHex)?;
    bytes
        .try_into()
        .map_err(|v: Vec<u8>| CodecError::InvalidLength {
            expected: N,
            actual: v.len(),
        })
}

pub(crate) fn serialize<S: Serializer, const N: usize>(
    bytes: &[u8; N],
    s: S,
) -> Result<S::Ok, S::Error> {
    hex::encode(bytes).serialize(s)
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>, const N: usize>(
    d: D,
) -> Result<[u8; N], D::Error> {
    let hex_str = String::deserialize(d)?;
    decode_fixed(&hex_str).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_accepts_prefix() {
        let a: [u8; 2] = decode_fixed("0xabcd").unwrap();
        let b: [u8; 2] = decode_fixed("abcd").unwrap();
        assert_eq!(a, [0xab, 0xcd]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let err = decode_fixed::<4>("abcd").unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidLength {
                expected: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        assert_eq!(decode_fixed::<1>("zz").unwrap_err(), CodecError::InvalidHex);
    }
}
