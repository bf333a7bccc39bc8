//! Fixed-width bridge payload codec
//!
//! An outbound bridge intent is serialized as five 32-byte big-endian words,
//! the same layout `abi.encode(bytes32, uint256, address, uint256, uint256)`
//! produces on an EVM chain. There is no length prefix and no delimiter.
//!
//! # Byte Layout (160 bytes total)
//! - Bytes 0-31:    version (UTF-8, right-padded with zero bytes)
//! - Bytes 32-63:   chain_id (uint256, big-endian, left-padded)
//! - Bytes 64-95:   sender (20-byte address, left-padded)
//! - Bytes 96-127:  amount (uint256, big-endian)
//! - Bytes 128-159: nonce (uint256, big-endian, left-padded)

use cosmwasm_std::Uint256;
use thiserror::Error;

/// Width of a single encoded word
pub const WORD_LEN: usize = 32;

/// Number of words in an encoded payload
pub const WORD_COUNT: usize = 5;

/// Total encoded payload length
pub const PAYLOAD_LEN: usize = WORD_LEN * WORD_COUNT;

/// Length of an EVM-style sender address
pub const ADDRESS_LEN: usize = 20;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PayloadError {
    #[error("invalid payload length: expected {PAYLOAD_LEN} bytes, got {got}")]
    InvalidLength { got: usize },

    #[error("version is {len} bytes, at most {WORD_LEN} fit in a word")]
    VersionTooLong { len: usize },

    #[error("version must not end with a zero byte")]
    VersionTrailingNul,

    #[error("version is not valid UTF-8")]
    VersionNotUtf8,

    #[error("{field} occupies more than {max_bits} bits")]
    WordOverflow { field: &'static str, max_bits: u32 },
}

/// Cross-chain value transfer intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgePayload {
    pub version: String,
    pub chain_id: u64,
    pub sender: [u8; ADDRESS_LEN],
    pub amount: Uint256,
    pub nonce: u64,
}

impl BridgePayload {
    /// Check that every field fits its word.
    ///
    /// `amount`, `chain_id` and `nonce` are bounded by their types, so only
    /// the version string can be out of range.
    pub fn validate(&self) -> Result<(), PayloadError> {
        validate_version(&self.version)
    }

    /// Encode into the fixed 160-byte layout.
    pub fn encode(&self) -> Result<[u8; PAYLOAD_LEN], PayloadError> {
        self.validate()?;

        let mut data = [0u8; PAYLOAD_LEN];

        // word0: version, right-padded
        let version = self.version.as_bytes();
        data[..version.len()].copy_from_slice(version);

        // word1: chain_id, u64 goes into the last 8 bytes
        data[WORD_LEN * 2 - 8..WORD_LEN * 2].copy_from_slice(&self.chain_id.to_be_bytes());

        // word2: sender, 20 bytes in the last 20 bytes
        data[WORD_LEN * 3 - ADDRESS_LEN..WORD_LEN * 3].copy_from_slice(&self.sender);

        // word3: amount, full width
        data[WORD_LEN * 3..WORD_LEN * 4].copy_from_slice(&self.amount.to_be_bytes());

        // word4: nonce
        data[PAYLOAD_LEN - 8..].copy_from_slice(&self.nonce.to_be_bytes());

        Ok(data)
    }

    /// Decode a payload produced by [`BridgePayload::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, PayloadError> {
        if bytes.len() != PAYLOAD_LEN {
            return Err(PayloadError::InvalidLength { got: bytes.len() });
        }

        let words: Vec<&[u8]> = bytes.chunks_exact(WORD_LEN).collect();

        let version_end = words[0]
            .iter()
            .rposition(|b| *b != 0)
            .map(|pos| pos + 1)
            .unwrap_or(0);
        let version = std::str::from_utf8(&words[0][..version_end])
            .map_err(|_| PayloadError::VersionNotUtf8)?
            .to_string();
        validate_version(&version)?;

        let chain_id = read_u64(words[1], "chain_id")?;

        let sender_word = words[2];
        if sender_word[..WORD_LEN - ADDRESS_LEN].iter().any(|b| *b != 0) {
            return Err(PayloadError::WordOverflow {
                field: "sender",
                max_bits: (ADDRESS_LEN * 8) as u32,
            });
        }
        let mut sender = [0u8; ADDRESS_LEN];
        sender.copy_from_slice(&sender_word[WORD_LEN - ADDRESS_LEN..]);

        let mut amount = [0u8; WORD_LEN];
        amount.copy_from_slice(words[3]);

        let nonce = read_u64(words[4], "nonce")?;

        Ok(Self {
            version,
            chain_id,
            sender,
            amount: Uint256::from_be_bytes(amount),
            nonce,
        })
    }
}

/// Check that `version` fits word0 and survives the zero-padding round trip.
pub fn validate_version(version: &str) -> Result<(), PayloadError> {
    let len = version.len();
    if len > WORD_LEN {
        return Err(PayloadError::VersionTooLong { len });
    }
    // Decoding strips trailing zero bytes as padding
    if version.as_bytes().last() == Some(&0) {
        return Err(PayloadError::VersionTrailingNul);
    }
    Ok(())
}

fn read_u64(word: &[u8], field: &'static str) -> Result<u64, PayloadError> {
    if word[..WORD_LEN - 8].iter().any(|b| *b != 0) {
        return Err(PayloadError::WordOverflow {
            field,
            max_bits: 64,
        });
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&word[WORD_LEN - 8..]);
    Ok(u64::from_be_bytes(buf))
}
