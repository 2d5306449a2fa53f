//! Minimal Solidity ABI encoding for the handful of calls the minter makes.

use alloy_primitives::{keccak256, Address, B256, U256};
use thiserror::Error;

const WORD: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    #[error("return data too short: expected {expected} bytes, got {actual}")]
    ShortOutput { expected: usize, actual: usize },

    #[error("uint256 value does not fit in {bits} bits")]
    UintOverflow { bits: u32 },

    #[error("address word has non-zero padding")]
    DirtyAddress,
}

/// A call argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Address(Address),
    String(String),
}

/// First four bytes of the Keccak-256 hash of a canonical function signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

fn uint_word(value: usize) -> [u8; WORD] {
    U256::from(value).to_be_bytes::<WORD>()
}

/// Encodes `selector(signature) ++ abi.encode(args)`.
pub fn encode_call(signature: &str, args: &[Token]) -> Vec<u8> {
    let head_len = args.len() * WORD;
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();

    for arg in args {
        match arg {
            Token::Address(address) => head.extend_from_slice(address.into_word().as_slice()),
            Token::String(text) => {
                head.extend_from_slice(&uint_word(head_len + tail.len()));
                tail.extend_from_slice(&uint_word(text.len()));
                tail.extend_from_slice(text.as_bytes());
                let padding = (WORD - text.len() % WORD) % WORD;
                tail.resize(tail.len() + padding, 0);
            }
        }
    }

    let mut data = Vec::with_capacity(4 + head.len() + tail.len());
    data.extend_from_slice(&selector(signature));
    data.extend_from_slice(&head);
    data.extend_from_slice(&tail);
    data
}

fn first_word(output: &[u8]) -> Result<B256, AbiError> {
    output
        .get(..WORD)
        .map(B256::from_slice)
        .ok_or(AbiError::ShortOutput {
            expected: WORD,
            actual: output.len(),
        })
}

/// Decodes a single `uint256` return value.
pub fn decode_uint(output: &[u8]) -> Result<U256, AbiError> {
    Ok(U256::from_be_bytes(first_word(output)?.0))
}

/// Decodes a single `uint256` return value that must fit in a `u128`, such as
/// a price in wei.
pub fn decode_amount(output: &[u8]) -> Result<u128, AbiError> {
    u128::try_from(decode_uint(output)?).map_err(|_| AbiError::UintOverflow { bits: 128 })
}

/// Decodes a single `uint256` return value that is expected to be a count.
pub fn decode_count(output: &[u8]) -> Result<u64, AbiError> {
    u64::try_from(decode_uint(output)?).map_err(|_| AbiError::UintOverflow { bits: 64 })
}

/// Decodes a single `address` return value.
pub fn decode_address(output: &[u8]) -> Result<Address, AbiError> {
    let word = first_word(output)?;
    if word[..12].iter().any(|b| *b != 0) {
        return Err(AbiError::DirtyAddress);
    }
    Ok(Address::from_word(word))
}
