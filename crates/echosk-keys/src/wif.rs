use echosk_types::Network;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::error::KeyError;

/// A Base58Check-encoded private key plus the checksum it carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wif {
    /// The Base58Check string.
    pub encoded: String,
    /// The 4-byte double-SHA256 checksum embedded in the encoding.
    pub checksum: [u8; 4],
}

/// Decoded WIF payload, for verification and tests.
#[derive(Debug, PartialEq, Eq)]
pub struct DecodedWif {
    pub network: Network,
    pub priv_bytes: [u8; 32],
    pub compressed: bool,
}

impl Drop for DecodedWif {
    fn drop(&mut self) {
        self.priv_bytes.zeroize();
    }
}

/// Encode a private scalar in Wallet Import Format.
///
/// Payload: version byte (mainnet `0x80` / testnet `0xEF`) ‖ 32 scalar
/// bytes ‖ optional `0x01` compression marker, followed by the first four
/// bytes of `sha256(sha256(payload))`. `bs58` preserves leading zero bytes
/// as leading `'1'` characters per the Base58Check rule.
pub fn encode(priv_bytes: &[u8; 32], network: Network, compressed: bool) -> Wif {
    let mut payload = Vec::with_capacity(38);
    payload.push(network.wif_version());
    payload.extend_from_slice(priv_bytes);
    if compressed {
        payload.push(0x01);
    }
    let checksum = checksum4(&payload);
    payload.extend_from_slice(&checksum);
    let encoded = bs58::encode(&payload).into_string();
    payload.zeroize();
    Wif { encoded, checksum }
}

/// Decode and verify a WIF string back into its payload.
pub fn decode(wif: &str) -> Result<DecodedWif, KeyError> {
    let bytes = bs58::decode(wif)
        .into_vec()
        .map_err(|e| KeyError::InvalidWif(e.to_string()))?;
    if bytes.len() < 37 {
        return Err(KeyError::InvalidWif("payload too short".into()));
    }
    let (payload, checksum) = bytes.split_at(bytes.len() - 4);
    if checksum4(payload) != checksum {
        return Err(KeyError::InvalidWif("checksum mismatch".into()));
    }
    let network = match payload[0] {
        0x80 => Network::Mainnet,
        0xEF => Network::Testnet,
        other => return Err(KeyError::InvalidWif(format!("unknown version byte {other:#04x}"))),
    };
    let compressed = match payload.len() {
        33 => false,
        34 if payload[33] == 0x01 => true,
        _ => return Err(KeyError::InvalidWif("unexpected payload length".into())),
    };
    let mut priv_bytes = [0u8; 32];
    priv_bytes.copy_from_slice(&payload[1..33]);
    Ok(DecodedWif {
        network,
        priv_bytes,
        compressed,
    })
}

/// First four bytes of `sha256(sha256(payload))`.
fn checksum4(payload: &[u8]) -> [u8; 4] {
    let first = Sha256::digest(payload);
    let second = Sha256::digest(first);
    let mut out = [0u8; 4];
    out.copy_from_slice(&second[..4]);
    out
}
