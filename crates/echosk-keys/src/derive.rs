use echosk_curve::{scalar_multiply, Point, Scalar};
use echosk_types::{KeyFingerprint, Network};
use hkdf::Hkdf;
use serde::Serialize;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::address::eth_address;
use crate::error::KeyError;
use crate::secret::Secret;
use crate::wif;

/// Fixed domain-separation salt shared by the scrypt and HKDF stages.
pub const DERIVATION_SALT: [u8; 32] = *b"EchoSK-deterministic-derive-salt";

/// scrypt work parameters: N = 2^14, r = 8, p = 1.
const SCRYPT_LOG_N: u8 = 14;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;

/// Domain tag for the private-key fingerprint digest.
const FINGERPRINT_DOMAIN: &[u8] = b"EchoSK-fpr:";

/// Public outputs of a derivation — the stable contract consumers see.
///
/// `priv_hex` is the one secret-bearing field; it is zeroed when the value
/// drops, and callers must not persist it (the ledger only ever embeds the
/// [`KeyFingerprint`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DerivedKey {
    /// 64 lowercase hex characters of the private scalar.
    pub priv_hex: String,
    /// Lowercase `0x`-prefixed Ethereum address.
    pub eth_address: String,
    /// Base58Check WIF string.
    pub btc_wif: String,
    /// Which network's WIF version byte was used.
    pub btc_network: Network,
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.priv_hex.zeroize();
    }
}

/// A derived key together with the non-secret fingerprint the ledger embeds.
#[derive(Clone, Debug)]
pub struct Derivation {
    pub key: DerivedKey,
    pub fingerprint: KeyFingerprint,
}

/// Derive a key deterministically from `(secret, namespace, index)`.
///
/// Pure computation: no I/O, no clock, no randomness. Calling twice with
/// identical inputs yields bit-identical outputs; changing any one of the
/// secret, namespace, or index changes the private scalar.
pub fn derive(
    secret: &Secret,
    namespace: &str,
    index: u32,
    network: Network,
    compressed: bool,
) -> Result<Derivation, KeyError> {
    // 1. Strengthen the secret with a memory-hard stretch.
    let mut strengthened = [0u8; 32];
    let params = scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, strengthened.len())
        .map_err(|e| KeyError::Stretch(e.to_string()))?;
    scrypt::scrypt(
        secret.as_bytes(),
        &DERIVATION_SALT,
        &params,
        &mut strengthened,
    )
    .map_err(|e| KeyError::Stretch(e.to_string()))?;

    // 2. Namespaced expansion.
    let info = format!("EchoSK::{namespace}::{index}");
    let hk = Hkdf::<Sha256>::new(Some(&DERIVATION_SALT), &strengthened);
    let mut okm = [0u8; 32];
    let expanded = hk.expand(info.as_bytes(), &mut okm);
    strengthened.zeroize();
    expanded.map_err(|e| KeyError::Expand(e.to_string()))?;

    // 3. Map to a scalar; the degenerate zero scalar coerces to one.
    let mut scalar = Scalar::from_be_bytes_reduced(&okm);
    okm.zeroize();
    if scalar.is_zero() {
        scalar = Scalar::ONE;
    }

    // 4. Public point, uncompressed encoding.
    let public = scalar_multiply(&scalar, &Point::GENERATOR)?;
    let pub_bytes = public.to_uncompressed_bytes()?;

    // 5/6. Address and WIF encodings.
    let eth = eth_address(&pub_bytes);
    let mut priv_bytes = scalar.to_be_bytes();
    let wif = wif::encode(&priv_bytes, network, compressed);
    let priv_hex = hex::encode(priv_bytes);
    let priv_fingerprint = fingerprint_digest(&priv_bytes);
    priv_bytes.zeroize();

    let fingerprint = KeyFingerprint {
        namespace: namespace.to_string(),
        index,
        eth_address: eth.clone(),
        btc_wif_prefix: wif.encoded.chars().take(4).collect(),
        btc_wif_checksum: hex::encode(wif.checksum),
        priv_fingerprint,
    };

    Ok(Derivation {
        key: DerivedKey {
            priv_hex,
            eth_address: eth,
            btc_wif: wif.encoded,
            btc_network: network,
        },
        fingerprint,
    })
}

/// One-way fingerprint of the private key bytes, domain-tagged so it can
/// never be confused with any other SHA-256 use in the system.
fn fingerprint_digest(priv_bytes: &[u8; 32]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(FINGERPRINT_DOMAIN);
    hasher.update(priv_bytes);
    hex::encode(hasher.finalize())
}
