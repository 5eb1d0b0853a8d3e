use serde::{Deserialize, Serialize};

/// Non-secret provenance record for a derived key, embedded in ledger entries.
///
/// Carries enough material to prove which namespaced derivation produced an
/// entry's key without ever exposing the private scalar: the Ethereum
/// address, the WIF's leading characters and checksum, and a one-way
/// fingerprint digest of the private key bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFingerprint {
    /// Derivation namespace (the `<namespace>` in the HKDF info string).
    pub namespace: String,
    /// Derivation index within the namespace.
    pub index: u32,
    /// Lowercase `0x`-prefixed Ethereum address of the derived public key.
    pub eth_address: String,
    /// First four characters of the Base58Check WIF string.
    pub btc_wif_prefix: String,
    /// Hex-encoded 4-byte Base58Check checksum of the WIF payload.
    pub btc_wif_checksum: String,
    /// Hex SHA-256 digest over the domain-tagged private key bytes.
    /// Never the raw private key.
    pub priv_fingerprint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KeyFingerprint {
        KeyFingerprint {
            namespace: "core".into(),
            index: 0,
            eth_address: "0x2e22f4b1ac0028bf9cc5710449e6ed888d30ec68".into(),
            btc_wif_prefix: "L2tA".into(),
            btc_wif_checksum: "0a1b2c3d".into(),
            priv_fingerprint: "ab".repeat(32),
        }
    }

    #[test]
    fn serde_roundtrip() {
        let fp = sample();
        let json = serde_json::to_string(&fp).unwrap();
        let parsed: KeyFingerprint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, fp);
    }

    #[test]
    fn never_contains_raw_key_field() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("priv_hex"));
        assert!(!obj.contains_key("private_key"));
    }
}
