use sha3::{Digest, Keccak256};

/// Ethereum address of an uncompressed SEC1 public key: the low 20 bytes of
/// `keccak256(pubkey[1..])`, lowercase hex with a `0x` prefix.
pub fn eth_address(uncompressed_pubkey: &[u8; 65]) -> String {
    let hash = Keccak256::digest(&uncompressed_pubkey[1..]);
    format!("0x{}", hex::encode(&hash[12..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_shape() {
        let pubkey = [0x04u8; 65];
        let addr = eth_address(&pubkey);
        assert!(addr.starts_with("0x"));
        assert_eq!(addr.len(), 42);
        assert!(addr[2..].chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(addr, addr.to_lowercase());
    }

    #[test]
    fn prefix_byte_is_excluded_from_hash() {
        // Same x/y with different (nonsensical) prefix bytes must collide,
        // proving only pubkey[1..] enters the hash.
        let mut a = [0x11u8; 65];
        let mut b = [0x11u8; 65];
        a[0] = 0x04;
        b[0] = 0x00;
        assert_eq!(eth_address(&a), eth_address(&b));
    }
}
