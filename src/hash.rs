//! BLAKE3 hashing utilities for managed-file baselines

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate BLAKE3 hash of in-memory content
pub fn hash_bytes(content: &[u8]) -> String {
    format!("{}{}", HASH_PREFIX, blake3::hash(content).to_hex())
}

/// Verify a hash matches the expected value
pub fn verify_hash(expected: &str, actual: &str) -> bool {
    // Hashes recorded without the prefix still compare equal
    let normalize = |h: &str| {
        if h.starts_with(HASH_PREFIX) {
            h.to_string()
        } else {
            format!("{HASH_PREFIX}{h}")
        }
    };

    normalize(expected) == normalize(actual)
}
