// Ingest keys authenticate service-to-service metric submission.
//
// A key is minted once at registration and never shown again; the database
// keeps only its SHA-256 digest, which doubles as the equality-lookup column
// for verification. That lookup role is why the digest is unsalted: salting
// would break content addressing. Secrets that are not lookup keys
// (passwords) go through argon2 instead, see password.rs.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Marks a credential as a Watchpost ingest key
pub const INGEST_KEY_PREFIX: &str = "wpk_";

const KEY_BYTES: usize = 32;

/// A freshly minted ingest key. The raw `key` leaves the process exactly
/// once, in the registration response; everything else stores `key_hash`.
#[derive(Debug)]
pub struct GeneratedIngestKey {
    pub key: String,
    pub key_hash: String,
}

impl GeneratedIngestKey {
    /// Short non-secret form for logs: prefix plus the first few characters
    pub fn display_hint(&self) -> String {
        format!("{}...", &self.key[..INGEST_KEY_PREFIX.len() + 8])
    }
}

/// Mint an ingest key for a new organization
pub fn generate_ingest_key() -> GeneratedIngestKey {
    let mut bytes = [0u8; KEY_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);

    let key = format!("{}{}", INGEST_KEY_PREFIX, hex::encode(bytes));
    let key_hash = hash_ingest_key(&key);

    GeneratedIngestKey { key, key_hash }
}

/// Digest an ingest key for storage and lookup.
/// Deterministic: equal keys always collapse to the same digest.
pub fn hash_ingest_key(key: &str) -> String {
    hex::encode(Sha256::digest(key.as_bytes()))
}
