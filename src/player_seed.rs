use rand::SeedableRng;
use rand_pcg::Lcg64Xsh32;

/// Environment variable holding the session seed.
pub const SEED_ENV_VAR: &str = "GAME_SEED";

/// Expand a `u64` into the 16 byte PCG seed: two little-endian copies.
pub fn seed_bytes(seed: u64) -> [u8; 16] {
    let mut bytes: [u8; 16] = [0u8; 16];
    bytes[0..8].copy_from_slice(&seed.to_le_bytes());
    bytes[8..16].copy_from_slice(&seed.to_le_bytes());
    bytes
}

pub fn rng_from_seed(seed: u64) -> Lcg64Xsh32 {
    Lcg64Xsh32::from_seed(seed_bytes(seed))
}

/// Seed from `GAME_SEED`, or from the system clock when unset or unparsable.
pub fn initial_seed() -> u64 {
    match std::env::var(SEED_ENV_VAR) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(seed) => seed,
            Err(e) => {
                log::warn!("ignoring {}={:?}: {}", SEED_ENV_VAR, raw, e);
                clock_seed()
            }
        },
        Err(_) => clock_seed(),
    }
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Snapshot the RNG state as a JSON string.
pub fn snapshot_rng(rng: &Lcg64Xsh32) -> Result<String, String> {
    serde_json::to_string(rng).map_err(|e| e.to_string())
}

/// Restore an RNG from a snapshot produced by `snapshot_rng`.
pub fn restore_rng(snapshot: &str) -> Result<Lcg64Xsh32, String> {
    serde_json::from_str(snapshot).map_err(|e| e.to_string())
}
