//! Short identifier allocation
//!
//! Identifiers are drawn uniformly from `[A-Za-z0-9]` and rejected while they
//! collide with one already stored. There is no retry cap: 62^6 candidates
//! dwarf any table this service is meant to hold.

use rand::{distr::Alphanumeric, Rng};
use tracing::debug;

/// Length of every generated short identifier
pub const SHORT_ID_LEN: usize = 6;

/// Draws one candidate identifier of `len` characters
pub fn generate_short_id<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

/// Draws candidates until `is_taken` reports one as free
///
/// `is_taken` is the uniqueness probe, normally a lookup in the same write
/// transaction that will persist the result. Errors from the probe abort the
/// loop.
pub fn allocate<R, F, E>(rng: &mut R, len: usize, mut is_taken: F) -> Result<String, E>
where
    R: Rng,
    F: FnMut(&str) -> Result<bool, E>,
{
    let mut attempts: u64 = 1;
    loop {
        let candidate = generate_short_id(rng, len);
        if !is_taken(&candidate)? {
            return Ok(candidate);
        }

        debug!(candidate = %candidate, attempts, "short id collision, drawing again");
        attempts += 1;
    }
}

/// True when `id` has the shape of a generated identifier
pub fn is_valid_short_id(id: &str) -> bool {
    id.len() == SHORT_ID_LEN && id.bytes().all(|b| b.is_ascii_alphanumeric())
}
