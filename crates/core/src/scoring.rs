//! Scoring module - lock scoring and best-score helpers

use crate::types::{CHAIN_BONUS, LOCK_BASE_SCORE};

/// Bonus for clearing `chain` rows with one lock
///
/// Chains past the table (not reachable with four-cell pieces) fall back to
/// `chain * 100`.
pub fn chain_bonus(chain: usize) -> u32 {
    match CHAIN_BONUS.get(chain) {
        Some(&bonus) => bonus,
        None => (chain as u32).saturating_mul(100),
    }
}

/// Points for one lock: the baseline plus the chain bonus
pub fn lock_score(chain: usize) -> u32 {
    LOCK_BASE_SCORE.saturating_add(chain_bonus(chain))
}

/// `best` raised to `score` when exceeded
pub fn raise_best(best: u32, score: u32) -> u32 {
    best.max(score)
}
