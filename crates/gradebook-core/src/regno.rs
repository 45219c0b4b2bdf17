//! Registration number generators.
//!
//! Registration numbers are display-facing codes, not identifiers: lookup and
//! equality always go through `StudentId`. The stock generator draws a random
//! 4-digit suffix and does not check for collisions against existing codes,
//! so two students can share a registration number. The trait exists so a
//! collision-checked generator can be substituted without touching the roster.

use std::sync::atomic::{AtomicU32, Ordering};

/// Lowest 4-digit suffix (inclusive).
pub const REG_NO_MIN: u32 = 1000;
/// Highest 4-digit suffix (inclusive).
pub const REG_NO_MAX: u32 = 9999;

pub trait RegNoGenerator {
    /// Produce a fresh registration number, e.g. `STU4821`.
    fn generate(&self) -> String;
}

/// Prefix plus a uniform random suffix in [1000, 9999], independent each call.
#[derive(Debug, Clone)]
pub struct RandomRegNo {
    prefix: String,
}

impl RandomRegNo {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl RegNoGenerator for RandomRegNo {
    fn generate(&self) -> String {
        use rand::Rng as _;
        let mut rng = rand::thread_rng();
        format!("{}{}", self.prefix, rng.gen_range(REG_NO_MIN..=REG_NO_MAX))
    }
}

/// Deterministic generator for tests and demos: counts up from 1000.
#[derive(Debug)]
pub struct SequentialRegNo {
    prefix: String,
    next: AtomicU32,
}

impl SequentialRegNo {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU32::new(REG_NO_MIN),
        }
    }
}

impl RegNoGenerator for SequentialRegNo {
    fn generate(&self) -> String {
        let suffix = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, suffix)
    }
}
