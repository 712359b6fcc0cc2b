//! Identifier generation for newly created records

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Produces a fresh identifier on every call
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random 32-character lowercase hex identifiers (UUID v4, no hyphens)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Monotonic decimal identifiers, useful for deterministic tests and demos
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Start counting at `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}
