//! Cache module for storing endpoint payloads on disk
//!
//! Payloads are keyed by a request fingerprint and stamped with the time they
//! were written. Entries past the TTL count as stale but are still handed out
//! as a fallback when the endpoint cannot be reached.

mod manager;

pub use manager::{CacheEntry, CacheError, CacheManager, DEFAULT_TTL_HOURS};
