//! Per-skill cooldown expiry tracking.
//!
//! Expiry is sampled, not pushed: the owner polls on a timer and reads the
//! remaining time for countdown display.

use chrono::Utc;
use std::collections::HashMap;

/// Wall clock in milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

/// Absolute expiry timestamps keyed by skill id.
///
/// A skill is usable iff it has no entry or its expiry is `<= now`.
#[derive(Debug, Clone, Default)]
pub struct CooldownTracker {
    expiries: HashMap<String, u64>,
}

impl CooldownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, skill_id: &str, cooldown_ms: u64, now: u64) {
        self.expiries
            .insert(skill_id.to_string(), now.saturating_add(cooldown_ms));
    }

    pub fn is_ready(&self, skill_id: &str, now: u64) -> bool {
        self.expiries
            .get(skill_id)
            .map_or(true, |&expiry| expiry <= now)
    }

    pub fn remaining_ms(&self, skill_id: &str, now: u64) -> u64 {
        self.expiries
            .get(skill_id)
            .map_or(0, |&expiry| expiry.saturating_sub(now))
    }

    /// Drops elapsed entries and returns their ids, sorted.
    pub fn poll(&mut self, now: u64) -> Vec<String> {
        let mut elapsed: Vec<String> = self
            .expiries
            .iter()
            .filter(|(_, &expiry)| expiry <= now)
            .map(|(id, _)| id.clone())
            .collect();
        for id in &elapsed {
            self.expiries.remove(id);
        }
        elapsed.sort();
        elapsed
    }

    /// Number of skills still tracked.
    pub fn active(&self) -> usize {
        self.expiries.len()
    }
}
