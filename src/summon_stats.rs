use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug)]
pub struct SummonStats {
    ghosts_summoned: AtomicU64,
    sampler_attempts: AtomicU64,
    upstream_errors: AtomicU64,
    exhausted: AtomicU64,
}

impl Default for SummonStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SummonStats {
    pub const fn new() -> Self {
        Self {
            ghosts_summoned: AtomicU64::new(0),
            sampler_attempts: AtomicU64::new(0),
            upstream_errors: AtomicU64::new(0),
            exhausted: AtomicU64::new(0),
        }
    }

    pub fn inc_ghosts_summoned(&self, n: u64) {
        self.ghosts_summoned.fetch_add(n, Ordering::Relaxed);
    }

    pub fn inc_sampler_attempts(&self, n: u64) {
        self.sampler_attempts.fetch_add(n, Ordering::Relaxed);
    }

    pub fn inc_upstream_errors(&self, n: u64) {
        self.upstream_errors.fetch_add(n, Ordering::Relaxed);
    }

    pub fn inc_exhausted(&self, n: u64) {
        self.exhausted.fetch_add(n, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> SummonSnapshot {
        SummonSnapshot {
            ghosts_summoned: self.ghosts_summoned.load(Ordering::Relaxed),
            sampler_attempts: self.sampler_attempts.load(Ordering::Relaxed),
            upstream_errors: self.upstream_errors.load(Ordering::Relaxed),
            exhausted: self.exhausted.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct SummonSnapshot {
    pub ghosts_summoned: u64,
    pub sampler_attempts: u64,
    pub upstream_errors: u64,
    pub exhausted: u64,
}

pub static SUMMON_STATS: SummonStats = SummonStats::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_increments() {
        let stats = SummonStats::new();
        stats.inc_ghosts_summoned(2);
        stats.inc_sampler_attempts(5);
        stats.inc_upstream_errors(1);
        stats.inc_exhausted(1);
        let snap = stats.snapshot();
        assert_eq!(snap.ghosts_summoned, 2);
        assert_eq!(snap.sampler_attempts, 5);
        assert_eq!(snap.upstream_errors, 1);
        assert_eq!(snap.exhausted, 1);
    }
}
