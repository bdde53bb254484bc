use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{
    generator::{generate_ghost, GenerationError},
    models::{Ghost, Language},
    sampler::TransactionSampler,
    summon_stats::SUMMON_STATS,
};

#[derive(Debug, Clone, Copy)]
pub struct SummonPolicy {
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl Default for SummonPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            retry_delay: Duration::from_millis(500),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SummonError {
    #[error("no failed transactions found after {0} sampling rounds")]
    Exhausted(u32),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

/// Samples up to `count` failed transactions, retrying whole sampling rounds
/// per `policy`, and turns each into a ghost.
pub async fn summon(
    sampler: &TransactionSampler,
    policy: &SummonPolicy,
    lang: Language,
    count: usize,
) -> Result<Vec<Ghost>, SummonError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let mut transactions = Vec::new();

    for attempt in 1..=policy.max_attempts {
        tracing::info!(attempt, max_attempts = policy.max_attempts, "summoning");
        match sampler.sample_failed(count).await {
            Ok(found) if !found.is_empty() => {
                tracing::info!(attempt, found = found.len(), "spirits found");
                transactions = found;
                break;
            }
            Ok(_) => {}
            Err(err) => tracing::warn!(attempt, "sampling round failed: {}", err),
        }
        if attempt < policy.max_attempts {
            tokio::time::sleep(policy.retry_delay).await;
        }
    }

    if transactions.is_empty() {
        SUMMON_STATS.inc_exhausted(1);
        tracing::error!(
            "no failed transactions after {} sampling rounds",
            policy.max_attempts
        );
        return Err(SummonError::Exhausted(policy.max_attempts));
    }

    let now = unix_now();
    let ghosts = transactions
        .iter()
        .map(|tx| generate_ghost(tx, lang, now))
        .collect::<Result<Vec<_>, _>>()?;
    SUMMON_STATS.inc_ghosts_summoned(ghosts.len() as u64);
    Ok(ghosts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_retries_ten_times() {
        let policy = SummonPolicy::default();
        assert_eq!(policy.max_attempts, 10);
        assert_eq!(policy.retry_delay, Duration::from_millis(500));
    }

    #[test]
    fn unix_now_is_after_2023() {
        assert!(unix_now() > 1_700_000_000);
    }
}
