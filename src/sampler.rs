use futures_util::future::join_all;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    explorer::{normalize_tx, ExplorerClient, TxListQuery},
    models::TransactionRecord,
    summon_stats::SUMMON_STATS,
};

/// Used when the explorer cannot tell us the chain head.
pub const FALLBACK_LATEST_BLOCK: u64 = 22_000_000;
pub const MAX_ATTEMPTS: u32 = 5;
pub const MAX_PAGE: u32 = 5;
const MAX_OFFSET: u64 = 2_000_000;
const OFFSET_STEP: u64 = 200_000;

/// Busy Base contracts (routers, major tokens, name service) that reliably
/// accumulate failed calls.
pub const HIGH_ACTIVITY_CONTRACTS: [&str; 7] = [
    "0xcF77a3Ba9A5CA399B7c97c74d54e5b1Beb874E43",
    "0x4752ba5DBc23f44D87826276BF6Fd6b1C372aD24",
    "0x4200000000000000000000000000000000000006",
    "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
    "0x940181a94A35A4569E4529A3CDfB74e38FD98631",
    "0x50c5725949A6F0c72E6C4a641F24049A917DB0Cb",
    "0xd9aAEc86B65D86f6A7B5B1b0c42FFA531710b6CA",
];

#[derive(thiserror::Error, Debug)]
pub enum SamplerError {
    #[error("no failed transactions found after {0} attempts")]
    NoTransactionsFound(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptPlan {
    pub start_block: u64,
    pub end_block: u64,
    pub range: u64,
    pub queries: Vec<(String, u32)>,
}

/// Range width bounds `[lo, hi)` for a 1-based attempt index.
pub fn range_bounds(attempt: u32) -> (u64, u64) {
    let step = u64::from(attempt.saturating_sub(1));
    (100_000 + 50_000 * step, 400_000 + 100_000 * step)
}

pub fn plan_attempt<R: Rng>(
    attempt: u32,
    latest: u64,
    contracts: &[String],
    rng: &mut R,
) -> AttemptPlan {
    let (lo, hi) = range_bounds(attempt);
    let range = rng.gen_range(lo..hi);

    let max_offset = MAX_OFFSET.min(latest.saturating_sub(range + 1000));
    let random_offset = if max_offset > 0 {
        rng.gen_range(0..max_offset)
    } else {
        0
    };
    let offset = random_offset + OFFSET_STEP * u64::from(attempt.saturating_sub(1));

    let end_block = latest.saturating_sub(offset);
    let start_block = end_block.saturating_sub(range);

    let mut shuffled: Vec<&String> = contracts.iter().collect();
    shuffled.shuffle(rng);
    let take = (2 + attempt as usize).min(shuffled.len());
    let queries = shuffled
        .into_iter()
        .take(take)
        .map(|address| (address.clone(), rng.gen_range(1..=MAX_PAGE)))
        .collect();

    AttemptPlan {
        start_block,
        end_block,
        range,
        queries,
    }
}

#[derive(Clone)]
pub struct TransactionSampler {
    client: ExplorerClient,
    contracts: Vec<String>,
    max_attempts: u32,
}

impl TransactionSampler {
    pub fn new(client: ExplorerClient) -> Self {
        Self {
            client,
            contracts: HIGH_ACTIVITY_CONTRACTS
                .iter()
                .map(|addr| addr.to_string())
                .collect(),
            max_attempts: MAX_ATTEMPTS,
        }
    }

    pub fn with_contracts(mut self, contracts: Vec<String>) -> Self {
        self.contracts = contracts;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Returns up to `count` failed transactions drawn from a random block
    /// window, or `NoTransactionsFound` once every attempt came back empty.
    pub async fn sample_failed(
        &self,
        count: usize,
    ) -> Result<Vec<TransactionRecord>, SamplerError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        for attempt in 1..=self.max_attempts {
            SUMMON_STATS.inc_sampler_attempts(1);
            tracing::info!(
                attempt,
                max_attempts = self.max_attempts,
                "searching for failed transactions"
            );

            let latest = match self.client.latest_block_number().await {
                Ok(latest) => latest,
                Err(err) => {
                    SUMMON_STATS.inc_upstream_errors(1);
                    tracing::warn!(
                        "could not fetch latest block, using {}: {}",
                        FALLBACK_LATEST_BLOCK,
                        err
                    );
                    FALLBACK_LATEST_BLOCK
                }
            };

            let plan = plan_attempt(attempt, latest, &self.contracts, &mut rand::thread_rng());
            tracing::info!(
                start_block = plan.start_block,
                end_block = plan.end_block,
                range = plan.range,
                latest,
                "random search range"
            );

            let mut failed = self.query_plan(&plan).await;
            tracing::info!(attempt, failed = failed.len(), "failed transactions found");

            if !failed.is_empty() {
                failed.shuffle(&mut rand::thread_rng());
                failed.truncate(count);
                return Ok(failed);
            }

            tracing::info!(attempt, "no failed transactions in range, trying different blocks");
        }

        Err(SamplerError::NoTransactionsFound(self.max_attempts))
    }

    /// Queries every address of the plan concurrently; a failing address
    /// contributes nothing.
    async fn query_plan(&self, plan: &AttemptPlan) -> Vec<TransactionRecord> {
        let searches = plan.queries.iter().map(|(address, page)| {
            let query = TxListQuery {
                address,
                start_block: plan.start_block,
                end_block: plan.end_block,
                page: *page,
            };
            async move {
                tracing::debug!(address = %address, page, "searching address");
                match self.client.tx_list(query).await {
                    Ok(rows) => rows,
                    Err(err) => {
                        SUMMON_STATS.inc_upstream_errors(1);
                        tracing::warn!("txlist query for {} failed: {}", address, err);
                        Vec::new()
                    }
                }
            }
        });

        let rows: Vec<_> = join_all(searches).await.into_iter().flatten().collect();
        tracing::debug!(retrieved = rows.len(), "merged txlist rows");

        rows.into_iter()
            .map(normalize_tx)
            .filter(|tx| tx.failed)
            .collect()
    }
}
