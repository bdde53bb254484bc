use ethers_core::types::U256;

use crate::models::{Language, TransactionRecord};

use super::pools::{name_pools, CRYPTIC_CORES};
use super::{GenerationError, TxFacts};

/// Ghost names are always composed in English, whatever language the story
/// is told in.
pub const NAME_LANGUAGE: Language = Language::En;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingStrategy {
    Classic,
    Poetic,
    Mythological,
    Descriptive,
    Cryptic,
}

impl NamingStrategy {
    pub const ALL: [NamingStrategy; 5] = [
        NamingStrategy::Classic,
        NamingStrategy::Poetic,
        NamingStrategy::Mythological,
        NamingStrategy::Descriptive,
        NamingStrategy::Cryptic,
    ];

    pub fn select(hash_num: u64) -> Self {
        Self::ALL[(hash_num % Self::ALL.len() as u64) as usize]
    }
}

pub fn compose_name(tx: &TransactionRecord, lang: Language) -> Result<String, GenerationError> {
    let facts = TxFacts::parse(tx)?;
    Ok(name_from(&facts, lang))
}

pub(crate) fn name_from(facts: &TxFacts, lang: Language) -> String {
    let pools = name_pools(lang);
    let h = facts.hash_num;

    match NamingStrategy::select(h) {
        NamingStrategy::Classic => {
            let block = facts.block_number;
            let prefix = pick(pools.classic_prefixes, h);
            let suffix = pick_offset(pools.classic_suffixes, h, block);
            format!("{prefix} {suffix}").replace("{block}", &(block % 1_000_000).to_string())
        }
        NamingStrategy::Poetic => {
            let adjective = pick(pools.poetic_adjectives, h);
            let noun = pick_offset(pools.poetic_nouns, h, facts.nonce);
            format!("{adjective} {noun}")
        }
        NamingStrategy::Mythological => {
            let title = pick(pools.mythological_titles, h);
            let being = pick(pools.mythological_beings, h * 2);
            let realm = pick(pools.mythological_realms, facts.block_number);
            format!("{being} {title} {realm}")
        }
        NamingStrategy::Descriptive => {
            let term = pick(pools.descriptive_terms, h);
            let len = pools.descriptive_subjects.len() as u64;
            let value_offset = (facts.value_wei % U256::from(len)).as_u64();
            let subject = pick_offset(pools.descriptive_subjects, h, value_offset);
            format!("{term} {subject}")
        }
        NamingStrategy::Cryptic => {
            let prefix = pick(pools.cryptic_prefixes, h);
            let core = pick(&CRYPTIC_CORES, h * 3);
            let suffix = pick(pools.cryptic_suffixes, h * 7);
            let code = facts.hex[..4].to_ascii_uppercase();
            format!("{prefix}-{core}-{suffix} #{code}")
        }
    }
}

fn pick(pool: &[&'static str], index: u64) -> &'static str {
    pool[(index % pool.len() as u64) as usize]
}

/// Picks `base + offset` modulo the pool length without overflowing.
fn pick_offset(pool: &[&'static str], base: u64, offset: u64) -> &'static str {
    let len = pool.len() as u64;
    pick(pool, base % len + offset % len)
}
