use crate::models::{GhostType, Pattern, Rarity, Visual};

/// Minimum ether value for each tier above common, highest first.
pub const RARITY_THRESHOLDS: [(Rarity, f64); 3] = [
    (Rarity::Legendary, 1.0),
    (Rarity::Epic, 0.1),
    (Rarity::Rare, 0.01),
];

/// Maps a revert/error message to a ghost type. Rules are checked in order
/// and the first hit wins, so "insufficient gas" is an out-of-gas ghost.
pub fn classify_type(error: &str) -> GhostType {
    let error = error.to_lowercase();
    let has = |needle: &str| error.contains(needle);

    if has("gas") {
        GhostType::OutOfGas
    } else if has("insufficient") || has("balance") {
        GhostType::InsufficientBalance
    } else if has("revert") {
        GhostType::Reverted
    } else if has("swap") {
        GhostType::FailedSwap
    } else if has("mint") || has("nft") {
        GhostType::FailedNftMint
    } else {
        GhostType::Reverted
    }
}

pub fn classify_rarity(value_eth: f64) -> Rarity {
    RARITY_THRESHOLDS
        .iter()
        .find(|(_, threshold)| value_eth >= *threshold)
        .map(|(rarity, _)| *rarity)
        .unwrap_or(Rarity::Common)
}

pub fn rarity_color(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => "#9CA3AF",
        Rarity::Rare => "#3B82F6",
        Rarity::Epic => "#A855F7",
        Rarity::Legendary => "#F59E0B",
    }
}

pub fn visual_descriptor(rarity: Rarity, hash_num: u64, hash: &str) -> Visual {
    Visual {
        color: rarity_color(rarity).to_string(),
        pattern: Pattern::ALL[(hash_num % Pattern::ALL.len() as u64) as usize],
        hash: hash.to_string(),
    }
}
