pub mod attributes;
pub mod classify;
pub mod naming;
pub mod pools;
pub mod story;

use ethers_core::types::U256;
use ethers_core::utils::format_ether;

use crate::models::{Ghost, Language, TransactionRecord, TxData};

pub use attributes::derive_attributes;
pub use classify::{classify_rarity, classify_type, visual_descriptor};
pub use naming::{compose_name, NamingStrategy, NAME_LANGUAGE};
pub use story::compose_story;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("malformed transaction data: {field} = {value:?}")]
    MalformedTransaction { field: &'static str, value: String },
}

impl GenerationError {
    fn malformed(field: &'static str, value: &str) -> Self {
        GenerationError::MalformedTransaction {
            field,
            value: value.to_string(),
        }
    }
}

/// The parsed numeric view of a [`TransactionRecord`] every generator step
/// reads from.
#[derive(Debug, Clone)]
pub(crate) struct TxFacts {
    pub hex: String,
    pub digits: Vec<u8>,
    pub hash_num: u64,
    pub hash_sum: u64,
    pub value_wei: U256,
    pub value_eth: f64,
    pub value_display: String,
    pub timestamp: i64,
    pub timestamp_text: String,
    /// Hex characters of call data after the `0x` prefix.
    pub input_len: usize,
    pub gas_used: u64,
    pub gas_limit: u64,
    pub gas_price: u128,
    pub nonce: u64,
    pub block_number: u64,
}

impl TxFacts {
    pub fn parse(tx: &TransactionRecord) -> Result<Self, GenerationError> {
        let raw_hash = tx.hash.trim();
        let hex = raw_hash
            .strip_prefix("0x")
            .or_else(|| raw_hash.strip_prefix("0X"))
            .unwrap_or(raw_hash)
            .to_ascii_lowercase();
        if hex.len() < 8 {
            return Err(GenerationError::malformed("hash", &tx.hash));
        }
        let digits = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| GenerationError::malformed("hash", &tx.hash))?;
        let hash_num = digits[..8]
            .iter()
            .fold(0u64, |acc, d| acc * 16 + u64::from(*d));
        let hash_sum = digits.iter().map(|d| u64::from(*d)).sum();

        let raw_value = tx.value.trim();
        if raw_value.is_empty() {
            return Err(GenerationError::malformed("value", &tx.value));
        }
        let value_wei = U256::from_dec_str(raw_value)
            .map_err(|_| GenerationError::malformed("value", &tx.value))?;
        let value_display = trim_decimal(&format_ether(value_wei));
        let value_eth = value_display
            .parse::<f64>()
            .map_err(|_| GenerationError::malformed("value", &tx.value))?;

        let timestamp = tx
            .timestamp
            .trim()
            .parse::<i64>()
            .map_err(|_| GenerationError::malformed("timestamp", &tx.timestamp))?;

        Ok(Self {
            hex,
            digits,
            hash_num,
            hash_sum,
            value_wei,
            value_eth,
            value_display,
            timestamp,
            timestamp_text: tx.timestamp.trim().to_string(),
            input_len: tx.input.len().saturating_sub(2),
            gas_used: lenient(&tx.gas_used),
            gas_limit: lenient(&tx.gas),
            gas_price: lenient(&tx.gas_price),
            nonce: lenient(&tx.nonce),
            block_number: lenient(&tx.block_number),
        })
    }
}

/// Secondary numeric fields are display-only upstream; missing or garbled
/// values count as zero.
fn lenient<T: std::str::FromStr + Default>(raw: &str) -> T {
    raw.trim().parse().unwrap_or_default()
}

fn trim_decimal(formatted: &str) -> String {
    if !formatted.contains('.') {
        return formatted.to_string();
    }
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn generate_ghost(
    tx: &TransactionRecord,
    lang: Language,
    now: i64,
) -> Result<Ghost, GenerationError> {
    let facts = TxFacts::parse(tx)?;

    let ghost_type = classify_type(&tx.error_message);
    let rarity = classify_rarity(facts.value_eth);
    let attributes = attributes::derive_from(&facts, now);
    let name = naming::name_from(&facts, NAME_LANGUAGE);
    let story = story::story_from(&attributes, &tx.gas_used, ghost_type, facts.hash_num, lang);
    let visual = visual_descriptor(rarity, facts.hash_num, &tx.hash);

    Ok(Ghost {
        id: tx.hash.clone(),
        name,
        ghost_type,
        rarity,
        story,
        attributes,
        visual,
        tx_data: TxData {
            hash: tx.hash.clone(),
            from: tx.from.clone(),
            timestamp: facts.timestamp,
            error: if tx.error_message.is_empty() {
                "Unknown".to_string()
            } else {
                tx.error_message.clone()
            },
            gas_used: tx.gas_used.clone(),
            block_number: or_default(&tx.block_number, "0"),
            nonce: or_default(&tx.nonce, "0"),
            gas_price: or_default(&tx.gas_price, "0"),
            input: or_default(&tx.input, "0x"),
            method_id: tx.method_id.clone(),
            function_name: tx.function_name.clone(),
        },
    })
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::models::{GhostType, Rarity};

    #[test]
    fn trim_decimal_strips_trailing_zeros() {
        assert_eq!(trim_decimal("2.000000000000000000"), "2");
        assert_eq!(trim_decimal("0.050000000000000000"), "0.05");
        assert_eq!(trim_decimal("0.000000000000000000"), "0");
        assert_eq!(trim_decimal("10"), "10");
    }

    #[test]
    fn facts_parse_hash_prefix_and_value() {
        let facts = TxFacts::parse(&sample_tx()).unwrap();
        assert_eq!(facts.hash_num, 0xc52783ad);
        assert_eq!(facts.value_display, "0.05");
        assert!((facts.value_eth - 0.05).abs() < 1e-12);
        assert_eq!(facts.block_number, 21_000_123);
        assert_eq!(facts.digits.len(), 64);
    }

    #[test]
    fn lenient_fields_default_to_zero() {
        let mut tx = sample_tx();
        tx.gas_used = "".to_string();
        tx.nonce = "n/a".to_string();
        let facts = TxFacts::parse(&tx).unwrap();
        assert_eq!(facts.gas_used, 0);
        assert_eq!(facts.nonce, 0);
    }

    #[test]
    fn generation_is_deterministic() {
        let tx = sample_tx();
        let a = generate_ghost(&tx, Language::Es, NOW).unwrap();
        let b = generate_ghost(&tx, Language::Es, NOW).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn zero_value_reverted_tx() {
        let mut tx = sample_tx();
        tx.hash = format!("0x{}{}", "a".repeat(60), "0000");
        tx.value = "0".to_string();
        tx.gas_used = "21000".to_string();
        tx.error_message = "execution reverted".to_string();

        let ghost = generate_ghost(&tx, Language::En, NOW).unwrap();
        assert_eq!(ghost.ghost_type, GhostType::Reverted);
        assert_eq!(ghost.rarity, Rarity::Common);
        assert_eq!(ghost.attributes.value, "0");
        assert!(ghost.attributes.sadness <= 2);
        assert!(ghost.attributes.power <= 25);
        // 60 digits of 0xa.
        assert_eq!(ghost.attributes.dimension, (600 % 13 + 1) as u32);
    }

    #[test]
    fn high_value_out_of_gas_tx() {
        let mut tx = sample_tx();
        tx.value = "2000000000000000000".to_string();
        tx.error_message = "out of gas".to_string();

        let ghost = generate_ghost(&tx, Language::Es, NOW).unwrap();
        assert_eq!(ghost.ghost_type, GhostType::OutOfGas);
        assert_eq!(ghost.rarity, Rarity::Legendary);
        assert_eq!(ghost.visual.color, "#F59E0B");
        assert_eq!(ghost.attributes.value, "2");
    }

    #[test]
    fn malformed_value_yields_no_ghost() {
        let mut tx = sample_tx();
        tx.value = "abc".to_string();
        let err = generate_ghost(&tx, Language::Es, NOW).unwrap_err();
        assert_eq!(
            err,
            GenerationError::MalformedTransaction {
                field: "value",
                value: "abc".to_string()
            }
        );
        assert!(err.to_string().starts_with("malformed transaction data"));
    }

    #[test]
    fn malformed_hash_and_timestamp_are_rejected() {
        let mut tx = sample_tx();
        tx.hash = "0xnothex!".to_string();
        assert!(generate_ghost(&tx, Language::Es, NOW).is_err());

        let mut tx = sample_tx();
        tx.hash = "0x1234".to_string();
        assert!(generate_ghost(&tx, Language::Es, NOW).is_err());

        let mut tx = sample_tx();
        tx.timestamp = "yesterday".to_string();
        assert!(matches!(
            generate_ghost(&tx, Language::Es, NOW),
            Err(GenerationError::MalformedTransaction { field: "timestamp", .. })
        ));
    }

    #[test]
    fn zero_gas_limit_defaults_density() {
        let mut tx = sample_tx();
        tx.gas = "0".to_string();
        let ghost = generate_ghost(&tx, Language::Es, NOW).unwrap();
        assert_eq!(ghost.attributes.density, 50);
        assert_eq!(ghost.attributes.stability, 50);
    }

    #[test]
    fn name_ignores_language_but_story_does_not() {
        let tx = sample_tx();
        let es = generate_ghost(&tx, Language::Es, NOW).unwrap();
        let en = generate_ghost(&tx, Language::En, NOW).unwrap();
        assert_eq!(es.name, en.name);
        assert_ne!(es.story, en.story);
    }

    #[test]
    fn tx_data_carries_display_fields() {
        let mut tx = sample_tx();
        tx.input = String::new();
        tx.error_message = String::new();
        let ghost = generate_ghost(&tx, Language::Es, NOW).unwrap();
        assert_eq!(ghost.id, tx.hash);
        assert_eq!(ghost.tx_data.input, "0x");
        assert_eq!(ghost.tx_data.error, "Unknown");
        assert_eq!(ghost.tx_data.timestamp, NOW - 30 * DAY);
        assert_eq!(ghost.visual.hash, tx.hash);
    }

    #[test]
    fn ghost_serializes_with_camel_case_keys() {
        let ghost = generate_ghost(&sample_tx(), Language::Es, NOW).unwrap();
        let json = serde_json::to_value(&ghost).unwrap();
        assert_eq!(json["type"], "reverted");
        assert!(json["txData"]["gasUsed"].is_string());
        assert!(json["attributes"]["aura"].as_str().unwrap().starts_with('#'));
        assert_eq!(json["txData"]["functionName"], "swapExactTokensForTokens");
    }
}
