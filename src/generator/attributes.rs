use crate::models::{
    Alignment, AttributeSet, Constellation, Generation, Phase, TransactionRecord,
};

use super::{GenerationError, TxFacts};

const SECONDS_PER_DAY: i64 = 86_400;
/// Gas price regarded as "normal" when scoring urgency, in wei (1 gwei).
const REFERENCE_GAS_PRICE: f64 = 1e9;
/// Upper bound on numerological reduction rounds.
const MAX_ESSENCE_ROUNDS: usize = 16;

pub fn derive_attributes(
    tx: &TransactionRecord,
    now: i64,
) -> Result<AttributeSet, GenerationError> {
    let facts = TxFacts::parse(tx)?;
    Ok(derive_from(&facts, now))
}

pub(crate) fn derive_from(facts: &TxFacts, now: i64) -> AttributeSet {
    let age = age_days(facts.timestamp, now);
    let value_eth = facts.value_eth;

    let sadness = clamp_floor(age as f64 / 100.0 * 5.0 + value_eth * 50.0, 10);
    let power = clamp_floor(facts.gas_used as f64 / 1000.0 + value_eth * 100.0, 100);

    let complexity = clamp_floor(facts.input_len as f64 / 10_000.0 * 100.0, 100);
    let urgency = clamp_floor(facts.gas_price as f64 / REFERENCE_GAS_PRICE * 10.0, 100);

    let entropy = entropy(&facts.digits);
    let density = density(facts.gas_used, facts.gas_limit);
    let volatility = volatility(&facts.digits);
    let magnitude = clamp_floor(
        (value_eth * 1e9 + facts.gas_used as f64).max(1.0).log10() * 10.0,
        100,
    );

    let hash_sum = facts.hash_sum;
    let block = facts.block_number;

    AttributeSet {
        sadness,
        age,
        value: facts.value_display.clone(),
        power,

        complexity,
        attempts: facts.nonce,
        urgency,
        generation: generation(age),

        entropy,
        resonance: (decimal_digit_sum(block) % 100) as u32,
        density,
        volatility,
        magnitude,
        frequency: frequency(&facts.timestamp_text),
        phase: Phase::CYCLE[(block % 8) as usize],
        alignment: Alignment::ALL[(hash_sum % 12) as usize],
        signature: facts.hex[..4].to_ascii_uppercase(),
        essence: essence(hash_sum),
        aura: format!("#{}", &facts.hex[..6]),
        dimension: (hash_sum % 13 + 1) as u32,
        constellation: Constellation::ZODIAC[(block % 12) as usize],
        echo: ((age % 100) * (hash_sum % 10) % 100) as u32,
        stability: 100 - density,
        chaos: (entropy + volatility) / 2,
        harmony: harmony(entropy, density, volatility),
        velocity: (u64::from(urgency) * 100 / age.max(1)).min(100) as u32,
        weight: clamp_floor((value_eth * 1000.0 + f64::from(complexity)) / 2.0, 100),
        temperature: urgency.min(100),
    }
}

/// Whole days between `timestamp` and `now`; transactions from the future
/// count as zero days old.
pub fn age_days(timestamp: i64, now: i64) -> u64 {
    (now.saturating_sub(timestamp).max(0) / SECONDS_PER_DAY) as u64
}

pub fn generation(age: u64) -> Generation {
    match age {
        a if a > 365 => Generation::Ancient,
        a if a > 90 => Generation::Old,
        a if a > 7 => Generation::Recent,
        _ => Generation::Fresh,
    }
}

fn clamp_floor(x: f64, max: u32) -> u32 {
    if x.is_nan() || x <= 0.0 {
        0
    } else {
        x.floor().min(f64::from(max)) as u32
    }
}

fn entropy(digits: &[u8]) -> u32 {
    let mut seen = [false; 16];
    for d in digits {
        seen[usize::from(*d)] = true;
    }
    let unique = seen.iter().filter(|s| **s).count() as u32;
    unique * 100 / 16
}

fn density(gas_used: u64, gas_limit: u64) -> u32 {
    if gas_limit == 0 {
        return 50;
    }
    (u128::from(gas_used) * 100 / u128::from(gas_limit)).min(100) as u32
}

fn volatility(digits: &[u8]) -> u32 {
    if digits.is_empty() {
        return 0;
    }
    let swing: u64 = digits
        .windows(2)
        .map(|pair| u64::from(pair[0].abs_diff(pair[1])))
        .sum();
    (swing * 10 / digits.len() as u64).min(100) as u32
}

fn frequency(timestamp: &str) -> u32 {
    let mut counts = [0u32; 10];
    for d in timestamp.chars().filter_map(|c| c.to_digit(10)) {
        counts[d as usize] += 1;
    }
    let max_repetition = counts.iter().copied().max().unwrap_or(0);
    max_repetition.saturating_mul(20).min(100)
}

fn harmony(entropy: u32, density: u32, volatility: u32) -> u32 {
    let closeness = |x: u32| 100 - (50 - i64::from(x)).unsigned_abs();
    ((closeness(entropy) + closeness(density) + closeness(volatility)) / 3) as u32
}

fn decimal_digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

fn essence(hash_sum: u64) -> u32 {
    let mut essence = hash_sum;
    for _ in 0..MAX_ESSENCE_ROUNDS {
        if essence <= 100 {
            break;
        }
        essence = decimal_digit_sum(essence);
    }
    essence.min(100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::test_support::*;

    fn bounded(a: &AttributeSet) -> Vec<(&'static str, u32)> {
        vec![
            ("power", a.power),
            ("complexity", a.complexity),
            ("urgency", a.urgency),
            ("entropy", a.entropy),
            ("resonance", a.resonance),
            ("density", a.density),
            ("volatility", a.volatility),
            ("magnitude", a.magnitude),
            ("frequency", a.frequency),
            ("essence", a.essence),
            ("echo", a.echo),
            ("stability", a.stability),
            ("chaos", a.chaos),
            ("harmony", a.harmony),
            ("velocity", a.velocity),
            ("weight", a.weight),
            ("temperature", a.temperature),
        ]
    }

    #[test]
    fn derivation_is_deterministic() {
        let tx = sample_tx();
        assert_eq!(
            derive_attributes(&tx, NOW).unwrap(),
            derive_attributes(&tx, NOW).unwrap()
        );
    }

    #[test]
    fn sample_tx_profile() {
        let a = derive_attributes(&sample_tx(), NOW).unwrap();
        assert_eq!(a.age, 30);
        assert_eq!(a.generation, Generation::Recent);
        // 30/100*5 + 0.05*50 = 4.0
        assert_eq!(a.sadness, 4);
        // 150 + 5
        assert_eq!(a.power, 100);
        assert_eq!(a.density, 50);
        assert_eq!(a.stability, 50);
        assert_eq!(a.urgency, 20);
        assert_eq!(a.temperature, 20);
        // 20 * 100 / 30
        assert_eq!(a.velocity, 66);
        assert_eq!(a.attempts, 17);
        assert_eq!(a.signature, "C527");
        assert_eq!(a.aura, "#c52783");
        // 2+1+0+0+0+1+2+3 = 9
        assert_eq!(a.resonance, 9);
        // 21000123 % 8 == 3, % 12 == 3
        assert_eq!(a.phase, Phase::WaxingGibbous);
        assert_eq!(a.constellation, Constellation::Cancer);
        assert_eq!(a.complexity, 0);
        // (0.05 * 1000 + 0) / 2
        assert_eq!(a.weight, 25);
    }

    #[test]
    fn hash_statistics() {
        let uniform = vec![7u8; 64];
        assert_eq!(entropy(&uniform), 6);
        assert_eq!(volatility(&uniform), 0);

        let all: Vec<u8> = (0..16).collect();
        assert_eq!(entropy(&all), 100);
        // 15 steps of 1 over 16 digits
        assert_eq!(volatility(&all), 9);

        let zigzag: Vec<u8> = (0..64).map(|i| if i % 2 == 0 { 0 } else { 15 }).collect();
        assert_eq!(volatility(&zigzag), 100);
    }

    #[test]
    fn frequency_counts_repeated_digits() {
        assert_eq!(frequency("1700000000"), 100);
        assert_eq!(frequency("1234567890"), 20);
        assert_eq!(frequency("1122334455"), 40);
        assert_eq!(frequency(""), 0);
    }

    #[test]
    fn essence_reduces_until_at_most_one_hundred() {
        assert_eq!(essence(42), 42);
        assert_eq!(essence(100), 100);
        // 960 -> 15
        assert_eq!(essence(960), 15);
        assert_eq!(essence(u64::MAX), essence(u64::MAX));
        assert!(essence(u64::MAX) <= 100);
    }

    #[test]
    fn harmony_peaks_at_fifty() {
        assert_eq!(harmony(50, 50, 50), 100);
        assert_eq!(harmony(0, 100, 50), 66);
    }

    #[test]
    fn generation_buckets() {
        assert_eq!(generation(0), Generation::Fresh);
        assert_eq!(generation(7), Generation::Fresh);
        assert_eq!(generation(8), Generation::Recent);
        assert_eq!(generation(91), Generation::Old);
        assert_eq!(generation(366), Generation::Ancient);
    }

    #[test]
    fn future_timestamps_are_zero_days_old() {
        assert_eq!(age_days(NOW + DAY, NOW), 0);
        assert_eq!(age_days(NOW - DAY + 1, NOW), 0);
        assert_eq!(age_days(NOW - DAY, NOW), 1);
    }

    #[test]
    fn bounded_fields_stay_in_range_for_extreme_inputs() {
        let mut tx = sample_tx();
        tx.value = "115792089237316195423570985008687907853269984665640564039457584007913129639935"
            .to_string();
        tx.gas_used = u64::MAX.to_string();
        tx.gas = "1".to_string();
        tx.gas_price = u128::MAX.to_string();
        tx.timestamp = "0".to_string();
        tx.input = format!("0x{}", "ff".repeat(200_000));
        tx.nonce = u64::MAX.to_string();
        tx.block_number = u64::MAX.to_string();
        let a = derive_attributes(&tx, NOW).unwrap();
        for (name, value) in bounded(&a) {
            assert!(value <= 100, "{name} = {value}");
        }
        assert_eq!(a.sadness, 10);
        assert!((1..=13).contains(&a.dimension));

        let mut tx = sample_tx();
        tx.value = "0".to_string();
        tx.gas_used = "0".to_string();
        tx.gas = "0".to_string();
        tx.gas_price = "0".to_string();
        tx.timestamp = NOW.to_string();
        tx.input = "0x".to_string();
        let a = derive_attributes(&tx, NOW).unwrap();
        for (name, value) in bounded(&a) {
            assert!(value <= 100, "{name} = {value}");
        }
        assert_eq!(a.sadness, 0);
        assert_eq!(a.power, 0);
        assert_eq!(a.magnitude, 0);
        assert_eq!(a.density, 50);
    }

    #[test]
    fn bounded_fields_stay_in_range_across_hashes() {
        for seed in 0u32..500 {
            let mut tx = sample_tx();
            tx.hash = hash_with_prefix(seed.wrapping_mul(2_654_435_761));
            tx.block_number = (seed as u64 * 7919).to_string();
            let a = derive_attributes(&tx, NOW).unwrap();
            for (name, value) in bounded(&a) {
                assert!(value <= 100, "{name} = {value} for seed {seed}");
            }
        }
    }
}
