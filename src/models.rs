use serde::{Deserialize, Serialize};

/// A ledger transaction as normalised at ingestion. The explorer's two
/// redundant failure flags are folded into `failed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub hash: String,
    pub from: String,
    pub to: Option<String>,
    pub value: String,
    pub gas_used: String,
    pub gas: String,
    pub gas_price: String,
    pub timestamp: String,
    pub nonce: String,
    pub block_number: String,
    pub input: String,
    pub method_id: Option<String>,
    pub function_name: Option<String>,
    pub error_message: String,
    pub failed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// Unknown tags fall back to Spanish.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en" => Language::En,
            _ => Language::Es,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Language::from_tag(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GhostType {
    OutOfGas,
    InsufficientBalance,
    Reverted,
    AbandonedWallet,
    FailedSwap,
    FailedNftMint,
}

impl GhostType {
    pub const ALL: [GhostType; 6] = [
        GhostType::OutOfGas,
        GhostType::InsufficientBalance,
        GhostType::Reverted,
        GhostType::AbandonedWallet,
        GhostType::FailedSwap,
        GhostType::FailedNftMint,
    ];
}

/// Ordered lowest to highest so `Ord` follows tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Generation {
    Fresh,
    Recent,
    Old,
    Ancient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

impl Phase {
    pub const CYCLE: [Phase; 8] = [
        Phase::NewMoon,
        Phase::WaxingCrescent,
        Phase::FirstQuarter,
        Phase::WaxingGibbous,
        Phase::FullMoon,
        Phase::WaningGibbous,
        Phase::LastQuarter,
        Phase::WaningCrescent,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Chaos,
    Order,
    Neutral,
    Light,
    Dark,
    Fire,
    Water,
    Earth,
    Air,
    Void,
    Aether,
    Quantum,
}

impl Alignment {
    pub const ALL: [Alignment; 12] = [
        Alignment::Chaos,
        Alignment::Order,
        Alignment::Neutral,
        Alignment::Light,
        Alignment::Dark,
        Alignment::Fire,
        Alignment::Water,
        Alignment::Earth,
        Alignment::Air,
        Alignment::Void,
        Alignment::Aether,
        Alignment::Quantum,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constellation {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Constellation {
    pub const ZODIAC: [Constellation; 12] = [
        Constellation::Aries,
        Constellation::Taurus,
        Constellation::Gemini,
        Constellation::Cancer,
        Constellation::Leo,
        Constellation::Virgo,
        Constellation::Libra,
        Constellation::Scorpio,
        Constellation::Sagittarius,
        Constellation::Capricorn,
        Constellation::Aquarius,
        Constellation::Pisces,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    Wisp,
    Smoke,
    Shadow,
    Mist,
    Echo,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Wisp,
        Pattern::Smoke,
        Pattern::Shadow,
        Pattern::Mist,
        Pattern::Echo,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSet {
    pub sadness: u32,
    pub age: u64,
    pub value: String,
    pub power: u32,

    pub complexity: u32,
    pub attempts: u64,
    pub urgency: u32,
    pub generation: Generation,

    pub entropy: u32,
    pub resonance: u32,
    pub density: u32,
    pub volatility: u32,
    pub magnitude: u32,
    pub frequency: u32,
    pub phase: Phase,
    pub alignment: Alignment,
    pub signature: String,
    pub essence: u32,
    pub aura: String,
    pub dimension: u32,
    pub constellation: Constellation,
    pub echo: u32,
    pub stability: u32,
    pub chaos: u32,
    pub harmony: u32,
    pub velocity: u32,
    pub weight: u32,
    pub temperature: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visual {
    pub color: String,
    pub pattern: Pattern,
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxData {
    pub hash: String,
    pub from: String,
    pub timestamp: i64,
    pub error: String,
    pub gas_used: String,
    pub block_number: String,
    pub nonce: String,
    pub gas_price: String,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ghost {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub ghost_type: GhostType,
    pub rarity: Rarity,
    pub story: String,
    pub attributes: AttributeSet,
    pub visual: Visual,
    pub tx_data: TxData,
}
