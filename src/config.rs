use std::env;
use std::str::FromStr;

use ethers_core::types::{Address, U256};
use ethers_core::utils::parse_ether;

use crate::explorer::DEFAULT_API_URL;

pub const DEFAULT_CHAIN_ID: u64 = 8453;

#[derive(Debug, Clone)]
pub struct Config {
    pub etherscan_api_key: String,
    pub etherscan_api_url: String,
    pub chain_id: u64,
    pub http_bind_addr: String,
    pub public_base_url: String,
    pub treasury_address: Option<Address>,
    pub invocation_fee: Option<InvocationFee>,
}

/// Fee asked of the wallet before an invocation, kept both as typed by the
/// operator and in wei.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationFee {
    pub ether: String,
    pub wei: U256,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing ETHERSCAN_API_KEY env var")]
    MissingApiKey,
    #[error("invalid CHAIN_ID {0:?}")]
    InvalidChainId(String),
    #[error("invalid TREASURY_ADDRESS {0:?}")]
    InvalidTreasuryAddress(String),
    #[error("invalid INVOCATION_FEE {0:?}")]
    InvalidInvocationFee(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let etherscan_api_key = var("ETHERSCAN_API_KEY").ok_or(ConfigError::MissingApiKey)?;
        let etherscan_api_url =
            var("ETHERSCAN_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let chain_id = match var("CHAIN_ID") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidChainId(raw))?,
            None => DEFAULT_CHAIN_ID,
        };
        let http_bind_addr = var("HTTP_BIND").unwrap_or_else(|| "127.0.0.1:8080".to_string());
        let public_base_url = var("PUBLIC_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| "http://localhost:3000".to_string());
        let treasury_address = var("TREASURY_ADDRESS")
            .map(|raw| parse_address(&raw))
            .transpose()?;
        let invocation_fee = var("INVOCATION_FEE")
            .map(|raw| parse_fee(&raw))
            .transpose()?;

        Ok(Self {
            etherscan_api_key,
            etherscan_api_url,
            chain_id,
            http_bind_addr,
            public_base_url,
            treasury_address,
            invocation_fee,
        })
    }
}

fn parse_address(raw: &str) -> Result<Address, ConfigError> {
    let trimmed = raw.trim();
    if !trimmed.starts_with("0x") || trimmed.len() != 42 {
        return Err(ConfigError::InvalidTreasuryAddress(raw.to_string()));
    }
    Address::from_str(trimmed).map_err(|_| ConfigError::InvalidTreasuryAddress(raw.to_string()))
}

fn parse_fee(raw: &str) -> Result<InvocationFee, ConfigError> {
    let ether = raw.trim().to_string();
    let wei = parse_ether(&ether).map_err(|_| ConfigError::InvalidInvocationFee(raw.to_string()))?;
    Ok(InvocationFee { ether, wei })
}
