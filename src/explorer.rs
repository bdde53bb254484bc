use anyhow::Context;
use serde::Deserialize;
use url::Url;

use crate::models::TransactionRecord;

pub const DEFAULT_API_URL: &str = "https://api.etherscan.io/v2/api";

pub const PAGE_SIZE: u32 = 1000;

#[derive(thiserror::Error, Debug)]
pub enum ExplorerError {
    #[error("explorer request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("explorer returned an error: {0}")]
    Api(String),
    #[error("explorer response had no result")]
    MissingResult,
    #[error("invalid block number {0:?}")]
    InvalidBlockNumber(String),
    #[error("malformed explorer payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// One row of an explorer `txlist` response, kept as the explorer sends it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExplorerTx {
    pub block_number: String,
    #[serde(rename = "timeStamp")]
    pub time_stamp: String,
    pub hash: String,
    pub nonce: String,
    pub from: String,
    pub to: String,
    pub value: String,
    pub gas: String,
    pub gas_price: String,
    pub is_error: String,
    #[serde(rename = "txreceipt_status")]
    pub txreceipt_status: String,
    pub input: String,
    pub gas_used: String,
    pub method_id: Option<String>,
    pub function_name: Option<String>,
    pub err_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    result: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxListQuery<'a> {
    pub address: &'a str,
    pub start_block: u64,
    pub end_block: u64,
    pub page: u32,
}

#[derive(Clone)]
pub struct ExplorerClient {
    http: reqwest::Client,
    api_url: Url,
    api_key: String,
    chain_id: u64,
}

impl ExplorerClient {
    pub fn new(api_url: &str, api_key: &str, chain_id: u64) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .context("failed to build reqwest client")?;
        let api_url = Url::parse(api_url).context("invalid ETHERSCAN_API_URL")?;
        Ok(Self {
            http,
            api_url,
            api_key: api_key.to_string(),
            chain_id,
        })
    }

    pub async fn latest_block_number(&self) -> Result<u64, ExplorerError> {
        let url = self.endpoint(&[("module", "proxy"), ("action", "eth_blockNumber")]);
        let envelope: Envelope = self.http.get(url).send().await?.json().await?;
        match envelope.result {
            serde_json::Value::String(raw) => parse_hex_block(&raw),
            serde_json::Value::Null => Err(ExplorerError::MissingResult),
            other => Err(ExplorerError::InvalidBlockNumber(other.to_string())),
        }
    }

    pub async fn tx_list(&self, query: TxListQuery<'_>) -> Result<Vec<ExplorerTx>, ExplorerError> {
        let start = query.start_block.to_string();
        let end = query.end_block.to_string();
        let page = query.page.to_string();
        let offset = PAGE_SIZE.to_string();
        let url = self.endpoint(&[
            ("module", "account"),
            ("action", "txlist"),
            ("address", query.address),
            ("startblock", &start),
            ("endblock", &end),
            ("page", &page),
            ("offset", &offset),
            ("sort", "desc"),
        ]);
        let envelope: Envelope = self.http.get(url).send().await?.json().await?;
        parse_tx_list(envelope)
    }

    fn endpoint(&self, params: &[(&str, &str)]) -> Url {
        let mut url = self.api_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("chainid", &self.chain_id.to_string());
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("apikey", &self.api_key);
        }
        url
    }
}

fn parse_hex_block(raw: &str) -> Result<u64, ExplorerError> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    u64::from_str_radix(digits, 16).map_err(|_| ExplorerError::InvalidBlockNumber(raw.to_string()))
}

fn parse_tx_list(envelope: Envelope) -> Result<Vec<ExplorerTx>, ExplorerError> {
    match (envelope.status.as_deref(), envelope.result) {
        (Some("1"), result @ serde_json::Value::Array(_)) => Ok(serde_json::from_value(result)?),
        // An empty block window is reported as status 0 with an empty array.
        (_, serde_json::Value::Array(rows)) if rows.is_empty() => Ok(Vec::new()),
        (_, serde_json::Value::String(reason)) => Err(ExplorerError::Api(reason)),
        (_, _) => Err(ExplorerError::Api(
            envelope
                .message
                .unwrap_or_else(|| "unexpected txlist response".to_string()),
        )),
    }
}

/// Folds the explorer row into a [`TransactionRecord`], unifying the two
/// failure flags and filling display defaults.
pub fn normalize_tx(tx: ExplorerTx) -> TransactionRecord {
    let failed = tx.is_error == "1" || tx.txreceipt_status == "0";
    TransactionRecord {
        hash: tx.hash,
        from: tx.from,
        to: non_empty(tx.to),
        value: tx.value,
        gas_used: tx.gas_used,
        gas: tx.gas,
        gas_price: tx.gas_price,
        timestamp: tx.time_stamp,
        nonce: tx.nonce,
        block_number: tx.block_number,
        input: if tx.input.is_empty() {
            "0x".to_string()
        } else {
            tx.input
        },
        method_id: tx.method_id.and_then(non_empty),
        function_name: tx.function_name.and_then(non_empty),
        error_message: tx
            .err_code
            .and_then(non_empty)
            .unwrap_or_else(|| "Unknown error".to_string()),
        failed,
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(is_error: &str, receipt: &str) -> ExplorerTx {
        ExplorerTx {
            block_number: "123".to_string(),
            time_stamp: "1700000000".to_string(),
            hash: "0xabc".to_string(),
            nonce: "4".to_string(),
            from: "0xfrom".to_string(),
            to: "".to_string(),
            value: "0".to_string(),
            gas: "21000".to_string(),
            gas_price: "1000".to_string(),
            is_error: is_error.to_string(),
            txreceipt_status: receipt.to_string(),
            input: "".to_string(),
            gas_used: "21000".to_string(),
            method_id: Some("".to_string()),
            function_name: None,
            err_code: None,
        }
    }

    #[test]
    fn either_failure_flag_marks_tx_failed() {
        assert!(normalize_tx(row("1", "1")).failed);
        assert!(normalize_tx(row("0", "0")).failed);
        assert!(normalize_tx(row("1", "")).failed);
        assert!(!normalize_tx(row("0", "1")).failed);
        assert!(!normalize_tx(row("0", "")).failed);
    }

    #[test]
    fn normalize_fills_display_defaults() {
        let tx = normalize_tx(row("1", "0"));
        assert_eq!(tx.to, None);
        assert_eq!(tx.input, "0x");
        assert_eq!(tx.method_id, None);
        assert_eq!(tx.error_message, "Unknown error");
        assert_eq!(tx.timestamp, "1700000000");
    }

    #[test]
    fn normalize_keeps_error_code() {
        let mut raw = row("1", "0");
        raw.err_code = Some("out of gas".to_string());
        assert_eq!(normalize_tx(raw).error_message, "out of gas");
    }

    #[test]
    fn explorer_row_deserializes_from_etherscan_json() {
        let json = serde_json::json!({
            "blockNumber": "14923678",
            "timeStamp": "1654646411",
            "hash": "0xc52783ad354aecc04c670047754f062e3d6d04e8f5b24774472651f9c3882c60",
            "nonce": "1",
            "from": "0x9aa99c23f67c81701c772b106b4f83f6e858dd2e",
            "to": "",
            "value": "0",
            "gas": "6000000",
            "gasPrice": "83924720334",
            "isError": "1",
            "txreceipt_status": "0",
            "input": "0x60806040",
            "contractAddress": "",
            "cumulativeGasUsed": "7052558",
            "gasUsed": "4207044",
            "confirmations": "122",
            "methodId": "0x60806040",
            "functionName": ""
        });
        let tx: ExplorerTx = serde_json::from_value(json).unwrap();
        assert_eq!(tx.time_stamp, "1654646411");
        assert_eq!(tx.gas_used, "4207044");
        let normalized = normalize_tx(tx);
        assert!(normalized.failed);
        assert_eq!(normalized.function_name, None);
        assert_eq!(normalized.method_id.as_deref(), Some("0x60806040"));
    }

    #[test]
    fn tx_list_envelope_variants() {
        let ok: Envelope = serde_json::from_value(serde_json::json!({
            "status": "1", "message": "OK", "result": [{"hash": "0x1"}]
        }))
        .unwrap();
        assert_eq!(parse_tx_list(ok).unwrap().len(), 1);

        let empty: Envelope = serde_json::from_value(serde_json::json!({
            "status": "0", "message": "No transactions found", "result": []
        }))
        .unwrap();
        assert!(parse_tx_list(empty).unwrap().is_empty());

        let rate_limited: Envelope = serde_json::from_value(serde_json::json!({
            "status": "0", "message": "NOTOK", "result": "Max rate limit reached"
        }))
        .unwrap();
        assert!(matches!(
            parse_tx_list(rate_limited),
            Err(ExplorerError::Api(reason)) if reason == "Max rate limit reached"
        ));
    }

    #[test]
    fn parses_hex_block_numbers() {
        assert_eq!(parse_hex_block("0x10").unwrap(), 16);
        assert_eq!(parse_hex_block("1312d00").unwrap(), 20_000_000);
        assert!(parse_hex_block("0xzz").is_err());
    }

    #[test]
    fn endpoint_carries_chain_and_key() {
        let client = ExplorerClient::new(DEFAULT_API_URL, "KEY", 8453).unwrap();
        let url = client.endpoint(&[("module", "proxy")]);
        let query = url.query().unwrap_or_default();
        assert!(query.starts_with("chainid=8453"));
        assert!(query.contains("module=proxy"));
        assert!(query.ends_with("apikey=KEY"));
    }
}
