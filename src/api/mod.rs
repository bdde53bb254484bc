use anyhow::Result;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use ethers_core::types::Address;
use ethers_core::utils::to_checksum;
use serde::{Deserialize, Serialize};

use crate::{
    config::{Config, InvocationFee},
    explorer::ExplorerClient,
    i18n::locale,
    models::{Ghost, Language},
    sampler::TransactionSampler,
    summon::{summon, SummonError, SummonPolicy},
    summon_stats::{SummonSnapshot, SUMMON_STATS},
};

const APP_NAME: &str = "Transaction Séance";

#[derive(Clone)]
pub struct AppState {
    pub sampler: TransactionSampler,
    pub policy: SummonPolicy,
    pub site: SiteConfig,
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub public_base_url: String,
    pub chain_id: u64,
    pub treasury_address: Option<Address>,
    pub invocation_fee: Option<InvocationFee>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = ExplorerClient::new(
            &config.etherscan_api_url,
            &config.etherscan_api_key,
            config.chain_id,
        )?;
        Ok(Self {
            sampler: TransactionSampler::new(client),
            policy: SummonPolicy::default(),
            site: SiteConfig {
                public_base_url: config.public_base_url.clone(),
                chain_id: config.chain_id,
                treasury_address: config.treasury_address,
                invocation_fee: config.invocation_fee.clone(),
            },
        })
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Deserialize)]
struct GhostQuery {
    lang: Option<String>,
}

#[derive(Serialize)]
struct GhostResponse {
    ghost: Ghost,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestResponse {
    miniapp: MiniApp,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MiniApp {
    version: &'static str,
    name: &'static str,
    icon_url: String,
    home_url: String,
    description: &'static str,
    splash_image_url: String,
    splash_background_color: &'static str,
}

#[derive(Serialize)]
struct FrameInfo {
    message: String,
    version: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameRedirect {
    #[serde(rename = "type")]
    kind: &'static str,
    frame_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FeeResponse {
    chain_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    treasury_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    invocation_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    invocation_fee_wei: Option<String>,
}

/// Everything a handler can fail with, rendered as `{ "error": ... }`.
#[derive(Debug)]
enum ApiError {
    NoSpirits(Language),
    Summon(Language, SummonError),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::NoSpirits(lang) => (
                StatusCode::SERVICE_UNAVAILABLE,
                locale(lang).no_spirits_found.to_string(),
            ),
            ApiError::Summon(lang, err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{}: {}", locale(lang).invocation_failed, err),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn ghost(
    State(state): State<AppState>,
    Query(query): Query<GhostQuery>,
) -> Result<Json<GhostResponse>, ApiError> {
    let lang = query
        .lang
        .as_deref()
        .map(Language::from_tag)
        .unwrap_or_default();

    match summon(&state.sampler, &state.policy, lang, 1).await {
        Ok(mut ghosts) => match ghosts.pop() {
            Some(ghost) => Ok(Json(GhostResponse { ghost })),
            None => Err(ApiError::NoSpirits(lang)),
        },
        Err(SummonError::Exhausted(_)) => Err(ApiError::NoSpirits(lang)),
        Err(err) => {
            tracing::error!("error generating ghost: {}", err);
            Err(ApiError::Summon(lang, err))
        }
    }
}

async fn summon_stats() -> Json<SummonSnapshot> {
    Json(SUMMON_STATS.snapshot())
}

async fn manifest(State(state): State<AppState>) -> impl IntoResponse {
    let base = &state.site.public_base_url;
    let body = ManifestResponse {
        miniapp: MiniApp {
            version: "1",
            name: APP_NAME,
            icon_url: format!("{base}/api/icon"),
            home_url: base.clone(),
            description: "Invoke the spirits of forgotten transactions on Base. Each ghost is unique and based on real blockchain data.",
            splash_image_url: format!("{base}/api/splash"),
            splash_background_color: "#1a0b2e",
        },
    };
    (
        [(header::CACHE_CONTROL, "public, max-age=3600")],
        Json(body),
    )
}

async fn frame_info() -> Json<FrameInfo> {
    Json(FrameInfo {
        message: format!("{APP_NAME} Frame API"),
        version: "1.0",
    })
}

async fn frame_action(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<FrameRedirect>, ApiError> {
    let Json(interaction) = payload.map_err(|rejection| {
        tracing::warn!("invalid frame interaction: {}", rejection);
        ApiError::BadRequest(rejection.body_text())
    })?;
    tracing::info!(%interaction, "frame interaction");
    Ok(Json(FrameRedirect {
        kind: "frame",
        frame_url: state.site.public_base_url.clone(),
    }))
}

async fn fee(State(state): State<AppState>) -> Json<FeeResponse> {
    let site = &state.site;
    Json(FeeResponse {
        chain_id: site.chain_id,
        treasury_address: site.treasury_address.map(|addr| to_checksum(&addr, None)),
        invocation_fee: site.invocation_fee.as_ref().map(|fee| fee.ether.clone()),
        invocation_fee_wei: site.invocation_fee.as_ref().map(|fee| fee.wei.to_string()),
    })
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/ghost", get(ghost))
        .route("/api/manifest", get(manifest))
        .route("/api/frame", get(frame_info).post(frame_action))
        .route("/api/fee", get(fee))
        .route("/stats/summons", get(summon_stats))
        .with_state(state)
}

pub async fn run_http_server(addr: &str, state: AppState) -> Result<()> {
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
