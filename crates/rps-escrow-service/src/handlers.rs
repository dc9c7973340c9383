//! HTTP API handlers.

use axum::{
    extract::{FromRequest, Path, State},
    http::HeaderMap,
    Json,
};
use rps_core::{
    commit, Address, Amount, CodecError, Commitment, Game, Ledger, Move, Payout, Reveal, Salt,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::models::{GameId, GameSummary};
use crate::state::AppState;

const CALLER_HEADER: &str = "x-player-address";

/// JSON body extractor whose rejections render as `{"error": ...}`
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

// ============ Request/Response types ============

#[derive(Deserialize)]
pub struct CommitRequest {
    #[serde(rename = "move")]
    pub mv: Move,
    /// 64 hex digits, or short text padded to a salt
    pub salt: String,
}

#[derive(Serialize, Deserialize)]
pub struct CommitResponse {
    pub commitment: Commitment,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreateGameRequest {
    pub blind: Option<Amount>,
}

#[derive(Serialize, Deserialize)]
pub struct CreateGameResponse {
    pub game_id: GameId,
    pub blind: Amount,
}

#[derive(Serialize, Deserialize)]
pub struct GamesResponse {
    pub games: Vec<GameSummary>,
}

#[derive(Serialize, Deserialize)]
pub struct BlindResponse {
    pub blind: Amount,
}

#[derive(Serialize, Deserialize)]
pub struct PotResponse {
    pub pot: Amount,
}

#[derive(Serialize, Deserialize)]
pub struct MovesResponse {
    pub address: Address,
    pub commitment: Commitment,
}

#[derive(Deserialize)]
pub struct PlayRequest {
    pub commitment: Commitment,
    pub stake: Amount,
}

#[derive(Serialize, Deserialize)]
pub struct PlayResponse {
    pub status: String,
    pub pot: Amount,
}

#[derive(Deserialize)]
pub struct RevealBody {
    pub address: Address,
    #[serde(rename = "move")]
    pub mv: Move,
    pub salt: String,
}

#[derive(Deserialize)]
pub struct RevealPair {
    pub a: RevealBody,
    pub b: RevealBody,
}

#[derive(Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub winner: Option<Address>,
}

#[derive(Deserialize)]
pub struct FundRequest {
    pub address: Address,
    pub amount: Amount,
}

#[derive(Serialize, Deserialize)]
pub struct BalanceResponse {
    pub address: Address,
    pub balance: Amount,
}

// ============ Helpers ============

/// Hex salts are exactly 64 digits; anything else is text
fn parse_salt(s: &str) -> Result<Salt, CodecError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    if digits.len() == 64 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Salt::from_hex(digits)
    } else {
        Salt::from_text(s)
    }
}

impl RevealBody {
    fn into_reveal(self) -> Result<Reveal, CodecError> {
        Ok(Reveal::new(self.address, self.mv, parse_salt(&self.salt)?))
    }
}

impl RevealPair {
    fn into_reveals(self) -> Result<(Reveal, Reveal), CodecError> {
        Ok((self.a.into_reveal()?, self.b.into_reveal()?))
    }
}

fn caller_from_headers(headers: &HeaderMap) -> Result<Address, ApiError> {
    let value = headers
        .get(CALLER_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::MissingCaller)?;
    value.parse().map_err(ApiError::InvalidCaller)
}

fn parse_address(s: &str) -> Result<Address, ApiError> {
    Ok(s.parse()?)
}

fn lookup_game(state: &AppState, id: GameId) -> Result<Arc<Game>, ApiError> {
    state.get_game(id).ok_or(ApiError::GameNotFound)
}

// ============ Codec handlers ============

pub async fn commit_move(
    ApiJson(req): ApiJson<CommitRequest>,
) -> Result<Json<CommitResponse>, ApiError> {
    let salt = parse_salt(&req.salt)?;
    Ok(Json(CommitResponse {
        commitment: commit(req.mv, &salt),
    }))
}

// ============ Game handlers ============

pub async fn create_game(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateGameRequest>,
) -> Json<CreateGameResponse> {
    let blind = req.blind.unwrap_or(state.default_blind());
    let game_id = state.create_game(blind);

    info!("Created game {} with blind {}", game_id, blind);

    Json(CreateGameResponse { game_id, blind })
}

pub async fn list_games(State(state): State<AppState>) -> Json<GamesResponse> {
    Json(GamesResponse {
        games: state.list_games().await,
    })
}

pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<GameId>,
) -> Result<Json<GameSummary>, ApiError> {
    let game = lookup_game(&state, id)?;
    Ok(Json(GameSummary {
        game_id: id,
        snapshot: game.snapshot().await,
    }))
}

pub async fn get_blind(
    State(state): State<AppState>,
    Path(id): Path<GameId>,
) -> Result<Json<BlindResponse>, ApiError> {
    let game = lookup_game(&state, id)?;
    Ok(Json(BlindResponse {
        blind: game.blind(),
    }))
}

pub async fn get_pot(
    State(state): State<AppState>,
    Path(id): Path<GameId>,
) -> Result<Json<PotResponse>, ApiError> {
    let game = lookup_game(&state, id)?;
    Ok(Json(PotResponse {
        pot: game.pot().await,
    }))
}

pub async fn get_moves(
    State(state): State<AppState>,
    Path((id, address)): Path<(GameId, String)>,
) -> Result<Json<MovesResponse>, ApiError> {
    let game = lookup_game(&state, id)?;
    let address = parse_address(&address)?;
    let commitment = game
        .moves(&address)
        .await
        .ok_or(ApiError::NoCommitment(address))?;
    Ok(Json(MovesResponse {
        address,
        commitment,
    }))
}

pub async fn play(
    State(state): State<AppState>,
    Path(id): Path<GameId>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<PlayRequest>,
) -> Result<Json<PlayResponse>, ApiError> {
    let caller = caller_from_headers(&headers)?;
    let game = lookup_game(&state, id)?;

    game.play(caller, req.commitment, req.stake).await?;

    Ok(Json(PlayResponse {
        status: "committed".to_string(),
        pot: game.pot().await,
    }))
}

pub async fn evaluate(
    State(state): State<AppState>,
    Path(id): Path<GameId>,
    ApiJson(req): ApiJson<RevealPair>,
) -> Result<Json<EvaluateResponse>, ApiError> {
    let game = lookup_game(&state, id)?;
    let (a, b) = req.into_reveals()?;

    let winner = game.evaluate(&a, &b).await?;
    Ok(Json(EvaluateResponse { winner }))
}

pub async fn claim(
    State(state): State<AppState>,
    Path(id): Path<GameId>,
    ApiJson(req): ApiJson<RevealPair>,
) -> Result<Json<Payout>, ApiError> {
    let game = lookup_game(&state, id)?;
    let (a, b) = req.into_reveals()?;

    let payout = game.claim(&a, &b).await?;
    info!("Game {} settled: {} won {}", id, payout.winner, payout.amount);
    Ok(Json(payout))
}

// ============ Ledger handlers ============

pub async fn fund(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<FundRequest>,
) -> Json<BalanceResponse> {
    let balance = state.ledger().fund(req.address, req.amount);
    Json(BalanceResponse {
        address: req.address,
        balance,
    })
}

pub async fn get_balance(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let address = parse_address(&address)?;
    let balance = state.ledger().balance(&address).await?;
    Ok(Json(BalanceResponse { address, balance }))
}
