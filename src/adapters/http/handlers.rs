//! Route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::auth::CurrentUser;
use super::error::ApiError;
use super::state::AppState;
use crate::domain::models::{
    FocusSession, OwnedTree, RewardCandidate, SessionReward, TreeDetails, TreeTemplate, UserStats,
};
use crate::services::{Actor, PHRASE_FALLBACK};

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Body of `POST /api/start-pomodoro`. The body itself may be omitted.
#[derive(Debug, Default, Deserialize)]
pub struct StartPomodoroRequest {
    #[serde(default)]
    pub duration: Option<u32>,
}

/// Body of `POST /api/complete-pomodoro`. The body itself may be omitted.
#[derive(Debug, Default, Deserialize)]
pub struct CompletePomodoroRequest {
    #[serde(default)]
    pub minutes: Option<u32>,
}

/// Body of `POST /api/user/stats/update`. A missing counter is set to zero.
#[derive(Debug, Deserialize)]
pub struct UpdateStatsRequest {
    #[serde(default)]
    pub pomodoros_completed: u64,
    #[serde(default)]
    pub total_focus_minutes: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PhraseResponse {
    pub phrase: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TreesResponse {
    pub trees: Vec<OwnedTree>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TemplatesResponse {
    pub templates: Vec<TreeTemplate>,
}

/// Parse a JSON body that may be empty.
fn optional_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    Ok(serde_json::from_slice(body)?)
}

fn message(text: impl Into<String>) -> Json<MessageResponse> {
    Json(MessageResponse { message: text.into() })
}

pub async fn root() -> Json<MessageResponse> {
    message("Bienvenido a Pomodoro Forest API")
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn start_pomodoro(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    body: Bytes,
) -> ApiResult<FocusSession> {
    let req: StartPomodoroRequest = optional_body(&body)?;
    let session = state.pomodoro.start(&user.username, req.duration).await?;
    Ok(Json(session))
}

pub async fn complete_pomodoro(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    body: Bytes,
) -> ApiResult<SessionReward> {
    let req: CompletePomodoroRequest = optional_body(&body)?;
    let reward = state.pomodoro.complete(&user.username, req.minutes).await?;
    Ok(Json(reward))
}

pub async fn motivational_phrase(
    State(state): State<Arc<AppState>>,
    CurrentUser(_): CurrentUser,
) -> Json<PhraseResponse> {
    let phrase = state
        .phrases
        .next_phrase()
        .await
        .unwrap_or_else(|| PHRASE_FALLBACK.to_string());
    Json(PhraseResponse { phrase })
}

pub async fn list_trees(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<TreesResponse> {
    let trees = state.inventory.list(&user.username).await?;
    Ok(Json(TreesResponse { trees }))
}

pub async fn update_tree(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<TreeDetails>, JsonRejection>,
) -> ApiResult<OwnedTree> {
    let Path(id) = id?;
    let Json(details) = payload?;
    let tree = state.inventory.update(&user.username, id, details).await?;
    Ok(Json(tree))
}

pub async fn delete_tree(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<MessageResponse> {
    let Path(id) = id?;
    state.inventory.delete(&user.username, id).await?;
    Ok(message("Tree deleted"))
}

pub async fn user_stats(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<UserStats> {
    Ok(Json(state.users.stats(&user.username).await?))
}

pub async fn update_user_stats(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<UpdateStatsRequest>, JsonRejection>,
) -> ApiResult<UserStats> {
    let Json(req) = payload?;
    let stats = state
        .users
        .set_stats(&user.username, req.pomodoros_completed, req.total_focus_minutes)
        .await?;
    Ok(Json(stats))
}

pub async fn list_templates(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<TemplatesResponse> {
    let templates = state.templates.list(Actor::User(&user)).await?;
    Ok(Json(TemplatesResponse { templates }))
}

pub async fn create_template(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<RewardCandidate>, JsonRejection>,
) -> Result<(StatusCode, Json<TreeTemplate>), ApiError> {
    let Json(reward) = payload?;
    let template = state.templates.create(Actor::User(&user), reward).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

pub async fn update_template(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<RewardCandidate>, JsonRejection>,
) -> ApiResult<TreeTemplate> {
    let Path(id) = id?;
    let Json(reward) = payload?;
    let template = state.templates.update(Actor::User(&user), id, reward).await?;
    Ok(Json(template))
}

pub async fn delete_template(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<MessageResponse> {
    let Path(id) = id?;
    state.templates.delete(Actor::User(&user), id).await?;
    Ok(message("Tree template deleted"))
}
