//! JSON API for roster operations
//!
//! Each endpoint takes a JSON request string plus the roster it acts on and
//! returns a serialized [`ApiResponse`] envelope. Errors never escape as
//! panics; they come back as `success: false` with a stable error code.

use crate::error::RosterError;
use crate::models::{NewPlayer, Player};
use crate::roster::{Admission, LineupEntry, PlayerSummary, Removal, RosterManager};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured API error with codes and details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub details: Option<HashMap<String, serde_json::Value>>,
}

/// Player admission request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmitRequest {
    pub schema_version: Option<String>,
    #[serde(flatten)]
    pub player: NewPlayer,
}

/// Player admission response
#[derive(Debug, Clone, Serialize)]
pub struct AdmitResponse {
    #[serde(flatten)]
    pub admission: Admission,
    pub team_size: usize,
}

/// Removal request; `slot` is the jersey number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveRequest {
    pub schema_version: Option<String>,
    pub slot: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemoveResponse {
    pub removed: Option<Player>,
    pub team_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    pub team_size: usize,
    pub capacity: usize,
    pub players: Vec<PlayerSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineupResponse {
    pub starters: Vec<LineupEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchResponse {
    pub bench: Vec<PlayerSummary>,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string(), details: None }
    }

    pub fn with_details(
        code: &str,
        message: &str,
        details: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self { code: code.to_string(), message: message.to_string(), details: Some(details) }
    }

    pub fn from_roster_error(error: &RosterError) -> Self {
        match error {
            RosterError::RosterTooSmall { required, found } => {
                let mut details = HashMap::new();
                details.insert("required".to_string(), serde_json::json!(required));
                details.insert("found".to_string(), serde_json::json!(found));
                Self::with_details(error.code(), &error.to_string(), details)
            }
            _ => Self::new(error.code(), &error.to_string()),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

fn to_json<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| "{}".to_string())
}

fn parse_request<T, R>(request_json: &str, kind: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
    R: Serialize,
{
    serde_json::from_str(request_json).map_err(|e| {
        error!("Failed to parse {}: {}", kind, e);
        let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
        to_json(&ApiResponse::<R>::error(error))
    })
}

/// Admit a player from a JSON request string
///
/// # Arguments
/// * `request_json` - JSON string containing an AdmitRequest
/// * `roster` - Roster the player joins
///
/// # Returns
/// JSON string containing ApiResponse<AdmitResponse>. A full roster that
/// turns the newcomer away is still a success, with outcome `not_admitted`.
pub fn admit_player_json(request_json: &str, roster: &mut RosterManager) -> String {
    info!("Processing player admission request");

    let request: AdmitRequest = match parse_request::<_, AdmitResponse>(request_json, "AdmitRequest")
    {
        Ok(req) => req,
        Err(response) => return response,
    };

    match roster.admit(&request.player) {
        Ok(admission) => {
            match &admission {
                Admission::Admitted { slot, evicted } => {
                    info!(
                        "Admitted {} {} at slot {}",
                        request.player.first_name, request.player.last_name, slot
                    );
                    if let Some(evicted) = evicted {
                        info!(
                            "Evicted {} {} from slot {}",
                            evicted.player.first_name(),
                            evicted.player.last_name(),
                            evicted.slot
                        );
                    }
                }
                Admission::NotAdmitted => {
                    warn!(
                        "Roster full, {} {} not admitted",
                        request.player.first_name, request.player.last_name
                    );
                }
            }
            let response = AdmitResponse { admission, team_size: roster.team_size() };
            to_json(&ApiResponse::success(response))
        }
        Err(err) => {
            warn!("Player admission rejected: {}", err);
            to_json(&ApiResponse::<AdmitResponse>::error(ApiError::from_roster_error(&err)))
        }
    }
}

/// Remove the player at a slot from a JSON request string
///
/// An empty slot is a success with `removed: null`; an empty roster is an
/// `EMPTY_ROSTER` error.
pub fn remove_player_json(request_json: &str, roster: &mut RosterManager) -> String {
    info!("Processing player removal request");

    let request: RemoveRequest =
        match parse_request::<_, RemoveResponse>(request_json, "RemoveRequest") {
            Ok(req) => req,
            Err(response) => return response,
        };

    match roster.remove_player(request.slot) {
        Ok(removal) => {
            let removed = match removal {
                Removal::Removed(player) => {
                    info!("Removed player from slot {}", request.slot);
                    Some(player)
                }
                Removal::NotFound => {
                    debug!("No player at slot {}", request.slot);
                    None
                }
            };
            let response = RemoveResponse { removed, team_size: roster.team_size() };
            to_json(&ApiResponse::success(response))
        }
        Err(err) => {
            warn!("Player removal rejected: {}", err);
            to_json(&ApiResponse::<RemoveResponse>::error(ApiError::from_roster_error(&err)))
        }
    }
}

/// Every player, sorted by last name.
pub fn roster_json(roster: &RosterManager) -> String {
    debug!("Processing roster query");
    let response = RosterResponse {
        team_size: roster.team_size(),
        capacity: roster.capacity(),
        players: roster.all_players(),
    };
    to_json(&ApiResponse::success(response))
}

pub fn starting_lineup_json(roster: &mut RosterManager) -> String {
    debug!("Processing starting lineup query");
    match roster.starting_lineup() {
        Ok(starters) => to_json(&ApiResponse::success(LineupResponse { starters })),
        Err(err) => {
            warn!("Starting lineup unavailable: {}", err);
            to_json(&ApiResponse::<LineupResponse>::error(ApiError::from_roster_error(&err)))
        }
    }
}

pub fn bench_json(roster: &mut RosterManager) -> String {
    debug!("Processing bench query");
    match roster.bench_players() {
        Ok(bench) => to_json(&ApiResponse::success(BenchResponse { bench })),
        Err(err) => {
            warn!("Bench unavailable: {}", err);
            to_json(&ApiResponse::<BenchResponse>::error(ApiError::from_roster_error(&err)))
        }
    }
}
