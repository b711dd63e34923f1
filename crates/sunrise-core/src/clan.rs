//! Clan API payloads.
//!
//! Shapes of the JSON bodies exchanged with the clan endpoints. Sending them
//! is left to the caller's HTTP client.

use serde::{Deserialize, Serialize};

use crate::encode::AvatarPayload;
use crate::user::UserResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClanResponse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub total_pp: f64,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClanRole {
    Creator,
    Member,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClanMemberResponse {
    pub user: UserResponse,
    pub role: ClanRole,
    pub pp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClanDetailsResponse {
    pub clan: ClanResponse,
    pub members: Vec<ClanMemberResponse>,
}

impl ClanDetailsResponse {
    pub fn creator(&self) -> Option<&ClanMemberResponse> {
        self.members.iter().find(|m| m.role == ClanRole::Creator)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClansLeaderboardResponse {
    pub clans: Vec<ClanResponse>,
    pub total_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateClanRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Body of the "set avatar" call. `None` clears the avatar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditClanAvatarRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl EditClanAvatarRequest {
    pub fn from_payload(payload: AvatarPayload) -> Self {
        Self {
            avatar_url: Some(payload.into_data_url()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditClanNameRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditClanTagRequest {
    pub tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditClanDescriptionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
