//! User badge checks and supporter nickname colours.

use serde::{Deserialize, Serialize};

/// A badge attached to a user by the API.
///
/// Unknown badge strings are kept so newer server badges survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserBadge {
    Admin,
    Bat,
    Moderator,
    Supporter,
    Other(String),
}

impl From<String> for UserBadge {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Admin" => UserBadge::Admin,
            "Bat" => UserBadge::Bat,
            "Moderator" => UserBadge::Moderator,
            "Supporter" => UserBadge::Supporter,
            _ => UserBadge::Other(value),
        }
    }
}

impl From<UserBadge> for String {
    fn from(badge: UserBadge) -> Self {
        match badge {
            UserBadge::Admin => "Admin".to_string(),
            UserBadge::Bat => "Bat".to_string(),
            UserBadge::Moderator => "Moderator".to_string(),
            UserBadge::Supporter => "Supporter".to_string(),
            UserBadge::Other(other) => other,
        }
    }
}

/// The subset of the user payload the front end reasons about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub badges: Vec<UserBadge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname_color: Option<String>,
}

impl UserResponse {
    pub fn has_badge(&self, badge: &UserBadge) -> bool {
        self.badges.contains(badge)
    }

    pub fn is_admin(&self) -> bool {
        self.has_badge(&UserBadge::Admin)
    }

    pub fn is_bat(&self) -> bool {
        self.has_badge(&UserBadge::Bat)
    }

    pub fn is_moderator(&self) -> bool {
        self.has_badge(&UserBadge::Moderator)
    }

    pub fn is_supporter(&self) -> bool {
        self.has_badge(&UserBadge::Supporter)
    }

    /// Admins, BATs and moderators can open the admin panel.
    pub fn can_use_admin_panel(&self) -> bool {
        self.is_bat() || self.is_admin() || self.is_moderator()
    }

    pub fn can_use_admin_user_search(&self) -> bool {
        self.is_admin() || self.is_moderator()
    }

    /// Custom nickname colour, shown only for supporters with a valid hex colour.
    pub fn supporter_nickname_color(&self) -> Option<&str> {
        if !self.is_supporter() {
            return None;
        }
        self.nickname_color
            .as_deref()
            .filter(|color| is_hex_color(color))
    }
}

/// `#RGB` or `#RRGGBB`, case-insensitive.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}
