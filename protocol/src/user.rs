//! User accounts and user administration payloads.

use serde::{Deserialize, Serialize};

/// Role a user holds within the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Moderator,
    Admin,
    #[serde(other)]
    Unknown,
}

/// A SportsTalk user.
///
/// The authoritative copy lives on the server; the SDK only holds snapshots.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userid")]
    pub user_id: String,

    #[serde(default)]
    pub handle: Option<String>,

    #[serde(default, rename = "handlelowercase")]
    pub handle_lowercase: Option<String>,

    #[serde(default, rename = "displayname")]
    pub display_name: Option<String>,

    #[serde(default, rename = "pictureurl")]
    pub picture_url: Option<String>,

    #[serde(default, rename = "profileurl")]
    pub profile_url: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub banned: bool,

    #[serde(default, rename = "banexpires")]
    pub ban_expires: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub shadowbanned: bool,

    #[serde(default, rename = "shadowbanexpires")]
    pub shadowban_expires: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub muted: bool,

    #[serde(default, rename = "muteexpires")]
    pub mute_expires: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub role: UserRole,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "customtags")]
    pub custom_tags: Vec<String>,
}

impl User {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    /// Best label for display: display name, then handle, then id.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.handle.as_deref())
            .unwrap_or(&self.user_id)
    }
}

/// Body of `create_or_update_user`. The user id travels in the path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateUpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(rename = "displayname", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(rename = "pictureurl", skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,

    #[serde(rename = "profileurl", skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
}

/// Body of `set_banned_status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetBanStatusRequest {
    #[serde(rename = "applyeffect")]
    pub apply_effect: bool,

    /// Omit for a permanent ban.
    #[serde(rename = "expireseconds", skip_serializing_if = "Option::is_none")]
    pub expire_seconds: Option<u64>,
}

/// Body of `set_shadowban_status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetShadowbanStatusRequest {
    #[serde(rename = "applyeffect")]
    pub apply_effect: bool,

    #[serde(rename = "expireseconds", skip_serializing_if = "Option::is_none")]
    pub expire_seconds: Option<u64>,
}

/// Body of `search_users`. At least one criterion must be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchUsersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "userid", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Page of users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListUsersResult {
    #[serde(default)]
    pub cursor: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub more: bool,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteUserResult {
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub kind: String,

    #[serde(default)]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_user() {
        let user: User = serde_json::from_value(json!({
            "kind": "app.user",
            "userid": "u1",
            "handle": "fan1",
            "displayname": "Fan One",
            "banned": false,
            "shadowbanned": true,
            "role": "moderator"
        }))
        .unwrap();

        assert_eq!(user.user_id, "u1");
        assert_eq!(user.display_name.as_deref(), Some("Fan One"));
        assert!(user.shadowbanned);
        assert_eq!(user.role, UserRole::Moderator);
    }

    #[test]
    fn test_unknown_role() {
        let user: User = serde_json::from_value(json!({"userid": "u1", "role": "owner"})).unwrap();
        assert_eq!(user.role, UserRole::Unknown);
    }

    #[test]
    fn test_label_fallbacks() {
        let mut user = User::new("u1");
        assert_eq!(user.label(), "u1");

        user.handle = Some("fan1".into());
        assert_eq!(user.label(), "fan1");

        user.display_name = Some("Fan One".into());
        assert_eq!(user.label(), "Fan One");
    }

    #[test]
    fn test_update_request_skips_unset_fields() {
        let req = CreateUpdateUserRequest {
            handle: Some("fan1".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"handle": "fan1"}));
    }
}
