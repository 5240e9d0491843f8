//! Chat rooms, membership and room administration payloads.

use serde::{Deserialize, Serialize};

use crate::event::{ChatEvent, UpdatesResult};
use crate::user::User;

/// How a room's messages are moderated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationType {
    /// Messages are visible immediately and can be reported afterwards.
    #[default]
    Post,
    /// Messages wait in the moderation queue until approved.
    Pre,
    #[serde(other)]
    Unknown,
}

/// A chat room.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatRoom {
    pub id: String,

    #[serde(default, rename = "appid")]
    pub app_id: Option<String>,

    #[serde(default, rename = "ownerid")]
    pub owner_id: Option<String>,

    #[serde(default, rename = "customid")]
    pub custom_id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub moderation: ModerationType,

    #[serde(default, rename = "maxreports")]
    pub max_reports: Option<u32>,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "enableactions")]
    pub enable_actions: bool,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "enableenterandexit")]
    pub enable_enter_and_exit: bool,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "enableprofanityfilter")]
    pub enable_profanity_filter: bool,

    #[serde(default, rename = "delaymessageseconds")]
    pub delay_message_seconds: Option<u32>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub open: bool,

    /// Participants currently in the room.
    #[serde(default, deserialize_with = "crate::de::null_default", rename = "inroom")]
    pub in_room: u32,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "bouncedusers")]
    pub bounced_users: Vec<String>,

    #[serde(default, rename = "whenmodified")]
    pub when_modified: Option<String>,
}

/// Body of `join_room` / `join_room_by_custom_id`.
///
/// `user_id` is the only required field for an authenticated join; the rest
/// update the user's profile as a side effect of joining.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JoinRoomRequest {
    #[serde(rename = "userid", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(rename = "displayname", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(rename = "pictureurl", skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,

    #[serde(rename = "profileurl", skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,

    /// Number of recent events to return with the join.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl JoinRoomRequest {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Default::default()
        }
    }

    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// Subscription record created by a join.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatSubscription {
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub kind: String,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default, rename = "roomid")]
    pub room_id: Option<String>,

    #[serde(default, rename = "roomcustomid")]
    pub room_custom_id: Option<String>,

    #[serde(default, rename = "userid")]
    pub user_id: Option<String>,

    #[serde(default, rename = "updated")]
    pub updated: Option<String>,
}

/// Response of a successful join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinResult {
    /// Absent for an anonymous join.
    #[serde(default)]
    pub user: Option<User>,

    pub room: ChatRoom,

    /// Recent events plus the cursor to resume `get_updates` from.
    #[serde(default, rename = "eventscursor")]
    pub events_cursor: Option<UpdatesResult>,

    #[serde(default)]
    pub subscription: Option<ChatSubscription>,
}

impl JoinResult {
    /// Cursor to store for the room, empty when the server sent none.
    pub fn cursor(&self) -> &str {
        self.events_cursor
            .as_ref()
            .and_then(|c| c.cursor.as_deref())
            .unwrap_or("")
    }
}

/// Body of `exit_room`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitRoomRequest {
    #[serde(rename = "userid")]
    pub user_id: String,
}

/// Body of `create_room`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "customid", skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderation: Option<ModerationType>,

    #[serde(rename = "maxreports", skip_serializing_if = "Option::is_none")]
    pub max_reports: Option<u32>,

    #[serde(rename = "enableactions", skip_serializing_if = "Option::is_none")]
    pub enable_actions: Option<bool>,

    #[serde(rename = "enableenterandexit", skip_serializing_if = "Option::is_none")]
    pub enable_enter_and_exit: Option<bool>,

    #[serde(rename = "enableprofanityfilter", skip_serializing_if = "Option::is_none")]
    pub enable_profanity_filter: Option<bool>,

    #[serde(rename = "delaymessageseconds", skip_serializing_if = "Option::is_none")]
    pub delay_message_seconds: Option<u32>,

    #[serde(rename = "roomisopen", skip_serializing_if = "Option::is_none")]
    pub room_is_open: Option<bool>,
}

/// Body of `update_room`. Same fields as creation; unset ones are untouched.
pub type UpdateRoomRequest = CreateRoomRequest;

/// Page of rooms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRoomsResult {
    #[serde(default)]
    pub cursor: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub more: bool,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub rooms: Vec<ChatRoom>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatRoomParticipant {
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub kind: String,

    pub user: User,
}

/// Page of room participants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListParticipantsResult {
    #[serde(default)]
    pub cursor: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub more: bool,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub participants: Vec<ChatRoomParticipant>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRoomResult {
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub kind: String,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "deletedEventsCount")]
    pub deleted_events_count: u64,

    #[serde(default)]
    pub room: Option<ChatRoom>,
}

/// Body of `bounce_user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BounceUserRequest {
    #[serde(rename = "userid")]
    pub user_id: String,

    /// `false` lifts an existing bounce.
    pub bounce: bool,

    /// Message shown in the room when the user is removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BounceUserResult {
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub kind: String,

    #[serde(default)]
    pub event: Option<ChatEvent>,

    #[serde(default)]
    pub room: Option<ChatRoom>,
}

/// Body of `mute_user_in_room`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuteUserRequest {
    #[serde(rename = "userid")]
    pub user_id: String,

    #[serde(rename = "applyeffect")]
    pub apply_effect: bool,

    #[serde(rename = "expireseconds", skip_serializing_if = "Option::is_none")]
    pub expire_seconds: Option<u64>,
}
