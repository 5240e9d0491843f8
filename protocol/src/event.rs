//! Chat events and the payloads that produce or list them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::room::ChatRoom;
use crate::user::User;

/// Kind of a chat event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Speech,
    Action,
    Reply,
    Quote,
    Reaction,
    Announcement,
    Custom,
    Purge,
    Bounce,
    Replace,
    Remove,
    RoomOpened,
    RoomClosed,
    Goal,
    Ad,
    #[serde(other)]
    Unknown,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Speech => "speech",
            Self::Action => "action",
            Self::Reply => "reply",
            Self::Quote => "quote",
            Self::Reaction => "reaction",
            Self::Announcement => "announcement",
            Self::Custom => "custom",
            Self::Purge => "purge",
            Self::Bounce => "bounce",
            Self::Replace => "replace",
            Self::Remove => "remove",
            Self::RoomOpened => "roomopened",
            Self::RoomClosed => "roomclosed",
            Self::Goal => "goal",
            Self::Ad => "ad",
            Self::Unknown => "unknown",
        }
    }
}

/// Moderation status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationState {
    /// Not subject to moderation.
    #[default]
    Na,
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

/// Aggregated reactions of one type on an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    #[serde(rename = "type")]
    pub reaction_type: String,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub count: u64,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub users: Vec<User>,
}

/// A report filed against an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventReport {
    #[serde(default, rename = "userid")]
    pub user_id: Option<String>,

    #[serde(default)]
    pub reason: Option<String>,
}

/// One chat message, action or system notice.
///
/// Produced by the server. The session only decides which events a viewer
/// gets to see, dropping hidden ones and any hidden copy in `reply_to`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatEvent {
    pub id: String,

    #[serde(default, rename = "roomid")]
    pub room_id: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub body: String,

    #[serde(default, rename = "originalbody")]
    pub original_body: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "eventtype")]
    pub event_type: EventType,

    /// Author of the event.
    #[serde(default, rename = "userid")]
    pub user_id: Option<String>,

    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub added: Option<String>,

    #[serde(default)]
    pub modified: Option<String>,

    /// Server-side ordering timestamp.
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub ts: i64,

    #[serde(default, rename = "customtype")]
    pub custom_type: Option<String>,

    #[serde(default, rename = "customid")]
    pub custom_id: Option<String>,

    #[serde(default, rename = "custompayload")]
    pub custom_payload: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "customtags")]
    pub custom_tags: Vec<String>,

    /// Event this one replies to or quotes.
    #[serde(default, rename = "replyto")]
    pub reply_to: Option<Box<ChatEvent>>,

    /// Parent of a threaded reply.
    #[serde(default, rename = "parentid")]
    pub parent_id: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub reactions: Vec<Reaction>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub moderation: ModerationState,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub reports: Vec<EventReport>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub active: bool,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub deleted: bool,

    /// Author was shadowbanned when the event was created.
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub shadowban: bool,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "likecount")]
    pub like_count: u64,
}

impl ChatEvent {
    /// Whether `viewer` may see this event.
    ///
    /// Shadowbanned events are only visible to their own author.
    pub fn is_visible_to(&self, viewer: Option<&str>) -> bool {
        !self.shadowban || self.user_id.as_deref() == viewer
    }
}

/// A page of events with the cursor to continue from.
///
/// Returned by `get_updates` and reused by every other event listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatesResult {
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub kind: String,

    #[serde(default)]
    pub cursor: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub more: bool,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "itemcount")]
    pub item_count: u32,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub events: Vec<ChatEvent>,
}

/// History, previous-events, search and moderation listings share the
/// updates page shape.
pub type ListEventsResult = UpdatesResult;

/// Events around a timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListEventsByTimestampResult {
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub kind: String,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub timestamp: i64,

    #[serde(default, rename = "cursorolder")]
    pub cursor_older: Option<String>,

    #[serde(default, rename = "cursornewer")]
    pub cursor_newer: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "moreolder")]
    pub more_older: bool,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "morenewer")]
    pub more_newer: bool,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "itemcount")]
    pub item_count: u32,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub events: Vec<ChatEvent>,
}

/// Body of `execute_chat_command`.
///
/// `command` is either plain speech or a slash command such as `/me waves`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecuteCommandRequest {
    pub command: String,

    #[serde(rename = "userid")]
    pub user_id: String,

    #[serde(rename = "customtype", skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<String>,

    #[serde(rename = "customid", skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,

    #[serde(rename = "custompayload", skip_serializing_if = "Option::is_none")]
    pub custom_payload: Option<String>,

    #[serde(rename = "customtags", skip_serializing_if = "Vec::is_empty")]
    pub custom_tags: Vec<String>,

    /// Id of an event to reply to.
    #[serde(rename = "replyto", skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

impl ExecuteCommandRequest {
    pub fn new(user_id: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            user_id: user_id.into(),
            ..Default::default()
        }
    }
}

/// What the server did with a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandOp {
    #[default]
    Speech,
    Action,
    Reply,
    Quote,
    Admin,
    #[serde(other)]
    Unknown,
}

/// Response of `execute_chat_command`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandResult {
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub kind: String,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub op: CommandOp,

    #[serde(default)]
    pub room: Option<ChatRoom>,

    #[serde(default)]
    pub speech: Option<ChatEvent>,

    #[serde(default)]
    pub action: Option<ChatEvent>,
}

impl CommandResult {
    /// The event the command produced, whichever slot it came back in.
    pub fn event(&self) -> Option<&ChatEvent> {
        self.speech.as_ref().or(self.action.as_ref())
    }
}

/// Body of `send_threaded_reply`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreadedReplyRequest {
    pub body: String,

    #[serde(rename = "userid")]
    pub user_id: String,

    #[serde(rename = "customtype", skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<String>,

    #[serde(rename = "customid", skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,

    #[serde(rename = "custompayload", skip_serializing_if = "Option::is_none")]
    pub custom_payload: Option<String>,
}

impl ThreadedReplyRequest {
    pub fn new(user_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            user_id: user_id.into(),
            ..Default::default()
        }
    }
}

/// Body of `send_quoted_reply`; same fields as a threaded reply.
pub type QuotedReplyRequest = ThreadedReplyRequest;

/// Body of `react_to_event`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactToEventRequest {
    #[serde(rename = "userid")]
    pub user_id: String,

    pub reaction: String,

    /// `false` removes the reaction.
    pub reacted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    #[default]
    Abuse,
    Spam,
}

/// Body of `report_message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMessageRequest {
    #[serde(rename = "userid")]
    pub user_id: String,

    #[serde(rename = "reporttype")]
    pub report_type: ReportType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDirection {
    Forward,
    #[default]
    Backward,
}

/// Body of `search_event_history`. At least one of the `from_*` or `room_*`
/// criteria must be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchEventsRequest {
    #[serde(rename = "fromuserid", skip_serializing_if = "Option::is_none")]
    pub from_user_id: Option<String>,

    #[serde(rename = "fromhandle", skip_serializing_if = "Option::is_none")]
    pub from_handle: Option<String>,

    #[serde(rename = "roomid", skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,

    #[serde(rename = "roomcustomid", skip_serializing_if = "Option::is_none")]
    pub room_custom_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SearchDirection>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<EventType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteEventResult {
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub kind: String,

    #[serde(default)]
    pub event: Option<ChatEvent>,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "permanentdelete")]
    pub permanent_delete: bool,
}

/// Arbitrary JSON payload carried in `custompayload` fields, parsed on demand.
pub fn parse_custom_payload(event: &ChatEvent) -> Option<Value> {
    event
        .custom_payload
        .as_deref()
        .and_then(|p| serde_json::from_str(p).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_event() {
        let event: ChatEvent = serde_json::from_value(json!({
            "kind": "chat.event",
            "id": "e1",
            "roomid": "r1",
            "body": "what a goal",
            "eventtype": "speech",
            "userid": "u1",
            "ts": 637464818211988900i64,
            "shadowban": true,
            "moderation": "approved",
            "reactions": [{"type": "like", "count": 2, "users": []}]
        }))
        .unwrap();

        assert_eq!(event.room_id.as_deref(), Some("r1"));
        assert!(event.shadowban);
        assert_eq!(event.moderation, ModerationState::Approved);
        assert_eq!(event.reactions[0].count, 2);
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let page: UpdatesResult = serde_json::from_value(json!({
            "cursor": "c2",
            "more": null,
            "itemcount": null,
            "events": [{
                "id": "e1",
                "userid": "u1",
                "body": null,
                "eventtype": null,
                "customtags": null,
                "reactions": null,
                "reports": null,
                "active": null,
                "deleted": null,
                "shadowban": null,
                "likecount": null,
                "user": {"userid": "u1", "banned": null, "customtags": null}
            }]
        }))
        .unwrap();

        assert_eq!(page.cursor.as_deref(), Some("c2"));
        assert!(!page.more);
        let event = &page.events[0];
        assert!(event.custom_tags.is_empty());
        assert!(event.reactions.is_empty());
        assert!(!event.active);
        assert!(!event.shadowban);
        assert_eq!(event.event_type, EventType::Speech);
        assert!(!event.user.as_ref().unwrap().banned);
    }

    #[test]
    fn test_unknown_event_type() {
        let event: ChatEvent =
            serde_json::from_value(json!({"id": "e1", "eventtype": "sticker"})).unwrap();
        assert_eq!(event.event_type, EventType::Unknown);
    }

    #[test]
    fn test_event_type_as_str_matches_serde() {
        for ty in [EventType::Speech, EventType::RoomOpened, EventType::Custom] {
            assert_eq!(serde_json::to_value(ty).unwrap(), json!(ty.as_str()));
        }
    }

    #[test]
    fn test_shadowbanned_visible_only_to_author() {
        let event = ChatEvent {
            id: "e1".into(),
            user_id: Some("u1".into()),
            shadowban: true,
            ..Default::default()
        };

        assert!(event.is_visible_to(Some("u1")));
        assert!(!event.is_visible_to(Some("u2")));
        assert!(!event.is_visible_to(None));
    }

    #[test]
    fn test_command_result_event() {
        let result: CommandResult = serde_json::from_value(json!({
            "kind": "chat.executecommand",
            "op": "action",
            "action": {"id": "e2", "eventtype": "action", "body": "waves"}
        }))
        .unwrap();

        assert_eq!(result.op, CommandOp::Action);
        assert_eq!(result.event().unwrap().id, "e2");
    }

    #[test]
    fn test_command_request_body() {
        let req = ExecuteCommandRequest::new("u1", "hello");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"command": "hello", "userid": "u1"})
        );
    }

    #[test]
    fn test_custom_payload() {
        let event = ChatEvent {
            id: "e1".into(),
            custom_payload: Some(r#"{"poll":"p1"}"#.into()),
            ..Default::default()
        };
        assert_eq!(parse_custom_payload(&event), Some(json!({"poll": "p1"})));
    }
}
