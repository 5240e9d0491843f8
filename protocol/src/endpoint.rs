//! Endpoint table and the plain-data request a transport executes.

use serde::Serialize;
use serde_json::Value;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Every SportsTalk operation the SDK can issue.
///
/// Paths are relative to `{endpoint}/{app_id}/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// POST chat/rooms/ROOMID/join
    JoinRoom { room_id: String },

    /// POST chat/roomsbycustomid/CUSTOMID/join
    JoinRoomByCustomId { custom_id: String },

    /// POST chat/rooms/ROOMID/exit
    ExitRoom { room_id: String },

    /// GET chat/rooms/ROOMID/updates
    GetUpdates { room_id: String },

    /// GET chat/rooms/ROOMID/listpreviousevents
    ListPreviousEvents { room_id: String },

    /// GET chat/rooms/ROOMID/listeventshistory
    ListEventsHistory { room_id: String },

    /// GET chat/rooms/ROOMID/listeventsbytype
    ListEventsByType { room_id: String },

    /// GET chat/rooms/ROOMID/eventsbytimestamp/list/TIMESTAMP
    ListEventsByTimestamp { room_id: String, timestamp: i64 },

    /// POST chat/searchevents
    SearchEvents,

    /// POST chat/rooms/ROOMID/command
    ExecuteCommand { room_id: String },

    /// POST chat/rooms/ROOMID/events/EVENTID/threadedreply
    ThreadedReply { room_id: String, event_id: String },

    /// POST chat/rooms/ROOMID/events/EVENTID/quote
    QuotedReply { room_id: String, event_id: String },

    /// GET chat/rooms/ROOMID/messagesbyuser/USERID
    ListMessagesByUser { room_id: String, user_id: String },

    /// POST chat/rooms
    CreateRoom,

    /// GET chat/rooms/ROOMID
    GetRoom { room_id: String },

    /// GET chat/roomsbycustomid/CUSTOMID
    GetRoomByCustomId { custom_id: String },

    /// POST chat/rooms/ROOMID
    UpdateRoom { room_id: String },

    /// GET chat/rooms
    ListRooms,

    /// GET chat/rooms/ROOMID/participants
    ListParticipants { room_id: String },

    /// DELETE chat/rooms/ROOMID
    DeleteRoom { room_id: String },

    /// POST chat/rooms/ROOMID/bounce
    BounceUser { room_id: String },

    /// POST chat/rooms/ROOMID/mute
    MuteUser { room_id: String },

    /// DELETE chat/rooms/ROOMID/events/EVENTID
    DeleteEvent { room_id: String, event_id: String },

    /// PUT chat/rooms/ROOMID/events/EVENTID/setdeleted
    SetEventDeleted { room_id: String, event_id: String },

    /// POST chat/rooms/ROOMID/events/EVENTID/report
    ReportMessage { room_id: String, event_id: String },

    /// POST chat/rooms/ROOMID/events/EVENTID/react
    ReactToEvent { room_id: String, event_id: String },

    /// GET chat/moderation/queues/events
    ListModerationQueue,

    /// POST chat/moderation/queues/events/EVENTID/applydecision
    ApplyModerationDecision { event_id: String },

    /// POST user/users/USERID
    CreateOrUpdateUser { user_id: String },

    /// GET user/users/USERID
    GetUser { user_id: String },

    /// GET user/users
    ListUsers,

    /// POST user/search
    SearchUsers,

    /// DELETE user/users/USERID
    DeleteUser { user_id: String },

    /// POST user/users/USERID/ban
    SetBanStatus { user_id: String },

    /// POST user/users/USERID/shadowban
    SetShadowbanStatus { user_id: String },

    /// POST comment/conversations
    CreateConversation,

    /// GET comment/conversations/CONVERSATIONID
    GetConversation { conversation_id: String },

    /// GET comment/conversations
    ListConversations,

    /// DELETE comment/conversations/CONVERSATIONID
    DeleteConversation { conversation_id: String },

    /// POST comment/conversations/CONVERSATIONID/comments
    CreateComment { conversation_id: String },

    /// GET comment/conversations/CONVERSATIONID/comments/COMMENTID
    GetComment {
        conversation_id: String,
        comment_id: String,
    },

    /// GET comment/conversations/CONVERSATIONID/comments
    ListComments { conversation_id: String },

    /// POST comment/conversations/CONVERSATIONID/comments/COMMENTID
    ReplyToComment {
        conversation_id: String,
        comment_id: String,
    },

    /// GET comment/conversations/CONVERSATIONID/comments/COMMENTID/replies
    ListReplies {
        conversation_id: String,
        comment_id: String,
    },

    /// DELETE comment/conversations/CONVERSATIONID/comments/COMMENTID
    DeleteComment {
        conversation_id: String,
        comment_id: String,
    },

    /// POST comment/conversations/CONVERSATIONID/comments/COMMENTID/react
    ReactToComment {
        conversation_id: String,
        comment_id: String,
    },

    /// POST comment/conversations/CONVERSATIONID/comments/COMMENTID/vote
    VoteOnComment {
        conversation_id: String,
        comment_id: String,
    },
}

impl Endpoint {
    pub fn method(&self) -> HttpMethod {
        match self {
            Self::GetUpdates { .. }
            | Self::ListPreviousEvents { .. }
            | Self::ListEventsHistory { .. }
            | Self::ListEventsByType { .. }
            | Self::ListEventsByTimestamp { .. }
            | Self::ListMessagesByUser { .. }
            | Self::GetRoom { .. }
            | Self::GetRoomByCustomId { .. }
            | Self::ListRooms
            | Self::ListParticipants { .. }
            | Self::ListModerationQueue
            | Self::GetUser { .. }
            | Self::ListUsers
            | Self::GetConversation { .. }
            | Self::ListConversations
            | Self::GetComment { .. }
            | Self::ListComments { .. }
            | Self::ListReplies { .. } => HttpMethod::Get,

            Self::SetEventDeleted { .. } => HttpMethod::Put,

            Self::DeleteRoom { .. }
            | Self::DeleteEvent { .. }
            | Self::DeleteUser { .. }
            | Self::DeleteConversation { .. }
            | Self::DeleteComment { .. } => HttpMethod::Delete,

            _ => HttpMethod::Post,
        }
    }

    /// Unescaped path segments. The transport is responsible for
    /// percent-encoding each one.
    pub fn segments(&self) -> Vec<String> {
        fn seg(parts: &[&str]) -> Vec<String> {
            parts.iter().map(|p| p.to_string()).collect()
        }

        match self {
            Self::JoinRoom { room_id } => seg(&["chat", "rooms", room_id, "join"]),
            Self::JoinRoomByCustomId { custom_id } => {
                seg(&["chat", "roomsbycustomid", custom_id, "join"])
            }
            Self::ExitRoom { room_id } => seg(&["chat", "rooms", room_id, "exit"]),
            Self::GetUpdates { room_id } => seg(&["chat", "rooms", room_id, "updates"]),
            Self::ListPreviousEvents { room_id } => {
                seg(&["chat", "rooms", room_id, "listpreviousevents"])
            }
            Self::ListEventsHistory { room_id } => {
                seg(&["chat", "rooms", room_id, "listeventshistory"])
            }
            Self::ListEventsByType { room_id } => {
                seg(&["chat", "rooms", room_id, "listeventsbytype"])
            }
            Self::ListEventsByTimestamp { room_id, timestamp } => seg(&[
                "chat",
                "rooms",
                room_id,
                "eventsbytimestamp",
                "list",
                &timestamp.to_string(),
            ]),
            Self::SearchEvents => seg(&["chat", "searchevents"]),
            Self::ExecuteCommand { room_id } => seg(&["chat", "rooms", room_id, "command"]),
            Self::ThreadedReply { room_id, event_id } => seg(&[
                "chat",
                "rooms",
                room_id,
                "events",
                event_id,
                "threadedreply",
            ]),
            Self::QuotedReply { room_id, event_id } => {
                seg(&["chat", "rooms", room_id, "events", event_id, "quote"])
            }
            Self::ListMessagesByUser { room_id, user_id } => {
                seg(&["chat", "rooms", room_id, "messagesbyuser", user_id])
            }
            Self::CreateRoom | Self::ListRooms => seg(&["chat", "rooms"]),
            Self::GetRoom { room_id }
            | Self::UpdateRoom { room_id }
            | Self::DeleteRoom { room_id } => seg(&["chat", "rooms", room_id]),
            Self::GetRoomByCustomId { custom_id } => {
                seg(&["chat", "roomsbycustomid", custom_id])
            }
            Self::ListParticipants { room_id } => {
                seg(&["chat", "rooms", room_id, "participants"])
            }
            Self::BounceUser { room_id } => seg(&["chat", "rooms", room_id, "bounce"]),
            Self::MuteUser { room_id } => seg(&["chat", "rooms", room_id, "mute"]),
            Self::DeleteEvent { room_id, event_id } => {
                seg(&["chat", "rooms", room_id, "events", event_id])
            }
            Self::SetEventDeleted { room_id, event_id } => {
                seg(&["chat", "rooms", room_id, "events", event_id, "setdeleted"])
            }
            Self::ReportMessage { room_id, event_id } => {
                seg(&["chat", "rooms", room_id, "events", event_id, "report"])
            }
            Self::ReactToEvent { room_id, event_id } => {
                seg(&["chat", "rooms", room_id, "events", event_id, "react"])
            }
            Self::ListModerationQueue => seg(&["chat", "moderation", "queues", "events"]),
            Self::ApplyModerationDecision { event_id } => seg(&[
                "chat",
                "moderation",
                "queues",
                "events",
                event_id,
                "applydecision",
            ]),
            Self::CreateOrUpdateUser { user_id }
            | Self::GetUser { user_id }
            | Self::DeleteUser { user_id } => seg(&["user", "users", user_id]),
            Self::ListUsers => seg(&["user", "users"]),
            Self::SearchUsers => seg(&["user", "search"]),
            Self::SetBanStatus { user_id } => seg(&["user", "users", user_id, "ban"]),
            Self::SetShadowbanStatus { user_id } => {
                seg(&["user", "users", user_id, "shadowban"])
            }
            Self::CreateConversation | Self::ListConversations => {
                seg(&["comment", "conversations"])
            }
            Self::GetConversation { conversation_id }
            | Self::DeleteConversation { conversation_id } => {
                seg(&["comment", "conversations", conversation_id])
            }
            Self::CreateComment { conversation_id } | Self::ListComments { conversation_id } => {
                seg(&["comment", "conversations", conversation_id, "comments"])
            }
            Self::GetComment {
                conversation_id,
                comment_id,
            }
            | Self::ReplyToComment {
                conversation_id,
                comment_id,
            }
            | Self::DeleteComment {
                conversation_id,
                comment_id,
            } => seg(&[
                "comment",
                "conversations",
                conversation_id,
                "comments",
                comment_id,
            ]),
            Self::ListReplies {
                conversation_id,
                comment_id,
            } => seg(&[
                "comment",
                "conversations",
                conversation_id,
                "comments",
                comment_id,
                "replies",
            ]),
            Self::ReactToComment {
                conversation_id,
                comment_id,
            } => seg(&[
                "comment",
                "conversations",
                conversation_id,
                "comments",
                comment_id,
                "react",
            ]),
            Self::VoteOnComment {
                conversation_id,
                comment_id,
            } => seg(&[
                "comment",
                "conversations",
                conversation_id,
                "comments",
                comment_id,
                "vote",
            ]),
        }
    }

    /// Relative path, for logs and tests.
    pub fn path(&self) -> String {
        self.segments().join("/")
    }
}

/// One SportsTalk call described as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.endpoint.method()
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a query parameter only when a value is present. The server
    /// applies its own default for anything left out.
    pub fn optional_query<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Look up a query parameter by name.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
