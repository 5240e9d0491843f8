//! Wire-level types for the SportsTalk REST API.
//!
//! This crate knows what the server accepts and returns but never touches
//! the network. `sportstalk-client` builds [`ApiRequest`] values from the
//! [`Endpoint`] table, hands them to a transport, and decodes the
//! [`ApiResponse`] envelope that comes back.
//!
//! ```text
//! sportstalk-protocol (models, endpoints, envelope) ← THIS CRATE
//!        │
//!        ▼
//! sportstalk-client (transport, chat session, call-style adapters)
//! ```

use thiserror::Error;

pub mod comment;
mod de;
pub mod endpoint;
pub mod envelope;
pub mod event;
pub mod moderation;
pub mod options;
pub mod room;
pub mod user;

pub use comment::{
    Comment, CommentReactionRequest, CommentSort, Conversation, CreateCommentRequest,
    CreateConversationRequest, DeleteCommentResult, DeleteConversationResult,
    ListCommentsResult, ListConversationsResult, Vote, VoteRequest,
};
pub use endpoint::{ApiRequest, Endpoint, HttpMethod};
pub use envelope::{ApiError, ApiResponse, parse_envelope};
pub use event::{
    ChatEvent, CommandOp, CommandResult, DeleteEventResult, EventType, ExecuteCommandRequest,
    ListEventsByTimestampResult, ListEventsResult, ModerationState, QuotedReplyRequest,
    Reaction, ReactToEventRequest, ReportMessageRequest, ReportType, SearchEventsRequest,
    SearchDirection, ThreadedReplyRequest, UpdatesResult,
};
pub use moderation::ApproveMessageRequest;
pub use options::{
    DEFAULT_LIMIT, EventsByTimestampOptions, EventsByTypeOptions, GetUpdatesOptions,
    ListCommentsOptions, ListOptions,
};
pub use room::{
    BounceUserRequest, BounceUserResult, ChatRoom, ChatRoomParticipant, ChatSubscription,
    CreateRoomRequest, DeleteRoomResult, ExitRoomRequest, JoinResult, JoinRoomRequest,
    ListParticipantsResult, ListRoomsResult, ModerationType, MuteUserRequest,
    UpdateRoomRequest,
};
pub use user::{
    CreateUpdateUserRequest, DeleteUserResult, ListUsersResult, SearchUsersRequest,
    SetBanStatusRequest, SetShadowbanStatusRequest, User, UserRole,
};

/// Errors produced while decoding a response body.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Empty response body")]
    EmptyBody,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
