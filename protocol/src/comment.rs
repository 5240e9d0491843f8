//! Conversations and comments.

use serde::{Deserialize, Serialize};

use crate::event::Reaction;
use crate::user::User;

/// A comment thread attached to a property (site section, article...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(rename = "conversationid")]
    pub conversation_id: String,

    #[serde(default, rename = "appid")]
    pub app_id: Option<String>,

    #[serde(default)]
    pub property: Option<String>,

    #[serde(default, rename = "customid")]
    pub custom_id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub moderation: Option<String>,

    #[serde(default, rename = "maxreports")]
    pub max_reports: Option<u32>,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "commentcount")]
    pub comment_count: u64,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub open: bool,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub tags: Vec<String>,
}

/// Body of `create_or_update_conversation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateConversationRequest {
    #[serde(rename = "conversationid")]
    pub conversation_id: String,

    pub property: String,

    #[serde(rename = "customid", skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderation: Option<String>,

    #[serde(rename = "maxreports", skip_serializing_if = "Option::is_none")]
    pub max_reports: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListConversationsResult {
    #[serde(default)]
    pub cursor: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub more: bool,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub conversations: Vec<Conversation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteConversationResult {
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub kind: String,

    #[serde(default, rename = "conversationid")]
    pub conversation_id: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "deletedconversations")]
    pub deleted_conversations: u64,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "deletedcomments")]
    pub deleted_comments: u64,
}

/// A comment or reply within a conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,

    #[serde(default, rename = "conversationid")]
    pub conversation_id: Option<String>,

    #[serde(default, rename = "parentid")]
    pub parent_id: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub body: String,

    #[serde(default, rename = "userid")]
    pub user_id: Option<String>,

    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub added: Option<String>,

    #[serde(default)]
    pub modified: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub reactions: Vec<Reaction>,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "votecount")]
    pub vote_count: i64,

    #[serde(default, deserialize_with = "crate::de::null_default", rename = "replycount")]
    pub reply_count: u64,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub deleted: bool,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub shadowban: bool,
}

/// Body of `create_comment` and `reply_to_comment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub body: String,

    #[serde(rename = "userid")]
    pub user_id: String,

    #[serde(rename = "customtype", skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<String>,

    #[serde(rename = "custompayload", skip_serializing_if = "Option::is_none")]
    pub custom_payload: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListCommentsResult {
    #[serde(default)]
    pub cursor: Option<String>,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub more: bool,

    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteCommentResult {
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub kind: String,

    #[serde(default)]
    pub comment: Option<Comment>,
}

/// Body of `react_to_comment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentReactionRequest {
    #[serde(rename = "userid")]
    pub user_id: String,

    pub reaction: String,

    pub reacted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Up,
    Down,
    /// Withdraws a previous vote.
    None,
}

/// Body of `vote_on_comment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteRequest {
    pub vote: Vote,

    #[serde(rename = "userid")]
    pub user_id: String,
}

/// Ordering for comment listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentSort {
    Oldest,
    Newest,
    Likes,
    Votes,
    Replies,
}

impl CommentSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oldest => "oldest",
            Self::Newest => "newest",
            Self::Likes => "likes",
            Self::Votes => "votes",
            Self::Replies => "replies",
        }
    }
}
