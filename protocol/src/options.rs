//! Optional parameters for list-style calls.
//!
//! Every field is optional. Anything left as `None` is simply not sent and
//! the server applies its own default.

use serde::{Deserialize, Serialize};

use crate::comment::CommentSort;
use crate::endpoint::ApiRequest;

/// Page size the server uses when `limit` is not sent.
pub const DEFAULT_LIMIT: u32 = 200;

/// Plain cursor pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Page size, server default [`DEFAULT_LIMIT`].
    pub limit: Option<u32>,
    /// Cursor returned by the previous page.
    pub cursor: Option<String>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .optional_query("limit", self.limit)
            .optional_query("cursor", self.cursor.as_deref())
    }
}

/// Options for `get_updates`.
///
/// The session never fills in `cursor` on its own. Callers that want to
/// resume polling read it back from the session's cursor store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUpdatesOptions {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl GetUpdatesOptions {
    pub fn with_cursor(cursor: impl Into<String>) -> Self {
        Self {
            limit: None,
            cursor: Some(cursor.into()),
        }
    }

    pub fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .optional_query("limit", self.limit)
            .optional_query("cursor", self.cursor.as_deref())
    }
}

/// Options for `list_events_by_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsByTypeOptions {
    /// One of the event type tags, e.g. `speech` or `custom`.
    pub event_type: String,
    /// Required by the server when `event_type` is `custom`.
    pub custom_type: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl EventsByTypeOptions {
    pub fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .query("eventtype", &self.event_type)
            .optional_query("customtype", self.custom_type.as_deref())
            .optional_query("limit", self.limit)
            .optional_query("cursor", self.cursor.as_deref())
    }
}

/// Options for `list_events_by_timestamp`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsByTimestampOptions {
    /// Server timestamp (`ts` on an event) to center the window on.
    pub timestamp: i64,
    /// Events older than `timestamp` to include.
    pub limit_older: Option<u32>,
    /// Events newer than `timestamp` to include.
    pub limit_newer: Option<u32>,
}

impl EventsByTimestampOptions {
    pub fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .optional_query("limitolder", self.limit_older)
            .optional_query("limitnewer", self.limit_newer)
    }
}

/// Options for listing comments or replies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCommentsOptions {
    pub sort: Option<CommentSort>,
    pub include_inactive: Option<bool>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl ListCommentsOptions {
    pub fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .optional_query("sort", self.sort.map(|s| s.as_str()))
            .optional_query("includeinactive", self.include_inactive)
            .optional_query("limit", self.limit)
            .optional_query("cursor", self.cursor.as_deref())
    }
}
