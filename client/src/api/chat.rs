use serde_json::Value;
use sportstalk_protocol::{
    ApiRequest, ChatEvent, CommandResult, DeleteEventResult, Endpoint, EventsByTimestampOptions,
    EventsByTypeOptions, ExecuteCommandRequest, ExitRoomRequest, GetUpdatesOptions, JoinResult,
    JoinRoomRequest, ListEventsByTimestampResult, ListEventsResult, ListOptions,
    QuotedReplyRequest, ReactToEventRequest, ReportMessageRequest, SearchEventsRequest,
    ThreadedReplyRequest, UpdatesResult,
};

use super::SportsTalkClient;
use crate::error::Result;
use crate::transport::RemoteApi;

impl<R: RemoteApi> SportsTalkClient<R> {
    pub async fn join_room(&self, room_id: &str, request: &JoinRoomRequest) -> Result<JoinResult> {
        let endpoint = Endpoint::JoinRoom {
            room_id: room_id.to_string(),
        };
        self.send_json(endpoint, request).await
    }

    pub async fn join_room_by_custom_id(
        &self,
        custom_id: &str,
        request: &JoinRoomRequest,
    ) -> Result<JoinResult> {
        let endpoint = Endpoint::JoinRoomByCustomId {
            custom_id: custom_id.to_string(),
        };
        self.send_json(endpoint, request).await
    }

    pub async fn exit_room(&self, room_id: &str, user_id: &str) -> Result<()> {
        let endpoint = Endpoint::ExitRoom {
            room_id: room_id.to_string(),
        };
        let body = ExitRoomRequest {
            user_id: user_id.to_string(),
        };
        self.send_json::<_, Value>(endpoint, &body).await?;
        Ok(())
    }

    pub async fn get_updates(
        &self,
        room_id: &str,
        options: &GetUpdatesOptions,
    ) -> Result<UpdatesResult> {
        let request = options.apply(ApiRequest::new(Endpoint::GetUpdates {
            room_id: room_id.to_string(),
        }));
        self.send(request).await
    }

    pub async fn list_previous_events(
        &self,
        room_id: &str,
        options: &ListOptions,
    ) -> Result<ListEventsResult> {
        let request = options.apply(ApiRequest::new(Endpoint::ListPreviousEvents {
            room_id: room_id.to_string(),
        }));
        self.send(request).await
    }

    /// Like `list_previous_events` but includes events that are no longer
    /// active (deleted, rejected).
    pub async fn list_events_history(
        &self,
        room_id: &str,
        options: &ListOptions,
    ) -> Result<ListEventsResult> {
        let request = options.apply(ApiRequest::new(Endpoint::ListEventsHistory {
            room_id: room_id.to_string(),
        }));
        self.send(request).await
    }

    pub async fn list_events_by_type(
        &self,
        room_id: &str,
        options: &EventsByTypeOptions,
    ) -> Result<ListEventsResult> {
        let request = options.apply(ApiRequest::new(Endpoint::ListEventsByType {
            room_id: room_id.to_string(),
        }));
        self.send(request).await
    }

    pub async fn list_events_by_timestamp(
        &self,
        room_id: &str,
        options: &EventsByTimestampOptions,
    ) -> Result<ListEventsByTimestampResult> {
        let request = options.apply(ApiRequest::new(Endpoint::ListEventsByTimestamp {
            room_id: room_id.to_string(),
            timestamp: options.timestamp,
        }));
        self.send(request).await
    }

    pub async fn search_event_history(
        &self,
        request: &SearchEventsRequest,
    ) -> Result<ListEventsResult> {
        self.send_json(Endpoint::SearchEvents, request).await
    }

    pub async fn list_messages_by_user(
        &self,
        room_id: &str,
        user_id: &str,
        options: &ListOptions,
    ) -> Result<ListEventsResult> {
        let request = options.apply(ApiRequest::new(Endpoint::ListMessagesByUser {
            room_id: room_id.to_string(),
            user_id: user_id.to_string(),
        }));
        self.send(request).await
    }

    pub async fn execute_chat_command(
        &self,
        room_id: &str,
        request: &ExecuteCommandRequest,
    ) -> Result<CommandResult> {
        let endpoint = Endpoint::ExecuteCommand {
            room_id: room_id.to_string(),
        };
        self.send_json(endpoint, request).await
    }

    pub async fn send_threaded_reply(
        &self,
        room_id: &str,
        reply_to: &str,
        request: &ThreadedReplyRequest,
    ) -> Result<ChatEvent> {
        let endpoint = Endpoint::ThreadedReply {
            room_id: room_id.to_string(),
            event_id: reply_to.to_string(),
        };
        self.send_json(endpoint, request).await
    }

    pub async fn send_quoted_reply(
        &self,
        room_id: &str,
        reply_to: &str,
        request: &QuotedReplyRequest,
    ) -> Result<ChatEvent> {
        let endpoint = Endpoint::QuotedReply {
            room_id: room_id.to_string(),
            event_id: reply_to.to_string(),
        };
        self.send_json(endpoint, request).await
    }

    /// Permanently delete an event. `force` deletes replies along with it.
    pub async fn delete_event(
        &self,
        room_id: &str,
        event_id: &str,
        user_id: &str,
        force: bool,
    ) -> Result<DeleteEventResult> {
        let request = ApiRequest::new(Endpoint::DeleteEvent {
            room_id: room_id.to_string(),
            event_id: event_id.to_string(),
        })
        .query("userid", user_id)
        .query("force", force);
        self.send(request).await
    }

    /// Mark an event deleted without removing it. With
    /// `permanent_if_no_replies` the server deletes it outright when nobody
    /// replied.
    pub async fn flag_event_logically_deleted(
        &self,
        room_id: &str,
        event_id: &str,
        user_id: &str,
        permanent_if_no_replies: bool,
    ) -> Result<DeleteEventResult> {
        let request = ApiRequest::new(Endpoint::SetEventDeleted {
            room_id: room_id.to_string(),
            event_id: event_id.to_string(),
        })
        .query("userid", user_id)
        .query("deleted", true)
        .query("permanentifnoreplies", permanent_if_no_replies);
        self.send(request).await
    }

    pub async fn report_message(
        &self,
        room_id: &str,
        event_id: &str,
        request: &ReportMessageRequest,
    ) -> Result<ChatEvent> {
        let endpoint = Endpoint::ReportMessage {
            room_id: room_id.to_string(),
            event_id: event_id.to_string(),
        };
        self.send_json(endpoint, request).await
    }

    pub async fn react_to_event(
        &self,
        room_id: &str,
        event_id: &str,
        request: &ReactToEventRequest,
    ) -> Result<ChatEvent> {
        let endpoint = Endpoint::ReactToEvent {
            room_id: room_id.to_string(),
            event_id: event_id.to_string(),
        };
        self.send_json(endpoint, request).await
    }
}
