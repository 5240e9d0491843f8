use sportstalk_protocol::{
    ApiRequest, ApproveMessageRequest, ChatEvent, Endpoint, ListEventsResult, ListOptions,
};

use super::SportsTalkClient;
use crate::error::Result;
use crate::transport::RemoteApi;

impl<R: RemoteApi> SportsTalkClient<R> {
    /// Events waiting in the pre-moderation queue, optionally for one room.
    pub async fn list_messages_needing_moderation(
        &self,
        room_id: Option<&str>,
        options: &ListOptions,
    ) -> Result<ListEventsResult> {
        let request = ApiRequest::new(Endpoint::ListModerationQueue).optional_query("roomid", room_id);
        self.send(options.apply(request)).await
    }

    /// Approve (`true`) or reject (`false`) a queued event.
    pub async fn approve_message(&self, event_id: &str, approve: bool) -> Result<ChatEvent> {
        let endpoint = Endpoint::ApplyModerationDecision {
            event_id: event_id.to_string(),
        };
        self.send_json(endpoint, &ApproveMessageRequest { approve })
            .await
    }
}
