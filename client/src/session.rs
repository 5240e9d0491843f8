//! Stateful chat session on top of [`SportsTalkClient`].
//!
//! The session remembers who is joined to which room, keeps a resume cursor
//! per joined room, hides shadowbanned events from everyone but their
//! author, and refuses to resend an identical command inside the throttle
//! window.
//!
//! Each public operation makes at most one network call. State is only
//! touched after that call has fully completed, inside a single critical
//! section, so dropping an in-flight future never leaves a half-applied
//! transition behind.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use sportstalk_protocol::{
    ChatEvent, ChatRoom, CommandResult, EventsByTimestampOptions, EventsByTypeOptions,
    ExecuteCommandRequest, GetUpdatesOptions, JoinResult, JoinRoomRequest,
    ListEventsByTimestampResult, ListEventsResult, ListOptions, QuotedReplyRequest,
    SearchEventsRequest, ThreadedReplyRequest, UpdatesResult, User,
};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::api::SportsTalkClient;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::shadowban::{filter_shadowbanned, strip_hidden_quotes};
use crate::state::SessionState;
use crate::transport::{HttpRemote, RemoteApi};

/// A chat client bound to one (at most) joined room at a time.
///
/// Commands assume the caller has joined the target room; this is not
/// checked locally and the server answers with its own error otherwise.
pub struct ChatSession<R = HttpRemote> {
    client: SportsTalkClient<R>,
    state: Mutex<SessionState>,
}

impl ChatSession<HttpRemote> {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = SportsTalkClient::new(config)?;
        Ok(Self::with_client(client, config.throttle_window))
    }
}

impl<R: RemoteApi> ChatSession<R> {
    pub fn with_client(client: SportsTalkClient<R>, throttle_window: Duration) -> Self {
        Self {
            client,
            state: Mutex::new(SessionState::new(throttle_window)),
        }
    }

    /// Stateless client for the passthrough calls (rooms, users,
    /// moderation, comments).
    pub fn client(&self) -> &SportsTalkClient<R> {
        &self.client
    }

    // The lock is never held across an await, so a poisoned mutex can only
    // come from a panic inside one of the short sync sections below.
    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // === Session lifecycle ===

    pub async fn join_room(&self, room_id: &str, request: JoinRoomRequest) -> Result<JoinResult> {
        let result = self.client.join_room(room_id, &request).await?;
        Ok(self.complete_join(room_id, result))
    }

    /// Join by the room's custom id. The resume cursor is stored under the
    /// custom id.
    pub async fn join_room_by_custom_id(
        &self,
        custom_id: &str,
        request: JoinRoomRequest,
    ) -> Result<JoinResult> {
        let result = self.client.join_room_by_custom_id(custom_id, &request).await?;
        Ok(self.complete_join(custom_id, result))
    }

    /// Join without a user identity.
    #[deprecated(note = "anonymous joins are no longer accepted by the SportsTalk server; use join_room with a user id")]
    pub async fn join_room_anonymous(&self, room_id: &str) -> Result<JoinResult> {
        self.join_room(room_id, JoinRoomRequest::default()).await
    }

    fn complete_join(&self, room_key: &str, mut result: JoinResult) -> JoinResult {
        let mut state = self.state();
        state.enter(room_key, &result);

        if let Some(page) = result.events_cursor.as_mut() {
            page.events = filter_shadowbanned(std::mem::take(&mut page.events), state.viewer());
        }

        info!(
            room = room_key,
            user = state.viewer().unwrap_or("<anonymous>"),
            cursor = result.cursor(),
            "Joined room"
        );

        result
    }

    /// Leave a room.
    ///
    /// Local state is cleared even when the server call fails; the error is
    /// still returned.
    pub async fn exit_room(&self, room_id: &str, user_id: &str) -> Result<()> {
        let outcome = self.client.exit_room(room_id, user_id).await;

        self.state().leave(room_id);

        match &outcome {
            Ok(()) => info!(room = room_id, user = user_id, "Exited room"),
            Err(e) => warn!(room = room_id, user = user_id, error = %e, "Exit failed, local session cleared anyway"),
        }

        outcome
    }

    // === Event listings ===

    /// Fetch new events. Pass the cursor from [`room_cursor`] (or from the
    /// previous page) to resume; the session does not fill it in.
    ///
    /// [`room_cursor`]: ChatSession::room_cursor
    pub async fn get_updates(&self, room_id: &str, options: GetUpdatesOptions) -> Result<UpdatesResult> {
        let page = self.client.get_updates(room_id, &options).await?;
        Ok(self.filter_page(page))
    }

    pub async fn list_previous_events(
        &self,
        room_id: &str,
        options: ListOptions,
    ) -> Result<ListEventsResult> {
        let page = self.client.list_previous_events(room_id, &options).await?;
        Ok(self.filter_page(page))
    }

    pub async fn list_events_history(
        &self,
        room_id: &str,
        options: ListOptions,
    ) -> Result<ListEventsResult> {
        let page = self.client.list_events_history(room_id, &options).await?;
        Ok(self.filter_page(page))
    }

    pub async fn list_events_by_type(
        &self,
        room_id: &str,
        options: EventsByTypeOptions,
    ) -> Result<ListEventsResult> {
        let page = self.client.list_events_by_type(room_id, &options).await?;
        Ok(self.filter_page(page))
    }

    pub async fn list_events_by_timestamp(
        &self,
        room_id: &str,
        options: EventsByTimestampOptions,
    ) -> Result<ListEventsByTimestampResult> {
        let mut page = self.client.list_events_by_timestamp(room_id, &options).await?;
        page.events = self.filter_events(std::mem::take(&mut page.events));
        Ok(page)
    }

    pub async fn search_event_history(
        &self,
        request: SearchEventsRequest,
    ) -> Result<ListEventsResult> {
        let page = self.client.search_event_history(&request).await?;
        Ok(self.filter_page(page))
    }

    pub async fn list_messages_by_user(
        &self,
        room_id: &str,
        user_id: &str,
        options: ListOptions,
    ) -> Result<ListEventsResult> {
        let page = self
            .client
            .list_messages_by_user(room_id, user_id, &options)
            .await?;
        Ok(self.filter_page(page))
    }

    fn filter_page(&self, mut page: UpdatesResult) -> UpdatesResult {
        page.events = self.filter_events(std::mem::take(&mut page.events));
        page
    }

    fn filter_events(&self, events: Vec<ChatEvent>) -> Vec<ChatEvent> {
        let state = self.state();
        filter_shadowbanned(events, state.viewer())
    }

    // === Sending ===

    /// Send speech or a slash command.
    ///
    /// Fails with [`Error::Throttled`] and makes no call when `command` is
    /// identical to the previous one and the throttle window has not passed.
    pub async fn execute_chat_command(
        &self,
        room_id: &str,
        request: ExecuteCommandRequest,
    ) -> Result<CommandResult> {
        self.acquire_send(&request.command)?;
        self.client.execute_chat_command(room_id, &request).await
    }

    /// Reply in a thread under `reply_to`. Throttled on the reply body; a
    /// hidden event embedded in the returned reply is dropped.
    pub async fn send_threaded_reply(
        &self,
        room_id: &str,
        reply_to: &str,
        request: ThreadedReplyRequest,
    ) -> Result<ChatEvent> {
        self.acquire_send(&request.body)?;
        let reply = self
            .client
            .send_threaded_reply(room_id, reply_to, &request)
            .await?;
        Ok(self.strip_quotes(reply))
    }

    /// Quote `reply_to` in a new message. Throttled on the reply body.
    pub async fn send_quoted_reply(
        &self,
        room_id: &str,
        reply_to: &str,
        request: QuotedReplyRequest,
    ) -> Result<ChatEvent> {
        self.acquire_send(&request.body)?;
        let reply = self
            .client
            .send_quoted_reply(room_id, reply_to, &request)
            .await?;
        Ok(self.strip_quotes(reply))
    }

    fn strip_quotes(&self, mut event: ChatEvent) -> ChatEvent {
        let state = self.state();
        strip_hidden_quotes(&mut event, state.viewer());
        event
    }

    fn acquire_send(&self, body: &str) -> Result<()> {
        let mut state = self.state();
        if state.throttle.try_acquire(body, Instant::now()) {
            return Ok(());
        }

        let window = state.throttle.window();
        drop(state);

        debug!(body = body, window = ?window, "Duplicate command throttled");
        Err(Error::throttled(window))
    }

    // === Subscriptions ===

    /// Mark a room for an external poller to keep calling `get_updates` on.
    pub fn start_listening_to_chat_updates(&self, room_id: &str) {
        self.state().subscriptions.insert(room_id.to_string());
    }

    pub fn stop_listening_to_chat_updates(&self, room_id: &str) {
        self.state().subscriptions.remove(room_id);
    }

    pub fn is_listening(&self, room_id: &str) -> bool {
        self.state().subscriptions.contains(room_id)
    }

    pub fn subscriptions(&self) -> HashSet<String> {
        self.state().subscriptions.clone()
    }

    // === Snapshots ===

    pub fn current_user(&self) -> Option<User> {
        self.state().user.clone()
    }

    pub fn current_room(&self) -> Option<ChatRoom> {
        self.state().room.clone()
    }

    pub fn is_joined(&self) -> bool {
        self.state().room.is_some()
    }

    pub fn room_cursor(&self, room_id: &str) -> Option<String> {
        self.state().cursors.get(room_id).map(str::to_string)
    }

    /// Advance the stored cursor, typically with `cursor` from the last
    /// `get_updates` page.
    pub fn set_room_cursor(&self, room_id: &str, cursor: &str) {
        self.state().cursors.set(room_id, cursor);
    }

    pub fn clear_room_cursor(&self, room_id: &str) {
        self.state().cursors.clear(room_id);
    }
}
