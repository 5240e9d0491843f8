//! Stream-style surface over [`ChatSession`].
//!
//! Every operation comes back as a lazy single-item stream: nothing is sent
//! until the stream is first polled, and dropping it before then cancels the
//! call without side effects.

use std::future::Future;
use std::sync::Arc;

use futures_util::stream::{self, BoxStream, StreamExt};
use sportstalk_protocol::{
    ChatEvent, CommandResult, EventsByTimestampOptions, EventsByTypeOptions,
    ExecuteCommandRequest, GetUpdatesOptions, JoinResult, JoinRoomRequest,
    ListEventsByTimestampResult, ListEventsResult, ListOptions, QuotedReplyRequest,
    SearchEventsRequest, ThreadedReplyRequest, UpdatesResult,
};

use crate::error::Result;
use crate::session::ChatSession;
use crate::transport::{HttpRemote, RemoteApi};

/// Single-value stream of one operation's outcome.
pub type Single<T> = BoxStream<'static, Result<T>>;

fn single<T, Fut>(fut: Fut) -> Single<T>
where
    Fut: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
{
    stream::once(fut).boxed()
}

/// Reactive adapter sharing one [`ChatSession`].
pub struct ReactiveSession<R = HttpRemote> {
    session: Arc<ChatSession<R>>,
}

impl<R> Clone for ReactiveSession<R> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
        }
    }
}

impl<R: RemoteApi + 'static> ReactiveSession<R> {
    pub fn new(session: Arc<ChatSession<R>>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Arc<ChatSession<R>> {
        &self.session
    }

    pub fn join_room(&self, room_id: &str, request: JoinRoomRequest) -> Single<JoinResult> {
        let session = Arc::clone(&self.session);
        let room_id = room_id.to_string();
        single(async move { session.join_room(&room_id, request).await })
    }

    pub fn join_room_by_custom_id(&self, custom_id: &str, request: JoinRoomRequest) -> Single<JoinResult> {
        let session = Arc::clone(&self.session);
        let custom_id = custom_id.to_string();
        single(async move { session.join_room_by_custom_id(&custom_id, request).await })
    }

    pub fn exit_room(&self, room_id: &str, user_id: &str) -> Single<()> {
        let session = Arc::clone(&self.session);
        let room_id = room_id.to_string();
        let user_id = user_id.to_string();
        single(async move { session.exit_room(&room_id, &user_id).await })
    }

    pub fn get_updates(&self, room_id: &str, options: GetUpdatesOptions) -> Single<UpdatesResult> {
        let session = Arc::clone(&self.session);
        let room_id = room_id.to_string();
        single(async move { session.get_updates(&room_id, options).await })
    }

    pub fn list_previous_events(&self, room_id: &str, options: ListOptions) -> Single<ListEventsResult> {
        let session = Arc::clone(&self.session);
        let room_id = room_id.to_string();
        single(async move { session.list_previous_events(&room_id, options).await })
    }

    pub fn list_events_history(&self, room_id: &str, options: ListOptions) -> Single<ListEventsResult> {
        let session = Arc::clone(&self.session);
        let room_id = room_id.to_string();
        single(async move { session.list_events_history(&room_id, options).await })
    }

    pub fn list_events_by_type(
        &self,
        room_id: &str,
        options: EventsByTypeOptions,
    ) -> Single<ListEventsResult> {
        let session = Arc::clone(&self.session);
        let room_id = room_id.to_string();
        single(async move { session.list_events_by_type(&room_id, options).await })
    }

    pub fn list_events_by_timestamp(
        &self,
        room_id: &str,
        options: EventsByTimestampOptions,
    ) -> Single<ListEventsByTimestampResult> {
        let session = Arc::clone(&self.session);
        let room_id = room_id.to_string();
        single(async move { session.list_events_by_timestamp(&room_id, options).await })
    }

    pub fn search_event_history(&self, request: SearchEventsRequest) -> Single<ListEventsResult> {
        let session = Arc::clone(&self.session);
        single(async move { session.search_event_history(request).await })
    }

    pub fn list_messages_by_user(
        &self,
        room_id: &str,
        user_id: &str,
        options: ListOptions,
    ) -> Single<ListEventsResult> {
        let session = Arc::clone(&self.session);
        let room_id = room_id.to_string();
        let user_id = user_id.to_string();
        single(async move { session.list_messages_by_user(&room_id, &user_id, options).await })
    }

    pub fn execute_chat_command(
        &self,
        room_id: &str,
        request: ExecuteCommandRequest,
    ) -> Single<CommandResult> {
        let session = Arc::clone(&self.session);
        let room_id = room_id.to_string();
        single(async move { session.execute_chat_command(&room_id, request).await })
    }

    pub fn send_threaded_reply(
        &self,
        room_id: &str,
        reply_to: &str,
        request: ThreadedReplyRequest,
    ) -> Single<ChatEvent> {
        let session = Arc::clone(&self.session);
        let room_id = room_id.to_string();
        let reply_to = reply_to.to_string();
        single(async move { session.send_threaded_reply(&room_id, &reply_to, request).await })
    }

    pub fn send_quoted_reply(
        &self,
        room_id: &str,
        reply_to: &str,
        request: QuotedReplyRequest,
    ) -> Single<ChatEvent> {
        let session = Arc::clone(&self.session);
        let room_id = room_id.to_string();
        let reply_to = reply_to.to_string();
        single(async move { session.send_quoted_reply(&room_id, &reply_to, request).await })
    }

    pub fn start_listening_to_chat_updates(&self, room_id: &str) {
        self.session.start_listening_to_chat_updates(room_id);
    }

    pub fn stop_listening_to_chat_updates(&self, room_id: &str) {
        self.session.stop_listening_to_chat_updates(room_id);
    }
}
