//! Callback-style surface over [`ChatSession`].
//!
//! Each method spawns the async operation on a tokio runtime and hands the
//! outcome to a `FnOnce` callback. The returned [`JoinHandle`] can be awaited
//! or aborted; aborting a join before the response arrives leaves the session
//! untouched.

use std::future::Future;
use std::sync::Arc;

use sportstalk_protocol::{
    ChatEvent, CommandResult, EventsByTimestampOptions, EventsByTypeOptions,
    ExecuteCommandRequest, GetUpdatesOptions, JoinResult, JoinRoomRequest,
    ListEventsByTimestampResult, ListEventsResult, ListOptions, QuotedReplyRequest,
    SearchEventsRequest, ThreadedReplyRequest, UpdatesResult,
};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::session::ChatSession;
use crate::transport::{HttpRemote, RemoteApi};

/// Cloneable callback adapter sharing one [`ChatSession`].
pub struct CallbackSession<R = HttpRemote> {
    session: Arc<ChatSession<R>>,
    runtime: Handle,
}

impl<R> Clone for CallbackSession<R> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            runtime: self.runtime.clone(),
        }
    }
}

impl<R: RemoteApi + 'static> CallbackSession<R> {
    /// Must be called from inside a tokio runtime; use [`with_runtime`]
    /// otherwise.
    ///
    /// [`with_runtime`]: CallbackSession::with_runtime
    pub fn new(session: Arc<ChatSession<R>>) -> Self {
        Self::with_runtime(session, Handle::current())
    }

    pub fn with_runtime(session: Arc<ChatSession<R>>, runtime: Handle) -> Self {
        Self { session, runtime }
    }

    pub fn session(&self) -> &Arc<ChatSession<R>> {
        &self.session
    }

    fn dispatch<T, Op, Fut, F>(&self, op: Op, callback: F) -> JoinHandle<()>
    where
        Op: FnOnce(Arc<ChatSession<R>>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
        F: FnOnce(Result<T>) + Send + 'static,
    {
        let session = Arc::clone(&self.session);
        self.runtime.spawn(async move {
            let outcome = op(session).await;
            callback(outcome);
        })
    }

    pub fn join_room<F>(&self, room_id: &str, request: JoinRoomRequest, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<JoinResult>) + Send + 'static,
    {
        let room_id = room_id.to_string();
        self.dispatch(
            move |s| async move { s.join_room(&room_id, request).await },
            callback,
        )
    }

    pub fn join_room_by_custom_id<F>(
        &self,
        custom_id: &str,
        request: JoinRoomRequest,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<JoinResult>) + Send + 'static,
    {
        let custom_id = custom_id.to_string();
        self.dispatch(
            move |s| async move { s.join_room_by_custom_id(&custom_id, request).await },
            callback,
        )
    }

    pub fn exit_room<F>(&self, room_id: &str, user_id: &str, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<()>) + Send + 'static,
    {
        let room_id = room_id.to_string();
        let user_id = user_id.to_string();
        self.dispatch(
            move |s| async move { s.exit_room(&room_id, &user_id).await },
            callback,
        )
    }

    pub fn get_updates<F>(&self, room_id: &str, options: GetUpdatesOptions, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<UpdatesResult>) + Send + 'static,
    {
        let room_id = room_id.to_string();
        self.dispatch(
            move |s| async move { s.get_updates(&room_id, options).await },
            callback,
        )
    }

    pub fn list_previous_events<F>(&self, room_id: &str, options: ListOptions, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<ListEventsResult>) + Send + 'static,
    {
        let room_id = room_id.to_string();
        self.dispatch(
            move |s| async move { s.list_previous_events(&room_id, options).await },
            callback,
        )
    }

    pub fn list_events_history<F>(&self, room_id: &str, options: ListOptions, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<ListEventsResult>) + Send + 'static,
    {
        let room_id = room_id.to_string();
        self.dispatch(
            move |s| async move { s.list_events_history(&room_id, options).await },
            callback,
        )
    }

    pub fn list_events_by_type<F>(
        &self,
        room_id: &str,
        options: EventsByTypeOptions,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<ListEventsResult>) + Send + 'static,
    {
        let room_id = room_id.to_string();
        self.dispatch(
            move |s| async move { s.list_events_by_type(&room_id, options).await },
            callback,
        )
    }

    pub fn list_events_by_timestamp<F>(
        &self,
        room_id: &str,
        options: EventsByTimestampOptions,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<ListEventsByTimestampResult>) + Send + 'static,
    {
        let room_id = room_id.to_string();
        self.dispatch(
            move |s| async move { s.list_events_by_timestamp(&room_id, options).await },
            callback,
        )
    }

    pub fn search_event_history<F>(&self, request: SearchEventsRequest, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<ListEventsResult>) + Send + 'static,
    {
        self.dispatch(
            move |s| async move { s.search_event_history(request).await },
            callback,
        )
    }

    pub fn list_messages_by_user<F>(
        &self,
        room_id: &str,
        user_id: &str,
        options: ListOptions,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<ListEventsResult>) + Send + 'static,
    {
        let room_id = room_id.to_string();
        let user_id = user_id.to_string();
        self.dispatch(
            move |s| async move { s.list_messages_by_user(&room_id, &user_id, options).await },
            callback,
        )
    }

    pub fn execute_chat_command<F>(
        &self,
        room_id: &str,
        request: ExecuteCommandRequest,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<CommandResult>) + Send + 'static,
    {
        let room_id = room_id.to_string();
        self.dispatch(
            move |s| async move { s.execute_chat_command(&room_id, request).await },
            callback,
        )
    }

    pub fn send_threaded_reply<F>(
        &self,
        room_id: &str,
        reply_to: &str,
        request: ThreadedReplyRequest,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<ChatEvent>) + Send + 'static,
    {
        let room_id = room_id.to_string();
        let reply_to = reply_to.to_string();
        self.dispatch(
            move |s| async move { s.send_threaded_reply(&room_id, &reply_to, request).await },
            callback,
        )
    }

    pub fn send_quoted_reply<F>(
        &self,
        room_id: &str,
        reply_to: &str,
        request: QuotedReplyRequest,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<ChatEvent>) + Send + 'static,
    {
        let room_id = room_id.to_string();
        let reply_to = reply_to.to_string();
        self.dispatch(
            move |s| async move { s.send_quoted_reply(&room_id, &reply_to, request).await },
            callback,
        )
    }

    pub fn start_listening_to_chat_updates(&self, room_id: &str) {
        self.session.start_listening_to_chat_updates(room_id);
    }

    pub fn stop_listening_to_chat_updates(&self, room_id: &str) {
        self.session.stop_listening_to_chat_updates(room_id);
    }
}
