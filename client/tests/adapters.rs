mod common;

use std::sync::Arc;
use std::time::Duration;

use common::*;
use futures_util::StreamExt;
use sportstalk_client::{
    CallbackSession, ExecuteCommandRequest, GetUpdatesOptions, JoinRoomRequest, ReactiveSession,
};
use tokio::sync::oneshot;

#[tokio::test]
async fn test_callback_join_delivers_result_and_updates_session() {
    let remote = MockRemote::new();
    remote.respond(
        &join_path(ROOM),
        join_response("u1", "c1", vec![event("ev1", "u2", true)]),
    );
    let callbacks = CallbackSession::new(Arc::new(session(&remote)));

    let (tx, rx) = oneshot::channel();
    callbacks
        .join_room(ROOM, JoinRoomRequest::for_user("u1"), move |result| {
            let _ = tx.send(result);
        })
        .await
        .unwrap();

    let joined = rx.await.unwrap().unwrap();
    assert!(joined.events_cursor.unwrap().events.is_empty());
    assert_eq!(callbacks.session().room_cursor(ROOM).as_deref(), Some("c1"));
}

#[tokio::test]
async fn test_callback_receives_errors() {
    let remote = MockRemote::new();
    let callbacks = CallbackSession::new(Arc::new(session(&remote)));

    let (tx, rx) = oneshot::channel();
    callbacks.get_updates(ROOM, GetUpdatesOptions::default(), move |result| {
        let _ = tx.send(result);
    });

    let err = rx.await.unwrap().unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_aborted_join_leaves_session_untouched() {
    let remote = MockRemote::new();
    remote.hang(&join_path(ROOM));
    let callbacks = CallbackSession::new(Arc::new(session(&remote)));

    let handle = callbacks.join_room(ROOM, JoinRoomRequest::for_user("u1"), |_| {
        panic!("callback must not run for an aborted join");
    });

    while remote.call_count() == 0 {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    handle.abort();
    assert!(handle.await.unwrap_err().is_cancelled());

    let session = callbacks.session();
    assert!(!session.is_joined());
    assert!(session.current_user().is_none());
    assert_eq!(session.room_cursor(ROOM), None);
}

#[tokio::test]
async fn test_callbacks_share_one_throttle() {
    let remote = MockRemote::new();
    remote.respond(&command_path(ROOM), command_response("ev1", "u1", "hi"));
    let callbacks = CallbackSession::new(Arc::new(session(&remote)));
    let clone = callbacks.clone();

    let (tx1, rx1) = oneshot::channel();
    callbacks
        .execute_chat_command(ROOM, ExecuteCommandRequest::new("u1", "hi"), move |r| {
            let _ = tx1.send(r);
        })
        .await
        .unwrap();

    let (tx2, rx2) = oneshot::channel();
    clone
        .execute_chat_command(ROOM, ExecuteCommandRequest::new("u1", "hi"), move |r| {
            let _ = tx2.send(r);
        })
        .await
        .unwrap();

    assert!(rx1.await.unwrap().is_ok());
    assert!(rx2.await.unwrap().unwrap_err().is_throttled());
    assert_eq!(remote.calls_to(&command_path(ROOM)), 1);
}

#[tokio::test]
async fn test_reactive_stream_yields_single_item() {
    let remote = MockRemote::new();
    remote.respond(
        &join_path(ROOM),
        join_response("u1", "c1", vec![event("ev1", "u1", true), event("ev2", "u2", true)]),
    );
    let reactive = ReactiveSession::new(Arc::new(session(&remote)));

    let items: Vec<_> = reactive
        .join_room(ROOM, JoinRoomRequest::for_user("u1"))
        .collect()
        .await;

    assert_eq!(items.len(), 1);
    let joined = items.into_iter().next().unwrap().unwrap();
    let events = joined.events_cursor.unwrap().events;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "ev1");
}

#[tokio::test]
async fn test_reactive_is_lazy_until_polled() {
    let remote = MockRemote::new();
    remote.respond(&command_path(ROOM), command_response("ev1", "u1", "hi"));
    let reactive = ReactiveSession::new(Arc::new(session(&remote)));

    let stream = reactive.execute_chat_command(ROOM, ExecuteCommandRequest::new("u1", "hi"));
    assert_eq!(remote.call_count(), 0);
    drop(stream);
    assert_eq!(remote.call_count(), 0);

    // Dropped before polling, so the throttle never saw "hi".
    let mut stream = reactive.execute_chat_command(ROOM, ExecuteCommandRequest::new("u1", "hi"));
    assert!(stream.next().await.unwrap().is_ok());
    assert!(stream.next().await.is_none());
    assert_eq!(remote.call_count(), 1);
}

#[tokio::test]
async fn test_reactive_and_core_share_state() {
    let remote = MockRemote::new();
    remote.respond(&join_path(ROOM), join_response("u1", "c1", vec![]));
    remote.respond(&exit_path(ROOM), serde_json::json!({}));
    let shared = Arc::new(session(&remote));
    let reactive = ReactiveSession::new(Arc::clone(&shared));

    shared
        .join_room(ROOM, JoinRoomRequest::for_user("u1"))
        .await
        .unwrap();
    reactive
        .exit_room(ROOM, "u1")
        .next()
        .await
        .unwrap()
        .unwrap();

    assert!(!shared.is_joined());
}
