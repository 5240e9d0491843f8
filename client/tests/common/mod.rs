#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use sportstalk_client::{ApiError, ApiRequest, ChatSession, RemoteApi, Result, SportsTalkClient};

pub const ROOM: &str = "room-1";
pub const WINDOW: Duration = Duration::from_secs(20);

/// Records every request and answers from a table keyed by path.
#[derive(Default)]
pub struct MockRemote {
    responses: Mutex<HashMap<String, std::result::Result<Value, ApiError>>>,
    hanging: Mutex<HashSet<String>>,
    calls: Mutex<Vec<ApiRequest>>,
}

impl MockRemote {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, path: &str, data: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), Ok(data));
    }

    pub fn fail(&self, path: &str, error: ApiError) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), Err(error));
    }

    /// Requests to `path` never complete.
    pub fn hang(&self, path: &str) {
        self.hanging.lock().unwrap().insert(path.to_string());
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.endpoint.path() == path)
            .count()
    }
}

#[async_trait]
impl RemoteApi for MockRemote {
    async fn call(&self, request: ApiRequest) -> Result<Value> {
        let path = request.endpoint.path();
        self.calls.lock().unwrap().push(request);

        let hangs = self.hanging.lock().unwrap().contains(&path);
        if hangs {
            std::future::pending::<()>().await;
        }

        let canned = self.responses.lock().unwrap().get(&path).cloned();
        match canned {
            Some(Ok(data)) => Ok(data),
            Some(Err(e)) => Err(e.into()),
            None => Err(ApiError::new("api.error", format!("no route for {path}"), 404).into()),
        }
    }
}

pub fn session(remote: &Arc<MockRemote>) -> ChatSession<Arc<MockRemote>> {
    ChatSession::with_client(SportsTalkClient::with_remote(Arc::clone(remote)), WINDOW)
}

pub fn event(id: &str, author: &str, shadowban: bool) -> Value {
    json!({
        "kind": "chat.event",
        "id": id,
        "roomid": ROOM,
        "body": format!("body of {id}"),
        "eventtype": "speech",
        "userid": author,
        "active": true,
        "shadowban": shadowban,
    })
}

pub fn page(cursor: &str, events: Vec<Value>) -> Value {
    json!({
        "kind": "list.chatevents",
        "cursor": cursor,
        "more": false,
        "itemcount": events.len(),
        "events": events,
    })
}

pub fn join_response(user: &str, cursor: &str, events: Vec<Value>) -> Value {
    json!({
        "kind": "chat.joinroom",
        "user": { "kind": "app.user", "userid": user, "handle": format!("{user}-handle") },
        "room": { "kind": "chat.room", "id": ROOM, "name": "Test Room", "open": true },
        "eventscursor": page(cursor, events),
    })
}

pub fn command_response(id: &str, user: &str, body: &str) -> Value {
    json!({
        "kind": "chat.executecommand",
        "op": "speech",
        "speech": {
            "id": id,
            "roomid": ROOM,
            "body": body,
            "eventtype": "speech",
            "userid": user,
            "active": true,
        },
    })
}

pub fn join_path(room: &str) -> String {
    format!("chat/rooms/{room}/join")
}

pub fn exit_path(room: &str) -> String {
    format!("chat/rooms/{room}/exit")
}

pub fn command_path(room: &str) -> String {
    format!("chat/rooms/{room}/command")
}
