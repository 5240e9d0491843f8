use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use sportstalk_client::{
    ChatSession, ClientConfig, Error, ExecuteCommandRequest, GetUpdatesOptions, JoinRoomRequest,
    SportsTalkClient,
};
use tokio::net::TcpListener;

const TOKEN: &str = "secret-token";

fn envelope(code: u16, message: &str, data: Value) -> (StatusCode, Json<Value>) {
    let kind = if code < 400 { "api.result" } else { "api.error" };
    (
        StatusCode::from_u16(code).unwrap(),
        Json(json!({ "kind": kind, "message": message, "code": code, "data": data })),
    )
}

async fn join(
    Path((app, room)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if headers.get("x-api-token").and_then(|v| v.to_str().ok()) != Some(TOKEN) {
        return envelope(401, "Invalid API token", Value::Null);
    }
    assert_eq!(app, "my-app");

    let user = body["userid"].as_str().unwrap_or_default().to_string();
    envelope(
        200,
        "Success",
        json!({
            "kind": "chat.joinroom",
            "user": { "userid": user },
            "room": { "id": room },
            "eventscursor": {
                "cursor": "c1",
                "events": [
                    { "id": "ev1", "userid": "troll", "shadowban": true, "body": "spam" },
                    { "id": "ev2", "userid": user, "shadowban": false, "body": "hello" },
                ],
            },
        }),
    )
}

async fn updates(
    Path((_app, _room)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let cursor = query.get("cursor").cloned().unwrap_or_default();
    envelope(
        200,
        "Success",
        json!({
            "cursor": format!("{cursor}-next"),
            "more": false,
            "itemcount": 0,
            "events": [],
        }),
    )
}

async fn command() -> (StatusCode, &'static str) {
    (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>")
}

async fn room(Path((_app, room)): Path<(String, String)>) -> (StatusCode, Json<Value>) {
    envelope(404, &format!("Room {room} not found"), Value::Null)
}

async fn spawn_server() -> String {
    let app = Router::new()
        .route("/api/v3/{app}/chat/rooms/{room}/join", post(join))
        .route("/api/v3/{app}/chat/rooms/{room}/updates", get(updates))
        .route("/api/v3/{app}/chat/rooms/{room}/command", post(command))
        .route("/api/v3/{app}/chat/rooms/{room}", get(room));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api/v3")
}

fn config(endpoint: &str, token: &str) -> ClientConfig {
    ClientConfig::new("my-app", token).with_endpoint(endpoint)
}

#[tokio::test]
async fn test_join_over_http_filters_and_stores_cursor() {
    let endpoint = spawn_server().await;
    let session = ChatSession::new(&config(&endpoint, TOKEN)).unwrap();

    let joined = session
        .join_room("room 1", JoinRoomRequest::for_user("u1"))
        .await
        .unwrap();

    assert_eq!(joined.room.id, "room 1");
    let events = joined.events_cursor.unwrap().events;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "ev2");
    assert_eq!(session.room_cursor("room 1").as_deref(), Some("c1"));
}

#[tokio::test]
async fn test_query_parameters_reach_server() {
    let endpoint = spawn_server().await;
    let session = ChatSession::new(&config(&endpoint, TOKEN)).unwrap();

    let page = session
        .get_updates("room-1", GetUpdatesOptions::with_cursor("abc"))
        .await
        .unwrap();

    assert_eq!(page.cursor.as_deref(), Some("abc-next"));
}

#[tokio::test]
async fn test_bad_token_maps_to_remote_error() {
    let endpoint = spawn_server().await;
    let session = ChatSession::new(&config(&endpoint, "wrong")).unwrap();

    let err = session
        .join_room("room-1", JoinRoomRequest::for_user("u1"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Remote(ref e) if e.message == "Invalid API token"));
    assert_eq!(err.code(), 401);
    assert!(!session.is_joined());
}

#[tokio::test]
async fn test_unstructured_error_keeps_status() {
    let endpoint = spawn_server().await;
    let session = ChatSession::new(&config(&endpoint, TOKEN)).unwrap();

    let err = session
        .execute_chat_command("room-1", ExecuteCommandRequest::new("u1", "hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Remote(_)));
    assert_eq!(err.code(), 502);
}

#[tokio::test]
async fn test_passthrough_not_found() {
    let endpoint = spawn_server().await;
    let client = SportsTalkClient::new(&config(&endpoint, TOKEN)).unwrap();

    let err = client.get_room_details("missing").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_api_error().message, "Room missing not found");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SportsTalkClient::new(&config(&format!("http://{addr}/api/v3"), TOKEN)).unwrap();
    let err = client.get_room_details("room-1").await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.code(), 0);
}
