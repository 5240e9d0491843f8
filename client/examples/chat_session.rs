use std::time::Duration;

use anyhow::Result;
use sportstalk_client::{
    ChatEvent, ChatSession, ClientConfig, ExecuteCommandRequest, GetUpdatesOptions,
    JoinRoomRequest,
};
use sportstalk_protocol::event::parse_custom_payload;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sportstalk_client=info".parse()?))
        .init();

    let room = std::env::var("SPORTSTALK_ROOM")?;
    let user = std::env::var("SPORTSTALK_USER").unwrap_or_else(|_| "demo-user".to_string());

    let config = ClientConfig::from_env()?;
    let session = ChatSession::new(&config)?;

    let joined = session
        .join_room(&room, JoinRoomRequest::for_user(&user).handle(&user))
        .await?;
    println!(
        "Joined {} as {}",
        joined.room.name.as_deref().unwrap_or(&joined.room.id),
        joined.user.as_ref().map(|u| u.label()).unwrap_or(&user)
    );
    if let Some(page) = &joined.events_cursor {
        page.events.iter().for_each(print_event);
    }

    session
        .execute_chat_command(&room, ExecuteCommandRequest::new(&user, "Hello from Rust"))
        .await?;

    // Sending the same text again right away is refused locally.
    if let Err(e) = session
        .execute_chat_command(&room, ExecuteCommandRequest::new(&user, "Hello from Rust"))
        .await
    {
        println!("Second send refused: {e}");
    }

    session.start_listening_to_chat_updates(&room);

    let mut ticker = tokio::time::interval(Duration::from_secs(2));
    for _ in 0..5 {
        ticker.tick().await;
        if !session.is_listening(&room) {
            break;
        }

        let cursor = session.room_cursor(&room).unwrap_or_default();
        match session
            .get_updates(&room, GetUpdatesOptions::with_cursor(cursor))
            .await
        {
            Ok(page) => {
                page.events.iter().for_each(print_event);
                if let Some(next) = page.cursor.as_deref().filter(|c| !c.is_empty()) {
                    session.set_room_cursor(&room, next);
                }
            }
            Err(e) => warn!(error = %e, "Polling failed"),
        }
    }

    session.stop_listening_to_chat_updates(&room);
    session.exit_room(&room, &user).await?;
    info!("Done");

    Ok(())
}

fn print_event(event: &ChatEvent) {
    let author = event
        .user
        .as_ref()
        .map(|u| u.label())
        .or(event.user_id.as_deref())
        .unwrap_or("?");
    println!("  {author}: {}", event.body);

    if let Some(payload) = parse_custom_payload(event) {
        println!("    payload: {payload}");
    }
}
