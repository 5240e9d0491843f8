use anyhow::Result;
use sportstalk_client::{ClientConfig, ListOptions, SportsTalkClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let approve_all = std::env::args().any(|a| a == "--approve");

    let client = SportsTalkClient::new(&ClientConfig::from_env()?)?;

    let rooms = client.list_rooms(&ListOptions::new().limit(20)).await?;
    println!("{} rooms", rooms.rooms.len());
    for room in &rooms.rooms {
        println!(
            "  {} [{:?}] {} in room",
            room.name.as_deref().unwrap_or(&room.id),
            room.moderation,
            room.in_room
        );
    }

    let queue = client
        .list_messages_needing_moderation(None, &ListOptions::new())
        .await?;
    println!("{} events waiting for moderation", queue.events.len());

    for event in &queue.events {
        println!(
            "  [{}] {}: {}",
            event.id,
            event.user_id.as_deref().unwrap_or("?"),
            event.body
        );
        if approve_all {
            let decided = client.approve_message(&event.id, true).await?;
            println!("    -> {:?}", decided.moderation);
        }
    }

    Ok(())
}
