//! Async client for the SportsTalk chat and comments API.
//!
//! [`SportsTalkClient`] is a thin, stateless wrapper with one method per
//! endpoint. [`ChatSession`] sits on top of it and tracks the joined room,
//! resume cursors, shadowban visibility and duplicate-command throttling.
//! [`CallbackSession`] and [`ReactiveSession`] expose the same session to
//! callers that prefer callbacks or streams.
//!
//! ```no_run
//! use sportstalk_client::{ChatSession, ClientConfig, ExecuteCommandRequest, JoinRoomRequest};
//!
//! # async fn run() -> sportstalk_client::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let session = ChatSession::new(&config)?;
//!
//! let joined = session
//!     .join_room("room-id", JoinRoomRequest::for_user("user-1"))
//!     .await?;
//! println!("resume from {}", joined.cursor());
//!
//! session
//!     .execute_chat_command("room-id", ExecuteCommandRequest::new("user-1", "hello"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod callback;
pub mod config;
pub mod cursor;
pub mod error;
pub mod reactive;
pub mod session;
pub mod shadowban;
mod state;
pub mod throttle;
pub mod transport;

pub use api::SportsTalkClient;
pub use callback::CallbackSession;
pub use config::ClientConfig;
pub use cursor::CursorStore;
pub use error::{Error, Result};
pub use reactive::ReactiveSession;
pub use session::ChatSession;
pub use shadowban::{filter_shadowbanned, strip_hidden_quotes};
pub use throttle::CommandThrottle;
pub use transport::{HttpRemote, RemoteApi};

pub use sportstalk_protocol::{
    ApiError, ApiRequest, ChatEvent, ChatRoom, CommandOp, CommandResult, Endpoint, HttpMethod,
    EventsByTimestampOptions, EventsByTypeOptions, ExecuteCommandRequest, GetUpdatesOptions,
    JoinResult, JoinRoomRequest, ListEventsResult, ListOptions, QuotedReplyRequest,
    SearchEventsRequest, ThreadedReplyRequest, UpdatesResult, User,
};
