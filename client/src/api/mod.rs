//! Typed wrappers, one method per SportsTalk endpoint.
//!
//! Nothing here holds state beyond the transport. The stateful chat layer
//! lives in [`crate::session`].

mod chat;
mod comments;
mod moderation;
mod rooms;
mod users;

use serde::Serialize;
use serde::de::DeserializeOwned;
use sportstalk_protocol::{ApiRequest, Endpoint};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::transport::{HttpRemote, RemoteApi};

/// Stateless SportsTalk API client.
#[derive(Debug, Clone)]
pub struct SportsTalkClient<R = HttpRemote> {
    remote: R,
}

impl SportsTalkClient<HttpRemote> {
    /// Build a client that talks HTTP to the configured endpoint.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_remote(HttpRemote::new(config)?))
    }
}

impl<R: RemoteApi> SportsTalkClient<R> {
    pub fn with_remote(remote: R) -> Self {
        Self { remote }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let data = self.remote.call(request).await?;
        Ok(serde_json::from_value(data)?)
    }

    async fn send_json<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let request = ApiRequest::new(endpoint).json(body)?;
        self.send(request).await
    }
}
