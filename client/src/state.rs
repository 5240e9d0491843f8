use std::collections::HashSet;
use std::time::Duration;

use sportstalk_protocol::{ChatRoom, JoinResult, User};

use crate::cursor::CursorStore;
use crate::throttle::CommandThrottle;

/// Everything a chat session remembers between calls.
///
/// `user` and `room` change together: both are set by [`enter`] and both are
/// cleared by [`leave`]. An anonymous join is the one case with a room but no
/// user.
///
/// [`enter`]: SessionState::enter
/// [`leave`]: SessionState::leave
#[derive(Debug)]
pub(crate) struct SessionState {
    pub user: Option<User>,
    pub room: Option<ChatRoom>,
    pub cursors: CursorStore,
    pub subscriptions: HashSet<String>,
    pub throttle: CommandThrottle,
}

impl SessionState {
    pub fn new(throttle_window: Duration) -> Self {
        Self {
            user: None,
            room: None,
            cursors: CursorStore::new(),
            subscriptions: HashSet::new(),
            throttle: CommandThrottle::new(throttle_window),
        }
    }

    /// Apply a successful join keyed by `room_key`.
    pub fn enter(&mut self, room_key: &str, result: &JoinResult) {
        self.user = result.user.clone();
        self.room = Some(result.room.clone());
        self.throttle.reset();
        self.cursors.set(room_key, result.cursor());
    }

    pub fn leave(&mut self, room_key: &str) {
        self.user = None;
        self.room = None;
        self.throttle.reset();
        self.cursors.clear(room_key);
    }

    /// Id of the user events are filtered for.
    pub fn viewer(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.user_id.as_str())
    }
}
