use std::collections::HashMap;

/// Last-seen event cursor per room, used to resume `get_updates` polling.
///
/// Keys are whatever the room was joined by: a room id, or a custom id for
/// `join_room_by_custom_id`.
#[derive(Debug, Clone, Default)]
pub struct CursorStore {
    cursors: HashMap<String, String>,
}

impl CursorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, room_id: &str) -> Option<&str> {
        self.cursors.get(room_id).map(String::as_str)
    }

    /// Overwrites whatever was stored. The cursor is taken as-is.
    pub fn set(&mut self, room_id: &str, cursor: impl Into<String>) {
        self.cursors.insert(room_id.to_string(), cursor.into());
    }

    pub fn clear(&mut self, room_id: &str) {
        self.cursors.remove(room_id);
    }
}
