use sportstalk_protocol::{
    ApiRequest, BounceUserRequest, BounceUserResult, ChatRoom, CreateRoomRequest,
    DeleteRoomResult, Endpoint, ListOptions, ListParticipantsResult, ListRoomsResult,
    MuteUserRequest, UpdateRoomRequest,
};

use super::SportsTalkClient;
use crate::error::Result;
use crate::transport::RemoteApi;

impl<R: RemoteApi> SportsTalkClient<R> {
    pub async fn create_room(&self, request: &CreateRoomRequest) -> Result<ChatRoom> {
        self.send_json(Endpoint::CreateRoom, request).await
    }

    pub async fn get_room_details(&self, room_id: &str) -> Result<ChatRoom> {
        self.send(ApiRequest::new(Endpoint::GetRoom {
            room_id: room_id.to_string(),
        }))
        .await
    }

    pub async fn get_room_details_by_custom_id(&self, custom_id: &str) -> Result<ChatRoom> {
        self.send(ApiRequest::new(Endpoint::GetRoomByCustomId {
            custom_id: custom_id.to_string(),
        }))
        .await
    }

    pub async fn update_room(&self, room_id: &str, request: &UpdateRoomRequest) -> Result<ChatRoom> {
        let endpoint = Endpoint::UpdateRoom {
            room_id: room_id.to_string(),
        };
        self.send_json(endpoint, request).await
    }

    pub async fn list_rooms(&self, options: &ListOptions) -> Result<ListRoomsResult> {
        self.send(options.apply(ApiRequest::new(Endpoint::ListRooms)))
            .await
    }

    pub async fn list_room_participants(
        &self,
        room_id: &str,
        options: &ListOptions,
    ) -> Result<ListParticipantsResult> {
        let request = options.apply(ApiRequest::new(Endpoint::ListParticipants {
            room_id: room_id.to_string(),
        }));
        self.send(request).await
    }

    pub async fn delete_room(&self, room_id: &str) -> Result<DeleteRoomResult> {
        self.send(ApiRequest::new(Endpoint::DeleteRoom {
            room_id: room_id.to_string(),
        }))
        .await
    }

    /// Remove a user from a room and keep them out until unbounced.
    pub async fn bounce_user(
        &self,
        room_id: &str,
        request: &BounceUserRequest,
    ) -> Result<BounceUserResult> {
        let endpoint = Endpoint::BounceUser {
            room_id: room_id.to_string(),
        };
        self.send_json(endpoint, request).await
    }

    pub async fn mute_user_in_room(
        &self,
        room_id: &str,
        request: &MuteUserRequest,
    ) -> Result<ChatRoom> {
        let endpoint = Endpoint::MuteUser {
            room_id: room_id.to_string(),
        };
        self.send_json(endpoint, request).await
    }
}
