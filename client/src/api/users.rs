use sportstalk_protocol::{
    ApiRequest, CreateUpdateUserRequest, DeleteUserResult, Endpoint, ListOptions,
    ListUsersResult, SearchUsersRequest, SetBanStatusRequest, SetShadowbanStatusRequest, User,
};

use super::SportsTalkClient;
use crate::error::Result;
use crate::transport::RemoteApi;

impl<R: RemoteApi> SportsTalkClient<R> {
    pub async fn create_or_update_user(
        &self,
        user_id: &str,
        request: &CreateUpdateUserRequest,
    ) -> Result<User> {
        let endpoint = Endpoint::CreateOrUpdateUser {
            user_id: user_id.to_string(),
        };
        self.send_json(endpoint, request).await
    }

    pub async fn get_user_details(&self, user_id: &str) -> Result<User> {
        self.send(ApiRequest::new(Endpoint::GetUser {
            user_id: user_id.to_string(),
        }))
        .await
    }

    pub async fn list_users(&self, options: &ListOptions) -> Result<ListUsersResult> {
        self.send(options.apply(ApiRequest::new(Endpoint::ListUsers)))
            .await
    }

    pub async fn search_users(&self, request: &SearchUsersRequest) -> Result<ListUsersResult> {
        self.send_json(Endpoint::SearchUsers, request).await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<DeleteUserResult> {
        self.send(ApiRequest::new(Endpoint::DeleteUser {
            user_id: user_id.to_string(),
        }))
        .await
    }

    pub async fn set_banned_status(
        &self,
        user_id: &str,
        request: &SetBanStatusRequest,
    ) -> Result<User> {
        let endpoint = Endpoint::SetBanStatus {
            user_id: user_id.to_string(),
        };
        self.send_json(endpoint, request).await
    }

    /// Shadowbanned users keep chatting but only they see their messages.
    pub async fn set_shadowban_status(
        &self,
        user_id: &str,
        request: &SetShadowbanStatusRequest,
    ) -> Result<User> {
        let endpoint = Endpoint::SetShadowbanStatus {
            user_id: user_id.to_string(),
        };
        self.send_json(endpoint, request).await
    }
}
