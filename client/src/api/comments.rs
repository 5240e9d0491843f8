use sportstalk_protocol::{
    ApiRequest, Comment, CommentReactionRequest, Conversation, CreateCommentRequest,
    CreateConversationRequest, DeleteCommentResult, DeleteConversationResult, Endpoint,
    ListCommentsOptions, ListCommentsResult, ListConversationsResult, ListOptions, Vote,
    VoteRequest,
};

use super::SportsTalkClient;
use crate::error::Result;
use crate::transport::RemoteApi;

impl<R: RemoteApi> SportsTalkClient<R> {
    pub async fn create_or_update_conversation(
        &self,
        request: &CreateConversationRequest,
    ) -> Result<Conversation> {
        self.send_json(Endpoint::CreateConversation, request).await
    }

    pub async fn get_conversation(&self, conversation_id: &str) -> Result<Conversation> {
        self.send(ApiRequest::new(Endpoint::GetConversation {
            conversation_id: conversation_id.to_string(),
        }))
        .await
    }

    /// Conversations attached to `property`, or all of them when `None`.
    pub async fn list_conversations(
        &self,
        property: Option<&str>,
        options: &ListOptions,
    ) -> Result<ListConversationsResult> {
        let request =
            ApiRequest::new(Endpoint::ListConversations).optional_query("propertyid", property);
        self.send(options.apply(request)).await
    }

    pub async fn delete_conversation(
        &self,
        conversation_id: &str,
    ) -> Result<DeleteConversationResult> {
        self.send(ApiRequest::new(Endpoint::DeleteConversation {
            conversation_id: conversation_id.to_string(),
        }))
        .await
    }

    pub async fn create_comment(
        &self,
        conversation_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<Comment> {
        let endpoint = Endpoint::CreateComment {
            conversation_id: conversation_id.to_string(),
        };
        self.send_json(endpoint, request).await
    }

    pub async fn get_comment(&self, conversation_id: &str, comment_id: &str) -> Result<Comment> {
        self.send(ApiRequest::new(Endpoint::GetComment {
            conversation_id: conversation_id.to_string(),
            comment_id: comment_id.to_string(),
        }))
        .await
    }

    pub async fn list_comments(
        &self,
        conversation_id: &str,
        options: &ListCommentsOptions,
    ) -> Result<ListCommentsResult> {
        let request = options.apply(ApiRequest::new(Endpoint::ListComments {
            conversation_id: conversation_id.to_string(),
        }));
        self.send(request).await
    }

    pub async fn reply_to_comment(
        &self,
        conversation_id: &str,
        comment_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<Comment> {
        let endpoint = Endpoint::ReplyToComment {
            conversation_id: conversation_id.to_string(),
            comment_id: comment_id.to_string(),
        };
        self.send_json(endpoint, request).await
    }

    pub async fn list_replies(
        &self,
        conversation_id: &str,
        comment_id: &str,
        options: &ListCommentsOptions,
    ) -> Result<ListCommentsResult> {
        let request = options.apply(ApiRequest::new(Endpoint::ListReplies {
            conversation_id: conversation_id.to_string(),
            comment_id: comment_id.to_string(),
        }));
        self.send(request).await
    }

    pub async fn delete_comment(
        &self,
        conversation_id: &str,
        comment_id: &str,
        user_id: &str,
    ) -> Result<DeleteCommentResult> {
        let request = ApiRequest::new(Endpoint::DeleteComment {
            conversation_id: conversation_id.to_string(),
            comment_id: comment_id.to_string(),
        })
        .query("userid", user_id);
        self.send(request).await
    }

    pub async fn react_to_comment(
        &self,
        conversation_id: &str,
        comment_id: &str,
        request: &CommentReactionRequest,
    ) -> Result<Comment> {
        let endpoint = Endpoint::ReactToComment {
            conversation_id: conversation_id.to_string(),
            comment_id: comment_id.to_string(),
        };
        self.send_json(endpoint, request).await
    }

    pub async fn vote_on_comment(
        &self,
        conversation_id: &str,
        comment_id: &str,
        user_id: &str,
        vote: Vote,
    ) -> Result<Comment> {
        let endpoint = Endpoint::VoteOnComment {
            conversation_id: conversation_id.to_string(),
            comment_id: comment_id.to_string(),
        };
        let body = VoteRequest {
            vote,
            user_id: user_id.to_string(),
        };
        self.send_json(endpoint, &body).await
    }
}
