use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;
use super::transport::{ApiRequest, Method, Transport};
use crate::dialog::{self, Dialogs};
use crate::error_log;
use crate::models::{
    Campaign, CampaignInput, Conversation, ConversationInput, DashboardSummary, Instance,
    InstanceInput, OperatorProfile, ProfileInput, ReplyInput,
};

/// REST client for the bot backend.
///
/// Single choke point for backend calls: every failure is logged and shown
/// to the operator once, through the informational dialog, before it is
/// returned.  Callers only need to stop what they were doing.
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
    dialogs: Rc<dyn Dialogs>,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn Transport>, dialogs: Rc<dyn Dialogs>) -> Self {
        Self { transport, dialogs }
    }

    /// Issue one request and decode the JSON response into `T`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let request = ApiRequest {
            method,
            path: path.to_string(),
            body,
        };
        let outcome = match self.transport.send(&request).await {
            Ok(value) => serde_json::from_value(value).map_err(ApiError::from),
            Err(err) => Err(err),
        };
        if let Err(err) = &outcome {
            error_log!("API call failed: {} {}: {}", method.as_str(), path, err);
            dialog::alert(self.dialogs.as_ref(), &format!("Erro na API: {}", err)).await;
        }
        outcome
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.call(Method::Get, path, None).await
    }

    /// A mutation.  Views re-fetch afterwards, so the response body is
    /// kept as loose JSON: any shape the backend answers with is success.
    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body)?;
        self.call(method, path, Some(body)).await
    }

    /// Body-less mutation.
    async fn fire(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let _: Value = self.call(method, path, None).await?;
        Ok(())
    }

    // ---------------- Profiles ----------------

    pub async fn list_profiles(&self) -> Result<Vec<OperatorProfile>, ApiError> {
        self.get("/users").await
    }

    /// Returns the new profile's id when the response carries one.
    pub async fn create_profile(&self, input: &ProfileInput) -> Result<Option<String>, ApiError> {
        let created = self.send_json(Method::Post, "/users", input).await?;
        Ok(created.get("id").and_then(Value::as_str).map(str::to_string))
    }

    pub async fn update_profile(
        &self,
        profile_id: &str,
        input: &ProfileInput,
    ) -> Result<(), ApiError> {
        self.send_json(Method::Put, &format!("/users/{}", profile_id), input)
            .await?;
        Ok(())
    }

    pub async fn dashboard(&self, profile_id: &str) -> Result<DashboardSummary, ApiError> {
        self.get(&format!("/users/{}/dashboard", profile_id)).await
    }

    // ---------------- Instances ----------------

    pub async fn list_instances(&self, profile_id: &str) -> Result<Vec<Instance>, ApiError> {
        self.get(&format!("/users/{}/instances", profile_id)).await
    }

    pub async fn create_instance(
        &self,
        profile_id: &str,
        input: &InstanceInput,
    ) -> Result<(), ApiError> {
        self.send_json(Method::Post, &format!("/users/{}/instances", profile_id), input)
            .await?;
        Ok(())
    }

    pub async fn update_instance(
        &self,
        profile_id: &str,
        instance_id: &str,
        input: &InstanceInput,
    ) -> Result<(), ApiError> {
        let path = format!("/users/{}/instances/{}", profile_id, instance_id);
        self.send_json(Method::Put, &path, input).await?;
        Ok(())
    }

    pub async fn delete_instance(&self, profile_id: &str, instance_id: &str) -> Result<(), ApiError> {
        self.fire(
            Method::Delete,
            &format!("/users/{}/instances/{}", profile_id, instance_id),
        )
        .await
    }

    pub async fn reconnect_instance(&self, profile_id: &str, instance_id: &str) -> Result<(), ApiError> {
        self.fire(
            Method::Post,
            &format!("/users/{}/instances/{}/reconnect", profile_id, instance_id),
        )
        .await
    }

    pub async fn disconnect_instance(&self, profile_id: &str, instance_id: &str) -> Result<(), ApiError> {
        self.fire(
            Method::Post,
            &format!("/users/{}/instances/{}/disconnect", profile_id, instance_id),
        )
        .await
    }

    // ---------------- Conversations ----------------

    pub async fn list_conversations(&self, profile_id: &str) -> Result<Vec<Conversation>, ApiError> {
        self.get(&format!("/users/{}/conversations", profile_id)).await
    }

    pub async fn create_conversation(
        &self,
        profile_id: &str,
        input: &ConversationInput,
    ) -> Result<(), ApiError> {
        let path = format!("/users/{}/conversations", profile_id);
        self.send_json(Method::Post, &path, input).await?;
        Ok(())
    }

    pub async fn update_conversation(
        &self,
        profile_id: &str,
        conversation_id: &str,
        input: &ConversationInput,
    ) -> Result<(), ApiError> {
        let path = format!("/users/{}/conversations/{}", profile_id, conversation_id);
        self.send_json(Method::Put, &path, input).await?;
        Ok(())
    }

    pub async fn delete_conversation(
        &self,
        profile_id: &str,
        conversation_id: &str,
    ) -> Result<(), ApiError> {
        self.fire(
            Method::Delete,
            &format!("/users/{}/conversations/{}", profile_id, conversation_id),
        )
        .await
    }

    pub async fn send_reply(
        &self,
        profile_id: &str,
        conversation_id: &str,
        input: &ReplyInput,
    ) -> Result<(), ApiError> {
        let path = format!("/users/{}/conversations/{}/messages", profile_id, conversation_id);
        self.send_json(Method::Post, &path, input).await?;
        Ok(())
    }

    // ---------------- Campaigns ----------------

    pub async fn list_campaigns(&self, profile_id: &str) -> Result<Vec<Campaign>, ApiError> {
        self.get(&format!("/users/{}/campaigns", profile_id)).await
    }

    pub async fn create_campaign(
        &self,
        profile_id: &str,
        input: &CampaignInput,
    ) -> Result<(), ApiError> {
        let path = format!("/users/{}/campaigns", profile_id);
        self.send_json(Method::Post, &path, input).await?;
        Ok(())
    }

    pub async fn update_campaign(
        &self,
        profile_id: &str,
        campaign_id: &str,
        input: &CampaignInput,
    ) -> Result<(), ApiError> {
        let path = format!("/users/{}/campaigns/{}", profile_id, campaign_id);
        self.send_json(Method::Put, &path, input).await?;
        Ok(())
    }

    pub async fn delete_campaign(&self, profile_id: &str, campaign_id: &str) -> Result<(), ApiError> {
        self.fire(
            Method::Delete,
            &format!("/users/{}/campaigns/{}", profile_id, campaign_id),
        )
        .await
    }
}
