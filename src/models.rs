//! Wire types of the backend REST API.
//!
//! Every record is backend-owned; the console only caches and displays
//! them.  Timestamps are kept as the raw strings the backend sends (naive
//! ISO-8601 in UTC) and parsed on demand by [`crate::utils::parse_timestamp`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorProfile {
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    pub name: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceStatus {
    Active,
    Pending,
    Offline,
}

impl Default for InstanceStatus {
    fn default() -> Self {
        InstanceStatus::Pending
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceMetrics {
    #[serde(default)]
    pub today: u64,
    #[serde(default)]
    pub groups: u64,
}

/// A connected WhatsApp number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub status: InstanceStatus,
    #[serde(default)]
    pub last_access: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub metrics: InstanceMetrics,
}

impl Instance {
    /// `name • phone`, the label used by instance pickers.
    pub fn picker_label(&self) -> String {
        if self.phone.is_empty() {
            self.name.clone()
        } else {
            format!("{} • {}", self.name, self.phone)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceInput {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `"me"` for operator-sent messages, otherwise the contact name.
    pub from_user: String,
    pub text: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub status: String,
}

impl ChatMessage {
    pub fn is_outgoing(&self) -> bool {
        self.from_user == "me"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub instance_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub unread: u32,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationInput {
    pub instance_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyInput {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Active,
    Completed,
    Paused,
}

impl Default for CampaignStatus {
    fn default() -> Self {
        CampaignStatus::Draft
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
    pub instance_id: String,
    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(default)]
    pub target_groups: Vec<String>,
    #[serde(default)]
    pub scheduled_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignInput {
    pub name: String,
    pub message: String,
    pub instance_id: String,
    pub target_groups: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    #[serde(default)]
    pub total_instances: u64,
    #[serde(default)]
    pub active_instances: u64,
    #[serde(default)]
    pub total_conversations: u64,
    #[serde(default)]
    pub unread_messages: u64,
    #[serde(default)]
    pub active_campaigns: u64,
    #[serde(default)]
    pub messages_today: u64,
}

/// Body of `GET /users/{id}/dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub user: Option<OperatorProfile>,
    pub metrics: DashboardMetrics,
}
