// src/messages.rs
//
// Every state change the console can make.  Applied by `update::update`.
//
use crate::models::{Campaign, Conversation, Instance, OperatorProfile};

#[derive(Debug, Clone)]
pub enum Message {
    // Profiles
    ProfilesLoaded(Vec<OperatorProfile>),
    SelectProfile(String),
    ToggleProfileMenu(Option<bool>),

    // Messages view
    SelectConversation(Option<String>),

    // Cached collections, always whole lists from a fresh fetch
    InstancesLoaded(Vec<Instance>),
    ConversationsLoaded(Vec<Conversation>),
    CampaignsLoaded(Vec<Campaign>),
}
