// src/update.rs
//
// The single reducer for `AppState`.  Pure state changes only: network and
// DOM side-effects belong to the caller.
//
use crate::debug_log;
use crate::messages::Message;
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) {
    match msg {
        Message::ProfilesLoaded(profiles) => {
            debug_log!("profiles loaded: {}", profiles.len());
            state.set_profiles(profiles);
        }
        Message::SelectProfile(id) => {
            if !state.select_profile(&id) {
                debug_log!("ignoring selection of unknown profile {}", id);
            }
        }
        Message::ToggleProfileMenu(force) => {
            state.profile_menu_open = force.unwrap_or(!state.profile_menu_open);
        }
        Message::SelectConversation(id) => {
            state.selected_conversation_id = id;
        }
        Message::InstancesLoaded(instances) => {
            state.instances = instances;
        }
        Message::ConversationsLoaded(conversations) => {
            let selection_survives = state
                .selected_conversation_id
                .as_deref()
                .map_or(true, |selected| conversations.iter().any(|c| c.id == selected));
            if !selection_survives {
                state.selected_conversation_id = None;
            }
            state.conversations = conversations;
        }
        Message::CampaignsLoaded(campaigns) => {
            state.campaigns = campaigns;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Conversation;

    fn conversation(id: &str) -> Conversation {
        serde_json::from_value(serde_json::json!({"id": id, "instance_id": "i1"})).unwrap()
    }

    #[test]
    fn menu_toggle_and_force() {
        let mut state = AppState::new();
        update(&mut state, Message::ToggleProfileMenu(None));
        assert!(state.profile_menu_open);
        update(&mut state, Message::ToggleProfileMenu(Some(true)));
        assert!(state.profile_menu_open);
        update(&mut state, Message::ToggleProfileMenu(None));
        assert!(!state.profile_menu_open);
    }

    #[test]
    fn reloaded_conversations_drop_deleted_selection() {
        let mut state = AppState::new();
        update(&mut state, Message::SelectConversation(Some("c9".into())));
        update(&mut state, Message::ConversationsLoaded(vec![conversation("c1")]));
        assert_eq!(state.selected_conversation_id, None);

        update(&mut state, Message::SelectConversation(Some("c1".into())));
        update(&mut state, Message::ConversationsLoaded(vec![conversation("c1")]));
        assert_eq!(state.selected_conversation_id.as_deref(), Some("c1"));
    }
}
