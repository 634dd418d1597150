//! Profile switcher in the sidebar footer.

use crate::constants::MISSING_VALUE;
use crate::state::AppState;

use super::page::{ActionButton, ButtonStyle, ViewAction};

pub const NO_PROFILE_NAME: &str = "Sem usuário";
pub const EMPTY_LIST: &str = "Nenhum usuário criado.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEntry {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSwitcher {
    pub name: String,
    pub handle: String,
    pub entries: Vec<ProfileEntry>,
    pub actions: Vec<ActionButton>,
}

pub fn switcher(state: &AppState) -> ProfileSwitcher {
    let active_id = state.active_profile_id();
    let (name, handle) = match state.active_profile() {
        Some(p) => (p.name.clone(), format!("@{}", p.username)),
        None => (NO_PROFILE_NAME.to_string(), MISSING_VALUE.to_string()),
    };

    ProfileSwitcher {
        name,
        handle,
        entries: state
            .profiles
            .iter()
            .map(|p| ProfileEntry {
                id: p.id.clone(),
                name: p.name.clone(),
                handle: format!("@{}", p.username),
                active: Some(p.id.as_str()) == active_id,
            })
            .collect(),
        actions: vec![
            ActionButton::new(
                "Novo usuário",
                "fas fa-user-plus",
                ButtonStyle::Primary,
                ViewAction::NewProfile,
            ),
            ActionButton::new(
                "Configurar usuário",
                "fas fa-user-cog",
                ButtonStyle::Edit,
                ViewAction::EditProfile,
            ),
        ],
    }
}
