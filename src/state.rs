use std::cell::RefCell;
use std::rc::Rc;

use crate::messages::Message;
use crate::models::{Campaign, Conversation, Instance, OperatorProfile};
use crate::router::Route;
use crate::update::update;

/// Shared handle owned by the application root and lent to the router,
/// renderers and action handlers.  Never borrow across an `.await`.
pub type SharedState = Rc<RefCell<AppState>>;

/// Identity of one render: which navigation started it and for which
/// profile.  A result whose ticket is no longer current is stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTicket {
    pub generation: u64,
    pub route: Route,
    pub profile_id: Option<String>,
}

/// Session-only console state.  A page reload starts from scratch: the
/// profile list is fetched again and no profile is selected.
#[derive(Debug, Default)]
pub struct AppState {
    pub profiles: Vec<OperatorProfile>,
    active_profile_id: Option<String>,

    // Last fetched collections of the active profile
    pub instances: Vec<Instance>,
    pub conversations: Vec<Conversation>,
    pub campaigns: Vec<Campaign>,

    pub selected_conversation_id: Option<String>,
    pub active_route: Route,
    pub profile_menu_open: bool,

    render_generation: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedState {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn dispatch(&mut self, msg: Message) {
        update(self, msg);
    }

    pub fn active_profile_id(&self) -> Option<&str> {
        self.active_profile_id.as_deref()
    }

    /// The active profile record, or `None` when nothing is selected or the
    /// selected id is no longer in the list.
    pub fn active_profile(&self) -> Option<&OperatorProfile> {
        let id = self.active_profile_id.as_deref()?;
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Select `id` if the profile list contains it; otherwise leave the
    /// selection untouched.  Returns whether `id` is now active.
    pub fn select_profile(&mut self, id: &str) -> bool {
        if !self.profiles.iter().any(|p| p.id == id) {
            return false;
        }
        if self.active_profile_id.as_deref() != Some(id) {
            self.active_profile_id = Some(id.to_string());
            self.clear_profile_caches();
        }
        true
    }

    /// Replace the profile list, dropping a selection that no longer exists.
    pub fn set_profiles(&mut self, profiles: Vec<OperatorProfile>) {
        self.profiles = profiles;
        let still_present = self
            .active_profile_id
            .as_deref()
            .map_or(false, |id| self.profiles.iter().any(|p| p.id == id));
        if !still_present && self.active_profile_id.take().is_some() {
            self.clear_profile_caches();
        }
    }

    fn clear_profile_caches(&mut self) {
        self.instances.clear();
        self.conversations.clear();
        self.campaigns.clear();
        self.selected_conversation_id = None;
    }

    /// Start a render of `route`.  Any ticket handed out earlier becomes
    /// stale.
    pub fn begin_render(&mut self, route: Route) -> RenderTicket {
        self.render_generation += 1;
        self.active_route = route.clone();
        RenderTicket {
            generation: self.render_generation,
            route,
            profile_id: self.active_profile_id.clone(),
        }
    }

    /// Whether results fetched under `ticket` may still be shown.
    pub fn is_current(&self, ticket: &RenderTicket) -> bool {
        ticket.generation == self.render_generation
            && ticket.profile_id.as_deref() == self.active_profile_id.as_deref()
    }
}
